//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders static copy from `content` and gates its entrance
//! animation on a reveal signal. Shared scroll state arrives through Leptos
//! context; everything else is local to the component.

pub mod about;
pub mod common;
pub mod contact;
pub mod editorial;
pub mod footer;
pub mod hero;
pub mod journals;
pub mod mission;
pub mod navbar;
pub mod vision;
