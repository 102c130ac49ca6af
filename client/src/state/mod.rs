//! Interaction state machines.
//!
//! DESIGN
//! ======
//! Plain structs with no DOM access, wrapped in `RwSignal`s by components.
//! Browser effects (timers, observers, measurement) live in `util` and call
//! back into these types.

pub mod contact;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod section;
