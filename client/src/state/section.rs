//! Page section identifiers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each id is both the `id` attribute of a `<section>` (the in-page anchor
//! target) and the key the navigation highlighter matches against.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use std::fmt;
use std::str::FromStr;

/// Anchorable page regions, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Vision,
    Mission,
    Journals,
    Editorial,
    Contact,
}

/// Returned when a string does not name a page section.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Vision,
        SectionId::Mission,
        SectionId::Journals,
        SectionId::Editorial,
        SectionId::Contact,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Vision => "vision",
            Self::Mission => "mission",
            Self::Journals => "journals",
            Self::Editorial => "editorial",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Vision => "Vision",
            Self::Mission => "Mission",
            Self::Journals => "Journals",
            Self::Editorial => "Editorial",
            Self::Contact => "Contact",
        }
    }

    /// `href` for an in-page link, e.g. `#about`.
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Parse a location hash (`#about` or `about`).
    ///
    /// # Errors
    ///
    /// Returns `UnknownSection` if the hash names no section.
    pub fn from_anchor(hash: &str) -> Result<Self, UnknownSection> {
        hash.strip_prefix('#').unwrap_or(hash).parse()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}
