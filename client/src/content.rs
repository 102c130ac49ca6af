//! Static page copy: journals, editorial team, highlights, registration ids.
//!
//! Components render these as opaque display data; nothing here is
//! validated or mutated at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::section::SectionId;

pub const ORG_NAME: &str = "Universal Oneness in Research Association";
pub const ORG_SHORT: &str = "UORA";

/// Where an external link opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkTarget {
    NewTab,
    #[default]
    SameTab,
}

impl LinkTarget {
    /// `window.open` / `<a target>` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
            Self::SameTab => "_self",
        }
    }
}

// =============================================================================
// HERO
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_EYEBROW: &str = "Welcome to";
pub const HERO_TITLE_LINES: [&str; 2] = ["Universal Oneness", "Research Association"];
pub const HERO_TAGLINE: &str =
    "Advancing Knowledge in Science, Technology, Management, Arts, Medical Sciences, and Beyond.";
pub const HERO_EXPLORE_HREF: &str = "https://www.google.com";

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Journals" },
    Stat { value: "100+", label: "Publications" },
    Stat { value: "25+", label: "Fields" },
    Stat { value: "Global", label: "Reach" },
];

// =============================================================================
// ABOUT / VISION / MISSION
// =============================================================================

/// Icon card used by About highlights and Vision points.
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Accent gradient class suffix, e.g. `blue-teal`.
    pub accent: &'static str,
}

pub const ABOUT_TEXT: &str = "Established in May 2025, Universal Oneness in Research Association (UORA) is a \
    multidisciplinary organization committed to advancing knowledge across Science, Technology, Management, Arts, \
    Medical Sciences, and allied fields. UORA publishes high-quality peer-reviewed journals, print books, e-books, \
    international journals, question banks, and study materials, serving the global academic and research community.";

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Multidisciplinary Publishing",
        description: "Publishes high-quality peer-reviewed journals, books, e-books, and study materials across \
            Science, Technology, Management, Arts, and Medical Sciences.",
        icon: "📚",
        accent: "blue-teal",
    },
    Highlight {
        title: "Consultancy Services",
        description: "Provides expert guidance for academic research, project documentation, and comprehensive \
            report preparation for global organizations.",
        icon: "💼",
        accent: "teal-blue",
    },
    Highlight {
        title: "Ethical Standards",
        description: "Ensures rigorous peer review and ethical publishing practices, fostering credible and \
            impactful scholarly work.",
        icon: "⚖️",
        accent: "purple-pink",
    },
    Highlight {
        title: "Global Impact",
        description: "Serves the worldwide academic and research community through innovation, sustainability, \
            and knowledge sharing.",
        icon: "🌍",
        accent: "green-teal",
    },
];

pub const VISION_TEXT: &str = "To become a leading global organization fostering knowledge creation, innovation, \
    and academic excellence across multidisciplinary fields, while promoting ethical research, sustainability, and \
    inclusive development.";

pub const VISION_POINTS: &[Highlight] = &[
    Highlight {
        title: "Knowledge Creation",
        description: "Fostering innovative research and scholarly work across diverse disciplines.",
        icon: "📚",
        accent: "blue-teal",
    },
    Highlight {
        title: "Ethical Research",
        description: "Promoting integrity, transparency, and ethical standards in all academic endeavors.",
        icon: "⚖️",
        accent: "teal-blue",
    },
    Highlight {
        title: "Global Impact",
        description: "Creating sustainable solutions with worldwide reach and significance.",
        icon: "🌍",
        accent: "green-teal",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct MissionItem {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const MISSIONS: &[MissionItem] = &[
    MissionItem {
        text: "To publish high-quality peer-reviewed journals, books, and study materials across Science, \
            Technology, Management, Arts, Medical Sciences, and allied disciplines.",
        icon: "📚",
    },
    MissionItem {
        text: "To provide consultancy services in academic research, project documentation, and comprehensive \
            report preparation for organizations and institutions.",
        icon: "💼",
    },
    MissionItem {
        text: "To ensure ethical publishing practices, rigorous peer-review standards, and dissemination of \
            credible scholarly work.",
        icon: "⚖️",
    },
    MissionItem {
        text: "To support researchers, educators, and institutions in generating impactful knowledge and \
            promoting lifelong learning.",
        icon: "🎓",
    },
    MissionItem {
        text: "To contribute to the global academic and research community through collaboration, innovation, \
            and knowledge sharing.",
        icon: "🌍",
    },
];

// =============================================================================
// JOURNALS
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Journal {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
}

pub const JOURNALS_INTRO: &str = "UORA publishes high-quality, peer-reviewed journals across diverse disciplines, \
    promoting innovative research and knowledge dissemination.";

pub const JOURNALS: &[Journal] = &[
    Journal {
        title: "Universal Journal of Green SciTech & Management (UJGSM)",
        subtitle: "Science, Technology & Management",
        description: "A peer-reviewed journal publishing cutting-edge research in sustainable technologies and \
            management practices.",
        icon: "🔬",
        accent: "blue-teal",
        href: "https://rohitagrawal7.github.io/journal-website/",
        target: LinkTarget::NewTab,
    },
    Journal {
        title: "GreenTech Innovative Society (GTIS)",
        subtitle: "Science, Technology & Green Innovations",
        description: "Dedicated to innovative solutions for sustainable development and green technology \
            advancements.",
        icon: "🌿",
        accent: "teal-green",
        href: "https://rohitagrawal7.github.io/journal-website/gtis",
        target: LinkTarget::NewTab,
    },
    Journal {
        title: "Journal of Advanced Medical Sciences (JAMS)",
        subtitle: "Medical Research & Healthcare Innovations",
        description: "Publishing groundbreaking research in medical sciences and healthcare technologies.",
        icon: "⚕️",
        accent: "green-blue",
        href: "https://rohitagrawal7.github.io/journal-website/jams",
        target: LinkTarget::NewTab,
    },
    Journal {
        title: "Arts & Cultural Studies Review (ACSR)",
        subtitle: "Interdisciplinary Arts & Cultural Research",
        description: "Exploring the intersection of arts, culture, and society through scholarly research.",
        icon: "🎨",
        accent: "purple-pink",
        href: "https://rohitagrawal7.github.io/journal-website/acsr",
        target: LinkTarget::NewTab,
    },
];

// =============================================================================
// EDITORIAL
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct EditorialMember {
    pub role: &'static str,
    pub name: &'static str,
    pub affiliation: &'static str,
    /// Comma-separated; the first address is the mail link target.
    pub emails: &'static str,
    pub phone: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

impl EditorialMember {
    #[must_use]
    pub fn primary_email(&self) -> &'static str {
        self.emails.split(',').next().unwrap_or_default().trim()
    }

    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.primary_email())
    }

    #[must_use]
    pub fn tel_href(&self) -> String {
        tel_href(self.phone)
    }
}

pub const EDITORIAL_INTRO: &str = "Contact our editorial team for inquiries about manuscript submissions, peer \
    review, or any other questions related to our publications.";

pub const EDITORIAL_NOTE: &str = "For manuscript submissions, please ensure your work follows our guidelines and \
    ethical standards. All submissions undergo a rigorous peer-review process to maintain the highest academic \
    quality.";

pub const EDITORIAL_TEAM: &[EditorialMember] = &[
    EditorialMember {
        role: "Editor-in-Chief",
        name: "Prof. Pawan D. Somavanshi (Ph.D. Mechanical)",
        affiliation: "Research Scholar, Government College of Engineering Aurangabad, MH, India",
        emails: "pawansomavanshi.PhD@geca.ac.in, pawansomavanshi5jan@gmail.com",
        phone: "+91 90964 99989",
        icon: "👨‍💼",
        accent: "blue-teal",
    },
    EditorialMember {
        role: "Managing Editor",
        name: "Dr. Swapnil N. Dhole (Ph.D. Mechanical)",
        affiliation: "Training and Placement Officer, MSS's College of Engineering and Technology, Jalna, MH, India",
        emails: "dholeswapnil25@gmail.com",
        phone: "+91 89832 45607",
        icon: "👨‍🎓",
        accent: "teal-blue",
    },
];

// =============================================================================
// CONTACT / FOOTER
// =============================================================================

pub const CONTACT_INTRO: &str = "For any inquiries, submissions, or collaboration opportunities, please reach out \
    to us. We'd love to hear from you and will respond as soon as possible.";

pub const ADDRESS_LINES: [&str; 2] =
    ["E-1/8 Mathura Nagar, N-6, Cidco", "Chhatrapati Sambhajinagar, Maharashtra 431003, India"];
pub const PHONE: &str = "+91 9766930707";
pub const EMAIL: &str = "contact@uora.org";

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Twitter", icon: "🐦", href: "#" },
    SocialLink { name: "LinkedIn", icon: "💼", href: "#" },
    SocialLink { name: "Facebook", icon: "📘", href: "#" },
    SocialLink { name: "Instagram", icon: "📸", href: "#" },
];

#[derive(Clone, Copy, Debug)]
pub struct Registration {
    pub label: &'static str,
    pub value: &'static str,
}

pub const REGISTRATIONS: &[Registration] = &[
    Registration { label: "UDYAM", value: "UDYAM-MH-04-0237577" },
    Registration { label: "GSTN", value: "27AAIFU8304M1ZO" },
    Registration { label: "Shop Act Number", value: "2541500320009408" },
];

pub const FOOTER_LINKS: [SectionId; 5] =
    [SectionId::Home, SectionId::About, SectionId::Journals, SectionId::Editorial, SectionId::Contact];

/// Year shown until the browser reports its own.
pub const DEFAULT_COPYRIGHT_YEAR: u32 = 2025;

/// `tel:` link with whitespace removed from the display number.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
