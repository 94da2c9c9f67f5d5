//! Static selection catalogs: platform types, products, entities and the
//! campaign option lists offered for source, medium and content.
//!
//! Nothing here is configurable at runtime. The tables are compiled in and the
//! enums make it impossible to hold a product or entity key that is not in its
//! catalog.

use std::fmt;

use clap::ValueEnum;

/// Which sign-up flow a link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlatformType {
    /// Immediate sign-up flow.
    #[default]
    Signups,
    /// Pre-sign-up (interest capture) flow.
    #[value(alias = "presignups")]
    PreSignups,
}

impl PlatformType {
    pub const ALL: [PlatformType; 2] = [PlatformType::Signups, PlatformType::PreSignups];

    /// Host the link points at (no scheme).
    pub fn host(self) -> &'static str {
        match self {
            PlatformType::Signups => "signup.aiesec.lk",
            PlatformType::PreSignups => "apply.aiesec.lk",
        }
    }

    /// Name of the query parameter carrying the entity key.
    ///
    /// The two flows really do use different names (`ley` vs `entity`).
    pub fn entity_param(self) -> &'static str {
        match self {
            PlatformType::Signups => "ley",
            PlatformType::PreSignups => "entity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlatformType::Signups => "Signups",
            PlatformType::PreSignups => "Pre-Signups",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product keys shared by both platform catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Product {
    #[value(name = "oGV")]
    Ogv,
    #[value(name = "oGTa")]
    Ogta,
    #[value(name = "oGTe")]
    Ogte,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Ogv, Product::Ogta, Product::Ogte];

    pub fn key(self) -> &'static str {
        match self {
            Product::Ogv => "oGV",
            Product::Ogta => "oGTa",
            Product::Ogte => "oGTe",
        }
    }

    /// Path slug for this product under `platform`.
    ///
    /// oGTe is `teach` on signups but `teacher` on pre-signups; both are live
    /// paths and must not be unified.
    pub fn slug(self, platform: PlatformType) -> &'static str {
        match (platform, self) {
            (_, Product::Ogv) => "volunteer",
            (_, Product::Ogta) => "talent",
            (PlatformType::Signups, Product::Ogte) => "teach",
            (PlatformType::PreSignups, Product::Ogte) => "teacher",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Organisational branch a link attributes traffic to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    #[value(name = "CC")]
    Cc,
    #[value(name = "CN")]
    Cn,
}

impl Entity {
    pub const ALL: [Entity; 2] = [Entity::Cc, Entity::Cn];

    pub fn key(self) -> &'static str {
        match self {
            Entity::Cc => "CC",
            Entity::Cn => "CN",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Entity::Cc => "Colombo Central",
            Entity::Cn => "Colombo North",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Prefix every campaign tag must carry.
pub const CAMPAIGN_TAG_PREFIX: &str = "LK-";

pub const CAMPAIGN_SOURCES: [&str; 9] = [
    "Blog",
    "Classroom",
    "Email",
    "Facebook",
    "Friend",
    "Instagram",
    "Linkedin",
    "Official Media",
    "Website",
];

pub const CAMPAIGN_MEDIUMS: [&str; 8] = [
    "Blog",
    "Email",
    "Offline Marketing",
    "Organic Social Media",
    "Paid Social Media",
    "Partner Posts",
    "Stories",
    "University Posts",
];

pub const CAMPAIGN_CONTENTS: [&str; 3] = ["General", "GT", "GV"];

/// `(key, slug)` pairs of the product catalog for `platform`, in display order.
pub fn products_for(platform: PlatformType) -> Vec<(&'static str, &'static str)> {
    Product::ALL
        .into_iter()
        .map(|p| (p.key(), p.slug(platform)))
        .collect()
}
