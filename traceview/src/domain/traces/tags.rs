//! Stable tag colors for free-form labels.

use serde::{Deserialize, Serialize};

/// Named style variants a tag can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    Gray,
    Purple,
    Burgundy,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
}

/// Variants in hashing order. Reordering changes every label's color.
pub const TAG_VARIANTS: &[TagVariant] = &[
    TagVariant::Gray,
    TagVariant::Purple,
    TagVariant::Burgundy,
    TagVariant::Pink,
    TagVariant::Red,
    TagVariant::Orange,
    TagVariant::Yellow,
    TagVariant::Green,
    TagVariant::Turquoise,
    TagVariant::Blue,
];

impl TagVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Burgundy => "burgundy",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Turquoise => "turquoise",
            Self::Blue => "blue",
        }
    }
}

impl std::fmt::Display for TagVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a label to a variant.
///
/// Uses the low 32 bits of the label's MD5 digest (its last 8 hex digits), so
/// the same label gets the same color everywhere.
pub fn tag_variant(label: &str) -> TagVariant {
    let digest = md5::compute(label.as_bytes());
    let [.., a, b, c, d] = digest.0;
    let index = u32::from_be_bytes([a, b, c, d]) as usize;
    TAG_VARIANTS[index % TAG_VARIANTS.len()]
}
