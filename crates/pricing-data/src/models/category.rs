//! Fence category vocabulary and label normalization.

use serde::{Deserialize, Serialize};

/// The four fence categories the pricing calculator understands.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceCategory {
    Timber,
    Aluminum,
    Pvc,
    Rural,
}

impl FenceCategory {
    /// All known categories, in display order.
    pub const ALL: [FenceCategory; 4] = [
        FenceCategory::Timber,
        FenceCategory::Aluminum,
        FenceCategory::Pvc,
        FenceCategory::Rural,
    ];

    /// Normalize a free-form category label from a pricing row.
    ///
    /// Matching is a case-insensitive substring check against a small fixed
    /// vocabulary; anything unrecognized defaults to timber.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("aluminium") || label.contains("aluminum") {
            FenceCategory::Aluminum
        } else if label.contains("pvc") || label.contains("vinyl") {
            FenceCategory::Pvc
        } else if label.contains("rural") {
            FenceCategory::Rural
        } else {
            FenceCategory::Timber
        }
    }

    /// The canonical key used in transformed pricing payloads.
    pub fn key(&self) -> &'static str {
        match self {
            FenceCategory::Timber => "timber",
            FenceCategory::Aluminum => "aluminum",
            FenceCategory::Pvc => "pvc",
            FenceCategory::Rural => "rural",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aluminium_spelling_variants_map_to_aluminum() {
        assert_eq!(
            FenceCategory::from_label("Aluminium Fence"),
            FenceCategory::Aluminum
        );
        assert_eq!(
            FenceCategory::from_label("aluminum slat"),
            FenceCategory::Aluminum
        );
    }

    #[test]
    fn test_pvc_and_vinyl_map_to_pvc() {
        assert_eq!(FenceCategory::from_label("PVC Privacy"), FenceCategory::Pvc);
        assert_eq!(
            FenceCategory::from_label("Vinyl fencing"),
            FenceCategory::Pvc
        );
    }

    #[test]
    fn test_rural_maps_to_rural() {
        assert_eq!(
            FenceCategory::from_label("Rural post and wire"),
            FenceCategory::Rural
        );
    }

    #[test]
    fn test_timber_maps_to_timber() {
        assert_eq!(
            FenceCategory::from_label("Timber Paling"),
            FenceCategory::Timber
        );
    }

    #[test]
    fn test_unrecognized_label_defaults_to_timber() {
        assert_eq!(
            FenceCategory::from_label("Wrought Iron"),
            FenceCategory::Timber
        );
        assert_eq!(FenceCategory::from_label(""), FenceCategory::Timber);
    }
}
