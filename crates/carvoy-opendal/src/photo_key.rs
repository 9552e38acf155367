//! Object-key convention for vehicle photos.
//!
//! Every uploaded photo becomes a family of objects sharing one prefix:
//!
//! ```text
//! vehicles/{vehicle_id}/{photo_id}-original.{ext}   (deleted after processing)
//! vehicles/{vehicle_id}/{photo_id}-thumb.webp
//! vehicles/{vehicle_id}/{photo_id}-card.webp
//! vehicles/{vehicle_id}/{photo_id}-full.webp
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resized WebP rendition of an uploaded photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PhotoVariant {
    /// Gallery thumbnail.
    Thumb,
    /// Listing card image.
    Card,
    /// Detail-view image.
    Full,
}

impl PhotoVariant {
    /// All variants produced by the upload pipeline, smallest first.
    pub const ALL: [PhotoVariant; 3] = [PhotoVariant::Thumb, PhotoVariant::Card, PhotoVariant::Full];

    /// Target width of the variant in pixels.
    ///
    /// Heights follow the source aspect ratio; the pipeline never upscales.
    pub const fn width(self) -> u32 {
        match self {
            PhotoVariant::Thumb => 320,
            PhotoVariant::Card => 800,
            PhotoVariant::Full => 1600,
        }
    }

    /// Suffix used in the object key.
    pub const fn suffix(self) -> &'static str {
        match self {
            PhotoVariant::Thumb => "thumb",
            PhotoVariant::Card => "card",
            PhotoVariant::Full => "full",
        }
    }
}

/// The key family of a single uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoKey {
    prefix: String,
}

impl PhotoKey {
    /// Creates the key family for a photo of a vehicle.
    pub fn new(vehicle_id: Uuid, photo_id: Uuid) -> Self {
        Self {
            prefix: format!("vehicles/{}/{}", vehicle_id, photo_id),
        }
    }

    /// Reconstructs a key family from a stored prefix.
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The shared prefix, as stored in the photo row.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key of the raw upload, kept only until the variants are written.
    pub fn original(&self, extension: &str) -> String {
        format!("{}-original.{}", self.prefix, extension.trim_start_matches('.'))
    }

    /// Key of one WebP variant.
    pub fn variant(&self, variant: PhotoVariant) -> String {
        format!("{}-{}.webp", self.prefix, variant.suffix())
    }

    /// Keys of all WebP variants, smallest first.
    pub fn variants(&self) -> Vec<String> {
        PhotoVariant::ALL
            .into_iter()
            .map(|v| self.variant(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_family_layout() {
        let vehicle_id = Uuid::nil();
        let photo_id = Uuid::nil();
        let key = PhotoKey::new(vehicle_id, photo_id);

        assert_eq!(
            key.prefix(),
            "vehicles/00000000-0000-0000-0000-000000000000/00000000-0000-0000-0000-000000000000"
        );
        assert!(key.original("jpg").ends_with("-original.jpg"));
        assert!(key.variant(PhotoVariant::Thumb).ends_with("-thumb.webp"));
        assert!(key.variant(PhotoVariant::Full).ends_with("-full.webp"));
    }

    #[test]
    fn original_extension_is_normalized() {
        let key = PhotoKey::from_prefix("vehicles/a/b");
        assert_eq!(key.original(".png"), "vehicles/a/b-original.png");
        assert_eq!(key.original("png"), "vehicles/a/b-original.png");
    }

    #[test]
    fn variants_are_ordered_smallest_first() {
        let widths: Vec<u32> = PhotoVariant::ALL.into_iter().map(|v| v.width()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn roundtrip_through_stored_prefix() {
        let key = PhotoKey::new(Uuid::new_v4(), Uuid::new_v4());
        let restored = PhotoKey::from_prefix(key.prefix());
        assert_eq!(key, restored);
    }
}
