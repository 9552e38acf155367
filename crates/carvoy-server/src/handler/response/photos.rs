//! Vehicle photo response types.

use carvoy_opendal::PhotoVariant;
use carvoy_postgres::model::VehiclePhoto;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One downloadable rendition of a photo.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoVariantLink {
    /// Variant name (`thumb`, `card`, `full`).
    pub variant: PhotoVariant,
    /// Target width in pixels.
    pub width: u32,
    /// URL to fetch the rendition from (public or presigned).
    pub url: String,
}

/// A photo with links to all of its renditions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Owning vehicle.
    pub vehicle_id: Uuid,
    /// Whether this is the vehicle's cover photo.
    pub is_primary: bool,
    /// Sort position within the gallery.
    pub position: i32,
    /// Links to the WebP renditions, smallest first.
    pub variants: Vec<PhotoVariantLink>,
    /// When the photo was uploaded.
    pub created_at: Timestamp,
}

impl Photo {
    /// Builds the response from the photo row plus resolved variant URLs.
    ///
    /// `urls` must be ordered like [`PhotoVariant::ALL`].
    pub fn from_model(photo: VehiclePhoto, urls: Vec<String>) -> Self {
        let variants = PhotoVariant::ALL
            .into_iter()
            .zip(urls)
            .map(|(variant, url)| PhotoVariantLink {
                variant,
                width: variant.width(),
                url,
            })
            .collect();

        Self {
            id: photo.id,
            vehicle_id: photo.vehicle_id,
            is_primary: photo.is_primary,
            position: photo.position,
            variants,
            created_at: photo.created_at.into(),
        }
    }
}
