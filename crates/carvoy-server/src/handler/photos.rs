//! Vehicle photo upload and management handlers.
//!
//! Uploads run the variant pipeline in-request: decode, downscale to each
//! configured width, encode WebP, write every rendition to object storage,
//! then delete the raw upload so only variants remain.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use carvoy_opendal::{PhotoKey, StorageBackend};
use carvoy_postgres::PgClient;
use carvoy_postgres::model::{NewVehiclePhoto, VehiclePhoto};
use carvoy_postgres::query::VehiclePhotoRepository;
use uuid::Uuid;

use crate::extract::{AuthState, Json, Multipart, Path};
use crate::handler::request::{PhotoPathParams, VehiclePathParams};
use crate::handler::response::{ErrorResponse, Photo};
use crate::handler::vehicles::find_vehicle;
use crate::handler::{ErrorKind, Result};
use crate::middleware::MAX_UPLOAD_BODY_SIZE;
use crate::service::{ImageProcessor, ServiceState};

/// Tracing target for photo operations.
const TRACING_TARGET: &str = "carvoy_server::handler::photos";

/// Maximum size of a single uploaded image: 15 MB.
const MAX_PHOTO_SIZE: usize = 15 * 1024 * 1024;

/// Lifetime of presigned download URLs.
const PRESIGN_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Uploads one or more photos for a vehicle.
///
/// Form data: each part with a filename is treated as an image upload.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn upload_photos(
    State(pg_client): State<PgClient>,
    State(storage): State<StorageBackend>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<Photo>>)> {
    let mut conn = pg_client.get_connection().await?;

    let vehicle = find_vehicle(&mut conn, path_params.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    let processor = ImageProcessor::new();
    let mut uploaded = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(Multipart::field_error)? {
        let Some(filename) = field.file_name().map(str::to_owned) else {
            tracing::debug!(target: TRACING_TARGET, "skipping field without filename");
            continue;
        };

        let content_type = field
            .content_type()
            .map(str::to_owned)
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !ImageProcessor::is_supported_content_type(&content_type) {
            return Err(ErrorKind::UnsupportedMediaType
                .with_message("Only JPEG, PNG, and WebP images are accepted")
                .with_context(format!("'{}' has content type '{}'", filename, content_type))
                .into_static());
        }

        // Read the upload with a size cap so one part cannot exhaust memory.
        let mut data = Vec::new();
        let mut stream = field;
        while let Some(chunk) = stream.chunk().await.map_err(Multipart::field_error)? {
            if data.len() + chunk.len() > MAX_PHOTO_SIZE {
                return Err(ErrorKind::PayloadTooLarge
                    .with_context(format!(
                        "'{}' exceeds the maximum size of {} MB",
                        filename,
                        MAX_PHOTO_SIZE / (1024 * 1024)
                    ))
                    .into_static());
            }
            data.extend_from_slice(&chunk);
        }

        tracing::debug!(
            target: TRACING_TARGET,
            filename = %filename,
            content_type = %content_type,
            size = data.len(),
            "processing photo upload"
        );

        let photo = store_photo(
            &mut conn,
            &storage,
            &processor,
            vehicle.id,
            &content_type,
            &data,
        )
        .await?;

        let urls = resolve_variant_urls(&storage, &PhotoKey::from_prefix(&photo.storage_prefix))
            .await?;
        uploaded.push(Photo::from_model(photo, urls));
    }

    if uploaded.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("The upload contained no image files")
            .into_static());
    }

    tracing::info!(
        target: TRACING_TARGET,
        vehicle_id = %vehicle.id,
        count = uploaded.len(),
        uploaded_by = %auth_state.account_id,
        "photos uploaded"
    );

    Ok((StatusCode::CREATED, Json(uploaded)))
}

fn upload_photos_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Upload photos")
        .description(
            "Uploads images for a vehicle; each is resized into WebP \
             renditions and the original is discarded.",
        )
        .response::<201, Json<Vec<Photo>>>()
        .response::<413, Json<ErrorResponse<'static>>>()
        .response::<415, Json<ErrorResponse<'static>>>()
}

/// Runs the pipeline for one upload and inserts the photo row.
async fn store_photo(
    conn: &mut carvoy_postgres::PgConn,
    storage: &StorageBackend,
    processor: &ImageProcessor,
    vehicle_id: Uuid,
    content_type: &str,
    data: &[u8],
) -> Result<VehiclePhoto> {
    let photo_id = Uuid::new_v4();
    let key = PhotoKey::new(vehicle_id, photo_id);

    // The extension is known because the content type was validated.
    let extension = ImageProcessor::extension_for(content_type).unwrap_or("bin");
    let original_key = key.original(extension);

    storage.write(&original_key, data).await?;

    let variants = match processor.process(data) {
        Ok(variants) => variants,
        Err(err) => {
            // The raw object is useless without variants.
            cleanup_objects(storage, std::iter::once(original_key.clone())).await;
            return Err(err.into());
        }
    };

    let mut written = Vec::new();
    for processed in &variants {
        let variant_key = key.variant(processed.variant);
        if let Err(err) = storage.write(&variant_key, &processed.data).await {
            written.push(original_key.clone());
            cleanup_objects(storage, written.into_iter()).await;
            return Err(err.into());
        }
        written.push(variant_key);
    }

    // Variants are durable; the raw upload is no longer needed.
    storage.delete(&original_key).await?;

    let position = conn.next_photo_position(vehicle_id).await?;
    let photo = conn
        .create_vehicle_photo(NewVehiclePhoto {
            vehicle_id,
            storage_prefix: key.prefix().to_string(),
            content_type: content_type.to_string(),
            size_bytes: data.len() as i64,
            is_primary: position == 0,
            position,
        })
        .await?;

    Ok(photo)
}

/// Best-effort removal of already-written objects after a failure.
async fn cleanup_objects(storage: &StorageBackend, keys: impl Iterator<Item = String>) {
    for key in keys {
        if let Err(err) = storage.delete(&key).await {
            tracing::warn!(
                target: TRACING_TARGET,
                key = %key,
                error = %err,
                "failed to clean up object after upload failure"
            );
        }
    }
}

/// Resolves a download URL per variant: public URL when configured,
/// presigned otherwise, falling back to the raw object key for backends
/// without URLs (development filesystem).
async fn resolve_variant_urls(storage: &StorageBackend, key: &PhotoKey) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    for variant_key in key.variants() {
        let url = match storage.public_url(&variant_key) {
            Some(url) => url,
            None => match storage.presign_read(&variant_key, PRESIGN_TTL).await {
                Ok(url) => url,
                Err(err) if matches!(err, carvoy_opendal::StorageError::Unsupported(_)) => {
                    variant_key.clone()
                }
                Err(err) => return Err(err.into()),
            },
        };
        urls.push(url);
    }

    Ok(urls)
}

/// Lists the photos of a vehicle with download URLs.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn list_photos(
    State(pg_client): State<PgClient>,
    State(storage): State<StorageBackend>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
) -> Result<(StatusCode, Json<Vec<Photo>>)> {
    let mut conn = pg_client.get_connection().await?;

    let vehicle = find_vehicle(&mut conn, path_params.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    let photos = conn.list_vehicle_photos(vehicle.id).await?;

    let mut response = Vec::with_capacity(photos.len());
    for photo in photos {
        let urls =
            resolve_variant_urls(&storage, &PhotoKey::from_prefix(&photo.storage_prefix)).await?;
        response.push(Photo::from_model(photo, urls));
    }

    Ok((StatusCode::OK, Json(response)))
}

fn list_photos_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List photos")
        .description("Lists a vehicle's photos in gallery order with download URLs.")
        .response::<200, Json<Vec<Photo>>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Makes a photo the vehicle's cover photo.
#[tracing::instrument(skip_all, fields(photo_id = %path_params.photo_id))]
async fn set_primary_photo(
    State(pg_client): State<PgClient>,
    State(storage): State<StorageBackend>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<PhotoPathParams>,
) -> Result<(StatusCode, Json<Photo>)> {
    let mut conn = pg_client.get_connection().await?;

    let photo = find_photo(&mut conn, path_params.photo_id).await?;
    let vehicle = find_vehicle(&mut conn, photo.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    let photo = conn
        .set_primary_photo(vehicle.id, photo.id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("photo").into_static())?;

    let urls =
        resolve_variant_urls(&storage, &PhotoKey::from_prefix(&photo.storage_prefix)).await?;

    Ok((StatusCode::OK, Json(Photo::from_model(photo, urls))))
}

fn set_primary_photo_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Set cover photo")
        .response::<200, Json<Photo>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Deletes a photo and its stored renditions.
#[tracing::instrument(skip_all, fields(photo_id = %path_params.photo_id))]
async fn delete_photo(
    State(pg_client): State<PgClient>,
    State(storage): State<StorageBackend>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<PhotoPathParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let photo = find_photo(&mut conn, path_params.photo_id).await?;
    let vehicle = find_vehicle(&mut conn, photo.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    conn.delete_vehicle_photo(photo.id).await?;

    // The row is gone; object removal is best-effort.
    let key = PhotoKey::from_prefix(&photo.storage_prefix);
    cleanup_objects(&storage, key.variants().into_iter()).await;

    tracing::info!(
        target: TRACING_TARGET,
        photo_id = %photo.id,
        vehicle_id = %vehicle.id,
        deleted_by = %auth_state.account_id,
        "photo deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_photo_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete photo")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Loads a photo or reports 404.
async fn find_photo(
    conn: &mut carvoy_postgres::PgConn,
    photo_id: Uuid,
) -> Result<VehiclePhoto> {
    let photo = conn
        .find_vehicle_photo_by_id(photo_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Photo not found")
                .with_resource("photo")
                .into_static()
        })?;

    Ok(photo)
}

/// Returns routes for photo management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/vehicles/{vehicleId}/photos",
            get_with(list_photos, list_photos_docs).post_with(upload_photos, upload_photos_docs),
        )
        .api_route(
            "/photos/{photoId}",
            delete_with(delete_photo, delete_photo_docs),
        )
        .api_route(
            "/photos/{photoId}/primary",
            post_with(set_primary_photo, set_primary_photo_docs),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_SIZE))
        .with_path_items(|item| item.tag("Photos"))
}
