//! Product image upload.
//!
//! Images are posted as a `multipart/form-data` body with a single `image`
//! field to `/api/2.0/products/{id}/actions/image_upload`. The request goes
//! through the same retry loop as page fetches.
//!
//! ```rust,ignore
//! use vend_api::rest::resources::ProductUpload;
//!
//! let upload = ProductUpload {
//!     id: "b8ca3a65-0183-11e4-fbb5-2816d2677218".to_string(),
//!     image_url: Some("https://cdn.example.com/tee.png".to_string()),
//!     ..Default::default()
//! };
//! if let Some(image) = client.upload_image("/tmp/tee.png", &upload).await? {
//!     println!("created at position {:?}", image.position);
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpMethod, HttpRequest, MultipartFile};
use crate::rest::{ResourceError, VendClient};

/// Multipart field the image bytes are sent in.
const IMAGE_FIELD: &str = "image";

/// The product an image is uploaded for.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductUpload {
    /// Id of the product receiving the image.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Where the image was sourced from. Also sent as the multipart file
    /// name. Without it there is nothing to upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Delete the local file once the upload succeeds.
    #[serde(skip)]
    pub remove_after_upload: bool,
}

/// The image record Vend creates for an upload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImageUpload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Position of the image among the product's images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Processing state, e.g. `processing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// `{"data": {...}}`
#[derive(Debug, Deserialize)]
struct ImageUploadEnvelope {
    data: ImageUpload,
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

impl VendClient {
    /// Uploads the image at `path` to the product described by `product`.
    ///
    /// Returns `Ok(None)` without touching the file or the network when
    /// `product.image_url` is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] if the file cannot be read (or removed,
    /// when `remove_after_upload` is set), [`ResourceError::Http`] if the
    /// upload fails, and [`ResourceError::Decode`] if the response is not an
    /// image record.
    pub async fn upload_image(
        &self,
        path: impl AsRef<Path>,
        product: &ProductUpload,
    ) -> Result<Option<ImageUpload>, ResourceError> {
        let Some(image_url) = product.image_url.as_deref().filter(|u| !u.is_empty()) else {
            tracing::debug!(product_id = %product.id, "no image url, skipping upload");
            return Ok(None);
        };

        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ResourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let request = HttpRequest::builder(
            HttpMethod::Post,
            self.base().image_upload_url(&product.id),
        )
        .multipart(MultipartFile {
            field: IMAGE_FIELD.to_string(),
            file_name: image_url.to_string(),
            mime: mime_for(path).to_string(),
            bytes,
        })
        .build()
        .map_err(HttpError::from)?;

        tracing::info!(product_id = %product.id, "uploading image");
        let response = self.http_client().execute(request).await?;
        let envelope: ImageUploadEnvelope = response
            .json()
            .map_err(|source| ResourceError::decode("ImageUpload", source))?;

        if product.remove_after_upload {
            tokio::fs::remove_file(path)
                .await
                .map_err(|source| ResourceError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let image = envelope.data;
        tracing::info!(
            product_id = %product.id,
            position = ?image.position,
            "image created"
        );
        Ok(Some(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("photo.png")), "image/png");
        assert_eq!(mime_for(Path::new("photo.gif")), "image/gif");
        assert_eq!(mime_for(Path::new("photo")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("photo.tiff")), "application/octet-stream");
    }

    #[test]
    fn test_image_upload_envelope_decodes() {
        let envelope: ImageUploadEnvelope = serde_json::from_str(
            r#"{"data": {"id": "img1", "product_id": "p1", "position": 2, "status": "processing", "version": 77}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.position, Some(2));
        assert_eq!(envelope.data.status.as_deref(), Some("processing"));
    }

    #[test]
    fn test_image_upload_envelope_requires_data() {
        assert!(serde_json::from_str::<ImageUploadEnvelope>("{}").is_err());
        assert!(serde_json::from_str::<ImageUploadEnvelope>(r#"{"data": null}"#).is_err());
    }

    #[test]
    fn test_product_upload_does_not_serialize_local_flag() {
        let upload = ProductUpload {
            id: "p1".to_string(),
            image_url: Some("https://img.test/a.png".to_string()),
            remove_after_upload: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "p1", "image_url": "https://img.test/a.png" })
        );
    }
}
