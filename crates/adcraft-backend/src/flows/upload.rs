use std::path::Path;

use adcraft_bridge::campaign::UploadResponse;

use crate::api::{ApiError, CampaignApi, ImageUpload};

/// Local precondition failures of a standalone upload. These never reach the
/// network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    MissingProductName,
    #[error("Please select an image file")]
    MissingImage,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Uploads one product image under the trimmed product name.
pub async fn upload_product_image<A: CampaignApi>(
    api: &A,
    product_name: &str,
    image: Option<&Path>,
) -> Result<UploadResponse, UploadError> {
    let product_name = product_name.trim();
    if product_name.is_empty() {
        return Err(ValidationError::MissingProductName.into());
    }
    let image = image.ok_or(ValidationError::MissingImage)?;

    let payload = ImageUpload::read(image).await?;
    Ok(api.upload_image(product_name, payload).await?)
}
