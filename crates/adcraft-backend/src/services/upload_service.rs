use std::path::PathBuf;

use adcraft_bridge::{MessageFromBackend, notification::NotificationMessage};

use crate::flows::upload::upload_product_image;

/// Handles a standalone product image upload (see
/// [`adcraft_bridge::MessageToBackend::UploadImageRequest`]).
pub async fn handle_upload_image_request(
    context: super::AppContextHandle,
    product_name: String,
    image: Option<PathBuf>,
) {
    let api = context.state.read().await.api.clone();

    match upload_product_image(&api, &product_name, image.as_deref()).await {
        Ok(response) => {
            log::info!(
                "Uploaded {} for product {} into {}",
                response.file_info.filename,
                response.product_name,
                response.asset_directory
            );
            let message = response.message.clone();
            context
                .send(MessageFromBackend::ImageUploaded(response))
                .await;
            context
                .send_notification(NotificationMessage::success(message))
                .await;
        }
        Err(error) => {
            log::error!("Image upload for product {product_name:?} failed: {error}");
            context.send(MessageFromBackend::ImageUploadFailed).await;
            context
                .send_notification(NotificationMessage::error(error.to_string()))
                .await;
        }
    }
}
