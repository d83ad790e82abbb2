use adcraft_bridge::{MessageFromBackend, notification::NotificationMessage};
use tokio::sync::mpsc::Sender;

use super::{AppContextHandle, send, send_notification};
use crate::{
    api::CampaignApi,
    flows::listing::fetch_selected_images,
    generation::{GenerationCounter, Ticket},
};

/// Handles the campaign list request of the downloads page.
pub async fn handle_campaigns_list_request(context: AppContextHandle) {
    let api = context.state.read().await.api.clone();
    list_campaigns(&api, &context.tx).await;
}

/// An empty list is sent on failure so the page stops waiting.
async fn list_campaigns<A: CampaignApi>(api: &A, tx: &Sender<MessageFromBackend>) {
    let campaigns = match api.list_campaigns().await {
        Ok(campaigns) => campaigns,
        Err(error) => {
            log::error!("Failed to list campaigns: {error}");
            send_notification(
                tx,
                NotificationMessage::error(format!("Error loading campaigns: {error}")),
            )
            .await;
            Vec::new()
        }
    };

    send(tx, MessageFromBackend::CampaignsListResponse(campaigns)).await;
}

/// Handles the image manifest request for the selected campaign. `ticket` is
/// taken by the command loop when the request arrives.
pub async fn handle_campaign_images_request(
    context: AppContextHandle,
    ticket: Ticket,
    campaign_id: String,
) {
    let (api, selection) = {
        let state = context.state.read().await;
        (state.api.clone(), state.image_selection.clone())
    };
    load_selected_images(&api, &selection, ticket, campaign_id, &context.tx).await;
}

/// Results of superseded selections are dropped without a message.
async fn load_selected_images<A: CampaignApi>(
    api: &A,
    selection: &GenerationCounter,
    ticket: Ticket,
    campaign_id: String,
    tx: &Sender<MessageFromBackend>,
) {
    match fetch_selected_images(api, selection, ticket, &campaign_id).await {
        Some(Ok(images)) => {
            log::debug!(
                "Campaign {campaign_id} has {} images across {} products",
                images.total_images,
                images.images.len()
            );
            send(tx, MessageFromBackend::CampaignImagesResponse(images)).await;
        }
        Some(Err(error)) => {
            log::error!("Failed to load images of campaign {campaign_id}: {error}");
            send(tx, MessageFromBackend::CampaignImagesFailed { campaign_id }).await;
            send_notification(
                tx,
                NotificationMessage::error(format!("Error loading images: {error}")),
            )
            .await;
        }
        None => {}
    }
}

/// Handles the metrics request of the metrics page.
pub async fn handle_metrics_request(context: AppContextHandle) {
    let api = context.state.read().await.api.clone();
    load_metrics(&api, &context.tx).await;
}

/// An empty list is sent on failure.
async fn load_metrics<A: CampaignApi>(api: &A, tx: &Sender<MessageFromBackend>) {
    let metrics = match api.metrics().await {
        Ok(metrics) => metrics,
        Err(error) => {
            log::error!("Failed to load metrics: {error}");
            send_notification(
                tx,
                NotificationMessage::error(format!("Error loading metrics: {error}")),
            )
            .await;
            Vec::new()
        }
    };

    send(tx, MessageFromBackend::MetricsResponse(metrics)).await;
}
