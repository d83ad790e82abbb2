use adcraft_bridge::campaign::CampaignImageSet;

use crate::{
    api::{ApiError, CampaignApi},
    generation::{GenerationCounter, Ticket},
};

/// Fetches the image manifest of the selected campaign. `ticket` must be taken
/// from `selection` in the order the selections were made. Returns `None` when
/// another selection was made while the request was in flight, so only the
/// last selection is ever applied.
pub async fn fetch_selected_images<A: CampaignApi>(
    api: &A,
    selection: &GenerationCounter,
    ticket: Ticket,
    campaign_id: &str,
) -> Option<Result<CampaignImageSet, ApiError>> {
    let result = api.campaign_images(campaign_id).await;
    if selection.is_current(ticket) {
        Some(result)
    } else {
        log::debug!("Discarding superseded image manifest of campaign {campaign_id}");
        None
    }
}
