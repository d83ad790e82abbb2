use adcraft_bridge::{
    MessageFromBackend, brief::BriefDraft, notification::NotificationMessage,
};
use tokio::sync::mpsc::Sender;

use super::{AppContextHandle, send, send_notification};
use crate::{api::CampaignApi, app::AppContext, flows::submission::submit_campaign};

/// Handles a brief submission (see
/// [`adcraft_bridge::MessageToBackend::SubmitBriefRequest`]).
pub async fn handle_submit_brief_request(context: AppContextHandle, draft: BriefDraft) {
    let api = context.state.read().await.api.clone();
    submit_and_report(&api, &draft, &context.tx).await;
}

async fn submit_and_report<A: CampaignApi>(
    api: &A,
    draft: &BriefDraft,
    tx: &Sender<MessageFromBackend>,
) {
    match submit_campaign(api, draft).await {
        Ok(outcome) => {
            let message = outcome.response.message.clone();
            let failure_summary = outcome.uploads.failure_summary();
            send(
                tx,
                MessageFromBackend::CampaignSubmitted {
                    response: outcome.response,
                    uploads: outcome.uploads,
                },
            )
            .await;
            send_notification(tx, NotificationMessage::success(message)).await;
            if let Some(summary) = failure_summary {
                send_notification(tx, NotificationMessage::error(summary)).await;
            }
        }
        Err(error) => {
            log::error!("Campaign submission failed: {error}");
            send(tx, MessageFromBackend::CampaignSubmissionFailed).await;
            send_notification(tx, NotificationMessage::error(format!("Error: {error}"))).await;
        }
    }
}

/// Starts polling a campaign's status, replacing the previous watch (see
/// [`adcraft_bridge::MessageToBackend::WatchCampaign`]). Runs on the command
/// loop itself so watches and stops apply in the order they were sent.
pub async fn handle_watch_campaign(context: &AppContext, campaign_id: String) {
    let mut state = context.state.write().await;
    let api = state.api.clone();
    state.poller.watch(api, campaign_id, context.tx.clone());
}

/// Tears the status poller down (see
/// [`adcraft_bridge::MessageToBackend::StopWatchingCampaign`]). Runs on the
/// command loop itself, like [`handle_watch_campaign`].
pub async fn handle_stop_watching(context: &AppContext) {
    context.state.write().await.poller.stop();
}
