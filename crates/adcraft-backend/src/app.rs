//! Command routing for the backend: one [`AppContext`] per runtime, one task
//! per command. Commands whose effect depends on their order (watching,
//! stopping, selecting a campaign's images) are sequenced on the loop before
//! anything is spawned.

use std::sync::Arc;

use adcraft_bridge::{
    MessageFromBackend, MessageToBackend, notification::NotificationMessage,
};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

pub(crate) struct AppContext {
    pub state: SharedState,
    /// Events for the console.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Runs until the console drops its command sender. A slow command never
    /// holds up the ones queued behind it.
    pub async fn run_command_loop(self: &Arc<Self>, mut commands: Receiver<MessageToBackend>) {
        while let Some(command) = commands.recv().await {
            log::debug!("Dispatching {command:?}");
            match command {
                MessageToBackend::WatchCampaign(campaign_id) => {
                    services::campaign_service::handle_watch_campaign(self, campaign_id).await;
                }
                MessageToBackend::StopWatchingCampaign => {
                    services::campaign_service::handle_stop_watching(self).await;
                }
                MessageToBackend::CampaignImagesRequest(campaign_id) => {
                    let ticket = self.state.read().await.image_selection.advance();
                    let context = self.clone();
                    tokio::spawn(async move {
                        services::listing_service::handle_campaign_images_request(
                            context,
                            ticket,
                            campaign_id,
                        )
                        .await;
                    });
                }
                command => {
                    let context = self.clone();
                    tokio::spawn(async move { context.route(command).await });
                }
            }
        }

        log::info!("Frontend bridge closed, stopping status polling");
        self.state.write().await.poller.stop();
    }

    async fn route(self: Arc<Self>, command: MessageToBackend) {
        match command {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self).await;
            }
            MessageToBackend::UploadImageRequest {
                product_name,
                image,
            } => {
                services::upload_service::handle_upload_image_request(self, product_name, image)
                    .await;
            }
            MessageToBackend::SubmitBriefRequest(draft) => {
                services::campaign_service::handle_submit_brief_request(self, draft).await;
            }
            MessageToBackend::CampaignsListRequest => {
                services::listing_service::handle_campaigns_list_request(self).await;
            }
            MessageToBackend::MetricsRequest => {
                services::listing_service::handle_metrics_request(self).await;
            }
            MessageToBackend::WatchCampaign(_)
            | MessageToBackend::StopWatchingCampaign
            | MessageToBackend::CampaignImagesRequest(_) => {
                log::warn!("Order-sensitive command reached the task router: {command:?}");
            }
            MessageToBackend::DownloadImageRequest {
                campaign_id,
                product_name,
                filename,
            } => {
                services::download_service::handle_download_image_request(
                    self,
                    campaign_id,
                    product_name,
                    filename,
                )
                .await;
            }
        }
    }

    /// Logs instead of failing when the console has already gone away.
    pub async fn send(&self, event: MessageFromBackend) {
        services::send(&self.tx, event).await;
    }

    pub async fn send_notification(&self, notification: NotificationMessage) {
        services::send_notification(&self.tx, notification).await;
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::Duration};

    use adcraft_bridge::config::Config;
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::{
        api::ApiClient, generation::GenerationCounter, poller::StatusPoller, state::State,
    };

    fn context(tx: Sender<MessageFromBackend>) -> Arc<AppContext> {
        // nothing listens on the discard port, so polls fail fast
        let api = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9/api").unwrap();
        let state = State {
            config: Config::default(),
            cache_path: PathBuf::from("adcraft-test-cache"),
            api,
            poller: StatusPoller::new(Duration::from_secs(3)),
            image_selection: GenerationCounter::default(),
        };
        Arc::new(AppContext {
            state: Arc::new(RwLock::new(state)),
            tx,
        })
    }

    async fn wait_for_config(events: &mut Receiver<MessageFromBackend>) {
        while let Some(event) = events.recv().await {
            if let MessageFromBackend::ConfigurationResponse(_) = event {
                return;
            }
        }
        panic!("event channel closed before the configuration arrived");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn watch_sent_after_stop_stays_active() {
        for _ in 0..50 {
            let (command_tx, command_rx) = mpsc::channel(64);
            let (event_tx, mut event_rx) = mpsc::channel(64);
            let context = context(event_tx);
            let loop_context = context.clone();
            let command_loop =
                tokio::spawn(async move { loop_context.run_command_loop(command_rx).await });

            for command in [
                MessageToBackend::WatchCampaign("ab12cd34".into()),
                MessageToBackend::StopWatchingCampaign,
                MessageToBackend::WatchCampaign("ab12cd34".into()),
                MessageToBackend::ConfigurationRequest,
            ] {
                command_tx.send(command).await.unwrap();
            }
            wait_for_config(&mut event_rx).await;
            assert!(context.state.read().await.poller.is_watching());

            drop(command_tx);
            command_loop.await.unwrap();
            assert!(!context.state.read().await.poller.is_watching());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn stop_sent_after_watch_ends_the_watch() {
        let (command_tx, command_rx) = mpsc::channel(64);
        let (event_tx, mut event_rx) = mpsc::channel(64);
        let context = context(event_tx);
        let loop_context = context.clone();
        tokio::spawn(async move { loop_context.run_command_loop(command_rx).await });

        for command in [
            MessageToBackend::WatchCampaign("ab12cd34".into()),
            MessageToBackend::StopWatchingCampaign,
            MessageToBackend::ConfigurationRequest,
        ] {
            command_tx.send(command).await.unwrap();
        }
        wait_for_config(&mut event_rx).await;
        assert!(!context.state.read().await.poller.is_watching());
    }
}
