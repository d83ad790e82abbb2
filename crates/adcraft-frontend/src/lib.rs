use std::path::PathBuf;

use adcraft_bridge::{MessageFromBackend, MessageToBackend, brief::BriefDraft};
use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::Root;
use tokio::sync::mpsc;

use crate::entities::{
    campaign_entity::CampaignEntity, downloads_entity::DownloadsEntity,
    metrics_entity::MetricsEntity, notifications_entity::NotificationsEntity,
    settings_entity::SettingsEntity, upload_entity::UploadEntity,
};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

/// Frontend side of the bridge, stored as a gpui global.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        if let Err(error) = self.to_backend.send(message).await {
            log::error!("Failed to send message to backend: {error}");
        }
    }

    pub async fn request_config(&self) {
        self.send(MessageToBackend::ConfigurationRequest).await;
    }

    pub async fn upload_image(&self, product_name: String, image: Option<PathBuf>) {
        self.send(MessageToBackend::UploadImageRequest {
            product_name,
            image,
        })
        .await;
    }

    pub async fn submit_brief(&self, draft: BriefDraft) {
        self.send(MessageToBackend::SubmitBriefRequest(draft)).await;
    }

    pub async fn watch_campaign(&self, campaign_id: String) {
        self.send(MessageToBackend::WatchCampaign(campaign_id))
            .await;
    }

    pub async fn stop_watching_campaign(&self) {
        self.send(MessageToBackend::StopWatchingCampaign).await;
    }

    pub async fn request_campaigns_list(&self) {
        self.send(MessageToBackend::CampaignsListRequest).await;
    }

    pub async fn request_campaign_images(&self, campaign_id: String) {
        self.send(MessageToBackend::CampaignImagesRequest(campaign_id))
            .await;
    }

    pub async fn request_metrics(&self) {
        self.send(MessageToBackend::MetricsRequest).await;
    }

    pub async fn download_image(
        &self,
        campaign_id: String,
        product_name: String,
        filename: String,
    ) {
        self.send(MessageToBackend::DownloadImageRequest {
            campaign_id,
            product_name,
            filename,
        })
        .await;
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let data = entities::DataEntities {
            settings: cx.new(|_| SettingsEntity::default()),
            notifications: cx.new(|_| NotificationsEntity::default()),
            upload: cx.new(|_| UploadEntity::default()),
            campaign: cx.new(|_| CampaignEntity::default()),
            downloads: cx.new(|_| DownloadsEntity::default()),
            metrics: cx.new(|_| MetricsEntity::default()),
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            while let Some(message) = rx.recv().await {
                log::debug!("Got a message from backend: {message:?}");
                let data = &listener_data;
                match message {
                    MessageFromBackend::NotificationMessage(notification) => {
                        let _ = data.notifications.update(cx, |this, cx| {
                            this.push(notification, cx);
                        });
                    }
                    MessageFromBackend::ConfigurationResponse(config) => {
                        SettingsEntity::update(&data.settings, config, cx);
                    }
                    MessageFromBackend::ImageUploaded(response) => {
                        let _ = data.upload.update(cx, |this, cx| {
                            let event = this.finish(Some(response));
                            cx.emit(event);
                            cx.notify();
                        });
                    }
                    MessageFromBackend::ImageUploadFailed => {
                        let _ = data.upload.update(cx, |this, cx| {
                            let event = this.finish(None);
                            cx.emit(event);
                            cx.notify();
                        });
                    }
                    MessageFromBackend::CampaignSubmitted { response, uploads } => {
                        let _ = data.campaign.update(cx, |this, cx| {
                            this.apply_submitted(response.campaign_id, uploads);
                            cx.notify();
                        });
                    }
                    MessageFromBackend::CampaignSubmissionFailed => {
                        let _ = data.campaign.update(cx, |this, cx| {
                            this.apply_submission_failed();
                            cx.notify();
                        });
                    }
                    MessageFromBackend::CampaignStatusUpdate(status) => {
                        let _ = data.campaign.update(cx, |this, cx| {
                            if this.apply_status(status) {
                                cx.notify();
                            }
                        });
                    }
                    MessageFromBackend::CampaignsListResponse(campaigns) => {
                        let _ = data.downloads.update(cx, |this, cx| {
                            this.campaigns = Some(campaigns);
                            cx.notify();
                        });
                    }
                    MessageFromBackend::CampaignImagesResponse(images) => {
                        let _ = data.downloads.update(cx, |this, cx| {
                            if this.apply_images(images) {
                                cx.notify();
                            }
                        });
                    }
                    MessageFromBackend::CampaignImagesFailed { campaign_id } => {
                        let _ = data.downloads.update(cx, |this, cx| {
                            if this.apply_images_failed(&campaign_id) {
                                cx.notify();
                            }
                        });
                    }
                    MessageFromBackend::MetricsResponse(metrics) => {
                        let _ = data.metrics.update(cx, |this, cx| {
                            this.metrics = Some(metrics);
                            cx.notify();
                        });
                    }
                }
            }
            log::info!("Backend bridge closed");
        })
        .detach();

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.spawn(async move |_| {
                    bridge.request_config().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
