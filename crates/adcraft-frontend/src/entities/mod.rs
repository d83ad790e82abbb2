use gpui::Entity;

pub mod campaign_entity;
pub mod downloads_entity;
pub mod metrics_entity;
pub mod notifications_entity;
pub mod settings_entity;
pub mod upload_entity;

/// Client-side state refreshed from backend messages, shared by every page.
#[derive(Debug, Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub notifications: Entity<notifications_entity::NotificationsEntity>,
    pub upload: Entity<upload_entity::UploadEntity>,
    pub campaign: Entity<campaign_entity::CampaignEntity>,
    pub downloads: Entity<downloads_entity::DownloadsEntity>,
    pub metrics: Entity<metrics_entity::MetricsEntity>,
}
