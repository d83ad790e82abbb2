//! Handlers for frontend commands. Each one reads what it needs from the
//! shared state, calls the REST API or the filesystem, and reports the
//! outcome back as a response message and/or a notification.
//!
//! The API-facing part of a handler is generic over [`crate::api::CampaignApi`]
//! and writes to a plain sender, so it runs against the in-memory API in tests.

use adcraft_bridge::{MessageFromBackend, notification::NotificationMessage};
use tokio::sync::mpsc::Sender;

pub mod campaign_service;
pub mod config_service;
pub mod download_service;
pub mod listing_service;
pub mod upload_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

/// Logs instead of failing when the console has already gone away.
pub(crate) async fn send(tx: &Sender<MessageFromBackend>, event: MessageFromBackend) {
    if let Err(error) = tx.send(event).await {
        log::error!("Console stopped listening, dropped event: {error}");
    }
}

pub(crate) async fn send_notification(
    tx: &Sender<MessageFromBackend>,
    notification: NotificationMessage,
) {
    send(tx, MessageFromBackend::NotificationMessage(notification)).await;
}
