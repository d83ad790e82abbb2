//! Types shared by the console's frontend and backend.
//!
//! The frontend sends [`MessageToBackend`] commands (upload an image, submit a
//! brief, watch a campaign, list campaigns). The backend answers with
//! [`MessageFromBackend`] events: responses, status snapshots of the watched
//! campaign, and notifications. Both directions run over bounded
//! [`tokio::sync::mpsc`] channels created together by [`BridgeChannels`].

pub mod brief;
pub mod campaign;
pub mod config;
pub mod notification;

use std::path::PathBuf;

use tokio::sync::mpsc::{self, Receiver, Sender};

pub const CHANNEL_CAPACITY: usize = 64;

/// Events the backend pushes to the console: request results, poller
/// snapshots and user-facing notifications.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Success or error line for the notification bar.
    NotificationMessage(notification::NotificationMessage),
    /// Loaded configuration, sent once the frontend asks for it.
    ConfigurationResponse(config::Config),
    /// A product image was stored by the pipeline.
    ImageUploaded(campaign::UploadResponse),
    /// The standalone image upload did not go through. The reason is delivered
    /// separately as a notification.
    ImageUploadFailed,
    /// The brief was accepted and a campaign has been created.
    CampaignSubmitted {
        response: campaign::SubmitResponse,
        uploads: brief::UploadReport,
    },
    /// The brief submission failed as a whole; no campaign was created.
    CampaignSubmissionFailed,
    /// Latest status snapshot of the watched campaign.
    CampaignStatusUpdate(campaign::CampaignStatus),
    /// Identifiers of all campaigns with generated output. Empty on failure.
    CampaignsListResponse(Vec<String>),
    /// Image manifest of the most recently selected campaign.
    CampaignImagesResponse(campaign::CampaignImageSet),
    /// The manifest request for the given campaign failed.
    CampaignImagesFailed { campaign_id: String },
    /// Metrics for all campaigns. Empty on failure.
    MetricsResponse(Vec<campaign::CampaignMetric>),
}

/// User actions forwarded by the console to the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    ConfigurationRequest,
    /// Upload a single product image outside of a campaign brief.
    UploadImageRequest {
        product_name: String,
        image: Option<PathBuf>,
    },
    /// Run the two-phase brief submission for the given draft.
    SubmitBriefRequest(brief::BriefDraft),
    /// Start polling the status of a campaign, replacing any previous watch.
    WatchCampaign(String),
    /// Tear down the status poller.
    StopWatchingCampaign,
    CampaignsListRequest,
    /// Fetch the image manifest of a campaign. Supersedes earlier requests.
    CampaignImagesRequest(String),
    MetricsRequest,
    /// Save one generated image into the download directory.
    DownloadImageRequest {
        campaign_id: String,
        product_name: String,
        filename: String,
    },
}

/// Both ends of the two bounded channels. Split it with a destructuring
/// `let` and hand each half to its side.
pub struct BridgeChannels {
    pub frontend_rx: Receiver<MessageFromBackend>,
    pub frontend_tx: Sender<MessageToBackend>,

    pub backend_rx: Receiver<MessageToBackend>,
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// `capacity` bounds each direction separately.
    pub fn new(capacity: usize) -> Self {
        let (command_tx, command_rx) = mpsc::channel(capacity);
        let (event_tx, event_rx) = mpsc::channel(capacity);
        Self {
            frontend_rx: event_rx,
            frontend_tx: command_tx,
            backend_rx: command_rx,
            backend_tx: event_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(CHANNEL_CAPACITY)
    }
}
