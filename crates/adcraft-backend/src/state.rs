use crate::{api::ApiClient, generation::GenerationCounter, poller::StatusPoller};

/// Backend state shared by every service handler. Handlers mostly read it;
/// only watching a campaign takes the write lock (see [`SharedState`]).
#[derive(Debug)]
pub struct State {
    /// The loaded application configuration.
    pub config: adcraft_bridge::config::Config,
    /// Path to the directory used for caching data across runs.
    pub cache_path: std::path::PathBuf,
    /// Client for the pipeline's REST API, sharing one pooled HTTP client.
    pub api: ApiClient,
    /// Poller of the campaign currently shown on the campaign page.
    pub poller: StatusPoller,
    /// Tickets of image manifest requests from the downloads page.
    pub image_selection: GenerationCounter,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
