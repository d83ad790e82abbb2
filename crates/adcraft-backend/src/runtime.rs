//! Starts the backend on its own thread with a multi-threaded tokio runtime.

use std::{path::PathBuf, sync::Arc, thread};

use adcraft_bridge::{MessageFromBackend, MessageToBackend, config::Config};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::{
    api::ApiClient, app::AppContext, generation::GenerationCounter, poller::StatusPoller,
    state::State,
};

/// Loads the configuration, falling back to the defaults and a temporary cache
/// directory when the user's directories are unusable.
async fn load_config_or_default() -> (Config, PathBuf) {
    match crate::config::load_config().await {
        Ok(loaded) => loaded,
        Err(error) => {
            log::error!("Failed to load config, using defaults: {error}");
            (Config::default(), std::env::temp_dir().join("adcraft"))
        }
    }
}

/// Builds the API client, falling back to the default base URL when the
/// configured one cannot be used.
fn build_api_client(config: &mut Config) -> ApiClient {
    let request_client = reqwest::Client::new();
    match ApiClient::new(request_client.clone(), &config.api_base_url) {
        Ok(api) => api,
        Err(error) => {
            let fallback = Config::default().api_base_url;
            log::error!("{error}, falling back to {fallback}");
            config.api_base_url = fallback;
            ApiClient::new(request_client, &config.api_base_url)
                .expect("default API base URL is valid")
        }
    }
}

async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (mut config, cache_path) = load_config_or_default().await;
    let api = build_api_client(&mut config);
    log::info!("Using creative pipeline API at {}", api.base_url());

    let state = Arc::new(RwLock::new(State {
        poller: StatusPoller::new(config.poll_interval()),
        image_selection: GenerationCounter::default(),
        config,
        cache_path,
        api,
    }));

    let context = Arc::new(AppContext { state, tx });
    context.run_command_loop(rx).await;
}

/// Returns immediately; the backend lives until the command channel closes.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                log::error!("Failed to build tokio runtime: {error}");
                return;
            }
        };
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
