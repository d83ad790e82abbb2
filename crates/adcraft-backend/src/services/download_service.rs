use std::path::{Path, PathBuf};

use adcraft_bridge::notification::NotificationMessage;
use futures_util::{Stream, StreamExt};
use tokio::io::AsyncWriteExt;

use crate::api::ApiError;

/// Errors that can occur while saving a generated image to disk.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to write download: {0}")]
    Io(#[from] std::io::Error),
    /// The server-provided filename does not name a file (e.g., `..`).
    #[error("invalid image filename {0:?}")]
    InvalidFilename(String),
}

/// Handles a download of one generated image (see
/// [`adcraft_bridge::MessageToBackend::DownloadImageRequest`]).
pub async fn handle_download_image_request(
    context: super::AppContextHandle,
    campaign_id: String,
    product_name: String,
    filename: String,
) {
    let (api, directory) = {
        let state = context.state.read().await;
        (
            state.api.clone(),
            crate::config::download_directory(&state.config, &state.cache_path),
        )
    };

    let result = async {
        let save_path = save_path(&directory, &filename)?;
        let url = api.download_url(&campaign_id, &product_name, &filename)?;
        log::info!("Downloading {url}, saving to {save_path:?}");
        let response = api.fetch_download(url).await?;
        let written = write_stream(&save_path, response.bytes_stream()).await?;
        log::info!("Saved {written} bytes to {save_path:?}");
        Ok::<_, DownloadError>(save_path)
    }
    .await;

    match result {
        Ok(save_path) => {
            context
                .send_notification(NotificationMessage::success(format!(
                    "Saved {filename} to {}",
                    save_path.display()
                )))
                .await;
        }
        Err(error) => {
            log::error!("Download of {filename} from campaign {campaign_id} failed: {error}");
            context
                .send_notification(NotificationMessage::error(format!(
                    "Error downloading {filename}: {error}"
                )))
                .await;
        }
    }
}

/// Resolves the target path inside `directory`, keeping only the final
/// component of the server-provided filename.
fn save_path(directory: &Path, filename: &str) -> Result<PathBuf, DownloadError> {
    Path::new(filename)
        .file_name()
        .map(|name| directory.join(name))
        .ok_or_else(|| DownloadError::InvalidFilename(filename.to_owned()))
}

/// Writes every chunk of `body` to `path`, creating parent directories and
/// truncating an existing file. Returns the number of bytes written.
async fn write_stream<S, B, E>(path: &Path, mut body: S) -> Result<u64, DownloadError>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    DownloadError: From<E>,
{
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut output_file = tokio::fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await?;

    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        output_file.write_all(chunk.as_ref()).await?;
        written += chunk.as_ref().len() as u64;
    }
    output_file.flush().await?;

    Ok(written)
}

impl From<reqwest::Error> for DownloadError {
    fn from(error: reqwest::Error) -> Self {
        Self::Api(ApiError::Transport(error))
    }
}
