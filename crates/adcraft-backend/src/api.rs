//! HTTP client for the creative pipeline's REST API.
//!
//! One method per endpoint, a single attempt per call. Non-success HTTP
//! statuses are turned into [`ApiError::Status`] naming the operation.

use std::{fmt, future::Future, path::Path};

use adcraft_bridge::campaign::{
    CampaignBrief, CampaignImageSet, CampaignMetric, CampaignStatus, SubmitResponse,
    UploadResponse,
};
use reqwest::{
    Response, StatusCode, Url,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;

/// Backend operation a request belongs to, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SubmitBrief,
    GetStatus,
    ListCampaigns,
    GetMetrics,
    GetImages,
    DownloadImage,
    UploadImage,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SubmitBrief => "submit campaign brief",
            Self::GetStatus => "get campaign status",
            Self::ListCampaigns => "list campaigns",
            Self::GetMetrics => "get campaign metrics",
            Self::GetImages => "get campaign images",
            Self::DownloadImage => "download campaign image",
            Self::UploadImage => "upload product image",
        })
    }
}

/// Errors that can occur while talking to the REST API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success HTTP status.
    #[error("failed to {operation} (HTTP {status})")]
    Status {
        operation: Operation,
        status: StatusCode,
    },
    /// The request could not be sent, or its body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The configured base URL cannot be extended with path segments (e.g.,
    /// `mailto:` or `data:` URLs).
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// A product image read from disk, ready to be sent as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_owned());
        Ok(Self {
            content_type: content_type_for(&file_name),
            file_name,
            bytes,
        })
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// The subset of the REST API the campaign flows depend on.
pub trait CampaignApi: Send + Sync {
    fn submit_brief(
        &self,
        brief: &CampaignBrief,
    ) -> impl Future<Output = Result<SubmitResponse, ApiError>> + Send;

    fn campaign_status(
        &self,
        campaign_id: &str,
    ) -> impl Future<Output = Result<CampaignStatus, ApiError>> + Send;

    fn list_campaigns(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    fn metrics(&self) -> impl Future<Output = Result<Vec<CampaignMetric>, ApiError>> + Send;

    fn campaign_images(
        &self,
        campaign_id: &str,
    ) -> impl Future<Output = Result<CampaignImageSet, ApiError>> + Send;

    fn upload_image(
        &self,
        product_name: &str,
        image: ImageUpload,
    ) -> impl Future<Output = Result<UploadResponse, ApiError>> + Send;
}

/// [`CampaignApi`] over HTTP with a shared, pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL of a generated image. Only builds the link; the transfer is up to
    /// the caller.
    pub fn download_url(
        &self,
        campaign_id: &str,
        product_name: &str,
        filename: &str,
    ) -> Result<Url, ApiError> {
        self.endpoint(&["campaign", campaign_id, "download", product_name, filename])
    }

    /// Sends a GET request for a download URL and checks its status. The body
    /// is left to the caller to stream.
    pub async fn fetch_download(&self, url: Url) -> Result<Response, ApiError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        ensure_success(response, Operation::DownloadImage)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        operation: Operation,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        Ok(ensure_success(response, operation)?.json().await?)
    }
}

fn ensure_success(response: Response, operation: Operation) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { operation, status })
    }
}

impl CampaignApi for ApiClient {
    async fn submit_brief(&self, brief: &CampaignBrief) -> Result<SubmitResponse, ApiError> {
        let url = self.endpoint(&["generate-campaign"])?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(brief).send().await?;
        Ok(ensure_success(response, Operation::SubmitBrief)?
            .json()
            .await?)
    }

    async fn campaign_status(&self, campaign_id: &str) -> Result<CampaignStatus, ApiError> {
        self.get_json(&["campaign", campaign_id], Operation::GetStatus)
            .await
    }

    async fn list_campaigns(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&["campaigns"], Operation::ListCampaigns).await
    }

    async fn metrics(&self) -> Result<Vec<CampaignMetric>, ApiError> {
        self.get_json(&["metrics"], Operation::GetMetrics).await
    }

    async fn campaign_images(&self, campaign_id: &str) -> Result<CampaignImageSet, ApiError> {
        self.get_json(&["campaign", campaign_id, "images"], Operation::GetImages)
            .await
    }

    async fn upload_image(
        &self,
        product_name: &str,
        image: ImageUpload,
    ) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint(&["upload-image"])?;
        log::debug!("POST {url} ({}, {} bytes)", image.file_name, image.bytes.len());
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(image.content_type)?;
        let form = Form::new()
            .text("product_name", product_name.to_owned())
            .part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        Ok(ensure_success(response, Operation::UploadImage)?
            .json()
            .await?)
    }
}
