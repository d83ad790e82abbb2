//! In-memory [`CampaignApi`] used by the flow and poller tests.

use std::{
    collections::{BTreeMap, HashMap, HashSet, VecDeque},
    sync::{Arc, Mutex},
    time::Duration,
};

use adcraft_bridge::campaign::{
    CampaignBrief, CampaignImageSet, CampaignMetric, CampaignState, CampaignStatus, FileInfo,
    ImageAsset, SubmitResponse, UploadResponse,
};
use reqwest::StatusCode;
use tokio::time::Instant;

use crate::api::{ApiError, CampaignApi, ImageUpload, Operation};

fn server_error(operation: Operation) -> ApiError {
    ApiError::Status {
        operation,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Default)]
struct FakeState {
    statuses: HashMap<String, VecDeque<Result<CampaignState, ()>>>,
    status_delays: HashMap<String, Duration>,
    status_calls: HashMap<String, Vec<Instant>>,
    submit_fails: bool,
    submitted: Vec<CampaignBrief>,
    failing_uploads: HashSet<String>,
    uploads: Vec<(String, ImageUpload)>,
    image_delays: HashMap<String, Duration>,
    failing_images: HashSet<String>,
    listings_fail: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    /// Responses returned by successive status requests. The last one repeats.
    pub fn script_statuses(
        &self,
        campaign_id: &str,
        script: impl IntoIterator<Item = Result<CampaignState, ()>>,
    ) {
        self.state
            .lock()
            .unwrap()
            .statuses
            .insert(campaign_id.to_owned(), script.into_iter().collect());
    }

    pub fn delay_statuses(&self, campaign_id: &str, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .status_delays
            .insert(campaign_id.to_owned(), delay);
    }

    pub fn status_calls(&self, campaign_id: &str) -> Vec<Instant> {
        self.state
            .lock()
            .unwrap()
            .status_calls
            .get(campaign_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn fail_submissions(&self) {
        self.state.lock().unwrap().submit_fails = true;
    }

    pub fn submitted(&self) -> Vec<CampaignBrief> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub fn fail_uploads_for(&self, product_name: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_uploads
            .insert(product_name.to_owned());
    }

    pub fn uploads(&self) -> Vec<(String, ImageUpload)> {
        self.state.lock().unwrap().uploads.clone()
    }

    /// Makes both the campaign list and the metrics request fail.
    pub fn fail_listings(&self) {
        self.state.lock().unwrap().listings_fail = true;
    }

    pub fn fail_images_for(&self, campaign_id: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_images
            .insert(campaign_id.to_owned());
    }

    pub fn delay_images(&self, campaign_id: &str, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .image_delays
            .insert(campaign_id.to_owned(), delay);
    }
}

impl CampaignApi for FakeApi {
    async fn submit_brief(&self, brief: &CampaignBrief) -> Result<SubmitResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push(brief.clone());
        if state.submit_fails {
            return Err(server_error(Operation::SubmitBrief));
        }
        Ok(SubmitResponse {
            campaign_id: "ab12cd34".to_owned(),
            message: "Campaign ab12cd34 is being processed".to_owned(),
        })
    }

    async fn campaign_status(&self, campaign_id: &str) -> Result<CampaignStatus, ApiError> {
        let (delay, next) = {
            let mut state = self.state.lock().unwrap();
            state
                .status_calls
                .entry(campaign_id.to_owned())
                .or_default()
                .push(Instant::now());
            let script = state.statuses.entry(campaign_id.to_owned()).or_default();
            let next = if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            };
            (state.status_delays.get(campaign_id).copied(), next)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match next {
            Some(Ok(status)) => Ok(CampaignStatus {
                campaign_id: campaign_id.to_owned(),
                status,
                brief: None,
                logs: vec![format!("Campaign {campaign_id} started")],
            }),
            _ => Err(server_error(Operation::GetStatus)),
        }
    }

    async fn list_campaigns(&self) -> Result<Vec<String>, ApiError> {
        if self.state.lock().unwrap().listings_fail {
            return Err(server_error(Operation::ListCampaigns));
        }
        Ok(vec!["ab12cd34".to_owned()])
    }

    async fn metrics(&self) -> Result<Vec<CampaignMetric>, ApiError> {
        if self.state.lock().unwrap().listings_fail {
            return Err(server_error(Operation::GetMetrics));
        }
        Ok(Vec::new())
    }

    async fn campaign_images(&self, campaign_id: &str) -> Result<CampaignImageSet, ApiError> {
        let (delay, fails) = {
            let state = self.state.lock().unwrap();
            (
                state.image_delays.get(campaign_id).copied(),
                state.failing_images.contains(campaign_id),
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fails {
            return Err(server_error(Operation::GetImages));
        }

        let images = vec![ImageAsset {
            aspect_ratio: "1:1".to_owned(),
            filename: format!("{campaign_id}_1x1.jpg"),
            size: 48_213,
        }];
        Ok(CampaignImageSet {
            campaign_id: campaign_id.to_owned(),
            total_images: images.len(),
            images: BTreeMap::from([("soap".to_owned(), images)]),
        })
    }

    async fn upload_image(
        &self,
        product_name: &str,
        image: ImageUpload,
    ) -> Result<UploadResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.uploads.push((product_name.to_owned(), image.clone()));
        if state.failing_uploads.contains(product_name) {
            return Err(server_error(Operation::UploadImage));
        }
        Ok(UploadResponse {
            product_name: product_name.to_owned(),
            file_info: FileInfo {
                filename: image.file_name,
                size: image.bytes.len() as u64,
            },
            asset_directory: format!("assets/{product_name}"),
            message: format!("Image uploaded for {product_name}"),
        })
    }
}
