//! Wire shapes of the creative pipeline's REST API.
//!
//! Everything here is owned by the pipeline; the console only holds the most
//! recently fetched copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single product advertised by a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub description: String,
}

/// The brief payload submitted to trigger generation. Never carries images.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignBrief {
    pub products: Vec<Product>,
    pub target_region: String,
    pub target_audience: String,
    pub campaign_message: String,
}

/// Answer of the brief submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmitResponse {
    pub campaign_id: String,
    pub message: String,
}

/// Lifecycle state of a campaign as reported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignState {
    Processing,
    Completed,
    Failed,
    /// Also used for any state string this console does not know about.
    #[serde(other)]
    Pending,
}

impl CampaignState {
    /// Completed and failed campaigns never change state again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Coarse progress percentage shown while a campaign is generated.
    pub fn progress(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Processing => 60,
            Self::Completed | Self::Failed => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// Status snapshot returned while polling a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignStatus {
    pub campaign_id: String,
    pub status: CampaignState,
    #[serde(default)]
    pub brief: Option<CampaignBrief>,
    #[serde(default)]
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub size: u64,
}

/// Answer of the image upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadResponse {
    pub product_name: String,
    pub file_info: FileInfo,
    pub asset_directory: String,
    pub message: String,
}

/// One generated creative of a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageAsset {
    pub aspect_ratio: String,
    pub filename: String,
    pub size: u64,
}

impl ImageAsset {
    pub fn orientation(&self) -> &'static str {
        match self.aspect_ratio.as_str() {
            "1:1" => "Square",
            "9:16" => "Portrait",
            _ => "Landscape",
        }
    }
}

/// Image manifest of a campaign, grouped by product directory name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignImageSet {
    pub campaign_id: String,
    #[serde(default)]
    pub total_images: usize,
    #[serde(default)]
    pub images: BTreeMap<String, Vec<ImageAsset>>,
}

/// Whether a product's creatives were built from existing assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Reused,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductMetric {
    pub asset_status: AssetStatus,
    #[serde(default)]
    pub aspect_ratios: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsSummary {
    pub total_products: u32,
    pub products_with_existing_assets: u32,
    pub products_with_generated_assets: u32,
    pub total_creatives_generated: u32,
}

/// Recorded outcome of one campaign run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignMetric {
    pub campaign_id: String,
    #[serde(default)]
    pub timestamp: String,
    /// `completed` or one of the `failed_*` reasons.
    #[serde(default)]
    pub final_status: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub campaign_brief: Option<CampaignBrief>,
    #[serde(default)]
    pub product_metrics: BTreeMap<String, ProductMetric>,
    #[serde(default)]
    pub summary: MetricsSummary,
}

impl CampaignMetric {
    pub fn is_completed(&self) -> bool {
        self.final_status == "completed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_status_keeps_its_own_variant() {
        let states: Vec<CampaignState> =
            serde_json::from_str(r#"["pending","processing","completed","failed"]"#).unwrap();
        assert_eq!(
            states,
            vec![
                CampaignState::Pending,
                CampaignState::Processing,
                CampaignState::Completed,
                CampaignState::Failed
            ]
        );
    }

    #[test]
    fn unknown_status_reads_as_pending() {
        let status: CampaignStatus = serde_json::from_str(
            r#"{"campaign_id":"ab12cd34","status":"queued","logs":["Campaign ab12cd34 started"]}"#,
        )
        .unwrap();

        assert_eq!(status.status, CampaignState::Pending);
        assert!(status.brief.is_none());
        assert_eq!(status.logs.len(), 1);
    }

    #[test]
    fn processing_status_keeps_brief_snapshot() {
        let status: CampaignStatus = serde_json::from_str(
            r#"{
                "campaign_id": "ab12cd34",
                "status": "processing",
                "creatives": {},
                "brief": {
                    "products": [
                        {"name": "Soap", "description": "Natural soap"},
                        {"name": "Shampoo", "description": "Mild shampoo"}
                    ],
                    "target_region": "Europe",
                    "target_audience": "Families",
                    "campaign_message": "Clean, naturally"
                },
                "logs": []
            }"#,
        )
        .unwrap();

        assert_eq!(status.status, CampaignState::Processing);
        assert!(!status.status.is_terminal());
        assert_eq!(status.brief.unwrap().products.len(), 2);
    }

    #[test]
    fn terminal_states_report_full_progress() {
        assert!(CampaignState::Completed.is_terminal());
        assert!(CampaignState::Failed.is_terminal());
        assert_eq!(CampaignState::Failed.progress(), 100);
        assert_eq!(CampaignState::Processing.progress(), 60);
        assert_eq!(CampaignState::Pending.progress(), 0);
    }

    #[test]
    fn image_orientation_follows_aspect_ratio() {
        let image = |ratio: &str| ImageAsset {
            aspect_ratio: ratio.to_owned(),
            filename: format!("soap_{}.jpg", ratio.replace(':', "x")),
            size: 2048,
        };

        assert_eq!(image("1:1").orientation(), "Square");
        assert_eq!(image("9:16").orientation(), "Portrait");
        assert_eq!(image("16:9").orientation(), "Landscape");
    }

    #[test]
    fn sparse_metric_falls_back_to_defaults() {
        let metric: CampaignMetric = serde_json::from_str(
            r#"{
                "campaign_id": "ab12cd34",
                "timestamp": "2025-03-01T10:15:00.123456",
                "final_status": "failed_compliance",
                "product_metrics": {
                    "Soap": {"asset_status": "reused", "aspect_ratios": ["1:1", "9:16"]}
                }
            }"#,
        )
        .unwrap();

        assert!(!metric.is_completed());
        assert!(metric.reason.is_none());
        assert_eq!(metric.summary, MetricsSummary::default());
        assert_eq!(metric.product_metrics["Soap"].asset_status, AssetStatus::Reused);
    }
}
