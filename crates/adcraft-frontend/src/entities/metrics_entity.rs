use adcraft_bridge::campaign::CampaignMetric;

/// Metrics of every campaign; `None` until the backend answers.
#[derive(Debug, Clone, Default)]
pub struct MetricsEntity {
    pub metrics: Option<Vec<CampaignMetric>>,
}
