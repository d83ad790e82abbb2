use adcraft_bridge::{brief::UploadReport, campaign::CampaignStatus};

/// The campaign created from the brief form and its latest polled status.
#[derive(Debug, Clone, Default)]
pub struct CampaignEntity {
    pub campaign_id: Option<String>,
    pub status: Option<CampaignStatus>,
    pub is_submitting: bool,
    /// Pre-upload outcome of the latest successful submission.
    pub uploads: Option<UploadReport>,
}

impl CampaignEntity {
    pub fn start_submission(&mut self) {
        self.is_submitting = true;
    }

    /// Switches to a freshly submitted campaign. The previous status is dropped
    /// until the first poll of the new one arrives.
    pub fn apply_submitted(&mut self, campaign_id: String, uploads: UploadReport) {
        self.is_submitting = false;
        self.campaign_id = Some(campaign_id);
        self.status = None;
        self.uploads = Some(uploads);
    }

    pub fn apply_submission_failed(&mut self) {
        self.is_submitting = false;
    }

    /// Stores `status` if it belongs to the current campaign. Returns whether
    /// it was applied.
    pub fn apply_status(&mut self, status: CampaignStatus) -> bool {
        if self.campaign_id.as_deref() != Some(status.campaign_id.as_str()) {
            log::debug!("Dropping status of campaign {}", status.campaign_id);
            return false;
        }
        self.status = Some(status);
        true
    }
}
