use adcraft_bridge::campaign::CampaignImageSet;

/// Campaign list and the image manifest of the selected campaign.
#[derive(Debug, Clone, Default)]
pub struct DownloadsEntity {
    /// `None` while the list is being fetched.
    pub campaigns: Option<Vec<String>>,
    pub selected: Option<String>,
    pub images: Option<CampaignImageSet>,
    pub is_loading_images: bool,
}

impl DownloadsEntity {
    /// Forgets everything fetched before, ahead of a fresh campaign list fetch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selects a campaign, dropping the images of the previous one.
    pub fn select(&mut self, campaign_id: String) {
        self.selected = Some(campaign_id);
        self.images = None;
        self.is_loading_images = true;
    }

    fn is_selected(&self, campaign_id: &str) -> bool {
        self.selected.as_deref() == Some(campaign_id)
    }

    /// Stores `images` if they belong to the selected campaign. Returns
    /// whether they were applied.
    pub fn apply_images(&mut self, images: CampaignImageSet) -> bool {
        if !self.is_selected(&images.campaign_id) {
            log::debug!("Dropping images of unselected campaign {}", images.campaign_id);
            return false;
        }
        self.images = Some(images);
        self.is_loading_images = false;
        true
    }

    pub fn apply_images_failed(&mut self, campaign_id: &str) -> bool {
        if !self.is_selected(campaign_id) {
            return false;
        }
        self.is_loading_images = false;
        true
    }
}
