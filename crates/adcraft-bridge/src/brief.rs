//! Client-side campaign brief drafts, their validation gate, and the report of
//! the best-effort image pre-upload phase.

use std::path::PathBuf;

use crate::campaign::{CampaignBrief, Product};

/// Minimum amount of products a campaign brief must contain.
pub const MIN_PRODUCTS: usize = 2;

/// A product as typed into the brief form, with an optional attached image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub image: Option<PathBuf>,
}

impl ProductDraft {
    /// Name under which the attached image is uploaded, if the product has
    /// both a usable name and an image.
    pub fn upload_target(&self) -> Option<(&str, &PathBuf)> {
        let name = self.name.trim();
        match &self.image {
            Some(image) if !name.is_empty() => Some((name, image)),
            _ => None,
        }
    }
}

/// Form state of the campaign brief before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefDraft {
    pub products: Vec<ProductDraft>,
    pub target_region: String,
    pub target_audience: String,
    pub campaign_message: String,
}

impl Default for BriefDraft {
    fn default() -> Self {
        Self {
            products: vec![ProductDraft::default(); MIN_PRODUCTS],
            target_region: String::new(),
            target_audience: String::new(),
            campaign_message: String::new(),
        }
    }
}

/// First reason a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BriefValidationError {
    #[error("at least 2 products are required, got {0}")]
    NotEnoughProducts(usize),
    #[error("product {0} is missing a name")]
    MissingProductName(usize),
    #[error("product {0} is missing a description")]
    MissingProductDescription(usize),
    #[error("target region is required")]
    MissingTargetRegion,
    #[error("target audience is required")]
    MissingTargetAudience,
    #[error("campaign message is required")]
    MissingCampaignMessage,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl BriefDraft {
    /// Checks every required field after trimming. Product numbers in errors
    /// are 1-based, matching the form labels.
    pub fn validate(&self) -> Result<(), BriefValidationError> {
        if self.products.len() < MIN_PRODUCTS {
            return Err(BriefValidationError::NotEnoughProducts(self.products.len()));
        }

        for (index, product) in self.products.iter().enumerate() {
            if is_blank(&product.name) {
                return Err(BriefValidationError::MissingProductName(index + 1));
            }
            if is_blank(&product.description) {
                return Err(BriefValidationError::MissingProductDescription(index + 1));
            }
        }

        if is_blank(&self.target_region) {
            return Err(BriefValidationError::MissingTargetRegion);
        }
        if is_blank(&self.target_audience) {
            return Err(BriefValidationError::MissingTargetAudience);
        }
        if is_blank(&self.campaign_message) {
            return Err(BriefValidationError::MissingCampaignMessage);
        }

        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the JSON payload of the brief. Attached images are dropped.
    pub fn to_brief(&self) -> CampaignBrief {
        CampaignBrief {
            products: self
                .products
                .iter()
                .map(|product| Product {
                    name: product.name.trim().to_owned(),
                    description: product.description.trim().to_owned(),
                })
                .collect(),
            target_region: self.target_region.trim().to_owned(),
            target_audience: self.target_audience.trim().to_owned(),
            campaign_message: self.campaign_message.trim().to_owned(),
        }
    }
}

/// Result of one best-effort product image upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpload {
    pub product_name: String,
    pub outcome: UploadOutcome,
}

/// Outcomes of the image pre-upload phase, in product order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploads: Vec<ProductUpload>,
}

impl UploadReport {
    pub fn record(&mut self, product_name: impl Into<String>, outcome: UploadOutcome) {
        self.uploads.push(ProductUpload {
            product_name: product_name.into(),
            outcome,
        });
    }

    pub fn attempted(&self) -> usize {
        self.uploads.len()
    }

    pub fn failed(&self) -> usize {
        self.uploads
            .iter()
            .filter(|upload| matches!(upload.outcome, UploadOutcome::Failed { .. }))
            .count()
    }

    /// User-facing summary, present only when something failed.
    pub fn failure_summary(&self) -> Option<String> {
        match self.failed() {
            0 => None,
            failed => Some(format!(
                "{failed} of {} product images failed to upload",
                self.attempted()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BriefDraft {
        BriefDraft {
            products: vec![
                ProductDraft {
                    name: "Soap".into(),
                    description: "Natural olive soap".into(),
                    image: None,
                },
                ProductDraft {
                    name: "Shampoo".into(),
                    description: "Mild herbal shampoo".into(),
                    image: None,
                },
            ],
            target_region: "Europe".into(),
            target_audience: "Families with children, ages 25-45".into(),
            campaign_message: "Clean your family's clothes the natural way".into(),
        }
    }

    #[test]
    fn complete_draft_is_submittable() {
        assert!(valid_draft().is_submittable());
    }

    #[test]
    fn default_draft_has_two_empty_products() {
        let draft = BriefDraft::default();
        assert_eq!(draft.products.len(), MIN_PRODUCTS);
        assert!(!draft.is_submittable());
    }

    #[test]
    fn single_product_is_rejected() {
        let mut draft = valid_draft();
        draft.products.pop();
        assert_eq!(
            draft.validate(),
            Err(BriefValidationError::NotEnoughProducts(1))
        );
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut draft = valid_draft();
        draft.products[1].description = "   \n".into();
        assert_eq!(
            draft.validate(),
            Err(BriefValidationError::MissingProductDescription(2))
        );

        let mut draft = valid_draft();
        draft.products[0].name = "\t".into();
        assert_eq!(
            draft.validate(),
            Err(BriefValidationError::MissingProductName(1))
        );

        for field in 0..3 {
            let mut draft = valid_draft();
            match field {
                0 => draft.target_region = " ".into(),
                1 => draft.target_audience = String::new(),
                _ => draft.campaign_message = "  ".into(),
            }
            assert!(!draft.is_submittable());
        }
    }

    #[test]
    fn brief_payload_is_trimmed_and_image_free() {
        let mut draft = valid_draft();
        draft.products[0].name = "  Soap ".into();
        draft.products[0].image = Some(PathBuf::from("/tmp/soap.png"));

        let brief = draft.to_brief();
        assert_eq!(brief.products[0].name, "Soap");
        assert_eq!(brief.products.len(), 2);
        assert_eq!(brief.target_region, "Europe");
    }

    #[test]
    fn upload_target_needs_name_and_image() {
        let mut product = ProductDraft {
            name: "  ".into(),
            description: "x".into(),
            image: Some(PathBuf::from("soap.png")),
        };
        assert!(product.upload_target().is_none());

        product.name = " Soap ".into();
        let (name, _) = product.upload_target().unwrap();
        assert_eq!(name, "Soap");

        product.image = None;
        assert!(product.upload_target().is_none());
    }

    #[test]
    fn report_summarizes_failures_only() {
        let mut report = UploadReport::default();
        report.record("Soap", UploadOutcome::Uploaded);
        assert_eq!(report.failure_summary(), None);

        report.record(
            "Shampoo",
            UploadOutcome::Failed {
                reason: "HTTP 500".into(),
            },
        );
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.failure_summary().as_deref(),
            Some("1 of 2 product images failed to upload")
        );
    }
}
