use adcraft_bridge::{
    brief::{BriefDraft, BriefValidationError, UploadOutcome, UploadReport},
    campaign::SubmitResponse,
};

use crate::{
    api::{ApiError, CampaignApi, ImageUpload},
    flows::upload::UploadError,
};

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] BriefValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub response: SubmitResponse,
    pub uploads: UploadReport,
}

/// Runs the two-phase brief submission.
///
/// Attached images are uploaded first, one product at a time; a failed upload
/// is recorded in the report and does not stop the submission. The brief is
/// then submitted exactly once, without any image data. Only a failure of
/// that final request fails the whole submission.
pub async fn submit_campaign<A: CampaignApi>(
    api: &A,
    draft: &BriefDraft,
) -> Result<SubmissionOutcome, SubmissionError> {
    draft.validate()?;

    let mut uploads = UploadReport::default();
    for product in &draft.products {
        let Some((product_name, image)) = product.upload_target() else {
            continue;
        };

        let result: Result<_, UploadError> = async {
            let payload = ImageUpload::read(image).await?;
            Ok(api.upload_image(product_name, payload).await?)
        }
        .await;

        match result {
            Ok(_) => uploads.record(product_name, UploadOutcome::Uploaded),
            Err(error) => {
                log::warn!("Failed to upload image for product {product_name}: {error}");
                uploads.record(
                    product_name,
                    UploadOutcome::Failed {
                        reason: error.to_string(),
                    },
                );
            }
        }
    }

    let response = api.submit_brief(&draft.to_brief()).await?;
    log::info!(
        "Campaign {} submitted with {} products",
        response.campaign_id,
        draft.products.len()
    );
    Ok(SubmissionOutcome { response, uploads })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use adcraft_bridge::{brief::ProductDraft, campaign::Product};

    use super::*;
    use crate::testing::FakeApi;

    fn draft(images: [Option<PathBuf>; 2]) -> BriefDraft {
        let [first, second] = images;
        BriefDraft {
            products: vec![
                ProductDraft {
                    name: "Soap".into(),
                    description: "Natural olive soap".into(),
                    image: first,
                },
                ProductDraft {
                    name: "Shampoo".into(),
                    description: "Mild herbal shampoo".into(),
                    image: second,
                },
            ],
            target_region: "Europe".into(),
            target_audience: "Families".into(),
            campaign_message: "Clean, naturally".into(),
        }
    }

    #[tokio::test]
    async fn failed_image_upload_still_submits_the_brief_once() {
        let api = FakeApi::default();
        api.fail_uploads_for("Soap");
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("soap.png");
        std::fs::write(&image, b"png").unwrap();

        let outcome = submit_campaign(&api, &draft([Some(image), None]))
            .await
            .unwrap();

        assert_eq!(outcome.response.campaign_id, "ab12cd34");
        assert_eq!(outcome.uploads.attempted(), 1);
        assert_eq!(outcome.uploads.failed(), 1);

        let submitted = api.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0].products,
            vec![
                Product {
                    name: "Soap".into(),
                    description: "Natural olive soap".into(),
                },
                Product {
                    name: "Shampoo".into(),
                    description: "Mild herbal shampoo".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn unreadable_image_is_recorded_not_fatal() {
        let api = FakeApi::default();
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("shampoo.jpg");
        std::fs::write(&good, b"jpeg").unwrap();

        let outcome = submit_campaign(
            &api,
            &draft([Some(dir.path().join("gone.png")), Some(good)]),
        )
        .await
        .unwrap();

        assert_eq!(outcome.uploads.attempted(), 2);
        assert_eq!(outcome.uploads.failed(), 1);
        assert_eq!(outcome.uploads.uploads[1].outcome, UploadOutcome::Uploaded);
        assert_eq!(api.uploads().len(), 1);
        assert_eq!(api.submitted().len(), 1);
    }

    #[tokio::test]
    async fn uploads_happen_in_product_order_before_submit() {
        let api = FakeApi::default();
        let dir = tempfile::tempdir().unwrap();
        let soap = dir.path().join("soap.png");
        let shampoo = dir.path().join("shampoo.png");
        std::fs::write(&soap, b"png").unwrap();
        std::fs::write(&shampoo, b"png").unwrap();

        let outcome = submit_campaign(&api, &draft([Some(soap), Some(shampoo)]))
            .await
            .unwrap();

        let names: Vec<_> = api.uploads().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Soap".to_owned(), "Shampoo".to_owned()]);
        assert_eq!(outcome.uploads.failure_summary(), None);
    }

    #[tokio::test]
    async fn invalid_draft_makes_no_requests() {
        let api = FakeApi::default();
        let mut invalid = draft([None, None]);
        invalid.campaign_message = "  ".into();

        let error = submit_campaign(&api, &invalid).await.unwrap_err();
        assert!(matches!(
            error,
            SubmissionError::Invalid(BriefValidationError::MissingCampaignMessage)
        ));
        assert!(api.submitted().is_empty());
        assert!(api.uploads().is_empty());
    }

    #[tokio::test]
    async fn brief_failure_fails_the_submission() {
        let api = FakeApi::default();
        api.fail_submissions();

        let error = submit_campaign(&api, &draft([None, None]))
            .await
            .unwrap_err();
        assert!(matches!(error, SubmissionError::Api(_)));
        assert_eq!(api.submitted().len(), 1);
    }
}
