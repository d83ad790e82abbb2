use adcraft_bridge::campaign::UploadResponse;

/// Emitted once a standalone upload settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    Uploaded,
    Failed,
}

/// State of the standalone product image upload.
#[derive(Debug, Clone, Default)]
pub struct UploadEntity {
    pub is_uploading: bool,
    pub last_result: Option<UploadResponse>,
}

impl UploadEntity {
    pub fn start(&mut self) {
        self.is_uploading = true;
    }

    /// Called when a new file is picked, so the old result is not mistaken
    /// for the new file's.
    pub fn file_changed(&mut self) {
        self.last_result = None;
    }

    pub fn finish(&mut self, result: Option<UploadResponse>) -> UploadEvent {
        self.is_uploading = false;
        match result {
            Some(response) => {
                self.last_result = Some(response);
                UploadEvent::Uploaded
            }
            None => UploadEvent::Failed,
        }
    }
}

impl gpui::EventEmitter<UploadEvent> for UploadEntity {}

#[cfg(test)]
mod tests {
    use adcraft_bridge::campaign::FileInfo;

    use super::*;

    fn response() -> UploadResponse {
        UploadResponse {
            product_name: "soap".to_owned(),
            file_info: FileInfo {
                filename: "soap.png".to_owned(),
                size: 2048,
            },
            asset_directory: "assets/soap".to_owned(),
            message: "Image uploaded successfully".to_owned(),
        }
    }

    #[test]
    fn failure_keeps_the_previous_result() {
        let mut upload = UploadEntity::default();
        upload.start();
        assert_eq!(upload.finish(Some(response())), UploadEvent::Uploaded);

        upload.start();
        assert!(upload.is_uploading);
        assert_eq!(upload.finish(None), UploadEvent::Failed);
        assert!(!upload.is_uploading);
        assert_eq!(upload.last_result, Some(response()));
    }

    #[test]
    fn picking_a_new_file_clears_the_previous_result() {
        let mut upload = UploadEntity::default();
        upload.start();
        upload.finish(Some(response()));

        upload.file_changed();
        assert!(upload.last_result.is_none());
        assert!(!upload.is_uploading);
    }
}
