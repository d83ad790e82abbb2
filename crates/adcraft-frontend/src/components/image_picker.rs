use std::path::PathBuf;

use rfd::AsyncFileDialog;

/// Image formats the pipeline accepts.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Opens a native file dialog for one product image. `None` if cancelled.
pub async fn pick_image() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select product image")
        .add_filter("Images (JPG, PNG, WEBP, GIF, BMP)", &IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

/// File name shown next to a picked image.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
