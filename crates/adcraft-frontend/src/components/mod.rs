pub mod callout;
pub mod field_item;
pub mod image_picker;
pub mod notification_bar;
pub mod page_header;
pub mod progress_bar;
