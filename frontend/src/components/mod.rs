pub mod header;
pub mod image_upload;
pub mod result_display;
pub mod utils;
