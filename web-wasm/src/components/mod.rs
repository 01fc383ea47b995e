//! UIコンポーネント

pub mod header;
pub mod preview_image;
pub mod results_panel;
pub mod upload_controls;
