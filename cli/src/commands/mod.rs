#[cfg(feature = "download")]
pub mod download;
pub mod options;
pub mod render;
