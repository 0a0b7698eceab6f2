//! Input processing module
//! Handles job description extraction and project list import

pub mod file_detector;
pub mod text_extractor;
pub mod projects;
pub mod manager;

pub use manager::InputManager;
