//! Input processing module
//! Handles format detection, text extraction, and resume loading

pub mod manager;
pub mod text_extractor;

pub use manager::{ExtractionPolicy, InputManager};
pub use text_extractor::{SourceFormat, TextExtractor};
