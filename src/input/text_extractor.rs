//! Text extraction from resume file bytes

use crate::error::{Result, ResumeScreenerError};
use pulldown_cmark::{Event, Parser};
use std::path::Path;

/// Supported resume/job-description source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    PlainText,
    Markdown,
}

impl SourceFormat {
    /// Detect the format from a file's extension. Returns `None` for
    /// anything the screener cannot read.
    pub fn for_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(SourceFormat::Pdf),
            "txt" => Some(SourceFormat::PlainText),
            "md" | "markdown" => Some(SourceFormat::Markdown),
            _ => None,
        }
    }

    pub fn extractor(&self) -> &'static dyn TextExtractor {
        match self {
            SourceFormat::Pdf => &PdfExtractor,
            SourceFormat::PlainText => &PlainTextExtractor,
            SourceFormat::Markdown => &MarkdownExtractor,
        }
    }
}

/// Turns raw file bytes into the text the ranking engine scores.
/// Implementations are pure with respect to their input; file IO is the
/// caller's job.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeScreenerError::PdfExtraction(format!("Failed to extract PDF text: {}", e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Resumes occasionally arrive with stray non-UTF-8 bytes; replace
        // rather than reject the whole document
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    /// Walk the markdown event stream and keep only the text content.
    /// Formatting markers never reach the ranking engine.
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let source = String::from_utf8_lossy(bytes);
        let mut text = String::new();

        for event in Parser::new(&source) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(_) => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(
            SourceFormat::for_path(Path::new("resume.PDF")),
            Some(SourceFormat::Pdf)
        );
        assert_eq!(
            SourceFormat::for_path(Path::new("notes.Markdown")),
            Some(SourceFormat::Markdown)
        );
        assert_eq!(SourceFormat::for_path(Path::new("resume.docx")), None);
        assert_eq!(SourceFormat::for_path(Path::new("resume")), None);
    }

    #[test]
    fn test_plain_text_tolerates_invalid_utf8() {
        let bytes = b"Python developer \xff with SQL";
        let text = PlainTextExtractor.extract(bytes).unwrap();
        assert!(text.contains("Python developer"));
        assert!(text.contains("with SQL"));
    }

    #[test]
    fn test_markdown_extraction_strips_formatting() {
        let source = b"# Alice Example\n\n**Data Scientist**\n\n- Python\n- `SQL`\n";
        let text = MarkdownExtractor.extract(source).unwrap();

        assert!(text.contains("Alice Example"));
        assert!(text.contains("Data Scientist"));
        assert!(text.contains("Python"));
        assert!(text.contains("SQL"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains('`'));
        assert!(!text.contains('-'));
    }

    #[test]
    fn test_markdown_line_breaks_separate_blocks() {
        let source = b"First paragraph\n\nSecond paragraph";
        let text = MarkdownExtractor.extract(source).unwrap();
        assert!(text.contains("First paragraph\n"));
        assert!(text.contains("Second paragraph"));
    }
}
