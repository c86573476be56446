//! Input manager: routes files to extractors and builds ranking documents

use crate::error::{Result, ResumeScreenerError};
use crate::input::text_extractor::SourceFormat;
use crate::ranking::Document;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// What to do when extraction fails for one resume in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPolicy {
    /// Abort the batch on the first failing file
    Propagate,
    /// Treat the failing file as an empty document and keep going
    EmptyDocument,
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read one file and extract its text. The format decides the extractor;
    /// the file is read exactly once and the result cached by path.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let cache_key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&cache_key) {
                debug!("Extraction cache hit: {}", path.display());
                return Ok(cached.clone());
            }
        }

        let format = SourceFormat::for_path(path).ok_or_else(|| {
            ResumeScreenerError::UnsupportedFormat(format!(
                "Cannot read {} (expected pdf, txt, or md)",
                path.display()
            ))
        })?;

        let bytes = fs::read(path).await.map_err(|e| {
            ResumeScreenerError::InvalidInput(format!("Cannot open {}: {}", path.display(), e))
        })?;

        debug!("Extracting {:?} text from {}", format, path.display());
        let text = format.extractor().extract(&bytes)?;

        if self.enable_cache {
            self.cache.insert(cache_key, text.clone());
        }

        Ok(text)
    }

    /// Load one file as a ranking document, keyed by its file name
    pub async fn load_document(&mut self, path: &Path) -> Result<Document> {
        let text = self.extract_text(path).await?;
        Ok(Document::new(Self::identifier_for(path), text))
    }

    /// Load a batch of resumes in upload order. Under the `EmptyDocument`
    /// policy a failing file becomes an empty document (it will score zero)
    /// instead of aborting the batch.
    pub async fn load_documents(
        &mut self,
        paths: &[impl AsRef<Path>],
        policy: ExtractionPolicy,
    ) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            match self.load_document(path).await {
                Ok(doc) => documents.push(doc),
                Err(e) if policy == ExtractionPolicy::EmptyDocument => {
                    warn!("Extraction failed for {}: {}", path.display(), e);
                    documents.push(Document::new(Self::identifier_for(path), ""));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(documents)
    }

    fn identifier_for(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
