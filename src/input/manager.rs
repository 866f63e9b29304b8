//! Input manager for handling different file types

use crate::config::InputConfig;
use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_bytes: u64,
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
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new()
            .with_cache(config.enable_cache)
            .with_max_file_bytes(config.max_file_bytes)
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_file_bytes(mut self, limit: u64) -> Self {
        self.max_file_bytes = limit;
        self
    }

    /// Read a document and return its text. Documents with no readable text
    /// are rejected here so the scorer never sees them.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        let metadata = tokio::fs::metadata(path).await.map_err(|_| {
            ResumeAtsError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if metadata.len() > self.max_file_bytes {
            return Err(ResumeAtsError::InputTooLarge {
                path: path.display().to_string(),
                size: metadata.len(),
                limit: self.max_file_bytes,
            });
        }

        let text = match self.detect_file_type(path)? {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeAtsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if text.trim().is_empty() {
            return Err(ResumeAtsError::EmptyDocument(path.display().to_string()));
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAtsError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
