//! Input manager for job descriptions and project lists

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::projects::{parse_projects_csv, parse_projects_json};
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::matching::Project;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
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
        }
    }

    /// Read a job description from a txt, md or pdf file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        Self::ensure_exists(path)?;

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            _ => {
                return Err(MatcherError::UnsupportedFormat(format!(
                    "Unsupported job description type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    /// Trimmed job description text; blank text is rejected
    pub async fn load_job_text(&mut self, path: &Path) -> Result<String> {
        if !FileType::from_path(path).is_document() {
            return Err(MatcherError::UnsupportedFormat(format!(
                "Job description must be a txt, md or pdf file: {}",
                path.display()
            )));
        }

        let text = self.extract_text(path).await?;
        let text = text.trim();
        if text.is_empty() {
            warn!("Job description {} is empty", path.display());
            return Err(MatcherError::InvalidInput(
                "Please provide a job description to match".to_string(),
            ));
        }

        Ok(text.to_string())
    }

    /// Read a project list from a csv or json file; the list may be empty
    pub async fn load_projects(&self, path: &Path) -> Result<Vec<Project>> {
        let file_type = FileType::from_path(path);
        if !file_type.is_project_list() {
            return Err(MatcherError::UnsupportedFormat(format!(
                "Project list must be a csv or json file: {}",
                path.display()
            )));
        }

        Self::ensure_exists(path)?;

        let source = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());

        let content = fs::read_to_string(path).await?;
        let projects = if file_type == FileType::Csv {
            info!("Importing projects from CSV: {}", path.display());
            parse_projects_csv(&content, &source)?
        } else {
            info!("Importing projects from JSON: {}", path.display());
            parse_projects_json(&content, &source)?
        };

        info!("Loaded {} projects from {}", projects.len(), path.display());
        Ok(projects)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
