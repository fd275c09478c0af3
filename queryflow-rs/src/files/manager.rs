//! File manager for mock uploads

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::collection::Collection;
use crate::config::UploadConfig;
use crate::error::{QueryFlowError, Result, UploadRejection};
use crate::files::types::{FileMetadata, FileRecord, UploadRequest};
use crate::latency::Latency;
use crate::random::RandomSource;

const FALLBACK_TEXT: &str = "Document content extracted successfully. This file contains relevant information that can be searched and referenced.";

/// Canned "extracted" text for an extension
pub fn sample_text(extension: &str) -> &'static str {
    match extension {
        "pdf" => "This is a sample PDF document containing important information about business processes and procedures. The document outlines key strategies and methodologies for improving organizational efficiency.",
        "doc" => "This Word document contains detailed analysis of market trends and customer behavior patterns. It includes comprehensive research findings and strategic recommendations for business growth.",
        "docx" => "Modern document format containing structured content with headers, paragraphs, and formatting. This document discusses innovative approaches to project management and team collaboration.",
        "xls" => "Spreadsheet data showing financial projections, budget allocations, and performance metrics. Contains multiple worksheets with charts and formulas for data analysis.",
        "xlsx" => "Advanced Excel workbook with pivot tables, conditional formatting, and complex calculations. Includes quarterly reports and trend analysis for decision making.",
        "ppt" => "Presentation slides covering quarterly business review and strategic planning initiatives. Contains charts, graphs, and key performance indicators.",
        "pptx" => "Professional PowerPoint presentation with modern design elements, infographics, and data visualizations for executive briefings and stakeholder meetings.",
        _ => FALLBACK_TEXT,
    }
}

/// Uploaded-file collection
pub struct FileManager {
    config: UploadConfig,
    files: Arc<RwLock<Collection<FileRecord>>>,
    latency: Latency,
    random: Arc<dyn RandomSource>,
}

impl FileManager {
    pub fn new(
        seed: Vec<FileRecord>,
        config: UploadConfig,
        latency: Latency,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            files: Arc::new(RwLock::new(Collection::from_records(seed))),
            latency,
            random,
        }
    }

    /// All files, newest upload first
    pub async fn list(&self) -> Vec<FileRecord> {
        self.latency
            .simulate(self.latency.ranges().files_list, self.random.as_ref())
            .await;

        let files = self.files.read().await;
        files.list()
    }

    pub async fn get(&self, id: u64) -> Option<FileRecord> {
        self.latency
            .simulate(self.latency.ranges().files_get, self.random.as_ref())
            .await;

        let files = self.files.read().await;
        files.get(id)
    }

    /// Check size and extension without storing anything
    pub fn validate(&self, request: &UploadRequest) -> std::result::Result<(), UploadRejection> {
        if request.size > self.config.max_size_bytes {
            return Err(UploadRejection::TooLarge {
                filename: request.name.clone(),
                size: request.size,
                limit: self.config.max_size_bytes,
            });
        }

        let extension = request.extension();
        if !self.config.allowed_extensions.iter().any(|ext| *ext == extension) {
            return Err(UploadRejection::UnsupportedType {
                filename: request.name.clone(),
                extension,
            });
        }

        Ok(())
    }

    /// Validate, "process" and store one file
    pub async fn upload(&self, request: UploadRequest) -> Result<FileRecord> {
        if let Err(rejection) = self.validate(&request) {
            warn!("Upload rejected: {}", rejection);
            return Err(QueryFlowError::Validation(rejection));
        }

        self.latency
            .simulate(self.latency.ranges().files_upload, self.random.as_ref())
            .await;

        let extension = request.extension();
        let pages = if extension == "pdf" {
            Some(self.random.between_u64(1, 20) as u32)
        } else {
            None
        };

        let mut files = self.files.write().await;
        let record = files.insert_with(|id| FileRecord {
            id,
            filename: request.name,
            extracted_text: sample_text(&extension).to_string(),
            file_type: extension,
            size: request.size,
            metadata: FileMetadata {
                mime_type: request.mime_type,
                last_modified: request.last_modified,
                pages,
            },
            upload_date: Utc::now(),
        });

        info!(
            "Uploaded file {} as id {} ({} bytes)",
            record.filename, record.id, record.size
        );
        Ok(record)
    }

    /// Upload files one after another, in input order
    ///
    /// One outcome per input; a rejected file does not stop the batch.
    pub async fn upload_batch(&self, requests: Vec<UploadRequest>) -> Vec<Result<FileRecord>> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            outcomes.push(self.upload(request).await);
        }

        let accepted = outcomes.iter().filter(|o| o.is_ok()).count();
        info!("Batch upload: {}/{} accepted", accepted, outcomes.len());
        outcomes
    }

    pub async fn delete(&self, id: u64) -> Result<bool> {
        self.latency
            .simulate(self.latency.ranges().files_delete, self.random.as_ref())
            .await;

        let mut files = self.files.write().await;
        match files.remove(id) {
            Some(record) => {
                info!("Deleted file {} ({})", id, record.filename);
                Ok(true)
            }
            None => Err(QueryFlowError::NotFound(format!("File not found: {}", id))),
        }
    }

    pub async fn count(&self) -> usize {
        self.files.read().await.len()
    }
}
