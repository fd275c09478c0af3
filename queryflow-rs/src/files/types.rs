//! Uploaded file records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// File metadata captured at upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub mime_type: String,
    pub last_modified: DateTime<Utc>,
    /// Page count, pdf only
    #[serde(default)]
    pub pages: Option<u32>,
}

/// An uploaded document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: u64,
    pub filename: String,
    /// Lower-case extension
    #[serde(rename = "type")]
    pub file_type: String,
    /// Size in bytes
    pub size: u64,
    pub extracted_text: String,
    pub metadata: FileMetadata,
    pub upload_date: DateTime<Utc>,
}

impl Record for FileRecord {
    fn id(&self) -> u64 {
        self.id
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.upload_date
    }
}

/// A file handed over by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
    pub last_modified: DateTime<Utc>,
}

impl UploadRequest {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            last_modified: Utc::now(),
        }
    }

    /// Text after the last `.`, lower-cased; the whole name when there is no dot
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}
