//! Record store
//!
//! Read-only fixture collections: search documents, chat templates and the
//! file records the upload collection is seeded with.

pub mod fixtures;

use crate::chat::ChatTemplate;
use crate::error::{QueryFlowError, Result};
use crate::files::FileRecord;
use crate::search::SearchDocument;

/// Immutable fixture data shared by the managers
#[derive(Debug, Clone)]
pub struct RecordStore {
    documents: Vec<SearchDocument>,
    templates: Vec<ChatTemplate>,
    files: Vec<FileRecord>,
}

impl RecordStore {
    /// Build from explicit collections
    ///
    /// Chat always needs a default template, so an empty template list is
    /// rejected.
    pub fn new(
        documents: Vec<SearchDocument>,
        templates: Vec<ChatTemplate>,
        files: Vec<FileRecord>,
    ) -> Result<Self> {
        if templates.is_empty() {
            return Err(QueryFlowError::Fixture(
                "at least one chat template is required".to_string(),
            ));
        }
        Ok(Self {
            documents,
            templates,
            files,
        })
    }

    /// Store backed by the JSON fixtures compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::new(
            fixtures::search_documents()?,
            fixtures::chat_templates()?,
            fixtures::files()?,
        )
    }

    /// Store parsed from caller-supplied JSON arrays
    pub fn from_json(documents: &str, templates: &str, files: &str) -> Result<Self> {
        Self::new(
            serde_json::from_str(documents)?,
            serde_json::from_str(templates)?,
            serde_json::from_str(files)?,
        )
    }

    /// Documents in fixture order
    pub fn documents(&self) -> &[SearchDocument] {
        &self.documents
    }

    pub fn document(&self, id: u64) -> Option<&SearchDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Templates in scan order
    pub fn templates(&self) -> &[ChatTemplate] {
        &self.templates
    }

    /// First template, used when nothing matches
    pub fn default_template(&self) -> &ChatTemplate {
        &self.templates[0]
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }
}
