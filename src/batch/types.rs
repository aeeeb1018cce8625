// the batch request contract
use serde::{Deserialize, Serialize};

/// A single document reference inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsDocument {
    pub gcs_uri: String, // gs://bucket/path/to/file.pdf
    pub mime_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcsDocuments {
    pub documents: Vec<GcsDocument>,
}

/// One batch of documents, ready for a batch process request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDocumentsInputConfig {
    pub gcs_documents: GcsDocuments,
}

impl GcsDocument {
    pub fn new(gcs_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            gcs_uri: gcs_uri.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Reference an object by its `gs://` URI
    pub fn from_object(bucket: &str, name: &str, mime_type: impl Into<String>) -> Self {
        Self::new(format!("gs://{}/{}", bucket, name), mime_type)
    }
}

impl BatchDocumentsInputConfig {
    pub fn new(documents: Vec<GcsDocument>) -> Self {
        Self {
            gcs_documents: GcsDocuments { documents },
        }
    }

    pub fn documents(&self) -> &[GcsDocument] {
        &self.gcs_documents.documents
    }

    pub fn len(&self) -> usize {
        self.gcs_documents.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gcs_documents.documents.is_empty()
    }
}
