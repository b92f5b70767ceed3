//! Corpus loading - plain-text documents from a directory

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info};

use crate::config::CorpusConfig;
use crate::error::{QaError, Result};

/// A source document, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the corpus root, `/`-separated
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Load every eligible document under `options.dir`, sorted by identifier.
///
/// Fails up front when the directory is missing or holds no eligible file,
/// so a broken corpus is reported before any indexing starts.
pub fn load_documents(options: &CorpusConfig) -> Result<Vec<Document>> {
    let root = options.dir.as_path();
    if !root.is_dir() {
        return Err(QaError::CorpusNotFound(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .max_depth(if options.recursive { None } else { Some(1) })
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !is_eligible(path, &options.suffixes) {
            continue;
        }

        let text = std::fs::read_to_string(path).map_err(|source| QaError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let id = document_id(root, path);
        debug!("Loaded {} ({} bytes)", id, text.len());
        documents.push(Document { id, text });
    }

    if documents.is_empty() {
        return Err(QaError::EmptyCorpus {
            root: root.to_path_buf(),
            suffixes: options.suffixes.clone(),
        });
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));
    info!("Loaded {} documents from {}", documents.len(), root.display());

    Ok(documents)
}

fn is_eligible(path: &Path, suffixes: &[String]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| suffixes.iter().any(|s| name.ends_with(s.as_str())))
}

fn document_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
