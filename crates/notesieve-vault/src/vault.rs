//! Markdown vault corpus: a directory tree of `.md` notes.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use notesieve_core::defaults::NOTE_EXTENSION;
use notesieve_core::{Document, DocumentCorpus, Error, NoteBody, Result};

use crate::frontmatter::extract_tags;

/// Corpus over a vault directory.
///
/// Documents are the note files under the root, excluding anything inside a
/// dot-directory (`.obsidian`, `.git`, `.trash`). Paths are root-relative and
/// `/`-separated; enumeration is sorted by path.
#[derive(Debug, Clone)]
pub struct VaultCorpus {
    root: PathBuf,
    extension: String,
}

impl VaultCorpus {
    /// Open a vault rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(Self {
                root,
                extension: NOTE_EXTENSION.to_string(),
            }),
            Ok(_) => Err(Error::CorpusUnavailable(format!(
                "{} is not a directory",
                root.display()
            ))),
            Err(e) => Err(Error::CorpusUnavailable(format!("{}: {}", root.display(), e))),
        }
    }

    /// Treat files with `extension` (without the dot) as notes.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, doc: &Document) -> Result<PathBuf> {
        let relative = Path::new(&doc.path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || doc.path.is_empty() {
            return Err(Error::DocumentRead(format!(
                "{}: path outside vault",
                doc.path
            )));
        }
        Ok(self.root.join(relative))
    }
}

fn is_dot_entry(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Walk the vault synchronously. Unreadable subdirectories are skipped.
fn scan(root: &Path, extension: &str) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    // The root itself may be a dot-directory (temp dirs often are).
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_dot_entry(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::CorpusUnavailable(format!("{}: {}", root.display(), e)));
            }
            Err(e) => {
                warn!(
                    subsystem = "vault",
                    component = "scan",
                    error = %e,
                    "Skipping unreadable vault entry"
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let is_note = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if !is_note {
            continue;
        }
        if let Some(path) = relative_path(root, entry.path()) {
            documents.push(Document::from_path(path));
        }
    }

    documents.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(documents)
}

#[async_trait]
impl DocumentCorpus for VaultCorpus {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        let root = self.root.clone();
        let extension = self.extension.clone();
        let documents = tokio::task::spawn_blocking(move || scan(&root, &extension))
            .await
            .map_err(|e| Error::CorpusUnavailable(format!("vault scan aborted: {}", e)))??;

        debug!(
            subsystem = "vault",
            component = "scan",
            vault_root = %self.root.display(),
            doc_count = documents.len(),
            "Vault enumerated"
        );
        Ok(documents)
    }

    async fn read_content(&self, doc: &Document) -> Result<String> {
        let path = self.full_path(doc)?;
        fs::read_to_string(&path)
            .await
            .map_err(|e| Error::DocumentRead(format!("{}: {}", doc.path, e)))
    }

    async fn tags(&self, doc: &Document) -> Result<Vec<String>> {
        let content = self.read_content(doc).await?;
        Ok(extract_tags(&content))
    }

    async fn read_note(&self, doc: &Document) -> Result<NoteBody> {
        let content = self.read_content(doc).await?;
        let tags = extract_tags(&content);
        Ok(NoteBody { content, tags })
    }

    async fn modified_time(&self, doc: &Document) -> Result<i64> {
        let path = self.full_path(doc)?;
        let modified = fs::metadata(&path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| Error::DocumentRead(format!("{}: {}", doc.path, e)))?;
        Ok(DateTime::<Utc>::from(modified).timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/vault");
        let path = Path::new("/vault/projects/alpha/plan.md");
        assert_eq!(
            relative_path(root, path).as_deref(),
            Some("projects/alpha/plan.md")
        );
        assert!(relative_path(root, Path::new("/elsewhere/x.md")).is_none());
    }

    #[test]
    fn test_full_path_rejects_escapes() {
        let corpus = VaultCorpus {
            root: PathBuf::from("/vault"),
            extension: NOTE_EXTENSION.to_string(),
        };
        assert!(corpus.full_path(&Document::from_path("../secret.md")).is_err());
        assert!(corpus.full_path(&Document::from_path("/etc/passwd")).is_err());
        assert_eq!(
            corpus.full_path(&Document::from_path("a/b.md")).unwrap(),
            PathBuf::from("/vault/a/b.md")
        );
    }

    #[test]
    fn test_with_extension_strips_dot() {
        let corpus = VaultCorpus {
            root: PathBuf::from("/vault"),
            extension: NOTE_EXTENSION.to_string(),
        }
        .with_extension(".markdown");
        assert_eq!(corpus.extension, "markdown");
    }
}
