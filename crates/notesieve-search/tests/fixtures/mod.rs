//! Test fixtures for search engine integration tests.
//!
//! Provides sample corpora and corpus wrappers that count or break access.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use notesieve_core::{Document, DocumentCorpus, Error, Result};
use notesieve_vault::{MemoryCorpus, MemoryNote};

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Epoch ms used as "long ago" in time range tests (2020-01-01).
pub const OLD_MODIFIED: i64 = 1_577_836_800_000;
/// Epoch ms used as "recent" in time range tests (2024-06-01).
pub const RECENT_MODIFIED: i64 = 1_717_200_000_000;

/// Five notes across work, play and machine learning.
pub fn sample_corpus() -> MemoryCorpus {
    MemoryCorpus::new()
        .with(
            MemoryNote::new(
                "Project Plan.md",
                "Q3 goals and the deadline for the launch.",
                ["#work", "#urgent"],
            )
            .with_modified(RECENT_MODIFIED),
        )
        .with(
            MemoryNote::new("Weekend.md", "Hiking and board games.", ["#play"])
                .with_modified(RECENT_MODIFIED),
        )
        .with(
            MemoryNote::new(
                "ml/Machine Learning Notes.md",
                "Gradient descent review before the deadline.",
                ["#machine-learning", "#work"],
            )
            .with_modified(OLD_MODIFIED),
        )
        .with(
            MemoryNote::new("Groceries.md", "Milk, eggs, bread.", Vec::<String>::new())
                .with_modified(OLD_MODIFIED),
        )
        .with(
            MemoryNote::new("Standup.md", "The deadline moved to Friday.", ["#work"])
                .with_modified(RECENT_MODIFIED),
        )
}

/// Corpus in which `work` occurs 5 times and `play` twice.
pub fn tag_frequency_corpus() -> MemoryCorpus {
    let tags: [&[&str]; 6] = [
        &["#work", "#play"],
        &["#work"],
        &["#work", "#play"],
        &["#work"],
        &["#work"],
        &["#misc"],
    ];
    tags.iter()
        .enumerate()
        .fold(MemoryCorpus::new(), |corpus, (i, tags)| {
            corpus.with_note(format!("note-{}.md", i), "", tags.iter().copied())
        })
}

/// Wraps a corpus and counts every access.
pub struct CountingCorpus {
    inner: MemoryCorpus,
    calls: AtomicUsize,
    time_calls: AtomicUsize,
}

impl CountingCorpus {
    pub fn new(inner: MemoryCorpus) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            time_calls: AtomicUsize::new(0),
        }
    }

    /// Accesses of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Modification time lookups.
    pub fn time_calls(&self) -> usize {
        self.time_calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentCorpus for CountingCorpus {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.hit();
        self.inner.list_documents().await
    }

    async fn read_content(&self, doc: &Document) -> Result<String> {
        self.hit();
        self.inner.read_content(doc).await
    }

    async fn tags(&self, doc: &Document) -> Result<Vec<String>> {
        self.hit();
        self.inner.tags(doc).await
    }

    async fn modified_time(&self, doc: &Document) -> Result<i64> {
        self.hit();
        self.time_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.modified_time(doc).await
    }
}

/// Wraps a corpus and fails every read of the listed paths.
pub struct FlakyCorpus {
    inner: MemoryCorpus,
    broken: HashSet<String>,
    io_failure: bool,
}

impl FlakyCorpus {
    /// Broken documents fail with `Error::DocumentRead`.
    pub fn new<I, S>(inner: MemoryCorpus, broken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner,
            broken: broken.into_iter().map(Into::into).collect(),
            io_failure: false,
        }
    }

    /// Broken documents fail with a raw `Error::Io`.
    pub fn with_io_failures(mut self) -> Self {
        self.io_failure = true;
        self
    }

    fn check(&self, doc: &Document) -> Result<()> {
        if !self.broken.contains(&doc.path) {
            return Ok(());
        }
        if self.io_failure {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "device disconnected",
            )))
        } else {
            Err(Error::DocumentRead(format!("{}: permission denied", doc.path)))
        }
    }
}

#[async_trait]
impl DocumentCorpus for FlakyCorpus {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.inner.list_documents().await
    }

    async fn read_content(&self, doc: &Document) -> Result<String> {
        self.check(doc)?;
        self.inner.read_content(doc).await
    }

    async fn tags(&self, doc: &Document) -> Result<Vec<String>> {
        self.check(doc)?;
        self.inner.tags(doc).await
    }

    async fn modified_time(&self, doc: &Document) -> Result<i64> {
        self.check(doc)?;
        self.inner.modified_time(doc).await
    }
}

/// A corpus that cannot be enumerated at all.
pub struct UnavailableCorpus;

#[async_trait]
impl DocumentCorpus for UnavailableCorpus {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "vault folder removed",
        )))
    }

    async fn read_content(&self, doc: &Document) -> Result<String> {
        Err(Error::DocumentRead(doc.path.clone()))
    }

    async fn tags(&self, doc: &Document) -> Result<Vec<String>> {
        Err(Error::DocumentRead(doc.path.clone()))
    }

    async fn modified_time(&self, doc: &Document) -> Result<i64> {
        Err(Error::DocumentRead(doc.path.clone()))
    }
}

/// Paths of results, in ranked order.
pub fn paths(results: &[notesieve_core::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.path.as_str()).collect()
}
