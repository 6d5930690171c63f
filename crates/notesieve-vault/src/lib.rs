//! # notesieve-vault
//!
//! Corpus backends for the notesieve engine.
//!
//! - [`MemoryCorpus`]: notes held in memory, for hosts that already own
//!   their notes
//! - [`VaultCorpus`]: a directory of Markdown notes with frontmatter and
//!   inline `#tags`

pub mod frontmatter;
pub mod memory;
pub mod vault;

pub use frontmatter::{extract_tags, frontmatter_tags, inline_tags, split_frontmatter};
pub use memory::{MemoryCorpus, MemoryNote};
pub use vault::VaultCorpus;
