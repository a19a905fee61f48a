//! File I/O operations for documents.
//!
//! This module loads YAML or JSON documents from disk or stdin, optionally
//! gzip-compressed.

pub mod loader;
