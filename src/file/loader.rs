//! Document loading functionality.
//!
//! This module provides functions to load YAML or JSON documents from files or
//! stdin, converting them into a [`Document`] that can be searched.

use crate::document::parser::{parse_document, Document};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a document from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use graphsift::file::loader::load_document;
///
/// let doc = load_document("fixtures/people.yaml").unwrap();
/// println!("{} nodes", doc.graph.len());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip data
/// - The contents are not valid UTF-8 YAML or JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), "loaded document");
    parse_document(&content)
}

/// Loads and parses a document from standard input.
///
/// Gzip-compressed input is detected by its magic bytes.
///
/// # Examples
///
/// ```no_run
/// use graphsift::file::loader::load_document_from_stdin;
///
/// // Usage: cat data.yaml | graphsift get - users[0].name
/// let doc = load_document_from_stdin().unwrap();
/// ```
pub fn load_document_from_stdin() -> Result<Document> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    load_document_from_bytes(&buffer)
}

/// Parses a document from raw bytes, decompressing gzip data if present.
pub fn load_document_from_bytes(bytes: &[u8]) -> Result<Document> {
    let content = if bytes.starts_with(&GZIP_MAGIC) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 in input")?
    };
    parse_document(&content)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
