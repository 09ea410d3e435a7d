//! Front matter and output persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Front matter delimiter line.
pub const DELIMITER: &str = "---";

/// Metadata block prefixed to the Markdown body.
///
/// Always rendered as exactly three `key: value` lines (`title`, `source`,
/// `type`) between delimiter lines, followed by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Document title
    pub title: String,

    /// Source attribution
    pub source: String,

    /// Document type
    pub doc_type: String,
}

impl FrontMatter {
    /// Create front matter from its three values.
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            doc_type: doc_type.into(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the source attribution.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the document type.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    /// Render the metadata block alone, ending with the blank line.
    pub fn header(&self) -> String {
        format!(
            "{DELIMITER}\ntitle: {}\nsource: {}\ntype: {}\n{DELIMITER}\n\n",
            yaml_value(&self.title),
            yaml_value(&self.source),
            yaml_value(&self.doc_type),
        )
    }

    /// Prefix `body` with the metadata block. The body is not modified.
    pub fn render(&self, body: &str) -> String {
        let mut document = self.header();
        document.push_str(body);
        document
    }
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self::new(
            "Kodeks Cywilny (Auto-generated)",
            "ISAP (Kancelaria Sejmu)",
            "law-document",
        )
    }
}

/// Format a scalar so it stays on one line and parses back as the same string.
fn yaml_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
        || value.contains(['\n', '\r', '"', '\\'])
        || value.trim() != value
        || value.starts_with([
            '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
            '@', '`',
        ]);

    if needs_quotes {
        format!("\"{}\"", escape_yaml(value))
    } else {
        value.to_string()
    }
}

/// Escape special characters for double-quoted YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Write a finished document, creating missing parent directories.
///
/// The content goes to a temporary sibling first and is renamed into
/// place, so a failed write never leaves a truncated document behind.
pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Other(format!("Invalid output path: {}", path.display())))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".part");
    let tmp_path = path.with_file_name(tmp_name);

    let written = write_and_sync(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_and_sync(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
