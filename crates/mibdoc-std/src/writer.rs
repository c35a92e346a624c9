//! JSON persistence for resolved documents.
//!
//! One file per module, named `<module>.json` in the output directory.
//! Companion loading for the rename table, which ships as a JSON file
//! mapping source module to `{old name: "Module::Symbol"}`.

use mibdoc_core::model::ModuleDocument;
use mibdoc_core::resolver::RenameTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writer failure.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// JSON encoding or decoding failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes resolved module documents into a directory.
#[derive(Debug)]
pub struct DocumentWriter {
    output_dir: PathBuf,
}

impl DocumentWriter {
    /// Create a writer, creating the output directory if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, WriterError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// The path a document will be written to.
    #[must_use]
    pub fn path_for(&self, document: &ModuleDocument) -> PathBuf {
        self.output_dir.join(format!("{}.json", document.name))
    }

    /// Write one document as pretty-printed JSON, returning its path.
    pub fn write(&self, document: &ModuleDocument) -> Result<PathBuf, WriterError> {
        let path = self.path_for(document);
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');
        fs::write(&path, json)?;
        Ok(path)
    }
}

/// Read a document back from disk.
pub fn load_document(path: &Path) -> Result<ModuleDocument, WriterError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Load a rename table from a JSON file.
pub fn load_rename_table(path: &Path) -> Result<RenameTable, WriterError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mibdoc_core::model::{ObjectRecord, Oid, QualifiedName, SyntaxKind};
    use pretty_assertions::assert_eq;

    fn sample_document() -> ModuleDocument {
        ModuleDocument {
            name: String::from("FOO-MIB"),
            oid: Some(Oid::from_slice(&[1, 3, 6, 1, 4, 1, 32473])),
            objects: vec![ObjectRecord {
                name: String::from("fooUptime"),
                oid: Oid::from_slice(&[1, 3, 6, 1, 4, 1, 32473, 1]),
                syntax: SyntaxKind::TimeTicks,
                syntax_options: None,
                not_accessible: false,
            }],
            tables: vec![],
        }
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path()).unwrap();
        let document = sample_document();

        let path = writer.write(&document).unwrap();
        assert_eq!(path, dir.path().join("FOO-MIB.json"));

        let back = load_document(&path).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_written_json_uses_output_schema() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path()).unwrap();
        let path = writer.write(&sample_document()).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Name"], serde_json::json!("FOO-MIB"));
        assert_eq!(value["OID"], serde_json::json!(".1.3.6.1.4.1.32473"));
        assert_eq!(value["Objects"][0]["Syntax"], serde_json::json!("TimeTicks"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_load_rename_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renames.json");
        std::fs::write(
            &path,
            r#"{"RFC1155-SMI": {"Counter": "SNMPv2-SMI::Counter32"}}"#,
        )
        .unwrap();

        let renames = load_rename_table(&path).unwrap();
        assert_eq!(
            renames.lookup("RFC1155-SMI", "Counter"),
            Some(&QualifiedName::new("SNMPv2-SMI", "Counter32"))
        );
    }

    #[test]
    fn test_missing_rename_table_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rename_table(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, WriterError::Io(_)));
    }
}
