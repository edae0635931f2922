use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One entry in the carousel's content sequence: an image source plus
/// optional text metadata. The `source` doubles as the record's identity
/// within a sequence; duplicate sources are a caller error and are not
/// detected here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideRecord {
    pub source: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl SlideRecord {
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: None,
            title: None,
            link: None,
            alt: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("manifest {path} entry {index} has an empty source")]
    EmptySource { path: String, index: usize },
}

/// Loads slide records from a JSON manifest: an array of objects with a
/// required `source` and optional `caption`, `title`, `link` and `alt`.
pub fn load_manifest(path: &Path) -> Result<Vec<SlideRecord>, ManifestError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| ManifestError::Read {
        path: display.clone(),
        source: e,
    })?;

    let records: Vec<SlideRecord> =
        serde_json::from_slice(&bytes).map_err(|e| ManifestError::Parse {
            path: display.clone(),
            source: e,
        })?;

    for (index, record) in records.iter().enumerate() {
        if record.source.is_empty() {
            return Err(ManifestError::EmptySource {
                path: display.clone(),
                index,
            });
        }
    }

    Ok(records)
}

/// Rebases relative manifest sources onto the manifest's own directory, so
/// a manifest can sit next to its images.
pub fn resolve_sources(records: &mut [SlideRecord], base: &Path) {
    for record in records {
        let source = Path::new(&record.source);
        if source.is_relative() {
            record.source = base.join(source).to_string_lossy().into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("slides.json");
        let mut file = fs::File::create(&path).expect("create manifest");
        file.write_all(content.as_bytes()).expect("write manifest");
        (dir, path)
    }

    #[test]
    fn parses_full_records() {
        let (_dir, path) = write_manifest(
            r#"[
                {"source": "one.jpg", "caption": "The first slide"},
                {"source": "two.jpg", "title": "Two", "link": "https://example.com", "alt": "A beach"}
            ]"#,
        );

        let records = load_manifest(&path).expect("manifest should parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "one.jpg");
        assert_eq!(records[0].caption.as_deref(), Some("The first slide"));
        assert_eq!(records[0].title, None);
        assert_eq!(records[1].alt.as_deref(), Some("A beach"));
        assert_eq!(records[1].link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn rejects_empty_source() {
        let (_dir, path) = write_manifest(r#"[{"source": ""}]"#);

        let err = load_manifest(&path).expect_err("empty source should be rejected");
        assert!(matches!(err, ManifestError::EmptySource { index: 0, .. }));
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_manifest(&dir.path().join("absent.json"))
            .expect_err("missing manifest should error");
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn reports_malformed_json() {
        let (_dir, path) = write_manifest("[{");
        let err = load_manifest(&path).expect_err("malformed manifest should error");
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn resolves_relative_sources_against_base() {
        let mut records = vec![
            SlideRecord::from_source("one.jpg"),
            SlideRecord::from_source("/abs/two.jpg"),
        ];
        resolve_sources(&mut records, Path::new("/photos"));

        assert_eq!(records[0].source, "/photos/one.jpg");
        assert_eq!(records[1].source, "/abs/two.jpg");
    }
}
