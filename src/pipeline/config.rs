use crate::error::PipelineError;
use folio_style::ExportOptions;
use std::fs;
use std::path::Path;

/// Value written to the PDF `Producer` entry.
pub const DEFAULT_PRODUCER: &str = concat!("folio ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub options: ExportOptions,
    pub producer: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            options: ExportOptions::default(),
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }
}

/// Reads export options from a JSON file (`{"pageWidth": ..., "fontFamily": ...}`).
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<ExportOptions, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read options from '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{FontFamily, PageWidth};

    #[test]
    fn test_load_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{ "fontFamily": "serif" }"#).unwrap();
        let options = load_options(&path).unwrap();
        assert_eq!(options.font_family, FontFamily::Serif);
        assert_eq!(options.page_width, PageWidth::Medium);
    }

    #[test]
    fn test_load_options_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_options(dir.path().join("missing.json")), Err(PipelineError::Io(_))));
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "pageWidth": "letter" }"#).unwrap();
        assert!(matches!(load_options(&path), Err(PipelineError::Json(_))));
    }
}
