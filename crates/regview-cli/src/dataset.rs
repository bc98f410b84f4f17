//! # Dataset Loading
//!
//! Reads a control-mapping dataset from disk: a JSON array of flat rows
//! in the shape the dashboard's table queries export. Unknown fields in
//! each row are ignored.

use std::path::Path;

use anyhow::Context;

use regview_core::ControlRow;

/// Load a dataset file into rows.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<ControlRow>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let rows: Vec<ControlRow> = serde_json::from_str(&raw)
        .with_context(|| format!("dataset {} is not a JSON row array", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "dataset loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_row_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"control":"AC-2: Account Management","acfID":"ACF-1052"}}]"#
        )
        .unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].control, "AC-2: Account Management");
        assert_eq!(rows[0].acf_id.as_deref(), Some("ACF-1052"));
    }

    #[test]
    fn missing_file_is_an_error_with_path_context() {
        let err = load_rows(Path::new("/nonexistent/rows.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rows.json"));
    }

    #[test]
    fn non_array_payload_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"control":"AC-2"}}"#).unwrap();
        assert!(load_rows(file.path()).is_err());
    }
}
