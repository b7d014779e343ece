//! JSON rendering and atomic file output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use gstr_model::{FilingDocument, FilingSelector};
use tempfile::NamedTempFile;

use crate::error::{OutputError, Result};

/// Render the document as 2-space indented JSON.
pub fn to_pretty_json(document: &FilingDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|source| OutputError::Serialization { source })
}

/// File name for a return: `gst_return_<period>_<year>.json`, with the
/// period as entered (`9` or `Q1`).
pub fn document_file_name(selector: &FilingSelector) -> String {
    format!("gst_return_{}_{}.json", selector.period, selector.year)
}

/// Write the document into `dir` and return the final path.
///
/// The JSON goes to a temporary file in the same directory which is then
/// renamed over the target, so readers never see a partial document.
pub fn write_document(
    document: &FilingDocument,
    selector: &FilingSelector,
    dir: &Path,
) -> Result<PathBuf> {
    let rendered = to_pretty_json(document)?;
    fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source,
    })?;
    let target = dir.join(document_file_name(selector));

    let mut temp = NamedTempFile::new_in(dir).map_err(|source| OutputError::Io {
        operation: "create temp file in",
        path: dir.to_path_buf(),
        source,
    })?;
    temp.write_all(rendered.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|source| OutputError::Io {
            operation: "write",
            path: temp.path().to_path_buf(),
            source,
        })?;

    temp.persist(&target)
        .map_err(|err| OutputError::AtomicWriteFailed {
            temp_path: err.file.path().to_path_buf(),
            target_path: target.clone(),
            source: err.error,
        })?;

    tracing::info!(
        path = %target.display(),
        bytes = rendered.len(),
        "wrote return document"
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use gstr_model::FilingForm;

    use super::*;

    fn selector(frequency: gstr_model::FrequencyType, period: &str) -> FilingSelector {
        FilingForm::new()
            .with_frequency(frequency)
            .with_period(period)
            .with_year(2024)
            .with_taxpayer("27AAPFU0939F1ZV")
            .validate()
            .unwrap()
    }

    #[test]
    fn file_name_uses_period_as_entered() {
        use gstr_model::FrequencyType::{Monthly, Quarterly};
        assert_eq!(
            document_file_name(&selector(Monthly, "9")),
            "gst_return_9_2024.json"
        );
        assert_eq!(
            document_file_name(&selector(Monthly, "09")),
            "gst_return_9_2024.json"
        );
        assert_eq!(
            document_file_name(&selector(Quarterly, "q1")),
            "gst_return_Q1_2024.json"
        );
    }
}
