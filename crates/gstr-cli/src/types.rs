use std::path::PathBuf;

use gstr_model::{FilingDocument, FilingSelector};

#[derive(Debug)]
pub struct ReturnResult {
    pub selector: FilingSelector,
    pub document: FilingDocument,
    pub file_name: String,
    pub output_path: Option<PathBuf>,
    pub slots: Vec<SlotSummary>,
}

#[derive(Debug)]
pub struct SlotSummary {
    pub label: String,
    pub source: String,
    pub rows: usize,
}
