use std::path::PathBuf;

#[derive(Debug)]
pub struct ConvertResult {
    pub source: PathBuf,
    pub deposit: &'static str,
    pub batch_id: String,
    pub records: usize,
    pub contributors: usize,
    /// `None` when the XML went to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RecordRow {
    pub title: String,
    pub doi: String,
    pub authors: usize,
    pub date: String,
}

#[derive(Debug)]
pub struct InspectResult {
    pub source: PathBuf,
    pub kind: &'static str,
    pub rows: Vec<RecordRow>,
}
