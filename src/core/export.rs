use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::catalogue::ProjectRecord;

pub const EXPORT_FILE_NAME: &str = "search_results.json";

/// A serialized search result ready to be written somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Pretty-printed JSON array of `records`, two-space indented.
    pub fn from_records(records: &[&ProjectRecord]) -> anyhow::Result<Self> {
        let contents =
            serde_json::to_string_pretty(records).context("Failed to serialize search results")?;
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            contents,
        })
    }

    /// Write into `dir` under the export file name.
    pub async fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> anyhow::Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name);
        self.write_to(&path).await?;
        Ok(path)
    }

    pub async fn write_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        tokio::fs::write(path.as_ref(), self.contents.as_bytes())
            .await
            .with_context(|| format!("Failed to write export file {:?}", path.as_ref()))
    }
}
