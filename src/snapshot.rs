use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogKind;
use crate::dashboard::DashboardFrame;
use crate::error::Result;

/// Writes frames as pretty JSON under `<dir>/<catalog>/<region>.json`.
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(base_dir: impl AsRef<Path>, catalog: CatalogKind) -> Self {
        Self {
            dir: base_dir.as_ref().join(catalog.label()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, frame: &DashboardFrame) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let file_path = self.dir.join(format!("{}.json", slug(&frame.region)));
        let json = serde_json::to_string_pretty(frame)?;
        fs::write(&file_path, json)?;
        Ok(file_path)
    }

    pub fn write_all(&self, frames: &[DashboardFrame]) -> Result<Vec<PathBuf>> {
        frames.iter().map(|frame| self.write(frame)).collect()
    }
}

fn slug(region: &str) -> String {
    region
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
