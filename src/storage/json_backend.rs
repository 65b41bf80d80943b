use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::errors::FormError;
use crate::forms::{FlowKind, SubmittedRecord};
use crate::storage::{Result, SubmissionSink};
use crate::utils::{base_dir, ensure_dir};

const ARCHIVE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Durable submission sink keeping one JSON file per flow kind under the
/// application data directory. Writes are staged to a temporary file and
/// renamed into place.
#[derive(Debug, Clone)]
pub struct JsonArchive {
    root: PathBuf,
}

impl JsonArchive {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| base_dir().join("submissions"));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn open_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive_path(&self, kind: FlowKind) -> PathBuf {
        self.root
            .join(format!("{}.{}", kind.slug().replace('-', "_"), ARCHIVE_EXTENSION))
    }

    /// Loads every record submitted for the given flow, oldest first. A
    /// missing file reads as no submissions.
    pub fn load(&self, kind: FlowKind) -> Result<Vec<SubmittedRecord>> {
        let path = self.archive_path(kind);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn find(&self, kind: FlowKind, id: Uuid) -> Result<Option<SubmittedRecord>> {
        Ok(self
            .load(kind)?
            .into_iter()
            .find(|record| record.id == id))
    }
}

impl SubmissionSink for JsonArchive {
    fn submit(&mut self, record: &SubmittedRecord) -> Result<Uuid> {
        let kind = record.kind();
        let mut records = self.load(kind)?;
        records.push(record.clone());

        let path = self.archive_path(kind);
        let json = serde_json::to_string_pretty(&records)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path).map_err(|err| {
            FormError::Storage(format!(
                "failed to publish archive `{}`: {err}",
                path.display()
            ))
        })?;
        tracing::debug!(flow = kind.slug(), count = records.len(), "archive updated");
        Ok(record.id)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
