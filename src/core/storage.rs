use crate::server::types::Upload;
use crate::utils::constants::DEFAULT_FILE_EXTENSION;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Extension for a stored upload, taken from the suffix after the last period of the
/// client filename. Anything that is not plain ASCII alphanumeric falls back to the default.
pub fn file_extension(file_name: Option<&str>) -> &str {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_FILE_EXTENSION)
}

/// Local directory that receives a copy of every upload when persistence is on.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub async fn init(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // names are unique per call, concurrent writers never collide
    pub async fn persist(&self, upload: &Upload) -> io::Result<PathBuf> {
        let ext = file_extension(upload.file_name.as_deref());
        let path = self.dir.join(format!("{}.{}", Uuid::new_v4(), ext));
        tokio::fs::write(&path, &upload.bytes).await?;
        Ok(path)
    }
}
