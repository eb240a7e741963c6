use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::ExportResult;

/// Scratch space owned by a single export.
///
/// ```text
/// <root>/stickers-XXXXXX/
///   <set_name>/0000.webp ... metainfo.json
///   <set_name>.zip
/// ```
///
/// The directory is removed by [`StagingDir::cleanup`]. If the export panics
/// before that, dropping the inner [`TempDir`] still removes it.
#[derive(Debug)]
pub struct StagingDir {
  dir: TempDir,
  set_dir: PathBuf,
  archive: PathBuf,
}

impl StagingDir {
  pub async fn create(root: &Path, set_name: &str) -> ExportResult<Self> {
    let root = root.to_path_buf();
    let dir = tokio::task::spawn_blocking(move || {
      std::fs::create_dir_all(&root)?;
      tempfile::Builder::new().prefix("stickers-").tempdir_in(&root)
    })
    .await??;

    let set_dir = dir.path().join(set_name);
    tokio::fs::create_dir(&set_dir).await?;

    let archive = dir.path().join(format!("{}.zip", set_name));

    Ok(Self {
      dir,
      set_dir,
      archive,
    })
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  /// Where downloaded stickers and the metadata file go
  pub fn set_dir(&self) -> &Path {
    &self.set_dir
  }

  pub fn archive_path(&self) -> &Path {
    &self.archive
  }

  /// Removes the whole staging tree. Never fails, problems are only logged.
  pub async fn cleanup(self) {
    let path = self.dir.path().to_path_buf();

    match tokio::task::spawn_blocking(move || self.dir.close()).await {
      Ok(Ok(())) => log::debug!("Removed staging directory {:?}", path),
      Ok(Err(e)) => log::warn!("Failed to remove staging directory {:?}: {:?}", path, e),
      Err(e) => log::warn!("Cleanup of {:?} did not finish: {:?}", path, e),
    }
  }
}
