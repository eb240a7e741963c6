use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::{fs::File, io::AsyncWriteExt};

use super::api::StickerApi;
use crate::{error::ExportResult, types::RemoteFile};

pub const DEFAULT_EXTENSION: &str = "webp";
const INDEX_WIDTH: usize = 4;

/// `0000.webp`, `0001.webm`, ... The extension follows the remote file so
/// animated and video stickers keep their format.
pub fn sticker_file_name(file: &RemoteFile) -> String {
  let extension = Path::new(&file.path)
    .extension()
    .and_then(|ext| ext.to_str())
    .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    .unwrap_or(DEFAULT_EXTENSION);

  format!("{:0width$}.{}", file.index, extension, width = INDEX_WIDTH)
}

pub async fn download_sticker<A: StickerApi + ?Sized>(
  api: &A,
  file: &RemoteFile,
  dir: &Path,
) -> ExportResult<PathBuf> {
  let target = dir.join(sticker_file_name(file));

  let mut out = File::create(&target).await?;
  api.download(&file.path, &mut out).await?;
  out.flush().await?;

  log::trace!("Downloaded {:?} to {:?}", file.path, target);

  Ok(target)
}

/// Downloads every file into `dir`, at most `limit` at a time. The returned
/// paths follow the order of `files`.
pub async fn download_all<A: StickerApi + ?Sized>(
  api: &A,
  files: &[RemoteFile],
  dir: &Path,
  limit: usize,
) -> ExportResult<Vec<PathBuf>> {
  let paths: Vec<PathBuf> = stream::iter(files.to_vec())
    .map(move |file| async move { download_sticker(api, &file, dir).await })
    .buffered(limit.max(1))
    .try_collect()
    .await?;

  Ok(paths)
}
