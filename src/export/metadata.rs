use std::path::{Path, PathBuf};

use crate::{error::ExportResult, types::StickerSetMeta};

pub const METADATA_FILE: &str = "metainfo.json";

pub async fn write_meta(dir: &Path, meta: &StickerSetMeta) -> ExportResult<PathBuf> {
    let path = dir.join(METADATA_FILE);

    let mut data = serde_json::to_vec(meta)?;
    data.push(b'\n');

    tokio::fs::write(&path, data).await?;

    log::debug!("Wrote metadata for {:?} to {:?}", meta.name, path);

    Ok(path)
}
