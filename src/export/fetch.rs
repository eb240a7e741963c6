use futures::stream::{self, StreamExt, TryStreamExt};

use super::api::StickerApi;
use crate::{
  config::Config,
  error::{ExportError, ExportResult},
  types::{RemoteFile, StickerSetMeta},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedSet {
  pub meta: StickerSetMeta,
  pub files: Vec<RemoteFile>,
}

/// Set names become directory and archive names, so only the characters the
/// platform allows for them are accepted.
pub fn validate_set_name(name: &str) -> ExportResult<()> {
  let valid = !name.is_empty()
    && name
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_');

  if !valid {
    return Err(ExportError::InvalidSetName(name.to_string()));
  }

  Ok(())
}

pub async fn fetch_sticker_set<A: StickerApi + ?Sized>(
  api: &A,
  config: &Config,
  set_name: &str,
) -> ExportResult<FetchedSet> {
  validate_set_name(set_name)?;

  let set = api.get_sticker_set(set_name).await?;
  validate_set_name(&set.name)?;

  log::debug!(
    "Got sticker set {:?} ({:?}) with {} stickers",
    set.name,
    set.title,
    set.stickers.len()
  );

  let mut meta = StickerSetMeta {
    name: set.name,
    title: set.title,
    ..Default::default()
  };

  for (i, sticker) in set.stickers.iter().enumerate() {
    if let Some(emoji) = &sticker.emoji {
      meta.stickers.insert(i, emoji.clone());
    }
  }

  if config.include_file_ids {
    meta.files = Some(
      set
        .stickers
        .iter()
        .enumerate()
        .map(|(i, sticker)| (i, sticker.file_id.clone()))
        .collect(),
    );
  }

  let files: Vec<RemoteFile> = stream::iter(set.stickers.into_iter().enumerate())
    .map(move |(index, sticker)| async move {
      let path = api.resolve_file(&sticker.file_id).await?;
      log::trace!("Resolved sticker {} to {:?}", index, path);
      Ok::<_, ExportError>(RemoteFile { index, path })
    })
    .buffered(config.download_concurrency.max(1))
    .try_collect()
    .await?;

  Ok(FetchedSet { meta, files })
}
