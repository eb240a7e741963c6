use teloxide::utils::html;

use super::{
  api::StickerApi,
  archive::create_archive,
  download::download_all,
  fetch::{fetch_sticker_set, FetchedSet},
  metadata::write_meta,
  staging::StagingDir,
};
use crate::{
  config::Config,
  error::ExportResult,
  types::{Delivery, StickerSetRequest},
};

/// Caption of the delivered document. Messages are sent as HTML.
pub fn archive_caption(title: &str) -> String {
  format!("Stickers set \"{}\"", html::escape(title))
}

/// Runs one export from start to finish.
///
/// Nothing touches the disk until the set has been fetched, and once the
/// staging directory exists it is removed again no matter how the remaining
/// steps end.
pub async fn export_sticker_set<A: StickerApi + ?Sized>(
  api: &A,
  config: &Config,
  request: &StickerSetRequest,
) -> ExportResult<Delivery> {
  let set = fetch_sticker_set(api, config, &request.set_name).await?;

  let staging = StagingDir::create(&config.staging_root, &set.meta.name).await?;
  log::debug!("Staging {:?} in {:?}", set.meta.name, staging.path());

  let result = deliver(api, config, request, &set, &staging).await;
  staging.cleanup().await;

  result
}

async fn deliver<A: StickerApi + ?Sized>(
  api: &A,
  config: &Config,
  request: &StickerSetRequest,
  set: &FetchedSet,
  staging: &StagingDir,
) -> ExportResult<Delivery> {
  let mut files = download_all(
    api,
    &set.files,
    staging.set_dir(),
    config.download_concurrency,
  )
  .await?;
  let sticker_count = files.len();

  files.push(write_meta(staging.set_dir(), &set.meta).await?);

  let archive = create_archive(staging.archive_path(), &set.meta.name, files).await?;

  api
    .send_archive(
      request.chat_id,
      request.message_id,
      &archive,
      &archive_caption(&set.meta.title),
    )
    .await?;

  Ok(Delivery {
    name: set.meta.name.clone(),
    title: set.meta.title.clone(),
    sticker_count,
    archive,
  })
}
