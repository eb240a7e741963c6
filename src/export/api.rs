use std::path::Path;

use async_trait::async_trait;
use teloxide::{
  net::Download,
  payloads::{SendDocumentSetters, SendMessageSetters},
  requests::Requester,
  types::{ChatId, InputFile, MessageId, ReplyParameters},
  ApiError, RequestError,
};
use tokio::fs::File;

use crate::{
  error::{ExportError, ExportResult},
  types::{BotType, RemoteSticker, RemoteStickerSet},
};

/// The part of the Bot API the export pipeline talks to.
#[async_trait]
pub trait StickerApi: Send + Sync {
  async fn get_sticker_set(&self, name: &str) -> ExportResult<RemoteStickerSet>;

  /// Resolves a file id to the temporary path used for downloading it.
  async fn resolve_file(&self, file_id: &str) -> ExportResult<String>;

  async fn download(&self, path: &str, destination: &mut File) -> ExportResult<()>;

  async fn send_archive(
    &self,
    chat_id: ChatId,
    reply_to: MessageId,
    archive: &Path,
    caption: &str,
  ) -> ExportResult<()>;

  /// Text answer quoting the sticker message.
  async fn reply(&self, chat_id: ChatId, reply_to: MessageId, text: &str) -> ExportResult<()>;
}

#[async_trait]
impl StickerApi for BotType {
  async fn get_sticker_set(&self, name: &str) -> ExportResult<RemoteStickerSet> {
    let set = match Requester::get_sticker_set(self, name).await {
      Ok(set) => set,
      Err(RequestError::Api(ApiError::InvalidStickersSet)) => {
        return Err(ExportError::UnknownStickerSet(name.to_string()))
      }
      Err(e) => return Err(e.into()),
    };

    let stickers = set
      .stickers
      .into_iter()
      .map(|sticker| RemoteSticker {
        file_id: sticker.file.id.to_string(),
        emoji: sticker.emoji,
      })
      .collect();

    Ok(RemoteStickerSet {
      name: set.name,
      title: set.title,
      stickers,
    })
  }

  async fn resolve_file(&self, file_id: &str) -> ExportResult<String> {
    let file = self.get_file(file_id).await?;
    Ok(file.path)
  }

  async fn download(&self, path: &str, destination: &mut File) -> ExportResult<()> {
    self.download_file(path, destination).await?;
    Ok(())
  }

  async fn send_archive(
    &self,
    chat_id: ChatId,
    reply_to: MessageId,
    archive: &Path,
    caption: &str,
  ) -> ExportResult<()> {
    let file_name = archive
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| "stickers.zip".to_string());

    self
      .send_document(chat_id, InputFile::file(archive).file_name(file_name))
      .caption(caption)
      .reply_parameters(ReplyParameters::new(reply_to))
      .await?;

    Ok(())
  }

  async fn reply(&self, chat_id: ChatId, reply_to: MessageId, text: &str) -> ExportResult<()> {
    self
      .send_message(chat_id, text)
      .reply_parameters(ReplyParameters::new(reply_to))
      .await?;

    Ok(())
  }
}
