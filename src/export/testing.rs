use std::{
  collections::HashMap,
  io::{self, Read},
  path::Path,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
  },
};

use async_trait::async_trait;
use teloxide::types::{ChatId, MessageId};
use tokio::{fs::File, io::AsyncWriteExt};

use super::api::StickerApi;
use crate::{
  error::{ExportError, ExportResult},
  types::{RemoteSticker, RemoteStickerSet},
};

pub fn cats_set() -> RemoteStickerSet {
  RemoteStickerSet {
    name: "cats_set".to_string(),
    title: "Cats".to_string(),
    stickers: ["🐱", "😺", "😸"]
      .iter()
      .enumerate()
      .map(|(i, emoji)| RemoteSticker {
        file_id: format!("cat_{}", i),
        emoji: Some(emoji.to_string()),
      })
      .collect(),
  }
}

/// What the fake saw when an archive was sent. The archive is read right
/// away because the staging directory is gone once the export returns.
#[derive(Debug, Clone)]
pub struct Upload {
  pub chat_id: ChatId,
  pub reply_to: MessageId,
  pub file_name: String,
  pub caption: String,
  pub entries: Vec<(String, Vec<u8>)>,
}

impl Upload {
  pub fn entry_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.entries.iter().map(|(name, _)| name.clone()).collect();
    names.sort();
    names
  }

  pub fn entry(&self, name: &str) -> &[u8] {
    self
      .entries
      .iter()
      .find(|(entry, _)| entry == name)
      .map(|(_, data)| data.as_slice())
      .unwrap_or_else(|| panic!("archive has no entry {:?}", name))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
  pub chat_id: ChatId,
  pub reply_to: MessageId,
  pub text: String,
}

/// Tracks how many calls are running at once and the highest value seen.
#[derive(Default)]
pub struct Gauge {
  current: AtomicUsize,
  max: AtomicUsize,
}

impl Gauge {
  fn enter(&self) {
    let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
    self.max.fetch_max(now, Ordering::SeqCst);
  }

  fn leave(&self) {
    self.current.fetch_sub(1, Ordering::SeqCst);
  }

  pub fn max(&self) -> usize {
    self.max.load(Ordering::SeqCst)
  }
}

/// In-memory stand-in for the Bot API.
///
/// File ids resolve to `stickers/<file_id>.webp`. Lookups and downloads yield
/// to the runtime a few times so concurrent calls overlap.
#[derive(Default)]
pub struct FakeApi {
  sets: HashMap<String, RemoteStickerSet>,
  failing_download: Option<String>,
  failing_upload: bool,
  failing_reply: Option<String>,
  downloads: AtomicUsize,
  pub lookups_in_flight: Gauge,
  pub downloads_in_flight: Gauge,
  uploads: Mutex<Vec<Upload>>,
  replies: Mutex<Vec<Reply>>,
}

async fn pause() {
  for _ in 0..3 {
    tokio::task::yield_now().await;
  }
}

impl FakeApi {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_set(mut self, set: RemoteStickerSet) -> Self {
    self.sets.insert(set.name.clone(), set);
    self
  }

  pub fn failing_download(mut self, path: &str) -> Self {
    self.failing_download = Some(path.to_string());
    self
  }

  pub fn failing_upload(mut self) -> Self {
    self.failing_upload = true;
    self
  }

  /// Replies with exactly this text fail.
  pub fn failing_reply(mut self, text: &str) -> Self {
    self.failing_reply = Some(text.to_string());
    self
  }

  pub fn content_for(path: &str) -> Vec<u8> {
    format!("image data of {}", path).into_bytes()
  }

  pub fn download_count(&self) -> usize {
    self.downloads.load(Ordering::SeqCst)
  }

  pub fn uploads(&self) -> Vec<Upload> {
    self.uploads.lock().unwrap().clone()
  }

  pub fn replies(&self) -> Vec<Reply> {
    self.replies.lock().unwrap().clone()
  }
}

fn read_entries(archive: &Path) -> ExportResult<Vec<(String, Vec<u8>)>> {
  let mut zip = zip::ZipArchive::new(std::fs::File::open(archive)?)?;
  let mut entries = Vec::new();

  for i in 0..zip.len() {
    let mut entry = zip.by_index(i)?;
    let mut data = Vec::new();
    entry.read_to_end(&mut data)?;
    entries.push((entry.name().to_string(), data));
  }

  Ok(entries)
}

#[async_trait]
impl StickerApi for FakeApi {
  async fn get_sticker_set(&self, name: &str) -> ExportResult<RemoteStickerSet> {
    self
      .sets
      .get(name)
      .cloned()
      .ok_or_else(|| ExportError::UnknownStickerSet(name.to_string()))
  }

  async fn resolve_file(&self, file_id: &str) -> ExportResult<String> {
    self.lookups_in_flight.enter();
    pause().await;
    self.lookups_in_flight.leave();

    Ok(format!("stickers/{}.webp", file_id))
  }

  async fn download(&self, path: &str, destination: &mut File) -> ExportResult<()> {
    self.downloads.fetch_add(1, Ordering::SeqCst);
    self.downloads_in_flight.enter();
    pause().await;

    let result = if self.failing_download.as_deref() == Some(path) {
      Err(ExportError::Io(io::Error::new(
        io::ErrorKind::ConnectionReset,
        "connection reset",
      )))
    } else {
      destination
        .write_all(&Self::content_for(path))
        .await
        .map_err(ExportError::from)
    };

    self.downloads_in_flight.leave();
    result
  }

  async fn send_archive(
    &self,
    chat_id: ChatId,
    reply_to: MessageId,
    archive: &Path,
    caption: &str,
  ) -> ExportResult<()> {
    if self.failing_upload {
      return Err(ExportError::Io(io::Error::new(
        io::ErrorKind::Other,
        "Bad Request: file is too big",
      )));
    }

    let upload = Upload {
      chat_id,
      reply_to,
      file_name: archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default(),
      caption: caption.to_string(),
      entries: read_entries(archive)?,
    };

    self.uploads.lock().unwrap().push(upload);
    Ok(())
  }

  async fn reply(&self, chat_id: ChatId, reply_to: MessageId, text: &str) -> ExportResult<()> {
    if self.failing_reply.as_deref() == Some(text) {
      return Err(ExportError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "Forbidden: bot was blocked by the user",
      )));
    }

    self.replies.lock().unwrap().push(Reply {
      chat_id,
      reply_to,
      text: text.to_string(),
    });
    Ok(())
  }
}
