use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use teloxide::{
  adaptors::DefaultParseMode,
  types::{ChatId, Message, MessageId},
  Bot,
};

use crate::config::Config;

pub type BotType = DefaultParseMode<Bot>;
pub type ConfigType = Arc<Config>;

/// One sticker set export, created for every sticker message that has a set.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerSetRequest {
  pub chat_id: ChatId,
  pub message_id: MessageId,
  pub set_name: String,
}

impl StickerSetRequest {
  pub fn from_message(msg: &Message) -> Option<Self> {
    let set_name = msg.sticker()?.set_name.clone()?;

    Some(Self {
      chat_id: msg.chat.id,
      message_id: msg.id,
      set_name,
    })
  }
}

/// Contents of `metainfo.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct StickerSetMeta {
  pub name: String,
  pub title: String,
  pub stickers: BTreeMap<usize, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub files: Option<BTreeMap<usize, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteSticker {
  pub file_id: String,
  pub emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteStickerSet {
  pub name: String,
  pub title: String,
  pub stickers: Vec<RemoteSticker>,
}

/// A sticker whose download path has been resolved by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFile {
  pub index: usize,
  pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
  pub name: String,
  pub title: String,
  pub sticker_count: usize,
  pub archive: PathBuf,
}
