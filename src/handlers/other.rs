use anyhow::Result;
use teloxide::types::Message;

use super::send_message::BetterSendMessage;
use crate::{types::BotType, util::user_name};

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";
pub const SEND_STICKER_MESSAGE: &str = "Please send me a sticker";

pub fn reply_for(text: Option<&str>) -> &'static str {
  match text {
    Some(text) if text.starts_with('/') => UNKNOWN_COMMAND_MESSAGE,
    _ => SEND_STICKER_MESSAGE,
  }
}

pub async fn receive_other(bot: BotType, msg: Message) -> Result<()> {
  match msg.text() {
    Some(text) => log::info!("Received message {:?} from {}", text, user_name(&msg)),
    None => log::info!("Received a non sticker message from {}", user_name(&msg)),
  }

  bot.send_message_easy(&msg, reply_for(msg.text())).await?;

  Ok(())
}
