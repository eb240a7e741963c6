use anyhow::Result;
use teloxide::types::Message;

use super::send_message::BetterSendMessage;
use crate::{
  config::Config,
  error::ExportResult,
  export::{export_sticker_set, StickerApi},
  types::{BotType, ConfigType, Delivery, StickerSetRequest},
  util::user_name,
};

pub const PROCESSING_MESSAGE: &str = "Processing started. Wait please.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Try to send the sticker again.";
pub const NO_SET_MESSAGE: &str = "This sticker doesn't belong to a sticker set";

pub async fn receive_sticker(config: ConfigType, bot: BotType, msg: Message) -> Result<()> {
  let Some(request) = StickerSetRequest::from_message(&msg) else {
    log::info!("Received a sticker without a set from {}", user_name(&msg));
    bot.reply_to(&msg, NO_SET_MESSAGE).await?;
    return Ok(());
  };

  let user = user_name(&msg);
  log::info!("Received sticker set {:?} from {}", request.set_name, user);

  // Failures are already logged and answered
  let _ = process_request(&bot, &config, &request, &user).await;

  Ok(())
}

/// Acknowledges the request, runs the export and tells the user when it
/// failed. The user only ever sees [`FAILURE_MESSAGE`], the error itself is
/// logged and handed back.
pub async fn process_request<A: StickerApi + ?Sized>(
  api: &A,
  config: &Config,
  request: &StickerSetRequest,
  user: &str,
) -> ExportResult<Delivery> {
  if let Err(e) = api
    .reply(request.chat_id, request.message_id, PROCESSING_MESSAGE)
    .await
  {
    log::warn!("Failed to acknowledge sticker set {:?}: {:?}", request.set_name, e);
  }

  match export_sticker_set(api, config, request).await {
    Ok(delivery) => {
      log::info!(
        "Uploaded sticker set {:?} with title {:?} ({} stickers, {:?}) to {}",
        delivery.name,
        delivery.title,
        delivery.sticker_count,
        delivery.archive.file_name().unwrap_or_default(),
        user
      );
      Ok(delivery)
    }
    Err(e) => {
      log::error!("Failed to export sticker set {:?}: {:?}", request.set_name, e);

      if let Err(reply_err) = api
        .reply(request.chat_id, request.message_id, FAILURE_MESSAGE)
        .await
      {
        log::error!("Failed to report the failure to {}: {:?}", user, reply_err);
      }

      Err(e)
    }
  }
}
