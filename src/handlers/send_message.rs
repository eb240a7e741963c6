use teloxide::{
  payloads::SendMessageSetters,
  requests::Requester,
  types::{Message, ReplyParameters},
};

use crate::types::BotType;

type SendMessageRequest = <BotType as Requester>::SendMessage;

pub trait BetterSendMessage {
  /// Answers `msg` in its chat, quoting it.
  fn reply_to<T>(&self, msg: &Message, text: T) -> SendMessageRequest
  where
    T: Into<String>;

  fn send_message_easy<T>(&self, msg: &Message, text: T) -> SendMessageRequest
  where
    T: Into<String>;
}

impl BetterSendMessage for BotType {
  fn reply_to<T>(&self, msg: &Message, text: T) -> SendMessageRequest
  where
    T: Into<String>,
  {
    self
      .send_message_easy(msg, text)
      .reply_parameters(ReplyParameters::new(msg.id))
  }

  fn send_message_easy<T>(&self, msg: &Message, text: T) -> SendMessageRequest
  where
    T: Into<String>,
  {
    self.send_message(msg.chat.id, text)
  }
}
