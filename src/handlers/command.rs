use anyhow::Result;
use teloxide::{macros::BotCommands, types::Message, utils::command::BotCommands as _};

use super::send_message::BetterSendMessage;
use crate::{types::BotType, util::user_name};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start using this bot")]
    Start,

    #[command(description = "Show how this bot works")]
    Help,

    #[command(description = "Shows information about this bot")]
    About,
}

pub const INTRO: &str = "I will prepare a ZIP archive with a sticker set. Just send me a sticker 😋";

pub fn help_text() -> String {
    format!(
        "I will prepare a ZIP archive with a sticker set. Just send me a sticker 😉\n\
        \n\
        The archive contains every sticker of the set, numbered in set order, \
        and a <code>metainfo.json</code> file with the set name, title and the emoji of each sticker.\n\
        \n\
        <b>Commands</b>\n\
        {}",
        Command::descriptions()
    )
}

pub fn about_text() -> String {
    format!(
        "<b>Sticker Archive Bot V{}</b>\n\
        I'm free and open source.\n\
        My code is licensed under the Apache License 2.0.",
        env!("CARGO_PKG_VERSION")
    )
}

pub async fn receive_command(bot: BotType, msg: Message, cmd: Command) -> Result<()> {
    log::info!("Received command {:?} from {}", cmd, user_name(&msg));

    match cmd {
        Command::Start => {
            bot.send_message_easy(&msg, INTRO).await?;
        }
        Command::Help => {
            bot.send_message_easy(&msg, help_text()).await?;
        }
        Command::About => {
            bot.send_message_easy(&msg, about_text()).await?;
        }
    }

    Ok(())
}
