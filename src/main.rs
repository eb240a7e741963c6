use dotenv::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

mod config;
mod error;
mod export;
mod handlers;
mod types;
mod util;

use config::Config;
use handlers::Command;

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Loaded config: {:?}", config);

    let bot = Bot::new(config.bot_token.clone()).parse_mode(ParseMode::Html);

    let message_tree = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::receive_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.sticker().is_some())
                .endpoint(handlers::receive_sticker),
        )
        .branch(dptree::endpoint(handlers::receive_other));

    log::info!("Bot started");

    Dispatcher::builder(bot, message_tree)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
