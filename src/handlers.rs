mod command;
mod other;
mod send_message;
mod sticker;

pub use command::{receive_command, Command};
pub use other::receive_other;
pub use sticker::receive_sticker;
