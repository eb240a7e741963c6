mod api;
mod archive;
mod download;
mod fetch;
mod metadata;
mod pipeline;
mod staging;

#[cfg(test)]
pub(crate) mod testing;

pub use api::StickerApi;
pub use pipeline::export_sticker_set;
