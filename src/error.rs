use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    #[error("Download failed: {0}")]
    Download(#[from] teloxide::DownloadError),

    #[error("Unknown sticker set: {0}")]
    UnknownStickerSet(String),

    #[error("Invalid sticker set name: {0:?}")]
    InvalidSetName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Metadata error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type ExportResult<T> = Result<T, ExportError>;
