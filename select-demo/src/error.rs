use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page file: {0}")]
    Page(#[from] serde_json::Error),

    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Select(#[from] custom_select::SelectError),
}
