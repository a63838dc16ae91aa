use thiserror::Error;

#[derive(Debug, Error)]
pub enum BhError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid reply pool: {0}")]
    Widget(#[from] borane_widget::WidgetError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}
