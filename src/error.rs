use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropwiseError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CropwiseError>;
