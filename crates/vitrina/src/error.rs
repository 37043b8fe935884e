use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrinaError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, VitrinaError>;
