use rule_catalog::error::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("console i/o failed: {0}")]
    Console(#[source] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
