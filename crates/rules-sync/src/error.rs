use rule_catalog::error::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
