/// Loading and saving of the catalog document.
///
/// The document is written as 2-space indented JSON with non-ASCII text kept
/// literally. Key order of loaded documents is preserved on save.
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::CatalogError;
use crate::model::Catalog;

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), rules = catalog.rules.len(), "catalog loaded");
    Ok(catalog)
}

/// Loads the catalog, or starts from [`Catalog::default`] when the file does not exist.
///
/// Any other failure, including a document that does not parse, is returned so
/// that callers never overwrite an existing catalog with an empty one.
pub fn load_or_default(path: &Path) -> Result<Catalog, CatalogError> {
    match load_catalog(path) {
        Err(CatalogError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "catalog not found, starting from an empty catalog");
            Ok(Catalog::default())
        }
        result => result,
    }
}

pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let write_err = |source: std::io::Error| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog).map_err(|source| {
        CatalogError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(write_err)?;
    info!(path = %path.display(), rules = catalog.rules.len(), "catalog saved");
    Ok(())
}
