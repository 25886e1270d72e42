pub mod catalog;
pub mod constellation;
pub mod naming;

#[cfg(test)]
mod tests;

/// Maximum length in bytes for a resolved collection name.
pub const MAX_COLLECTION_NAME_LEN: usize = 256;

/// Maximum length in bytes for a model's namespacing prefix.
pub const MAX_PREFIX_LEN: usize = 64;

/// Separator inserted between a non-empty prefix and a base collection name.
pub const PREFIX_SEPARATOR: char = '_';

use crate::{constellation::ModelError, naming::NamingError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::{self, ModelKind},
        constellation::{CollectionRole, ConstellationBuilder, ModelConstellation, ModelError},
        naming::{CollectionName, NamingError, Prefix},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ModelError(#[from] ModelError),

    #[error(transparent)]
    NamingError(#[from] NamingError),
}
