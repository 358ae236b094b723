//! Error type surfaced by the storefront client.

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::SessionError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// A backend request failed. The session already reflects the failure.
    #[error(transparent)]
    Network(#[from] ApiError),

    /// The session actor could not be reached.
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
