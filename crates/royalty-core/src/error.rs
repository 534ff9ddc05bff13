use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid title: {0}")]
    InvalidTitle(String),
    #[error("artist already registered an artwork")]
    AlreadyRegistered,
    #[error("no artwork registered for this artist")]
    NoSuchArtwork,
    #[error("artwork is not active")]
    ArtworkInactive,
    #[error("no active subscription for this pair")]
    NoSuchSubscription,
    #[error("value transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),
    #[error("store error: {0}")]
    StoreError(String),
}
