use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::principal::Principal;

/// Price every new listing opens at, in the ledger's smallest value unit.
pub const DEFAULT_SUBSCRIPTION_PRICE: u64 = 10_000_000;

/// Longest accepted artwork title, in bytes.
pub const MAX_TITLE_LEN: usize = 100;

/// One artwork listing. Keyed by `artist` — one record per artist.
///
/// The serialized field names are kebab-case, matching the external shape
/// `{ title, artist, subscription-price, active }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtworkRecord {
    pub title: String,
    pub artist: Principal,
    pub subscription_price: u64,
    pub active: bool,
}

impl ArtworkRecord {
    /// Build a fresh listing for `artist`. Validates the title and applies
    /// the default price; new listings are always active.
    pub fn new(artist: Principal, title: &str) -> Result<Self, RegistryError> {
        validate_title(title)?;
        Ok(Self {
            title: title.to_string(),
            artist,
            subscription_price: DEFAULT_SUBSCRIPTION_PRICE,
            active: true,
        })
    }
}

/// Titles are non-empty ASCII, bounded to [`MAX_TITLE_LEN`] bytes.
fn validate_title(title: &str) -> Result<(), RegistryError> {
    if title.is_empty() {
        return Err(RegistryError::InvalidTitle("title is empty".to_string()));
    }
    if !title.is_ascii() {
        return Err(RegistryError::InvalidTitle(
            "title must be ASCII".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(RegistryError::InvalidTitle(format!(
            "title exceeds {MAX_TITLE_LEN} bytes"
        )));
    }
    Ok(())
}
