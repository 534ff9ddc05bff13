//! # Royalty Core
//!
//! State-transition logic for an artwork registry with paid subscriptions.
//!
//! Two keyed stores make up the ledger state: the artwork registry (one
//! record per artist) and the subscription ledger (one record per
//! subscriber/artist pair). Subscribing reads the artwork registry for the
//! price and active flag, moves native value from subscriber to artist, and
//! only then writes the subscription record — a failed call leaves no trace.
//!
//! ## Key Traits
//!
//! - [`ArtworkStore`] / [`SubscriptionStore`]: injected record storage
//! - [`ValueLedger`]: injected native value transfer capability
//!
//! Use [`Registry::in_memory`] for testing and standalone use.

pub mod artwork;
pub mod error;
pub mod ledger;
pub mod principal;
pub mod registry;
pub mod store;
pub mod subscription;

pub use artwork::{ArtworkRecord, DEFAULT_SUBSCRIPTION_PRICE, MAX_TITLE_LEN};
pub use error::RegistryError;
pub use ledger::{InMemoryLedger, LedgerError, ValueLedger};
pub use principal::Principal;
pub use registry::Registry;
pub use store::{
    ArtworkStore, InMemoryArtworkStore, InMemorySubscriptionStore, SubscriptionStore,
};
pub use subscription::SubscriptionRecord;
