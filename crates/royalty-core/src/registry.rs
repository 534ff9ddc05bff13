use tracing::{debug, trace};

use crate::artwork::ArtworkRecord;
use crate::error::RegistryError;
use crate::ledger::{InMemoryLedger, ValueLedger};
use crate::principal::Principal;
use crate::store::{
    ArtworkStore, InMemoryArtworkStore, InMemorySubscriptionStore, SubscriptionStore,
};
use crate::subscription::SubscriptionRecord;

type Result<T> = std::result::Result<T, RegistryError>;

/// The registry hub: artwork listings, subscriptions, and the value ledger.
///
/// Generic over storage backends and the transfer capability. Use
/// [`Registry::in_memory`] for testing and standalone use.
///
/// Every operation is one serialized state transition: all validation reads
/// come first, then the value transfer, then the single record write. Any
/// failure along the way returns an error with no state changed.
pub struct Registry<A: ArtworkStore, S: SubscriptionStore, L: ValueLedger> {
    artworks: A,
    subscriptions: S,
    ledger: L,
}

impl Registry<InMemoryArtworkStore, InMemorySubscriptionStore, InMemoryLedger> {
    /// Create a Registry with all in-memory backends.
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryArtworkStore::new(),
            InMemorySubscriptionStore::new(),
            InMemoryLedger::new(),
        )
    }
}

impl<A: ArtworkStore, S: SubscriptionStore, L: ValueLedger> Registry<A, S, L> {
    pub fn new(artworks: A, subscriptions: S, ledger: L) -> Self {
        Self {
            artworks,
            subscriptions,
            ledger,
        }
    }

    // -----------------------------------------------------------------------
    // Artwork registry
    // -----------------------------------------------------------------------

    /// Register an artwork listing for `caller`.
    ///
    /// One listing per artist: a second registration is rejected with
    /// [`RegistryError::AlreadyRegistered`] and leaves the original record
    /// untouched.
    pub fn register_artwork(&mut self, caller: Principal, title: &str) -> Result<bool> {
        let record = ArtworkRecord::new(caller, title)?;
        if self.artworks.get_artwork(&caller)?.is_some() {
            return Err(RegistryError::AlreadyRegistered);
        }
        self.artworks.put_artwork(&record)?;
        debug!(artist = %caller, title = %record.title, "artwork registered");
        Ok(true)
    }

    /// Look up the listing for `artist`. `Ok(None)` for unregistered
    /// identities — never a domain error.
    pub fn get_artwork(&self, artist: &Principal) -> Result<Option<ArtworkRecord>> {
        trace!(artist = %artist, "artwork lookup");
        self.artworks.get_artwork(artist)
    }

    /// Take the caller's own listing off the market. New subscriptions are
    /// refused afterwards; existing ones are left as they are.
    pub fn deactivate_artwork(&mut self, caller: Principal) -> Result<bool> {
        let record = self
            .artworks
            .get_artwork(&caller)?
            .ok_or(RegistryError::NoSuchArtwork)?;
        if !record.active {
            return Err(RegistryError::ArtworkInactive);
        }
        self.artworks.set_active(&caller, false)?;
        debug!(artist = %caller, "artwork deactivated");
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Subscription ledger
    // -----------------------------------------------------------------------

    /// Subscribe `caller` to `artist`'s catalog, paying the listed price.
    ///
    /// The transfer happens before the record write, so a ledger rejection
    /// leaves both stores and all balances exactly as they were. Repeat
    /// subscription is not prevented: each successful call re-charges the
    /// full price and re-asserts the record.
    pub fn subscribe_to_artist(&mut self, caller: Principal, artist: Principal) -> Result<bool> {
        let artwork = self
            .artworks
            .get_artwork(&artist)?
            .ok_or(RegistryError::NoSuchArtwork)?;
        if !artwork.active {
            return Err(RegistryError::ArtworkInactive);
        }
        self.ledger
            .transfer(&caller, &artist, artwork.subscription_price)?;
        self.subscriptions
            .put_subscription(&SubscriptionRecord::active(caller, artist))?;
        debug!(
            subscriber = %caller,
            artist = %artist,
            price = artwork.subscription_price,
            "subscription paid"
        );
        Ok(true)
    }

    /// Whether `subscriber` holds a live subscription to `artist`.
    ///
    /// Absent and inactive records both read as false; unknown identities
    /// never produce a domain error.
    pub fn check_subscription(&self, subscriber: &Principal, artist: &Principal) -> Result<bool> {
        trace!(subscriber = %subscriber, artist = %artist, "subscription check");
        let record = self.subscriptions.get_subscription(subscriber, artist)?;
        Ok(record.is_some_and(|r| r.active))
    }

    /// End the caller's subscription to `artist`. No refund: payments
    /// already made are final.
    pub fn unsubscribe(&mut self, caller: Principal, artist: Principal) -> Result<bool> {
        match self.subscriptions.get_subscription(&caller, &artist)? {
            Some(record) if record.active => {
                self.subscriptions.put_subscription(&SubscriptionRecord {
                    active: false,
                    ..record
                })?;
                debug!(subscriber = %caller, artist = %artist, "unsubscribed");
                Ok(true)
            }
            _ => Err(RegistryError::NoSuchSubscription),
        }
    }

    // -----------------------------------------------------------------------
    // Access to backends (for setup / reporting)
    // -----------------------------------------------------------------------

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn artwork_store(&self) -> &A {
        &self.artworks
    }

    pub fn subscription_store(&self) -> &S {
        &self.subscriptions
    }
}
