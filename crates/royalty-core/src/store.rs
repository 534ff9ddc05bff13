use std::collections::HashMap;

use crate::artwork::ArtworkRecord;
use crate::error::RegistryError;
use crate::principal::Principal;
use crate::subscription::SubscriptionRecord;

type Result<T> = std::result::Result<T, RegistryError>;

// ---------------------------------------------------------------------------
// ArtworkStore
// ---------------------------------------------------------------------------

/// Store and retrieve artwork listings, keyed by artist.
pub trait ArtworkStore {
    fn put_artwork(&mut self, record: &ArtworkRecord) -> Result<()>;
    fn get_artwork(&self, artist: &Principal) -> Result<Option<ArtworkRecord>>;
    fn set_active(&mut self, artist: &Principal, active: bool) -> Result<()>;
    fn list_artists(&self) -> Result<Vec<Principal>>;
}

/// In-memory artwork store backed by HashMap.
#[derive(Debug, Default)]
pub struct InMemoryArtworkStore {
    artworks: HashMap<Principal, ArtworkRecord>,
}

impl InMemoryArtworkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtworkStore for InMemoryArtworkStore {
    fn put_artwork(&mut self, record: &ArtworkRecord) -> Result<()> {
        self.artworks.insert(record.artist, record.clone());
        Ok(())
    }

    fn get_artwork(&self, artist: &Principal) -> Result<Option<ArtworkRecord>> {
        Ok(self.artworks.get(artist).cloned())
    }

    fn set_active(&mut self, artist: &Principal, active: bool) -> Result<()> {
        let record = self
            .artworks
            .get_mut(artist)
            .ok_or(RegistryError::NoSuchArtwork)?;
        record.active = active;
        Ok(())
    }

    fn list_artists(&self) -> Result<Vec<Principal>> {
        Ok(self.artworks.keys().copied().collect())
    }
}

// ---------------------------------------------------------------------------
// SubscriptionStore
// ---------------------------------------------------------------------------

/// Store and retrieve subscription records, keyed by (subscriber, artist).
pub trait SubscriptionStore {
    fn put_subscription(&mut self, record: &SubscriptionRecord) -> Result<()>;
    fn get_subscription(
        &self,
        subscriber: &Principal,
        artist: &Principal,
    ) -> Result<Option<SubscriptionRecord>>;
    /// Subscribers with a live subscription to `artist`.
    fn subscribers_of(&self, artist: &Principal) -> Result<Vec<Principal>>;
}

/// In-memory subscription store backed by HashMap.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: HashMap<(Principal, Principal), SubscriptionRecord>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriptionStore for InMemorySubscriptionStore {
    fn put_subscription(&mut self, record: &SubscriptionRecord) -> Result<()> {
        self.subscriptions
            .insert((record.subscriber, record.artist), record.clone());
        Ok(())
    }

    fn get_subscription(
        &self,
        subscriber: &Principal,
        artist: &Principal,
    ) -> Result<Option<SubscriptionRecord>> {
        Ok(self.subscriptions.get(&(*subscriber, *artist)).cloned())
    }

    fn subscribers_of(&self, artist: &Principal) -> Result<Vec<Principal>> {
        Ok(self
            .subscriptions
            .values()
            .filter(|record| &record.artist == artist && record.active)
            .map(|record| record.subscriber)
            .collect())
    }
}
