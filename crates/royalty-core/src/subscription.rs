use serde::{Deserialize, Serialize};

use crate::principal::Principal;

/// Subscription status for one (subscriber, artist) pair.
///
/// An absent record and an inactive record are observably the same to
/// readers: both check as false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub subscriber: Principal,
    pub artist: Principal,
    pub active: bool,
}

impl SubscriptionRecord {
    /// A live subscription for the pair.
    pub fn active(subscriber: Principal, artist: Principal) -> Self {
        Self {
            subscriber,
            artist,
            active: true,
        }
    }
}
