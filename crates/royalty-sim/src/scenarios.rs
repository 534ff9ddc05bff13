//! Pre-defined registry scenarios.
//!
//! Includes the canonical register-and-subscribe example and a randomized
//! gallery for exercising rejection paths.

use anyhow::Result;
use rand::Rng;
use royalty_core::{
    DEFAULT_SUBSCRIPTION_PRICE, Principal, Registry, RegistryError, SubscriptionStore, ValueLedger,
};
use tracing::info;

/// Replay the canonical scenario:
///
/// ```text
/// wallet_1 registers artwork "My Awesome Art"
/// wallet_2 pays 10,000,000 units to subscribe to wallet_1
/// the listing is read back with price and active flag intact
/// a pair that never subscribed still checks false
/// ```
pub fn run_canonical_scenario() -> Result<()> {
    info!("=== Running Canonical Scenario ===");

    let mut registry = Registry::in_memory();
    let artist = Principal::from_bytes([1u8; 32]);
    let subscriber = Principal::from_bytes([2u8; 32]);
    registry.ledger_mut().credit(subscriber, 100_000_000);

    println!("\n--- Step 1: wallet_1 registers artwork ---");
    registry.register_artwork(artist, "My Awesome Art")?;
    let record = registry.get_artwork(&artist)?;
    println!("  listing: {record:?}");

    println!("\n--- Step 2: wallet_2 subscribes to wallet_1 ---");
    registry.subscribe_to_artist(subscriber, artist)?;
    println!(
        "  subscription active: {}",
        registry.check_subscription(&subscriber, &artist)?
    );

    println!("\n--- Step 3: a fresh pair checks false ---");
    let stranger = Principal::random();
    println!(
        "  stranger subscribed: {}",
        registry.check_subscription(&stranger, &artist)?
    );

    println!("\n=== Final Balances ===");
    println!("  artist (wallet_1):     {}", registry.ledger().balance(&artist));
    println!("  subscriber (wallet_2): {}", registry.ledger().balance(&subscriber));

    Ok(())
}

/// Randomized gallery: `artist_count` artists register listings, then
/// `attempts` subscribe calls land on random (subscriber, artist) pairs.
/// Every second subscriber is funded below the listing price, so a share of
/// calls must bounce off the ledger — and the final accounting shows those
/// rejections moved nothing.
pub fn run_gallery_scenario(
    artist_count: usize,
    subscriber_count: usize,
    attempts: u64,
) -> Result<()> {
    info!("=== Running Gallery Scenario ===");

    let mut registry = Registry::in_memory();
    let mut rng = rand::rng();

    let artists: Vec<Principal> = (0..artist_count).map(|_| Principal::random()).collect();
    let subscribers: Vec<Principal> = (0..subscriber_count).map(|_| Principal::random()).collect();

    // Fund every second subscriber below the listing price
    for (i, subscriber) in subscribers.iter().enumerate() {
        let funding = if i % 2 == 0 {
            DEFAULT_SUBSCRIPTION_PRICE * 3
        } else {
            DEFAULT_SUBSCRIPTION_PRICE / 2
        };
        registry.ledger_mut().credit(*subscriber, funding);
    }
    let minted: u64 = subscribers
        .iter()
        .map(|s| registry.ledger().balance(s))
        .sum();

    for (i, artist) in artists.iter().enumerate() {
        registry.register_artwork(*artist, &format!("Gallery Piece #{i}"))?;
    }
    println!("\n--- {artist_count} artists registered, {subscriber_count} subscribers funded ---");

    let mut paid = 0u64;
    let mut accepted = 0u64;
    let mut bounced = 0u64;
    for _ in 0..attempts {
        let subscriber = subscribers[rng.random_range(0..subscribers.len())];
        let artist = artists[rng.random_range(0..artists.len())];
        match registry.subscribe_to_artist(subscriber, artist) {
            Ok(_) => {
                accepted += 1;
                paid += DEFAULT_SUBSCRIPTION_PRICE;
            }
            Err(RegistryError::TransferFailed(reason)) => {
                info!(subscriber = %subscriber, artist = %artist, %reason, "subscribe bounced");
                bounced += 1;
            }
            Err(other) => return Err(other.into()),
        }
    }

    println!("\n=== Final Statistics ===");
    println!("  Subscribe attempts: {attempts}");
    println!("  Accepted: {accepted}");
    println!("  Bounced:  {bounced}");
    for (i, artist) in artists.iter().enumerate() {
        let earned = registry.ledger().balance(artist);
        let fans = registry.subscription_store().subscribers_of(artist)?.len();
        println!("  Gallery Piece #{i}: {fans} subscribers, {earned} earned");
    }

    // Rejected calls moved nothing: everything minted is still accounted for
    let held: u64 = subscribers
        .iter()
        .map(|s| registry.ledger().balance(s))
        .sum();
    let earned: u64 = artists.iter().map(|a| registry.ledger().balance(a)).sum();
    println!("\n  Minted: {minted}, held: {held}, earned: {earned}, paid: {paid}");
    println!("  Value conserved: {}", held + earned == minted && earned == paid);

    Ok(())
}
