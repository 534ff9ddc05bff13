use royalty_core::*;

// Test principals
const WALLET_1: Principal = Principal::from_bytes([1u8; 32]);
const WALLET_2: Principal = Principal::from_bytes([2u8; 32]);
const WALLET_3: Principal = Principal::from_bytes([3u8; 32]);

fn registry_with_balances()
-> Registry<InMemoryArtworkStore, InMemorySubscriptionStore, InMemoryLedger> {
    let mut registry = Registry::in_memory();
    registry.ledger_mut().credit(WALLET_2, 100_000_000);
    registry.ledger_mut().credit(WALLET_3, 100_000_000);
    registry
}

// ----------------------------------------------------------------------------
// Canonical scenario: register, subscribe, inspect
// ----------------------------------------------------------------------------

#[test]
fn test_register_and_subscribe_flow() {
    let mut registry = registry_with_balances();

    // Artist registers artwork
    let registered = registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();
    assert!(registered);

    // Subscriber pays to follow the artist
    let subscribed = registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();
    assert!(subscribed);

    // The full price moved, exactly once
    assert_eq!(registry.ledger().balance(&WALLET_1), 10_000_000);
    assert_eq!(registry.ledger().balance(&WALLET_2), 90_000_000);
    assert!(registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
}

#[test]
fn test_artwork_details_after_registration() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();

    let record = registry.get_artwork(&WALLET_1).unwrap().unwrap();
    assert_eq!(
        record,
        ArtworkRecord {
            title: "My Awesome Art".to_string(),
            artist: WALLET_1,
            subscription_price: 10_000_000,
            active: true,
        }
    );
}

#[test]
fn test_fresh_pair_checks_false() {
    let registry = registry_with_balances();
    // No subscribe call between this pair has ever happened
    assert!(!registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
}

// ----------------------------------------------------------------------------
// Negative space: absent records, rejected calls
// ----------------------------------------------------------------------------

#[test]
fn test_unregistered_artist_reads_absent() {
    let registry = registry_with_balances();
    assert!(registry.get_artwork(&WALLET_1).unwrap().is_none());
}

#[test]
fn test_subscribe_to_missing_artwork_changes_nothing() {
    let mut registry = registry_with_balances();

    let err = registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap_err();
    assert!(matches!(err, RegistryError::NoSuchArtwork));

    assert!(!registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
    assert_eq!(registry.ledger().balance(&WALLET_1), 0);
    assert_eq!(registry.ledger().balance(&WALLET_2), 100_000_000);
}

#[test]
fn test_broke_subscriber_changes_nothing() {
    let mut registry = Registry::in_memory();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();
    // WALLET_2 holds nothing

    let err = registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::TransferFailed(LedgerError::InsufficientFunds {
            required: 10_000_000,
            available: 0,
        })
    ));
    assert!(!registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
    assert_eq!(registry.ledger().balance(&WALLET_1), 0);
}

#[test]
fn test_second_registration_keeps_first_title() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();

    let err = registry
        .register_artwork(WALLET_1, "Totally Different Art")
        .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered));

    let record = registry.get_artwork(&WALLET_1).unwrap().unwrap();
    assert_eq!(record.title, "My Awesome Art");
}

// ----------------------------------------------------------------------------
// Multiple parties
// ----------------------------------------------------------------------------

#[test]
fn test_subscriptions_are_per_pair() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();

    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();

    assert!(registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
    assert!(!registry.check_subscription(&WALLET_3, &WALLET_1).unwrap());
    // The reversed pair is its own key, and no one subscribed to WALLET_2
    assert!(!registry.check_subscription(&WALLET_1, &WALLET_2).unwrap());
}

#[test]
fn test_two_subscribers_both_charged() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();

    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();
    registry.subscribe_to_artist(WALLET_3, WALLET_1).unwrap();

    assert_eq!(registry.ledger().balance(&WALLET_1), 20_000_000);
    let mut subscribers = registry
        .subscription_store()
        .subscribers_of(&WALLET_1)
        .unwrap();
    subscribers.sort();
    assert_eq!(subscribers, vec![WALLET_2, WALLET_3]);
}

// ----------------------------------------------------------------------------
// Lifecycle: deactivation and unsubscribe
// ----------------------------------------------------------------------------

#[test]
fn test_deactivated_artwork_refuses_new_subscribers() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();
    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();

    registry.deactivate_artwork(WALLET_1).unwrap();

    // Existing subscription survives, new ones are refused
    assert!(registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
    let err = registry.subscribe_to_artist(WALLET_3, WALLET_1).unwrap_err();
    assert!(matches!(err, RegistryError::ArtworkInactive));
    assert_eq!(registry.ledger().balance(&WALLET_3), 100_000_000);
}

#[test]
fn test_unsubscribe_then_resubscribe() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();

    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();
    registry.unsubscribe(WALLET_2, WALLET_1).unwrap();
    assert!(!registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());

    // Subscribing again pays the full price again
    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();
    assert!(registry.check_subscription(&WALLET_2, &WALLET_1).unwrap());
    assert_eq!(registry.ledger().balance(&WALLET_1), 20_000_000);
}

#[test]
fn test_unsubscribe_twice_rejected() {
    let mut registry = registry_with_balances();
    registry
        .register_artwork(WALLET_1, "My Awesome Art")
        .unwrap();
    registry.subscribe_to_artist(WALLET_2, WALLET_1).unwrap();
    registry.unsubscribe(WALLET_2, WALLET_1).unwrap();

    let err = registry.unsubscribe(WALLET_2, WALLET_1).unwrap_err();
    assert!(matches!(err, RegistryError::NoSuchSubscription));
}
