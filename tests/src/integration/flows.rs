//! Identity → cadastre → marketplace flows.

#[cfg(test)]
mod tests {
    use crate::integration::*;
    use lc_02_land_registry::LandError;

    /// The canonical direct-sale flow: two verified users, one reviewed parcel,
    /// a fixed-price purchase.
    #[tokio::test]
    async fn test_user_buys_listed_land() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;
        verified_user(&runtime, BOB, "Bob").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 20)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .list_land_for_sale(ALICE, land_id, 20)
            .await
            .unwrap();

        let ack = runtime.buy_land(BOB, land_id, 20).await.unwrap();
        assert_eq!(ack.price, 20);
        assert_eq!(ack.refunded, 0);

        let land = runtime.land(land_id).await.unwrap();
        assert_eq!(land.owner, BOB);
        assert!(!land.is_for_sale);
        assert_eq!(runtime.balance_of(ALICE).await, 120);
        assert_eq!(runtime.balance_of(BOB).await, 80);
    }

    /// Overpaying moves only the price; the excess stays with the buyer.
    #[tokio::test]
    async fn test_excess_value_stays_with_buyer() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;
        verified_user(&runtime, BOB, "Bob").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 20)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .list_land_for_sale(ALICE, land_id, 20)
            .await
            .unwrap();

        let ack = runtime.buy_land(BOB, land_id, 30).await.unwrap();
        assert_eq!(ack.refunded, 10);
        assert_eq!(runtime.balance_of(BOB).await, 80);
        assert_eq!(runtime.total_value().await, 300);
    }

    /// A parcel cannot be listed until the administrator approves it.
    #[tokio::test]
    async fn test_listing_blocked_until_review() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 20)
            .await
            .unwrap()
            .land_id;

        let err = runtime
            .list_land_for_sale(ALICE, land_id, 20)
            .await
            .unwrap_err();
        assert!(matches!(err, LandError::NotVerified { .. }));

        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .list_land_for_sale(ALICE, land_id, 20)
            .await
            .unwrap();
        assert!(runtime.land(land_id).await.unwrap().is_for_sale);
    }

    /// A rejected parcel is terminal: never listable, review never reopens.
    #[tokio::test]
    async fn test_rejected_parcel_is_terminal() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        let land_id = runtime
            .register_land(ALICE, "Swampville", 20)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, false).await.unwrap();

        assert!(matches!(
            runtime
                .list_land_for_sale(ALICE, land_id, 20)
                .await
                .unwrap_err(),
            LandError::NotVerified { .. }
        ));
        assert_eq!(
            runtime.verify_land(ADMIN, land_id, true).await.unwrap_err(),
            LandError::AlreadyReviewed { id: land_id }
        );

        // The location itself may be registered again under a fresh id.
        let second = runtime
            .register_land(ALICE, "Swampville", 20)
            .await
            .unwrap()
            .land_id;
        assert_eq!(second, land_id + 1);
    }

    /// Unverified users cannot register parcels, and no id is consumed by the
    /// attempt.
    #[tokio::test]
    async fn test_unverified_registration_consumes_no_id() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        // MALLORY never registered; registration fails the verification gate.
        let err = runtime
            .register_land(MALLORY, "nowhere", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, LandError::NotVerified { .. }));
        assert_eq!(runtime.land_count().await, 0);

        // A registered-but-unverified user fails the same way.
        runtime
            .register_user(MALLORY, "Mallory", "m@example.com", "0")
            .await
            .unwrap();
        let err = runtime
            .register_land(MALLORY, "nowhere", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, LandError::NotVerified { .. }));

        let first = runtime
            .register_land(ALICE, "Farmville", 1)
            .await
            .unwrap()
            .land_id;
        assert_eq!(first, 1, "failed attempts consumed no id");
    }

    /// The gift/transfer path needs no recipient verification and clears any
    /// listing.
    #[tokio::test]
    async fn test_gift_transfer_path() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 20)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .list_land_for_sale(ALICE, land_id, 20)
            .await
            .unwrap();

        // The recipient has no identity record at all.
        let stranger = random_address();
        runtime
            .transfer_ownership(ALICE, land_id, stranger)
            .await
            .unwrap();
        let land = runtime.land(land_id).await.unwrap();
        assert_eq!(land.owner, stranger);
        assert!(!land.is_for_sale);
    }

    /// `available_lands` yields listed parcels only, ascending by id.
    #[tokio::test]
    async fn test_available_lands_ascending() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;
        verified_user(&runtime, BOB, "Bob").await;

        let mut listed = Vec::new();
        for (owner, location, list) in [
            (ALICE, "first", true),
            (BOB, "second", false),
            (ALICE, "third", true),
        ] {
            let id = runtime
                .register_land(owner, location, 5)
                .await
                .unwrap()
                .land_id;
            runtime.verify_land(ADMIN, id, true).await.unwrap();
            if list {
                runtime.list_land_for_sale(owner, id, 5).await.unwrap();
                listed.push(id);
            }
        }

        let available: Vec<u64> = runtime
            .available_lands()
            .await
            .iter()
            .map(|land| land.id)
            .collect();
        assert_eq!(available, listed);
    }

    /// Profile updates leave the verification flag alone; re-verification is a
    /// safe no-op.
    #[tokio::test]
    async fn test_profile_update_and_idempotent_verify() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        runtime
            .update_user(ALICE, "Alicia", "alicia@example.com", "0987654321")
            .await
            .unwrap();
        let user = runtime.user(ALICE).await.unwrap();
        assert_eq!(user.profile.name, "Alicia");
        assert!(user.is_verified);

        let ack = runtime.verify_user(ADMIN, ALICE).await.unwrap();
        assert!(!ack.newly_verified);
    }
}
