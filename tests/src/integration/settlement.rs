//! Auction state machine and escrow accounting.

#[cfg(test)]
mod tests {
    use crate::integration::*;
    use lc_04_auction_engine::AuctionError;
    use registry_runtime::RegistryRuntime;
    use shared_types::LandId;

    /// Registers Alice with a reviewed parcel and opens an auction on it.
    async fn auction_fixture(min_bid: u128) -> (RegistryRuntime, LandId) {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;
        verified_user(&runtime, BOB, "Bob").await;
        verified_user(&runtime, CAROL, "Carol").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 10)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .start_auction(ALICE, land_id, min_bid)
            .await
            .unwrap();
        (runtime, land_id)
    }

    /// The full settlement scenario: B bids 6, C outbids with 8, the seller
    /// finalizes, B withdraws the escrowed stake exactly once.
    #[tokio::test]
    async fn test_outbid_escrow_and_settlement() {
        let (runtime, land_id) = auction_fixture(5).await;

        runtime.place_bid(BOB, land_id, 6).await.unwrap();
        let ack = runtime.place_bid(CAROL, land_id, 8).await.unwrap();
        assert_eq!(ack.outbid, Some(BOB));

        let ack = runtime.finalize_auction(ALICE, land_id).await.unwrap();
        assert_eq!(ack.winner, CAROL);
        assert_eq!(ack.price, 8);

        let land = runtime.land(land_id).await.unwrap();
        assert_eq!(land.owner, CAROL);
        assert!(!land.is_for_sale);
        assert_eq!(runtime.balance_of(ALICE).await, 108);
        assert_eq!(runtime.balance_of(CAROL).await, 92);

        // B's 6 is withdrawable exactly once.
        let ack = runtime.withdraw_bid(BOB, land_id).await.unwrap();
        assert_eq!(ack.amount, 6);
        assert_eq!(runtime.balance_of(BOB).await, 100);
        assert_eq!(
            runtime.withdraw_bid(BOB, land_id).await.unwrap_err(),
            AuctionError::NoWithdrawableBalance { caller: BOB }
        );
    }

    /// Value never appears or disappears: book total plus held stakes is
    /// constant through every auction operation.
    #[tokio::test]
    async fn test_conservation_across_auction_lifecycle() {
        let (runtime, land_id) = auction_fixture(5).await;
        let initial = runtime.total_value().await;
        assert_eq!(initial, 300);

        runtime.place_bid(BOB, land_id, 6).await.unwrap();
        assert_eq!(runtime.total_value().await, initial);

        runtime.place_bid(CAROL, land_id, 8).await.unwrap();
        assert_eq!(runtime.total_value().await, initial);

        runtime.place_bid(BOB, land_id, 12).await.unwrap();
        assert_eq!(runtime.total_value().await, initial);

        runtime.finalize_auction(ALICE, land_id).await.unwrap();
        assert_eq!(runtime.total_value().await, initial);

        runtime.withdraw_bid(BOB, land_id).await.unwrap();
        runtime.withdraw_bid(CAROL, land_id).await.unwrap();
        assert_eq!(runtime.total_value().await, initial);

        // Everyone's books settle to the expected amounts.
        assert_eq!(runtime.balance_of(ALICE).await, 112);
        assert_eq!(runtime.balance_of(BOB).await, 88);
        assert_eq!(runtime.balance_of(CAROL).await, 100);
    }

    /// Each accepted bid strictly exceeds the previous leader; rejections leave
    /// the auction untouched.
    #[tokio::test]
    async fn test_bid_monotonicity() {
        let (runtime, land_id) = auction_fixture(5).await;

        assert_eq!(
            runtime.place_bid(BOB, land_id, 4).await.unwrap_err(),
            AuctionError::BidTooLow {
                offered: 4,
                floor: 5
            }
        );

        let mut last = 0;
        for (bidder, value) in [(BOB, 5), (CAROL, 6), (BOB, 9)] {
            runtime.place_bid(bidder, land_id, value).await.unwrap();
            let auction = runtime.auction(land_id).await.unwrap();
            assert!(auction.highest_bid > last);
            last = auction.highest_bid;
        }

        assert_eq!(
            runtime.place_bid(CAROL, land_id, 9).await.unwrap_err(),
            AuctionError::BidTooLow {
                offered: 9,
                floor: 10
            }
        );
        assert_eq!(runtime.auction(land_id).await.unwrap().highest_bid, 9);
    }

    /// The parcel is transferred exactly once; the second finalize hits the
    /// terminal state.
    #[tokio::test]
    async fn test_finalize_exactly_once() {
        let (runtime, land_id) = auction_fixture(5).await;
        runtime.place_bid(BOB, land_id, 6).await.unwrap();
        runtime.finalize_auction(ALICE, land_id).await.unwrap();

        assert_eq!(
            runtime.finalize_auction(ALICE, land_id).await.unwrap_err(),
            AuctionError::AuctionInactive { land_id }
        );
        assert_eq!(runtime.land(land_id).await.unwrap().owner, BOB);
    }

    /// Sellers cannot finalize an empty auction, cannot cancel once a bid
    /// exists, and only the seller may do either.
    #[tokio::test]
    async fn test_cancel_and_finalize_legality() {
        let (runtime, land_id) = auction_fixture(5).await;

        assert_eq!(
            runtime.finalize_auction(ALICE, land_id).await.unwrap_err(),
            AuctionError::NoBids { land_id }
        );
        assert!(matches!(
            runtime.cancel_auction(BOB, land_id).await.unwrap_err(),
            AuctionError::Unauthorized { .. }
        ));

        runtime.place_bid(BOB, land_id, 6).await.unwrap();
        assert_eq!(
            runtime.cancel_auction(ALICE, land_id).await.unwrap_err(),
            AuctionError::AuctionHasBids { land_id }
        );

        // The leading stake stays held; the auction stays active.
        assert!(runtime.auction(land_id).await.unwrap().is_active());
        assert_eq!(runtime.balance_of(BOB).await, 94);
    }

    /// Cancelling a bidless auction frees the parcel for a fresh instance.
    #[tokio::test]
    async fn test_cancel_then_restart() {
        let (runtime, land_id) = auction_fixture(5).await;

        runtime.cancel_auction(ALICE, land_id).await.unwrap();
        assert_eq!(
            runtime.place_bid(BOB, land_id, 6).await.unwrap_err(),
            AuctionError::AuctionInactive { land_id }
        );

        runtime.start_auction(ALICE, land_id, 3).await.unwrap();
        runtime.place_bid(BOB, land_id, 3).await.unwrap();
        assert_eq!(runtime.auction(land_id).await.unwrap().highest_bid, 3);
    }

    /// Starting an auction delists the parcel and blocks a second start while
    /// the first instance is active.
    #[tokio::test]
    async fn test_start_delists_and_excludes_second_start() {
        let runtime = runtime_with_funds(100);
        verified_user(&runtime, ALICE, "Alice").await;

        let land_id = runtime
            .register_land(ALICE, "Farmville", 10)
            .await
            .unwrap()
            .land_id;
        runtime.verify_land(ADMIN, land_id, true).await.unwrap();
        runtime
            .list_land_for_sale(ALICE, land_id, 10)
            .await
            .unwrap();

        runtime.start_auction(ALICE, land_id, 5).await.unwrap();
        assert!(
            !runtime.land(land_id).await.unwrap().is_for_sale,
            "auction start removes the direct-sale listing"
        );
        assert_eq!(
            runtime.start_auction(ALICE, land_id, 5).await.unwrap_err(),
            AuctionError::AuctionAlreadyActive { land_id }
        );
    }

    /// The seller cannot bid on their own auction; bidders need coverable
    /// stakes.
    #[tokio::test]
    async fn test_bid_preconditions() {
        let (runtime, land_id) = auction_fixture(5).await;

        assert!(matches!(
            runtime.place_bid(ALICE, land_id, 6).await.unwrap_err(),
            AuctionError::Unauthorized { .. }
        ));

        assert_eq!(
            runtime.place_bid(BOB, land_id, 101).await.unwrap_err(),
            AuctionError::InsufficientFunds {
                required: 101,
                available: 100
            }
        );
    }

    /// Escrow from a settled instance survives a fresh auction on the same
    /// parcel.
    #[tokio::test]
    async fn test_escrow_survives_new_instance() {
        let (runtime, land_id) = auction_fixture(5).await;
        runtime.place_bid(BOB, land_id, 6).await.unwrap();
        runtime.place_bid(CAROL, land_id, 8).await.unwrap();
        runtime.finalize_auction(ALICE, land_id).await.unwrap();

        // Carol owns the parcel now and opens her own auction.
        runtime.start_auction(CAROL, land_id, 2).await.unwrap();

        // Bob's stake from the first instance is still withdrawable.
        let ack = runtime.withdraw_bid(BOB, land_id).await.unwrap();
        assert_eq!(ack.amount, 6);
        assert_eq!(runtime.balance_of(BOB).await, 100);
    }
}
