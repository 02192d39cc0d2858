//! Property-based tests for `ReservationManager`.

use super::ReservationManager;
use crate::error::Error;
use crate::seat::SeatStatus;
use crate::state::ReservationState;
use crate::store::MemoryStore;
use proptest::prelude::*;

/// Seat count used by the generated vehicles.
const TOTAL_SEATS: u32 = 20;

/// Opens a manager over a 20-seat vehicle with `seats` already booked.
fn manager_with(seats: &[i64]) -> ReservationManager<MemoryStore> {
    let store = MemoryStore::with_state(ReservationState::new("Proptest Bus", TOTAL_SEATS));
    let mut manager = ReservationManager::open(store).unwrap();
    for seat in seats {
        manager.book(&format!("P{seat}"), *seat).unwrap();
    }
    manager
}

fn distinct_seats() -> impl Strategy<Value = Vec<i64>> {
    proptest::sample::subsequence((1..=i64::from(TOTAL_SEATS)).collect::<Vec<_>>(), 0..=20)
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Out-of-range seats are always rejected without touching the state
    #[test]
    fn book_out_of_range_is_invalid(
        booked in distinct_seats(),
        seat in prop_oneof![i64::MIN..=0i64, (i64::from(TOTAL_SEATS) + 1)..=i64::MAX],
    ) {
        let mut manager = manager_with(&booked);
        let before = manager.state().clone();
        let saves = manager.store().save_count();

        let result = manager.book("Mallory", seat);
        prop_assert!(
            matches!(result, Err(Error::InvalidSeat { .. })),
            "expected InvalidSeat, got {:?}",
            result
        );
        prop_assert_eq!(manager.state(), &before);
        prop_assert_eq!(manager.store().save_count(), saves);
    }

    // Booked seats can never be booked twice
    #[test]
    fn book_taken_seat_is_rejected(booked in distinct_seats(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!booked.is_empty());
        let seat = booked[pick.index(booked.len())];
        let mut manager = manager_with(&booked);
        let before = manager.state().clone();

        let result = manager.book("Mallory", seat);
        prop_assert!(
            matches!(result, Err(Error::SeatTaken { .. })),
            "expected SeatTaken, got {:?}",
            result
        );
        prop_assert_eq!(manager.state(), &before);
    }

    // A successful booking is visible to both queries
    #[test]
    fn booked_seat_is_visible(booked in distinct_seats(), seat in 1..=i64::from(TOTAL_SEATS)) {
        prop_assume!(!booked.contains(&seat));
        let mut manager = manager_with(&booked);

        manager.book("Alice", seat).unwrap();

        let seats = manager.view_seats();
        let index = usize::try_from(seat - 1).unwrap();
        prop_assert_eq!(seats[index].1, SeatStatus::Booked);

        let matching: Vec<_> = manager
            .list_bookings()
            .iter()
            .filter(|b| i64::from(b.seat().value()) == seat)
            .collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0].name(), "Alice");
    }

    // Cancelling an unbooked seat never changes anything
    #[test]
    fn cancel_unbooked_is_not_found(booked in distinct_seats(), seat in -5i64..=25) {
        prop_assume!(!booked.contains(&seat));
        let mut manager = manager_with(&booked);
        let before = manager.state().clone();

        let result = manager.cancel(seat);
        prop_assert!(
            matches!(result, Err(Error::NotFound { .. })),
            "expected NotFound, got {:?}",
            result
        );
        prop_assert_eq!(manager.state(), &before);
    }

    // Seat statuses always agree with the booking list
    #[test]
    fn view_seats_matches_bookings(booked in distinct_seats()) {
        let manager = manager_with(&booked);
        let seats = manager.view_seats();

        prop_assert_eq!(seats.len(), TOTAL_SEATS as usize);
        for (seat, status) in seats {
            let expected = booked.contains(&i64::from(seat.value()));
            prop_assert_eq!(status.is_booked(), expected);
        }
        prop_assert_eq!(manager.available_seats(), TOTAL_SEATS as usize - booked.len());
    }

    // Insertion order survives a reload from the store
    #[test]
    fn reopen_preserves_order(booked in distinct_seats()) {
        let manager = manager_with(&booked);
        let snapshot = manager.store().snapshot().unwrap_or_default();
        let reopened = ReservationManager::open(MemoryStore::with_state(snapshot)).unwrap();

        let order: Vec<i64> = reopened
            .list_bookings()
            .iter()
            .map(|b| i64::from(b.seat().value()))
            .collect();
        prop_assert_eq!(order, booked);
    }
}
