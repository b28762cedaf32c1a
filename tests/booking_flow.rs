//! Integration test walking a small hotel through a saturation cycle.
//!
//! Two rooms, three guests, booked from a fixed "today" of 2025-06-01:
//!
//! 1. Guest 1 books Jun 5-8 and takes the first room.
//! 2. Guest 2 books Jun 5-8 and takes the second room; the hotel is now
//!    full for those dates.
//! 3. Guest 3 asks for Jun 5-8 and is declined, then for Jun 8-9 and is
//!    declined again: stays occupy both their boundary dates, so sharing
//!    Jun 8 with the existing stays conflicts.
//! 4. Guest 3 books Jun 9-10, which fits, and lands back in the first room.
//!
//! Afterwards the fully occupied dates over June are exactly Jun 5-8 (Jun
//! 9-10 keeps one room free), a Jun 9-10 request is offered the second
//! room, and no room ever holds two overlapping active stays.

use std::sync::Arc;

use jiff::civil::{Date, date};
use testresult::TestResult;

use vacancy::domain::{
    bookings::{
        BookingManager,
        models::{CustomerId, NewBooking},
        store::{BookingStore, InMemoryBookingStore},
    },
    rooms::{
        models::{Room, RoomId},
        store::InMemoryRoomStore,
    },
};

fn today() -> Date {
    date(2025, 6, 1)
}

fn request(customer: i64, start: Date, end: Date) -> NewBooking {
    NewBooking::new(CustomerId::from_i64(customer), start, end)
}

fn small_hotel() -> (BookingManager, Arc<InMemoryBookingStore>) {
    let bookings = Arc::new(InMemoryBookingStore::new());

    let rooms = vec![
        Room {
            id: RoomId::from_i64(1),
            description: "Seaview double".to_string(),
        },
        Room {
            id: RoomId::from_i64(2),
            description: "Garden twin".to_string(),
        },
    ];

    let manager = BookingManager::new(
        bookings.clone(),
        Arc::new(InMemoryRoomStore::new(rooms)),
    );

    (manager, bookings)
}

#[tokio::test]
async fn saturating_a_small_hotel() -> TestResult {
    let (manager, bookings) = small_hotel();

    // Fill both rooms for Jun 5-8.
    assert!(
        manager
            .create_booking(request(1, date(2025, 6, 5), date(2025, 6, 8)), today())
            .await?
    );
    assert!(
        manager
            .create_booking(request(2, date(2025, 6, 5), date(2025, 6, 8)), today())
            .await?
    );

    // A third guest is declined for the same stay.
    assert!(
        !manager
            .create_booking(request(3, date(2025, 6, 5), date(2025, 6, 8)), today())
            .await?
    );

    // Sharing only the Jun 8 boundary with the existing stays still
    // conflicts.
    assert!(
        !manager
            .create_booking(request(3, date(2025, 6, 8), date(2025, 6, 9)), today())
            .await?
    );

    // Starting the day after the stays end fits, back in the first room.
    assert!(
        manager
            .create_booking(request(3, date(2025, 6, 9), date(2025, 6, 10)), today())
            .await?
    );

    let stored = bookings.list().await?;

    assert_eq!(stored.len(), 3, "declined requests must not be stored");

    let third = stored.last().expect("third booking stored");

    assert_eq!(third.room_id, Some(RoomId::from_i64(1)));
    assert!(third.is_active);

    // Only Jun 5-8 saturate the hotel; Jun 9-10 keeps the second room free.
    let occupied = manager
        .fully_occupied_dates(date(2025, 6, 2), date(2025, 6, 30))
        .await?;

    let expected: Vec<Date> = (5..=8).map(|dom| date(2025, 6, dom)).collect();

    assert_eq!(occupied, expected);

    let free = manager
        .find_available_room(date(2025, 6, 9), date(2025, 6, 10), today())
        .await?;

    assert_eq!(free, Some(RoomId::from_i64(2)));

    // No room ends up with two overlapping active stays.
    for (index, left) in stored.iter().enumerate() {
        for right in stored.iter().skip(index + 1) {
            if left.is_active && right.is_active && left.room_id == right.room_id {
                assert!(
                    !left.overlaps(right.start_date, right.end_date),
                    "bookings {} and {} overlap on room {:?}",
                    left.id,
                    right.id,
                    left.room_id
                );
            }
        }
    }

    Ok(())
}

#[tokio::test]
async fn an_empty_hotel_books_nothing() -> TestResult {
    let bookings = Arc::new(InMemoryBookingStore::new());

    let manager = BookingManager::new(
        bookings.clone(),
        Arc::new(InMemoryRoomStore::new(Vec::new())),
    );

    let created = manager
        .create_booking(request(1, date(2025, 6, 5), date(2025, 6, 8)), today())
        .await?;

    assert!(!created);
    assert!(bookings.list().await?.is_empty());

    let free = manager
        .find_available_room(date(2025, 6, 5), date(2025, 6, 8), today())
        .await?;

    assert_eq!(free, None);

    // With zero rooms no date can be fully occupied.
    let occupied = manager
        .fully_occupied_dates(date(2025, 6, 2), date(2025, 6, 30))
        .await?;

    assert!(occupied.is_empty());

    Ok(())
}
