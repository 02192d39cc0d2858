//! Integration tests for the `book` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_book_prints_booking() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--name", "Alice", "--seat", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Seat 5 | Name: Alice | Time: "))
        .stderr(predicate::str::contains(
            "Ticket booked successfully for Alice | Seat: 5",
        ));
}

#[test]
fn test_book_creates_store() {
    let env = TestEnv::new();
    env.book("Alice", 5);

    let json = env.store_json();
    assert_eq!(json["transport_name"], "ExpressLine Bus");
    assert_eq!(json["total_seats"], 20);
    assert_eq!(json["bookings"][0]["name"], "Alice");
    assert_eq!(json["bookings"][0]["seat"], 5);

    let time = json["bookings"][0]["time"].as_str().unwrap();
    assert_eq!(time.len(), "2024-01-15 10:30:45".len());
}

#[test]
fn test_book_taken_seat_fails() {
    let env = TestEnv::new();
    env.book("Alice", 5);

    env.command()
        .args(["book", "--name", "Bob", "--seat", "5"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("seat 5 is already booked"));

    assert_eq!(env.store_json()["bookings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_book_out_of_range_fails() {
    let env = TestEnv::new();

    for seat in ["21", "0", "-4"] {
        env.command()
            .args(["book", "--name", "Bob", "--seat", seat])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid seat number"));
    }
    assert!(!env.store_path().exists());
}

#[test]
fn test_book_blank_name_fails() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--name", "   ", "--seat", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("name"));
    assert!(!env.store_path().exists());
}

#[test]
fn test_book_trims_name() {
    let env = TestEnv::new();
    env.book("  Alice  ", 2);
    assert_eq!(env.store_json()["bookings"][0]["name"], "Alice");
}

#[test]
fn test_book_quiet_suppresses_confirmation() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "book", "--name", "Alice", "--seat", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat 1 | Name: Alice"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_book_uses_configured_vehicle_for_new_store() {
    let env = TestEnv::new();
    env.write_config("transport_name: Night Coach\ntotal_seats: 4\n");

    env.command()
        .args(["book", "--name", "Alice", "--seat", "5"])
        .assert()
        .code(1);

    env.book("Alice", 4);
    let json = env.store_json();
    assert_eq!(json["transport_name"], "Night Coach");
    assert_eq!(json["total_seats"], 4);
}

#[test]
fn test_book_with_explicit_store() {
    let env = TestEnv::new();
    let store = env.path().join("bus.json");

    env.command_bare()
        .arg("--store")
        .arg(&store)
        .args(["book", "--name", "Alice", "--seat", "3"])
        .assert()
        .success();

    assert!(store.is_file());
}
