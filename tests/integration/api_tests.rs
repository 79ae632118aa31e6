//! API integration tests
//!
//! Requires a running server and a database seeded with
//! `fixtures/dev_seed.sql` (provider 1 "Ada Cuts" with services 1 and 2).
//! Tests share one provider calendar, so run them serially:
//! cargo test -- --ignored --test-threads=1

use chrono::{Datelike, Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

const PROVIDER_ID: i32 = 1;
const SERVICE_ID: i32 = 1;

/// First Monday strictly after today
fn next_monday() -> chrono::NaiveDate {
    let mut d = Utc::now().date_naive() + Duration::days(1);
    while d.weekday() != chrono::Weekday::Mon {
        d += Duration::days(1);
    }
    d
}

/// Open a weekday with the given hours so slot tests start from a known grid
async fn open_day(client: &Client, day: i16, open: &str, close: &str) {
    let response = client
        .put(format!(
            "{}/providers/{}/schedule/{}/availability",
            BASE_URL, PROVIDER_ID, day
        ))
        .json(&json!({ "is_available": true }))
        .send()
        .await
        .expect("Failed to toggle availability");
    assert!(response.status().is_success());

    let response = client
        .put(format!(
            "{}/providers/{}/schedule/{}/times",
            BASE_URL, PROVIDER_ID, day
        ))
        .json(&json!({ "open_time": open, "close_time": close }))
        .send()
        .await
        .expect("Failed to set times");
    assert!(response.status().is_success());
}

/// Reject a booking so its slot is freed for the next test run
async fn reject_booking(client: &Client, id: i64) {
    let _ = client
        .put(format!("{}/bookings/{}/status", BASE_URL, id))
        .json(&json!({ "status": 2 }))
        .send()
        .await;
}

async fn submit_booking(client: &Client, date: &str, time: &str) -> reqwest::Response {
    client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "provider_id": PROVIDER_ID,
            "service_id": SERVICE_ID,
            "date": date,
            "time": time,
            "customer_name": "Test Customer",
            "customer_contact": "test@example.com"
        }))
        .send()
        .await
        .expect("Failed to send booking request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_get_provider() {
    let client = Client::new();

    let response = client
        .get(format!("{}/providers/{}", BASE_URL, PROVIDER_ID))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["slug"], "ada-cuts");
}

#[tokio::test]
#[ignore]
async fn test_list_services() {
    let client = Client::new();

    let response = client
        .get(format!("{}/providers/{}/services", BASE_URL, PROVIDER_ID))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().map(|a| !a.is_empty()).unwrap_or(false));
}

#[tokio::test]
#[ignore]
async fn test_schedule_is_seeded_with_seven_rules() {
    let client = Client::new();

    let response = client
        .get(format!("{}/providers/{}/schedule", BASE_URL, PROVIDER_ID))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let rules = body.as_array().expect("Expected array of rules");
    assert_eq!(rules.len(), 7);
    // Sunday (day 0) seeded closed, Monday (day 1) seeded open
    assert_eq!(rules[0]["day_of_week"], 0);
    assert_eq!(rules[0]["is_available"], false);
    assert_eq!(rules[1]["is_available"], true);
}

#[tokio::test]
#[ignore]
async fn test_inverted_times_are_rejected() {
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/providers/{}/schedule/1/times",
            BASE_URL, PROVIDER_ID
        ))
        .json(&json!({ "open_time": "17:00", "close_time": "09:00" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_invalid_day_of_week_is_rejected() {
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/providers/{}/schedule/7/availability",
            BASE_URL, PROVIDER_ID
        ))
        .json(&json!({ "is_available": true }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_full_day_slot_grid() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "17:00").await;

    let monday = next_monday();
    let response = client
        .get(format!(
            "{}/providers/{}/slots?date={}",
            BASE_URL, PROVIDER_ID, monday
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["bookable"], true);
    let slots: Vec<String> = body["slots"]
        .as_array()
        .expect("Expected slots array")
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect();
    // Inclusive grid: 09:00 through 17:00
    assert_eq!(
        slots,
        vec![
            "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"
        ]
    );
}

#[tokio::test]
#[ignore]
async fn test_past_date_has_no_slots() {
    let client = Client::new();

    let last_year = Utc::now().date_naive() - Duration::days(365);
    let response = client
        .get(format!(
            "{}/providers/{}/slots?date={}",
            BASE_URL, PROVIDER_ID, last_year
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["bookable"], false);
    assert_eq!(body["slots"].as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_block_and_unblock_date() {
    let client = Client::new();
    let monday = next_monday();

    // Block
    let response = client
        .post(format!("{}/providers/{}/blocked-dates", BASE_URL, PROVIDER_ID))
        .json(&json!({ "date": monday.to_string(), "reason": "vacation" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let blocked_id = body["id"].as_i64().expect("No blocked date ID");

    // Blocking the same date again conflicts
    let response = client
        .post(format!("{}/providers/{}/blocked-dates", BASE_URL, PROVIDER_ID))
        .json(&json!({ "date": monday.to_string() }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Blocked date overrides the weekly rule
    let response = client
        .get(format!(
            "{}/providers/{}/slots?date={}",
            BASE_URL, PROVIDER_ID, monday
        ))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["bookable"], false);

    // Unblock
    let response = client
        .delete(format!("{}/blocked-dates/{}", BASE_URL, blocked_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_booking_on_open_day_succeeds() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let response = submit_booking(&client, &monday.to_string(), "10:00").await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 0); // pending
    assert_eq!(body["paid"], false);
    let id = body["id"].as_i64().expect("No booking ID");

    reject_booking(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_booking_on_blocked_date_fails() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let response = client
        .post(format!("{}/providers/{}/blocked-dates", BASE_URL, PROVIDER_ID))
        .json(&json!({ "date": monday.to_string(), "reason": "off" }))
        .send()
        .await
        .expect("Failed to block date");
    assert_eq!(response.status(), 201);
    let blocked: Value = response.json().await.expect("Failed to parse response");
    let blocked_id = blocked["id"].as_i64().expect("No blocked date ID");

    let response = submit_booking(&client, &monday.to_string(), "10:00").await;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "DateUnavailable");

    let _ = client
        .delete(format!("{}/blocked-dates/{}", BASE_URL, blocked_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_booking_off_grid_time_fails() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let response = submit_booking(&client, &monday.to_string(), "10:17").await;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "SlotNotOffered");
}

#[tokio::test]
#[ignore]
async fn test_taken_slot_conflicts_but_next_slot_is_free() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let first = submit_booking(&client, &monday.to_string(), "10:00").await;
    assert_eq!(first.status(), 201);
    let first: Value = first.json().await.expect("Failed to parse response");
    let first_id = first["id"].as_i64().expect("No booking ID");

    // Same slot again conflicts
    let second = submit_booking(&client, &monday.to_string(), "10:00").await;
    assert_eq!(second.status(), 409);
    let body: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "SlotTaken");

    // The next slot is still free
    let third = submit_booking(&client, &monday.to_string(), "11:00").await;
    assert_eq!(third.status(), 201);
    let third: Value = third.json().await.expect("Failed to parse response");
    let third_id = third["id"].as_i64().expect("No booking ID");

    reject_booking(&client, first_id).await;
    reject_booking(&client, third_id).await;
}

#[tokio::test]
#[ignore]
async fn test_concurrent_bookings_for_same_slot() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday().to_string();

    let (a, b) = tokio::join!(
        submit_booking(&client, &monday, "09:00"),
        submit_booking(&client, &monday, "09:00")
    );

    let mut statuses = vec![a.status().as_u16(), b.status().as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, vec![201, 409], "exactly one submission must win");

    for response in [a, b] {
        if response.status() == 201 {
            let body: Value = response.json().await.expect("Failed to parse response");
            reject_booking(&client, body["id"].as_i64().expect("No booking ID")).await;
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_status_lifecycle() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let response = submit_booking(&client, &monday.to_string(), "11:00").await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No booking ID");

    // pending -> accepted
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, id))
        .json(&json!({ "status": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // accepted -> pending is not a legal transition
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, id))
        .json(&json!({ "status": 0 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // paid flag is orthogonal to status
    let response = client
        .put(format!("{}/bookings/{}/paid", BASE_URL, id))
        .json(&json!({ "paid": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // accepted -> completed; a completed row no longer occupies its slot
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, id))
        .json(&json!({ "status": 3 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // completed -> rejected must fail
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, id))
        .json(&json!({ "status": 2 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_reschedule_excludes_own_slot() {
    let client = Client::new();
    open_day(&client, 1, "09:00", "12:00").await;
    let monday = next_monday();

    let response = submit_booking(&client, &monday.to_string(), "09:00").await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No booking ID");

    // Rescheduling onto its own current slot must not conflict with itself
    let response = client
        .put(format!("{}/bookings/{}/schedule", BASE_URL, id))
        .json(&json!({ "date": monday.to_string(), "time": "09:00" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Move to a different slot
    let response = client
        .put(format!("{}/bookings/{}/schedule", BASE_URL, id))
        .json(&json!({ "date": monday.to_string(), "time": "11:00" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["scheduled_at"]
        .as_str()
        .map(|s| s.contains("11:00"))
        .unwrap_or(false));

    reject_booking(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_unknown_provider_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/providers/999999/schedule", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
