//! API Integration Tests
//!
//! Each test spawns the API on a random port over its own in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config_with_event, TestServer,
};
use reqwest::StatusCode;
use shower_store::MemoryStore;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store.set_unavailable(true);
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/guests").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Guest Tests
// ============================================================================

#[tokio::test]
async fn test_list_guests_filters_by_name() {
    let (store, _) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server.get("/api/v1/guests?q=ana").await.unwrap();
    let list: GuestListJson = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<&str> = list.guests.iter().filter_map(|g| g.name.as_deref()).collect();
    assert_eq!(names, vec!["Ana García", "Juliana Torres"]);
    assert_eq!(list.total, 3);
    assert_eq!(list.confirmed_count, 0);
    assert_eq!(list.guests[0].initial, "A");
}

#[tokio::test]
async fn test_guest_confirmation_cycle() {
    let (store, _) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server
        .put(
            "/api/v1/guests/3/confirmation",
            &ConfirmationBody {
                confirmed: Some(true),
            },
        )
        .await
        .unwrap();
    let guest: GuestJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guest.id, 3);
    assert_eq!(guest.confirmed, Some(true));
    assert!(guest.confirmed_at.is_some());

    let response = server
        .put(
            "/api/v1/guests/3/confirmation",
            &ConfirmationBody {
                confirmed: Some(false),
            },
        )
        .await
        .unwrap();
    let guest: GuestJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guest.confirmed, Some(false));
    assert!(guest.confirmed_at.is_some());

    let response = server
        .put("/api/v1/guests/3/confirmation", &ConfirmationBody { confirmed: None })
        .await
        .unwrap();
    let guest: GuestJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guest.confirmed, None);
    assert!(guest.confirmed_at.is_none());
}

#[tokio::test]
async fn test_confirmation_without_answer_is_rejected() {
    let (store, _) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server
        .put(
            "/api/v1/guests/3/confirmation",
            &ConfirmationBody {
                confirmed: Some(true),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put(
            "/api/v1/guests/3/confirmation",
            &MistypedConfirmationBody { confirm: true },
        )
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");

    let response = server
        .put("/api/v1/guests/3/confirmation", &EmptyBody {})
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    // The earlier answer and its timestamp survive
    let response = server.get("/api/v1/guests?q=pedro").await.unwrap();
    let list: GuestListJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.guests.len(), 1);
    assert_eq!(list.guests[0].confirmed, Some(true));
    assert!(list.guests[0].confirmed_at.is_some());
}

#[tokio::test]
async fn test_confirm_unknown_guest() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put(
            "/api/v1/guests/42/confirmation",
            &ConfirmationBody {
                confirmed: Some(true),
            },
        )
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_GUEST");
}

#[tokio::test]
async fn test_malformed_guest_id() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put("/api/v1/guests/abc/confirmation", &ConfirmationBody { confirmed: None })
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_unreachable_store_is_fetch_error() {
    let (store, _) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    server.store.set_unavailable(true);

    let response = server.get("/api/v1/guests").await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "FETCH_ERROR");
}

// ============================================================================
// Gift Tests
// ============================================================================

#[tokio::test]
async fn test_list_gifts_by_category() {
    let (store, _) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server.get("/api/v1/gifts").await.unwrap();
    let list: GiftListJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.active_category, "all");
    assert_eq!(list.gifts.len(), 2);
    assert_eq!(list.categories[0], "all");
    assert_eq!(list.categories.len(), 3);

    let response = server.get("/api/v1/gifts?category=muebles").await.unwrap();
    let list: GiftListJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.gifts.len(), 1);
    assert_eq!(list.gifts[0].name, "Cuna");
    assert_eq!(list.gifts[0].category, "muebles");
}

#[tokio::test]
async fn test_legacy_reservation_is_displayed() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server.get("/api/v1/gifts?category=alimentación").await.unwrap();
    let list: GiftListJson = assert_json(response, StatusCode::OK).await.unwrap();
    let gift = &list.gifts[0];
    assert_eq!(gift.id, ids.biberones.to_string());
    assert!(gift.reservations.is_empty());
    assert_eq!(gift.display_reservations, vec!["Abuela".to_string()]);
}

#[tokio::test]
async fn test_reserve_twice_then_remove() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    let path = format!("/api/v1/gifts/{}/reservations", ids.cuna);

    for name in ["Ana", "Bea", "Ana"] {
        let response = server.post(&path, &ReserveBody::new(name)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.delete(&format!("{path}/Ana")).await.unwrap();
    let gift: GiftJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gift.reservations, vec!["Bea".to_string()]);
    assert_eq!(gift.reserved_by.as_deref(), Some("Bea"));
    assert_eq!(gift.status.as_deref(), Some("reserved"));

    let response = server.delete(&format!("{path}/Bea")).await.unwrap();
    let gift: GiftJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(gift.reservations.is_empty());
    assert_eq!(gift.reserved_by, None);
    assert_eq!(gift.status.as_deref(), Some("available"));
}

#[tokio::test]
async fn test_reserving_keeps_duplicates() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    let path = format!("/api/v1/gifts/{}/reservations", ids.cuna);

    server.post(&path, &ReserveBody::new("Ana")).await.unwrap();
    let response = server.post(&path, &ReserveBody::new(" Ana ")).await.unwrap();
    let gift: GiftJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gift.reservations, vec!["Ana".to_string(), "Ana".to_string()]);
}

#[tokio::test]
async fn test_remove_reservation_trims_name() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    let path = format!("/api/v1/gifts/{}/reservations", ids.cuna);

    let response = server.post(&path, &ReserveBody::new("Ana")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&format!("{path}/Ana%20")).await.unwrap();
    let gift: GiftJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(gift.reservations.is_empty());
    assert_eq!(gift.status.as_deref(), Some("available"));
}

#[tokio::test]
async fn test_reserve_validation() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    let path = format!("/api/v1/gifts/{}/reservations", ids.cuna);

    let response = server.post(&path, &ReserveBody::new("")).await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server.post(&path, &ReserveBody::new("   ")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reserve_unknown_gift() {
    let server = TestServer::start().await.unwrap();
    let path = format!("/api/v1/gifts/{}/reservations", Uuid::new_v4());

    let response = server.post(&path, &ReserveBody::new("Ana")).await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_GIFT");
}

// ============================================================================
// Guestbook Tests
// ============================================================================

#[tokio::test]
async fn test_post_message_then_list_newest_first() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();

    let response = server
        .post("/api/v1/messages", &MessageBody::new("X", "Y"))
        .await
        .unwrap();
    let created: MessageJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.likes, 0);
    assert_eq!(created.author_name, "X");
    assert_eq!(created.content, "Y");

    let response = server.get("/api/v1/messages").await.unwrap();
    let list: MessageListJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.messages[0].id, created.id);
    assert_eq!(list.messages[1].id, ids.first_message.to_string());
    assert_eq!(list.messages[0].avatar_color, "pink");
    assert_eq!(list.messages[1].avatar_color, "purple");
}

#[tokio::test]
async fn test_message_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/messages", &MessageBody::new("X", ""))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let long = "a".repeat(2001);
    let response = server
        .post("/api/v1/messages", &MessageBody::new("X", &long))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/v1/messages", &MessageBody::new("  ", "hola"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_two_likes_add_two() {
    let (store, ids) = seeded_store();
    let server = TestServer::start_with_store(store).await.unwrap();
    let path = format!("/api/v1/messages/{}/like", ids.first_message);

    let response = server.post_empty(&path).await.unwrap();
    let message: MessageJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.likes, 1);

    let response = server.post_empty(&path).await.unwrap();
    let message: MessageJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.likes, 2);
}

#[tokio::test]
async fn test_like_unknown_message() {
    let server = TestServer::start().await.unwrap();
    let path = format!("/api/v1/messages/{}/like", Uuid::new_v4());

    let response = server.post_empty(&path).await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_MESSAGE");
    assert!(!body.error.message.is_empty());
}

// ============================================================================
// Countdown Tests
// ============================================================================

#[tokio::test]
async fn test_countdown_to_future_event() {
    let config = test_config_with_event(Utc::now() + Duration::days(3) + Duration::hours(2))
        .unwrap();
    let server = TestServer::start_with(MemoryStore::new(), config).await.unwrap();

    let response = server.get("/api/v1/countdown").await.unwrap();
    let countdown: CountdownJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(countdown.days, 3);
    assert_eq!(countdown.hours, 1);
    assert!(!countdown.finished);
}

#[tokio::test]
async fn test_countdown_after_event_is_zero() {
    let config = test_config_with_event(Utc::now() - Duration::days(1)).unwrap();
    let server = TestServer::start_with(MemoryStore::new(), config).await.unwrap();

    let response = server.get("/api/v1/countdown").await.unwrap();
    let countdown: CountdownJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
        (0, 0, 0, 0)
    );
    assert!(countdown.finished);
}
