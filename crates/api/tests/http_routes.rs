//! End-to-end route tests driven through the router with `oneshot`.

mod support;

use axum::http::StatusCode;
use support::{send, test_app};

const MICHAEL: &str = "michael@mergington.edu";
const DANIEL: &str = "daniel@mergington.edu";

#[tokio::test(flavor = "multi_thread")]
async fn root_redirects_to_activities() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, _) = send(&app, "GET", "/").await;

    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_seeded_catalog() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) = send(&app, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let catalog = body.as_object().expect("catalog is an object");
    assert_eq!(catalog.len(), 9);
    assert_eq!(body["Chess Club"]["max_participants"], 12);
    assert_eq!(body["Chess Club"]["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(body["Chess Club"]["participants"], serde_json::json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_then_list_shows_participant() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) =
        send(&app, "POST", &format!("/activities/Chess%20Club/signup?email={MICHAEL}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Signed up {MICHAEL} for Chess Club"));

    let (_, catalog) = send(&app, "GET", "/activities").await;
    assert_eq!(catalog["Chess Club"]["participants"], serde_json::json!([MICHAEL]));
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_for_unknown_activity_is_404() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) =
        send(&app, "POST", &format!("/activities/Underwater%20Basket/signup?email={MICHAEL}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_signup_is_400() {
    let (app, _ctx, _dir) = test_app().await;
    let uri = format!("/activities/Math%20Club/signup?email={MICHAEL}");
    send(&app, "POST", &uri).await;

    let (status, body) = send(&app, "POST", &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_for_full_activity_is_400() {
    let (app, ctx, _dir) = test_app().await;
    for i in 0..10 {
        ctx.signup.signup("Math Club", &format!("student{i}@mergington.edu")).await.unwrap();
    }

    let (status, body) =
        send(&app, "POST", &format!("/activities/Math%20Club/signup?email={DANIEL}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_without_email_is_400() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, _) = send(&app, "POST", "/activities/Chess%20Club/signup").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn unregister_removes_participant() {
    let (app, _ctx, _dir) = test_app().await;
    send(&app, "POST", &format!("/activities/Art%20Club/signup?email={DANIEL}")).await;

    let (status, body) =
        send(&app, "DELETE", &format!("/activities/Art%20Club/unregister?email={DANIEL}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Unregistered {DANIEL} from Art Club"));
    let (_, catalog) = send(&app, "GET", "/activities").await;
    assert_eq!(catalog["Art Club"]["participants"], serde_json::json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn unregister_unknown_participant_is_400() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) =
        send(&app, "DELETE", &format!("/activities/Art%20Club/unregister?email={DANIEL}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is not signed up for this activity");
}

#[tokio::test(flavor = "multi_thread")]
async fn unregister_from_unknown_activity_is_404() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) =
        send(&app, "DELETE", &format!("/activities/Robotics/unregister?email={DANIEL}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_database_component() {
    let (app, _ctx, _dir) = test_app().await;

    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_healthy"], true);
    assert_eq!(body["components"][0]["name"], "database");
}
