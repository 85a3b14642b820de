pub mod booking;
pub mod calls;
pub mod feed;
pub mod health;
pub mod home;
pub mod me;
pub mod profiles;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(home::get_home))
        // Session
        .route("/me", get(me::get_me))
        .route("/me/calls", get(calls::my_calls))
        // Directory and profile pages
        .route("/profiles", get(profiles::list_profiles))
        .route("/profiles/filters", get(profiles::filter_options))
        .route("/profiles/:profile_id", get(profiles::get_profile))
        // Booking dialog (nested under profiles)
        .route(
            "/profiles/:profile_id/booking",
            post(booking::open_booking)
                .get(booking::get_booking)
                .patch(booking::update_booking)
                .delete(booking::cancel_booking),
        )
        .route(
            "/profiles/:profile_id/booking/submit",
            post(booking::submit_booking),
        )
        // Feed
        .route("/feed", get(feed::get_feed))
        .route("/feed/:post_id/like", post(feed::toggle_like))
        .route("/feed/:post_id/comments", post(feed::toggle_comments))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use chrono::NaiveDateTime;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::app::{create_app, AppState};
    use crate::config::{Environment, LogFormat, Settings};
    use crate::services::clock::FixedClock;
    use crate::services::{BookingOutbox, InMemoryProvider};
    use crate::session::Session;

    fn test_settings() -> Settings {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            log_format: LogFormat::Pretty,
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            current_user_id: "1".to_string(),
            booking_outbox_capacity: 8,
        }
    }

    /// Full app with the seeded dataset, pinned to 2024-03-15 23:59.
    fn build_test_app() -> (Router, BookingOutbox) {
        let provider = Arc::new(InMemoryProvider::seeded().unwrap());
        let session = Session::for_user(provider.as_ref(), "1").unwrap();
        let now = NaiveDateTime::parse_from_str("2024-03-15T23:59", "%Y-%m-%dT%H:%M").unwrap();
        let outbox = BookingOutbox::new(8);

        let state = AppState::new(
            test_settings(),
            provider,
            session,
            Arc::new(FixedClock(now)),
            outbox.clone(),
        );
        (create_app(state), outbox)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    fn names(json: &Value) -> Vec<String> {
        json["data"]["profiles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_reports_dataset_size_and_request_id() {
        let (app, _) = build_test_app();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("x-request-id").is_some());

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["profiles"], 3);
    }

    #[tokio::test]
    async fn home_features_first_three_profiles() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["featured"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["browseLink"], "/influencers");
    }

    #[tokio::test]
    async fn directory_combines_category_and_price() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/profiles?category=Business%20%26%20Tech&price=%24101-200").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), vec!["Alex Chen"]);
        assert_eq!(json["data"]["profiles"][0]["hourlyRate"], 200.0);
    }

    #[tokio::test]
    async fn directory_search_preserves_order() {
        let (app, _) = build_test_app();

        let (_, all) = get(&app, "/profiles?search=&category=All&price=All").await;
        assert_eq!(names(&all), vec!["Emma Rodriguez", "Alex Chen", "Maya Patel"]);

        let (_, wellness) = get(&app, "/profiles?search=WELL").await;
        assert_eq!(names(&wellness), vec!["Emma Rodriguez"]);
    }

    #[tokio::test]
    async fn directory_empty_state_is_not_an_error() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/profiles?price=%240-50").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["empty"], true);
        assert_eq!(json["data"]["total"], 0);
    }

    #[tokio::test]
    async fn directory_rejects_unknown_price_range() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/profiles?price=cheap").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn filter_options_come_from_the_dataset() {
        let (app, _) = build_test_app();
        let (_, json) = get(&app, "/profiles/filters").await;

        assert_eq!(json["data"]["categories"][0], "All");
        assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 4);
        assert_eq!(json["data"]["priceRanges"][4], "$200+");
    }

    #[tokio::test]
    async fn profile_page_lists_present_socials_and_slots() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/profiles/inf2").await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["name"], "Alex Chen");
        assert_eq!(data["social"].as_array().unwrap().len(), 2);
        assert_eq!(data["availability"][0]["dayName"], "Tuesday");
        assert_eq!(data["backLink"], "/influencers");
    }

    #[tokio::test]
    async fn unknown_profile_degrades_to_not_found_with_link() {
        let (app, _) = build_test_app();
        let (status, json) = get(&app, "/profiles/nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "PROFILE_NOT_FOUND");
        assert_eq!(json["recoveryLink"], "/influencers");

        let (status, _) = send(&app, Method::POST, "/profiles/nobody/booking", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn booking_dialog_round_trip() {
        let (app, outbox) = build_test_app();
        let mut bookings = outbox.subscribe();

        let (status, opened) = send(&app, Method::POST, "/profiles/inf1/booking", None).await;
        assert_eq!(status, StatusCode::OK);
        let dates = opened["data"]["dates"].as_array().unwrap();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0]["date"], "2024-03-16");
        assert_eq!(dates[13]["date"], "2024-03-29");
        assert_eq!(opened["data"]["summary"]["total"], 75.0);
        assert_eq!(opened["data"]["canSubmit"], false);

        // Time without a date: accepted, but not submittable
        let (_, partial) = send(
            &app,
            Method::PATCH,
            "/profiles/inf1/booking",
            Some(json!({ "time": "10:00" })),
        )
        .await;
        assert_eq!(partial["data"]["state"], "incomplete");

        let (status, err) = send(&app, Method::POST, "/profiles/inf1/booking/submit", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["code"], "BOOKING_INCOMPLETE");
        assert_eq!(err["message"], "Please select a date and time");

        let (status, ready) = send(
            &app,
            Method::PATCH,
            "/profiles/inf1/booking",
            Some(json!({ "duration": 60, "date": "2024-03-20", "message": "Morning routines" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ready["data"]["canSubmit"], true);
        assert_eq!(ready["data"]["summary"]["total"], 150.0);
        assert_eq!(ready["data"]["summary"]["date"], "Mar 20, 2024");

        let (status, created) = send(&app, Method::POST, "/profiles/inf1/booking/submit", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            created["data"],
            json!({
                "profileId": "inf1",
                "scheduledDateTime": "2024-03-20T10:00:00",
                "duration": 60,
                "message": "Morning routines"
            })
        );
        assert_eq!(bookings.recv().await.unwrap().profile_id, "inf1");

        // Submitted dialogs are closed
        let (status, _) = get(&app, "/profiles/inf1/booking").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn booking_rejects_dates_outside_window_and_odd_durations() {
        let (app, _) = build_test_app();
        send(&app, Method::POST, "/profiles/inf3/booking", None).await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/profiles/inf3/booking",
            Some(json!({ "date": "2024-03-15" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = send(
            &app,
            Method::PATCH,
            "/profiles/inf3/booking",
            Some(json!({ "duration": 45 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "45 minutes is not a supported call duration");
    }

    #[tokio::test]
    async fn malformed_booking_updates_share_the_error_shape() {
        let (app, _) = build_test_app();
        send(&app, Method::POST, "/profiles/inf1/booking", None).await;

        for body in [
            json!({ "duration": -30 }),
            json!({ "duration": "60" }),
            json!({ "duration": 60.5 }),
            json!({ "date": "2024-02-30" }),
        ] {
            let (status, json) = send(&app, Method::PATCH, "/profiles/inf1/booking", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["code"], "BAD_REQUEST", "body: {body}");
            assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
        }

        // Nothing was applied
        let (_, view) = get(&app, "/profiles/inf1/booking").await;
        assert_eq!(view["data"]["summary"]["duration"], "30 minutes");
        assert_eq!(view["data"]["summary"]["date"], Value::Null);
    }

    #[tokio::test]
    async fn unparseable_json_body_is_a_bad_request() {
        let (app, _) = build_test_app();
        send(&app, Method::POST, "/profiles/inf1/booking", None).await;

        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/profiles/inf1/booking")
            .header("content-type", "application/json")
            .body(Body::from("{\"duration\":"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn malformed_query_string_is_a_bad_request() {
        let (app, _) = build_test_app();

        let (status, json) = get(&app, "/profiles?search=a&search=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");

        let (status, json) = get(&app, "/me/calls?tab=upcoming&tab=completed").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn cancel_closes_the_dialog() {
        let (app, _) = build_test_app();
        send(&app, Method::POST, "/profiles/inf2/booking", None).await;

        let (status, _) = send(&app, Method::DELETE, "/profiles/inf2/booking", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, "/profiles/inf2/booking", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn feed_likes_and_comments_are_viewer_local() {
        let (app, _) = build_test_app();

        let (_, feed) = get(&app, "/feed").await;
        let first = &feed["data"][0];
        assert_eq!(first["likes"], 1250);
        assert_eq!(first["commentCount"], 1);
        assert!(first["comments"].as_array().unwrap().is_empty());

        let (_, liked) = send(&app, Method::POST, "/feed/post1/like", None).await;
        assert_eq!(liked["data"]["liked"], true);
        assert_eq!(liked["data"]["likes"], 1251);

        send(&app, Method::POST, "/feed/post3/comments", None).await;
        let (_, feed) = get(&app, "/feed").await;
        assert_eq!(feed["data"][0]["likes"], 1251);
        let thread = feed["data"][2]["comments"].as_array().unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[1]["authorName"], "Sarah Wilson");

        let (_, unliked) = send(&app, Method::POST, "/feed/post1/like", None).await;
        assert_eq!(unliked["data"]["likes"], 1250);

        let (status, _) = send(&app, Method::POST, "/feed/post9/like", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn my_calls_only_shows_the_session_user() {
        let (app, _) = build_test_app();

        let (status, json) = get(&app, "/me/calls").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["tab"], "upcoming");
        assert_eq!(json["data"]["counts"]["upcoming"], 1);
        assert_eq!(json["data"]["counts"]["completed"], 0);
        assert_eq!(json["data"]["calls"][0]["id"], "call1");
        assert_eq!(json["data"]["calls"][0]["profile"]["name"], "Emma Rodriguez");
        assert_eq!(
            json["data"]["calls"][0]["actions"],
            json!(["join", "reschedule", "cancel"])
        );

        let (_, completed) = get(&app, "/me/calls?tab=completed").await;
        assert_eq!(completed["data"]["empty"], true);

        let (status, _) = get(&app, "/me/calls?tab=archived").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn me_returns_session_user() {
        let (app, _) = build_test_app();
        let (_, json) = get(&app, "/me").await;

        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["role"], "user");
        assert_eq!(json["callsLink"], "/my-calls");
    }
}
