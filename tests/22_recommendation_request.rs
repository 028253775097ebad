//! Endpoint behavior for /api/RecommendationRequest.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDateTime;
use common::*;
use ucsb_api_rust::database::models::RecommendationRequest;

fn date(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn sample_request(id: i64) -> RecommendationRequest {
    RecommendationRequest {
        id,
        requester_email: "cgaucho@ucsb.edu".to_string(),
        professor_email: "phtcon@ucsb.edu".to_string(),
        explanation: "BS/MS program".to_string(),
        date_requested: date("2022-01-03T00:00:00"),
        date_needed: date("2022-01-05T11:59:59"),
        done: false,
    }
}

#[tokio::test]
async fn user_can_list_all_requests() {
    let (app, stores) = test_app();
    stores.recommendation_requests.seed(sample_request(1));
    stores.recommendation_requests.seed(RecommendationRequest {
        explanation: "PhD program".to_string(),
        done: true,
        ..sample_request(2)
    });

    let response = send(
        &app,
        get("/api/RecommendationRequest/all", Some(&user_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(
        body,
        serde_json::to_value(stores.recommendation_requests.rows()).unwrap()
    );
    assert_eq!(stores.recommendation_requests.find_all_calls(), 1);
}

#[tokio::test]
async fn user_can_get_request_by_id() {
    let (app, stores) = test_app();
    let request = sample_request(7);
    stores.recommendation_requests.seed(request.clone());

    let response = send(
        &app,
        get("/api/RecommendationRequest?id=7", Some(&user_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body, serde_json::to_value(&request).unwrap());
}

#[tokio::test]
async fn get_missing_request_returns_404() {
    let (app, _stores) = test_app();

    let response = send(
        &app,
        get("/api/RecommendationRequest?id=29", Some(&user_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("RecommendationRequest", 29));
}

#[tokio::test]
async fn admin_can_post_a_new_request() {
    let (app, stores) = test_app();

    let uri = "/api/RecommendationRequest/post?requesterEmail=cgaucho@ucsb.edu&professorEmail=phtcon@ucsb.edu&explanation=BS/MS%20program&dateRequested=2022-02-04T01:01:01&dateNeeded=2022-03-05T11:59:59&done=true";
    let response = send(&app, post(uri, Some(&admin_auth_header()))).await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(stores.recommendation_requests.save_calls(), 1);
    let rows = stores.recommendation_requests.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].requester_email, "cgaucho@ucsb.edu");
    assert_eq!(rows[0].professor_email, "phtcon@ucsb.edu");
    assert_eq!(rows[0].explanation, "BS/MS program");
    assert_eq!(rows[0].date_requested, date("2022-02-04T01:01:01"));
    assert_eq!(rows[0].date_needed, date("2022-03-05T11:59:59"));
    assert!(rows[0].done);
    assert_eq!(body, serde_json::to_value(&rows[0]).unwrap());
}

#[tokio::test]
async fn date_needed_before_date_requested_is_accepted() {
    // Ordering of the two dates is intentionally unconstrained
    let (app, stores) = test_app();

    let uri = "/api/RecommendationRequest/post?requesterEmail=cgaucho@ucsb.edu&professorEmail=phtcon@ucsb.edu&explanation=late&dateRequested=2022-03-05T00:00:00&dateNeeded=2022-01-01T00:00:00&done=false";
    let response = send(&app, post(uri, Some(&admin_auth_header()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stores.recommendation_requests.save_calls(), 1);
}

#[tokio::test]
async fn admin_can_update_a_request() {
    let (app, stores) = test_app();
    stores.recommendation_requests.seed(sample_request(67));

    let incoming = serde_json::json!({
        "id": 67,
        "requesterEmail": "ldelplaya@ucsb.edu",
        "professorEmail": "richert@ucsb.edu",
        "explanation": "grad school",
        "dateRequested": "2022-02-04T01:01:01",
        "dateNeeded": "2022-02-05T11:59:59",
        "done": true,
    });

    let response = send(
        &app,
        put_json(
            "/api/RecommendationRequest?id=67",
            Some(&admin_auth_header()),
            &incoming,
        ),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(stores.recommendation_requests.find_by_id_calls(), 1);
    assert_eq!(stores.recommendation_requests.save_calls(), 1);

    let rows = stores.recommendation_requests.rows();
    assert_eq!(
        rows[0],
        RecommendationRequest {
            id: 67,
            requester_email: "ldelplaya@ucsb.edu".to_string(),
            professor_email: "richert@ucsb.edu".to_string(),
            explanation: "grad school".to_string(),
            date_requested: date("2022-02-04T01:01:01"),
            date_needed: date("2022-02-05T11:59:59"),
            done: true,
        }
    );
    // Response mirrors the request body field for field
    assert_eq!(body, serde_json::to_value(&rows[0]).unwrap());
}

#[tokio::test]
async fn update_missing_request_returns_404_without_saving() {
    let (app, stores) = test_app();

    let incoming = serde_json::to_value(sample_request(67)).unwrap();
    let response = send(
        &app,
        put_json(
            "/api/RecommendationRequest?id=67",
            Some(&admin_auth_header()),
            &incoming,
        ),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("RecommendationRequest", 67));
    assert_eq!(stores.recommendation_requests.save_calls(), 0);
}

#[tokio::test]
async fn admin_can_delete_a_request() {
    let (app, stores) = test_app();
    stores.recommendation_requests.seed(sample_request(15));

    let response = send(
        &app,
        delete("/api/RecommendationRequest?id=15", Some(&admin_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(
        body,
        serde_json::json!({"message": "RecommendationRequest with id 15 deleted"})
    );
    assert_eq!(stores.recommendation_requests.delete_calls(), 1);
    assert!(stores.recommendation_requests.is_empty());
}

#[tokio::test]
async fn delete_missing_request_returns_404_without_deleting() {
    let (app, stores) = test_app();

    let response = send(
        &app,
        delete("/api/RecommendationRequest?id=15", Some(&admin_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("RecommendationRequest", 15));
    assert_eq!(stores.recommendation_requests.delete_calls(), 0);
}
