//! Endpoint behavior for /api/UCSBOrganization, the one string-keyed family.

mod common;

use axum::http::StatusCode;
use common::*;
use ucsb_api_rust::database::models::UcsbOrganization;

fn skydiving_club() -> UcsbOrganization {
    UcsbOrganization {
        org_code: "SKY".to_string(),
        org_translation_short: "SKYDIVING CLUB".to_string(),
        org_translation: "SKYDIVING CLUB AT UCSB".to_string(),
        inactive: false,
    }
}

fn zeta_phi_rho() -> UcsbOrganization {
    UcsbOrganization {
        org_code: "ZPR".to_string(),
        org_translation_short: "ZETA PHI RHO".to_string(),
        org_translation: "ZETA PHI RHO".to_string(),
        inactive: false,
    }
}

#[tokio::test]
async fn user_can_list_all_organizations() {
    let (app, stores) = test_app();
    stores.organizations.seed(zeta_phi_rho());
    stores.organizations.seed(skydiving_club());

    let response = send(&app, get("/api/UCSBOrganization/all", Some(&user_auth_header()))).await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body, serde_json::to_value(stores.organizations.rows()).unwrap());
    assert_eq!(stores.organizations.find_all_calls(), 1);
}

#[tokio::test]
async fn user_can_get_organization_by_code() {
    let (app, stores) = test_app();
    stores.organizations.seed(skydiving_club());

    let response = send(
        &app,
        get("/api/UCSBOrganization?orgCode=SKY", Some(&user_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body, serde_json::to_value(skydiving_club()).unwrap());
}

#[tokio::test]
async fn get_missing_organization_returns_404_with_code_verbatim() {
    let (app, _stores) = test_app();

    let response = send(
        &app,
        get("/api/UCSBOrganization?orgCode=smash-bros", Some(&user_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("UCSBOrganization", "smash-bros"));
}

#[tokio::test]
async fn admin_can_post_a_new_organization() {
    let (app, stores) = test_app();

    let uri = "/api/UCSBOrganization/post?orgCode=TASA&orgTranslationShort=TASA&orgTranslation=TASA%20Club&inactive=true";
    let response = send(&app, post(uri, Some(&admin_auth_header()))).await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(stores.organizations.save_calls(), 1);
    let rows = stores.organizations.rows();
    assert_eq!(
        rows,
        vec![UcsbOrganization {
            org_code: "TASA".to_string(),
            org_translation_short: "TASA".to_string(),
            org_translation: "TASA Club".to_string(),
            inactive: true,
        }]
    );
    assert_eq!(body, serde_json::to_value(&rows[0]).unwrap());
}

#[tokio::test]
async fn admin_can_update_an_organization() {
    let (app, stores) = test_app();
    stores.organizations.seed(skydiving_club());

    // The body carries a different orgCode; the looked-up key must win
    let incoming = serde_json::json!({
        "orgCode": "HIJACKED",
        "orgTranslationShort": "SKYDIVING",
        "orgTranslation": "SKYDIVING CLUB AT UCSB, ISLA VISTA",
        "inactive": true,
    });

    let response = send(
        &app,
        put_json(
            "/api/UCSBOrganization?orgCode=SKY",
            Some(&admin_auth_header()),
            &incoming,
        ),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(stores.organizations.find_by_id_calls(), 1);
    assert_eq!(stores.organizations.save_calls(), 1);

    let rows = stores.organizations.rows();
    assert_eq!(
        rows,
        vec![UcsbOrganization {
            org_code: "SKY".to_string(),
            org_translation_short: "SKYDIVING".to_string(),
            org_translation: "SKYDIVING CLUB AT UCSB, ISLA VISTA".to_string(),
            inactive: true,
        }]
    );
    assert_eq!(body, serde_json::to_value(&rows[0]).unwrap());
}

#[tokio::test]
async fn update_missing_organization_returns_404_without_saving() {
    let (app, stores) = test_app();

    let incoming = serde_json::to_value(skydiving_club()).unwrap();
    let response = send(
        &app,
        put_json(
            "/api/UCSBOrganization?orgCode=USA",
            Some(&admin_auth_header()),
            &incoming,
        ),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("UCSBOrganization", "USA"));
    assert_eq!(stores.organizations.save_calls(), 0);
}

#[tokio::test]
async fn admin_can_delete_an_organization() {
    let (app, stores) = test_app();
    stores.organizations.seed(zeta_phi_rho());

    let response = send(
        &app,
        delete("/api/UCSBOrganization?orgCode=ZPR", Some(&admin_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    // Message still says "with id" even though the key is an org code
    assert_eq!(
        body,
        serde_json::json!({"message": "UCSBOrganization with id ZPR deleted"})
    );
    assert_eq!(stores.organizations.find_by_id_calls(), 1);
    assert_eq!(stores.organizations.delete_calls(), 1);
    assert!(stores.organizations.is_empty());
}

#[tokio::test]
async fn delete_missing_organization_returns_404_without_deleting() {
    let (app, stores) = test_app();

    let response = send(
        &app,
        delete("/api/UCSBOrganization?orgCode=pickleball", Some(&admin_auth_header())),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(body, not_found_body("UCSBOrganization", "pickleball"));
    assert_eq!(stores.organizations.delete_calls(), 0);
}
