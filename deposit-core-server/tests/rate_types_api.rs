mod common;

use axum::http::StatusCode;
use common::{app, assert_money, at};
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_rate_type() {
    let app = app(at(2024, 1, 1));

    let created = app
        .post_json(
            "/type-comptes-depots",
            json!({ "nom": "  1Y Term  ", "tauxInteret": 0.05 }),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.body["nom"], "1Y Term");
    assert_money(&created.body["tauxInteret"], 0.05);
    assert_eq!(
        created.headers["location"],
        format!("/type-comptes-depots/{id}").as_str()
    );

    let fetched = app.get(&format!("/type-comptes-depots/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let app = app(at(2024, 1, 1));
    let first = app.create_one_year_term().await;
    let second = app
        .post_json(
            "/type-comptes-depots",
            json!({ "nom": "2Y Term", "tauxInteret": 0.07 }),
        )
        .await
        .body["id"]
        .as_i64()
        .unwrap();

    let listed = app.get("/type-comptes-depots").await;

    assert_eq!(listed.status, StatusCode::OK);
    let ids: Vec<i64> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_unknown_rate_type_is_not_found() {
    let app = app(at(2024, 1, 1));

    let response = app.get("/type-comptes-depots/404").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Type de compte avec l'ID 404 introuvable");
    assert_eq!(response.body["status"], 404);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(response.body["path"], "/type-comptes-depots/404");
    assert!(response.body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_out_of_range_rate_is_rejected() {
    let app = app(at(2024, 1, 1));

    for rate in [json!(0), json!(-0.01), json!(1.5)] {
        let response = app
            .post_json(
                "/type-comptes-depots",
                json!({ "nom": "Bad", "tauxInteret": rate }),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "rate {rate}");
        assert_eq!(response.body["message"], "Données invalides");
        assert_eq!(response.body["error"], "Bad Request");
    }
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let app = app(at(2024, 1, 1));

    let response = app
        .post_json(
            "/type-comptes-depots",
            json!({ "nom": "   ", "tauxInteret": 0.05 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Le nom ne peut pas être vide");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = app(at(2024, 1, 1));

    let response = app
        .send_json("POST", "/type-comptes-depots", "{\"nom\": ")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Données invalides");
    assert_eq!(response.body["path"], "/type-comptes-depots");
}

#[tokio::test]
async fn test_update_replaces_values() {
    let app = app(at(2024, 1, 1));
    let id = app.create_one_year_term().await;

    let updated = app
        .put_json(
            &format!("/type-comptes-depots/{id}"),
            json!({ "nom": "1Y Promo", "tauxInteret": 0.06 }),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], id);
    assert_eq!(updated.body["nom"], "1Y Promo");
    assert_money(&updated.body["tauxInteret"], 0.06);
}

#[tokio::test]
async fn test_update_unknown_rate_type_is_not_found() {
    let app = app(at(2024, 1, 1));

    let response = app
        .put_json(
            "/type-comptes-depots/9",
            json!({ "nom": "Ghost", "tauxInteret": 0.06 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_cascades_to_accounts() {
    let app = app(at(2024, 1, 1));
    let id = app.create_one_year_term().await;
    let account = app
        .post_json(
            "/comptes-depots",
            json!({
                "typeCompteDepotId": id,
                "userId": common::KNOWN_USER,
                "dateEcheance": "2025-01-01T00:00:00",
                "montant": 1000
            }),
        )
        .await;
    assert_eq!(account.status, StatusCode::CREATED);

    let deleted = app.delete(&format!("/type-comptes-depots/{id}")).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_null());

    assert_eq!(app.store.account_count(), 0);
    assert_eq!(
        app.get(&format!("/type-comptes-depots/{id}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.delete(&format!("/type-comptes-depots/{id}")).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = app(at(2024, 1, 1));

    let response = app.get("/type-comptes-depots/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Données invalides");
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let app = app(at(2024, 1, 1));
    app.store.fail();

    let response = app.get("/type-comptes-depots").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Erreur interne du serveur");
    assert_eq!(response.body["error"], "Internal Server Error");
}

#[tokio::test]
async fn test_name_length_is_checked_after_trimming() {
    let app = app(at(2024, 1, 1));
    let name = "n".repeat(255);

    let padded = app
        .post_json(
            "/type-comptes-depots",
            json!({ "nom": format!("   {name}   "), "tauxInteret": 0.05 }),
        )
        .await;
    assert_eq!(padded.status, StatusCode::CREATED);
    assert_eq!(padded.body["nom"], name.as_str());

    let too_long = app
        .post_json(
            "/type-comptes-depots",
            json!({ "nom": format!("{name}n"), "tauxInteret": 0.05 }),
        )
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        too_long.body["message"],
        "Le nom ne peut pas dépasser 255 caractères"
    );
}
