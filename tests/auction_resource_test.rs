mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{build_app, header, id_of, memory_storage, seed_auction, seed_offer};

const ALERT: &str = "X-auctionApp-alert";
const ERROR: &str = "X-auctionApp-error";
const PARAMS: &str = "X-auctionApp-params";

#[actix_web::test]
async fn create_auction_returns_created_with_location() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auctions")
        .set_json(json!({ "auctionDescription": "Vintage guitar" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = header(&resp, "Location").unwrap();
    let alert = header(&resp, ALERT).unwrap();
    let params = header(&resp, PARAMS).unwrap();

    let body: Value = test::read_body_json(resp).await;
    let id = id_of(&body);
    assert_eq!(body["auctionDescription"], "Vintage guitar");
    assert_eq!(body["auctionNames"], json!([]));
    assert_eq!(location, format!("/api/auctions/{id}"));
    assert_eq!(alert, format!("A new auction is created with identifier {id}"));
    assert_eq!(params, id.to_string());
}

#[actix_web::test]
async fn create_auction_grows_list_by_one() {
    let storage = memory_storage().await;
    seed_auction(&storage, "existing").await;
    let app = test::init_service(build_app(storage.clone())).await;

    let before: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/auctions").to_request(),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auctions")
        .set_json(json!({ "auctionDescription": "Pocket watch" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let after: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/auctions").to_request(),
    )
    .await;

    let before = before.as_array().unwrap();
    let after = after.as_array().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap()["auctionDescription"], "Pocket watch");
}

#[actix_web::test]
async fn create_auction_with_id_is_rejected() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auctions")
        .set_json(json!({ "id": 1, "auctionDescription": "Lamp" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        header(&resp, ERROR).as_deref(),
        Some("A new auction cannot already have an ID")
    );
    assert_eq!(header(&resp, PARAMS).as_deref(), Some("auction"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorKey"], "idexists");
    assert_eq!(body["entityName"], "auction");
    assert!(storage.list_auctions().await.unwrap().is_empty());
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::post()
        .uri("/api/auctions")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"auctionDescription\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn get_auction_includes_offers() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Painting").await;
    let offer_id = seed_offer(&storage, 120.5, Some(id)).await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/auctions/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["auctionDescription"], "Painting");
    let offers = body["auctionNames"].as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["id"], offer_id);
    assert_eq!(offers[0]["offerValue"], 120.5);
    assert_eq!(offers[0]["offerName"]["id"], id);
}

#[actix_web::test]
async fn get_missing_auction_is_not_found() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::get()
        .uri("/api/auctions/9999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn non_numeric_path_id_is_bad_request() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::get()
        .uri("/api/auctions/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_auction_overwrites_all_fields() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Old description").await;
    let app = test::init_service(build_app(storage.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/auctions/{id}"))
        .set_json(json!({ "id": id, "auctionDescription": "New description" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        header(&resp, ALERT),
        Some(format!("A auction is updated with identifier {id}"))
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["auctionDescription"], "New description");

    // 缺省字段整体覆盖为空
    let req = test::TestRequest::put()
        .uri(&format!("/api/auctions/{id}"))
        .set_json(json!({ "id": id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = storage.get_auction_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.description, None);
}

#[actix_web::test]
async fn update_auction_rejects_bad_ids() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Clock").await;
    let app = test::init_service(build_app(storage.clone())).await;

    let cases = [
        (id, json!({ "auctionDescription": "x" }), "idnull"),
        (id, json!({ "id": id + 1, "auctionDescription": "x" }), "idinvalid"),
        (id + 50, json!({ "id": id + 50, "auctionDescription": "x" }), "idnotfound"),
    ];

    for (path_id, payload, key) in cases {
        let req = test::TestRequest::put()
            .uri(&format!("/api/auctions/{path_id}"))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "case {key}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errorKey"], key);
    }

    let stored = storage.get_auction_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("Clock"));
}

#[actix_web::test]
async fn update_on_collection_path_is_method_not_allowed() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::put()
        .uri("/api/auctions")
        .set_json(json!({ "id": 1 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::METHOD_NOT_ALLOWED
    );

    let req = test::TestRequest::patch()
        .uri("/api/auctions")
        .set_json(json!({ "id": 1 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[actix_web::test]
async fn partial_update_keeps_omitted_fields() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Keep me").await;
    let app = test::init_service(build_app(storage.clone())).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/auctions/{id}"))
        .insert_header(("Content-Type", "application/merge-patch+json"))
        .set_payload(json!({ "id": id }).to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["auctionDescription"], "Keep me");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/auctions/{id}"))
        .insert_header(("Content-Type", "application/merge-patch+json"))
        .set_payload(json!({ "id": id, "auctionDescription": "Changed" }).to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = storage.get_auction_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("Changed"));
}

#[actix_web::test]
async fn partial_update_rejects_missing_record() {
    let storage = memory_storage().await;
    let app = test::init_service(build_app(storage)).await;

    let req = test::TestRequest::patch()
        .uri("/api/auctions/7")
        .set_json(json!({ "id": 7, "auctionDescription": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorKey"], "idnotfound");
}

#[actix_web::test]
async fn delete_auction_always_succeeds() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Short lived").await;
    let app = test::init_service(build_app(storage.clone())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/auctions/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        header(&resp, ALERT),
        Some(format!("A auction is deleted with identifier {id}"))
    );
    assert!(!storage.auction_exists(id).await.unwrap());

    // 不存在的记录同样返回 204
    let req = test::TestRequest::delete()
        .uri(&format!("/api/auctions/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn partial_update_rejects_other_json_media_types() {
    let storage = memory_storage().await;
    let id = seed_auction(&storage, "Untouched").await;
    let app = test::init_service(build_app(storage.clone())).await;

    for content_type in ["application/vnd.api+json", "text/plain"] {
        let req = test::TestRequest::patch()
            .uri(&format!("/api/auctions/{id}"))
            .insert_header(("Content-Type", content_type))
            .set_payload(json!({ "id": id, "auctionDescription": "Changed" }).to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "content type {content_type}"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1415);
    }

    let stored = storage.get_auction_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("Untouched"));
}
