use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{App, test, web};
use diesel::RunQueryDsl;
use serde_json::{Value, json};

use pushkind_catalog::repository::{DieselRepository, ProductReader};
use pushkind_catalog::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn category_lifecycle_matches_contract() {
    let test_db = common::TestDb::new("api_category_lifecycle_matches_contract.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "name": "Tools" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": 1, "name": "Tools" }));

    let req = test::TestRequest::get().uri("/api/categories/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "id": 1, "name": "Tools", "Products": [] }));

    let req = test::TestRequest::delete().uri("/api/categories/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get().uri("/api/categories/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Category not found" }));
}

#[actix_web::test]
async fn missing_ids_return_not_found_messages() {
    let test_db = common::TestDb::new("api_missing_ids_return_not_found_messages.db");
    let app = init_app!(test_db);

    for (resource, message) in [
        ("categories", "Category not found"),
        ("tags", "Tag not found"),
        ("products", "Product not found"),
    ] {
        let uri = format!("/api/{resource}/999");
        let requests = [
            test::TestRequest::get().uri(&uri).to_request(),
            test::TestRequest::put()
                .uri(&uri)
                .set_json(json!({ "name": "Renamed" }))
                .to_request(),
            test::TestRequest::delete().uri(&uri).to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "message": message }));
        }
    }
}

#[actix_web::test]
async fn category_and_tag_updates_answer_with_message() {
    let test_db = common::TestDb::new("api_category_and_tag_updates_answer_with_message.db");
    let app = init_app!(test_db);

    for (resource, message) in [
        ("categories", "Category updated successfully"),
        ("tags", "Tag updated successfully"),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/{resource}"))
            .set_json(json!({ "name": "old" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().expect("generated id");

        let req = test::TestRequest::put()
            .uri(&format!("/api/{resource}/{id}"))
            .set_json(json!({ "name": "new" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": message }));

        let req = test::TestRequest::get()
            .uri(&format!("/api/{resource}/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "new");
    }
}

#[actix_web::test]
async fn product_update_answers_with_entity_and_replaces_tags() {
    let test_db = common::TestDb::new("api_product_update_replaces_tags.db");
    let app = init_app!(test_db);

    for name in ["a", "b", "c"] {
        let req = test::TestRequest::post()
            .uri("/api/tags")
            .set_json(json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "name": "Lamp", "price": 29.99, "stock": 4, "tagIds": [1, 2] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(
        created,
        json!({ "id": 1, "name": "Lamp", "price": 29.99, "stock": 4, "category_id": null })
    );

    let req = test::TestRequest::put()
        .uri("/api/products/1")
        .set_json(json!({ "stock": 9, "tagIds": [3] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(
        updated,
        json!({ "id": 1, "name": "Lamp", "price": 29.99, "stock": 9, "category_id": null })
    );

    let repo = DieselRepository::new(test_db.pool());
    let tag_ids: Vec<i32> = repo
        .list_product_tags(1)
        .expect("join rows")
        .into_iter()
        .map(|row| row.tag_id)
        .collect();
    assert_eq!(tag_ids, vec![3]);

    let req = test::TestRequest::get().uri("/api/products/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["Category"], Value::Null);
    assert_eq!(body["Tags"], json!([{ "id": 3, "name": "c" }]));

    let req = test::TestRequest::put()
        .uri("/api/products/1")
        .set_json(json!({ "tagIds": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/products/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["Tags"], json!([{ "id": 3, "name": "c" }]));
}

#[actix_web::test]
async fn tag_name_can_be_cleared_with_null() {
    let test_db = common::TestDb::new("api_tag_name_can_be_cleared_with_null.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "name": "sale" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/api/tags/1")
        .set_json(json!({ "name": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/tags/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "id": 1, "name": null, "Products": [] }));
}

#[actix_web::test]
async fn deleting_product_clears_join_rows() {
    let test_db = common::TestDb::new("api_deleting_product_clears_join_rows.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "name": "gift" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "name": "Scarf", "price": 19.5, "tagIds": [1, 1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let repo = DieselRepository::new(test_db.pool());
    assert_eq!(repo.list_product_tags(1).expect("join rows").len(), 2);

    let req = test::TestRequest::delete().uri("/api/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(repo.list_product_tags(1).expect("join rows").is_empty());

    let req = test::TestRequest::get().uri("/api/tags/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "id": 1, "name": "gift", "Products": [] }));
}

#[actix_web::test]
async fn lists_attach_related_entities() {
    let test_db = common::TestDb::new("api_lists_attach_related_entities.db");
    let app = init_app!(test_db);

    let setup = [
        ("/api/categories", json!({ "name": "Shirts" })),
        ("/api/tags", json!({ "name": "white" })),
        (
            "/api/products",
            json!({
                "name": "Plain T-Shirt",
                "price": 14.99,
                "stock": 14,
                "category_id": 1,
                "tagIds": [1]
            }),
        ),
    ];
    for (uri, payload) in setup {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{uri}");
    }

    let product = json!({
        "id": 1, "name": "Plain T-Shirt", "price": 14.99, "stock": 14, "category_id": 1
    });

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Shirts", "Products": [product.clone()] }])
    );

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "white", "Products": [product] }])
    );

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["Category"], json!({ "id": 1, "name": "Shirts" }));
    assert_eq!(body[0]["Tags"], json!([{ "id": 1, "name": "white" }]));
}

#[actix_web::test]
async fn invalid_payloads_are_rejected() {
    let test_db = common::TestDb::new("api_invalid_payloads_are_rejected.db");
    let app = init_app!(test_db);

    let cases = [
        ("/api/categories", json!({}), "Invalid request body"),
        ("/api/categories", json!({ "name": "   " }), "Failed to create the category"),
        ("/api/products", json!({ "name": "Cap", "price": "cheap" }), "Invalid request body"),
        ("/api/products", json!({ "name": "Cap", "price": -1.5 }), "Failed to create the product"),
        (
            "/api/products",
            json!({ "name": "Cap", "price": 1.5, "category_id": 42 }),
            "Failed to create the product",
        ),
        (
            "/api/products",
            json!({ "name": "Cap", "price": 1.5, "tagIds": [42] }),
            "Failed to create the product",
        ),
    ];

    for (uri, payload, error) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": error }));
    }

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn unmatched_paths_fall_back_to_plain_text() {
    let test_db = common::TestDb::new("api_unmatched_paths_fall_back_to_plain_text.db");
    let app = init_app!(test_db);

    for uri in ["/api/widgets", "/api/categories/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(body, Bytes::from_static(b"Sorry can't find that!"));
}

#[actix_web::test]
async fn storage_failures_answer_with_server_errors() {
    let test_db = common::TestDb::new("api_storage_failures_answer_with_server_errors.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "name": "outdoor" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "name": "Tent", "price": 99.0, "tagIds": [1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let mut conn = test_db.pool().get().expect("pooled connection");
    diesel::sql_query("DROP TABLE product_tags")
        .execute(&mut conn)
        .expect("drop join table");
    drop(conn);

    let cases = [
        (test::TestRequest::get().uri("/api/products"), "Failed to retrieve products"),
        (test::TestRequest::get().uri("/api/products/1"), "Failed to retrieve the product"),
        (test::TestRequest::get().uri("/api/tags"), "Failed to retrieve tags"),
        (test::TestRequest::get().uri("/api/tags/1"), "Failed to retrieve the tag"),
        (test::TestRequest::delete().uri("/api/tags/1"), "Failed to delete the tag"),
        (test::TestRequest::delete().uri("/api/products/1"), "Failed to delete the product"),
    ];

    for (req, error) in cases {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{error}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": error }));
    }

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
