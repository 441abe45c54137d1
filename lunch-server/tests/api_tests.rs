use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use lunch_server::api::build_app;
use lunch_server::{AppState, Config, DatabaseTarget, seed};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    app: Router,
    state: AppState,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

async fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lunch_test.db");
    let config = Config::with_database(DatabaseTarget::sqlite_file(path.to_str().unwrap()));
    let state = AppState::new(&config).await.unwrap();
    let app = build_app(state.clone(), &config);
    TestApp {
        app,
        state,
        _dir: dir,
    }
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_restaurant(&self, name: &str, address: &str) -> i64 {
        let (status, body) = self
            .send(
                "POST",
                "/api/restaurants/",
                Some(json!({
                    "Name": name,
                    "Address": address,
                    "Latitude": 37.5,
                    "Longitude": 127.0,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["ID"].as_i64().unwrap()
    }

    async fn create_visit(&self, restaurant_id: i64, visit_date: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/visits/",
                Some(json!({ "RestaurantID": restaurant_id, "VisitDate": visit_date })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }
}

// ==================== Health ====================

#[tokio::test]
async fn test_health() {
    let app = setup().await;
    let (status, body) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "lunch-app-backend");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = setup().await;
    let (status, body) = app.send("GET", "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}

// ==================== Restaurants ====================

#[tokio::test]
async fn test_create_restaurant_applies_defaults() {
    let app = setup().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/restaurants/",
            Some(json!({
                "Name": "테스트 맛집",
                "Address": "서울시 마포구",
                "Latitude": 37.55,
                "Longitude": 126.92,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Name"], "테스트 맛집");
    assert_eq!(body["Address"], "서울시 마포구");
    assert_eq!(body["Category"], "음식점");
    assert_eq!(body["Phone"], "전화번호 없음");
    assert_eq!(body["Latitude"], 37.55);

    let id = body["ID"].as_i64().unwrap();
    let (status, fetched) = app.send("GET", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["Name"], "테스트 맛집");
    assert_eq!(fetched["Category"], "음식점");
}

#[tokio::test]
async fn test_create_restaurant_keeps_given_category_and_phone() {
    let app = setup().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/restaurants",
            Some(json!({
                "Name": "면옥",
                "Address": "서울시 중구",
                "Phone": "02-111-2222",
                "Category": "냉면",
                "Latitude": 37.56,
                "Longitude": 126.99,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Category"], "냉면");
    assert_eq!(body["Phone"], "02-111-2222");
}

#[tokio::test]
async fn test_create_restaurant_validation_messages() {
    let app = setup().await;
    let cases = [
        (
            json!({ "Address": "서울시", "Latitude": 1.0, "Longitude": 1.0 }),
            "맛집 이름은 필수입니다",
        ),
        (
            json!({ "Name": "A", "Address": "  ", "Latitude": 1.0, "Longitude": 1.0 }),
            "맛집 주소는 필수입니다",
        ),
        (
            json!({ "Name": "A", "Address": "B" }),
            "맛집 위치 정보는 필수입니다",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = app.send("POST", "/api/restaurants/", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], message);
    }

    let (_, list) = app.send("GET", "/api/restaurants/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_restaurant_conflicts() {
    let app = setup().await;
    app.create_restaurant("고향집", "서울시 강남구").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/restaurants/",
            Some(json!({
                "Name": "고향집",
                "Address": "서울시 강남구",
                "Latitude": 37.5,
                "Longitude": 127.0,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "이미 등록된 맛집입니다");

    // Same name at another address is a different restaurant
    app.create_restaurant("고향집", "서울시 서초구").await;
}

#[tokio::test]
async fn test_recreate_after_delete_is_allowed() {
    let app = setup().await;
    let id = app.create_restaurant("차이나오", "서울시 서초구").await;
    let (status, _) = app.send("DELETE", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let new_id = app.create_restaurant("차이나오", "서울시 서초구").await;
    assert_ne!(id, new_id);
}

#[tokio::test]
async fn test_get_missing_restaurant() {
    let app = setup().await;
    let (status, body) = app.send("GET", "/api/restaurants/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");
}

#[tokio::test]
async fn test_delete_restaurant_hides_it() {
    let app = setup().await;
    let id = app.create_restaurant("스시하나", "서울시 종로구").await;

    let (status, body) = app.send("DELETE", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Restaurant deleted successfully");

    let (status, _) = app.send("GET", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.send("GET", "/api/restaurants/", None).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, body) = app.send("DELETE", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = setup().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/restaurants/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"Name\": "))
        .unwrap();
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = setup().await;
    let (status, _) = app.send("GET", "/api/restaurants/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ==================== Visits ====================

#[tokio::test]
async fn test_create_visit_projects_in_seoul_time() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;

    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    assert_eq!(view["RestaurantID"], rid);
    assert_eq!(view["restaurantName"], "고향집");
    assert_eq!(view["restaurantAddress"], "서울시 강남구");
    assert_eq!(view["date"], "2024-01-01");
    assert_eq!(view["time"], "19:00");
    assert_eq!(view["isDeleted"], false);

    let (status, list) = app.send("GET", "/api/visits/", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["ID"], view["ID"]);
    assert_eq!(list[0]["date"], "2024-01-01");
    assert_eq!(list[0]["time"], "19:00");
}

#[tokio::test]
async fn test_visit_date_crossing_midnight_in_seoul() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;
    let view = app.create_visit(rid, "2024-01-31T16:30:00Z").await;
    assert_eq!(view["date"], "2024-02-01");
    assert_eq!(view["time"], "01:30");
}

#[tokio::test]
async fn test_create_visit_for_missing_restaurant() {
    let app = setup().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/visits/",
            Some(json!({ "RestaurantID": 4242, "VisitDate": "2024-01-01T10:00:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");

    let (_, list) = app.send("GET", "/api/visits/", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_visit_for_deleted_restaurant() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;
    app.send("DELETE", &format!("/api/restaurants/{rid}"), None).await;

    let (status, body) = app
        .send(
            "POST",
            "/api/visits",
            Some(json!({ "RestaurantID": rid, "VisitDate": "2024-01-01T10:00:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");
}

#[tokio::test]
async fn test_create_visit_validation() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;

    let cases = [
        (
            json!({ "VisitDate": "2024-01-01T10:00:00Z" }),
            "RestaurantID is required",
        ),
        (json!({ "RestaurantID": rid }), "VisitDate is required"),
        (
            json!({ "RestaurantID": rid, "VisitDate": "next tuesday" }),
            "VisitDate must be an RFC 3339 timestamp",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = app.send("POST", "/api/visits/", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn test_list_visits_most_recent_first() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;

    app.create_visit(rid, "2024-01-10T03:00:00Z").await;
    app.create_visit(rid, "2024-03-05T03:00:00Z").await;
    app.create_visit(rid, "2024-02-20T03:00:00Z").await;

    let (_, list) = app.send("GET", "/api/visits", None).await;
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-02-20", "2024-01-10"]);
}

#[tokio::test]
async fn test_visits_with_same_date_keep_id_order() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;

    let first = app.create_visit(rid, "2024-04-01T03:00:00Z").await;
    let second = app.create_visit(rid, "2024-04-01T03:00:00Z").await;
    app.create_visit(rid, "2024-03-01T03:00:00Z").await;

    let (_, list) = app.send("GET", "/api/visits/", None).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["ID"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], first["ID"].as_i64().unwrap());
    assert_eq!(ids[1], second["ID"].as_i64().unwrap());
}

#[tokio::test]
async fn test_update_visit_of_deleted_restaurant_shows_placeholders() {
    let app = setup().await;
    let rid = app.create_restaurant("스시하나", "서울시 종로구").await;
    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    let id = view["ID"].as_i64().unwrap();

    let (status, _) = app.send("DELETE", &format!("/api/restaurants/{rid}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/visits/{id}"),
            Some(json!({ "VisitDate": "2024-02-02T03:00:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isDeleted"], true);
    assert_eq!(body["RestaurantID"], rid);
    assert_eq!(body["restaurantName"], "삭제된 맛집");
    assert_eq!(body["restaurantAddress"], "주소 정보 없음");
    assert_eq!(body["date"], "2024-02-02");
    assert_eq!(body["time"], "12:00");
    assert_eq!(body["message"], "Visit record updated successfully");
}

#[tokio::test]
async fn test_deleted_restaurant_visits_show_placeholders() {
    let app = setup().await;

    let (status, restaurant) = app
        .send(
            "POST",
            "/api/restaurants/",
            Some(json!({ "Name": "A", "Address": "B", "Latitude": 1.0, "Longitude": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let rid = restaurant["ID"].as_i64().unwrap();

    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    assert_eq!(view["date"], "2024-01-01");
    assert_eq!(view["isDeleted"], false);

    let (status, _) = app.send("DELETE", &format!("/api/restaurants/{rid}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = app.send("GET", "/api/visits/", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["isDeleted"], true);
    assert_eq!(list[0]["RestaurantID"], rid);
    assert_eq!(list[0]["restaurantName"], "삭제된 맛집");
    assert_eq!(list[0]["restaurantAddress"], "주소 정보 없음");
    assert_eq!(list[0]["date"], "2024-01-01");
}

#[tokio::test]
async fn test_update_visit() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;
    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    let id = view["ID"].as_i64().unwrap();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/visits/{id}"),
            Some(json!({ "VisitDate": "2024-05-05T12:15:00+09:00" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID"], id);
    assert_eq!(body["date"], "2024-05-05");
    assert_eq!(body["time"], "12:15");
    assert_eq!(body["restaurantName"], "고향집");
    assert_eq!(body["isDeleted"], false);
    assert_eq!(body["message"], "Visit record updated successfully");
}

#[tokio::test]
async fn test_update_visit_errors() {
    let app = setup().await;

    let (status, body) = app
        .send(
            "PUT",
            "/api/visits/777",
            Some(json!({ "VisitDate": "2024-05-05T12:15:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Visit record not found");

    let rid = app.create_restaurant("고향집", "서울시 강남구").await;
    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    let id = view["ID"].as_i64().unwrap();
    let (status, body) = app
        .send("PUT", &format!("/api/visits/{id}"), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VisitDate is required");
}

#[tokio::test]
async fn test_delete_visit_is_idempotent() {
    let app = setup().await;
    let rid = app.create_restaurant("고향집", "서울시 강남구").await;
    let view = app.create_visit(rid, "2024-01-01T10:00:00Z").await;
    let id = view["ID"].as_i64().unwrap();

    for _ in 0..2 {
        let (status, body) = app.send("DELETE", &format!("/api/visits/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Visit record deleted successfully");
    }

    let (status, _) = app.send("DELETE", "/api/visits/31337", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.send("GET", "/api/visits/", None).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/visits/{id}"),
            Some(json!({ "VisitDate": "2024-05-05T12:15:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== Seeding and wiring ====================

#[tokio::test]
async fn test_seed_only_fills_empty_store() {
    let app = setup().await;
    let inserted = seed::insert_sample_data(&app.state.db.pool).await.unwrap();
    assert_eq!(inserted, 3);

    let again = seed::insert_sample_data(&app.state.db.pool).await.unwrap();
    assert_eq!(again, 0);

    let (_, list) = app.send("GET", "/api/restaurants/", None).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"고향집"));
    assert!(names.contains(&"차이나오"));
    assert!(names.contains(&"스시하나"));
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let app = setup().await;
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/restaurants/")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = setup().await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-123");
}
