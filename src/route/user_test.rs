use std::sync::Arc;

use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    core::test_utils::{generate_test_token, test_config},
    factory::{user::UserFactory, user_profile::UserProfileFactory},
    init_openapi_route,
    model::user::User,
    AppState,
};

#[sqlx::test]
async fn test_create_user_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({
            "firstname": "Al",
            "lastname": "B",
            "email": "a@b.com",
            "password": "secret1"
        }))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let body = json.value().object();
    body.get("message").assert_string("User created successfully");
    let user_id = body.get("user_id").i64() as i32;
    let user: User = sqlx::query_as("SELECT * FROM public.user WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(
        user,
        User {
            user_id,
            firstname: "Al".to_string(),
            lastname: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        }
    );
    Ok(())
}

#[sqlx::test]
async fn test_create_user_api_rejects_invalid_body(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    for (body, message) in [
        (
            json!({"firstname": "Al", "lastname": "B", "email": "a.b.com", "password": "secret1"}),
            "Invalid email format",
        ),
        (
            json!({"firstname": "Al", "lastname": "B", "email": "a@b.com"}),
            "password is required",
        ),
        (
            json!({"firstname": 7, "lastname": "B", "email": "a@b.com", "password": "secret1"}),
            "Firstname and lastname must be strings",
        ),
        (
            json!({"firstname": "Al", "lastname": "B", "email": "a@b.com", "password": "123"}),
            "Password must be at least 6 characters long",
        ),
    ] {
        // When
        let resp = cli
            .post("/api/users")
            .header("authorization", format!("Bearer {}", token))
            .body_json(&body)
            .send()
            .await;

        // Expect
        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "error": message })).await;
    }
    let num_data: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.user")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(num_data.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_user_api_rejects_bad_credentials(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let user = UserFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When no header
    let resp = cli
        .get(format!("/api/users/{}", user.user_id))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::UNAUTHORIZED);

    // When token is not ours
    let resp = cli
        .get(format!("/api/users/{}", user.user_id))
        .header("authorization", "Bearer not.a.token")
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::FORBIDDEN);
    resp.assert_json(&json!({"error": "Forbidden"})).await;

    // When write with a token signed by someone else
    let other_config = crate::settings::Config {
        jwt_secret: "another-secret".to_string(),
        ..config.clone()
    };
    let resp = cli
        .delete(format!("/api/users/{}", user.user_id))
        .header(
            "authorization",
            format!("Bearer {}", generate_test_token(&other_config)),
        )
        .send()
        .await;

    // Expect nothing was deleted
    resp.assert_status(StatusCode::FORBIDDEN);
    let num_data: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.user")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(num_data.0, 1);
    Ok(())
}

#[sqlx::test]
async fn test_get_user_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let user = UserFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get(format!("/api/users/{}", user.user_id))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "user_id": user.user_id,
        "firstname": user.firstname,
        "lastname": user.lastname,
        "email": user.email,
        "password": user.password,
    }))
    .await;

    // When missing
    let resp = cli
        .get(format!("/api/users/{}", user.user_id + 1))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&json!({"error": "User not found"})).await;

    // When id is not a number
    let resp = cli
        .get("/api/users/abc")
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_json(&json!({"error": "Invalid user ID"})).await;
    Ok(())
}

#[sqlx::test]
async fn test_update_user_api_merges_patch(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let mut user_factory = UserFactory::new();
    user_factory.modified_one(|_, _| User {
        user_id: 0,
        firstname: "Al".to_string(),
        lastname: "B".to_string(),
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
    });
    let user = user_factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put(format!("/api/users/{}", user.user_id))
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({
            "lastname": "Z",
            "user_id": user.user_id + 100,
            "is_admin": true
        }))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let expected = User {
        lastname: "Z".to_string(),
        ..user.clone()
    };
    resp.assert_json(&json!({
        "message": "User updated successfully",
        "user": {
            "user_id": expected.user_id,
            "firstname": "Al",
            "lastname": "Z",
            "email": "a@b.com",
            "password": "secret1",
        }
    }))
    .await;
    let stored: User = sqlx::query_as("SELECT * FROM public.user WHERE user_id = $1")
        .bind(user.user_id)
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(stored, expected);
    Ok(())
}

#[sqlx::test]
async fn test_update_user_api_rejects_bad_patch(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let user = UserFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    for (id, body, status, message) in [
        (
            user.user_id,
            json!({}),
            StatusCode::BAD_REQUEST,
            "No data provided for update",
        ),
        (
            user.user_id,
            json!({"user_id": 5}),
            StatusCode::BAD_REQUEST,
            "No data provided for update",
        ),
        (
            user.user_id,
            json!({"email": "broken"}),
            StatusCode::BAD_REQUEST,
            "Invalid email format",
        ),
        (
            user.user_id,
            json!({"lastname": 42}),
            StatusCode::BAD_REQUEST,
            "Invalid value for lastname",
        ),
        (
            user.user_id + 1,
            json!({"lastname": "Z"}),
            StatusCode::NOT_FOUND,
            "User not found",
        ),
    ] {
        // When
        let resp = cli
            .put(format!("/api/users/{}", id))
            .header("authorization", format!("Bearer {}", token))
            .body_json(&body)
            .send()
            .await;

        // Expect
        resp.assert_status(status);
        resp.assert_json(&json!({ "error": message })).await;
    }
    let stored: User = sqlx::query_as("SELECT * FROM public.user WHERE user_id = $1")
        .bind(user.user_id)
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(stored, user);
    Ok(())
}

#[sqlx::test]
async fn test_delete_user_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let user = UserFactory::new().generate_one(&app_state.db, ()).await?;
    UserProfileFactory::new()
        .generate_one(&app_state.db, user.user_id, ())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .delete(format!("/api/users/{}", user.user_id))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await;

    // Expect user and its profile are gone
    resp.assert_status_is_ok();
    resp.assert_json(&json!({"message": "User deleted successfully"}))
        .await;
    let num_data: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.user_profile")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(num_data.0, 0);

    // When deleted twice
    let resp = cli
        .delete(format!("/api/users/{}", user.user_id))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&json!({"error": "User not found"})).await;
    Ok(())
}

#[sqlx::test]
async fn test_paginate_user_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState {
        db: pool,
        config: config.clone(),
    });
    let token = generate_test_token(&config);
    let mut user_factory = UserFactory::new();
    user_factory.modified_many(|data, idx, _| User {
        firstname: if idx < 3 {
            format!("Alpha{}", idx)
        } else {
            format!("Omega{}", idx)
        },
        ..data.clone()
    });
    let users = user_factory.generate_many(&app_state.db, 15, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When second page
    let resp = cli
        .put("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({"page": 2, "limit": 10}))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let body = json.value().object();
    body.get("page").assert_i64(2);
    body.get("limit").assert_i64(10);
    body.get("total").assert_i64(15);
    body.get("totalPages").assert_i64(2);
    let items = body.get("users").array();
    items.assert_len(5);
    items
        .get(0)
        .object()
        .get("user_id")
        .assert_i64(users[10].user_id as i64);

    // When past the end
    let resp = cli
        .put("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({"page": 5, "limit": 10}))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let body = json.value().object();
    body.get("total").assert_i64(15);
    body.get("users").array().assert_is_empty();

    // When filtered, case insensitive
    let resp = cli
        .put("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({"page": "1", "limit": "10", "firstname": "alpha"}))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let body = json.value().object();
    body.get("total").assert_i64(3);
    body.get("totalPages").assert_i64(1);
    body.get("users").array().assert_len(3);

    // When page is invalid
    let resp = cli
        .put("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body_json(&json!({"page": 0, "limit": 10}))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_json(&json!({"error": "Invalid page or limit parameters"}))
        .await;
    Ok(())
}
