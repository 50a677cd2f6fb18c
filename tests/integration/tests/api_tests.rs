//! API Integration Tests
//!
//! Every test starts its own server over a fresh in-memory database, seeded
//! with the default roles (User, Admin, Moderator) and two sample users.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_role(server: &TestServer, name: &str) -> RoleResponse {
    let response = server.post("/api/roles", &role_body(name)).await.unwrap();
    let created: RoleMessage = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.data
}

async fn create_user(server: &TestServer, body: &Value) -> CreatedUser {
    let response = server.post("/api/users", body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn get_user(server: &TestServer, id: i64) -> UserResponse {
    let response = server.get(&format!("/api/users/{id}")).await.unwrap();
    let user: UserData = assert_json(response, StatusCode::OK).await.unwrap();
    user.data
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/health", "/api/health"] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], true);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api-docs/openapi.json").await.unwrap();
    let doc: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(doc["paths"]["/api/roles"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/nothing-here").await.unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Not found");
}

#[tokio::test]
async fn test_request_id_header_present() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/roles").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Role Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_roles_sorted_by_name() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/roles").await.unwrap();
    let roles: RoleList = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<_> = roles.data.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Admin", "Moderator", "User"]);
    assert!(roles.data.iter().all(|r| r.is_active));
}

#[tokio::test]
async fn test_roles_listed_in_byte_order() {
    let server = TestServer::start().await.unwrap();
    create_role(&server, "alpha").await;

    let response = server.get("/api/roles").await.unwrap();
    let roles: RoleList = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<_> = roles.data.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Admin", "Moderator", "User", "alpha"]);
}

#[tokio::test]
async fn test_create_role_conflicts_case_insensitively() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/api/roles", &role_body("QA")).await.unwrap();
    let created: RoleMessage = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Role created successfully");
    assert_eq!(created.data.name, "QA");
    assert!(created.data.is_active);

    let response = server.post("/api/roles", &role_body("qa")).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "A role with this name already exists");
}

#[tokio::test]
async fn test_create_role_trims_name_and_description() {
    let server = TestServer::start().await.unwrap();

    let body = json!({ "name": "  Foo  ", "description": "   " });
    let response = server.post("/api/roles", &body).await.unwrap();
    let created: RoleMessage = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/roles/{}", created.data.id)).await.unwrap();
    let role: RoleData = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(role.data.name, "Foo");
    assert_eq!(role.data.description, None);
    assert!(!role.data.created_at.is_empty());
}

#[tokio::test]
async fn test_create_role_validation() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": "   " }), json!({ "name": 42 })] {
        let response = server.post("/api/roles", &body).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Role name is required and must be a non-empty string");
    }

    for description in [json!(5), json!(null), json!({ "a": 1 })] {
        let body = json!({ "name": unique_role_name(), "description": description });
        let response = server.post("/api/roles", &body).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Role description must be a string");
    }
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw("/api/roles", "{\"name\": ").await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(message.starts_with("Invalid request body"), "{message}");
}

#[tokio::test]
async fn test_get_role_invalid_ids() {
    let server = TestServer::start().await.unwrap();

    for id in ["abc", "0", "-1", "1.5", "12abc"] {
        let response = server.get(&format!("/api/roles/{id}")).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Invalid role ID. Must be a positive integer.");
    }

    let response = server.get("/api/roles/9999").await.unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Role not found");
}

#[tokio::test]
async fn test_update_role() {
    let server = TestServer::start().await.unwrap();
    let name = unique_role_name();
    let role = create_role(&server, &name).await;
    let path = format!("/api/roles/{}", role.id);

    let response = server.put(&path, &json!({ "description": "Testers" })).await.unwrap();
    let updated: RoleMessage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.message, "Role updated successfully");
    assert_eq!(updated.data.name, name);
    assert_eq!(updated.data.description.as_deref(), Some("Testers"));

    // Same name in another case is not a conflict with itself
    let response = server.put(&path, &json!({ "name": name.to_uppercase() })).await.unwrap();
    let updated: RoleMessage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.name, name.to_uppercase());
    assert_eq!(updated.data.description.as_deref(), Some("Testers"));

    let response = server.put(&path, &json!({ "description": "" })).await.unwrap();
    let updated: RoleMessage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.description, None);

    let response = server.put(&path, &json!({ "name": "admin" })).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "A role with this name already exists");
}

#[tokio::test]
async fn test_update_role_validation_and_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.put("/api/roles/2", &json!({})).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "At least one field (name or description) must be provided");

    let response = server.put("/api/roles/2", &json!({ "name": "  " })).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Role name must be a non-empty string");

    let response = server.put("/api/roles/9999", &json!({ "name": "Ghost" })).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.put("/api/roles/abc", &json!({ "name": "Ghost" })).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_deactivate_default_role_fails() {
    let server = TestServer::start().await.unwrap();
    let response = server.delete("/api/roles/1").await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Cannot deactivate the default User role");
}

#[tokio::test]
async fn test_deactivate_role_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let role = create_role(&server, &unique_role_name()).await;
    let path = format!("/api/roles/{}", role.id);

    let response = server.delete(&path).await.unwrap();
    let deactivated: RoleMessage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deactivated.message, "Role deactivated successfully");
    assert!(!deactivated.data.is_active);

    let response = server.delete(&path).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Role is already deactivated");

    // Hidden from the default listing, still retrievable
    let response = server.get("/api/roles").await.unwrap();
    let active: RoleList = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.data.iter().all(|r| r.id != role.id));

    let response = server.get("/api/roles?all=true").await.unwrap();
    let all: RoleList = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.data.iter().any(|r| r.id == role.id && !r.is_active));

    let response = server.get(&path).await.unwrap();
    let fetched: RoleData = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!fetched.data.is_active);

    // The name stays taken
    let response = server.post("/api/roles", &role_body(&role.name.to_lowercase())).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.delete("/api/roles/9999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_duplicate_creates() {
    let server = TestServer::start().await.unwrap();
    let body = role_body(&unique_role_name());

    let (first, second) = tokio::join!(server.post("/api/roles", &body), server.post("/api/roles", &body));
    let mut statuses = [first.unwrap().status(), second.unwrap().status()];
    statuses.sort();

    assert_eq!(statuses[0], StatusCode::CREATED);
    assert!(
        statuses[1] == StatusCode::CONFLICT || statuses[1] == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status {}",
        statuses[1]
    );
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user_defaults_to_user_role() {
    let server = TestServer::start().await.unwrap();

    let created = create_user(&server, &user_body("John Doe", "Eng")).await;
    assert_eq!(created.name, "John Doe");
    assert_eq!(created.job, "Eng");
    assert!(!created.created_at.is_empty());

    let user = get_user(&server, created.id).await;
    assert_eq!(user.role_id, Some(1));
    assert_eq!(user.role.as_ref().map(|r| r.name.as_str()), Some("User"));
    assert_eq!(user.first_name.as_deref(), Some("John"));
    assert_eq!(user.last_name.as_deref(), Some("Doe"));
    assert_eq!(user.email.as_deref(), Some("john.doe@reqres.in"));
    assert!(user.avatar.unwrap().starts_with("https://reqres.in/img/faces/"));
}

#[tokio::test]
async fn test_create_user_single_word_name() {
    let server = TestServer::start().await.unwrap();
    let created = create_user(&server, &user_body("Cher", "Singer")).await;

    let user = get_user(&server, created.id).await;
    assert_eq!(user.last_name.as_deref(), Some(""));
    assert_eq!(user.email.as_deref(), Some("cher.doe@reqres.in"));
}

#[tokio::test]
async fn test_create_user_validation() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({ "name": "John" }), json!({ "job": "Eng" }), json!({ "name": "", "job": "Eng" })] {
        let response = server.post("/api/users", &body).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Name and job are required");
    }

    for role_id in [json!(9999), json!(0), json!("abc"), json!(1.5)] {
        let body = json!({ "name": "Ann Lee", "job": "QA", "role_id": role_id });
        let response = server.post("/api/users", &body).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Invalid role_id provided");
    }
}

#[tokio::test]
async fn test_inactive_role_rejected_but_kept_on_existing_users() {
    let server = TestServer::start().await.unwrap();
    let role = create_role(&server, &unique_role_name()).await;

    let created = create_user(&server, &json!({ "name": "Kim Park", "job": "Ops", "role_id": role.id })).await;

    let response = server.delete(&format!("/api/roles/{}", role.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let user = get_user(&server, created.id).await;
    assert_eq!(user.role_id, Some(role.id));
    let joined = user.role.unwrap();
    assert_eq!(joined.id, role.id);
    assert!(!joined.is_active);

    let body = json!({ "name": "Lee Park", "job": "Ops", "role_id": role.id });
    let response = server.post("/api/users", &body).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Invalid role_id provided");

    let response = server.put("/api/users/1", &json!({ "role_id": role.id })).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_user_not_found() {
    let server = TestServer::start().await.unwrap();

    for id in ["9999", "abc"] {
        let response = server.get(&format!("/api/users/{id}")).await.unwrap();
        let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(message, "User not found");
    }
}

#[tokio::test]
async fn test_seeded_users() {
    let server = TestServer::start().await.unwrap();

    let george = get_user(&server, 1).await;
    assert_eq!(george.email.as_deref(), Some("george.bluth@reqres.in"));
    assert_eq!(george.role.map(|r| r.name), Some("Admin".to_string()));

    let janet = get_user(&server, 2).await;
    assert_eq!(janet.role_id, Some(1));
}

#[tokio::test]
async fn test_list_users_pagination() {
    let server = TestServer::start().await.unwrap();
    for i in 0..5 {
        create_user(&server, &user_body(&format!("Person{i} Test"), "Job")).await;
    }

    let response = server.get("/api/users").await.unwrap();
    let first: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(first.per_page, 6);
    assert_eq!(first.total, 7);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.data.len(), 6);
    assert_eq!(first.data[0].id, 1);

    let response = server.get("/api/users?page=3&per_page=3").await.unwrap();
    let last: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(last.total_pages, 3);
    assert_eq!(last.data.len(), 1);

    let response = server.get("/api/users?page=abc&per_page=-2").await.unwrap();
    let fallback: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((fallback.page, fallback.per_page), (1, 6));
}

#[tokio::test]
async fn test_list_users_huge_page_size() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get("/api/users?page=1&per_page=9223372036854775807")
        .await
        .unwrap();
    let list: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.per_page, i64::MAX);
    assert_eq!(list.total, 2);
    assert_eq!(list.total_pages, 1);
    assert_eq!(list.data.len(), 2);

    let response = server
        .get("/api/users?page=2&per_page=9223372036854775807")
        .await
        .unwrap();
    let beyond: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(beyond.total_pages, 1);
    assert!(beyond.data.is_empty());
}

#[tokio::test]
async fn test_list_users_role_filter() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/users?role=2").await.unwrap();
    let admins: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(admins.total, 1);
    assert!(admins.data.iter().all(|u| u.role_id == Some(2)));

    let response = server.get("/api/users?role=3").await.unwrap();
    let none: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(none.total, 0);
    assert_eq!(none.total_pages, 0);
    assert!(none.data.is_empty());

    for role in ["abc", "-1", "0", "1.5"] {
        let response = server.get(&format!("/api/users?role={role}")).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Invalid role parameter. Must be a positive integer.");
    }
}

#[tokio::test]
async fn test_update_user_echo() {
    let server = TestServer::start().await.unwrap();
    let created = create_user(&server, &user_body("John Doe", "Eng")).await;
    let path = format!("/api/users/{}", created.id);

    let response = server.put(&path, &json!({ "job": "Lead" })).await.unwrap();
    let updated: UpdatedUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "");
    assert_eq!(updated.job, "Lead");
    assert!(!updated.updated_at.is_empty());

    let response = server.put(&path, &json!({ "name": "Jane Roe" })).await.unwrap();
    let updated: UpdatedUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Jane Roe");

    let user = get_user(&server, created.id).await;
    assert_eq!(user.first_name.as_deref(), Some("Jane"));
    assert_eq!(user.last_name.as_deref(), Some("Roe"));
    assert_eq!(user.job.as_deref(), Some("Lead"));
}

#[tokio::test]
async fn test_update_user_role() {
    let server = TestServer::start().await.unwrap();

    let response = server.put("/api/users/2", &json!({ "role_id": 3 })).await.unwrap();
    let updated: UpdatedUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((updated.name.as_str(), updated.job.as_str()), ("", ""));

    let user = get_user(&server, 2).await;
    assert_eq!(user.role_id, Some(3));
    assert_eq!(user.role.map(|r| r.name), Some("Moderator".to_string()));
}

#[tokio::test]
async fn test_update_user_validation() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({}), json!({ "name": null, "job": "" })] {
        let response = server.put("/api/users/1", &body).await.unwrap();
        let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Name, job, or role_id is required");
    }

    let response = server.put("/api/users/1", &json!({ "name": 12 })).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Name must be a string");

    let response = server.put("/api/users/1", &json!({ "job": false })).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Job must be a string");

    let response = server.put("/api/users/1", &json!({ "role_id": "x" })).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Invalid role_id provided");

    let response = server.put("/api/users/9999", &json!({ "job": "Lead" })).await.unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "User not found");
}

#[tokio::test]
async fn test_delete_user() {
    let server = TestServer::start().await.unwrap();
    let created = create_user(&server, &user_body("Temp User", "None")).await;
    let path = format!("/api/users/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleting again, or deleting something that never existed, still succeeds
    for path in [path.as_str(), "/api/users/9999", "/api/users/abc"] {
        let response = server.delete(path).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }
}
