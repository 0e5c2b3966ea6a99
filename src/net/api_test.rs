use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn category_path_appends_id() {
    assert_eq!(category_path("c-9"), "/api/category/c-9");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_extracts_token() {
    assert_eq!(parse_login_response(200, r#"{"data":{"token":"abc"}}"#), Ok("abc".to_owned()));
}

#[test]
fn login_rejection_keeps_server_error() {
    assert_eq!(
        parse_login_response(401, r#"{"error":"Invalid credentials"}"#),
        Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) })
    );
}

#[test]
fn login_rejection_with_unparseable_body_has_no_message() {
    assert_eq!(
        parse_login_response(502, "<html>bad gateway</html>"),
        Err(ApiError::Status { status: 502, message: None })
    );
}

#[test]
fn login_success_without_token_is_decode_error() {
    assert!(matches!(parse_login_response(200, r#"{"data":{}}"#), Err(ApiError::Decode(_))));
}

// =============================================================
// Register / generic
// =============================================================

#[test]
fn register_accepts_any_success_status() {
    assert_eq!(parse_register_response(200, ""), Ok(()));
    assert_eq!(parse_register_response(201, "{}"), Ok(()));
}

#[test]
fn register_rejection_keeps_server_error() {
    assert_eq!(
        parse_register_response(400, r#"{"error":"Email already used"}"#),
        Err(ApiError::Status { status: 400, message: Some("Email already used".to_owned()) })
    );
}

#[test]
fn parse_data_reads_category_list() {
    let body = r#"{"data":[{"id":"1","name":"A","is_active":true},{"id":2,"name":"B","is_active":false}]}"#;
    let categories: Vec<Category> = parse_data(200, body).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].id, "2");
}

#[test]
fn parse_data_rejects_non_success() {
    let result: Result<Category, _> = parse_data(404, r#"{"error":"not found"}"#);
    assert_eq!(result, Err(ApiError::Status { status: 404, message: Some("not found".to_owned()) }));
}

#[test]
fn parse_empty_ignores_success_body() {
    assert_eq!(parse_empty(204, ""), Ok(()));
}

// =============================================================
// HttpApi outside the browser
// =============================================================

#[test]
fn http_api_is_unavailable_natively() {
    let api = HttpApi::new(AppConfig::default());
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "password123".to_owned() };
    let result = futures::executor::block_on(api.login(&request));
    assert_eq!(result, Err(ApiError::Unavailable));
}
