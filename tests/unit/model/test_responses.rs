use superclouds::model::responses::{ListRolesResponse, ListUsersResponse};

#[test]
fn list_users_response_decodes_envelope() {
    let body = r#"{
        "data": [
            {"id": "1", "email": "ann@example.com", "first_name": "Ann", "last_name": "Lee", "role": "ADMIN"},
            {"id": "2", "email": "bob@example.com", "first_name": "Bob", "last_name": "Ray", "role": "VIEW"}
        ],
        "message": "ok",
        "page": 1,
        "pages": 3,
        "size": 2,
        "status": 200,
        "total": 5
    }"#;

    let resp: ListUsersResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.users().len(), 2);
    assert_eq!(resp.users()[0].first_name, "Ann");
    assert_eq!(resp.users()[1].role, "VIEW");
    assert_eq!(resp.message, "ok");
    assert_eq!(resp.page, 1);
    assert_eq!(resp.pages, 3);
    assert_eq!(resp.size, 2);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.total, 5);
    assert!(resp.has_page_after(1));
    assert!(resp.has_page_after(2));
    assert!(!resp.has_page_after(3));

    let users = resp.into_users();
    assert_eq!(users[1].id, "2");
}

#[test]
fn list_users_response_tolerates_missing_metadata() {
    let resp: ListUsersResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(resp.users().is_empty());
    assert_eq!(resp.total, 0);
    assert!(!resp.has_page_after(1));
}

#[test]
fn list_users_paging_ignores_echoed_page() {
    // Server keeps answering page 1 whatever was asked for
    let resp: ListUsersResponse =
        serde_json::from_str(r#"{"data": [], "page": 1, "pages": 2}"#).unwrap();
    assert!(resp.has_page_after(1));
    assert!(!resp.has_page_after(2));
    assert!(!resp.has_page_after(7));
}

#[test]
fn list_users_response_rejects_wrong_shape() {
    let result = serde_json::from_str::<ListUsersResponse>(r#"{"data": "nope"}"#);
    assert!(result.is_err());
}

#[test]
fn list_roles_response_decodes() {
    let resp: ListRolesResponse =
        serde_json::from_str(r#"{"roles": ["ADMIN", "MODIFY", "VIEW"]}"#).unwrap();
    assert_eq!(resp.roles, vec!["ADMIN", "MODIFY", "VIEW"]);
    assert!(resp.contains("MODIFY"));
    assert!(!resp.contains("OWNER"));
}
