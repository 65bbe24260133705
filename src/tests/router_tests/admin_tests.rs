use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get_with_cookie, init_test_db, login_as_chairperson, post_form_with_cookie,
};
use astra::Body;
use http::Method;

#[test]
fn residents_list_renders_seeded_rows() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let body = body_string(get_with_cookie(&db, "/admin/residents", &cookie));
    assert!(body.contains("Juan Dela Cruz"));
    assert!(body.contains("6 matching"));
}

#[test]
fn residents_search_narrows_the_list() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let body = body_string(get_with_cookie(&db, "/admin/residents?search=santos", &cookie));
    assert!(body.contains("Maria Santos"));
    assert!(!body.contains("Juan Dela Cruz"));
    assert!(body.contains("1 matching"));
}

#[test]
fn residents_paginate_with_small_page_size() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let body = body_string(get_with_cookie(
        &db,
        "/admin/residents?per_page=4&page=2",
        &cookie,
    ));
    // 6 seeded residents, page size 4: page 2 holds the last two
    assert!(body.contains("Jose Garcia"));
    assert!(body.contains("Luz Mendoza"));
    assert!(!body.contains("Juan Dela Cruz"));
}

#[test]
fn appointments_filter_by_status() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let body = body_string(get_with_cookie(
        &db,
        "/admin/appointments?status=Accepted",
        &cookie,
    ));
    assert!(body.contains("Maria Santos"));
    assert!(!body.contains("Pedro Reyes"));
}

#[test]
fn appointment_status_update_round_trips() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = post_form_with_cookie(&db, "/admin/appointments/1/status", "status=accepted", &cookie);
    assert_eq!(resp.status(), 303);

    let body = body_string(get_with_cookie(
        &db,
        "/admin/appointments?status=Accepted",
        &cookie,
    ));
    assert!(body.contains("Juan Dela Cruz"));
}

#[test]
fn appointment_status_update_unknown_id_is_not_found() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/admin/appointments/9999/status")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Cookie", cookie)
        .body(Body::from(b"status=accepted".to_vec()))
        .unwrap();

    let err = handle(req, &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn incident_status_advances() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = post_form_with_cookie(&db, "/admin/incidents/1/status", "status=in_progress", &cookie);
    assert_eq!(resp.status(), 303);

    let body = body_string(get_with_cookie(
        &db,
        "/admin/incidents?status=In+Progress",
        &cookie,
    ));
    assert!(body.contains("Jose Garcia"));
}

#[test]
fn document_status_advances_to_ready() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = post_form_with_cookie(&db, "/admin/documents/1/status", "status=ready", &cookie);
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/documents");

    let body = body_string(get_with_cookie(&db, "/admin/documents?status=Ready", &cookie));
    assert!(body.contains("Juan Dela Cruz"));
    assert!(!body.contains("Ana Bautista"));
}

#[test]
fn documents_filter_by_type() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let body = body_string(get_with_cookie(
        &db,
        "/admin/documents?document_type=Business+Permit",
        &cookie,
    ));
    assert!(body.contains("Pedro Reyes"));
    assert!(body.contains("1 matching"));
}

#[test]
fn message_select_all_keeps_other_pages_selection() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    // resident 6 was selected on another page; select all of page 1 (ids 1-4)
    let resp = post_form_with_cookie(
        &db,
        "/admin/messages/select-all",
        "search=&per_page=4&page=1&selected=6&page_ids=1,2,3,4",
        &cookie,
    );
    assert_eq!(resp.status(), 303);

    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.contains("selected=1,2,3,4,6"));
}

#[test]
fn message_send_records_recipients() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = post_form_with_cookie(
        &db,
        "/admin/messages/send",
        "selected=1,2,3&body=Assembly+on+Saturday",
        &cookie,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/admin/messages?sent=3"
    );

    let body = body_string(get_with_cookie(&db, "/admin/messages", &cookie));
    assert!(body.contains("Assembly on Saturday"));
    assert!(body.contains("(3 recipients)"));
}

#[test]
fn report_aliases_render_the_same_report() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let canonical = body_string(get_with_cookie(&db, "/admin/reports/residents", &cookie));
    let alias = body_string(get_with_cookie(&db, "/admin/reports/overview", &cookie));

    assert!(canonical.contains("Resident Masterlist"));
    assert!(alias.contains("Resident Masterlist"));
}

#[test]
fn report_export_is_an_xlsx_attachment() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = get_with_cookie(&db, "/admin/reports/appointments/export", &cookie);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("appointments.xlsx"));
}

#[test]
fn report_data_endpoint_serves_json() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = get_with_cookie(&db, "/admin/reports/incidents/data.json", &cookie);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        mime::APPLICATION_JSON.as_ref()
    );

    let body = body_string(resp);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["key"], "incidents");
    assert!(parsed["rows"].as_array().unwrap().len() >= 3);
}

#[test]
fn unknown_report_key_is_not_found() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/admin/reports/budget")
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
