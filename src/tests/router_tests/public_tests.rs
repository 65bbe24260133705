use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, post_form};
use astra::Body;
use http::Method;

#[test]
fn home_page_loads_successfully() {
    let db = init_test_db();
    let resp = get(&db, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Barangay Portal"));
    assert!(body.contains("/services/documents"));
}

#[test]
fn login_page_loads_successfully() {
    let db = init_test_db();
    let resp = get(&db, "/login");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();
    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/no/such/page")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn document_request_round_trips() {
    let db = init_test_db();

    let resp = post_form(
        &db,
        "/services/documents",
        "resident_name=ana+lim&document_type=Barangay+Clearance&purpose=Employment",
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/services/documents?submitted=1"
    );

    let page = body_string(get(&db, "/services/documents?submitted=1"));
    assert!(page.contains("Your request was received"));
}

#[test]
fn document_request_requires_fields() {
    let db = init_test_db();

    let resp = post_form(&db, "/services/documents", "resident_name=&purpose=");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Full name is required"));
    assert!(body.contains("Purpose is required"));
}

#[test]
fn incident_report_round_trips() {
    let db = init_test_db();

    let resp = post_form(
        &db,
        "/services/incidents",
        "reporter_name=jose+cruz&category=Road+Hazard&location=Purok+1&description=Fallen+tree",
    );
    assert_eq!(resp.status(), 303);
}

#[test]
fn appointment_rejects_bad_schedule() {
    let db = init_test_db();

    let resp = post_form(
        &db,
        "/services/appointments",
        "resident_name=ana&subject=Permit&official_name=Kgd.+Ramos&scheduled_at=not-a-date",
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("preferred date and time"));
}

#[test]
fn appointment_round_trips() {
    let db = init_test_db();

    let resp = post_form(
        &db,
        "/services/appointments",
        "resident_name=ana&subject=Permit&official_name=Kgd.+Ramos&scheduled_at=2025-10-01T09:30",
    );
    assert_eq!(resp.status(), 303);
}
