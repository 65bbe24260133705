use crate::tests::utils::{
    get, get_with_cookie, init_test_db, login_as_chairperson, post_form,
};

#[test]
fn anonymous_visitor_is_redirected_from_admin() {
    let db = init_test_db();

    for path in [
        "/admin",
        "/admin/residents",
        "/admin/appointments",
        "/admin/incidents",
        "/admin/documents",
        "/admin/messages",
        "/admin/reports/residents",
    ] {
        let resp = get(&db, path);
        assert_eq!(resp.status(), 303, "{path} should redirect");
        assert_eq!(resp.headers().get("Location").unwrap(), "/login");
    }
}

#[test]
fn resident_session_is_also_redirected_from_admin() {
    let db = init_test_db();

    // register and sign in as a plain resident
    let body = crate::tests::utils::body_string(post_form(
        &db,
        "/register",
        "first_name=rosa&last_name=lim&birth_date=05051995&contact_number=09170001111&address=Purok+2&password=pw123&confirm_password=pw123",
    ));
    let marker = "name=\"username\" value=\"";
    let start = body.find(marker).unwrap() + marker.len();
    let end = body[start..].find('"').unwrap() + start;
    let username = body[start..end].to_string();

    let login = post_form(&db, "/login", &format!("username={username}&password=pw123"));
    let cookie = login
        .headers()
        .get("Set-Cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let resp = get_with_cookie(&db, "/admin", &cookie);
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
}

#[test]
fn chairperson_reaches_the_dashboard() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = get_with_cookie(&db, "/admin", &cookie);
    assert_eq!(resp.status(), 200);
    assert!(crate::tests::utils::body_string(resp).contains("Chairperson Dashboard"));
}

#[test]
fn logout_revokes_the_session() {
    let db = init_test_db();
    let cookie = login_as_chairperson(&db);

    let resp = crate::tests::utils::post_form_with_cookie(&db, "/logout", "", &cookie);
    assert_eq!(resp.status(), 303);

    // the old token no longer grants access
    let resp = get_with_cookie(&db, "/admin", &cookie);
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/login");
}
