use crate::auth::token::generate_token_default;
use crate::db::connection::Database;
use crate::router::{handle, prepare_database};
use astra::{Body, Response};
use http::Method;
use std::io::Read;

/// Fresh seeded database using the production schema. Each call gets its
/// own file so parallel tests never share state.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!("barangay_test_{}.sqlite3", generate_token_default()));
    let db = Database::new(path.to_string_lossy().into_owned());

    prepare_database(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn get(db: &Database, uri: &str) -> Response {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, db).expect("Failed to handle request")
}

pub fn get_with_cookie(db: &Database, uri: &str, cookie: &str) -> Response {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();

    handle(req, db).expect("Failed to handle request")
}

pub fn post_form(db: &Database, uri: &str, form: &str) -> Response {
    post_form_with_cookie(db, uri, form, "")
}

pub fn post_form_with_cookie(db: &Database, uri: &str, form: &str, cookie: &str) -> Response {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");

    if !cookie.is_empty() {
        builder = builder.header("Cookie", cookie);
    }

    let req = builder.body(Body::from(form.as_bytes().to_vec())).unwrap();

    handle(req, db).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Sign in with the seeded chairperson account and return the session
/// cookie to send on guarded requests.
pub fn login_as_chairperson(db: &Database) -> String {
    let form = format!(
        "username={}&password={}",
        crate::db::seed::CHAIRPERSON_USERNAME,
        crate::db::seed::CHAIRPERSON_PASSWORD
    );
    let resp = post_form(db, "/login", &form);
    assert_eq!(resp.status(), 303, "chairperson login should redirect");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("login must set a session cookie")
        .to_str()
        .unwrap();

    // "session=TOKEN; Path=/; HttpOnly" -> "session=TOKEN"
    cookie.split(';').next().unwrap().to_string()
}
