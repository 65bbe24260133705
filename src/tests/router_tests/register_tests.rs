use crate::tests::utils::{body_string, get, init_test_db, post_form};

const VALID_FORM: &str = "first_name=juan&last_name=dela+cruz&birth_date=01011990&contact_number=09171234567&address=Purok+1&password=s3cret&confirm_password=s3cret";

#[test]
fn register_page_loads_successfully() {
    let db = init_test_db();
    let body = body_string(get(&db, "/register"));

    assert!(body.contains("Resident Registration"));
    assert!(body.contains("birth_date"));
}

#[test]
fn invalid_submission_re_renders_with_field_errors() {
    let db = init_test_db();

    let resp = post_form(
        &db,
        "/register",
        "first_name=juan&last_name=&birth_date=02302020&contact_number=123&address=&password=a&confirm_password=b",
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Last name is required"));
    assert!(body.contains("valid MM/DD/YYYY"));
    assert!(body.contains("must be 11 digits"));
    assert!(body.contains("Passwords do not match"));
    // typed name came back normalized
    assert!(body.contains("value=\"Juan\""));
}

#[test]
fn valid_submission_reaches_otp_step() {
    let db = init_test_db();

    let resp = post_form(&db, "/register", VALID_FORM);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Verify your number"));
    assert!(body.contains("09171234567"));
    // generated username: first initial + last name + 3-digit suffix
    assert!(body.contains("jdelacruz"));
}

#[test]
fn wrong_otp_code_stays_on_verify_step() {
    let db = init_test_db();
    post_form(&db, "/register", VALID_FORM);

    let resp = post_form(
        &db,
        "/register/verify",
        "token=otp:09171234567&destination=09171234567&username=jdelacruz123&code=000000",
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Incorrect code"));
}

#[test]
fn fixed_otp_code_completes_registration() {
    let db = init_test_db();
    post_form(&db, "/register", VALID_FORM);

    let resp = post_form(
        &db,
        "/register/verify",
        "token=otp:09171234567&destination=09171234567&username=jdelacruz123&code=123456",
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Registration complete"));
}

#[test]
fn registered_resident_can_sign_in() {
    let db = init_test_db();

    let body = body_string(post_form(&db, "/register", VALID_FORM));
    // pull the generated username out of the OTP form
    let marker = "name=\"username\" value=\"";
    let start = body.find(marker).expect("username hidden field") + marker.len();
    let end = body[start..].find('"').unwrap() + start;
    let username = &body[start..end];

    let resp = post_form(&db, "/login", &format!("username={username}&password=s3cret"));
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}

#[test]
fn bad_credentials_re_render_login() {
    let db = init_test_db();

    let resp = post_form(&db, "/login", "username=nobody&password=wrong");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Invalid username or password"));
}
