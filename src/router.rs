// src/router.rs
//
// One route table for the whole portal. Every admin route passes through
// the single chairperson guard; the guard redirects instead of rejecting
// because it is a navigation convenience inherited from the original
// portal, not an access-control boundary.

use std::collections::HashMap;
use std::io::Read;

use astra::{Body, Request, ResponseBuilder};
use chrono::{NaiveDateTime, Utc};

use crate::auth::otp::{FixedCodeOtp, OtpGateway};
use crate::auth::token::{generate_token_default, hash_password};
use crate::auth::{sessions, Role, Session};
use crate::db::{appointments, documents, incidents, messages, residents, seed, users, Database};
use crate::domain::fields::{
    derive_age, derive_username_random, mask_birth_date, normalize_name_fragment,
    normalize_phone_digits,
};
use crate::domain::query::{run_query, QueryState};
use crate::domain::selection::SelectionSet;
use crate::domain::status::{AppointmentStatus, DocumentStatus, IncidentStatus};
use crate::domain::validation::{validate_registration, FieldError, RegistrationForm};
use crate::errors::ServerError;
use crate::notify::sms::{SimulatedSms, SmsGateway};
use crate::reports;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::templates::components::pagination::urlencode;
use crate::templates::pages;
use crate::templates::pages::admin_dashboard::DashboardVm;
use crate::templates::pages::admin_messages::MessagesVm;
use crate::templates::pages::register::DerivedPreview;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str().to_string();
    let path = parts.uri.path().to_string();
    let params = parse_query(parts.uri.query());
    let cookie = parts
        .headers
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let session = current_session(db, cookie.as_deref())?;

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home::home_page(&session)),

        ("GET", "/login") => html_response(pages::login::login_page(&session, None)),
        ("POST", "/login") => post_login(db, &session, body),
        ("POST", "/logout") => post_logout(db, cookie.as_deref()),

        ("GET", "/register") => {
            let form = RegistrationForm::default();
            let derived = DerivedPreview {
                masked_birth_date: String::new(),
                age: None,
                username: None,
            };
            html_response(pages::register::register_page(&session, &form, &[], &derived))
        }
        ("POST", "/register") => post_register(db, &session, body),
        ("POST", "/register/verify") => post_register_verify(&session, body),

        ("GET", "/services/documents") => html_response(pages::documents::documents_page(
            &session,
            &[],
            params.contains_key("submitted"),
        )),
        ("POST", "/services/documents") => post_document_request(db, &session, body),

        ("GET", "/services/incidents") => html_response(pages::incidents::incidents_page(
            &session,
            &[],
            params.contains_key("submitted"),
        )),
        ("POST", "/services/incidents") => post_incident_report(db, &session, body),

        ("GET", "/services/appointments") => html_response(pages::appointments::appointments_page(
            &session,
            &[],
            params.contains_key("submitted"),
        )),
        ("POST", "/services/appointments") => post_appointment(db, &session, body),

        ("GET", "/admin") => guarded(&session, || admin_dashboard(db, &session)),
        ("GET", "/admin/residents") => {
            guarded(&session, || admin_residents(db, &session, &params))
        }
        ("GET", "/admin/appointments") => {
            guarded(&session, || admin_appointments(db, &session, &params))
        }
        ("GET", "/admin/incidents") => {
            guarded(&session, || admin_incidents(db, &session, &params))
        }
        ("GET", "/admin/documents") => {
            guarded(&session, || admin_documents(db, &session, &params))
        }
        ("GET", "/admin/messages") => {
            guarded(&session, || admin_messages(db, &session, &params))
        }
        ("POST", "/admin/messages/toggle") => {
            guarded(&session, || post_message_toggle(body))
        }
        ("POST", "/admin/messages/select-all") => {
            guarded(&session, || post_message_select_all(body))
        }
        ("POST", "/admin/messages/send") => {
            guarded(&session, || post_message_send(db, body))
        }

        _ => dynamic_routes(db, &session, &method, &path, body),
    }
}

/// Routes with a path parameter: status updates and the report pages.
fn dynamic_routes(
    db: &Database,
    session: &Session,
    method: &str,
    path: &str,
    body: Body,
) -> ResultResp {
    if let Some(rest) = path.strip_prefix("/admin/appointments/") {
        if let (Some(id), "POST") = (strip_status_suffix(rest), method) {
            return guarded(session, || post_appointment_status(db, id, body));
        }
    }

    if let Some(rest) = path.strip_prefix("/admin/incidents/") {
        if let (Some(id), "POST") = (strip_status_suffix(rest), method) {
            return guarded(session, || post_incident_status(db, id, body));
        }
    }

    if let Some(rest) = path.strip_prefix("/admin/documents/") {
        if let (Some(id), "POST") = (strip_status_suffix(rest), method) {
            return guarded(session, || post_document_status(db, id, body));
        }
    }

    if let (Some(rest), "GET") = (path.strip_prefix("/admin/reports/"), method) {
        return guarded(session, || admin_report(db, session, rest));
    }

    Err(ServerError::NotFound)
}

fn strip_status_suffix(rest: &str) -> Option<i64> {
    rest.strip_suffix("/status").and_then(|id| id.parse().ok())
}

// ---------------------------------------------------------------------------
// Session plumbing

fn current_session(db: &Database, cookie_header: Option<&str>) -> Result<Session, ServerError> {
    let Some(token) = session_cookie(cookie_header) else {
        return Ok(Session::Anonymous);
    };

    db.with_conn(|conn| sessions::load_session(conn, &token, Utc::now().timestamp()))
}

fn session_cookie(cookie_header: Option<&str>) -> Option<String> {
    cookie_header?.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "session").then(|| value.to_string())
    })
}

/// The single role guard: chairperson-only routes redirect everyone else
/// to the login page, exactly like the original per-page mount checks.
fn guarded<F>(session: &Session, handler: F) -> ResultResp
where
    F: FnOnce() -> ResultResp,
{
    if session.role() == Some(Role::Chairperson) {
        handler()
    } else {
        redirect_response("/login")
    }
}

// ---------------------------------------------------------------------------
// Auth handlers

fn post_login(db: &Database, session: &Session, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let username = form.get("username").map(String::as_str).unwrap_or("");
    let password = form.get("password").map(String::as_str).unwrap_or("");

    let found = db.with_conn(|conn| {
        users::find_by_credentials(conn, username, &hash_password(password))
    })?;

    let Some((user_id, role)) = found else {
        return html_response(pages::login::login_page(
            session,
            Some("Invalid username or password"),
        ));
    };

    let token = generate_token_default();
    db.with_conn(|conn| {
        sessions::create_session(conn, user_id, &token, Utc::now().timestamp())
    })?;

    let destination = match role {
        Role::Chairperson => "/admin",
        Role::Resident => "/",
    };

    ResponseBuilder::new()
        .status(303)
        .header("Location", destination)
        .header("Set-Cookie", format!("session={token}; Path=/; HttpOnly"))
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

fn post_logout(db: &Database, cookie_header: Option<&str>) -> ResultResp {
    if let Some(token) = session_cookie(cookie_header) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, Utc::now().timestamp()))?;
    }

    ResponseBuilder::new()
        .status(303)
        .header("Location", "/")
        .header("Set-Cookie", "session=; Path=/; Max-Age=0")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

// ---------------------------------------------------------------------------
// Registration

fn post_register(db: &Database, session: &Session, body: Body) -> ResultResp {
    let posted = parse_form(body)?;
    let field = |name: &str| posted.get(name).map(String::as_str).unwrap_or("").to_string();

    // The derivation pipeline runs on whatever was posted, exactly as it
    // ran per keystroke in the original form.
    let form = RegistrationForm {
        first_name: normalize_name_fragment(&field("first_name")),
        last_name: normalize_name_fragment(&field("last_name")),
        birth_date: mask_birth_date(&field("birth_date")),
        contact_number: normalize_phone_digits(&field("contact_number")),
        address: field("address"),
        password: field("password"),
        confirm_password: field("confirm_password"),
    };

    let today = Utc::now().date_naive();
    let errors = validate_registration(&form, today);
    let age = derive_age(&form.birth_date, today);
    // A fresh suffix on every submission; the source regenerated on every
    // change and that behavior is kept.
    let username = derive_username_random(&form.first_name, &form.last_name);

    if !errors.is_empty() {
        let derived = DerivedPreview {
            masked_birth_date: form.birth_date.clone(),
            age,
            username,
        };
        return html_response(pages::register::register_page(session, &form, &errors, &derived));
    }

    let (Some(age), Some(mut username)) = (age, username) else {
        return Err(ServerError::InternalError);
    };

    // Regenerate on collision rather than failing the submission.
    let now_ts = Utc::now().timestamp();
    for _ in 0..5 {
        let taken = db.with_conn(|conn| users::username_taken(conn, &username))?;
        if !taken {
            break;
        }
        username = derive_username_random(&form.first_name, &form.last_name)
            .ok_or(ServerError::InternalError)?;
    }

    let resident_id = residents::create_resident(
        db,
        &residents::NewResident {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            birth_date: form.birth_date.clone(),
            age,
            contact_number: form.contact_number.clone(),
            address: form.address.clone(),
            username: username.clone(),
        },
        Utc::now().naive_utc(),
    )?;

    db.with_conn(|conn| {
        users::create_user(
            conn,
            &username,
            &hash_password(&form.password),
            Role::Resident,
            Some(resident_id),
            now_ts,
        )
    })?;

    let otp = FixedCodeOtp::default();
    let token = otp.send_otp(&form.contact_number);

    html_response(pages::register::otp_page(
        session,
        &token,
        &form.contact_number,
        &username,
        None,
    ))
}

fn post_register_verify(session: &Session, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let token = form.get("token").map(String::as_str).unwrap_or("");
    let destination = form.get("destination").map(String::as_str).unwrap_or("");
    let username = form.get("username").map(String::as_str).unwrap_or("");
    let code = form.get("code").map(String::as_str).unwrap_or("");

    let otp = FixedCodeOtp::default();
    if otp.verify_otp(token, code) {
        html_response(pages::register::registered_page(session, username))
    } else {
        html_response(pages::register::otp_page(
            session,
            token,
            destination,
            username,
            Some("Incorrect code, please try again"),
        ))
    }
}

// ---------------------------------------------------------------------------
// Resident services

fn post_document_request(db: &Database, session: &Session, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let resident_name = normalize_name_fragment(form.get("resident_name").map(String::as_str).unwrap_or(""));
    let document_type = form.get("document_type").map(String::as_str).unwrap_or("").to_string();
    let purpose = form.get("purpose").map(String::as_str).unwrap_or("").to_string();

    let mut errors = Vec::new();
    require_field(&mut errors, "resident_name", &resident_name, "Full name is required");
    require_field(&mut errors, "document_type", &document_type, "Document is required");
    require_field(&mut errors, "purpose", &purpose, "Purpose is required");

    if !errors.is_empty() {
        return html_response(pages::documents::documents_page(session, &errors, false));
    }

    documents::create_document_request(
        db,
        &documents::NewDocumentRequest {
            resident_name,
            document_type,
            purpose,
        },
        Utc::now().naive_utc(),
    )?;

    redirect_response("/services/documents?submitted=1")
}

fn post_incident_report(db: &Database, session: &Session, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let reporter_name = normalize_name_fragment(form.get("reporter_name").map(String::as_str).unwrap_or(""));
    let category = form.get("category").map(String::as_str).unwrap_or("").to_string();
    let location = form.get("location").map(String::as_str).unwrap_or("").to_string();
    let description = form.get("description").map(String::as_str).unwrap_or("").to_string();

    let mut errors = Vec::new();
    require_field(&mut errors, "reporter_name", &reporter_name, "Your name is required");
    require_field(&mut errors, "category", &category, "Category is required");
    require_field(&mut errors, "location", &location, "Location is required");
    require_field(&mut errors, "description", &description, "Description is required");

    if !errors.is_empty() {
        return html_response(pages::incidents::incidents_page(session, &errors, false));
    }

    incidents::create_incident(
        db,
        &incidents::NewIncidentReport {
            reporter_name,
            category,
            location,
            description,
        },
        Utc::now().naive_utc(),
    )?;

    redirect_response("/services/incidents?submitted=1")
}

fn post_appointment(db: &Database, session: &Session, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let resident_name = normalize_name_fragment(form.get("resident_name").map(String::as_str).unwrap_or(""));
    let subject = form.get("subject").map(String::as_str).unwrap_or("").to_string();
    let official_name = form.get("official_name").map(String::as_str).unwrap_or("").to_string();
    let scheduled_raw = form.get("scheduled_at").map(String::as_str).unwrap_or("");

    let mut errors = Vec::new();
    require_field(&mut errors, "resident_name", &resident_name, "Full name is required");
    require_field(&mut errors, "subject", &subject, "Subject is required");
    require_field(&mut errors, "official_name", &official_name, "Official is required");

    // datetime-local posts "YYYY-MM-DDTHH:MM"
    let scheduled_at = NaiveDateTime::parse_from_str(scheduled_raw, "%Y-%m-%dT%H:%M").ok();
    if scheduled_at.is_none() {
        errors.push(FieldError::new(
            "scheduled_at",
            "A preferred date and time is required",
        ));
    }

    let Some(scheduled_at) = scheduled_at else {
        return html_response(pages::appointments::appointments_page(session, &errors, false));
    };
    if !errors.is_empty() {
        return html_response(pages::appointments::appointments_page(session, &errors, false));
    }

    appointments::create_appointment(
        db,
        &appointments::NewAppointment {
            resident_name,
            subject,
            official_name,
            scheduled_at,
        },
        Utc::now().naive_utc(),
    )?;

    redirect_response("/services/appointments?submitted=1")
}

// ---------------------------------------------------------------------------
// Admin pages

fn admin_dashboard(db: &Database, session: &Session) -> ResultResp {
    let appointment_list = appointments::list_appointments(db)?;
    let incident_list = incidents::list_incidents(db)?;
    let document_list = documents::list_document_requests(db)?;

    let vm = DashboardVm {
        resident_count: residents::count_residents(db)?,
        appointment_slices: reports::status_breakdown(
            appointment_list.iter().map(|a| a.status.label()),
            &AppointmentStatus::ALL.map(|s| s.label()),
        ),
        incident_slices: reports::status_breakdown(
            incident_list.iter().map(|i| i.status.label()),
            &IncidentStatus::ALL.map(|s| s.label()),
        ),
        document_slices: reports::status_breakdown(
            document_list.iter().map(|d| d.status.label()),
            &DocumentStatus::ALL.map(|s| s.label()),
        ),
    };

    html_response(pages::admin_dashboard::dashboard_page(session, &vm))
}

fn admin_residents(
    db: &Database,
    session: &Session,
    params: &HashMap<String, String>,
) -> ResultResp {
    let all = residents::list_residents(db)?;
    let state = query_state_from_params(params, &[]);
    let out = run_query(&all, &state);
    html_response(pages::admin_residents::residents_page(session, &state, &out))
}

fn admin_appointments(
    db: &Database,
    session: &Session,
    params: &HashMap<String, String>,
) -> ResultResp {
    let all = appointments::list_appointments(db)?;
    let state = query_state_from_params(params, &["status"]);
    let out = run_query(&all, &state);
    html_response(pages::admin_appointments::appointments_admin_page(
        session, &state, &out,
    ))
}

fn admin_incidents(
    db: &Database,
    session: &Session,
    params: &HashMap<String, String>,
) -> ResultResp {
    let all = incidents::list_incidents(db)?;
    let state = query_state_from_params(params, &["status", "category"]);
    let out = run_query(&all, &state);
    html_response(pages::admin_incidents::incidents_admin_page(session, &state, &out))
}

fn admin_documents(
    db: &Database,
    session: &Session,
    params: &HashMap<String, String>,
) -> ResultResp {
    let all = documents::list_document_requests(db)?;
    let state = query_state_from_params(params, &["status", "document_type"]);
    let out = run_query(&all, &state);
    html_response(pages::admin_documents::documents_admin_page(
        session, &state, &out,
    ))
}

fn post_appointment_status(db: &Database, id: i64, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let status = form
        .get("status")
        .and_then(|s| AppointmentStatus::parse(s))
        .ok_or_else(|| ServerError::BadRequest("unknown appointment status".into()))?;

    appointments::update_appointment_status(db, id, status)?;
    redirect_response("/admin/appointments")
}

fn post_incident_status(db: &Database, id: i64, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let status = form
        .get("status")
        .and_then(|s| IncidentStatus::parse(s))
        .ok_or_else(|| ServerError::BadRequest("unknown incident status".into()))?;

    incidents::update_incident_status(db, id, status)?;
    redirect_response("/admin/incidents")
}

fn post_document_status(db: &Database, id: i64, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let status = form
        .get("status")
        .and_then(|s| DocumentStatus::parse(s))
        .ok_or_else(|| ServerError::BadRequest("unknown document status".into()))?;

    documents::update_document_status(db, id, status)?;
    redirect_response("/admin/documents")
}

// ---------------------------------------------------------------------------
// Messaging

fn admin_messages(
    db: &Database,
    session: &Session,
    params: &HashMap<String, String>,
) -> ResultResp {
    let all = residents::list_residents(db)?;
    let state = query_state_from_params(params, &[]);
    let out = run_query(&all, &state);
    let selection = parse_selection(params.get("selected").map(String::as_str).unwrap_or(""));
    let recent = messages::list_messages(db)?;
    let sent_count = params.get("sent").and_then(|s| s.parse().ok());

    let vm = MessagesVm {
        state: &state,
        out: &out,
        selection: &selection,
        recent: &recent,
        sent_count,
    };
    html_response(pages::admin_messages::messages_page(session, &vm))
}

fn post_message_toggle(body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let mut selection = parse_selection(form.get("selected").map(String::as_str).unwrap_or(""));

    if let Some(id) = form.get("id").and_then(|s| s.parse().ok()) {
        selection.toggle(id);
    }

    redirect_response(&messages_url(&form, &selection))
}

fn post_message_select_all(body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let mut selection = parse_selection(form.get("selected").map(String::as_str).unwrap_or(""));
    let page_ids = parse_id_list(form.get("page_ids").map(String::as_str).unwrap_or(""));

    selection.toggle_select_all(&page_ids);

    redirect_response(&messages_url(&form, &selection))
}

fn post_message_send(db: &Database, body: Body) -> ResultResp {
    let form = parse_form(body)?;
    let selection = parse_selection(form.get("selected").map(String::as_str).unwrap_or(""));
    let message_body = form.get("body").map(String::as_str).unwrap_or("").trim().to_string();

    if selection.is_empty() || message_body.is_empty() {
        return redirect_response("/admin/messages");
    }

    let recipient_ids: Vec<i64> = selection.iter().collect();
    let all = residents::list_residents(db)?;
    let gateway = SimulatedSms::default();

    for resident in all.iter().filter(|r| selection.contains(r.id)) {
        // always resolves; the stub cannot fail
        let _ = gateway.send(&resident.contact_number, &message_body);
    }

    messages::record_message(db, &message_body, &recipient_ids, Utc::now().naive_utc())?;

    redirect_response(&format!("/admin/messages?sent={}", recipient_ids.len()))
}

fn messages_url(form: &HashMap<String, String>, selection: &SelectionSet) -> String {
    let search = urlencode(form.get("search").map(String::as_str).unwrap_or(""));
    let per_page = form.get("per_page").map(String::as_str).unwrap_or("10");
    let page = form.get("page").map(String::as_str).unwrap_or("1");
    let selected = pages::admin_messages::selection_param(selection);

    format!("/admin/messages?search={search}&per_page={per_page}&page={page}&selected={selected}")
}

fn parse_selection(raw: &str) -> SelectionSet {
    let mut selection = SelectionSet::new();
    for id in parse_id_list(raw) {
        selection.toggle(id);
    }
    selection
}

fn parse_id_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Reports

fn admin_report(db: &Database, session: &Session, rest: &str) -> ResultResp {
    let (key, action) = match rest.strip_suffix("/export") {
        Some(key) => (key, ReportAction::Export),
        None => match rest.strip_suffix("/data.json") {
            Some(key) => (key, ReportAction::Json),
            None => (rest, ReportAction::Page),
        },
    };

    let spec = reports::find_report(key).ok_or(ServerError::NotFound)?;
    let rows = (spec.rows)(db)?;

    match action {
        ReportAction::Page => html_response(pages::admin_reports::report_page(session, spec, &rows)),
        ReportAction::Export => reports::export_xlsx::export_report_xlsx(spec, &rows),
        ReportAction::Json => json_response(&reports::ReportData {
            key: spec.key,
            title: spec.title,
            headers: spec.headers,
            rows,
        }),
    }
}

enum ReportAction {
    Page,
    Export,
    Json,
}

// ---------------------------------------------------------------------------
// Request parsing helpers

fn query_state_from_params(params: &HashMap<String, String>, filters: &[&str]) -> QueryState {
    let mut state = QueryState::default();

    if let Some(per_page) = params.get("per_page").and_then(|s| s.parse().ok()) {
        state.set_page_size(per_page);
    }
    if let Some(search) = params.get("search") {
        state.set_search_term(search.clone());
    }
    for filter in filters {
        if let Some(value) = params.get(*filter) {
            state.set_filter(*filter, value.clone());
        }
    }
    // Page last: search/filter/size mutations above have already reset it,
    // so an explicit page param in a pager link still lands on its page.
    if let Some(page) = params.get("page").and_then(|s| s.parse().ok()) {
        state.set_page_index(page);
    }

    state
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = query {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(urldecode(k), urldecode(v));
            }
        }
    }

    map
}

fn parse_form(mut body: Body) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = String::new();
    body.reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(parse_query(Some(&raw)))
}

fn urldecode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn require_field(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// Startup hook shared by `main` and the test harness.
pub fn prepare_database(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    crate::db::connection::init_db(db, schema_path)?;
    seed::seed_sample_data(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urldecode_handles_plus_and_percent() {
        assert_eq!(urldecode("juan+dela%20cruz"), "juan dela cruz");
        assert_eq!(urldecode("a%3Db"), "a=b");
        assert_eq!(urldecode("100%"), "100%");
    }

    #[test]
    fn query_state_orders_mutations_so_pager_links_survive() {
        let mut params = HashMap::new();
        params.insert("search".to_string(), "juan".to_string());
        params.insert("status".to_string(), "Awaiting".to_string());
        params.insert("page".to_string(), "3".to_string());

        let state = query_state_from_params(&params, &["status"]);
        assert_eq!(state.page_index(), 3);
        assert_eq!(state.search_term(), "juan");
        assert_eq!(state.filter("status"), Some("Awaiting"));
    }

    #[test]
    fn form_without_page_param_lands_on_page_one() {
        let mut params = HashMap::new();
        params.insert("search".to_string(), "juan".to_string());

        let state = query_state_from_params(&params, &[]);
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn session_cookie_is_extracted_among_others() {
        let header = "theme=dark; session=abc123; lang=en";
        assert_eq!(session_cookie(Some(header)), Some("abc123".to_string()));
        assert_eq!(session_cookie(None), None);
    }
}
