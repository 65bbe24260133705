// src/templates/pages/register.rs
use crate::auth::Session;
use crate::domain::validation::{FieldError, RegistrationForm};
use crate::templates::components::field_errors;
use crate::templates::portal_layout;
use maud::{html, Markup};

/// Server-side derived preview shown back on the form: the masked date,
/// the age and the generated username are read-only, never typed.
pub struct DerivedPreview {
    pub masked_birth_date: String,
    pub age: Option<u32>,
    pub username: Option<String>,
}

pub fn register_page(
    session: &Session,
    form: &RegistrationForm,
    errors: &[FieldError],
    derived: &DerivedPreview,
) -> Markup {
    portal_layout(
        "Resident Registration",
        session,
        html! {
            main class="container" style="max-width: 560px;" {
                h1 { "Resident Registration" }
                (field_errors(errors))

                form action="/register" method="post" {
                    label for="first_name" { "First name" }
                    input type="text" id="first_name" name="first_name" value=(form.first_name)
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="last_name" { "Last name" }
                    input type="text" id="last_name" name="last_name" value=(form.last_name)
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="birth_date" { "Birth date (MM/DD/YYYY)" }
                    input type="text" id="birth_date" name="birth_date" value=(derived.masked_birth_date)
                        placeholder="MM/DD/YYYY" inputmode="numeric"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label { "Age" }
                    input type="text" readonly value=(derived.age.map(|a| a.to_string()).unwrap_or_default())
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px; background: #f3f4f6;";

                    label for="contact_number" { "Contact number" }
                    input type="text" id="contact_number" name="contact_number" value=(form.contact_number)
                        placeholder="09XXXXXXXXX" inputmode="numeric"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="address" { "Address" }
                    input type="text" id="address" name="address" value=(form.address)
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label { "Username (generated)" }
                    input type="text" readonly value=(derived.username.clone().unwrap_or_default())
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px; background: #f3f4f6;";

                    label for="password" { "Password" }
                    input type="password" id="password" name="password"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="confirm_password" { "Confirm password" }
                    input type="password" id="confirm_password" name="confirm_password"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    button type="submit" { "Register" }
                }
            }
        },
    )
}

/// Step shown after the resident record is created: enter the one-time
/// code sent to the registered contact number.
pub fn otp_page(
    session: &Session,
    token: &str,
    destination: &str,
    username: &str,
    error: Option<&str>,
) -> Markup {
    portal_layout(
        "Verify your number",
        session,
        html! {
            main class="container" style="max-width: 420px;" {
                h1 { "Verify your number" }
                p { "A one-time code was sent to " strong { (destination) } "." }
                @if let Some(msg) = error {
                    p style="color: #dc2626;" { (msg) }
                }
                form action="/register/verify" method="post" {
                    input type="hidden" name="token" value=(token);
                    input type="hidden" name="destination" value=(destination);
                    input type="hidden" name="username" value=(username);

                    label for="code" { "One-time code" }
                    input type="text" id="code" name="code" inputmode="numeric" maxlength="6"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    button type="submit" { "Verify" }
                }
            }
        },
    )
}

pub fn registered_page(session: &Session, username: &str) -> Markup {
    portal_layout(
        "Registration complete",
        session,
        html! {
            main class="container" style="max-width: 560px;" {
                h1 { "Registration complete" }
                p { "Welcome! Your username is " strong { (username) } ". You can now sign in." }
                a href="/login" { "Go to sign in" }
            }
        },
    )
}
