// src/templates/pages/appointments.rs
use crate::auth::Session;
use crate::domain::validation::FieldError;
use crate::templates::components::field_errors;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub const OFFICIALS: &[&str] = &[
    "Chairperson Lim",
    "Kgd. Ramos",
    "Kgd. Torres",
    "Secretary Cruz",
];

pub fn appointments_page(session: &Session, errors: &[FieldError], submitted: bool) -> Markup {
    portal_layout(
        "Appointments",
        session,
        html! {
            main class="container" style="max-width: 560px;" {
                h1 { "Schedule an Appointment" }

                @if submitted {
                    div style="border: 1px solid #10b981; background: #ecfdf5; padding: 12px; margin-bottom: 1rem;" {
                        "Your appointment request was submitted and is awaiting confirmation."
                    }
                }
                (field_errors(errors))

                form action="/services/appointments" method="post" {
                    label for="resident_name" { "Full name" }
                    input type="text" id="resident_name" name="resident_name"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="subject" { "Subject" }
                    input type="text" id="subject" name="subject"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="official_name" { "Official" }
                    select id="official_name" name="official_name"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;" {
                        @for official in OFFICIALS {
                            option value=(official) { (official) }
                        }
                    }

                    label for="scheduled_at" { "Preferred date and time" }
                    input type="datetime-local" id="scheduled_at" name="scheduled_at"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    button type="submit" { "Request appointment" }
                }
            }
        },
    )
}
