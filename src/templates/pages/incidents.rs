// src/templates/pages/incidents.rs
use crate::auth::Session;
use crate::domain::validation::FieldError;
use crate::templates::components::field_errors;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub const INCIDENT_CATEGORIES: &[&str] = &[
    "Noise Complaint",
    "Road Hazard",
    "Stray Animals",
    "Dispute",
    "Other",
];

pub fn incidents_page(session: &Session, errors: &[FieldError], submitted: bool) -> Markup {
    portal_layout(
        "Report an Incident",
        session,
        html! {
            main class="container" style="max-width: 560px;" {
                h1 { "Report an Incident" }

                @if submitted {
                    div style="border: 1px solid #10b981; background: #ecfdf5; padding: 12px; margin-bottom: 1rem;" {
                        "Your report was filed. The barangay office will follow up as it is processed."
                    }
                }
                (field_errors(errors))

                form action="/services/incidents" method="post" {
                    label for="reporter_name" { "Your name" }
                    input type="text" id="reporter_name" name="reporter_name"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="category" { "Category" }
                    select id="category" name="category"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;" {
                        @for cat in INCIDENT_CATEGORIES {
                            option value=(cat) { (cat) }
                        }
                    }

                    label for="location" { "Location" }
                    input type="text" id="location" name="location"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="description" { "What happened?" }
                    textarea id="description" name="description" rows="4"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;" {}

                    button type="submit" { "File report" }
                }
            }
        },
    )
}
