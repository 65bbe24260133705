// src/templates/pages/documents.rs
use crate::auth::Session;
use crate::db::documents::DOCUMENT_TYPES;
use crate::domain::validation::FieldError;
use crate::templates::components::field_errors;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn documents_page(session: &Session, errors: &[FieldError], submitted: bool) -> Markup {
    portal_layout(
        "Document Requests",
        session,
        html! {
            main class="container" style="max-width: 560px;" {
                h1 { "Request a Document" }

                @if submitted {
                    div style="border: 1px solid #10b981; background: #ecfdf5; padding: 12px; margin-bottom: 1rem;" {
                        "Your request was received. Claim your document at the barangay hall once it is marked Ready."
                    }
                }
                (field_errors(errors))

                form action="/services/documents" method="post" {
                    label for="resident_name" { "Full name" }
                    input type="text" id="resident_name" name="resident_name"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="document_type" { "Document" }
                    select id="document_type" name="document_type"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;" {
                        @for doc in DOCUMENT_TYPES {
                            option value=(doc) { (doc) }
                        }
                    }

                    label for="purpose" { "Purpose" }
                    input type="text" id="purpose" name="purpose"
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    button type="submit" { "Submit request" }
                }
            }
        },
    )
}
