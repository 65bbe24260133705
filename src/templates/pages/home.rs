// src/templates/pages/home.rs
use crate::auth::Session;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn home_page(session: &Session) -> Markup {
    portal_layout(
        "Home",
        session,
        html! {
            main class="container" {
                h1 { "Welcome to the Barangay Portal" }
                p { "Request documents, report incidents and schedule appointments with your barangay office online." }

                div class="card-grid" style="display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem;" {
                    div class="card" {
                        h3 { "Document Requests" }
                        p { "Barangay clearance, certificates of residency and indigency, business permits." }
                        a href="/services/documents" { "Request a document" }
                    }
                    div class="card" {
                        h3 { "Incident Reports" }
                        p { "Report noise complaints, hazards and other incidents in your purok." }
                        a href="/services/incidents" { "File a report" }
                    }
                    div class="card" {
                        h3 { "Appointments" }
                        p { "Schedule a visit with a barangay official." }
                        a href="/services/appointments" { "Schedule an appointment" }
                    }
                    div class="card" {
                        h3 { "Resident Registration" }
                        p { "Not registered yet? Create your resident account." }
                        a href="/register" { "Register" }
                    }
                }
            }
        },
    )
}
