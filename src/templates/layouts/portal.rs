// src/templates/layouts/portal.rs
use crate::auth::{Role, Session};
use maud::{html, Markup, DOCTYPE};

pub fn portal_layout(title: &str, session: &Session, content: Markup) -> Markup {
    let is_chairperson = session.role() == Some(Role::Chairperson);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Barangay Portal" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Barangay Portal" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/services/documents" { "Documents" } }
                            li { a href="/services/incidents" { "Report Incident" } }
                            li { a href="/services/appointments" { "Appointments" } }
                            @if is_chairperson {
                                li { a href="/admin" { "Dashboard" } }
                            }
                        }
                    }
                    @match session {
                        Session::Authenticated { username, .. } => {
                            form action="/logout" method="post" style="margin: 0;" {
                                span style="margin-right: 8px;" { (username) }
                                button type="submit" { "Log out" }
                            }
                        }
                        Session::Anonymous => {
                            a href="/login" { "Login" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
