// src/templates/pages/login.rs
use crate::auth::Session;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn login_page(session: &Session, error: Option<&str>) -> Markup {
    portal_layout(
        "Sign in",
        session,
        html! {
            main class="container" style="max-width: 420px;" {
                h1 { "Sign in" }
                @if let Some(msg) = error {
                    p style="color: #dc2626;" { (msg) }
                }
                form action="/login" method="post" {
                    label for="username" { "Username" }
                    input type="text" id="username" name="username" required
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" required
                        style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;";

                    button type="submit" { "Sign in" }
                }
                p style="margin-top: 1rem;" {
                    "No account yet? " a href="/register" { "Register as a resident" }
                }
            }
        },
    )
}
