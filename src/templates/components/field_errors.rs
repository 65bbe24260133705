// src/templates/components/field_errors.rs
use crate::domain::validation::FieldError;
use maud::{html, Markup};

/// The blocking alert of the original forms, rendered as a proper list of
/// field-level messages above the form.
pub fn field_errors(errors: &[FieldError]) -> Markup {
    if errors.is_empty() {
        return html! {};
    }

    html! {
        div class="field-errors" style="border: 1px solid #dc2626; background: #fef2f2; padding: 12px; margin-bottom: 1rem;" {
            p style="margin: 0 0 6px 0; color: #dc2626;" { "Please fix the following:" }
            ul style="margin: 0; padding-left: 20px;" {
                @for err in errors {
                    li data-field=(err.field) { (err.message) }
                }
            }
        }
    }
}
