// src/templates/components/status_badge.rs
use maud::{html, Markup};

pub fn status_badge(label: &str) -> Markup {
    let color = match label {
        "Accepted" | "Resolved" | "Released" => "#10b981",
        "Awaiting" | "Pending" | "None" => "#6b7280",
        "Declined" => "#dc2626",
        "In Progress" | "Ready" => "#3b82f6",
        _ => "#6b7280",
    };

    html! {
        span style=(format!("color: {color}; font-weight: 600;")) { (label) }
    }
}
