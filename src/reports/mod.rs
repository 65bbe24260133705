// src/reports/mod.rs
//
// Declarative report registry for the chairperson dashboard. Each report
// is a key, a title, column headers and a row selector; one generic
// renderer and one generic exporter consume them. This replaces the
// per-report markup switch the original dashboard carried, including the
// legacy aliases that pointed at the same data.

pub mod export_xlsx;

use crate::db::{appointments, documents, incidents, messages, residents, Database};
use crate::errors::ServerError;
use serde::Serialize;

pub struct ReportSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: fn(&Database) -> Result<Vec<Vec<String>>, ServerError>,
}

pub const REPORTS: &[ReportSpec] = &[
    ReportSpec {
        key: "residents",
        title: "Resident Masterlist",
        headers: &["ID", "Name", "Age", "Contact", "Address", "Username", "Registered"],
        rows: resident_rows,
    },
    ReportSpec {
        key: "appointments",
        title: "Appointments",
        headers: &["ID", "Resident", "Subject", "Official", "Schedule", "Status"],
        rows: appointment_rows,
    },
    ReportSpec {
        key: "incidents",
        title: "Incident Reports",
        headers: &["ID", "Reporter", "Category", "Location", "Status", "Reported"],
        rows: incident_rows,
    },
    ReportSpec {
        key: "documents",
        title: "Document Requests",
        headers: &["ID", "Resident", "Document", "Purpose", "Status", "Requested"],
        rows: document_rows,
    },
    ReportSpec {
        key: "messages",
        title: "Sent Messages",
        headers: &["ID", "Message", "Recipients", "Sent"],
        rows: message_rows,
    },
];

// Keys the old dashboard used for the same reports ("overview" and
// "view all" variants rendered identical data through separate branches).
const ALIASES: &[(&str, &str)] = &[
    ("overview", "residents"),
    ("resident-masterlist", "residents"),
    ("view-all-residents", "residents"),
    ("appointments-overview", "appointments"),
    ("view-all-appointments", "appointments"),
    ("incident-overview", "incidents"),
    ("view-all-incidents", "incidents"),
    ("clearances", "documents"),
];

pub fn find_report(key: &str) -> Option<&'static ReportSpec> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, target)| *target)
        .unwrap_or(key);

    REPORTS.iter().find(|spec| spec.key == canonical)
}

/// JSON payload for the dashboard chart/data endpoint.
#[derive(Serialize)]
pub struct ReportData {
    pub key: &'static str,
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// One slice of the dashboard's status pie chart.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusSlice {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Count statuses in the order given, with percentages of the total.
/// Labels never seen still appear with a zero count so the chart legend
/// is stable.
pub fn status_breakdown<'a>(
    statuses: impl IntoIterator<Item = &'a str>,
    order: &[&str],
) -> Vec<StatusSlice> {
    let mut counts = vec![0usize; order.len()];
    let mut total = 0usize;

    for status in statuses {
        if let Some(pos) = order.iter().position(|o| *o == status) {
            counts[pos] += 1;
            total += 1;
        }
    }

    order
        .iter()
        .zip(counts)
        .map(|(label, count)| StatusSlice {
            label: (*label).to_string(),
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

fn resident_rows(db: &Database) -> Result<Vec<Vec<String>>, ServerError> {
    Ok(residents::list_residents(db)?
        .into_iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.full_name(),
                r.age.to_string(),
                r.contact_number,
                r.address,
                r.username,
                r.registered_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect())
}

fn appointment_rows(db: &Database) -> Result<Vec<Vec<String>>, ServerError> {
    Ok(appointments::list_appointments(db)?
        .into_iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.resident_name,
                a.subject,
                a.official_name,
                a.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
                a.status.label().to_string(),
            ]
        })
        .collect())
}

fn incident_rows(db: &Database) -> Result<Vec<Vec<String>>, ServerError> {
    Ok(incidents::list_incidents(db)?
        .into_iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.reporter_name,
                i.category,
                i.location,
                i.status.label().to_string(),
                i.reported_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect())
}

fn document_rows(db: &Database) -> Result<Vec<Vec<String>>, ServerError> {
    Ok(documents::list_document_requests(db)?
        .into_iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.resident_name,
                d.document_type,
                d.purpose,
                d.status.label().to_string(),
                d.requested_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect())
}

fn message_rows(db: &Database) -> Result<Vec<Vec<String>>, ServerError> {
    Ok(messages::list_messages(db)?
        .into_iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.body,
                m.recipient_count.to_string(),
                m.sent_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical_reports() {
        assert_eq!(find_report("overview").map(|s| s.key), Some("residents"));
        assert_eq!(
            find_report("view-all-appointments").map(|s| s.key),
            Some("appointments")
        );
        assert_eq!(find_report("clearances").map(|s| s.key), Some("documents"));
    }

    #[test]
    fn canonical_keys_resolve_to_themselves() {
        for spec in REPORTS {
            assert_eq!(find_report(spec.key).map(|s| s.key), Some(spec.key));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(find_report("budget").is_none());
    }

    #[test]
    fn breakdown_counts_and_percentages() {
        let slices = status_breakdown(
            ["Awaiting", "Accepted", "Awaiting", "Declined"],
            &["Awaiting", "Accepted", "Declined"],
        );
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[0].percent, 50.0);
        assert_eq!(slices[1].count, 1);
        assert_eq!(slices[2].count, 1);
    }

    #[test]
    fn breakdown_of_nothing_is_all_zero() {
        let slices = status_breakdown([], &["None", "In Progress", "Resolved"]);
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|s| s.count == 0 && s.percent == 0.0));
    }
}
