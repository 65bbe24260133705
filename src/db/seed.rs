// src/db/seed.rs
//
// The portal this replaces shipped with hard-coded sample residents,
// appointments and incident reports so every page rendered populated.
// The same sample state is seeded here, once, into an empty database.

use crate::auth::token::hash_password;
use crate::auth::Role;
use crate::db::appointments::{create_appointment, NewAppointment};
use crate::db::connection::Database;
use crate::db::documents::{create_document_request, NewDocumentRequest};
use crate::db::incidents::{create_incident, NewIncidentReport};
use crate::db::residents::{count_residents, create_resident, NewResident};
use crate::db::users;
use crate::domain::status::{AppointmentStatus, IncidentStatus};
use crate::errors::ServerError;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::params;

/// Default chairperson account, matching the sample login of the original
/// portal. Replace in any real deployment.
pub const CHAIRPERSON_USERNAME: &str = "chairperson";
pub const CHAIRPERSON_PASSWORD: &str = "chairperson123";

pub fn seed_sample_data(db: &Database) -> Result<(), ServerError> {
    if count_residents(db)? > 0 {
        return Ok(());
    }

    let now = Utc::now().naive_utc();

    seed_chairperson(db)?;
    seed_residents(db, now)?;
    seed_appointments(db, now)?;
    seed_incidents(db, now)?;
    seed_documents(db, now)?;

    Ok(())
}

fn seed_chairperson(db: &Database) -> Result<(), ServerError> {
    let now = Utc::now().timestamp();
    db.with_conn(|conn| {
        if users::username_taken(conn, CHAIRPERSON_USERNAME)? {
            return Ok(());
        }
        users::create_user(
            conn,
            CHAIRPERSON_USERNAME,
            &hash_password(CHAIRPERSON_PASSWORD),
            Role::Chairperson,
            None,
            now,
        )?;
        Ok(())
    })
}

fn seed_residents(db: &Database, now: NaiveDateTime) -> Result<(), ServerError> {
    let samples = [
        ("Juan", "Dela Cruz", "01/15/1985", 40, "09171230001", "Purok 1, Zone 2", "jdelacruz101"),
        ("Maria", "Santos", "03/22/1992", 33, "09171230002", "Purok 2, Zone 1", "msantos102"),
        ("Pedro", "Reyes", "07/04/1978", 48, "09171230003", "Purok 3, Zone 4", "preyes103"),
        ("Ana", "Bautista", "11/30/2000", 24, "09171230004", "Purok 1, Zone 3", "abautista104"),
        ("Jose", "Garcia", "05/09/1965", 60, "09171230005", "Purok 5, Zone 2", "jgarcia105"),
        ("Luz", "Mendoza", "09/17/1988", 36, "09171230006", "Purok 4, Zone 1", "lmendoza106"),
    ];

    for (first, last, birth, age, contact, address, username) in samples {
        create_resident(
            db,
            &NewResident {
                first_name: first.to_string(),
                last_name: last.to_string(),
                birth_date: birth.to_string(),
                age,
                contact_number: contact.to_string(),
                address: address.to_string(),
                username: username.to_string(),
            },
            now,
        )?;
    }
    Ok(())
}

fn seed_appointments(db: &Database, now: NaiveDateTime) -> Result<(), ServerError> {
    let day = |y, m, d, h| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .unwrap_or(now)
    };

    let samples = [
        ("Juan Dela Cruz", "Barangay clearance follow-up", "Kgd. Ramos", day(2025, 9, 1, 9), AppointmentStatus::Awaiting),
        ("Maria Santos", "Business permit inquiry", "Chairperson Lim", day(2025, 9, 2, 10), AppointmentStatus::Accepted),
        ("Pedro Reyes", "Dispute mediation", "Kgd. Torres", day(2025, 9, 3, 14), AppointmentStatus::Declined),
        ("Ana Bautista", "Indigency certificate", "Chairperson Lim", day(2025, 9, 4, 11), AppointmentStatus::Awaiting),
    ];

    for (resident, subject, official, scheduled_at, status) in samples {
        let id = create_appointment(
            db,
            &NewAppointment {
                resident_name: resident.to_string(),
                subject: subject.to_string(),
                official_name: official.to_string(),
                scheduled_at,
            },
            now,
        )?;
        if status != AppointmentStatus::Awaiting {
            db.with_conn(|conn| {
                conn.execute(
                    "update appointments set status = ? where id = ?",
                    params![status.as_str(), id],
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;
                Ok(())
            })?;
        }
    }
    Ok(())
}

fn seed_incidents(db: &Database, now: NaiveDateTime) -> Result<(), ServerError> {
    let samples = [
        ("Jose Garcia", "Noise Complaint", "Purok 5", "Late-night karaoke past curfew", IncidentStatus::None),
        ("Luz Mendoza", "Stray Animals", "Purok 4", "Stray dogs near the elementary school", IncidentStatus::InProgress),
        ("Maria Santos", "Road Hazard", "Purok 2", "Open drainage along the main road", IncidentStatus::Resolved),
    ];

    for (reporter, category, location, description, status) in samples {
        let id = create_incident(
            db,
            &NewIncidentReport {
                reporter_name: reporter.to_string(),
                category: category.to_string(),
                location: location.to_string(),
                description: description.to_string(),
            },
            now,
        )?;
        if status != IncidentStatus::None {
            db.with_conn(|conn| {
                conn.execute(
                    "update incident_reports set status = ? where id = ?",
                    params![status.as_str(), id],
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;
                Ok(())
            })?;
        }
    }
    Ok(())
}

fn seed_documents(db: &Database, now: NaiveDateTime) -> Result<(), ServerError> {
    let samples = [
        ("Juan Dela Cruz", "Barangay Clearance", "Employment requirement"),
        ("Ana Bautista", "Certificate of Indigency", "Scholarship application"),
        ("Pedro Reyes", "Business Permit", "Sari-sari store renewal"),
    ];

    for (resident, doc_type, purpose) in samples {
        create_document_request(
            db,
            &NewDocumentRequest {
                resident_name: resident.to_string(),
                document_type: doc_type.to_string(),
                purpose: purpose.to_string(),
            },
            now,
        )?;
    }
    Ok(())
}
