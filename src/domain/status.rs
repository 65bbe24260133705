// src/domain/status.rs
//
// Closed status vocabularies for each record kind. Stored lowercase in the
// database, rendered through `label`. There is no delete path for any of
// these records; status changes are the only mutation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Awaiting,
    Accepted,
    Declined,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Awaiting,
        AppointmentStatus::Accepted,
        AppointmentStatus::Declined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Awaiting => "awaiting",
            AppointmentStatus::Accepted => "accepted",
            AppointmentStatus::Declined => "declined",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Awaiting => "Awaiting",
            AppointmentStatus::Accepted => "Accepted",
            AppointmentStatus::Declined => "Declined",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "awaiting" => Some(AppointmentStatus::Awaiting),
            "accepted" => Some(AppointmentStatus::Accepted),
            "declined" => Some(AppointmentStatus::Declined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStatus {
    /// Newly filed, not yet looked at. A real member of the enum, not an
    /// absent value.
    None,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 3] = [
        IncidentStatus::None,
        IncidentStatus::InProgress,
        IncidentStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::None => "none",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::None => "None",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(IncidentStatus::None),
            "in_progress" => Some(IncidentStatus::InProgress),
            "resolved" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Ready,
    Released,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::Pending,
        DocumentStatus::Ready,
        DocumentStatus::Released,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Ready => "ready",
            DocumentStatus::Released => "released",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Ready => "Ready",
            DocumentStatus::Released => "Released",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(DocumentStatus::Pending),
            "ready" => Some(DocumentStatus::Ready),
            "released" => Some(DocumentStatus::Released),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_status_round_trips() {
        for s in AppointmentStatus::ALL {
            assert_eq!(AppointmentStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(AppointmentStatus::parse("cancelled"), None);
    }

    #[test]
    fn incident_status_round_trips() {
        for s in IncidentStatus::ALL {
            assert_eq!(IncidentStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(IncidentStatus::parse("open"), None);
    }

    #[test]
    fn document_status_round_trips() {
        for s in DocumentStatus::ALL {
            assert_eq!(DocumentStatus::parse(s.as_str()), Some(s));
        }
    }
}
