//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterError, FilterResult, Filterable};

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked, not yet happened
    Upcoming,
    /// Visit took place
    Completed,
    /// Cancelled by the patient
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Upcoming,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "upcoming",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }

    /// Locale key for the filter tab label.
    pub fn label_key(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "appointments.upcoming",
            AppointmentStatus::Completed => "appointments.completed",
            AppointmentStatus::Cancelled => "appointments.cancelled",
        }
    }
}

/// How the consultation takes place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    /// Remote video consultation
    Video,
    /// In-person visit at the hospital
    Physical,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 2] = [AppointmentType::Video, AppointmentType::Physical];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Video => "video",
            AppointmentType::Physical => "physical",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AppointmentType::Video => "bookAppointment.videoConsult",
            AppointmentType::Physical => "bookAppointment.physicalVisit",
        }
    }
}

/// A booked consultation with a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Identifier, unique within the collection
    pub id: String,
    /// Calendar date of the visit
    pub date: NaiveDate,
    /// Display time slot (e.g., "10:00 AM")
    pub time: String,
    /// Doctor name
    pub doctor: String,
    /// Doctor specialty
    pub specialty: String,
    /// Video or physical visit
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    /// Lifecycle status
    pub status: AppointmentStatus,
    /// Free-text notes
    pub notes: Option<String>,
}

impl Appointment {
    /// Create an upcoming appointment with required fields.
    pub fn new(id: String, date: NaiveDate, doctor: String, kind: AppointmentType) -> Self {
        Self {
            id,
            date,
            time: String::new(),
            doctor,
            specialty: String::new(),
            kind,
            status: AppointmentStatus::Upcoming,
            notes: None,
        }
    }

    /// Only upcoming appointments offer cancel/reschedule/join actions.
    pub fn is_actionable(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }
}

/// The earliest upcoming appointment, shown as the "nearest visit" reminder.
pub fn nearest_upcoming(appointments: &[Appointment]) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|a| a.is_actionable())
        .min_by_key(|a| a.date)
}

impl Filterable for Appointment {
    const KIND: &'static str = "appointment";
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["status", "type"];
    const TEXT_FIELDS: &'static [&'static str] = &["doctor", "specialty", "notes"];

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, field: &str) -> Option<&'static str> {
        match field {
            "status" => Some(self.status.as_str()),
            "type" => Some(self.kind.as_str()),
            _ => None,
        }
    }

    fn text_values(&self, field: &str) -> Vec<&str> {
        match field {
            "doctor" => vec![self.doctor.as_str()],
            "specialty" => vec![self.specialty.as_str()],
            "notes" => self.notes.as_deref().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn set_category(&mut self, field: &str, value: &str) -> FilterResult<()> {
        let invalid = || FilterError::InvalidValue {
            kind: Self::KIND,
            field: field.to_string(),
            value: value.to_string(),
        };
        match field {
            "status" => self.status = AppointmentStatus::parse(value).ok_or_else(invalid)?,
            "type" => self.kind = AppointmentType::parse(value).ok_or_else(invalid)?,
            _ => {
                return Err(FilterError::UnknownField {
                    kind: Self::KIND,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn appointment(id: &str, day: &str, doctor: &str, kind: AppointmentType) -> Appointment {
        Appointment::new(id.into(), date(day), doctor.into(), kind)
    }

    #[test]
    fn test_status_tags() {
        for status in AppointmentStatus::ALL {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AppointmentStatus::parse("Upcoming"), None);
        assert_eq!(AppointmentStatus::parse("all"), None);
    }

    #[test]
    fn test_serde_uses_type_tag() {
        let appt = appointment("1", "2024-01-20", "Dr. Test", AppointmentType::Video);
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["date"], "2024-01-20");
    }

    #[test]
    fn test_nearest_upcoming_skips_other_statuses() {
        let mut early = appointment("1", "2024-01-10", "A", AppointmentType::Video);
        early.status = AppointmentStatus::Completed;
        let later = appointment("2", "2024-01-25", "B", AppointmentType::Physical);
        let soon = appointment("3", "2024-01-20", "C", AppointmentType::Video);

        let list = vec![early, later, soon];
        assert_eq!(nearest_upcoming(&list).map(|a| a.id.as_str()), Some("3"));
        assert!(nearest_upcoming(&list[..1]).is_none());
    }

    #[test]
    fn test_set_category_rejects_unknown_value() {
        let mut appt = appointment("1", "2024-01-20", "A", AppointmentType::Video);
        assert!(matches!(
            appt.set_category("status", "postponed"),
            Err(FilterError::InvalidValue { .. })
        ));
        appt.set_category("status", "cancelled").unwrap();
        assert_eq!(appt.status, AppointmentStatus::Cancelled);
    }
}
