//! Health record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterError, FilterResult, Filterable};

/// Kind of health record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Consultation,
    LabTest,
    Prescription,
    Vaccination,
}

impl RecordType {
    pub const ALL: [RecordType; 4] = [
        RecordType::Consultation,
        RecordType::LabTest,
        RecordType::Prescription,
        RecordType::Vaccination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Consultation => "consultation",
            RecordType::LabTest => "lab_test",
            RecordType::Prescription => "prescription",
            RecordType::Vaccination => "vaccination",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Locale key for the filter tab label.
    pub fn label_key(&self) -> &'static str {
        match self {
            RecordType::Consultation => "records.consultations",
            RecordType::LabTest => "records.labTests",
            RecordType::Prescription => "records.prescriptions",
            RecordType::Vaccination => "records.vaccinations",
        }
    }
}

/// Processing status of a health record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Completed,
    Pending,
    Scheduled,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Completed,
        RecordStatus::Pending,
        RecordStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "completed",
            RecordStatus::Pending => "pending",
            RecordStatus::Scheduled => "scheduled",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

/// An entry in the patient's health history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    /// Identifier, unique within the collection
    pub id: String,
    /// Date of the consultation/test/prescription
    pub date: NaiveDate,
    /// Record kind
    #[serde(rename = "type")]
    pub kind: RecordType,
    /// Short title
    pub title: String,
    /// Attending doctor
    pub doctor: String,
    /// Details (results, dosage instructions)
    pub description: String,
    /// Processing status
    pub status: RecordStatus,
    /// Available from the on-device cache
    pub cached_offline: bool,
}

/// Count of records available from the offline cache.
pub fn cached_count(records: &[HealthRecord]) -> usize {
    records.iter().filter(|r| r.cached_offline).count()
}

impl Filterable for HealthRecord {
    const KIND: &'static str = "health_record";
    const CATEGORICAL_FIELDS: &'static [&'static str] = &["type", "status"];
    const TEXT_FIELDS: &'static [&'static str] = &["title", "doctor", "description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, field: &str) -> Option<&'static str> {
        match field {
            "type" => Some(self.kind.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn text_values(&self, field: &str) -> Vec<&str> {
        match field {
            "title" => vec![self.title.as_str()],
            "doctor" => vec![self.doctor.as_str()],
            "description" => vec![self.description.as_str()],
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
            "type" => self.kind = RecordType::parse(value).ok_or_else(invalid)?,
            "status" => self.status = RecordStatus::parse(value).ok_or_else(invalid)?,
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
