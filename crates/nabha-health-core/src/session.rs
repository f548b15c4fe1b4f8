//! Per-session UI state: the selected language and each screen's filter.
//!
//! The session is owned by the presentation layer and passed in explicitly;
//! the resolver and the entity filter themselves hold no state.

use serde::{Deserialize, Serialize};

use crate::filter::{self, Criterion, FilterError, FilterResult, Filterable, ALL};
use crate::i18n::{Catalog, Language};
use crate::models::{
    Appointment, AppointmentStatus, HealthRecord, Medicine, Pharmacy, RecordType,
};

/// Text fields searched by the medicine screen.
pub const MEDICINE_SEARCH_FIELDS: [&str; 2] = ["name", "generic_name"];

/// Text fields searched by the pharmacy screen.
pub const PHARMACY_SEARCH_FIELDS: [&str; 2] = ["medicine", "generic"];

/// Selected language and filters for one app session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub language: Language,
    /// Appointment status tab (`all` or a status tag)
    pub appointment_status: String,
    /// Health record type tab (`all` or a type tag)
    pub record_type: String,
    pub medicine_query: String,
    pub pharmacy_query: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            appointment_status: ALL.to_string(),
            record_type: ALL.to_string(),
            medicine_query: String::new(),
            pharmacy_query: String::new(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(from = self.language.code(), to = language.code(), "Language changed");
        self.language = language;
    }

    /// Flip between English and Hindi; returns the new language.
    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    /// Display string in the session language.
    pub fn t<'a>(&self, catalog: &'a Catalog, key: &'a str) -> &'a str {
        catalog.resolve(self.language, key)
    }

    /// Select the appointment tab. Accepts `all` or a status tag.
    pub fn select_appointment_status(&mut self, tag: &str) -> FilterResult<()> {
        if tag != ALL && AppointmentStatus::parse(tag).is_none() {
            return Err(FilterError::InvalidValue {
                kind: Appointment::KIND,
                field: "status".into(),
                value: tag.into(),
            });
        }
        self.appointment_status = tag.to_string();
        Ok(())
    }

    /// Select the health record tab. Accepts `all` or a type tag.
    pub fn select_record_type(&mut self, tag: &str) -> FilterResult<()> {
        if tag != ALL && RecordType::parse(tag).is_none() {
            return Err(FilterError::InvalidValue {
                kind: HealthRecord::KIND,
                field: "type".into(),
                value: tag.into(),
            });
        }
        self.record_type = tag.to_string();
        Ok(())
    }

    pub fn set_medicine_query(&mut self, query: impl Into<String>) {
        self.medicine_query = query.into();
    }

    pub fn set_pharmacy_query(&mut self, query: impl Into<String>) {
        self.pharmacy_query = query.into();
    }

    pub fn appointment_criterion(&self) -> Criterion {
        Criterion::equals("status", self.appointment_status.as_str())
    }

    pub fn record_criterion(&self) -> Criterion {
        Criterion::equals("type", self.record_type.as_str())
    }

    pub fn medicine_criterion(&self) -> Criterion {
        Criterion::contains(MEDICINE_SEARCH_FIELDS, self.medicine_query.as_str())
    }

    pub fn pharmacy_criterion(&self) -> Criterion {
        Criterion::contains(PHARMACY_SEARCH_FIELDS, self.pharmacy_query.as_str())
    }

    pub fn visible_appointments(
        &self,
        appointments: &[Appointment],
    ) -> FilterResult<Vec<Appointment>> {
        filter::filter(appointments, &self.appointment_criterion())
    }

    pub fn visible_records(&self, records: &[HealthRecord]) -> FilterResult<Vec<HealthRecord>> {
        filter::filter(records, &self.record_criterion())
    }

    pub fn visible_medicines(&self, medicines: &[Medicine]) -> FilterResult<Vec<Medicine>> {
        filter::filter(medicines, &self.medicine_criterion())
    }

    /// Pharmacies stocking a medicine matching the query. Nothing is listed
    /// until a query is entered.
    pub fn visible_pharmacies(&self, pharmacies: &[Pharmacy]) -> FilterResult<Vec<Pharmacy>> {
        if self.pharmacy_query.is_empty() {
            return Ok(Vec::new());
        }
        filter::filter(pharmacies, &self.pharmacy_criterion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RecordSource, SampleData};

    #[test]
    fn test_defaults() {
        let session = Session::default();
        assert_eq!(session.language, Language::Hi);
        assert_eq!(session.appointment_status, "all");
        assert_eq!(session.record_type, "all");
        assert!(session.medicine_query.is_empty());
    }

    #[test]
    fn test_toggle_changes_rendered_labels() {
        let catalog = Catalog::builtin();
        let mut session = Session::default();
        assert_eq!(session.t(&catalog, "common.home"), "होम");

        assert_eq!(session.toggle_language(), Language::En);
        assert_eq!(session.t(&catalog, "common.home"), "Home");
    }

    #[test]
    fn test_select_rejects_unknown_tabs() {
        let mut session = Session::default();
        assert!(matches!(
            session.select_appointment_status("postponed"),
            Err(FilterError::InvalidValue { kind, .. }) if kind == Appointment::KIND
        ));
        assert_eq!(session.appointment_status, "all");

        session.select_record_type("lab_test").unwrap();
        assert_eq!(session.record_type, "lab_test");
        assert!(matches!(
            session.select_record_type("x_ray"),
            Err(FilterError::InvalidValue { kind, .. }) if kind == HealthRecord::KIND
        ));
    }

    #[test]
    fn test_visible_views() {
        let data = SampleData;
        let mut session = Session::default();

        session.select_appointment_status("completed").unwrap();
        let appts = session.visible_appointments(&data.appointments()).unwrap();
        assert_eq!(appts.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["2", "3"]);

        session.select_record_type("consultation").unwrap();
        let records = session.visible_records(&data.health_records()).unwrap();
        assert_eq!(records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1", "4"]);

        session.set_medicine_query("AMOX");
        let meds = session.visible_medicines(&data.medicines()).unwrap();
        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0].generic_name, "Amoxicillin");
    }

    #[test]
    fn test_pharmacies_hidden_until_query() {
        let data = SampleData;
        let mut session = Session::default();
        assert!(session.visible_pharmacies(&data.pharmacies()).unwrap().is_empty());

        session.set_pharmacy_query("cetirizine");
        assert_eq!(session.visible_pharmacies(&data.pharmacies()).unwrap().len(), 3);

        session.set_pharmacy_query("omeprazole");
        assert!(session.visible_pharmacies(&data.pharmacies()).unwrap().is_empty());
    }
}
