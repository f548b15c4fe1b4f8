//! Nabha Health Core Library
//!
//! Lookup, filtering and localization shared by every screen of the Nabha
//! Health rural healthcare app.
//!
//! # Architecture
//!
//! ```text
//!   RecordSource ──► records ──┐
//!                              ▼
//!   Session ── criterion ──► Entity Filter ──► visible records ──┐
//!      │                                                         ▼
//!      └── language ──────► Localization Resolver ──► labels ──► UI
//!
//!   SyncBackend (simulated) ◄── "Sync" button
//! ```
//!
//! The resolver and the filter are pure and independent of each other. All
//! mutable UI state lives in [`Session`], owned by the caller.
//!
//! # Modules
//!
//! - [`i18n`]: Language, locale tables, typed lookup with key fallback
//! - [`filter`]: Criteria, stable filtering, index-stable status updates
//! - [`models`]: Domain types (Appointment, Medicine, Pharmacy, HealthRecord)
//! - [`data`]: Record sources and the compiled-in sample data
//! - [`session`]: Selected language and per-screen filters
//! - [`suggest`]: Alternative medicine suggestions for empty searches
//! - [`sync`]: Sync backend trait and the simulated implementation
//! - [`config`]: JSON application configuration

pub mod config;
pub mod data;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod session;
pub mod suggest;
pub mod sync;

// Re-export commonly used types
pub use config::AppConfig;
pub use data::{RecordSource, SampleData};
pub use filter::{filter, update_field, Criterion, FilterError, Filterable};
pub use i18n::{Catalog, Language, Resolution};
pub use models::{Appointment, HealthRecord, Medicine, Pharmacy, StockEntry};
pub use session::Session;
pub use sync::{SimulatedSync, SyncBackend, SyncReport};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use models::nearest_upcoming;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NabhaHealthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Sync error: {0}")]
    SyncError(String),
}

impl From<FilterError> for NabhaHealthError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::RecordNotFound { .. } => NabhaHealthError::NotFound(e.to_string()),
            _ => NabhaHealthError::InvalidArgument(e.to_string()),
        }
    }
}

impl From<i18n::I18nError> for NabhaHealthError {
    fn from(e: i18n::I18nError) -> Self {
        match e {
            i18n::I18nError::UnsupportedLanguage(_) => {
                NabhaHealthError::InvalidArgument(e.to_string())
            }
            _ => NabhaHealthError::ConfigError(e.to_string()),
        }
    }
}

impl From<config::ConfigError> for NabhaHealthError {
    fn from(e: config::ConfigError) -> Self {
        NabhaHealthError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for NabhaHealthError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        NabhaHealthError::InvalidArgument(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the core with built-in locales, sample data and default settings.
#[uniffi::export]
pub fn open_core() -> Result<Arc<NabhaHealthCore>, NabhaHealthError> {
    let config = AppConfig::default();
    let core = NabhaHealthCore::new(&config, &SampleData, default_sync(&config))?;
    Ok(Arc::new(core))
}

/// Open the core with settings read from a JSON config file.
#[uniffi::export]
pub fn open_core_with_config(path: String) -> Result<Arc<NabhaHealthCore>, NabhaHealthError> {
    let config = AppConfig::load(&path)?;
    let core = NabhaHealthCore::new(&config, &SampleData, default_sync(&config))?;
    Ok(Arc::new(core))
}

fn default_sync(config: &AppConfig) -> Box<dyn SyncBackend> {
    Box::new(SimulatedSync::new(config.sync_delay()).with_online(config.online))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Session-scoped facade over the resolver and the entity filter.
#[derive(uniffi::Object)]
pub struct NabhaHealthCore {
    catalog: Catalog,
    session: Mutex<Session>,
    appointments: Mutex<Vec<Appointment>>,
    medicines: Vec<Medicine>,
    pharmacies: Vec<Pharmacy>,
    records: Vec<HealthRecord>,
    common_medicines: Vec<String>,
    sync: Box<dyn SyncBackend>,
}

impl NabhaHealthCore {
    /// Build a core from explicit collaborators.
    pub fn new(
        config: &AppConfig,
        source: &dyn RecordSource,
        sync: Box<dyn SyncBackend>,
    ) -> Result<Self, NabhaHealthError> {
        let catalog = config.build_catalog()?;
        tracing::info!(
            language = config.default_language.code(),
            online = sync.is_online(),
            "Opening core"
        );
        Ok(Self {
            catalog,
            session: Mutex::new(Session::new(config.default_language)),
            appointments: Mutex::new(source.appointments()),
            medicines: source.medicines(),
            pharmacies: source.pharmacies(),
            records: source.health_records(),
            common_medicines: source.common_medicines(),
            sync,
        })
    }

    fn current_language(&self) -> Result<Language, NabhaHealthError> {
        Ok(self.session.lock()?.language)
    }
}

#[uniffi::export]
impl NabhaHealthCore {
    // =========================================================================
    // Localization
    // =========================================================================

    /// Display string for a locale key in the session language.
    pub fn translate(&self, key: String) -> Result<String, NabhaHealthError> {
        let language = self.current_language()?;
        Ok(self.catalog.resolve(language, &key).to_string())
    }

    /// Display string with `{name}` placeholders filled in.
    pub fn format_text(
        &self,
        key: String,
        args: HashMap<String, String>,
    ) -> Result<String, NabhaHealthError> {
        let language = self.current_language()?;
        let args: Vec<(&str, &str)> = args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        Ok(self.catalog.format(language, &key, &args))
    }

    /// Current language tag.
    pub fn language(&self) -> Result<String, NabhaHealthError> {
        Ok(self.current_language()?.code().to_string())
    }

    /// Switch language by tag (`en` or `hi`).
    pub fn set_language(&self, tag: String) -> Result<(), NabhaHealthError> {
        let language = Language::parse(&tag)?;
        self.session.lock()?.set_language(language);
        Ok(())
    }

    /// Flip the language; returns the new tag.
    pub fn toggle_language(&self) -> Result<String, NabhaHealthError> {
        let language = self.session.lock()?.toggle_language();
        Ok(language.code().to_string())
    }

    /// Label for the header language toggle.
    pub fn toggle_label(&self) -> Result<String, NabhaHealthError> {
        Ok(self.current_language()?.toggle_label().to_string())
    }

    /// Per-language locale coverage.
    pub fn locale_coverage(&self) -> Vec<FfiLocaleCoverage> {
        self.catalog
            .coverage()
            .locales
            .into_iter()
            .map(|l| l.into())
            .collect()
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Select the appointment tab (`all` or a status) and return the visible list.
    pub fn filter_appointments(
        &self,
        status: String,
    ) -> Result<Vec<FfiAppointment>, NabhaHealthError> {
        let mut session = self.session.lock()?;
        session.select_appointment_status(&status)?;
        let appointments = self.appointments.lock()?;
        let visible = session.visible_appointments(&appointments)?;
        Ok(visible.into_iter().map(|a| a.into()).collect())
    }

    /// Cancel an appointment and return the visible list under the current tab.
    pub fn cancel_appointment(&self, id: String) -> Result<Vec<FfiAppointment>, NabhaHealthError> {
        let session = self.session.lock()?;
        let mut appointments = self.appointments.lock()?;
        *appointments = filter::cancel_appointment(&appointments, &id)?;
        tracing::info!(id = %id, "Appointment cancelled");
        let visible = session.visible_appointments(&appointments)?;
        Ok(visible.into_iter().map(|a| a.into()).collect())
    }

    /// Earliest upcoming appointment, if any.
    pub fn nearest_appointment(&self) -> Result<Option<FfiAppointment>, NabhaHealthError> {
        let appointments = self.appointments.lock()?;
        Ok(nearest_upcoming(&appointments).cloned().map(|a| a.into()))
    }

    // =========================================================================
    // Medicines & Pharmacies
    // =========================================================================

    /// Search medicines by brand or generic name (case-insensitive).
    pub fn search_medicines(&self, query: String) -> Result<Vec<FfiMedicine>, NabhaHealthError> {
        let mut session = self.session.lock()?;
        session.set_medicine_query(query);
        let visible = session.visible_medicines(&self.medicines)?;
        Ok(visible.into_iter().map(|m| m.into()).collect())
    }

    /// Known medicine names resembling a query that matched nothing.
    pub fn suggest_medicines(&self, query: String, limit: u32) -> Vec<String> {
        let names = self
            .medicines
            .iter()
            .map(|m| m.name.as_str())
            .chain(self.pharmacies.iter().flat_map(|p| p.stock.iter().map(|e| e.name.as_str())))
            .chain(self.common_medicines.iter().map(String::as_str));
        suggest::suggest_alternatives(&query, names, limit as usize)
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    /// Quick-pick medicine names for the pharmacy search.
    pub fn common_medicines(&self) -> Vec<String> {
        self.common_medicines.clone()
    }

    /// Pharmacies stocking a matching medicine, each with its matching entries.
    pub fn search_pharmacies(
        &self,
        query: String,
    ) -> Result<Vec<FfiPharmacyResult>, NabhaHealthError> {
        let mut session = self.session.lock()?;
        session.set_pharmacy_query(query);
        let visible = session.visible_pharmacies(&self.pharmacies)?;
        Ok(visible
            .iter()
            .map(|p| FfiPharmacyResult::from_match(p, &session.pharmacy_query))
            .collect())
    }

    // =========================================================================
    // Health Records
    // =========================================================================

    /// Select the record tab (`all` or a type) and return the visible list.
    pub fn filter_health_records(
        &self,
        record_type: String,
    ) -> Result<Vec<FfiHealthRecord>, NabhaHealthError> {
        let mut session = self.session.lock()?;
        session.select_record_type(&record_type)?;
        let visible = session.visible_records(&self.records)?;
        Ok(visible.into_iter().map(|r| r.into()).collect())
    }

    pub fn is_online(&self) -> bool {
        self.sync.is_online()
    }

    /// Report a connectivity change observed by the host (online/offline events).
    pub fn set_online(&self, online: bool) {
        self.sync.set_online(online);
    }

    /// Sync health records. Errors carry the localized message.
    pub fn sync_records(&self) -> Result<FfiSyncReport, NabhaHealthError> {
        let language = self.current_language()?;
        match self.sync.sync(&self.records) {
            Ok(report) => Ok(FfiSyncReport {
                records_synced: report.records_synced as u32,
                cached_offline: report.cached_offline as u32,
                synced_at: report.synced_at.clone(),
                message: self.catalog.resolve(language, report.message_key()).to_string(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Sync failed");
                Err(NabhaHealthError::SyncError(
                    self.catalog.resolve(language, e.message_key()).to_string(),
                ))
            }
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub specialty: String,
    pub appointment_type: String,
    pub status: String,
    /// Locale key of the status label
    pub status_label_key: String,
    pub notes: Option<String>,
    /// Cancel/reschedule/join actions offered
    pub actionable: bool,
}

impl From<Appointment> for FfiAppointment {
    fn from(a: Appointment) -> Self {
        Self {
            actionable: a.is_actionable(),
            id: a.id,
            date: a.date.format("%Y-%m-%d").to_string(),
            time: a.time,
            doctor: a.doctor,
            specialty: a.specialty,
            appointment_type: a.kind.as_str().to_string(),
            status: a.status.as_str().to_string(),
            status_label_key: a.status.label_key().to_string(),
            notes: a.notes,
        }
    }
}

/// FFI-safe medicine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub dosage: String,
    pub price: u32,
    pub available: bool,
    pub availability_label_key: String,
    pub pharmacy: String,
    pub distance: String,
}

impl From<Medicine> for FfiMedicine {
    fn from(m: Medicine) -> Self {
        Self {
            availability_label_key: m.availability_label_key().to_string(),
            id: m.id,
            name: m.name,
            generic_name: m.generic_name,
            dosage: m.dosage,
            price: m.price,
            available: m.available,
            pharmacy: m.pharmacy,
            distance: m.distance,
        }
    }
}

/// FFI-safe stock entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStockEntry {
    pub name: String,
    pub generic: String,
    pub available: bool,
    pub price: u32,
}

impl From<&StockEntry> for FfiStockEntry {
    fn from(e: &StockEntry) -> Self {
        Self {
            name: e.name.clone(),
            generic: e.generic.clone(),
            available: e.available,
            price: e.price,
        }
    }
}

/// A pharmacy search hit with the stock entries that matched.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPharmacyResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub phone: String,
    pub matching_stock: Vec<FfiStockEntry>,
}

impl FfiPharmacyResult {
    fn from_match(pharmacy: &Pharmacy, query: &str) -> Self {
        Self {
            id: pharmacy.id.clone(),
            name: pharmacy.name.clone(),
            address: pharmacy.address.clone(),
            distance: pharmacy.distance.clone(),
            phone: pharmacy.phone.clone(),
            matching_stock: pharmacy
                .matching_stock(query)
                .into_iter()
                .map(FfiStockEntry::from)
                .collect(),
        }
    }
}

/// FFI-safe health record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHealthRecord {
    pub id: String,
    pub date: String,
    pub record_type: String,
    pub type_label_key: String,
    pub title: String,
    pub doctor: String,
    pub description: String,
    pub status: String,
    pub cached_offline: bool,
}

impl From<HealthRecord> for FfiHealthRecord {
    fn from(r: HealthRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.format("%Y-%m-%d").to_string(),
            record_type: r.kind.as_str().to_string(),
            type_label_key: r.kind.label_key().to_string(),
            title: r.title,
            doctor: r.doctor,
            description: r.description,
            status: r.status.as_str().to_string(),
            cached_offline: r.cached_offline,
        }
    }
}

/// FFI-safe sync result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSyncReport {
    pub records_synced: u32,
    pub cached_offline: u32,
    pub synced_at: String,
    /// Localized success message
    pub message: String,
}

/// FFI-safe locale coverage.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLocaleCoverage {
    pub language: String,
    pub defined: u32,
    pub missing_keys: Vec<String>,
    pub coverage_percent: f64,
}

impl From<i18n::LocaleCoverage> for FfiLocaleCoverage {
    fn from(c: i18n::LocaleCoverage) -> Self {
        Self {
            language: c.language.code().to_string(),
            defined: c.defined as u32,
            missing_keys: c.missing_keys,
            coverage_percent: c.coverage_percent,
        }
    }
}
