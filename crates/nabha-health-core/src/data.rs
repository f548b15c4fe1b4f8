//! Record sources for the list screens.
//!
//! Screens are agnostic to where records come from; they ask a
//! [`RecordSource`]. [`SampleData`] serves the compiled-in sample set.

use chrono::NaiveDate;

use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, HealthRecord, Medicine, Pharmacy,
    RecordStatus, RecordType, StockEntry,
};

/// Supplier of the record collections shown by each screen.
pub trait RecordSource {
    fn appointments(&self) -> Vec<Appointment>;
    fn medicines(&self) -> Vec<Medicine>;
    fn pharmacies(&self) -> Vec<Pharmacy>;
    fn health_records(&self) -> Vec<HealthRecord>;
    /// Quick-pick medicine names offered above the pharmacy search box.
    fn common_medicines(&self) -> Vec<String>;
}

/// The compiled-in sample data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn stock(name: &str, generic: &str, available: bool, price: u32) -> StockEntry {
    StockEntry {
        name: name.into(),
        generic: generic.into(),
        available,
        price,
    }
}

impl RecordSource for SampleData {
    fn appointments(&self) -> Vec<Appointment> {
        vec![
            Appointment {
                id: "1".into(),
                date: date(2024, 1, 20),
                time: "10:00 AM".into(),
                doctor: "Dr. Rajesh Kumar".into(),
                specialty: "General Physician".into(),
                kind: AppointmentType::Video,
                status: AppointmentStatus::Upcoming,
                notes: Some("Follow-up for blood pressure medication".into()),
            },
            Appointment {
                id: "2".into(),
                date: date(2024, 1, 18),
                time: "02:00 PM".into(),
                doctor: "Dr. Priya Sharma".into(),
                specialty: "General Physician".into(),
                kind: AppointmentType::Physical,
                status: AppointmentStatus::Completed,
                notes: Some("Routine health checkup".into()),
            },
            Appointment {
                id: "3".into(),
                date: date(2024, 1, 15),
                time: "11:00 AM".into(),
                doctor: "Dr. Amit Singh".into(),
                specialty: "Orthopedist".into(),
                kind: AppointmentType::Video,
                status: AppointmentStatus::Completed,
                notes: Some("Knee pain consultation".into()),
            },
        ]
    }

    fn medicines(&self) -> Vec<Medicine> {
        vec![
            Medicine {
                id: "1".into(),
                name: "Paracetamol 500mg".into(),
                generic_name: "Paracetamol".into(),
                dosage: "10 tablets".into(),
                price: 15,
                available: true,
                pharmacy: "Nabha Medical Store".into(),
                distance: "0.5 km".into(),
            },
            Medicine {
                id: "2".into(),
                name: "Amoxicillin 250mg".into(),
                generic_name: "Amoxicillin".into(),
                dosage: "10 capsules".into(),
                price: 45,
                available: true,
                pharmacy: "Baddi Pharmacy".into(),
                distance: "2.1 km".into(),
            },
            Medicine {
                id: "3".into(),
                name: "Cetirizine 10mg".into(),
                generic_name: "Cetirizine".into(),
                dosage: "10 tablets".into(),
                price: 25,
                available: false,
                pharmacy: "Rural Health Center".into(),
                distance: "1.2 km".into(),
            },
        ]
    }

    fn pharmacies(&self) -> Vec<Pharmacy> {
        vec![
            Pharmacy {
                id: "1".into(),
                name: "Nabha Medical Store".into(),
                address: "Near Civil Hospital, Nabha".into(),
                distance: "0.5 km".into(),
                phone: "+91 98765 43210".into(),
                stock: vec![
                    stock("Paracetamol 500mg", "Paracetamol", true, 15),
                    stock("Amoxicillin 250mg", "Amoxicillin", true, 45),
                    stock("Cetirizine 10mg", "Cetirizine", false, 0),
                ],
            },
            Pharmacy {
                id: "2".into(),
                name: "Baddi Pharmacy".into(),
                address: "Main Market, Baddi".into(),
                distance: "2.1 km".into(),
                phone: "+91 98765 43211".into(),
                stock: vec![
                    stock("Paracetamol 500mg", "Paracetamol", true, 18),
                    stock("Amoxicillin 250mg", "Amoxicillin", false, 0),
                    stock("Cetirizine 10mg", "Cetirizine", true, 25),
                ],
            },
            Pharmacy {
                id: "3".into(),
                name: "Rural Health Center".into(),
                address: "Village Center, Nabha".into(),
                distance: "1.2 km".into(),
                phone: "+91 98765 43212".into(),
                stock: vec![
                    stock("Paracetamol 500mg", "Paracetamol", true, 12),
                    stock("Amoxicillin 250mg", "Amoxicillin", true, 40),
                    stock("Cetirizine 10mg", "Cetirizine", true, 20),
                ],
            },
        ]
    }

    fn health_records(&self) -> Vec<HealthRecord> {
        vec![
            HealthRecord {
                id: "1".into(),
                date: date(2024, 1, 15),
                kind: RecordType::Consultation,
                title: "General Health Checkup".into(),
                doctor: "Dr. Rajesh Kumar".into(),
                description: "Routine health checkup, blood pressure normal, weight stable".into(),
                status: RecordStatus::Completed,
                cached_offline: true,
            },
            HealthRecord {
                id: "2".into(),
                date: date(2024, 1, 10),
                kind: RecordType::LabTest,
                title: "Blood Sugar Test".into(),
                doctor: "Dr. Priya Sharma".into(),
                description: "Fasting blood sugar: 95 mg/dL (Normal)".into(),
                status: RecordStatus::Completed,
                cached_offline: true,
            },
            HealthRecord {
                id: "3".into(),
                date: date(2024, 1, 8),
                kind: RecordType::Prescription,
                title: "Medication for Fever".into(),
                doctor: "Dr. Amit Singh".into(),
                description: "Paracetamol 500mg - 3 times daily for 3 days".into(),
                status: RecordStatus::Completed,
                cached_offline: true,
            },
            HealthRecord {
                id: "4".into(),
                date: date(2024, 1, 20),
                kind: RecordType::Consultation,
                title: "Follow-up Appointment".into(),
                doctor: "Dr. Rajesh Kumar".into(),
                description: "Follow-up for blood pressure medication".into(),
                status: RecordStatus::Scheduled,
                cached_offline: false,
            },
        ]
    }

    fn common_medicines(&self) -> Vec<String> {
        [
            "Paracetamol 500mg",
            "Amoxicillin 250mg",
            "Cetirizine 10mg",
            "Omeprazole 20mg",
            "Metformin 500mg",
            "Amlodipine 5mg",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
