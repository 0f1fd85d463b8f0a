use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::VisitType;

/// One day of inpatient movement for a department/ward pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InpatientRecord {
    pub day: NaiveDate,
    pub department_id: String,
    pub ward_name: String,
    pub admissions: i64,
    pub discharges: i64,
    pub transfers_in: i64,
    pub transfers_out: i64,
}

/// One day of outpatient visits for a department/visit-type pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutpatientRecord {
    pub day: NaiveDate,
    pub department_id: String,
    pub visit_type: VisitType,
    pub patient_count: i64,
}
