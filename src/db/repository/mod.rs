//! Repository layer — entity-scoped database operations.
//!
//! All functions take a borrowed `Connection` and return `DatabaseError`;
//! callers own the connection/transaction scope.

mod inpatient;
mod masters;
mod outpatient;
mod staff;

pub use inpatient::*;
pub use masters::*;
pub use outpatient::*;
pub use staff::*;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::Connection;

    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::models::enums::{PeriodGranularity, VisitType};
    use crate::models::{Department, InpatientRecord, OutpatientRecord, Ward};

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dept(id: &str, name: &str, seq: i64, is_display: bool, color: Option<&str>) -> Department {
        Department {
            id: id.into(),
            name: name.into(),
            seq,
            is_display,
            color: color.map(Into::into),
        }
    }

    fn seed_masters(conn: &Connection) {
        insert_department(conn, &dept("01", "Internal Medicine", 1, true, Some("#2563eb"))).unwrap();
        insert_department(conn, &dept("02", "Pediatrics", 2, true, Some("#16a34a"))).unwrap();
        insert_department(conn, &dept("03", "Orthopedics", 3, true, None)).unwrap();
        insert_department(conn, &dept("99", "Trial Clinic", 0, false, None)).unwrap();
    }

    fn add_outpatient(conn: &Connection, d: &str, dept_id: &str, first: i64, repeat: i64) {
        insert_outpatient_day(
            conn,
            &OutpatientRecord {
                day: day(d),
                department_id: dept_id.into(),
                visit_type: VisitType::First,
                patient_count: first,
            },
        )
        .unwrap();
        insert_outpatient_day(
            conn,
            &OutpatientRecord {
                day: day(d),
                department_id: dept_id.into(),
                visit_type: VisitType::Repeat,
                patient_count: repeat,
            },
        )
        .unwrap();
    }

    fn add_inpatient(conn: &Connection, d: &str, dept_id: &str, ward: &str, admissions: i64) {
        insert_inpatient_day(
            conn,
            &InpatientRecord {
                day: day(d),
                department_id: dept_id.into(),
                ward_name: ward.into(),
                admissions,
                discharges: 1,
                transfers_in: 0,
                transfers_out: 0,
            },
        )
        .unwrap();
    }

    #[test]
    fn displayed_departments_filtered_and_ordered() {
        let conn = test_db();
        seed_masters(&conn);

        let departments = list_displayed_departments(&conn).unwrap();
        let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
        // Hidden "Trial Clinic" excluded even though its seq sorts first.
        assert_eq!(names, ["Internal Medicine", "Pediatrics", "Orthopedics"]);
    }

    #[test]
    fn displayed_departments_tie_broken_by_id() {
        let conn = test_db();
        insert_department(&conn, &dept("b", "Beta", 1, true, None)).unwrap();
        insert_department(&conn, &dept("a", "Alpha", 1, true, None)).unwrap();

        let departments = list_displayed_departments(&conn).unwrap();
        let ids: Vec<&str> = departments.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn displayed_wards_filtered_and_ordered() {
        let conn = test_db();
        for (id, name, seq, shown) in [
            ("w3", "Ward 3F", 1, true),
            ("w4", "Ward 4F", 2, true),
            ("wx", "Overflow", 9, false),
        ] {
            insert_ward(
                &conn,
                &Ward {
                    id: id.into(),
                    name: name.into(),
                    seq,
                    is_display: shown,
                    color: None,
                },
            )
            .unwrap();
        }

        let wards = list_displayed_wards(&conn).unwrap();
        let names: Vec<&str> = wards.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Ward 3F", "Ward 4F"]);
    }

    #[test]
    fn department_color_missing_row_and_null_both_none() {
        let conn = test_db();
        seed_masters(&conn);

        assert_eq!(
            department_color(&conn, "Internal Medicine").unwrap(),
            Some("#2563eb".to_string())
        );
        assert_eq!(department_color(&conn, "Orthopedics").unwrap(), None);
        assert_eq!(department_color(&conn, "No Such Dept").unwrap(), None);
    }

    #[test]
    fn day_bounds_empty_table_is_none() {
        let conn = test_db();
        assert!(outpatient_day_bounds(&conn).unwrap().is_none());
    }

    #[test]
    fn day_bounds_min_and_max() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-02-10", "01", 5, 10);
        add_outpatient(&conn, "2025-01-03", "01", 5, 10);
        add_outpatient(&conn, "2025-03-20", "02", 5, 10);

        let (min, max) = outpatient_day_bounds(&conn).unwrap().unwrap();
        assert_eq!(min, "2025-01-03");
        assert_eq!(max, "2025-03-20");
    }

    #[test]
    fn totals_by_period_monthly_buckets() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 10, 15);
        add_outpatient(&conn, "2025-01-02", "02", 20, 15);
        add_outpatient(&conn, "2025-02-01", "01", 7, 3);

        let totals = totals_by_period(&conn, &PeriodGranularity::Monthly, "2025-01-01", "2025-12-31")
            .unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].label, "2025-01");
        assert_eq!(totals[0].total, 60);
        assert_eq!(totals[1].label, "2025-02");
        assert_eq!(totals[1].total, 10);
    }

    #[test]
    fn totals_by_period_respects_range() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 10, 0);
        add_outpatient(&conn, "2025-01-05", "01", 20, 0);
        add_outpatient(&conn, "2025-01-09", "01", 40, 0);

        let totals =
            totals_by_period(&conn, &PeriodGranularity::Daily, "2025-01-02", "2025-01-08").unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].label, "2025-01-05");
        assert_eq!(totals[0].total, 20);
    }

    #[test]
    fn per_department_totals_exclude_hidden() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 10, 10);
        add_outpatient(&conn, "2025-01-01", "99", 50, 50);

        let rows = totals_by_period_and_department(
            &conn,
            &PeriodGranularity::Daily,
            "2025-01-01",
            "2025-12-31",
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department, "Internal Medicine");
        assert_eq!(rows[0].total, 20);
        assert_eq!(rows[0].color.as_deref(), Some("#2563eb"));
    }

    #[test]
    fn per_department_totals_ordered_by_period_then_seq() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-02", "02", 1, 1);
        add_outpatient(&conn, "2025-01-01", "02", 2, 2);
        add_outpatient(&conn, "2025-01-01", "01", 3, 3);

        let rows = totals_by_period_and_department(
            &conn,
            &PeriodGranularity::Daily,
            "2025-01-01",
            "2025-12-31",
        )
        .unwrap();
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.label.as_str(), r.department.as_str()))
            .collect();
        assert_eq!(
            keys,
            [
                ("2025-01-01", "Internal Medicine"),
                ("2025-01-01", "Pediatrics"),
                ("2025-01-02", "Pediatrics"),
            ]
        );
    }

    #[test]
    fn single_department_totals_by_name() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 10, 20);
        add_outpatient(&conn, "2025-01-01", "02", 99, 99);

        let totals = totals_by_period_for_department(
            &conn,
            &PeriodGranularity::Daily,
            "Internal Medicine",
            "2025-01-01",
            "2025-12-31",
        )
        .unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, 30);
    }

    #[test]
    fn single_department_unknown_name_is_empty() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 10, 20);

        let totals = totals_by_period_for_department(
            &conn,
            &PeriodGranularity::Daily,
            "No Such Dept",
            "2025-01-01",
            "2025-12-31",
        )
        .unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn latest_admissions_snapshot_uses_most_recent_day() {
        let conn = test_db();
        seed_masters(&conn);
        add_inpatient(&conn, "2025-01-01", "01", "Ward 3F", 100);
        add_inpatient(&conn, "2025-01-02", "01", "Ward 3F", 7);
        add_inpatient(&conn, "2025-01-02", "01", "Ward 4F", 5);
        add_inpatient(&conn, "2025-01-02", "02", "Ward 3F", 3);
        add_inpatient(&conn, "2025-01-02", "99", "Ward 3F", 50);

        let totals = latest_admissions_by_department(&conn).unwrap();
        // Older day and the hidden department are both excluded; wards sum.
        assert_eq!(
            totals,
            [
                ("Internal Medicine".to_string(), 12),
                ("Pediatrics".to_string(), 3),
            ]
        );
    }

    #[test]
    fn latest_admissions_snapshot_empty_table() {
        let conn = test_db();
        seed_masters(&conn);
        assert!(latest_admissions_by_department(&conn).unwrap().is_empty());
    }

    #[test]
    fn fact_insert_requires_known_department() {
        let conn = test_db();
        seed_masters(&conn);
        let result = insert_outpatient_day(
            &conn,
            &OutpatientRecord {
                day: day("2025-01-01"),
                department_id: "nope".into(),
                visit_type: VisitType::First,
                patient_count: 1,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn clear_fact_tables_reports_counts() {
        let conn = test_db();
        seed_masters(&conn);
        add_outpatient(&conn, "2025-01-01", "01", 1, 1);
        add_inpatient(&conn, "2025-01-01", "01", "Ward 3F", 1);

        assert_eq!(clear_outpatient(&conn).unwrap(), 2);
        assert_eq!(clear_inpatient(&conn).unwrap(), 1);
        assert_eq!(count_outpatient_rows(&conn).unwrap(), 0);
        assert_eq!(count_inpatient_rows(&conn).unwrap(), 0);
    }
}
