// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use premia_domain::{PremiumRules, StaffPremiumSummary, UNKNOWN_STAFF_DISPLAY_NAME};
use premia_persistence::Persistence;
use rust_decimal::Decimal;

use crate::tests::helpers::{
    collection_request, create_seeded_persistence, create_test_master, create_test_staff,
    publication_request, registration_request, seed_entry, test_today,
};
use crate::{PremiumReportResponse, ReportQuery, export_premium_csv, premium_report};

/// bia: 3 cash trademarks and 12 publications in March, 5 trademarks in
/// February. ana: one 1200/2 collection in March. caio: nothing.
fn create_report_persistence() -> Persistence {
    let mut persistence: Persistence = create_seeded_persistence();
    seed_entry(
        &mut persistence,
        registration_request(Some("bia"), "2026-03-10", 3),
    );
    seed_entry(
        &mut persistence,
        publication_request(Some("bia"), "2026-03-12", 12),
    );
    seed_entry(
        &mut persistence,
        collection_request(Some("ana"), "2026-03-16", 2, Decimal::from(1200)),
    );
    seed_entry(
        &mut persistence,
        registration_request(Some("bia"), "2026-02-20", 5),
    );
    persistence
}

fn row<'a>(report: &'a PremiumReportResponse, staff_id: &str) -> &'a StaffPremiumSummary {
    report
        .staff
        .iter()
        .find(|row| row.staff_id.value() == staff_id)
        .unwrap()
}

#[test]
fn test_master_team_report_for_this_month() {
    let mut persistence: Persistence = create_report_persistence();
    let rules: PremiumRules = PremiumRules::default();

    let report: PremiumReportResponse = premium_report(
        &mut persistence,
        &ReportQuery::default(),
        test_today(),
        &rules,
        &create_test_master(),
    )
    .unwrap();

    assert_eq!(report.summary.registration_premium, Decimal::from(150));
    assert_eq!(report.summary.publication_premium, Decimal::from(600));
    assert_eq!(report.summary.collection_premium, Decimal::from(100));
    assert_eq!(report.summary.pub_milestone.bonus, Decimal::from(100));
    assert_eq!(report.summary.collection_milestone.milestones, 0);
    assert_eq!(report.summary.total_premium, Decimal::from(950));

    assert_eq!(report.staff.len(), 3);
    assert_eq!(row(&report, "ana").total_premium, Decimal::from(100));
    assert_eq!(row(&report, "ana").collection_count, 1);
    assert_eq!(row(&report, "bia").total_premium, Decimal::from(850));
    assert_eq!(row(&report, "bia").registration_count, 3);
    assert_eq!(row(&report, "bia").publication_count, 12);
    assert_eq!(row(&report, "caio").total_premium, Decimal::ZERO);
}

#[test]
fn test_staff_rows_sum_to_team_total() {
    let mut persistence: Persistence = create_report_persistence();

    let report: PremiumReportResponse = premium_report(
        &mut persistence,
        &ReportQuery::default(),
        test_today(),
        &PremiumRules::default(),
        &create_test_master(),
    )
    .unwrap();
    let staff_total: Decimal = report.staff.iter().map(|row| row.total_premium).sum();

    assert_eq!(staff_total, report.summary.total_premium);
    assert!(
        report
            .staff
            .iter()
            .all(|row| row.display_name != UNKNOWN_STAFF_DISPLAY_NAME)
    );
}

#[test]
fn test_staff_report_forced_to_self() {
    let mut persistence: Persistence = create_report_persistence();

    let report: PremiumReportResponse = premium_report(
        &mut persistence,
        &ReportQuery {
            user: Some(String::from("all")),
            ..ReportQuery::default()
        },
        test_today(),
        &PremiumRules::default(),
        &create_test_staff(),
    )
    .unwrap();

    assert_eq!(report.user_filter, "bia");
    assert_eq!(report.summary.total_premium, Decimal::from(850));
    assert_eq!(report.staff.len(), 1);
    assert_eq!(report.staff[0].staff_id.value(), "bia");
}

#[test]
fn test_month_navigation_report() {
    let mut persistence: Persistence = create_report_persistence();

    let report: PremiumReportResponse = premium_report(
        &mut persistence,
        &ReportQuery {
            year: Some(2026),
            month: Some(2),
            ..ReportQuery::default()
        },
        test_today(),
        &PremiumRules::default(),
        &create_test_master(),
    )
    .unwrap();

    assert_eq!(report.period_start, "2026-02-01");
    assert_eq!(report.period_end, "2026-02-28");
    assert_eq!(report.summary.total_registration_units, 5);
    assert_eq!(report.summary.total_premium, Decimal::from(250));
}

#[test]
fn test_today_report_is_empty_on_quiet_day() {
    let mut persistence: Persistence = create_report_persistence();

    let report: PremiumReportResponse = premium_report(
        &mut persistence,
        &ReportQuery {
            period: Some(String::from("today")),
            ..ReportQuery::default()
        },
        test_today(),
        &PremiumRules::default(),
        &create_test_master(),
    )
    .unwrap();

    assert_eq!(report.summary.total_premium, Decimal::ZERO);
    assert_eq!(report.summary.pub_milestone.next_at, 10);
}

#[test]
fn test_csv_export_has_row_per_member() {
    let mut persistence: Persistence = create_report_persistence();

    let csv: String = export_premium_csv(
        &mut persistence,
        &ReportQuery::default(),
        test_today(),
        &PremiumRules::default(),
        &create_test_master(),
    )
    .unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("staff_id,display_name"));
    assert!(lines.contains(&"bia,Bia Lima,3,12,0,100,0,850"));
}
