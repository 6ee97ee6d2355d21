//! Integration tests for maintenance task outcome reporting.

use cafe_desk_admin::tasks::{NO_ROWS, TaskReport};

fn outcomes() -> Vec<Result<Vec<String>, String>> {
    vec![
        Ok(vec!["users".to_owned(), "shops".to_owned()]),
        Ok(Vec::new()),
        Err("connection refused".to_owned()),
        Err(String::new()),
    ]
}

#[test]
fn test_every_outcome_yields_exactly_one_report_kind() {
    for outcome in outcomes() {
        let expect_success = outcome.is_ok();
        let report = TaskReport::from_result("db tables", outcome);

        assert_eq!(report.is_success(), expect_success);
        match report {
            TaskReport::Succeeded { lines, .. } => assert!(!lines.is_empty()),
            TaskReport::Failed { task, .. } => assert_eq!(task, "db tables"),
        }
    }
}

#[test]
fn test_empty_success_still_reports_a_line() {
    let report = TaskReport::from_result::<String>("shops list", Ok(Vec::new()));
    assert_eq!(
        report,
        TaskReport::Succeeded {
            task: "shops list".to_owned(),
            lines: vec![NO_ROWS.to_owned()],
        }
    );
}

#[test]
fn test_failure_keeps_error_message() {
    let report = TaskReport::from_result::<String>(
        "db ping",
        Err("database error: pool timed out".to_owned()),
    );
    assert_eq!(
        report,
        TaskReport::Failed {
            task: "db ping".to_owned(),
            message: "database error: pool timed out".to_owned(),
        }
    );
    report.emit();
}
