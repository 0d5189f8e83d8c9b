//! Tests for batch answering and request validation

use crate::Error;
use crate::app::models::{Outcome, PlanRecord, ZipRecord};
use crate::app::services::batch_driver::{
    BatchDriver, BatchStats, validate_requests, validate_zip_code,
};
use crate::app::services::plan_filter::{FilteredPlans, PlanFilter};
use crate::app::services::zip_resolver::ZipResolver;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn requests(zip_codes: &[&str]) -> Vec<String> {
    zip_codes.iter().map(|zip| zip.to_string()).collect()
}

/// Fixture covering each outcome:
/// - 64148: MO 3, rates 245.20 / 245.20 / 250.00 / 300.00 -> 250.00
/// - 67118: KS 6, rates 212.35 / 222.00 -> 222.00
/// - 54923: WI 11 and 15 -> ambiguous
/// - 07184: NJ 1, single rate -> insufficient
fn create_fixture() -> (ZipResolver, FilteredPlans) {
    let resolver = ZipResolver::from_records(&[
        ZipRecord::new("64148", "MO", "29095", "Jackson", "3"),
        ZipRecord::new("67118", "KS", "20095", "Kingman", "6"),
        ZipRecord::new("54923", "WI", "55047", "Green Lake", "11"),
        ZipRecord::new("54923", "WI", "55137", "Waushara", "15"),
        ZipRecord::new("07184", "NJ", "34031", "Passaic", "1"),
    ]);

    let plans = PlanFilter::new("Silver").filter(&[
        PlanRecord::new("a", "MO", "Silver", dec("245.20"), "3"),
        PlanRecord::new("b", "MO", "Silver", dec("245.20"), "3"),
        PlanRecord::new("c", "MO", "Silver", dec("300.00"), "3"),
        PlanRecord::new("d", "MO", "Silver", dec("250"), "3"),
        PlanRecord::new("e", "MO", "Gold", dec("100.00"), "3"),
        PlanRecord::new("f", "KS", "Silver", dec("222.00"), "6"),
        PlanRecord::new("g", "KS", "Silver", dec("212.35"), "6"),
        PlanRecord::new("h", "WI", "Silver", dec("100.00"), "11"),
        PlanRecord::new("i", "WI", "Silver", dec("110.00"), "11"),
        PlanRecord::new("j", "NJ", "Silver", dec("310.00"), "1"),
    ]);

    (resolver, plans)
}

#[test]
fn test_run_answers_each_outcome() {
    let (resolver, plans) = create_fixture();
    let driver = BatchDriver::new(&resolver, &plans);

    let results = driver
        .run(&requests(&["64148", "67118", "54923", "07184", "40813"]))
        .unwrap();

    let texts: Vec<(&str, String)> = results
        .iter()
        .map(|r| (r.zip_code.as_str(), r.rate_text()))
        .collect();

    assert_eq!(
        texts,
        vec![
            ("64148", "250.00".to_string()),
            ("67118", "222.00".to_string()),
            ("54923", String::new()),
            ("07184", String::new()),
            ("40813", String::new()),
        ]
    );
    assert_eq!(results[2].outcome, Outcome::AmbiguousRateArea);
    assert_eq!(results[3].outcome, Outcome::InsufficientRates { available: 1 });
    assert_eq!(results[4].outcome, Outcome::UnknownZip);
}

#[test]
fn test_run_preserves_request_order() {
    let (resolver, plans) = create_fixture();
    let driver = BatchDriver::new(&resolver, &plans);

    let order = ["07184", "64148", "40813", "67118", "64148", "54923"];
    let results = driver.run(&requests(&order)).unwrap();

    let zip_codes: Vec<&str> = results.iter().map(|r| r.zip_code.as_str()).collect();
    assert_eq!(zip_codes, order);
    assert_eq!(results[1].rate_text(), results[4].rate_text());
}

#[test]
fn test_run_rejects_whole_batch_on_malformed_zip() {
    let (resolver, plans) = create_fixture();
    let driver = BatchDriver::new(&resolver, &plans);

    let error = driver
        .run(&requests(&["64148", "1234", "67118"]))
        .unwrap_err();

    assert!(matches!(error, Error::MalformedZipCode { ref zip_code } if zip_code == "1234"));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_run_empty_batch() {
    let (resolver, plans) = create_fixture();
    let driver = BatchDriver::new(&resolver, &plans);

    assert!(driver.run(&[]).unwrap().is_empty());
}

#[test]
fn test_validate_zip_code_shapes() {
    assert!(validate_zip_code("64148").is_ok());
    assert!(validate_zip_code("07184").is_ok());

    for bad in ["1234", "123456", "abcde", "6414a", "", " 6414", "64-48", "６４１４８"] {
        assert!(
            validate_zip_code(bad).is_err(),
            "expected '{}' to be rejected",
            bad
        );
    }
}

#[test]
fn test_validate_requests_reports_first_offender() {
    let error = validate_requests(&requests(&["64148", "abcde", "1234"])).unwrap_err();
    assert!(error.to_string().contains("abcde"));
}

#[test]
fn test_batch_stats() {
    let (resolver, plans) = create_fixture();
    let driver = BatchDriver::new(&resolver, &plans);

    let results = driver
        .run(&requests(&["64148", "67118", "54923", "07184", "40813"]))
        .unwrap();
    let stats = BatchStats::from_results(&results);

    assert_eq!(stats.requests, 5);
    assert_eq!(stats.determined, 2);
    assert_eq!(stats.unknown, 1);
    assert_eq!(stats.ambiguous, 1);
    assert_eq!(stats.insufficient_rates, 1);
    assert_eq!(stats.empty(), 3);
    assert!((stats.answer_rate() - 40.0).abs() < f64::EPSILON);
    assert!(stats.summary().starts_with("5 requests, 2 answered"));
}

#[test]
fn test_batch_stats_empty() {
    let stats = BatchStats::from_results(&[]);
    assert_eq!(stats.answer_rate(), 0.0);
    assert_eq!(stats.empty(), 0);
}
