//! Tests for input table loading

use crate::Error;
use crate::app::services::plan_filter::PlanFilter;
use crate::app::services::table_reader::{read_plan_records, read_requests, read_zip_records};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::TempDir;

/// Write a table into the temporary directory and return its path
pub fn write_table(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_zip_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "zips.csv",
        "zipcode,state,county_code,name,rate_area\n\
         36749,AL,01001,Autauga,11\n\
         36703,AL,01001,Autauga,11\n\
         36703,AL,01047,Dallas,13\n",
    );

    let records = read_zip_records(&path).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].zip_code, "36749");
    assert_eq!(records[0].state, "AL");
    assert_eq!(records[0].county_code, "01001");
    assert_eq!(records[0].name, "Autauga");
    assert_eq!(records[2].rating_area, "13");
}

#[test]
fn test_read_zip_records_keeps_leading_zeros() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "zips.csv",
        "zipcode,state,county_code,name,rate_area\n07184,NJ,34031,Passaic,1\n",
    );

    let records = read_zip_records(&path).unwrap();
    assert_eq!(records[0].zip_code, "07184");
}

#[test]
fn test_read_plan_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "plans.csv",
        "plan_id,state,metal_level,rate,rate_area\n\
         74449NR9870320,GA,Silver,298.62,7\n\
         26325VH2723968,FL,Gold,421.43,60\n\
         48129MC6540210,FL,Silver,312.07,60\n",
    );

    let plans = read_plan_records(&path, &PlanFilter::new("Silver")).unwrap();

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].plan_id, "74449NR9870320");
    assert_eq!(plans[0].metal_level, "Silver");
    assert_eq!(plans[0].rate, Decimal::from_str("298.62").unwrap());
    assert_eq!(plans[1].rating_area, "60");
}

#[test]
fn test_other_metal_levels_skip_rate_parsing() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "plans.csv",
        "plan_id,state,metal_level,rate,rate_area\n\
         MO1,MO,Silver,100.00,3\n\
         MO2,MO,Silver,150.00,3\n\
         MO3,MO,Gold,,3\n\
         MO4,MO,Bronze,n/a,3\n",
    );

    let plans = read_plan_records(&path, &PlanFilter::new("Silver")).unwrap();

    assert_eq!(plans.len(), 2);
    assert!(plans.iter().all(|plan| plan.metal_level == "Silver"));
}

#[test]
fn test_bad_rate_fails_only_for_selected_metal_level() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "plans.csv",
        "plan_id,state,metal_level,rate,rate_area\nMO1,MO,Silver,100.00,3\nMO3,MO,Gold,,3\n",
    );

    let error = read_plan_records(&path, &PlanFilter::new("Gold")).unwrap_err();
    assert!(matches!(error, Error::CsvParsing { .. }));
    assert!(error.to_string().contains("line 3"));
}

#[test]
fn test_read_plan_records_rejects_bad_rate() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "plans.csv",
        "plan_id,state,metal_level,rate,rate_area\nX1,GA,Silver,cheap,7\n",
    );

    let error = read_plan_records(&path, &PlanFilter::new("Silver")).unwrap_err();
    assert!(matches!(error, Error::CsvParsing { .. }));
    assert!(error.to_string().contains("cheap"));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_read_plan_records_rejects_short_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "plans.csv",
        "plan_id,state,metal_level,rate,rate_area\nX1,GA,Silver\n",
    );

    let error = read_plan_records(&path, &PlanFilter::new("Silver")).unwrap_err();
    assert!(matches!(error, Error::CsvParsing { .. }));
}

#[test]
fn test_read_requests_ignores_rate_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(
        temp_dir.path(),
        "slcsp.csv",
        "zipcode,rate\n64148,\n67118,212.35\n40813,\n",
    );

    let requests = read_requests(&path).unwrap();
    assert_eq!(requests, vec!["64148", "67118", "40813"]);
}

#[test]
fn test_header_only_table_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(temp_dir.path(), "slcsp.csv", "zipcode,rate\n");

    assert!(read_requests(&path).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_unreadable_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist.csv");

    let error = read_zip_records(&path).unwrap_err();
    assert!(matches!(error, Error::InputUnreadable { .. }));
    assert_eq!(error.exit_code(), 1);
}
