//! SLCSP determination workflow
//!
//! Loads the ZIP and plan tables, builds the resolver and the filtered plans
//! once, answers the requests, echoes the answer table to standard output and,
//! in request-file mode, writes it to the output table.

use super::shared::RunSummary;
use crate::app::models::SlcspResult;
use crate::app::services::batch_driver::{BatchDriver, BatchStats};
use crate::app::services::plan_filter::PlanFilter;
use crate::app::services::result_writer::{render_results, write_results};
use crate::app::services::self_test;
use crate::app::services::table_reader::{read_plan_records, read_requests, read_zip_records};
use crate::app::services::zip_resolver::ZipResolver;
use crate::config::{RunMode, SlcspConfig};
use crate::{Error, Result};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Answers of a completed run
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<SlcspResult>,
    pub summary: RunSummary,
}

/// Run the SLCSP determination for the given configuration
///
/// The answer table is printed to `out`. Unreadable input and malformed ZIP
/// codes end the run before the output table is touched.
pub fn run_determine<W: Write>(config: &SlcspConfig, out: &mut W) -> Result<RunOutput> {
    let start_time = Instant::now();
    config.validate()?;

    info!("Starting SLCSP determination ({:?})", config.mode);

    let zip_records = read_zip_records(&config.zips_path)?;
    let resolver = ZipResolver::from_records(&zip_records);

    let plan_filter = PlanFilter::new(config.metal_level.clone());
    let plan_records = read_plan_records(&config.plans_path, &plan_filter)?;
    let plans = plan_filter.filter(&plan_records);

    let requests = match &config.mode {
        RunMode::RequestFile => read_requests(&config.requests_path)?,
        RunMode::SingleZip(zip_code) => vec![zip_code.clone()],
    };
    debug!("Answering {} request(s)", requests.len());

    let results = BatchDriver::new(&resolver, &plans).run(&requests)?;

    out.write_all(render_results(&results).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| Error::output_write_failure("standard output", e))?;

    let output_written = if config.mode.persists_output() {
        write_results(&config.output_path, &results)?;
        Some(config.output_path.clone())
    } else {
        None
    };

    let self_test_passed = if config.self_test {
        let report = self_test::compare(&config.output_path, &config.solution_path)?;
        out.write_all(report.render().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| Error::output_write_failure("standard output", e))?;
        Some(report.passed())
    } else {
        None
    };

    let summary = RunSummary {
        zip_rows: zip_records.len(),
        known_zips: resolver.known_count(),
        unique_zips: resolver.unique_count(),
        ambiguous_zips: resolver.ambiguous_count(),
        plan_rows: plan_records.len(),
        price_points: plans.len(),
        batch: BatchStats::from_results(&results),
        output_written,
        self_test_passed,
        processing_time: start_time.elapsed(),
    };
    summary.log();

    Ok(RunOutput { results, summary })
}
