// ============================================================================
// mpf-component-cli/src/commands/run.rs
// ============================================================================
//
// RUN COMMAND: Implementation of the 'run' subcommand
//
// Builds one job from the arguments, brackets it with the component's
// init/close lifecycle, and collects the detections into a JSON report.

// ---- Internal crate imports ----
use crate::cli::{MediaType, RunArgs};
use crate::error::{CliError, CliResult};
use crate::output;

// ---- External crate imports ----
use mpf_component_core::{
    AdapterConfig, AudioJob, DataType, DetectionComponent, DetectionResult, GenericJob, ImageJob, JobHeader,
    Properties, VideoJob, expand_env_vars,
};
use log::{debug, info, warn};
use serde::Serialize;

// ---- Standard library imports ----
use std::path::PathBuf;

/// Results of a single job.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub job_name: String,
    pub data_type: DataType,
    pub detection_type: String,
    pub result_count: usize,
    pub results: serde_json::Value,
}

/// Runs the job described by `args` and prints the report to stdout.
pub fn execute(args: &RunArgs) -> CliResult<()> {
    let report = run_job(args)?;
    output::print_json(&report)
}

/// Runs the job described by `args` and returns its report.
pub fn run_job(args: &RunArgs) -> CliResult<RunReport> {
    let config = match args.frame_range_policy {
        Some(policy) => AdapterConfig::new().frame_range_policy(policy),
        None => AdapterConfig::from_env(),
    };
    debug!("Frame range policy: {}", config.frame_range_policy);
    let mut component = args.component.build(config);

    if let Some(dir) = &args.run_dir {
        let expanded = expand_env_vars(dir);
        info!("Run directory: {}", expanded);
        component.set_run_directory(PathBuf::from(expanded));
    }

    let data_type = args.media_type.data_type();
    if !component.supports(data_type) {
        warn!(
            "Component '{}' does not support {} jobs",
            args.component.name(),
            data_type
        );
    }

    component.init()?;
    let detected = detect(component.as_ref(), args);
    let closed = component.close();
    let (result_count, results) = settle(detected, closed)?;

    info!(
        "{}: {} result(s) from {} ({})",
        args.job_name,
        result_count,
        args.component.name(),
        component.detection_type()
    );

    Ok(RunReport {
        job_name: args.job_name.clone(),
        data_type,
        detection_type: component.detection_type().to_string(),
        result_count,
        results,
    })
}

fn detect(component: &dyn DetectionComponent, args: &RunArgs) -> CliResult<(usize, serde_json::Value)> {
    let header = JobHeader::new(
        args.job_name.clone(),
        args.uri.clone(),
        args.job_properties.iter().cloned().collect::<Properties>(),
        args.media_properties.iter().cloned().collect::<Properties>(),
    );

    match args.media_type {
        MediaType::Image => {
            let locations = component.get_detections_from_image(&ImageJob::new(header))?;
            Ok((locations.len(), serde_json::to_value(locations)?))
        }
        MediaType::Video => {
            let (start, stop) = required_range(args, "frame")?;
            let tracks = component.get_detections_from_video(&VideoJob::new(header, start, stop))?;
            Ok((tracks.len(), serde_json::to_value(tracks)?))
        }
        MediaType::Audio => {
            let (start, stop) = required_range(args, "time")?;
            let tracks = component.get_detections_from_audio(&AudioJob::new(header, start, stop))?;
            Ok((tracks.len(), serde_json::to_value(tracks)?))
        }
        MediaType::Generic => {
            let tracks = component.get_detections_from_generic(&GenericJob::new(header))?;
            Ok((tracks.len(), serde_json::to_value(tracks)?))
        }
    }
}

/// Combines the detection outcome with the result of `close`. A detection
/// failure takes precedence; a close failure after it is only logged.
fn settle<T>(detected: CliResult<T>, closed: DetectionResult<()>) -> CliResult<T> {
    match (detected, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err.into()),
        (Err(detect_err), Err(close_err)) => {
            warn!("Component close failed after detection error: {}", close_err);
            Err(detect_err)
        }
        (Err(detect_err), Ok(())) => Err(detect_err),
    }
}

fn required_range(args: &RunArgs, unit: &str) -> CliResult<(i32, i32)> {
    match (args.start, args.stop) {
        (Some(start), Some(stop)) => Ok((start, stop)),
        _ => Err(CliError::InvalidArgument(format!(
            "--start and --stop are required for {} jobs ({unit} range)",
            args.media_type.data_type()
        ))),
    }
}
