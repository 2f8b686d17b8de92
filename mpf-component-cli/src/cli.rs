// ============================================================================
// mpf-component-cli/src/cli.rs
// ============================================================================
//
// ARGUMENTS: Command-line argument structures for clap

use crate::components::ExampleComponent;
use clap::{Parser, Subcommand, ValueEnum};
use mpf_component_core::{DataType, FrameRangePolicy};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "MPF component runner: executes one job against an example detection component",
    long_about = "Builds a single image, video, audio or generic job from the command line, runs it \
                  through one of the example components, and prints the results as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs a single job and prints the detections as JSON
    Run(RunArgs),
    /// Lists the example components with their detection types and supported media
    Describe(DescribeArgs),
}

/// Media type of the job to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Generic,
}

impl MediaType {
    pub fn data_type(self) -> DataType {
        match self {
            MediaType::Image => DataType::Image,
            MediaType::Video => DataType::Video,
            MediaType::Audio => DataType::Audio,
            MediaType::Generic => DataType::Unknown,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Component to run
    #[arg(short, long, value_enum)]
    pub component: ExampleComponent,

    /// Media type of the job
    #[arg(short = 't', long = "media-type", value_enum)]
    pub media_type: MediaType,

    /// URI of the media to process
    #[arg(short, long, value_name = "URI")]
    pub uri: String,

    /// Name of the job, used in log messages
    #[arg(long, default_value = "mpf-component-job")]
    pub job_name: String,

    /// Start frame (video) or start time in milliseconds (audio)
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i32>,

    /// Stop frame (video) or stop time in milliseconds (audio), inclusive
    #[arg(long, allow_hyphen_values = true)]
    pub stop: Option<i32>,

    /// Job property, repeatable (e.g. -p FRAME_INTERVAL=5)
    #[arg(short = 'p', long = "job-property", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub job_properties: Vec<(String, String)>,

    /// Media property, repeatable (e.g. -m FPS=29.97)
    #[arg(short = 'm', long = "media-property", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub media_properties: Vec<(String, String)>,

    /// Component run directory; $VAR and ${VAR} are expanded
    #[arg(long, value_name = "DIR")]
    pub run_dir: Option<String>,

    /// How video frame windows are converted to audio time windows
    /// (frame-count or legacy). Defaults to MPF_FRAME_RANGE_POLICY, then frame-count
    #[arg(long, value_name = "POLICY")]
    pub frame_range_policy: Option<FrameRangePolicy>,
}

#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Only describe this component
    #[arg(short, long, value_enum)]
    pub component: Option<ExampleComponent>,
}

/// Parses a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(parse_key_val("FPS=29.97"), Ok(("FPS".to_string(), "29.97".to_string())));
        assert_eq!(parse_key_val("EXPR=a=b"), Ok(("EXPR".to_string(), "a=b".to_string())));
        assert_eq!(parse_key_val("EMPTY="), Ok(("EMPTY".to_string(), String::new())));
        assert!(parse_key_val("NOVALUE").is_err());
        assert!(parse_key_val("=value").is_err());
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "mpf-component",
            "run",
            "--component",
            "audio-video",
            "--media-type",
            "video",
            "--uri",
            "movie.mp4",
            "--start",
            "0",
            "--stop",
            "-1",
            "-m",
            "FPS=30",
            "-m",
            "DURATION=10000",
            "--frame-range-policy",
            "legacy",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.component, ExampleComponent::AudioVideo);
        assert_eq!(args.media_type, MediaType::Video);
        assert_eq!((args.start, args.stop), (Some(0), Some(-1)));
        assert_eq!(args.media_properties.len(), 2);
        assert_eq!(args.frame_range_policy, Some(FrameRangePolicy::LegacySentinel));
    }
}
