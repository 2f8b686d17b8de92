// ============================================================================
// mpf-component-core/src/component.rs
// ============================================================================
//
// COMPONENT CONTRACT: The contract a detection component implements
//
// A host constructs the component once, sets its run directory, calls
// `Component::init`, submits any number of jobs through the
// `get_detections_from_*` operations, and finally calls
// `Component::close`. Each detection call is synchronous and independent of
// every other call.

use crate::error::{ComponentDetectionFailure, DetectionErrorKind, DetectionResult};
use crate::job::{AudioJob, GenericJob, ImageJob, VideoJob};
use crate::track::{AudioTrack, GenericTrack, ImageLocation, VideoTrack};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Media category of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Image,
    Video,
    Audio,
    /// Media handled by generic jobs.
    Unknown,
}

impl DataType {
    pub const ALL: [DataType; 4] = [DataType::Image, DataType::Video, DataType::Audio, DataType::Unknown];
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Image => "IMAGE",
            DataType::Video => "VIDEO",
            DataType::Audio => "AUDIO",
            DataType::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Kind of component, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    Detection,
}

/// Lifecycle operations shared by all components.
pub trait Component {
    /// Called once before the first job.
    fn init(&mut self) -> DetectionResult<()>;

    /// Called once after the last job.
    fn close(&mut self) -> DetectionResult<()>;

    fn run_directory(&self) -> Option<&Path>;

    fn set_run_directory(&mut self, run_directory: PathBuf);

    fn component_type(&self) -> ComponentType {
        ComponentType::Detection
    }
}

/// Per-media-type detection operations.
///
/// Every operation returns the (possibly empty) list of results for one job
/// or fails with a [`ComponentDetectionFailure`].
pub trait DetectionComponent: Component {
    fn get_detections_from_video(&self, job: &VideoJob) -> DetectionResult<Vec<VideoTrack>>;

    fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>>;

    fn get_detections_from_image(&self, job: &ImageJob) -> DetectionResult<Vec<ImageLocation>>;

    fn get_detections_from_generic(&self, _job: &GenericJob) -> DetectionResult<Vec<GenericTrack>> {
        Err(ComponentDetectionFailure::unsupported_data_type(
            "Generic detection not supported.",
        ))
    }

    /// Whether the component can process jobs of `data_type`. Side-effect free.
    fn supports(&self, data_type: DataType) -> bool;

    /// Stable identifier for the category of objects detected, e.g. `"HELLO"`.
    fn detection_type(&self) -> &str;
}

/// Run directory and initialization flag, for embedding in concrete components.
#[derive(Debug, Clone, Default)]
pub struct ComponentState {
    run_directory: Option<PathBuf>,
    initialized: bool,
}

impl ComponentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.initialized = true;
    }

    pub fn close(&mut self) {
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Fails with `DetectionNotInitialized` outside the init/close bracket.
    pub fn ensure_initialized(&self) -> DetectionResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ComponentDetectionFailure::with_message(
                DetectionErrorKind::DetectionNotInitialized,
                "Component has not been initialized.",
            ))
        }
    }

    pub fn run_directory(&self) -> Option<&Path> {
        self.run_directory.as_deref()
    }

    pub fn set_run_directory(&mut self, run_directory: PathBuf) {
        self.run_directory = Some(run_directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_state_lifecycle() {
        let mut state = ComponentState::new();
        assert_eq!(
            state.ensure_initialized().unwrap_err().kind(),
            DetectionErrorKind::DetectionNotInitialized
        );

        state.init();
        assert!(state.ensure_initialized().is_ok());

        state.close();
        assert!(!state.is_initialized());
        assert!(state.ensure_initialized().is_err());
    }

    #[test]
    fn test_run_directory() {
        let mut state = ComponentState::new();
        assert!(state.run_directory().is_none());

        state.set_run_directory(PathBuf::from("/opt/mpf/plugins"));
        assert_eq!(state.run_directory(), Some(Path::new("/opt/mpf/plugins")));
    }

    #[test]
    fn test_data_type_display() {
        let names: Vec<String> = DataType::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["IMAGE", "VIDEO", "AUDIO", "UNKNOWN"]);
    }
}
