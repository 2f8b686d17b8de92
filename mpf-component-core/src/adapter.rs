// ============================================================================
// mpf-component-core/src/adapter.rs
// ============================================================================
//
// AUDIO/VIDEO ADAPTER: Runs an audio-only detector over both audio and video jobs
//
// A component that only knows how to analyze audio implements
// `AudioDetection` and is wrapped in an `AudioVideoAdapter`, which
// provides the full `DetectionComponent` contract: video jobs are converted
// to audio jobs, handed to the wrapped detector, and its tracks converted
// back to video tracks. Image and generic jobs are rejected.
//
// Audio and video jobs fail with `DetectionNotInitialized` unless the
// adapter itself was initialized. That check comes before any media
// property is read.

// ---- Internal crate imports ----
use crate::component::{Component, ComponentType, DataType, DetectionComponent};
use crate::config::AdapterConfig;
use crate::conversion::{self, MediaTiming};
use crate::error::{ComponentDetectionFailure, DetectionErrorKind, DetectionResult};
use crate::job::{AudioJob, GenericJob, ImageJob, Job, VideoJob};
use crate::track::{AudioTrack, GenericTrack, ImageLocation, VideoTrack};

// ---- External crate imports ----
use log::{debug, info};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

/// The audio half of a detection component.
pub trait AudioDetection: Component {
    fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>>;

    fn detection_type(&self) -> &str;
}

/// Wraps an [`AudioDetection`] implementation as a full detection component
/// supporting audio and video media.
#[derive(Debug, Clone)]
pub struct AudioVideoAdapter<C> {
    component: C,
    config: AdapterConfig,
    initialized: bool,
}

impl<C: AudioDetection> AudioVideoAdapter<C> {
    pub fn new(component: C) -> Self {
        Self::with_config(component, AdapterConfig::default())
    }

    pub fn with_config(component: C, config: AdapterConfig) -> Self {
        Self {
            component,
            config,
            initialized: false,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn inner(&self) -> &C {
        &self.component
    }

    pub fn into_inner(self) -> C {
        self.component
    }

    fn ensure_initialized(&self) -> DetectionResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ComponentDetectionFailure::with_message(
                DetectionErrorKind::DetectionNotInitialized,
                "Adapter has not been initialized.",
            ))
        }
    }
}

impl<C: AudioDetection> Component for AudioVideoAdapter<C> {
    fn init(&mut self) -> DetectionResult<()> {
        self.component.init()?;
        self.initialized = true;
        Ok(())
    }

    fn close(&mut self) -> DetectionResult<()> {
        self.initialized = false;
        self.component.close()
    }

    fn run_directory(&self) -> Option<&Path> {
        self.component.run_directory()
    }

    fn set_run_directory(&mut self, run_directory: PathBuf) {
        self.component.set_run_directory(run_directory);
    }

    fn component_type(&self) -> ComponentType {
        self.component.component_type()
    }
}

impl<C: AudioDetection> DetectionComponent for AudioVideoAdapter<C> {
    fn get_detections_from_video(&self, job: &VideoJob) -> DetectionResult<Vec<VideoTrack>> {
        self.ensure_initialized()?;
        debug!(
            "jobName = {}, startFrame = {}, stopFrame = {}, dataUri = {}, size of jobProperties = {}, size of mediaProperties = {}",
            job.job_name(),
            job.start_frame(),
            job.stop_frame(),
            job.data_uri(),
            job.job_properties().len(),
            job.media_properties().len()
        );

        let policy = self.config.frame_range_policy;
        let timing = MediaTiming::from_media_properties(job.media_properties(), policy)?;
        let audio_job = conversion::derive_audio_job_with_timing(job, &timing, policy)?;

        let audio_tracks = AudioDetection::get_detections_from_audio(&self.component, &audio_job)?;
        info!("Results: {}", audio_tracks.len());

        Ok(conversion::remap_audio_tracks_to_video_tracks(audio_tracks, timing.fps))
    }

    fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>> {
        self.ensure_initialized()?;
        AudioDetection::get_detections_from_audio(&self.component, job)
    }

    fn get_detections_from_image(&self, _job: &ImageJob) -> DetectionResult<Vec<ImageLocation>> {
        Err(ComponentDetectionFailure::unsupported_data_type(
            "Image detection not supported.",
        ))
    }

    fn get_detections_from_generic(&self, _job: &GenericJob) -> DetectionResult<Vec<GenericTrack>> {
        Err(ComponentDetectionFailure::unsupported_data_type(
            "Generic detection not supported.",
        ))
    }

    fn supports(&self, data_type: DataType) -> bool {
        matches!(data_type, DataType::Audio | DataType::Video)
    }

    fn detection_type(&self) -> &str {
        AudioDetection::detection_type(&self.component)
    }
}
