// ============================================================================
// mpf-component-cli/src/components/audio_video.rs
// ============================================================================
//
// AUDIO/VIDEO EXAMPLE: An audio-only detector served through the adapter
//
// Only audio detection is implemented here. Wrapped in an
// `AudioVideoAdapter`, the same logic serves video jobs, whose frame windows
// the adapter converts to time windows and back. Image and generic jobs are
// rejected by the adapter.

use super::DUMMY_CONFIDENCE;
use log::{debug, info};
use mpf_component_core::properties::METADATA;
use mpf_component_core::{
    AudioDetection, AudioJob, AudioTrack, Component, ComponentDetectionFailure, ComponentState, DetectionErrorKind,
    DetectionResult, Job, properties_from,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct AudioVideoComponent {
    state: ComponentState,
}

impl AudioVideoComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AudioVideoComponent {
    fn init(&mut self) -> DetectionResult<()> {
        self.state.init();
        Ok(())
    }

    fn close(&mut self) -> DetectionResult<()> {
        self.state.close();
        Ok(())
    }

    fn run_directory(&self) -> Option<&Path> {
        self.state.run_directory()
    }

    fn set_run_directory(&mut self, run_directory: PathBuf) {
        self.state.set_run_directory(run_directory);
    }
}

impl AudioDetection for AudioVideoComponent {
    fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>> {
        self.state.ensure_initialized()?;
        debug!(
            "{} Processing {} from start time {} ms to stop time {} ms.",
            job.job_name(),
            job.data_uri(),
            job.start_time(),
            job.stop_time()
        );

        let stop_time = job.start_time().checked_add(1).ok_or_else(|| {
            ComponentDetectionFailure::with_message(
                DetectionErrorKind::DetectionFailed,
                "Audio track stop time overflows.",
            )
        })?;

        // METADATA stands in for e.g. a recognized phrase.
        let detection_properties = properties_from([(METADATA, "extra audio track info")]);
        let tracks = vec![AudioTrack::new(
            job.start_time(),
            stop_time,
            DUMMY_CONFIDENCE,
            detection_properties,
        )];

        info!(
            "{} Processing complete. Generated {} dummy audio tracks.",
            job.job_name(),
            tracks.len()
        );
        Ok(tracks)
    }

    fn detection_type(&self) -> &str {
        "AUDIOVIDEO"
    }
}
