// ============================================================================
// mpf-component-cli/src/components/hello_world.rs
// ============================================================================
//
// HELLO WORLD EXAMPLE: One synthetic result for every media type

use super::{DUMMY_CONFIDENCE, stamp_feed_forward_count};
use log::{debug, info};
use mpf_component_core::properties::{FRAME_INTERVAL, METADATA};
use mpf_component_core::{
    AudioJob, AudioTrack, Component, ComponentDetectionFailure, ComponentState, DataType, DetectionComponent,
    DetectionErrorKind, DetectionResult, GenericJob, GenericTrack, ImageJob, ImageLocation, Job, VideoJob,
    VideoTrack, properties_from,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Returns one dummy result for every supported media type.
#[derive(Debug, Default)]
pub struct HelloWorldComponent {
    state: ComponentState,
}

impl HelloWorldComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn dummy_location() -> ImageLocation {
        ImageLocation::new(
            0,
            0,
            100,
            100,
            DUMMY_CONFIDENCE,
            properties_from([(METADATA, "extra image location info")]),
        )
    }
}

impl Component for HelloWorldComponent {
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

impl DetectionComponent for HelloWorldComponent {
    fn get_detections_from_video(&self, job: &VideoJob) -> DetectionResult<Vec<VideoTrack>> {
        self.state.ensure_initialized()?;
        debug!(
            "[{}] Processing {} from frame {} to frame {}.",
            job.job_name(),
            job.data_uri(),
            job.start_frame(),
            job.stop_frame()
        );
        debug!(
            "[{}] Job properties contains FRAME_INTERVAL with a value of {}.",
            job.job_name(),
            job.job_properties().get(FRAME_INTERVAL).map_or("<unset>", String::as_str)
        );

        let feed_forward = job.feed_forward_track().map(|t| &t.detection_properties);

        // A video track is a series of per-frame image detections.
        let mut location = Self::dummy_location();
        stamp_feed_forward_count(&mut location.detection_properties, feed_forward)?;
        let frame_locations = BTreeMap::from([(job.start_frame(), location)]);

        let mut detection_properties = properties_from([(METADATA, "extra video track info")]);
        stamp_feed_forward_count(&mut detection_properties, feed_forward)?;

        let tracks = vec![VideoTrack::new(
            job.start_frame(),
            job.stop_frame(),
            frame_locations,
            DUMMY_CONFIDENCE,
            detection_properties,
        )];

        info!(
            "[{}] Processing complete. Generated {} dummy video tracks.",
            job.job_name(),
            tracks.len()
        );
        Ok(tracks)
    }

    fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>> {
        self.state.ensure_initialized()?;
        debug!(
            "[{}] Processing {} from start time {} ms to stop time {} ms.",
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

        let mut detection_properties = properties_from([(METADATA, "extra audio track info")]);
        stamp_feed_forward_count(
            &mut detection_properties,
            job.feed_forward_track().map(|t| &t.detection_properties),
        )?;

        let tracks = vec![AudioTrack::new(
            job.start_time(),
            stop_time,
            DUMMY_CONFIDENCE,
            detection_properties,
        )];

        info!(
            "[{}] Processing complete. Generated {} dummy audio tracks.",
            job.job_name(),
            tracks.len()
        );
        Ok(tracks)
    }

    fn get_detections_from_image(&self, job: &ImageJob) -> DetectionResult<Vec<ImageLocation>> {
        self.state.ensure_initialized()?;
        debug!("[{}] Processing {}.", job.job_name(), job.data_uri());

        let mut location = Self::dummy_location();
        stamp_feed_forward_count(
            &mut location.detection_properties,
            job.feed_forward_location().map(|l| &l.detection_properties),
        )?;

        let locations = vec![location];
        info!(
            "[{}] Processing complete. Generated {} dummy image locations.",
            job.job_name(),
            locations.len()
        );
        Ok(locations)
    }

    fn get_detections_from_generic(&self, job: &GenericJob) -> DetectionResult<Vec<GenericTrack>> {
        self.state.ensure_initialized()?;
        debug!("[{}] Processing {}.", job.job_name(), job.data_uri());

        let mut detection_properties = properties_from([(METADATA, "extra generic track info")]);
        stamp_feed_forward_count(
            &mut detection_properties,
            job.feed_forward_track().map(|t| &t.detection_properties),
        )?;

        let tracks = vec![GenericTrack::new(DUMMY_CONFIDENCE, detection_properties)];
        info!(
            "[{}] Processing complete. Generated {} dummy generic tracks.",
            job.job_name(),
            tracks.len()
        );
        Ok(tracks)
    }

    fn supports(&self, _data_type: DataType) -> bool {
        true
    }

    fn detection_type(&self) -> &str {
        "HELLO"
    }
}
