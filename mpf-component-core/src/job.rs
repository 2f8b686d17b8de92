// ============================================================================
// mpf-component-core/src/job.rs
// ============================================================================
//
// JOBS: Job descriptors handed to a component by the host
//
// Every job embeds a `JobHeader` with the fields shared by all media types;
// the type-specific structs add the positional window and an optional
// feed-forward result from a previous pipeline stage. Jobs own their
// property maps, so changes the caller makes to its own maps after
// construction are never observed through a job.

use crate::properties::Properties;
use crate::track::{AudioTrack, GenericTrack, ImageLocation, VideoTrack};
use serde::{Deserialize, Serialize};

/// Fields common to every job type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHeader {
    job_name: String,
    data_uri: String,
    job_properties: Properties,
    media_properties: Properties,
}

impl JobHeader {
    /// `job_properties` configure the component for this job (for example
    /// `FRAME_INTERVAL`); `media_properties` describe the media itself (for
    /// example `FPS`, `DURATION`, `FRAME_COUNT`). Neither is validated here.
    pub fn new(
        job_name: impl Into<String>,
        data_uri: impl Into<String>,
        job_properties: Properties,
        media_properties: Properties,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            data_uri: data_uri.into(),
            job_properties,
            media_properties,
        }
    }
}

/// Read-only access to the shared job fields.
pub trait Job {
    fn header(&self) -> &JobHeader;

    /// Name of the job, for logging and correlation.
    fn job_name(&self) -> &str {
        &self.header().job_name
    }

    /// Location of the media to process.
    fn data_uri(&self) -> &str {
        &self.header().data_uri
    }

    fn job_properties(&self) -> &Properties {
        &self.header().job_properties
    }

    fn media_properties(&self) -> &Properties {
        &self.header().media_properties
    }
}

impl Job for JobHeader {
    fn header(&self) -> &JobHeader {
        self
    }
}

// --- Image ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageJob {
    header: JobHeader,
    feed_forward_location: Option<ImageLocation>,
}

impl ImageJob {
    pub fn new(header: JobHeader) -> Self {
        Self {
            header,
            feed_forward_location: None,
        }
    }

    #[must_use]
    pub fn with_feed_forward(mut self, location: ImageLocation) -> Self {
        self.feed_forward_location = Some(location);
        self
    }

    pub fn feed_forward_location(&self) -> Option<&ImageLocation> {
        self.feed_forward_location.as_ref()
    }
}

impl Job for ImageJob {
    fn header(&self) -> &JobHeader {
        &self.header
    }
}

// --- Video ---

/// A job over the inclusive frame range `[start_frame, stop_frame]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoJob {
    header: JobHeader,
    start_frame: i32,
    stop_frame: i32,
    feed_forward_track: Option<VideoTrack>,
}

impl VideoJob {
    pub fn new(header: JobHeader, start_frame: i32, stop_frame: i32) -> Self {
        Self {
            header,
            start_frame,
            stop_frame,
            feed_forward_track: None,
        }
    }

    #[must_use]
    pub fn with_feed_forward(mut self, track: VideoTrack) -> Self {
        self.feed_forward_track = Some(track);
        self
    }

    pub fn start_frame(&self) -> i32 {
        self.start_frame
    }

    pub fn stop_frame(&self) -> i32 {
        self.stop_frame
    }

    pub fn feed_forward_track(&self) -> Option<&VideoTrack> {
        self.feed_forward_track.as_ref()
    }
}

impl Job for VideoJob {
    fn header(&self) -> &JobHeader {
        &self.header
    }
}

// --- Audio ---

/// A job over the inclusive time range `[start_time, stop_time]`, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioJob {
    header: JobHeader,
    start_time: i32,
    stop_time: i32,
    feed_forward_track: Option<AudioTrack>,
}

impl AudioJob {
    pub fn new(header: JobHeader, start_time: i32, stop_time: i32) -> Self {
        Self {
            header,
            start_time,
            stop_time,
            feed_forward_track: None,
        }
    }

    #[must_use]
    pub fn with_feed_forward(mut self, track: AudioTrack) -> Self {
        self.feed_forward_track = Some(track);
        self
    }

    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    pub fn stop_time(&self) -> i32 {
        self.stop_time
    }

    pub fn feed_forward_track(&self) -> Option<&AudioTrack> {
        self.feed_forward_track.as_ref()
    }
}

impl Job for AudioJob {
    fn header(&self) -> &JobHeader {
        &self.header
    }
}

// --- Generic ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericJob {
    header: JobHeader,
    feed_forward_track: Option<GenericTrack>,
}

impl GenericJob {
    pub fn new(header: JobHeader) -> Self {
        Self {
            header,
            feed_forward_track: None,
        }
    }

    #[must_use]
    pub fn with_feed_forward(mut self, track: GenericTrack) -> Self {
        self.feed_forward_track = Some(track);
        self
    }

    pub fn feed_forward_track(&self) -> Option<&GenericTrack> {
        self.feed_forward_track.as_ref()
    }
}

impl Job for GenericJob {
    fn header(&self) -> &JobHeader {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::properties_from;

    #[test]
    fn test_header_accessors_through_job_trait() {
        let job = VideoJob::new(
            JobHeader::new(
                "TestVideoJob",
                "RandomVideoFile",
                properties_from([("FRAME_INTERVAL", "5")]),
                properties_from([("FPS", "24")]),
            ),
            99,
            100,
        );

        assert_eq!(job.job_name(), "TestVideoJob");
        assert_eq!(job.data_uri(), "RandomVideoFile");
        assert_eq!(job.job_properties().get("FRAME_INTERVAL").map(String::as_str), Some("5"));
        assert_eq!(job.media_properties().get("FPS").map(String::as_str), Some("24"));
        assert_eq!((job.start_frame(), job.stop_frame()), (99, 100));
        assert!(job.feed_forward_track().is_none());
    }

    #[test]
    fn test_feed_forward_is_optional() {
        let header = JobHeader::new("job", "uri", Properties::new(), Properties::new());
        let track = AudioTrack::new(10, 20, 0.5, Properties::new());

        let plain = AudioJob::new(header.clone(), 0, 100);
        let fed = AudioJob::new(header, 0, 100).with_feed_forward(track.clone());

        assert!(plain.feed_forward_track().is_none());
        assert_eq!(fed.feed_forward_track(), Some(&track));
    }
}
