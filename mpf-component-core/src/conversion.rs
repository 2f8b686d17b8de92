// ============================================================================
// mpf-component-core/src/conversion.rs
// ============================================================================
//
// FRAME/TIME CONVERSION: Mapping between video jobs and audio jobs
//
// Video jobs and tracks are indexed by frame number; audio jobs and tracks
// by milliseconds. `derive_audio_job` turns a video job's frame window into
// the equivalent time window using the media's `FPS`, `DURATION` and
// `FRAME_COUNT` properties, and `remap_audio_tracks_to_video_tracks` maps
// the audio results back onto frames.
//
// Frame-to-time conversions round down. Time-to-frame conversions round the
// start down and the stop up, so a remapped track always covers the frames
// its audio overlapped.

// ---- Internal crate imports ----
use crate::config::FrameRangePolicy;
use crate::error::{ComponentDetectionFailure, DetectionResult};
use crate::job::{AudioJob, Job, VideoJob};
use crate::properties::{self, Properties, DURATION, FPS, FRAME_COUNT};
use crate::track::{AudioTrack, ImageLocation, VideoTrack};

// ---- External crate imports ----
use log::{debug, error, info};

// ---- Standard library imports ----
use std::collections::BTreeMap;

/// Timing metadata of a video, parsed from its media properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaTiming {
    /// Frames per second, always finite and positive.
    pub fps: f64,
    /// Duration in milliseconds.
    pub duration: i32,
    /// Total frame count. Only read under [`FrameRangePolicy::FrameCountAware`].
    pub frame_count: Option<i32>,
}

impl MediaTiming {
    /// Parses the timing properties required by `policy`.
    ///
    /// Checks `FPS`, then `DURATION`, then (frame-count policy only)
    /// `FRAME_COUNT`; the first missing value fails with `MissingProperty` and
    /// the first malformed one with `InvalidProperty`.
    pub fn from_media_properties(media_properties: &Properties, policy: FrameRangePolicy) -> DetectionResult<Self> {
        let fps = properties::require_f64(media_properties, FPS)
            .inspect_err(|e| error!("Could not obtain video frame rate: {}", e))?;
        if fps <= 0.0 {
            error!("Could not obtain video frame rate: FPS must be positive, got {}", fps);
            return Err(ComponentDetectionFailure::invalid_property(format!(
                "FPS property must be a positive value, got {fps}."
            )));
        }

        let duration = properties::require_i32(media_properties, DURATION)
            .inspect_err(|e| error!("Could not obtain duration: {}", e))?;

        let frame_count = match policy {
            FrameRangePolicy::FrameCountAware => Some(
                properties::require_i32(media_properties, FRAME_COUNT)
                    .inspect_err(|e| error!("Could not obtain video frame count: {}", e))?,
            ),
            FrameRangePolicy::LegacySentinel => None,
        };

        Ok(Self {
            fps,
            duration,
            frame_count,
        })
    }

    /// Millisecond timestamp of `frame`, rounded down.
    pub fn frame_to_millis(&self, frame: i32) -> i32 {
        (f64::from(frame) * 1000.0 / self.fps).floor() as i32
    }

    /// First frame overlapping the millisecond timestamp `millis`.
    pub fn millis_to_start_frame(&self, millis: i32) -> i32 {
        (self.fps * f64::from(millis) / 1000.0).floor() as i32
    }

    /// Last frame overlapping the millisecond timestamp `millis`.
    pub fn millis_to_stop_frame(&self, millis: i32) -> i32 {
        (self.fps * f64::from(millis) / 1000.0).ceil() as i32
    }

    /// Converts an inclusive frame window to an inclusive millisecond window.
    pub fn time_window(&self, start_frame: i32, stop_frame: i32, policy: FrameRangePolicy) -> DetectionResult<(i32, i32)> {
        match policy {
            FrameRangePolicy::FrameCountAware => Ok(self.frame_count_aware_window(start_frame, stop_frame)),
            FrameRangePolicy::LegacySentinel => self.legacy_window(start_frame, stop_frame),
        }
    }

    fn frame_count_aware_window(&self, start_frame: i32, stop_frame: i32) -> (i32, i32) {
        let frame_count = self.frame_count.unwrap_or(0);
        let start_time = self.frame_to_millis(start_frame);

        // Hosts pass FRAME_COUNT - 1 as the stop frame of the last segment.
        // The job's stop frame is only authoritative before that point.
        let stop_time = if i64::from(stop_frame) < i64::from(frame_count) - 1 {
            self.frame_to_millis(stop_frame)
        } else if self.duration > 0 {
            self.duration
        } else if frame_count > 0 {
            self.frame_to_millis(frame_count)
        } else {
            0
        };

        (start_time, stop_time)
    }

    fn legacy_window(&self, start_frame: i32, stop_frame: i32) -> DetectionResult<(i32, i32)> {
        let final_frame = (self.fps * f64::from(self.duration) / 1000.0).floor() as i32;

        let (start, stop, to_end) = if start_frame < 0 {
            (0, final_frame, true)
        } else if stop_frame < 0 || stop_frame >= final_frame {
            (start_frame, final_frame, true)
        } else {
            (start_frame, stop_frame, false)
        };

        if stop <= start {
            error!("Stop frame {} <= start frame {}.", stop, start);
            return Err(ComponentDetectionFailure::invalid_property(format!(
                "Stop frame {stop} <= start frame {start}."
            )));
        }

        let stop_time = if to_end {
            self.duration
        } else {
            self.frame_to_millis(stop)
        };
        Ok((self.frame_to_millis(start), stop_time))
    }
}

/// Builds the audio job covering the same media window as `video_job`.
///
/// The audio job keeps the video job's name, URI and both property maps.
pub fn derive_audio_job(video_job: &VideoJob, policy: FrameRangePolicy) -> DetectionResult<AudioJob> {
    let timing = MediaTiming::from_media_properties(video_job.media_properties(), policy)?;
    derive_audio_job_with_timing(video_job, &timing, policy)
}

pub(crate) fn derive_audio_job_with_timing(
    video_job: &VideoJob,
    timing: &MediaTiming,
    policy: FrameRangePolicy,
) -> DetectionResult<AudioJob> {
    let (start_time, stop_time) = timing.time_window(video_job.start_frame(), video_job.stop_frame(), policy)?;
    debug!(
        "{}: frames [{}, {}] map to [{} ms, {} ms] at {} fps",
        video_job.job_name(),
        video_job.start_frame(),
        video_job.stop_frame(),
        start_time,
        stop_time,
        timing.fps
    );

    Ok(AudioJob::new(video_job.header().clone(), start_time, stop_time))
}

/// Converts audio tracks into video tracks at `fps`, preserving order.
///
/// Each video track gets a single zero-sized location at its start frame
/// carrying the audio track's confidence and properties, marking that a
/// detection occurred in that window.
pub fn remap_audio_tracks_to_video_tracks<I>(audio_tracks: I, fps: f64) -> Vec<VideoTrack>
where
    I: IntoIterator<Item = AudioTrack>,
{
    let timing = MediaTiming {
        fps,
        duration: 0,
        frame_count: None,
    };

    audio_tracks
        .into_iter()
        .map(|audio_track| {
            debug!(
                "Track start time: {}, track stop time: {}",
                audio_track.start_time, audio_track.stop_time
            );
            let start_frame = timing.millis_to_start_frame(audio_track.start_time);
            let stop_frame = timing.millis_to_stop_frame(audio_track.stop_time);

            let location = ImageLocation::placeholder(
                audio_track.confidence,
                audio_track.detection_properties.clone(),
            );
            let frame_locations = BTreeMap::from([(start_frame, location)]);

            info!(
                "Added video track: startFrame {}, stopFrame {}, location count {}",
                start_frame,
                stop_frame,
                frame_locations.len()
            );
            VideoTrack::new(
                start_frame,
                stop_frame,
                frame_locations,
                audio_track.confidence,
                audio_track.detection_properties,
            )
        })
        .collect()
}
