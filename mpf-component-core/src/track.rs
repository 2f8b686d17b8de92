// ============================================================================
// mpf-component-core/src/track.rs
// ============================================================================
//
// DETECTION RESULTS: Image locations and video, audio and generic tracks
//
// Frame numbers and millisecond timestamps are inclusive on both ends.
// A confidence of `-1.0` means the component did not calculate one.

use crate::properties::Properties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A detection within a single image or video frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLocation {
    pub x_left_upper: i32,
    pub y_left_upper: i32,
    pub width: i32,
    pub height: i32,
    pub confidence: f32,
    pub detection_properties: Properties,
}

impl ImageLocation {
    pub fn new(
        x_left_upper: i32,
        y_left_upper: i32,
        width: i32,
        height: i32,
        confidence: f32,
        detection_properties: Properties,
    ) -> Self {
        Self {
            x_left_upper,
            y_left_upper,
            width,
            height,
            confidence,
            detection_properties,
        }
    }

    /// A zero-sized location at the origin. Used to mark that something was
    /// detected in a frame without a spatial extent.
    pub fn placeholder(confidence: f32, detection_properties: Properties) -> Self {
        Self::new(0, 0, 0, 0, confidence, detection_properties)
    }
}

/// A sequence of frame detections of one object in a video.
///
/// `frame_locations` holds at most one location per frame. Hosts ignore
/// tracks whose location map is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoTrack {
    pub start_frame: i32,
    pub stop_frame: i32,
    pub frame_locations: BTreeMap<i32, ImageLocation>,
    pub confidence: f32,
    pub detection_properties: Properties,
}

impl VideoTrack {
    pub fn new(
        start_frame: i32,
        stop_frame: i32,
        frame_locations: BTreeMap<i32, ImageLocation>,
        confidence: f32,
        detection_properties: Properties,
    ) -> Self {
        Self {
            start_frame,
            stop_frame,
            frame_locations,
            confidence,
            detection_properties,
        }
    }
}

/// A detection spanning a time window of an audio stream, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub start_time: i32,
    pub stop_time: i32,
    pub confidence: f32,
    pub detection_properties: Properties,
}

impl AudioTrack {
    pub fn new(start_time: i32, stop_time: i32, confidence: f32, detection_properties: Properties) -> Self {
        Self {
            start_time,
            stop_time,
            confidence,
            detection_properties,
        }
    }
}

/// A detection in media with no temporal or spatial extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericTrack {
    pub confidence: f32,
    pub detection_properties: Properties,
}

impl GenericTrack {
    pub fn new(confidence: f32, detection_properties: Properties) -> Self {
        Self {
            confidence,
            detection_properties,
        }
    }
}
