// ============================================================================
// mpf-component-core/src/properties.rs
// ============================================================================
//
// PROPERTIES: Typed access to string property maps
//
// Jobs and results carry their metadata as plain string maps. Values are
// stored verbatim and only interpreted by whoever consumes them, through the
// helpers below, which turn a missing or malformed value into the matching
// `DetectionErrorKind`.

use crate::error::{ComponentDetectionFailure, DetectionResult};
use std::collections::HashMap;
use std::str::FromStr;

/// String-to-string property map used by jobs, tracks and locations.
pub type Properties = HashMap<String, String>;

// Well-known keys

/// Media property: frames per second (float).
pub const FPS: &str = "FPS";

/// Media property: media duration in milliseconds (integer).
pub const DURATION: &str = "DURATION";

/// Media property: total number of frames (integer).
pub const FRAME_COUNT: &str = "FRAME_COUNT";

/// Job property: process every Nth frame.
pub const FRAME_INTERVAL: &str = "FRAME_INTERVAL";

/// Detection property: number of pipeline stages a result has passed through.
pub const FEED_FORWARD_COUNT: &str = "FEED_FORWARD_COUNT";

/// Detection property: free-form component metadata.
pub const METADATA: &str = "METADATA";

/// Builds a property map from key/value pairs.
pub fn properties_from<K, V, I>(pairs: I) -> Properties
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn parse_value<T: FromStr>(props: &Properties, key: &str, type_name: &str) -> DetectionResult<Option<T>> {
    let Some(raw) = props.get(key) else {
        return Ok(None);
    };

    raw.trim().parse::<T>().map(Some).map_err(|_| {
        ComponentDetectionFailure::invalid_property(format!(
            "{key} property is not a valid {type_name} value: '{raw}'"
        ))
    })
}

/// Parses an optional integer property. Absent keys yield `None`.
pub fn optional_i32(props: &Properties, key: &str) -> DetectionResult<Option<i32>> {
    parse_value(props, key, "integer")
}

/// Parses a required integer property.
pub fn require_i32(props: &Properties, key: &str) -> DetectionResult<i32> {
    optional_i32(props, key)?.ok_or_else(|| {
        ComponentDetectionFailure::missing_property(format!("Could not obtain {key} property."))
    })
}

/// Parses a required floating-point property. Non-finite values are rejected.
pub fn require_f64(props: &Properties, key: &str) -> DetectionResult<f64> {
    let value: f64 = parse_value(props, key, "floating-point")?.ok_or_else(|| {
        ComponentDetectionFailure::missing_property(format!("Could not obtain {key} property."))
    })?;

    if !value.is_finite() {
        return Err(ComponentDetectionFailure::invalid_property(format!(
            "{key} property is not a finite value: {value}"
        )));
    }
    Ok(value)
}
