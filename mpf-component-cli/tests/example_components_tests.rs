// mpf-component-cli/tests/example_components_tests.rs

use mpf_component_cli::{AudioVideoComponent, HelloWorldComponent};
use mpf_component_core::properties::{FEED_FORWARD_COUNT, METADATA};
use mpf_component_core::{
    AudioJob, AudioTrack, AudioVideoAdapter, Component, DataType, DetectionComponent, DetectionErrorKind, GenericJob,
    ImageJob, ImageLocation, JobHeader, Properties, VideoJob, properties_from,
};
use std::collections::BTreeMap;

const CONFIDENCE_TOLERANCE: f32 = 0.01;

fn header(name: &str, uri: &str, job: Properties, media: Properties) -> JobHeader {
    JobHeader::new(name, uri, job, media)
}

fn hello() -> HelloWorldComponent {
    let mut component = HelloWorldComponent::new();
    component.init().unwrap();
    component
}

fn audio_video() -> AudioVideoAdapter<AudioVideoComponent> {
    let mut component = AudioVideoAdapter::new(AudioVideoComponent::new());
    component.init().unwrap();
    component
}

fn metadata(props: &Properties) -> Option<&str> {
    props.get(METADATA).map(String::as_str)
}

// --- Hello World ---

#[test]
fn test_hello_image() {
    let component = hello();
    let job = ImageJob::new(header("TestImageJob", "RandomImageFile", Properties::new(), Properties::new()));

    let locations = component.get_detections_from_image(&job).unwrap();

    assert_eq!(locations.len(), 1);
    let location = &locations[0];
    assert_eq!(
        (location.x_left_upper, location.y_left_upper, location.width, location.height),
        (0, 0, 100, 100)
    );
    assert!((location.confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
    assert_eq!(metadata(&location.detection_properties), Some("extra image location info"));
    assert!(!location.detection_properties.contains_key(FEED_FORWARD_COUNT));
}

#[test]
fn test_hello_video() {
    let component = hello();
    let job = VideoJob::new(
        header(
            "TestVideoJob",
            "RandomVideoFile",
            properties_from([("FRAME_INTERVAL", "5")]),
            Properties::new(),
        ),
        100,
        199,
    );

    let tracks = component.get_detections_from_video(&job).unwrap();

    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    assert_eq!((track.start_frame, track.stop_frame), (100, 199));
    assert!((track.confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
    assert_eq!(metadata(&track.detection_properties), Some("extra video track info"));
    assert_eq!(track.frame_locations.len(), 1);

    let location = &track.frame_locations[&100];
    assert_eq!((location.width, location.height), (100, 100));
    assert_eq!(metadata(&location.detection_properties), Some("extra image location info"));
}

#[test]
fn test_hello_audio() {
    let component = hello();
    // Start and stop times are both inclusive.
    let job = AudioJob::new(
        header("TestAudioJob", "RandomAudioFile", Properties::new(), Properties::new()),
        10000,
        19999,
    );

    let tracks = component.get_detections_from_audio(&job).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!((tracks[0].start_time, tracks[0].stop_time), (10000, 10001));
    assert!((tracks[0].confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
    assert_eq!(metadata(&tracks[0].detection_properties), Some("extra audio track info"));
}

#[test]
fn test_hello_generic() {
    let component = hello();
    let job = GenericJob::new(header("TestGenericJob", "RandomGenericFile", Properties::new(), Properties::new()));

    let tracks = component.get_detections_from_generic(&job).unwrap();

    assert_eq!(tracks.len(), 1);
    assert!((tracks[0].confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
    assert_eq!(metadata(&tracks[0].detection_properties), Some("extra generic track info"));
}

#[test]
fn test_hello_feed_forward_counts_stages() {
    let component = hello();

    let first_stage = ImageLocation::new(5, 5, 10, 10, 0.5, Properties::new());
    let job = ImageJob::new(header("ff", "image.png", Properties::new(), Properties::new()))
        .with_feed_forward(first_stage);
    let second_stage = component.get_detections_from_image(&job).unwrap().remove(0);
    assert_eq!(second_stage.detection_properties[FEED_FORWARD_COUNT], "1");

    let job = ImageJob::new(header("ff", "image.png", Properties::new(), Properties::new()))
        .with_feed_forward(second_stage);
    let third_stage = component.get_detections_from_image(&job).unwrap().remove(0);
    assert_eq!(third_stage.detection_properties[FEED_FORWARD_COUNT], "2");
}

#[test]
fn test_hello_feed_forward_video_track() {
    let component = hello();
    let previous = mpf_component_core::VideoTrack::new(
        0,
        10,
        BTreeMap::new(),
        0.4,
        properties_from([(FEED_FORWARD_COUNT, "4")]),
    );
    let job = VideoJob::new(header("ff", "video.mp4", Properties::new(), Properties::new()), 0, 10)
        .with_feed_forward(previous);

    let track = component.get_detections_from_video(&job).unwrap().remove(0);

    assert_eq!(track.detection_properties[FEED_FORWARD_COUNT], "5");
    assert_eq!(track.frame_locations[&0].detection_properties[FEED_FORWARD_COUNT], "5");
}

#[test]
fn test_hello_feed_forward_audio_track() {
    let component = hello();
    let previous = AudioTrack::new(0, 10, 0.4, properties_from([(FEED_FORWARD_COUNT, "not a number")]));
    let job = AudioJob::new(header("ff", "clip.wav", Properties::new(), Properties::new()), 0, 10)
        .with_feed_forward(previous);

    let err = component.get_detections_from_audio(&job).unwrap_err();
    assert_eq!(err.kind(), DetectionErrorKind::InvalidProperty);
}

#[test]
fn test_hello_requires_init() {
    let mut component = HelloWorldComponent::new();
    let job = GenericJob::new(header("TestGenericJob", "RandomGenericFile", Properties::new(), Properties::new()));

    let err = component.get_detections_from_generic(&job).unwrap_err();
    assert_eq!(err.kind(), DetectionErrorKind::DetectionNotInitialized);

    component.init().unwrap();
    assert!(component.get_detections_from_generic(&job).is_ok());

    component.close().unwrap();
    assert!(component.get_detections_from_generic(&job).is_err());
}

#[test]
fn test_hello_metadata() {
    let component = hello();
    assert_eq!(component.detection_type(), "HELLO");
    assert!(DataType::ALL.iter().all(|data_type| component.supports(*data_type)));
}

// --- Audio/Video ---

#[test]
fn test_audio_video_rejects_images() {
    let component = audio_video();
    let job = ImageJob::new(header("TestImageJob", "RandomImageFile", Properties::new(), Properties::new()));

    let err = component.get_detections_from_image(&job).unwrap_err();
    assert_eq!(err.kind(), DetectionErrorKind::UnsupportedDataType);
}

#[test]
fn test_audio_video_video() {
    let component = audio_video();
    let start_frame = 99;
    let stop_frame = 100;
    let job = VideoJob::new(
        header(
            "TestVideoJob",
            "RandomVideoFile",
            properties_from([("FRAME_INTERVAL", "5")]),
            properties_from([("FPS", "24"), ("DURATION", "60000"), ("FRAME_COUNT", "1440")]),
        ),
        start_frame,
        stop_frame,
    );

    let tracks = component.get_detections_from_video(&job).unwrap();

    // Frame 99 starts at 4125 ms; the one-millisecond audio track maps back
    // to frames 99 through 100.
    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    assert_eq!((track.start_frame, track.stop_frame), (start_frame, stop_frame));
    assert!((track.confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
    assert_eq!(metadata(&track.detection_properties), Some("extra audio track info"));
    assert_eq!(track.frame_locations.len(), 1);

    for location in track.frame_locations.values() {
        assert_eq!(
            (location.x_left_upper, location.y_left_upper, location.width, location.height),
            (0, 0, 0, 0)
        );
        assert!((location.confidence - 0.8).abs() < CONFIDENCE_TOLERANCE);
        assert_eq!(metadata(&location.detection_properties), Some("extra audio track info"));
    }
}

#[test]
fn test_audio_video_audio() {
    let component = audio_video();
    let job = AudioJob::new(
        header("TestAudioJob", "RandomAudioFile", Properties::new(), Properties::new()),
        10000,
        19999,
    );

    let tracks = component.get_detections_from_audio(&job).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!((tracks[0].start_time, tracks[0].stop_time), (10000, 10001));
    assert_eq!(metadata(&tracks[0].detection_properties), Some("extra audio track info"));
}

#[test]
fn test_audio_video_overflowing_stop_time() {
    let component = audio_video();
    let job = AudioJob::new(
        header("TestAudioJob", "RandomAudioFile", Properties::new(), Properties::new()),
        i32::MAX,
        i32::MAX,
    );

    let err = component.get_detections_from_audio(&job).unwrap_err();
    assert_eq!(err.kind(), DetectionErrorKind::DetectionFailed);
}

#[test]
fn test_audio_video_requires_init() {
    let component = AudioVideoAdapter::new(AudioVideoComponent::new());
    let job = AudioJob::new(
        header("TestAudioJob", "RandomAudioFile", Properties::new(), Properties::new()),
        0,
        1000,
    );

    let err = component.get_detections_from_audio(&job).unwrap_err();
    assert_eq!(err.kind(), DetectionErrorKind::DetectionNotInitialized);
}
