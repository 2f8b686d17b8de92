// ============================================================================
// mpf-component-cli/src/components/mod.rs
// ============================================================================
//
// EXAMPLE COMPONENTS: Dummy detectors demonstrating the contract
//
// Neither component looks at the media. They return one synthetic result per
// job to show how the contract is implemented:
//
// - `HelloWorldComponent` implements every detection operation directly.
// - `AudioVideoComponent` only implements audio detection and relies on
//   `AudioVideoAdapter` for video jobs.

pub mod audio_video;
pub mod hello_world;

pub use audio_video::AudioVideoComponent;
pub use hello_world::HelloWorldComponent;

use clap::ValueEnum;
use mpf_component_core::properties::{self, FEED_FORWARD_COUNT};
use mpf_component_core::{AdapterConfig, AudioVideoAdapter, DetectionComponent, DetectionResult, Properties};

/// Confidence reported by the example components.
pub const DUMMY_CONFIDENCE: f32 = 0.80;

/// The example components selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExampleComponent {
    /// Hello World: image, video, audio and generic jobs
    Hello,
    /// Audio detector wrapped for audio and video jobs
    AudioVideo,
}

impl ExampleComponent {
    pub const ALL: [ExampleComponent; 2] = [ExampleComponent::Hello, ExampleComponent::AudioVideo];

    pub fn name(self) -> &'static str {
        match self {
            ExampleComponent::Hello => "hello",
            ExampleComponent::AudioVideo => "audio-video",
        }
    }

    /// Constructs an uninitialized instance of the component.
    pub fn build(self, config: AdapterConfig) -> Box<dyn DetectionComponent> {
        match self {
            ExampleComponent::Hello => Box::new(HelloWorldComponent::new()),
            ExampleComponent::AudioVideo => {
                Box::new(AudioVideoAdapter::with_config(AudioVideoComponent::new(), config))
            }
        }
    }
}

/// Stamps `FEED_FORWARD_COUNT` on `properties` when the job carried a
/// feed-forward result: one more than the previous stage's count, or 1 when
/// the previous result had none.
pub(crate) fn stamp_feed_forward_count(
    properties: &mut Properties,
    feed_forward: Option<&Properties>,
) -> DetectionResult<()> {
    let Some(previous) = feed_forward else {
        return Ok(());
    };

    let count = properties::optional_i32(previous, FEED_FORWARD_COUNT)?
        .unwrap_or(0)
        .saturating_add(1);
    properties.insert(FEED_FORWARD_COUNT.to_string(), count.to_string());
    Ok(())
}
