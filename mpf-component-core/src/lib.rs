//! Software development kit for MPF detection components.
//!
//! This crate provides the job and result data model exchanged with the host,
//! the detection error taxonomy, the component contract, and an adapter that
//! lets an audio-only detector process video jobs by converting frame windows
//! to time windows and back.
//!
//! ## Usage Example
//!
//! ```rust
//! use mpf_component_core::{
//!     AudioDetection, AudioJob, AudioTrack, AudioVideoAdapter, Component, ComponentState,
//!     DetectionComponent, DetectionResult, JobHeader, VideoJob, properties_from,
//! };
//! use std::path::{Path, PathBuf};
//!
//! #[derive(Default)]
//! struct Beeps {
//!     state: ComponentState,
//! }
//!
//! impl Component for Beeps {
//!     fn init(&mut self) -> DetectionResult<()> { self.state.init(); Ok(()) }
//!     fn close(&mut self) -> DetectionResult<()> { self.state.close(); Ok(()) }
//!     fn run_directory(&self) -> Option<&Path> { self.state.run_directory() }
//!     fn set_run_directory(&mut self, dir: PathBuf) { self.state.set_run_directory(dir) }
//! }
//!
//! impl AudioDetection for Beeps {
//!     fn get_detections_from_audio(&self, job: &AudioJob) -> DetectionResult<Vec<AudioTrack>> {
//!         self.state.ensure_initialized()?;
//!         Ok(vec![AudioTrack::new(job.start_time(), job.start_time() + 500, 0.9, Default::default())])
//!     }
//!     fn detection_type(&self) -> &str { "BEEP" }
//! }
//!
//! let mut component = AudioVideoAdapter::new(Beeps::default());
//! component.init().unwrap();
//!
//! let media = properties_from([("FPS", "30"), ("DURATION", "10000"), ("FRAME_COUNT", "300")]);
//! let job = VideoJob::new(JobHeader::new("job", "movie.mp4", Default::default(), media), 0, 299);
//! let tracks = component.get_detections_from_video(&job).unwrap();
//! assert_eq!((tracks[0].start_frame, tracks[0].stop_frame), (0, 15));
//! ```

pub mod adapter;
pub mod component;
pub mod config;
pub mod conversion;
pub mod error;
pub mod job;
pub mod path_expansion;
pub mod properties;
pub mod track;

// Re-exports for public API
pub use adapter::{AudioDetection, AudioVideoAdapter};
pub use component::{Component, ComponentState, ComponentType, DataType, DetectionComponent};
pub use config::{AdapterConfig, FrameRangePolicy};
pub use conversion::{MediaTiming, derive_audio_job, remap_audio_tracks_to_video_tracks};
pub use error::{ComponentDetectionFailure, DetectionErrorKind, DetectionResult};
pub use job::{AudioJob, GenericJob, ImageJob, Job, JobHeader, VideoJob};
pub use path_expansion::{expand_env_vars, expand_with};
pub use properties::{Properties, properties_from};
pub use track::{AudioTrack, GenericTrack, ImageLocation, VideoTrack};
