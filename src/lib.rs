//! Parse WebVTT transcripts into timed cues and look up the cue active at a
//! given playback time.
//!
//! ```
//! let cues = vttcue::parse("WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello\n");
//!
//! assert_eq!(vttcue::current_cue(&cues, 1.0).map(|cue| cue.text()), Some("Hello"));
//! ```

pub mod cue;
pub mod error;
pub mod parser;
pub mod serialiser;
pub mod transcript;

pub use crate::cue::Cue;
pub use crate::error::VttError;
pub use crate::parser::{decode_timestamp, parse};
pub use crate::serialiser::serialise;
pub use crate::transcript::{all_text, current_cue};
