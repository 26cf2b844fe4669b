//! DTMF tone synthesis and keypad sequencing.
//!
//! ```ignore
//! use saavy_dtmf::{output::EventRecorder, Sequencer, ToneSource};
//!
//! let mut source = ToneSource::new(EventRecorder::default());
//! let report = Sequencer::default().play(&mut source, "555-0123").await?;
//! assert_eq!(report.emitted, 7);
//! ```

pub mod dsp;
pub mod dtmf;
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod output; // Where tone chains are rendered
pub mod sequencer; // Timed keypad playback
pub mod tone;

pub use dtmf::FrequencyPair;
pub use error::{DtmfError, Result};
pub use sequencer::{PlaybackReport, Sequencer, Timing};
pub use tone::{ToneShape, ToneSource};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Play `text` on the default output device with the standard 100 ms tone
/// and 40 ms gap.
#[cfg(feature = "rtrb")]
pub async fn play_sequence(text: &str) -> Result<PlaybackReport> {
    let output = output::CpalOutput::open_default()?;
    let mut source = ToneSource::new(output);
    Sequencer::default().play(&mut source, text).await
}
