//! Audio sinks that tone chains are rendered into.
//!
//! `AudioOutput` is the seam between the tone logic and whatever actually
//! produces sound. `CpalOutput` drives the default device in realtime;
//! `EventRecorder` renders nothing live and instead keeps a timestamped
//! log of what would have played.

#[cfg(feature = "rtrb")]
mod device;
mod recorder;

#[cfg(feature = "rtrb")]
pub use device::CpalOutput;
pub use recorder::{EventRecorder, OutputEvent};

use crate::{error::Result, tone::ToneChain};

/// Something a tone chain can be connected to.
///
/// At most one chain sounds at a time: `play` replaces the current chain,
/// `silence` detaches it.
pub trait AudioOutput {
    fn sample_rate(&self) -> f32;

    fn play(&mut self, chain: ToneChain) -> Result<()>;

    fn silence(&mut self) -> Result<()>;
}

impl<O: AudioOutput + ?Sized> AudioOutput for &mut O {
    fn sample_rate(&self) -> f32 {
        (**self).sample_rate()
    }

    fn play(&mut self, chain: ToneChain) -> Result<()> {
        (**self).play(chain)
    }

    fn silence(&mut self) -> Result<()> {
        (**self).silence()
    }
}
