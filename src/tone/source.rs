use tracing::{debug, warn};

use crate::{
    dtmf::FrequencyPair,
    error::{DtmfError, Result},
    output::AudioOutput,
    tone::{ToneChain, ToneShape},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneState {
    Idle,    // Nothing attached to the output
    Playing, // A chain is sounding
}

/// One configurable two-frequency tone bound to an audio output.
///
/// The source persists across tones; the signal chain does not. Every
/// `start` builds a new [`ToneChain`] from the current frequencies and
/// shape, and every `stop` detaches it.
pub struct ToneSource<O: AudioOutput> {
    output: O,
    frequencies: FrequencyPair,
    shape: ToneShape,
    state: ToneState,
}

impl<O: AudioOutput> ToneSource<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            frequencies: FrequencyPair::DIAL_TONE,
            shape: ToneShape::default(),
            state: ToneState::Idle,
        }
    }

    pub fn with_shape(mut self, shape: ToneShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the frequencies used by the next `start`.
    ///
    /// A tone that is already sounding keeps its own frequencies until it
    /// is stopped. Frequencies must be finite, positive and below the
    /// output's Nyquist frequency.
    pub fn configure(&mut self, f1: f32, f2: f32) -> Result<()> {
        let nyquist = self.output.sample_rate() * 0.5;
        for frequency in [f1, f2] {
            if !(frequency.is_finite() && frequency > 0.0 && frequency < nyquist) {
                return Err(DtmfError::InvalidFrequency(frequency));
            }
        }

        self.frequencies = FrequencyPair::new(f1, f2);
        Ok(())
    }

    /// Build a chain for the configured pair and connect it to the output.
    ///
    /// Fails with [`DtmfError::AlreadyPlaying`] rather than stacking a second
    /// chain on top of one that is still sounding.
    pub fn start(&mut self) -> Result<()> {
        if self.state == ToneState::Playing {
            return Err(DtmfError::AlreadyPlaying);
        }

        let chain = ToneChain::new(self.frequencies, self.shape, self.output.sample_rate());
        self.output.play(chain)?;
        self.state = ToneState::Playing;

        debug!(f1 = self.frequencies.f1, f2 = self.frequencies.f2, "tone started");
        Ok(())
    }

    /// Detach the sounding chain. Stopping an idle source does nothing.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == ToneState::Idle {
            return Ok(());
        }

        self.output.silence()?;
        self.state = ToneState::Idle;

        debug!("tone stopped");
        Ok(())
    }

    /// Start the tone and return a guard that stops it when dropped.
    pub fn sound(&mut self) -> Result<ActiveTone<'_, O>> {
        self.start()?;
        Ok(ActiveTone { source: self })
    }

    pub fn frequency1(&self) -> f32 {
        self.frequencies.f1
    }

    pub fn frequency2(&self) -> f32 {
        self.frequencies.f2
    }

    pub fn frequencies(&self) -> FrequencyPair {
        self.frequencies
    }

    pub fn shape(&self) -> ToneShape {
        self.shape
    }

    pub fn state(&self) -> ToneState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == ToneState::Playing
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: AudioOutput> Drop for ToneSource<O> {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!(%err, "failed to silence tone source on drop");
        }
    }
}

/// A sounding tone. Stops its source when finished or dropped.
pub struct ActiveTone<'a, O: AudioOutput> {
    source: &'a mut ToneSource<O>,
}

impl<O: AudioOutput> ActiveTone<'_, O> {
    pub fn frequencies(&self) -> FrequencyPair {
        self.source.frequencies
    }

    /// Stop the tone, reporting any output error.
    pub fn stop(self) -> Result<()> {
        self.source.stop()
    }
}

impl<O: AudioOutput> Drop for ActiveTone<'_, O> {
    fn drop(&mut self) {
        if let Err(err) = self.source.stop() {
            warn!(%err, "failed to stop tone");
        }
    }
}
