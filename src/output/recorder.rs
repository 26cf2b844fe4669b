use std::time::Duration;

use tokio::time::Instant;

use crate::{dtmf::FrequencyPair, error::Result, output::AudioOutput, tone::ToneChain};

/// One entry in an [`EventRecorder`] log.
///
/// `at` is measured from the recorder's creation on the tokio clock, so it
/// is exact under a paused test runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputEvent {
    Started { pair: FrequencyPair, at: Duration },
    Stopped { at: Duration },
}

/// Offline output: logs chain attach/detach instead of producing sound.
///
/// The attached chain is kept so it can be rendered on demand.
pub struct EventRecorder {
    sample_rate: f32,
    origin: Instant,
    events: Vec<OutputEvent>,
    chain: Option<ToneChain>,
}

impl EventRecorder {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            origin: Instant::now(),
            events: Vec::new(),
            chain: None,
        }
    }

    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// Frequency pairs in the order they were started.
    pub fn tones(&self) -> Vec<FrequencyPair> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Started { pair, .. } => Some(*pair),
                OutputEvent::Stopped { .. } => None,
            })
            .collect()
    }

    pub fn is_sounding(&self) -> bool {
        self.chain.is_some()
    }

    /// Render the attached chain into `out`, or silence if nothing is attached.
    pub fn render(&mut self, out: &mut [f32]) {
        match self.chain.as_mut() {
            Some(chain) => chain.render(out),
            None => out.fill(0.0),
        }
    }

    fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.origin)
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new(48_000.0)
    }
}

impl AudioOutput for EventRecorder {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn play(&mut self, chain: ToneChain) -> Result<()> {
        let at = self.elapsed();
        self.events.push(OutputEvent::Started {
            pair: chain.pair(),
            at,
        });
        self.chain = Some(chain);
        Ok(())
    }

    fn silence(&mut self) -> Result<()> {
        if self.chain.take().is_some() {
            let at = self.elapsed();
            self.events.push(OutputEvent::Stopped { at });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::ToneShape;

    #[test]
    fn renders_silence_when_idle() {
        let mut recorder = EventRecorder::default();
        let mut buffer = vec![1.0f32; 64];
        recorder.render(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn logs_start_and_stop() {
        let mut recorder = EventRecorder::new(8_000.0);
        let pair = FrequencyPair::new(697.0, 1209.0);
        recorder
            .play(ToneChain::new(pair, ToneShape::default(), 8_000.0))
            .unwrap();
        assert!(recorder.is_sounding());

        recorder.silence().unwrap();
        recorder.silence().unwrap();

        assert!(!recorder.is_sounding());
        assert_eq!(recorder.tones(), vec![pair]);
        assert_eq!(recorder.events().len(), 2);
        assert!(matches!(recorder.events()[1], OutputEvent::Stopped { .. }));
    }
}
