//! Sequencer - timed keypad playback
//!
//! Turns a string of keypad symbols into tones: each known symbol sounds for
//! the tone duration and is followed by the silence duration. Unknown
//! characters are skipped without a pause.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{dtmf, error::Result, output::AudioOutput, tone::ToneSource};

/// How long each tone sounds and how long the gap after it lasts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub tone: Duration,
    pub silence: Duration,
}

impl Timing {
    pub fn from_millis(tone_ms: u64, silence_ms: u64) -> Self {
        Self {
            tone: Duration::from_millis(tone_ms),
            silence: Duration::from_millis(silence_ms),
        }
    }

    /// Time taken by one emitted symbol.
    pub fn per_symbol(&self) -> Duration {
        self.tone + self.silence
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(100, 40)
    }
}

/// What happened during one call to [`Sequencer::play`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Tones that were started.
    pub emitted: usize,
    /// Characters with no keypad entry.
    pub skipped: usize,
    /// Playback stopped early because the token was cancelled.
    pub cancelled: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer {
    timing: Timing,
}

impl Sequencer {
    pub fn new(timing: Timing) -> Self {
        Self { timing }
    }

    /// Play every symbol in `symbols` through `source`, in order.
    ///
    /// Taking the source by `&mut` means a source drives one sequence at a
    /// time; a second concurrent sequence needs its own source.
    pub async fn play<O: AudioOutput>(
        &self,
        source: &mut ToneSource<O>,
        symbols: &str,
    ) -> Result<PlaybackReport> {
        self.play_until_cancelled(source, symbols, &CancellationToken::new())
            .await
    }

    /// Like [`play`](Self::play), but stops early once `cancel` fires.
    ///
    /// The token is checked before every tone and raced against both waits.
    /// A tone that is sounding when the token fires is stopped immediately
    /// and no further symbols are played.
    pub async fn play_until_cancelled<O: AudioOutput>(
        &self,
        source: &mut ToneSource<O>,
        symbols: &str,
        cancel: &CancellationToken,
    ) -> Result<PlaybackReport> {
        let mut report = PlaybackReport::default();
        debug!(symbols, "sequence started");

        for symbol in symbols.chars() {
            let Some(pair) = dtmf::lookup(symbol) else {
                trace!(?symbol, "skipping unknown symbol");
                report.skipped += 1;
                continue;
            };

            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            source.configure(pair.f1, pair.f2)?;
            let tone = source.sound()?;
            report.emitted += 1;
            trace!(?symbol, f1 = pair.f1, f2 = pair.f2, "symbol sounding");

            let interrupted = wait(self.timing.tone, cancel).await;
            tone.stop()?;

            if interrupted || wait(self.timing.silence, cancel).await {
                report.cancelled = true;
                break;
            }
        }

        debug!(
            emitted = report.emitted,
            skipped = report.skipped,
            cancelled = report.cancelled,
            "sequence finished"
        );
        Ok(report)
    }
}

/// Sleep for `duration`; returns `true` if `cancel` fired first.
async fn wait(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => true,
        _ = tokio::time::sleep(duration) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dtmf::FrequencyPair,
        output::{EventRecorder, OutputEvent},
    };
    use tokio::time::Instant;

    fn source() -> ToneSource<EventRecorder> {
        ToneSource::new(EventRecorder::new(48_000.0))
    }

    // The paused clock lands on millisecond ticks; allow the tick rounding.
    fn assert_elapsed(start: Instant, ms: u64) {
        let elapsed = start.elapsed();
        let expected = Duration::from_millis(ms);
        assert!(
            elapsed >= expected && elapsed <= expected + Duration::from_millis(1),
            "expected {expected:?}, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn plays_symbols_in_order() {
        let mut source = source();
        let report = Sequencer::default().play(&mut source, "123").await.unwrap();

        assert_eq!(report.emitted, 3);
        assert_eq!(report.skipped, 0);
        assert!(!report.cancelled);
        assert_eq!(
            source.output().tones(),
            vec![
                FrequencyPair::new(697.0, 1209.0),
                FrequencyPair::new(697.0, 1336.0),
                FrequencyPair::new(697.0, 1477.0),
            ]
        );
        assert!(!source.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn total_time_is_tone_plus_silence_per_symbol() {
        let mut source = source();
        let start = Instant::now();
        Sequencer::default().play(&mut source, "123").await.unwrap();

        assert_elapsed(start, 420);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_completes_immediately() {
        let mut source = source();
        let start = Instant::now();
        let report = Sequencer::default().play(&mut source, "").await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(report, PlaybackReport::default());
        assert!(source.output().events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_symbols_add_no_delay() {
        let mut source = source();
        let start = Instant::now();
        let report = Sequencer::default().play(&mut source, "1a2").await.unwrap();

        assert_elapsed(start, 280);
        assert_eq!(report.emitted, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            source.output().tones(),
            vec![FrequencyPair::new(697.0, 1209.0), FrequencyPair::new(697.0, 1336.0)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn tones_are_separated_by_silence() {
        let mut source = source();
        let sequencer = Sequencer::new(Timing::from_millis(70, 30));
        sequencer.play(&mut source, "9*0#").await.unwrap();

        let events = source.output().events();
        assert_eq!(events.len(), 8);
        for pair in events.chunks(2) {
            match pair {
                [OutputEvent::Started { at: on, .. }, OutputEvent::Stopped { at: off }] => {
                    assert_eq!(*off - *on, Duration::from_millis(70));
                }
                other => panic!("expected start/stop pair, got {other:?}"),
            }
        }
        for gap in events[1..].chunks_exact(2) {
            let [OutputEvent::Stopped { at: off }, OutputEvent::Started { at: on, .. }] = gap else {
                panic!("expected stop/start gap, got {gap:?}");
            };
            assert_eq!(*on - *off, Duration::from_millis(30));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pre_cancelled_token_plays_nothing() {
        let mut source = source();
        let token = CancellationToken::new();
        token.cancel();

        let report = Sequencer::default()
            .play_until_cancelled(&mut source, "5555", &token)
            .await
            .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.emitted, 0);
        assert!(source.output().events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelling_mid_tone_stops_it_and_skips_the_rest() {
        let mut source = source();
        let token = CancellationToken::new();

        let canceller = {
            let token = token.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(190)).await;
                token.cancel();
            })
        };

        let start = Instant::now();
        let report = Sequencer::default()
            .play_until_cancelled(&mut source, "123456", &token)
            .await
            .unwrap();
        canceller.await.unwrap();

        // Second tone runs 140..240 ms; cancellation lands inside it.
        assert_elapsed(start, 190);
        assert!(report.cancelled);
        assert_eq!(report.emitted, 2);
        assert!(!source.is_playing());
        assert!(!source.output().is_sounding());
        assert!(matches!(
            source.output().events().last(),
            Some(OutputEvent::Stopped { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_sequence_leaves_source_idle() {
        let mut source = source();
        let sequencer = Sequencer::default();

        let outcome = tokio::time::timeout(
            Duration::from_millis(50),
            sequencer.play(&mut source, "000"),
        )
        .await;

        assert!(outcome.is_err(), "sequence should still be running at 50 ms");
        assert!(!source.is_playing());
        assert!(!source.output().is_sounding());
    }
}
