//! Dialer - argument handling and the playback loop

use clap::Parser;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use saavy_dtmf::{
    output::{AudioOutput, CpalOutput, EventRecorder, OutputEvent},
    PlaybackReport, Sequencer, Timing, ToneShape, ToneSource,
};

const DRY_RUN_SAMPLE_RATE: f32 = 48_000.0;

#[derive(Parser, Debug)]
#[command(name = "dtmf")]
#[command(about = "Play DTMF keypad tones")]
#[command(version)]
pub struct Args {
    /// Keypad symbols to dial (0-9, * and #; anything else is skipped).
    /// Reads one sequence per line from stdin when omitted.
    pub digits: Vec<String>,

    /// Tone length in milliseconds
    #[arg(long, env = "DTMF_TONE_MS", default_value_t = 100)]
    pub tone_ms: u64,

    /// Silence between tones in milliseconds
    #[arg(long, env = "DTMF_SILENCE_MS", default_value_t = 40)]
    pub silence_ms: u64,

    /// Output gain applied to the summed tone pair
    #[arg(long, env = "DTMF_GAIN", default_value_t = 0.25)]
    pub gain: f32,

    /// Low-pass cutoff in Hz
    #[arg(long, env = "DTMF_CUTOFF_HZ", default_value_t = 8_000.0)]
    pub cutoff: f32,

    /// Don't open an audio device; print the tone schedule instead
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Playback settings resolved from the command line.
pub struct Dialer {
    timing: Timing,
    shape: ToneShape,
    dry_run: bool,
}

impl Dialer {
    pub fn from_args(args: &Args) -> EyreResult<Self> {
        if !(args.gain.is_finite() && (0.0..=1.0).contains(&args.gain)) {
            return Err(eyre!("gain must be between 0.0 and 1.0, got {}", args.gain));
        }
        if !(args.cutoff.is_finite() && args.cutoff > 0.0) {
            return Err(eyre!("cutoff must be a positive frequency, got {}", args.cutoff));
        }

        Ok(Self {
            timing: Timing::from_millis(args.tone_ms, args.silence_ms),
            shape: ToneShape {
                gain: args.gain,
                cutoff_hz: args.cutoff,
            },
            dry_run: args.dry_run,
        })
    }

    /// Run until the input is exhausted or Ctrl-C is pressed.
    pub async fn run(self, digits: Vec<String>) -> EyreResult<()> {
        let cancel = CancellationToken::new();
        tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            }
        });

        if self.dry_run {
            let mut source =
                ToneSource::new(EventRecorder::new(DRY_RUN_SAMPLE_RATE)).with_shape(self.shape);
            self.drive(&mut source, digits, &cancel).await?;
            print_schedule(source.output().events());
        } else {
            let output = CpalOutput::open_default().wrap_err("failed to open audio output")?;
            let mut source = ToneSource::new(output).with_shape(self.shape);
            self.drive(&mut source, digits, &cancel).await?;
        }

        Ok(())
    }

    async fn drive<O: AudioOutput>(
        &self,
        source: &mut ToneSource<O>,
        digits: Vec<String>,
        cancel: &CancellationToken,
    ) -> EyreResult<()> {
        let sequencer = Sequencer::new(self.timing);

        if !digits.is_empty() {
            let text = digits.concat();
            self.play_line(&sequencer, source, &text, cancel).await?;
            return Ok(());
        }

        info!("reading sequences from stdin, one per line");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = tokio::select! {
                _ = cancel.cancelled() => break,
                line = lines.next_line() => line.wrap_err("failed to read stdin")?,
            };
            let Some(line) = line else { break };

            let report = self.play_line(&sequencer, source, line.trim(), cancel).await?;
            if report.cancelled {
                break;
            }
        }

        Ok(())
    }

    async fn play_line<O: AudioOutput>(
        &self,
        sequencer: &Sequencer,
        source: &mut ToneSource<O>,
        text: &str,
        cancel: &CancellationToken,
    ) -> EyreResult<PlaybackReport> {
        let report = sequencer
            .play_until_cancelled(source, text, cancel)
            .await
            .wrap_err_with(|| format!("failed to play {text:?}"))?;

        if report.cancelled {
            warn!(emitted = report.emitted, "playback cancelled");
        } else {
            info!(
                emitted = report.emitted,
                skipped = report.skipped,
                "played {text:?}"
            );
        }
        Ok(report)
    }
}

fn print_schedule(events: &[OutputEvent]) {
    println!("=== Tone schedule ===");
    for event in events {
        match event {
            OutputEvent::Started { pair, at } => {
                println!("{:>8.3}s  on   {:>4} Hz + {:>4} Hz", at.as_secs_f64(), pair.f1, pair.f2);
            }
            OutputEvent::Stopped { at } => {
                println!("{:>8.3}s  off", at.as_secs_f64());
            }
        }
    }
}
