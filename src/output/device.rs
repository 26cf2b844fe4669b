use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, error, info};

use crate::{
    error::{DtmfError, Result},
    output::AudioOutput,
    tone::ToneChain,
    MAX_BLOCK_SIZE,
};

/*
Realtime Device Output
======================

The audio callback runs on a thread we don't own and must never block or
allocate. The control side (the sequencer) talks to it through two
single-producer/single-consumer rings:

    control ── commands ──→ audio callback     Attach(chain) / Detach
    control ←── retired ─── audio callback     chains no longer playing

Chains are boxed on the control side before being sent, and come back the
same way once detached, so the callback only ever moves pointers around and
every allocation and deallocation happens off the audio thread.

The callback renders mono and duplicates it into every device channel.
*/

const COMMAND_CAPACITY: usize = 16;

enum ChainCommand {
    Attach(Box<ToneChain>),
    Detach,
}

struct CallbackState {
    commands: Consumer<ChainCommand>,
    retired: Producer<Box<ToneChain>>,
    current: Option<Box<ToneChain>>,
    render_buf: Vec<f32>,
    channels: usize,
}

impl CallbackState {
    fn retire(&mut self) {
        if let Some(chain) = self.current.take() {
            // The control side drains this ring on every command, so it only
            // fills up if the control side stalls. Dropping here is the fallback.
            let _ = self.retired.push(chain);
        }
    }

    fn apply_commands(&mut self) {
        while let Ok(command) = self.commands.pop() {
            match command {
                ChainCommand::Attach(chain) => {
                    self.retire();
                    self.current = Some(chain);
                }
                ChainCommand::Detach => self.retire(),
            }
        }
    }

    fn fill(&mut self, data: &mut [f32]) {
        self.apply_commands();

        let channels = self.channels;
        let total_frames = data.len() / channels;
        let mut frames_written = 0;

        while frames_written < total_frames {
            let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
            let block = &mut self.render_buf[..frames_to_render];

            match self.current.as_mut() {
                Some(chain) => chain.render(block),
                None => block.fill(0.0),
            }

            // Duplicate mono to all channels
            let out_off = frames_written * channels;
            for (i, &s) in block.iter().enumerate() {
                for ch in 0..channels {
                    data[out_off + i * channels + ch] = s;
                }
            }

            frames_written += frames_to_render;
        }
    }
}

/// Plays tone chains on the host's default output device.
pub struct CpalOutput {
    _stream: cpal::Stream,
    sample_rate: f32,
    commands: Producer<ChainCommand>,
    retired: Consumer<Box<ToneChain>>,
}

impl CpalOutput {
    /// Open the default output device and start a silent stream on it.
    pub fn open_default() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| DtmfError::unsupported("no default output device available"))?;
        let config = device.default_output_config()?;

        if config.sample_format() != cpal::SampleFormat::F32 {
            return Err(DtmfError::unsupported(format!(
                "output device uses {:?} samples, f32 required",
                config.sample_format()
            )));
        }

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        info!(
            device = %device.name().unwrap_or_else(|_| "<unknown>".into()),
            sample_rate,
            channels,
            "opened audio output"
        );

        let (commands_tx, commands_rx) = RingBuffer::<ChainCommand>::new(COMMAND_CAPACITY);
        let (retired_tx, retired_rx) = RingBuffer::<Box<ToneChain>>::new(COMMAND_CAPACITY);

        let mut state = CallbackState {
            commands: commands_rx,
            retired: retired_tx,
            current: None,
            render_buf: vec![0.0f32; MAX_BLOCK_SIZE],
            channels,
        };

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| state.fill(data),
            |err| error!(%err, "audio stream error"),
            None,
        )?;
        stream.play()?;

        Ok(Self {
            _stream: stream,
            sample_rate,
            commands: commands_tx,
            retired: retired_rx,
        })
    }

    fn send(&mut self, command: ChainCommand) -> Result<()> {
        self.collect_retired();
        self.commands
            .push(command)
            .map_err(|_| DtmfError::ControlQueueFull)
    }

    fn collect_retired(&mut self) {
        let mut collected = 0usize;
        while self.retired.pop().is_ok() {
            collected += 1;
        }
        if collected > 0 {
            debug!(collected, "released retired tone chains");
        }
    }
}

impl AudioOutput for CpalOutput {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn play(&mut self, chain: ToneChain) -> Result<()> {
        self.send(ChainCommand::Attach(Box::new(chain)))
    }

    fn silence(&mut self) -> Result<()> {
        self.send(ChainCommand::Detach)
    }
}
