//! Error handling for tone synthesis and playback.

pub type Result<T> = std::result::Result<T, DtmfError>;

#[derive(Debug, thiserror::Error)]
pub enum DtmfError {
    /// The host cannot provide an audio output we know how to drive.
    #[error("Unsupported audio environment: {0}")]
    UnsupportedEnvironment(String),

    #[error("Unknown DTMF symbol {0:?}")]
    UnknownSymbol(char),

    /// A second `start` was issued while a tone was still sounding.
    #[error("Tone source is already playing")]
    AlreadyPlaying,

    #[error("Invalid tone frequency: {0} Hz")]
    InvalidFrequency(f32),

    #[error("Audio stream error: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Audio stream error: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("Audio device error: {0}")]
    DeviceConfig(#[from] cpal::DefaultStreamConfigError),

    /// The audio thread has not drained earlier commands yet.
    #[error("Audio control queue is full")]
    ControlQueueFull,
}

impl DtmfError {
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedEnvironment(msg.into())
    }
}
