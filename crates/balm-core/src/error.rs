#[derive(thiserror::Error, Debug)]
pub enum BalmError {
    #[error("Reflection response must not be empty")]
    EmptyReflection,

    #[error("No reflection prompt at index {index} (valid: 0-{max})")]
    PromptIndexOutOfRange { index: usize, max: usize },

    #[error("Data directory '{0}' is not writable")]
    DataDirNotWritable(String),

    #[error("Breathing cycle count and phase seconds must be at least 1")]
    InvalidBreathingConfig,
}
