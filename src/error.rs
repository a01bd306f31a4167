/// Rejected construction input.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    TooFewWeights,
    TooManyWeights { len: usize },
    NonPositiveWeight { index: usize, value: f64 },
    NonFiniteWeight { index: usize },
    OutcomeMismatch { items: usize, outcomes: usize },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::TooFewWeights => write!(f, "too few weights"),
            BuildError::TooManyWeights { len } => {
                write!(f, "too many weights: {len} exceeds the outcome index range")
            }
            BuildError::NonPositiveWeight { index, value } => {
                write!(f, "weight at index {index} is non-positive: {value}")
            }
            BuildError::NonFiniteWeight { index } => {
                write!(f, "weight at index {index} is not finite")
            }
            BuildError::OutcomeMismatch { items, outcomes } => {
                write!(f, "{items} items given for a table with {outcomes} outcomes")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Rejected binary encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MalformedLength { len: usize },
    Empty,
    TooLarge { slots: usize },
    ThresholdOutOfRange { slot: usize, threshold: u32 },
    AliasOutOfRange { slot: usize, alias: u32 },
    DummyOutOfRange { dummy: u32, slots: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::MalformedLength { len } => {
                write!(f, "bad data length: {len} is not a multiple of 4")
            }
            DecodeError::Empty => write!(f, "bad data: no slots"),
            DecodeError::TooLarge { slots } => write!(f, "data too large: {slots} slots"),
            DecodeError::ThresholdOutOfRange { slot, threshold } => {
                write!(f, "bad data: threshold {threshold} of slot {slot} out of range")
            }
            DecodeError::AliasOutOfRange { slot, alias } => {
                write!(f, "bad data: alias target {alias} of slot {slot} out of range")
            }
            DecodeError::DummyOutOfRange { dummy, slots } => {
                write!(f, "bad data: dummy index {dummy} invalid for {slots} slots")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
