use crate::error::OutputError;
use crate::util::utils::{bool_to_byte, make_frame};
use std::fmt;

pub const OUTPUT_COUNT: usize = 4;
pub const OUTPUT_TAG: u8 = b'O';
const MASK_CMD: u8 = b'M';
pub const COMMAND_FRAME_LEN: usize = 3 + 2 * OUTPUT_COUNT + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputChannel(u8);

impl OutputChannel {
    pub fn new(index: usize) -> Result<Self, OutputError> {
        if index < OUTPUT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(OutputError::InvalidArgument(format!(
                "output channel {index} out of range 0..={}",
                OUTPUT_COUNT - 1
            )))
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for OutputChannel {
    type Error = OutputError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Display for OutputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output {}", self.0)
    }
}

/// One atomic output update: channel `i` is driven to `values[i]` only where `apply[i]` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandMask {
    apply: [bool; OUTPUT_COUNT],
    values: [bool; OUTPUT_COUNT],
}

impl CommandMask {
    pub fn new(apply: [bool; OUTPUT_COUNT], values: [bool; OUTPUT_COUNT]) -> Self {
        Self { apply, values }
    }

    pub fn from_slices(apply: &[bool], values: &[bool]) -> Result<Self, OutputError> {
        let apply: [bool; OUTPUT_COUNT] = apply.try_into().map_err(|_| {
            OutputError::InvalidArgument(format!(
                "mask has {} entries, expected {OUTPUT_COUNT}",
                apply.len()
            ))
        })?;
        let values: [bool; OUTPUT_COUNT] = values.try_into().map_err(|_| {
            OutputError::InvalidArgument(format!(
                "values has {} entries, expected {OUTPUT_COUNT}",
                values.len()
            ))
        })?;
        Ok(Self { apply, values })
    }

    pub fn single(channel: OutputChannel, state: bool) -> Self {
        let mut mask = Self::default();
        mask.apply[channel.index()] = true;
        mask.values[channel.index()] = state;
        mask
    }

    pub fn uniform(state: bool) -> Self {
        Self {
            apply: [true; OUTPUT_COUNT],
            values: [state; OUTPUT_COUNT],
        }
    }

    pub fn apply(&self) -> &[bool; OUTPUT_COUNT] {
        &self.apply
    }

    pub fn values(&self) -> &[bool; OUTPUT_COUNT] {
        &self.values
    }

    pub fn command_builder(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + 2 * OUTPUT_COUNT);
        payload.push(MASK_CMD);
        payload.extend(self.apply.iter().map(|&a| bool_to_byte(a)));
        payload.extend(self.values.iter().map(|&v| bool_to_byte(v)));
        make_frame(OUTPUT_TAG, payload.as_slice())
    }
}
