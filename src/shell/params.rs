//! Forward-only parameter cursor and numeric conversion.

use core::str::SplitWhitespace;

use crate::error::ShellError;

/// Cursor over the tokens that follow the command name.
///
/// Tokens are handed out strictly in order; once a token has been read it
/// cannot be pushed back.
#[derive(Debug, Clone)]
pub struct Params<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Params<'a> {
    pub fn new(args_raw: &'a str) -> Self {
        Self {
            tokens: args_raw.split_whitespace(),
        }
    }

    /// Next whitespace-delimited token, or `None` once the line is exhausted.
    pub fn read_param(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }
}

/// Convert a decimal token to an unsigned integer.
///
/// Only ASCII digits are accepted: no sign, no fraction, no radix prefix.
/// A well-formed token too large for `u32` saturates at `u32::MAX` so the
/// caller's clamp still applies. Anything else is `None`.
pub fn param_to_uint(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    }))
}

/// What a numeric parameter does with a token that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnInvalid {
    /// Use this value instead (it is still clamped).
    Substitute(u32),
    /// Refuse the command with this message.
    Reject(&'static str),
}

/// Range and fallback declared by each numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UintPolicy {
    pub min: u32,
    pub max: u32,
    pub on_invalid: OnInvalid,
}

impl UintPolicy {
    pub const fn new(min: u32, max: u32, on_invalid: OnInvalid) -> Self {
        Self {
            min,
            max,
            on_invalid,
        }
    }

    /// Resolve `token` to a value inside `[min, max]`.
    pub fn apply(&self, token: &str) -> Result<u32, ShellError> {
        let raw = match param_to_uint(token) {
            Some(value) => value,
            None => match self.on_invalid {
                OnInvalid::Substitute(value) => value,
                OnInvalid::Reject(message) => return Err(ShellError::InvalidArgument(message)),
            },
        };
        Ok(raw.clamp(self.min, self.max))
    }
}
