use super::{Alphabet, ALPHABET, BYTE_LEN, TEXT_LEN};
use crate::base_common::alphabet;
use crate::base_convert;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    /// The digits name a value of 2^128 or more.
    ValueOutOfRange,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { length } => write!(f, "Invalid input length {}, expected {}", length, TEXT_LEN),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Error::ValueOutOfRange => write!(f, "Value out of 128-bit range"),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

impl From<base_convert::Error> for Error {
    fn from(error: base_convert::Error) -> Self {
        match error {
            base_convert::Error::Overflow => Error::ValueOutOfRange,
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<36>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<36>) -> Self {
        Self { alphabet }
    }

    /// Reads 25 Base36 digit characters and writes the 16-byte value they
    /// name into `output`. On error the contents of `output` are unspecified.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut [u8; BYTE_LEN]) -> Result<(), Error> {
        let input = input.as_ref();
        if input.len() != TEXT_LEN {
            return Err(Error::InvalidLength { length: input.len() });
        }

        let mut digit_values = [0u8; TEXT_LEN];
        for (index, &character) in input.iter().enumerate() {
            digit_values[index] = self.alphabet.decode(character, index)?;
        }

        base_convert::convert(&digit_values, 36, output, 256)?;
        Ok(())
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<[u8; BYTE_LEN], Error> {
        let mut output = [0u8; BYTE_LEN];
        self.decode_into(input, &mut output)?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<[u8; BYTE_LEN], Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut [u8; BYTE_LEN]) -> Result<(), Error> {
    Decoder::default().decode_into(input, output)
}
