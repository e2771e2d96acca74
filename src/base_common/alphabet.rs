use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// A digit value / character pairing: an array of `N` characters to emit on
/// encode and an O(1) map from ASCII code points back to digit values.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Like [`Alphabet::new`], but additionally maps the opposite case of
    /// every ASCII letter to the same digit value. Encoding still emits the
    /// characters as given; decoding accepts either case.
    pub const fn case_insensitive(characters: &[u8; N]) -> Result<Self, Error> {
        let mut alphabet = match Self::new(characters) {
            Ok(alphabet) => alphabet,
            Err(error) => return Err(error),
        };

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character.is_ascii_alphabetic() {
                let folded = character ^ 0x20; // flips the case of an ASCII letter
                if let Some(first) = alphabet.decode[folded as usize] {
                    return Err(Error::DuplicateCharacter {
                        character: folded as char,
                        first: first as usize,
                        second: index,
                    });
                }
                alphabet.decode[folded as usize] = Some(index as u8);
            }
            index += 1;
        }

        Ok(alphabet)
    }

    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character, index });
        }
        match self.decode[character as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: character as char,
                index,
            }),
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
