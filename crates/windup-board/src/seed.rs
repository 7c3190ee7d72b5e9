//! Reproducible board seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// A 256-bit seed for the board's random token generator.
///
/// The same seed and the same sequence of board operations always produce the
/// same tokens. Seeds print and parse as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use windup_board::BoardSeed;
///
/// let seed = BoardSeed::random();
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>()?, seed);
/// # Ok::<(), windup_board::ParseBoardSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Expands a small integer into a seed. Handy for tests and benchmarks.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn bytes(&self) -> [u8; 32] {
        self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for BoardSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the input, in characters.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseBoardSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(ParseBoardSeedError::InvalidDigit { ch })
        });
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!("length checked above");
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let seed: BoardSeed = text.parse().unwrap();
        assert_eq!(seed.bytes()[0], 0xc1);
        assert_eq!(seed.bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), text);

        let upper: BoardSeed = text.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<BoardSeed>(),
            Err(ParseBoardSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", "0".repeat(63));
        assert_eq!(
            bad.parse::<BoardSeed>(),
            Err(ParseBoardSeedError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_from_u64() {
        let seed = BoardSeed::from_u64(0x0102);
        assert_eq!(seed.bytes()[0], 0x02);
        assert_eq!(seed.bytes()[1], 0x01);
        assert!(seed.bytes()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = BoardSeed::from_u64(42);
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..16 {
            assert_eq!(a.random_range(0..6_u32), b.random_range(0..6_u32));
        }
    }
}
