//! The steganographic codec: alphanumeric messages in and out of chess move
//! sequences.
//!
//! Encoding layers a message through the symbol table into a bitstream
//! ([`bits`]), then spends one legal move per bit ([`moves`]). Decoding runs
//! the same pipe backwards. Anyone holding the move list and this crate can
//! read the message; the scheme hides, it does not encrypt.

pub mod bits;
pub mod moves;
pub mod table;

use thiserror::Error;
use tracing::debug;

use crate::board::Move;
use crate::notation::{self, NotationError};

pub use moves::{bits_to_moves, moves_to_bits, DecodeOptions};


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The message holds a character outside the 36-symbol alphabet.
    #[error("message contains `{ch}` at position {index}; only a-z and 0-9 are encodable")]
    InvalidMessageSymbol { ch: char, index: usize },

    /// The recovered bitstream does not divide into whole codewords.
    #[error("bitstream of {len} bits does not divide into {}-bit groups", table::CODE_BITS)]
    TruncatedBitstream { len: usize },

    /// A recovered bit group names a codeword with no assigned symbol.
    #[error("bit group {index} holds codeword {value}, which no symbol is assigned to")]
    InvalidMoveEncoding { value: u8, index: usize },

    /// A replayed move is neither the first nor the last legal option of its
    /// position, so it was not produced by this codec.
    #[error("move `{mov}` at index {index} is neither the first nor the last legal move")]
    AmbiguousMoveEncoding { mov: Move, index: usize },

    /// The move stream could not be parsed at all.
    #[error(transparent)]
    InvalidNotation(#[from] NotationError),
}

/// Encode a message as a sequence of chess moves.
///
/// Input is case-normalized to lowercase first; anything then outside
/// `a-z`/`0-9` is rejected before a single move is generated.
pub fn encode(message: &str) -> Result<Vec<Move>, CodecError> {
    let normalized = message.to_ascii_lowercase();
    let stream = bits::encode_bits(&normalized)?;
    debug!(symbols = normalized.chars().count(), bits = stream.len(), "message mapped to bitstream");
    Ok(moves::bits_to_moves(&stream))
}

/// Decode a move stream back into the message it carries.
///
/// The notation is parsed and validated in full before the replay starts, so
/// a malformed stream never advances a position.
pub fn decode(input: &str, options: DecodeOptions) -> Result<String, CodecError> {
    let parsed = notation::parse_moves(input)?;
    debug!(moves = parsed.len(), "replaying move stream");
    let stream = moves::moves_to_bits(&parsed, options)?;
    bits::decode_bits(&stream)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn round_trip(message: &str) -> String {
        let moves = encode(message).unwrap();
        decode(&notation::join_coords(&moves), DecodeOptions::default()).unwrap()
    }

    #[test]
    fn test_single_symbol_round_trip() {
        // `a` is all zero bits: six selections of the last legal move
        let moves = encode("a").unwrap();
        assert_eq!(moves.len(), 6);

        let mut board = Board::default();
        for &mov in &moves {
            let legal = board.legal_moves();
            assert_eq!(mov, legal[legal.len() - 1]);
            board.make(mov);
        }

        assert_eq!(round_trip("a"), "a");
    }

    #[test]
    fn test_letter_digit_round_trip() {
        assert_eq!(round_trip("a1"), "a1");
    }

    #[test]
    fn test_case_normalization() {
        assert_eq!(encode("A1").unwrap(), encode("a1").unwrap());
        assert_eq!(round_trip("A1"), "a1");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(encode("").unwrap(), vec![]);
        assert_eq!(decode("", DecodeOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_concatenated_stream_decodes() {
        let moves = encode("a1").unwrap();
        let concat = notation::concat_coords(&moves);
        assert_eq!(decode(&concat, DecodeOptions::default()).unwrap(), "a1");
    }

    #[test]
    fn test_invalid_symbol_rejected_before_encoding() {
        assert_eq!(
            encode("no spaces").unwrap_err(),
            CodecError::InvalidMessageSymbol { ch: ' ', index: 2 },
        );
    }

    #[test]
    fn test_truncated_sequence_rejected() {
        let mut moves = encode("a").unwrap();
        moves.pop();
        assert_eq!(
            decode(&notation::join_coords(&moves), DecodeOptions::default()).unwrap_err(),
            CodecError::TruncatedBitstream { len: 5 },
        );
    }

    #[test]
    fn test_all_ones_group_rejected() {
        // six first-move selections spell codeword 63, which is unassigned
        let moves = moves::bits_to_moves(&[true; 6]);
        assert_eq!(
            decode(&notation::join_coords(&moves), DecodeOptions::default()).unwrap_err(),
            CodecError::InvalidMoveEncoding { value: 63, index: 0 },
        );
    }

    #[test]
    fn test_notation_error_carries_context() {
        match decode("e2e4 nope!", DecodeOptions::default()).unwrap_err() {
            CodecError::InvalidNotation(err) => {
                assert_eq!(err.offset, 5);
            }
            other => panic!("expected a notation error, got {other:?}"),
        }
    }
}
