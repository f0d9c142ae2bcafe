//! The move channel: bitstreams to legal chess move sequences and back.
//!
//! One ply carries one bit. At each position the mover's legal move list is
//! enumerated in the engine's stable order; the first entry encodes `1`, the
//! last encodes `0`. A position left with fewer than two legal moves cannot
//! carry a bit, so the encoder swaps it for the starting position and plays
//! on; the emitted game silently begins anew mid-sequence.

use tracing::debug;

use crate::board::{Board, Move};

use super::CodecError;


/// How a replayed move sequence is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Mirror the encoder's channel reset: whenever the replayed position
    /// holds at most one legal move, jump back to the starting position
    /// before reading the next ply. Off by default: the plain replay then
    /// rejects any sequence that crossed an encoder reset.
    pub lockstep_reset: bool,
}

/// Encode a bitstream as chess moves from the starting position.
pub fn bits_to_moves(bits: &[bool]) -> Vec<Move> {
    bits_to_moves_from(Board::default(), bits)
}

/// Encode a bitstream from an arbitrary position. Channel resets always
/// target the canonical starting position, which is guaranteed to offer a
/// two-way choice.
pub fn bits_to_moves_from(start: Board, bits: &[bool]) -> Vec<Move> {
    let mut board = start;
    let mut moves = Vec::with_capacity(bits.len());

    for &bit in bits {
        let mut legal = board.legal_moves();
        if legal.len() <= 1 {
            debug!(ply = moves.len(), "channel exhausted, starting a fresh game");
            board = Board::default();
            legal = board.legal_moves();
        }

        let mov = if bit { legal[0] } else { legal[legal.len() - 1] };
        moves.push(mov);
        board.make(mov);
    }
    moves
}

/// Recover the bitstream carried by a move sequence, replaying from the
/// starting position.
pub fn moves_to_bits(moves: &[Move], options: DecodeOptions) -> Result<Vec<bool>, CodecError> {
    moves_to_bits_from(Board::default(), moves, options)
}

/// Recover the bitstream carried by a move sequence replayed from an
/// arbitrary position.
///
/// A move that is neither the first nor the last legal option was not put
/// there by this codec; no bit can be recovered from it, and the replay
/// stops with [`CodecError::AmbiguousMoveEncoding`] rather than guess.
pub fn moves_to_bits_from(
    start: Board,
    moves: &[Move],
    options: DecodeOptions,
) -> Result<Vec<bool>, CodecError> {
    let mut board = start;
    let mut bits = Vec::with_capacity(moves.len());

    for (index, &mov) in moves.iter().enumerate() {
        let mut legal = board.legal_moves();
        if options.lockstep_reset && legal.len() <= 1 {
            debug!(ply = index, "channel exhausted, following the encoder's reset");
            board = Board::default();
            legal = board.legal_moves();
        }

        if legal.first() == Some(&mov) {
            bits.push(true);
        } else if legal.len() > 1 && legal.last() == Some(&mov) {
            bits.push(false);
        } else {
            return Err(CodecError::AmbiguousMoveEncoding { mov, index });
        }
        board.make(mov);
    }
    Ok(bits)
}
