pub mod board;
pub mod cli;
pub mod codec;
pub mod notation;

pub use board::{Board, CastleRights, Move, Piece, Side, Sq};
pub use codec::{decode, encode, CodecError, DecodeOptions};
pub use notation::NotationError;


/// Evaluates a boolean expression:
/// * Where `true` returns `Ok(())`
/// * Where `false` returns `Err(&'static str)` describing the failure.
///
/// In practice, it's useful as a recoverable `assert!` alternative.
#[macro_export]
macro_rules! as_result {
    ($cond:expr) => {
        bool::then_some($cond, ()).ok_or(
            concat!(
                "assertion failed: `",
                stringify!($cond),
                "`"
            )
        )
    };
}

/// Loop through each set bit of a bitboard as a [`Sq`], from least to most
/// significant.
#[macro_export]
macro_rules! for_sq {
    ($sq:ident in $bb:expr => $blk:block) => {
        let mut t = $bb;
        while t != 0 {
            let $sq = $crate::board::Sq::new(t.trailing_zeros() as u8);
            { $blk }
            t &= t - 1;
        }
    }
}
