//! Move and square coding in pure coordinate notation (`e2e4`, `a7a8q`),
//! and tokenization of move streams.
//!
//! A move stream may be whitespace-separated, fully concatenated, or a mix.
//! In concatenated form a fifth character is read as a promotion letter only
//! for `n`/`r`/`q`, since a trailing `b` cannot be told apart from the file letter
//! opening the next move, so bishop promotions are only recognised as
//! standalone five-character tokens.

use std::fmt;

use thiserror::Error;

use crate::board::{Move, Piece, Sq};


#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move notation `{token}` at byte offset {offset}")]
pub struct NotationError {
    pub token: String,
    pub offset: usize,
}

impl Sq {
    /// Converts from algebraic notation.
    pub fn from_alg(alg: &str) -> Option<Self> {
        let mut chars = alg.trim().chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if matches!(file, 'a'..='h') && matches!(rank, '1'..='8') {
            Some(Self::file_rank(file as u8 - b'a', rank as u8 - b'1'))
        } else {
            None
        }
    }

    /// Converts to algebraic notation. File is in lowercase.
    pub fn to_alg(self) -> String {
        let mut alg_pos = String::with_capacity(2);
        alg_pos.push((self.file() + b'a') as char);
        alg_pos.push((self.rank() + b'1') as char);
        alg_pos
    }
}

impl fmt::Display for Sq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_alg().as_str())
    }
}

impl Piece {
    /// Convert from algebraic piece promotion characters.
    pub fn from_char_prom(ch: char) -> Option<Piece> {
        match ch.to_ascii_lowercase() {
            'q' => Some(Piece::Queen),
            'r' => Some(Piece::Rook),
            'b' => Some(Piece::Bishop),
            'n' => Some(Piece::Knight),
            _   => None,
        }
    }

    /// Convert to a lowercase promotion character.
    pub fn to_char_prom(self) -> char {
        match self {
            Piece::Queen =>  'q',
            Piece::Rook =>   'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => panic!("invalid promotion piece"),
        }
    }
}

impl Move {
    /// Convert from pure coordinate notation. Case-insensitive.
    pub fn from_coord(coord: &str) -> Option<Self> {
        if !coord.is_ascii() || coord.len() < 4 {
            return None;
        }
        let from = Sq::from_alg(&coord[0..2])?;
        let to = Sq::from_alg(&coord[2..4])?;

        match coord.len() {
            4 => Some(Self::new(from, to)),
            5 => {
                let promo = Piece::from_char_prom(coord.as_bytes()[4] as char)?;
                Some(Self::promoting(from, to, promo))
            }
            _ => None,
        }
    }

    /// Convert to pure coordinate notation.
    pub fn to_coord(&self) -> String {
        let mut coord = String::with_capacity(5);
        coord.push_str(self.from.to_alg().as_str());
        coord.push_str(self.to.to_alg().as_str());
        if let Some(promo) = self.promotion {
            coord.push(promo.to_char_prom());
        }
        coord
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_coord().as_str())
    }
}


/// Parse a move stream into moves, fully validating the notation. No move is
/// checked for legality here; replay is the caller's concern.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, NotationError> {
    let mut moves = Vec::new();
    for word in input.split_whitespace() {
        let base = word.as_ptr() as usize - input.as_ptr() as usize;
        scan_word(word, base, &mut moves)?;
    }
    Ok(moves)
}

fn scan_word(word: &str, base: usize, out: &mut Vec<Move>) -> Result<(), NotationError> {
    if !word.is_ascii() {
        return Err(NotationError { token: word.to_string(), offset: base });
    }

    // a standalone five-character token may name any promotion piece
    if word.len() == 5 {
        if let Some(mov) = Move::from_coord(word) {
            out.push(mov);
            return Ok(());
        }
    }

    let bytes = word.as_bytes();
    let mut i = 0;
    while i < word.len() {
        let take = if word.len() - i >= 5
            && matches!(bytes[i + 4].to_ascii_lowercase(), b'n' | b'r' | b'q')
        { 5 } else { 4 };

        if i + take > word.len() {
            return Err(NotationError { token: word[i..].to_string(), offset: base + i });
        }

        let token = &word[i..i + take];
        let mov = Move::from_coord(token)
            .ok_or_else(|| NotationError { token: token.to_string(), offset: base + i })?;
        out.push(mov);
        i += take;
    }
    Ok(())
}

/// Render a move sequence space-separated.
pub fn join_coords(moves: &[Move]) -> String {
    moves.iter().map(Move::to_coord).collect::<Vec<_>>().join(" ")
}

/// Render a move sequence as one concatenated string.
pub fn concat_coords(moves: &[Move]) -> String {
    moves.iter().map(Move::to_coord).collect()
}
