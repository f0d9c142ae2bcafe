//! Command-line front end: pure plumbing between stdin/argv and the codec.

use std::io::Write;
use std::thread;

use crossbeam_channel::Sender;
use serde_derive::Serialize;
use tracing::info;

use crate::board::{Board, Move};
use crate::codec::{self, CodecError, DecodeOptions};
use crate::notation;


#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Emit machine-readable JSON reports instead of plain text.
    pub json: bool,
    pub decode: DecodeOptions,
}

#[derive(Serialize)]
struct EncodeReport {
    message: String,
    moves: Vec<Move>,
    notation: String,
}

#[derive(Serialize)]
struct DecodeReport {
    moves: Vec<Move>,
    message: String,
}

pub fn run_encode(message: &str, options: Options) -> Result<(), CodecError> {
    let moves = codec::encode(message)?;
    info!(symbols = message.len(), moves = moves.len(), "message encoded");

    if options.json {
        let report = EncodeReport {
            message: message.to_ascii_lowercase(),
            notation: notation::join_coords(&moves),
            moves,
        };
        print_json(&report);
    } else {
        println!("{}", notation::join_coords(&moves));
    }
    Ok(())
}

pub fn run_decode(input: &str, options: Options) -> Result<(), CodecError> {
    let moves = notation::parse_moves(input)?;
    let stream = codec::moves_to_bits(&moves, options.decode)?;
    let message = codec::bits::decode_bits(&stream)?;
    info!(moves = moves.len(), symbols = message.len(), "move stream decoded");

    if options.json {
        print_json(&DecodeReport { moves, message });
    } else {
        println!("{message}");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(report: &T) {
    println!("{}", serde_json::to_string_pretty(report).expect("json encoding error"));
}


/// Interactive prompt loop. Input is pulled through a dedicated reader
/// thread so the loop only ever blocks on the channel.
pub fn interactive(options: Options) {
    let (stdin_sndr, stdin_rcvr) = crossbeam_channel::bounded::<String>(0);
    let _stdin_handle = thread::spawn(move || read_stdin(stdin_sndr));

    println!("tacit: hide a message in a chess game");
    println!("commands: encode <message> | decode <moves> | board <moves> | quit");
    prompt();

    for line in stdin_rcvr.iter() {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match cmd {
            "" => {}
            "e" | "encode" => report(run_encode(rest.trim(), options)),
            "d" | "decode" => report(run_decode(rest.trim(), options)),
            "b" | "board" => show_board(rest.trim()),
            "q" | "quit" | "exit" => break,
            other => println!("unknown command `{other}`"),
        }
        prompt();
    }
}

fn read_stdin(sender: Sender<String>) {
    loop {
        let mut buffer = String::new();
        match std::io::stdin().read_line(&mut buffer) {
            Ok(0) | Err(_) => return, // EOF
            Ok(_) => if sender.send(buffer).is_err() { return; },
        }
    }
}

fn prompt() {
    print!("> ");
    std::io::stdout().flush().expect("stdout flush error");
}

fn report(result: Result<(), CodecError>) {
    if let Err(err) = result {
        println!("error: {err}");
    }
}

/// Replay a move stream and render the final position, following the
/// encoder's reset rule so freshly encoded output always displays.
fn show_board(input: &str) {
    let moves = match notation::parse_moves(input) {
        Ok(moves) => moves,
        Err(err) => return println!("error: {err}"),
    };

    let mut board = Board::default();
    for (index, &mov) in moves.iter().enumerate() {
        if board.legal_moves().len() <= 1 {
            board = Board::default();
        }
        if !board.is_valid(mov) {
            return println!("error: move `{mov}` at index {index} is not playable");
        }
        board.make(mov);
    }
    print!("{}", board.render());
    if let Some(mov) = moves.last() {
        println!("after {} plies, last move {mov}", moves.len());
    }
}
