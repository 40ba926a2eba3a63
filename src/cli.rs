//! Interactive text loop
//!
//! A thin collaborator over the three core entry points: enumerate legal
//! moves, apply a chosen move, and evaluate to a depth. Commands:
//!
//! ```text
//! add <color> <type> <square>   place a piece
//! rm <square>                   clear a square
//! ls <color>                    list legal moves by name
//! move <color> <name>           apply a named move
//! eval <color>                  evaluate and list the best moves
//! show                          print the board
//! quit                          leave the loop
//! ```

use crate::core::board::{Color, PieceType, Position, Square};
use crate::engine::movegen::legal_moves_for;
use crate::engine::search::Searcher;
use crate::error::ChessError;
use crate::san;
use std::io::BufRead;

/// Search depth used by the `eval` command, in plies
const EVAL_DEPTH: u32 = 4;

enum Flow {
    Continue,
    GameOver,
    Quit,
}

/// The interactive command loop
pub struct Cli {
    position: Position,
    searcher: Searcher,
}

impl Cli {
    pub fn new() -> Self {
        Cli {
            position: Position::startpos(),
            searcher: Searcher::new(),
        }
    }

    /// Run until the game ends or the user quits. Returns the process exit
    /// code: zero on checkmate, stalemate or quit.
    pub fn run(&mut self) -> u8 {
        self.show();
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match self.handle(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::GameOver) | Ok(Flow::Quit) => return 0,
                Err(err) => println!("error: {}", err),
            }
        }
        0
    }

    fn handle(&mut self, line: &str) -> Result<Flow, ChessError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            return Ok(Flow::Continue);
        };
        match command {
            "add" => {
                let color = parse_color(tokens.get(1))?;
                let piece_type = parse_piece(tokens.get(2))?;
                let square = parse_square(tokens.get(3))?;
                self.position.put_piece(color, piece_type, square);
                self.show();
                Ok(Flow::Continue)
            }
            "rm" => {
                let square = parse_square(tokens.get(1))?;
                if self.position.remove_piece(square).is_none() {
                    return Err(ChessError::EmptySquare(square.to_algebraic()));
                }
                self.show();
                Ok(Flow::Continue)
            }
            "ls" => {
                let color = parse_color(tokens.get(1))?;
                let moves = legal_moves_for(&self.position, color);
                for name in san::names(&self.position.with_side_to_move(color), &moves) {
                    println!("    {}", name);
                }
                Ok(Flow::Continue)
            }
            "move" => {
                let color = parse_color(tokens.get(1))?;
                let name = tokens
                    .get(2)
                    .ok_or(ChessError::MissingArgument("move name"))?;
                self.play(color, name)
            }
            "eval" => {
                let color = parse_color(tokens.get(1))?;
                self.eval(color);
                Ok(Flow::Continue)
            }
            "show" => {
                self.show();
                Ok(Flow::Continue)
            }
            "quit" | "exit" => Ok(Flow::Quit),
            _ => Err(ChessError::UnknownCommand(command.to_string())),
        }
    }

    fn play(&mut self, color: Color, name: &str) -> Result<Flow, ChessError> {
        let oriented = self.position.with_side_to_move(color);
        let moves = legal_moves_for(&oriented, color);
        let names = san::names(&oriented, &moves);
        let index = names.iter().position(|n| n == name);
        let Some(index) = index else {
            println!("The legal moves in this position are:");
            for n in &names {
                println!("    {}", n);
            }
            return Err(ChessError::IllegalMove(name.to_string()));
        };

        self.position = moves[index].1;
        self.show();

        let opponent = color.opposite();
        if legal_moves_for(&self.position, opponent).is_empty() {
            if self.position.in_check(opponent) {
                println!("{} has been checkmated. Game over.", opponent);
            } else {
                println!("{} has been stalemated. Game over.", opponent);
            }
            return Ok(Flow::GameOver);
        }
        if self.position.in_check(opponent) {
            println!("{} is in check.", opponent);
        }
        Ok(Flow::Continue)
    }

    fn eval(&mut self, color: Color) {
        let oriented = self.position.with_side_to_move(color);
        let Some(report) = self.searcher.select_move(&oriented, color, EVAL_DEPTH) else {
            if oriented.in_check(color) {
                println!("{} is checkmated.", color);
            } else {
                println!("{} is stalemated.", color);
            }
            return;
        };

        let pairs: Vec<_> = report
            .moves
            .iter()
            .map(|sm| (sm.mv, sm.successor))
            .collect();
        let names = san::names(&oriented, &pairs);
        for (scored, name) in report.moves.iter().zip(&names) {
            println!("Considering {}...\t{:+}", name, scored.score);
        }
        println!();
        println!("Selected move {}.", names[report.chosen]);
        println!("    Transposition table size: {}", report.cache_entries);
        println!("    Hit count: {}", report.cache_stats.hits);
        println!("    Miss count: {}", report.cache_stats.misses);
        println!("    Re-eval count: {}", report.cache_stats.reevals);
    }

    fn show(&self) {
        match self.position.en_passant_file() {
            Some(file) => println!(
                "The pawn on the {} file can be captured en passant.",
                (b'a' + file) as char
            ),
            None => println!("Capturing en passant is not possible."),
        }
        println!("{}", self.position);
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(token: Option<&&str>) -> Result<Color, ChessError> {
    let token = token.ok_or(ChessError::MissingArgument("color"))?;
    Color::from_name(token).ok_or_else(|| ChessError::InvalidColor(token.to_string()))
}

fn parse_piece(token: Option<&&str>) -> Result<PieceType, ChessError> {
    let token = token.ok_or(ChessError::MissingArgument("piece type"))?;
    PieceType::from_name(token).ok_or_else(|| ChessError::InvalidPiece(token.to_string()))
}

fn parse_square(token: Option<&&str>) -> Result<Square, ChessError> {
    let token = token.ok_or(ChessError::MissingArgument("square"))?;
    Square::from_algebraic(token).ok_or_else(|| ChessError::InvalidSquare(token.to_string()))
}
