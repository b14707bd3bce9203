//! Interactive console host.
//!
//! Reads one command per line from stdin and prints the board after each:
//!
//! - a coordinate such as `D4` plays the active color there
//! - `pass` flips the turn without committing a move
//! - `prev` / `next` step through the move history
//! - `quit` exits
//!
//! Columns are lettered `A`, `B`, ... skipping `I` (the usual Go convention,
//! to avoid confusion with `J`); rows are numbered from 1 at the bottom. All
//! rules decisions live in [`GoEngine`]; this module only translates text to
//! `(row, col)` and engine results back to text.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::engine::{GoEngine, View};
use crate::grid::{Cell, Color, Point};

const WELCOME: &str = r"
        LET'S PLAY...
         _____  ______
        /      /     /
       /  __  /  /  /
      /____/ /_____/
";

/// Parse a coordinate like `D4` into `(row, col)`, row 0 at the bottom.
///
/// Returns `None` for anything that is not a column letter followed by a row
/// number. Bounds are the engine's problem, not the parser's, except that
/// the parsed values must fit the lettering scheme at all.
pub fn parse_coord(s: &str) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }
    let mut col = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        col -= 1;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn col_letter(col: usize) -> char {
    let mut letter = (b'A' + col as u8) as char;
    if letter >= 'I' {
        letter = (letter as u8 + 1) as char;
    }
    letter
}

/// Format `(row, col)` back into a coordinate string, skipping `I`.
pub fn str_coord((row, col): Point) -> String {
    format!("{}{}", col_letter(col), row + 1)
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        Color::White => "White",
    }
}

/// The stdin/stdout command loop around one engine.
pub struct Console {
    engine: GoEngine,
}

impl Console {
    pub fn new(engine: GoEngine) -> Self {
        Self { engine }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(stdout, "{WELCOME}")?;
        writeln!(stdout, "{}", self.render(&self.engine.view()))?;

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (quit, output) = self.execute(line);
            writeln!(stdout, "{output}")?;
            stdout.flush()?;
            if quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line; returns (quit, text to print).
    fn execute(&mut self, line: &str) -> (bool, String) {
        match line.to_lowercase().as_str() {
            "quit" | "exit" => return (true, "  ...goodbye...".to_string()),
            "pass" => {
                let view = self.engine.pass();
                return (false, self.render(&view));
            }
            "prev" => {
                return match self.engine.undo() {
                    Ok(view) => {
                        let msg = format!("  ...back to turn {}...", view.turn_index);
                        (false, format!("{msg}\n{}", self.render(&view)))
                    }
                    Err(e) => (false, format!("  {e}")),
                };
            }
            "next" => {
                return match self.engine.redo() {
                    Ok(view) => {
                        let msg = format!("  ...ahead to turn {}...", view.turn_index);
                        (false, format!("{msg}\n{}", self.render(&view)))
                    }
                    Err(e) => (false, format!("  {e}")),
                };
            }
            _ => {}
        }

        let Some((row, col)) = parse_coord(line) else {
            return (
                false,
                format!("  ...don't know what to do with '{line}'..."),
            );
        };
        let mover = self.engine.active_color();
        match self.engine.place_stone(row, col) {
            Ok(report) => {
                let mut out = format!(
                    "  {} plays {}",
                    color_name(mover),
                    str_coord((row, col))
                );
                for color in [Color::Black, Color::White] {
                    let n = report.captured.get(color);
                    if n > 0 {
                        out.push_str(&format!(
                            "\n  ...{} captures {} stone{}...",
                            color_name(color).to_lowercase(),
                            n,
                            if n == 1 { "" } else { "s" }
                        ));
                    }
                }
                out.push('\n');
                out.push_str(&self.render(&report.view));
                (false, out)
            }
            Err(e) => (false, format!("  {e}")),
        }
    }

    /// Board plus a status line: turn number, whose move, and per-color
    /// captures (+territory).
    fn render(&self, view: &View) -> String {
        let mut out = format!(
            "Turn {}: {}'s move\nWhite: {} (+{})   Black: {} (+{})\n",
            view.turn_index,
            color_name(view.active_color),
            view.white_score,
            view.white_territory,
            view.black_score,
            view.black_territory,
        );

        let size = view.grid.size();
        for row in (0..size).rev() {
            out.push_str(&format!("{:>2} ", row + 1));
            for col in 0..size {
                let ch = match view.grid.get(row, col).expect("view grid matches size") {
                    Cell::Stone(Color::Black) => 'X',
                    Cell::Stone(Color::White) => 'O',
                    Cell::Empty => '.',
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("   ");
        for col in 0..size {
            out.push(col_letter(col));
            out.push(' ');
        }
        out.push('\n');
        out
    }
}
