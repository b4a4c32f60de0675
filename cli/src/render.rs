use std::fmt;
use sweeper_core::{Coord, GamePhase, Session};

fn digits(n: Coord) -> usize {
    n.checked_ilog10().unwrap_or(0) as usize + 1
}

pub fn status_line(session: &Session) -> String {
    match session.phase() {
        GamePhase::Playing => format!("Mines left: {}", session.mines_left()),
        GamePhase::Won => "You won!".to_string(),
        GamePhase::Lost => "Game over".to_string(),
    }
}

/// Text grid with row/column labels, followed by the status line.
pub struct BoardView<'a>(pub &'a Session);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let (rows, cols) = session.size();
        let row_width = digits(rows - 1);
        let col_width = digits(cols - 1);

        write!(f, "{:row_width$}", "")?;
        for col in 0..cols {
            write!(f, " {col:>col_width$}")?;
        }

        for ((row, col), tile) in session.iter_display() {
            if col == 0 {
                write!(f, "\n{row:>row_width$}")?;
            }
            write!(f, " {:>col_width$}", tile.symbol())?;
        }

        writeln!(f)?;
        writeln!(f, "{}", status_line(session))
    }
}
