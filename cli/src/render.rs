use std::fmt::Display;
use std::io::{self, Write};

use sweeper_core::{BoardSnapshot, CellView, GameStatus};

const HELP: &str = "\
Commands:
  open X Y   (o)  open a cell, or chord an opened number
  flag X Y   (f)  toggle a flag
  new        (n)  start a new round
  help       (h)  show this list
  quit       (q)  leave the game";

/// Draws boards as text onto the output surface it was built with.
pub struct Renderer<W> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
        write!(self.out, "{:4}", "")?;
        for x in 0..snapshot.size.0 {
            write!(self.out, "{x:>3}")?;
        }
        writeln!(self.out)?;

        for (y, row) in snapshot.iter_rows().enumerate() {
            write!(self.out, "{y:>4}")?;
            for cell in row {
                write!(self.out, "{:>3}", glyph(cell))?;
            }
            writeln!(self.out)?;
        }

        match snapshot.status {
            GameStatus::Active => writeln!(self.out, "Mines left: {}", snapshot.mines_left)?,
            GameStatus::Won => writeln!(self.out, "You won!")?,
            GameStatus::Lost => writeln!(self.out, "You lost!")?,
        }
        self.out.flush()
    }

    pub fn message(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        self.message(HELP)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Count(0) => ' ',
        CellView::Count(count) => char::from(b'0' + count),
    }
}
