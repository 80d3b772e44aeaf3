use crate::game::constants::{GRID_MAX, GRID_MIN, GROUND_Y};
use crate::game::error::GameError;
use crate::game::math::round_to_cell;
use crate::game::types::{ArenaSnapshot, Cell};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

const SIDE: usize = (GRID_MAX - GRID_MIN + 1) as usize;
const CELL_WIDTH: usize = 2;
const PANEL_WIDTH: usize = SIDE * CELL_WIDTH + 2;
const PANEL_GAP: usize = 2;
const PANEL_ROWS: usize = SIDE + 2;
const SCORE_ROW: u16 = PANEL_ROWS as u16 + 2;
const HELP_ROW: u16 = SCORE_ROW + 1;

pub const MIN_COLUMNS: u16 = (PANEL_WIDTH * 3 + PANEL_GAP * 2) as u16;
pub const MIN_ROWS: u16 = HELP_ROW + 1;

const EMPTY: char = '.';
const GROUND: char = '=';
const BODY: char = 'o';
const FOOD: char = '*';
const HEAD: char = '@';

/// One orthographic camera over the box, named after the axes it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Top,
    Front,
    Side,
}

impl View {
    pub const ALL: [View; 3] = [View::Top, View::Front, View::Side];

    fn label(self) -> &'static str {
        match self {
            View::Top => "top (x/z)",
            View::Front => "front (x/y)",
            View::Side => "side (z/y)",
        }
    }

    /// (column, vertical) coordinates of a cell in this view.
    fn axes(self, cell: Cell) -> (i32, i32) {
        match self {
            View::Top => (cell.x, cell.z),
            View::Front => (cell.x, cell.y),
            View::Side => (cell.z, cell.y),
        }
    }

    fn shows_ground(self) -> bool {
        !matches!(self, View::Top)
    }
}

pub fn ensure_fits(columns: u16, rows: u16) -> Result<(), GameError> {
    if columns < MIN_COLUMNS || rows < MIN_ROWS {
        return Err(GameError::Configuration(format!(
            "terminal is {columns}x{rows}, need at least {MIN_COLUMNS}x{MIN_ROWS}"
        )));
    }
    Ok(())
}

pub fn project(snapshot: &ArenaSnapshot, view: View) -> Vec<String> {
    let mut glyphs = vec![vec![EMPTY; SIDE]; SIDE];
    if view.shows_ground() {
        for value in GRID_MIN..GROUND_Y {
            glyphs[(GRID_MAX - value) as usize].fill(GROUND);
        }
    }

    let mut plot = |cell: Cell, glyph: char| {
        let (column, value) = view.axes(cell);
        if !(GRID_MIN..=GRID_MAX).contains(&column) || !(GRID_MIN..=GRID_MAX).contains(&value) {
            return;
        }
        glyphs[(GRID_MAX - value) as usize][(column - GRID_MIN) as usize] = glyph;
    };
    for segment in &snapshot.segments {
        plot(round_to_cell(segment.position), BODY);
    }
    plot(snapshot.food, FOOD);
    plot(round_to_cell(snapshot.head.position), HEAD);

    let border = format!("+{}+", "-".repeat(SIDE * CELL_WIDTH));
    let mut lines = Vec::with_capacity(PANEL_ROWS);
    lines.push(border.clone());
    for row in glyphs {
        let mut line = String::with_capacity(PANEL_WIDTH);
        line.push('|');
        for glyph in row {
            line.push(glyph);
            line.push(' ');
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(border);
    lines
}

pub fn draw(out: &mut impl Write, snapshot: &ArenaSnapshot, best: u32) -> io::Result<()> {
    for (index, view) in View::ALL.into_iter().enumerate() {
        let column = (index * (PANEL_WIDTH + PANEL_GAP)) as u16;
        queue!(out, MoveTo(column, 0), Print(view.label()))?;
        for (row, line) in project(snapshot, view).iter().enumerate() {
            queue!(out, MoveTo(column, row as u16 + 1), Print(line))?;
        }
    }
    queue!(
        out,
        MoveTo(0, SCORE_ROW),
        Print(format!("Score: {}  Best: {}", snapshot.score, best)),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, HELP_ROW),
        Print("W/A/S/D or arrow keys to turn, Esc or q to leave"),
    )?;
    out.flush()
}
