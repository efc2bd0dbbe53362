// Standard library
use std::io::{Stdout, Write};

// External libraries
use crossterm::{
    cursor, queue,
    style::{style, Attribute, Color, Print, PrintStyledContent, StyledContent, Stylize},
    terminal,
};

// LIFECELL
use lifecell::engine::{AutomatonEngine, CellState};

use super::pacer::Pacer;

pub fn cell_style(state: CellState) -> StyledContent<char> {
    match state {
        CellState::Dead => style('·').with(Color::Grey),
        CellState::Alive => style('#').with(Color::Green).attribute(Attribute::Bold),
    }
}

/// Draws the current grid at the top-left corner, one glyph per cell,
/// clipped to the terminal size.
pub fn draw_grid(stdout: &mut Stdout, engine: &AutomatonEngine) -> std::io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    let max_rows = term_height.saturating_sub(1);

    for (y, row) in engine.rows().enumerate().take(max_rows as usize) {
        queue!(stdout, cursor::MoveTo(0, y as u16))?;
        for cell in row.iter().take(term_width as usize) {
            queue!(stdout, PrintStyledContent(cell_style(*cell)))?;
        }
    }
    Ok(())
}

/// Status line below the grid: generation, dimensions, population and mode.
pub fn draw_status(stdout: &mut Stdout, engine: &AutomatonEngine, pacer: &Pacer) -> std::io::Result<()> {
    let (_, term_height) = terminal::size()?;
    let dim = engine.dimensions();

    let mode = if pacer.is_paused() {
        "paused"
    } else if pacer.is_slow() {
        "slow"
    } else {
        "running"
    };

    queue!(
        stdout,
        cursor::MoveTo(0, term_height.saturating_sub(1)),
        terminal::Clear(terminal::ClearType::UntilNewLine),
        PrintStyledContent(style(String::from(" Generation: ")).attribute(Attribute::Italic)),
        Print(engine.generation().to_string()),
        PrintStyledContent(style(String::from("  Size: ")).attribute(Attribute::Italic)),
        Print(format!("{} x {}", dim.width(), dim.height())),
        PrintStyledContent(style(String::from("  Population: ")).attribute(Attribute::Italic)),
        Print(engine.population().to_string()),
        PrintStyledContent(style(String::from("  Mode: ")).attribute(Attribute::Italic)),
        Print(String::from(mode)),
    )?;
    Ok(())
}

pub fn draw(stdout: &mut Stdout, engine: &AutomatonEngine, pacer: &Pacer) -> std::io::Result<()> {
    draw_grid(stdout, engine)?;
    draw_status(stdout, engine, pacer)?;
    stdout.flush()
}
