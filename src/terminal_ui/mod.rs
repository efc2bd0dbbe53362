// Standard library
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

// External libraries
use cgmath::Vector2;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

// LIFECELL
mod pacer;
mod screen;
use lifecell::engine::{AutomatonEngine, CellState};
use lifecell::grid::Grid;
use lifecell::patterns;
use lifecell::pointer::PointerInput;
use lifecell::viewport::Viewport;
use pacer::Pacer;

/// Terminal display/input collaborator of the automaton engine: paces the
/// generations, renders the grid, and routes mouse input through the same
/// viewport mapping a pixel-based display would use (here at unit scale,
/// one terminal cell per grid cell).
pub struct TerminalUI {
    engine: AutomatonEngine,
    pacer: Pacer,
    pointer: PointerInput,
    viewport: Viewport,
}

impl TerminalUI {
    pub fn new(engine: AutomatonEngine) -> Self {
        Self {
            engine,
            pacer: Pacer::new(Instant::now()),
            pointer: PointerInput::new(),
            viewport: Viewport::new(Vector2::new(1.0, 1.0), Vector2::new(0.0, 0.0)),
        }
    }

    pub fn run(&mut self) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.event_loop(&mut stdout);

        execute!(
            stdout,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        let mut dirty = true;
        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => break,
                        KeyCode::Char(' ') => {
                            self.pacer.toggle_pause();
                            dirty = true;
                        }
                        KeyCode::Char('s') => {
                            self.pacer.toggle_slow();
                            dirty = true;
                        }
                        KeyCode::Char('n') => {
                            // Single-step, mostly useful while paused
                            self.engine.step();
                            dirty = true;
                        }
                        KeyCode::Char('r') => {
                            self.engine.randomize();
                            dirty = true;
                        }
                        KeyCode::Char('c') => {
                            self.engine.clear();
                            dirty = true;
                        }
                        KeyCode::Char('1') => {
                            self.load(patterns::blinker());
                            queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                            dirty = true;
                        }
                        KeyCode::Char('2') => {
                            self.load(patterns::glider());
                            queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                            dirty = true;
                        }
                        KeyCode::Char('3') => {
                            self.load(patterns::gosper_glider_gun());
                            queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                            dirty = true;
                        }
                        KeyCode::Char('4') => {
                            self.load(patterns::r_pentomino());
                            queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                            dirty = true;
                        }
                        _ => (),
                    },
                    Event::Mouse(mouse) => dirty |= self.pointer_event(mouse),
                    Event::Resize(_, _) => {
                        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                        dirty = true;
                    }
                    _ => (),
                }
            }

            if self.pacer.step_due(Instant::now()) {
                self.engine.step();
                dirty = true;
            }

            if dirty {
                screen::draw(stdout, &self.engine, &self.pacer)?;
                dirty = false;
            }
        }
        Ok(())
    }

    fn load(&mut self, grid: Grid<CellState>) {
        self.engine = AutomatonEngine::with_grid(grid);
    }

    fn pointer_event(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer.press();
                self.touch(mouse.column, mouse.row)
            }
            MouseEventKind::Drag(MouseButton::Left) => self.touch(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer.release();
                false
            }
            _ => false,
        }
    }

    fn touch(&mut self, column: u16, row: u16) -> bool {
        let position = Vector2::new(column as f32, row as f32);
        self.pointer
            .touch(&mut self.engine, &self.viewport, position)
            .is_some()
    }
}

const POLL_INTERVAL: Duration = Duration::from_millis(5);
