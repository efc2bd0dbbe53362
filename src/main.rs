// LIFECELL
mod terminal_ui;

use lifecell::engine::AutomatonEngine;
use terminal_ui::TerminalUI;

const SIMULATION_WIDTH: i32 = 128;
const SIMULATION_HEIGHT: i32 = 64;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut engine = AutomatonEngine::new(SIMULATION_WIDTH, SIMULATION_HEIGHT)
        .expect("simulation dimensions are strictly positive");
    engine.randomize();

    TerminalUI::new(engine).run()
}
