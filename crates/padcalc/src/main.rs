//! padcalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! padcalc                          # Interactive TUI
//! padcalc --history                # Start with the history panel open
//! padcalc -e "10/4"                # Print 2.50 and exit
//! padcalc --log-file padcalc.log   # Trace to a file
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use padcalc::cli::{eval_expression, Cli};
use padcalc::core::history::History;
use padcalc::tui::{keypad_area, render, AlternateScreen, CalculatorApp, InputHandler, RawMode};
use padcalc::{logging, AppResult, CalculatorConfig};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<ExitCode> {
    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate()?;
    logging::init(&config)?;

    if let Some(expr) = &cli.eval {
        return Ok(run_eval(expr, &config));
    }

    let app = run_tui(&config)?;
    if config.print_history {
        print_history(app.history());
    }
    Ok(ExitCode::SUCCESS)
}

fn run_eval(expr: &str, config: &CalculatorConfig) -> ExitCode {
    let accumulator = eval_expression(expr);
    info!(expr, display = accumulator.display(), "eval");
    if config.print_history {
        print_history(accumulator.history());
    }
    println!("{}", accumulator.display());
    if accumulator.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_history(history: &History) {
    for entry in history {
        println!("{entry}");
    }
}

// Guards drop in reverse order: screen first, then raw mode
fn run_tui(config: &CalculatorConfig) -> AppResult<CalculatorApp> {
    let _raw = RawMode::enable()?;
    let _screen = AlternateScreen::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = CalculatorApp::with_config(config);
    run_app(&mut terminal, &mut app)?;
    Ok(app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();
    info!("tui started");

    loop {
        terminal.draw(|f| render(app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.click(keypad_area(area), mouse.column, mouse.row);
            }
            other => debug!(?other, "ignored event"),
        }

        if app.should_quit() {
            break;
        }
    }

    info!(records = app.history().len(), "tui stopped");
    Ok(())
}
