//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on normal exit and from
//! the panic hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::app::BudgetApp;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Leave the alternate screen and raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the budget page until the user quits
pub fn run_tui(budget: BudgetApp) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(budget);
    let events = EventHandler::default();

    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Tick => app.tick(),
            event => handle_event(app, event)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
