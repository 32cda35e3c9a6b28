//! Event handler for the TUI
//!
//! Routes key presses to the focused control.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key press
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(());
        }
        KeyCode::Enter if app.focus.list().is_none() => {
            app.submit();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Description | Focus::Amount => handle_text_key(app, key),
        Focus::EntryType => handle_type_key(app, key),
        Focus::Category => handle_category_key(app, key),
        Focus::Incomes | Focus::Expenses => handle_list_key(app, key),
    }

    Ok(())
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let is_description = app.focus == Focus::Description;
    let input = if is_description {
        &mut app.description
    } else {
        &mut app.amount
    };

    let edited = match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        KeyCode::Down => {
            app.focus = app.focus.next();
            false
        }
        KeyCode::Up => {
            app.focus = app.focus.prev();
            false
        }
        _ => false,
    };

    if edited {
        if is_description {
            app.sync_description();
        } else {
            app.sync_amount();
        }
    }
}

fn handle_type_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.type_cursor = app.type_cursor.opposite();
        }
        KeyCode::Char(' ') => app.budget.toggle_type(app.type_cursor),
        KeyCode::Char('i') => app.budget.select_type(crate::models::EntryType::Income, true),
        KeyCode::Char('e') => app.budget.select_type(crate::models::EntryType::Expense, true),
        KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::Up => app.focus = app.focus.prev(),
        _ => {}
    }
}

fn handle_category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('k') => app.cycle_category(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('j') => app.cycle_category(1),
        KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::Up => app.focus = app.focus.prev(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let Some(entry_type) = app.focus.list() else {
        return;
    };

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(entry_type),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(entry_type),
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::Incomes,
        KeyCode::Char('l') | KeyCode::Right => app.focus = Focus::Expenses,
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.remove_selected(entry_type)
        }
        _ => {}
    }
}
