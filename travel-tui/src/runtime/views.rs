use crate::app::{App, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.route {
        Route::Home => handle_home_key(key, app, action_tx),
        Route::Hotel(_) | Route::Country(_) | Route::City(_) => {
            handle_detail_key(key, app, action_tx)
        }
    }
}

fn handle_home_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.home(),
        KeyCode::End => app.search_input.end(),
        KeyCode::Up => app.select_previous_result(),
        KeyCode::Down => app.select_next_result(),
        KeyCode::Enter => {
            if let Some(route) = app.open_selected_result() {
                enqueue_action(action_tx, Action::FetchDetail(route));
            }
        }
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_detail_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => app.go_home(),
        KeyCode::Char('r') => {
            if let Some(route) = app.reload_detail() {
                enqueue_action(action_tx, Action::FetchDetail(route));
            }
        }
        _ => {}
    }
}
