//! Key mapping from terminal events to game commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the game loop should do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Queue an action for the next update
    Queue(GameAction),
    /// Drop the active piece to the bottom and lock it now
    HardDrop,
    TogglePause,
    Restart,
    /// Switch the search agent on or off
    ToggleAi,
    /// Abandon the running game
    EndGame,
    Quit,
}

/// Game flags that change how keys are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub game_over: bool,
    pub paused: bool,
}

/// Map a key press to a command.
///
/// After game over only restart and quit respond; while paused only
/// unpause and quit do. Release events are ignored.
pub fn map_key(key: KeyEvent, ctx: KeyContext) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }

    if ctx.game_over {
        return match key.code {
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(InputCommand::Restart)
            }
            KeyCode::Esc => Some(InputCommand::Quit),
            _ => None,
        };
    }

    if ctx.paused {
        return match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::TogglePause),
            KeyCode::Esc => Some(InputCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Queue(GameAction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Queue(GameAction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Queue(GameAction::Down))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputCommand::Queue(GameAction::Rotate)),

        // Actions
        KeyCode::Char(' ') => Some(InputCommand::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::TogglePause),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(InputCommand::ToggleAi),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),
        KeyCode::Esc => Some(InputCommand::EndGame),

        _ => None,
    }
}

/// Check if key should quit the program regardless of game state.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
