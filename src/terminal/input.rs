//! Keyboard command source.
//!
//! Each poll hands one blocking read to the tokio blocking pool and awaits the result
//! through a oneshot channel, so the controller never holds more than one pending
//! event.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use tokio::sync::oneshot;

use crate::error::{GameError, Result};
use crate::game::systems::CommandSource;
use crate::game::types::{Command, Direction};

/// Map a key press to a command. Keys without a meaning return `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Enter => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Quit),
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

/// Block until a key maps to a command.
fn read_command() -> Result<Command> {
    loop {
        match event::read().map_err(GameError::Input)? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = map_key(key) {
                    return Ok(command);
                }
                debug!("[Input] Ignored key {:?}", key.code);
            }
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

/// Run one blocking `read` on the blocking pool; its result arrives on the receiver.
fn spawn_read<F>(read: F) -> oneshot::Receiver<Result<Command>>
where
    F: FnOnce() -> Result<Command> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        // The receiver only disappears if the controller is already gone.
        let _ = tx.send(read());
    });
    rx
}

/// Wait for the handed-over command. A producer that went away without sending
/// (dropped, panicked) is `InputClosed`.
async fn receive(rx: oneshot::Receiver<Result<Command>>) -> Result<Command> {
    let command = rx.await.map_err(|_| GameError::InputClosed)??;
    debug!("[Input] {:?}", command);
    Ok(command)
}

impl CommandSource for KeyboardInput {
    async fn next_command(&mut self) -> Result<Command> {
        receive(spawn_read(read_command)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Down)), Some(Command::Move(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Left)), Some(Command::Move(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn control_keys_map_to_restart_and_quit() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Command::Restart));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[tokio::test]
    async fn handoff_delivers_the_read_command() {
        let command = receive(spawn_read(|| Ok(Command::Restart))).await.unwrap();
        assert_eq!(command, Command::Restart);
    }

    #[tokio::test]
    async fn read_failure_is_reported_as_input_error() {
        let err = receive(spawn_read(|| {
            Err(GameError::Input(std::io::Error::other("terminal went away")))
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, GameError::Input(_)));
    }

    #[tokio::test]
    async fn dropped_producer_is_input_closed() {
        let (tx, rx) = oneshot::channel::<Result<Command>>();
        drop(tx);
        assert!(matches!(receive(rx).await, Err(GameError::InputClosed)));
    }

    #[tokio::test]
    async fn panicking_producer_is_input_closed() {
        let rx = spawn_read(|| panic!("reader crashed"));
        assert!(matches!(receive(rx).await, Err(GameError::InputClosed)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
