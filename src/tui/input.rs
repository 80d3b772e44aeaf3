use crate::game::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Leave,
}

/// Only fresh presses count; held-key repeats and releases are dropped.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Leave),
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Leave),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_steer() {
        assert_eq!(command_for(press(KeyCode::Char('w'))), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for(press(KeyCode::Down)), Some(Command::Steer(Direction::Down)));
        assert_eq!(command_for(press(KeyCode::Char('A'))), Some(Command::Steer(Direction::Left)));
        assert_eq!(command_for(press(KeyCode::Right)), Some(Command::Steer(Direction::Right)));
    }

    #[test]
    fn escape_and_ctrl_c_leave() {
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Leave));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Leave)
        );
        assert_eq!(command_for(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn repeats_and_releases_are_ignored() {
        let repeat = KeyEvent::new_with_kind(KeyCode::Char('w'), KeyModifiers::NONE, KeyEventKind::Repeat);
        let release = KeyEvent::new_with_kind(KeyCode::Char('w'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for(repeat), None);
        assert_eq!(command_for(release), None);
    }
}
