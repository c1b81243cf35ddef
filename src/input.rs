use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Keys the game recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
}

/// Discrete input events, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start (`true`) or stop (`false`) moving left
    MoveLeft(bool),
    MoveRight(bool),
    Fire,
    Quit,
}

/// A source of input events, polled once per frame without blocking
pub trait InputSource {
    fn poll_events(&mut self) -> color_eyre::Result<Vec<InputEvent>>;
}

/// Translates input events into game actions
#[derive(Debug, Default, Clone, Copy)]
pub struct InputRouter;

impl InputRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, event: InputEvent) -> Option<InputAction> {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => Some(InputAction::Quit),
            InputEvent::KeyDown(Key::Left) => Some(InputAction::MoveLeft(true)),
            InputEvent::KeyDown(Key::Right) => Some(InputAction::MoveRight(true)),
            InputEvent::KeyDown(Key::Fire) => Some(InputAction::Fire),
            InputEvent::KeyUp(Key::Left) => Some(InputAction::MoveLeft(false)),
            InputEvent::KeyUp(Key::Right) => Some(InputAction::MoveRight(false)),
            InputEvent::KeyUp(Key::Fire) | InputEvent::KeyUp(Key::Quit) => None,
        }
    }

    /// Routes a batch of events, keeping their order
    pub fn route_all(&self, events: &[InputEvent]) -> Vec<InputAction> {
        events.iter().filter_map(|&event| self.route(event)).collect()
    }
}

/// Reads key events from the terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll_events(&mut self) -> color_eyre::Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        // Drain everything queued without blocking
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = translate_key_event(key_event) {
                    log::trace!("input {:?} from {:?}", input, key_event.code);
                    events.push(input);
                }
            }
        }

        Ok(events)
    }
}

/// Maps a crossterm key event onto a game input event
pub fn translate_key_event(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(InputEvent::Quit);
    }

    let key = match key_event.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') => Key::Fire,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        _ => return None,
    };

    match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(key)),
        KeyEventKind::Release => Some(InputEvent::KeyUp(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_route_movement_press_and_release() {
        let router = InputRouter::new();
        assert_eq!(
            router.route(InputEvent::KeyDown(Key::Left)),
            Some(InputAction::MoveLeft(true))
        );
        assert_eq!(
            router.route(InputEvent::KeyUp(Key::Left)),
            Some(InputAction::MoveLeft(false))
        );
        assert_eq!(
            router.route(InputEvent::KeyDown(Key::Right)),
            Some(InputAction::MoveRight(true))
        );
        assert_eq!(
            router.route(InputEvent::KeyUp(Key::Right)),
            Some(InputAction::MoveRight(false))
        );
    }

    #[test]
    fn test_route_fire_only_on_press() {
        let router = InputRouter::new();
        assert_eq!(router.route(InputEvent::KeyDown(Key::Fire)), Some(InputAction::Fire));
        assert_eq!(router.route(InputEvent::KeyUp(Key::Fire)), None);
    }

    #[test]
    fn test_route_quit() {
        let router = InputRouter::new();
        assert_eq!(router.route(InputEvent::Quit), Some(InputAction::Quit));
        assert_eq!(router.route(InputEvent::KeyDown(Key::Quit)), Some(InputAction::Quit));
        assert_eq!(router.route(InputEvent::KeyUp(Key::Quit)), None);
    }

    #[test]
    fn test_route_all_keeps_order() {
        let router = InputRouter::new();
        let actions = router.route_all(&[
            InputEvent::KeyDown(Key::Right),
            InputEvent::KeyUp(Key::Fire),
            InputEvent::KeyDown(Key::Fire),
            InputEvent::KeyUp(Key::Right),
        ]);
        assert_eq!(
            actions,
            vec![
                InputAction::MoveRight(true),
                InputAction::Fire,
                InputAction::MoveRight(false),
            ]
        );
    }

    #[test]
    fn test_translate_arrow_keys() {
        assert_eq!(
            translate_key_event(key(KeyCode::Left, KeyEventKind::Press)),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            translate_key_event(key(KeyCode::Right, KeyEventKind::Release)),
            Some(InputEvent::KeyUp(Key::Right))
        );
        assert_eq!(
            translate_key_event(key(KeyCode::Char('d'), KeyEventKind::Repeat)),
            Some(InputEvent::KeyDown(Key::Right))
        );
    }

    #[test]
    fn test_translate_fire_and_quit() {
        assert_eq!(
            translate_key_event(key(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(InputEvent::KeyDown(Key::Fire))
        );
        assert_eq!(
            translate_key_event(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(InputEvent::KeyDown(Key::Quit))
        );
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'), KeyEventKind::Press)
        };
        assert_eq!(translate_key_event(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_translate_ignores_other_keys() {
        assert_eq!(
            translate_key_event(key(KeyCode::Char('x'), KeyEventKind::Press)),
            None
        );
        assert_eq!(translate_key_event(key(KeyCode::Up, KeyEventKind::Press)), None);
    }
}
