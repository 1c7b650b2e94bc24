use winit::keyboard::KeyCode;

use crate::core::data::viewport::{PanDirection, ViewportCommand};

#[must_use]
pub fn command_for_key(key_code: KeyCode) -> Option<ViewportCommand> {
    match key_code {
        KeyCode::ArrowLeft => Some(ViewportCommand::Pan(PanDirection::Left)),
        KeyCode::ArrowRight => Some(ViewportCommand::Pan(PanDirection::Right)),
        KeyCode::ArrowUp => Some(ViewportCommand::Pan(PanDirection::Up)),
        KeyCode::ArrowDown => Some(ViewportCommand::Pan(PanDirection::Down)),
        KeyCode::Digit0 | KeyCode::Numpad0 => Some(ViewportCommand::Reset),
        KeyCode::KeyZ => Some(ViewportCommand::ZoomIn),
        KeyCode::KeyX => Some(ViewportCommand::ZoomOut),
        KeyCode::KeyQ | KeyCode::Escape => Some(ViewportCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_pan_in_their_direction() {
        assert_eq!(
            command_for_key(KeyCode::ArrowLeft),
            Some(ViewportCommand::Pan(PanDirection::Left))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowRight),
            Some(ViewportCommand::Pan(PanDirection::Right))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowUp),
            Some(ViewportCommand::Pan(PanDirection::Up))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowDown),
            Some(ViewportCommand::Pan(PanDirection::Down))
        );
    }

    #[test]
    fn zoom_reset_and_quit_keys() {
        assert_eq!(command_for_key(KeyCode::KeyZ), Some(ViewportCommand::ZoomIn));
        assert_eq!(command_for_key(KeyCode::KeyX), Some(ViewportCommand::ZoomOut));
        assert_eq!(command_for_key(KeyCode::Digit0), Some(ViewportCommand::Reset));
        assert_eq!(command_for_key(KeyCode::KeyQ), Some(ViewportCommand::Quit));
        assert_eq!(command_for_key(KeyCode::Escape), Some(ViewportCommand::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for_key(KeyCode::KeyW), None);
        assert_eq!(command_for_key(KeyCode::Space), None);
    }
}
