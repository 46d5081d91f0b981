//! Keyboard mapping.
//!
//! Keys translate to intent-level actions here; interpreting an action
//! against the running mechanic happens in the event handlers. The mapping
//! itself stays context-free apart from the search-entry flag.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Actions available while browsing the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryAction {
    Quit,
    OpenSelected,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    StartSearch,
    ExitSearch,
    QueryChar(char),
    QueryBackspace,
    CycleSegment,
    CycleDiscipline,
    CycleKind,
    ClearFilters,
    None,
}

/// Actions available inside a running mechanic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaygroundAction {
    Close,
    Reset,
    Validate,
    Submit,
    /// Level or mode switch (basin phase, CMYK/RGB, trophic levels).
    ToggleVariant,
    Digit(u8),
    Left,
    Right,
    Up,
    Down,
    Backspace,
    None,
}

pub fn map_gallery_key(key: KeyEvent, search_active: bool) -> GalleryAction {
    if key.kind != KeyEventKind::Press {
        return GalleryAction::None;
    }

    if search_active {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => GalleryAction::ExitSearch,
            KeyCode::Backspace => GalleryAction::QueryBackspace,
            KeyCode::Char(c) => GalleryAction::QueryChar(c),
            _ => GalleryAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => GalleryAction::Quit,
        KeyCode::Enter => GalleryAction::OpenSelected,
        KeyCode::Up => GalleryAction::MoveUp,
        KeyCode::Down => GalleryAction::MoveDown,
        KeyCode::Left => GalleryAction::MoveLeft,
        KeyCode::Right => GalleryAction::MoveRight,
        KeyCode::Char('/') => GalleryAction::StartSearch,
        KeyCode::Char('s') => GalleryAction::CycleSegment,
        KeyCode::Char('d') => GalleryAction::CycleDiscipline,
        KeyCode::Char('t') => GalleryAction::CycleKind,
        KeyCode::Char('c') => GalleryAction::ClearFilters,
        _ => GalleryAction::None,
    }
}

pub fn map_playground_key(key: KeyEvent) -> PlaygroundAction {
    if key.kind != KeyEventKind::Press {
        return PlaygroundAction::None;
    }

    match key.code {
        KeyCode::Esc => PlaygroundAction::Close,
        KeyCode::Char('r') => PlaygroundAction::Reset,
        KeyCode::Char('v') => PlaygroundAction::Validate,
        KeyCode::Char('m') => PlaygroundAction::ToggleVariant,
        KeyCode::Enter => PlaygroundAction::Submit,
        KeyCode::Backspace => PlaygroundAction::Backspace,
        KeyCode::Left => PlaygroundAction::Left,
        KeyCode::Right => PlaygroundAction::Right,
        KeyCode::Up => PlaygroundAction::Up,
        KeyCode::Down => PlaygroundAction::Down,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            PlaygroundAction::Digit(c as u8 - b'0')
        }
        _ => PlaygroundAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn gallery_keys_map_to_actions() {
        assert_eq!(map_gallery_key(key(KeyCode::Char('q')), false), GalleryAction::Quit);
        assert_eq!(map_gallery_key(key(KeyCode::Enter), false), GalleryAction::OpenSelected);
        assert_eq!(map_gallery_key(key(KeyCode::Char('/')), false), GalleryAction::StartSearch);
        assert_eq!(map_gallery_key(key(KeyCode::Char('d')), false), GalleryAction::CycleDiscipline);
    }

    #[test]
    fn search_mode_captures_characters() {
        assert_eq!(
            map_gallery_key(key(KeyCode::Char('q')), true),
            GalleryAction::QueryChar('q'),
            "quit key types into the query while searching"
        );
        assert_eq!(map_gallery_key(key(KeyCode::Esc), true), GalleryAction::ExitSearch);
        assert_eq!(map_gallery_key(key(KeyCode::Backspace), true), GalleryAction::QueryBackspace);
    }

    #[test]
    fn playground_digits_carry_their_value() {
        assert_eq!(map_playground_key(key(KeyCode::Char('3'))), PlaygroundAction::Digit(3));
        assert_eq!(map_playground_key(key(KeyCode::Char('0'))), PlaygroundAction::Digit(0));
        assert_eq!(map_playground_key(key(KeyCode::Esc)), PlaygroundAction::Close);
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_gallery_key(release, false), GalleryAction::None);
        assert_eq!(map_playground_key(release), PlaygroundAction::None);
    }
}
