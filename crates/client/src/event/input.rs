//! Applies keyboard actions to application state.

use std::time::Instant;

use crossterm::event::KeyEvent;
use mechanics_content::{ColorMode, Instance, PieceKind};
use strum::IntoEnumIterator;

use crate::input::{GalleryAction, PlaygroundAction, map_gallery_key, map_playground_key};
use crate::state::{AppMode, AppState, GRID_COLUMNS, PlaygroundState};

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    match state.mode {
        AppMode::Gallery => {
            let action = map_gallery_key(key, state.search_active);
            apply_gallery(state, action);
        }
        AppMode::Playground(_) => {
            let action = map_playground_key(key);
            apply_playground(state, action);
        }
    }
}

fn apply_gallery(state: &mut AppState, action: GalleryAction) {
    match action {
        GalleryAction::Quit => state.should_quit = true,
        GalleryAction::OpenSelected => state.open_selected(),
        GalleryAction::MoveUp => state.move_selection(-(GRID_COLUMNS as isize)),
        GalleryAction::MoveDown => state.move_selection(GRID_COLUMNS as isize),
        GalleryAction::MoveLeft => state.move_selection(-1),
        GalleryAction::MoveRight => state.move_selection(1),
        GalleryAction::StartSearch => state.search_active = true,
        GalleryAction::ExitSearch => state.search_active = false,
        GalleryAction::QueryChar(c) => {
            state.query.push(c);
            state.clamp_selection();
        }
        GalleryAction::QueryBackspace => {
            state.query.pop();
            state.clamp_selection();
        }
        GalleryAction::CycleSegment => state.cycle_segment(),
        GalleryAction::CycleDiscipline => state.cycle_discipline(),
        GalleryAction::CycleKind => state.cycle_kind(),
        GalleryAction::ClearFilters => state.clear_filters(),
        GalleryAction::None => {}
    }
}

fn apply_playground(state: &mut AppState, action: PlaygroundAction) {
    if action == PlaygroundAction::Close {
        state.close_overlay();
        return;
    }
    let AppMode::Playground(playground) = &mut state.mode else {
        return;
    };
    let now = Instant::now();

    if action == PlaygroundAction::Reset {
        if let Some(instance) = &mut playground.instance {
            instance.reset();
        }
        playground.input_buffer.clear();
        return;
    }

    let PlaygroundState { instance: Some(instance), input_buffer, .. } = playground.as_mut()
    else {
        return;
    };

    match instance {
        Instance::ColorLab(lab) => match action {
            PlaygroundAction::Up => lab.focus_prev(),
            PlaygroundAction::Down => lab.focus_next(),
            PlaygroundAction::Left => lab.adjust(-5),
            PlaygroundAction::Right => lab.adjust(5),
            PlaygroundAction::ToggleVariant => lab.set_mode(match lab.mode() {
                ColorMode::Cmyk => ColorMode::Rgb,
                ColorMode::Rgb => ColorMode::Cmyk,
            }),
            PlaygroundAction::Submit | PlaygroundAction::Validate => lab.deliver(),
            _ => {}
        },
        Instance::Basin(board) => match action {
            PlaygroundAction::Digit(n @ 1..=5) => {
                if let Some(piece) = PieceKind::iter().nth(n as usize - 1) {
                    board.select(piece);
                }
            }
            PlaygroundAction::ToggleVariant => {
                board.set_level(if board.level() == 1 { 2 } else { 1 });
            }
            PlaygroundAction::Validate | PlaygroundAction::Submit => board.validate(now),
            _ => {}
        },
        Instance::Trophic(rail) => match action {
            PlaygroundAction::ToggleVariant => {
                rail.set_level(if rail.level() == 1 { 2 } else { 1 });
            }
            PlaygroundAction::Validate | PlaygroundAction::Submit => rail.validate(now),
            _ => {}
        },
        Instance::Quiz(board) => {
            if let PlaygroundAction::Digit(n @ 1..=4) = action {
                board.answer(n as usize - 1);
            }
        }
        Instance::Grouping(board) => {
            // While stuck the digits type into the answer box instead of
            // toggling chips.
            if board.is_stuck() {
                match action {
                    PlaygroundAction::Digit(n) => input_buffer.push((b'0' + n) as char),
                    PlaygroundAction::Backspace => {
                        input_buffer.pop();
                    }
                    PlaygroundAction::Submit => {
                        if let Ok(answer) = input_buffer.parse::<i64>() {
                            board.answer_total(answer, now);
                            input_buffer.clear();
                        }
                    }
                    _ => {}
                }
            } else {
                match action {
                    PlaygroundAction::Digit(n @ 1..=9) => {
                        if let Some(&(id, _)) = board.chips().get(n as usize - 1) {
                            board.toggle(id);
                        }
                    }
                    PlaygroundAction::Submit => board.combine(now),
                    _ => {}
                }
            }
        }
        Instance::Crossword(board) => {
            if matches!(action, PlaygroundAction::Validate) {
                board.session.check(now);
            }
        }
        // Drag-driven boards have no extra keyboard surface.
        Instance::Equation(_)
        | Instance::Quest(_)
        | Instance::Biomes(_)
        | Instance::External(_) => {}
    }
}
