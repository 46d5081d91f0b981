//! Routes terminal mouse events through the hit map.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use mechanics_content::Instance;
use ratatui::layout::Rect;

use crate::hits::{HitTarget, UiButton, point};
use crate::state::{AppMode, AppState, PlaygroundState};

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_press(state, x, y),
        MouseEventKind::Down(MouseButton::Right) => on_right_press(state, x, y),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(state, x, y),
        MouseEventKind::Up(MouseButton::Left) => on_release(state, x, y),
        _ => {}
    }
}

fn on_press(state: &mut AppState, x: u16, y: u16) {
    let hit = state.hits.hit(x, y);

    if matches!(state.mode, AppMode::Gallery) {
        match hit {
            Some((_, HitTarget::Card(index))) => state.open(index),
            Some((_, HitTarget::SearchBox)) => state.search_active = true,
            Some((_, HitTarget::SegmentFilter)) => state.cycle_segment(),
            Some((_, HitTarget::DisciplineFilter)) => state.cycle_discipline(),
            Some((_, HitTarget::KindFilter)) => state.cycle_kind(),
            Some((_, HitTarget::Button(UiButton::ClearFilters))) => state.clear_filters(),
            _ => state.search_active = false,
        }
        return;
    }

    let Some(hit) = hit else { return };
    if hit.1 == HitTarget::Button(UiButton::Close) {
        state.close_overlay();
        return;
    }
    if let AppMode::Playground(playground) = &mut state.mode {
        press_playground(playground, hit, x, y);
    }
}

fn press_playground(
    playground: &mut PlaygroundState,
    (rect, target): (Rect, HitTarget),
    x: u16,
    y: u16,
) {
    let now = Instant::now();

    if target == HitTarget::Button(UiButton::Reset) {
        if let Some(instance) = &mut playground.instance {
            instance.reset();
        }
        playground.input_buffer.clear();
        return;
    }

    let Some(instance) = &mut playground.instance else {
        return;
    };
    let at = point(x, y);

    match instance {
        Instance::Equation(board) => {
            if let HitTarget::Chip(payload) = target {
                board.session.pointer_down(payload, at, now);
            }
        }
        Instance::Crossword(board) => match target {
            HitTarget::Chip(payload) => board.session.pointer_down(payload, at, now),
            HitTarget::Button(UiButton::Validate) => board.session.check(now),
            _ => {}
        },
        Instance::Quest(stage) => {
            if let HitTarget::Chip(payload) = target {
                stage.pointer_down(payload, at, now);
            }
        }
        Instance::Biomes(board) => {
            if let HitTarget::Chip(payload) = target {
                board.pointer_down(payload, at, now);
            }
        }
        Instance::Trophic(rail) => match target {
            HitTarget::Chip(payload) => rail.pointer_down(payload, at, now),
            HitTarget::Button(UiButton::Validate) => rail.validate(now),
            HitTarget::Button(UiButton::ToggleVariant) => {
                rail.set_level(if rail.level() == 1 { 2 } else { 1 });
            }
            _ => {}
        },
        Instance::Basin(board) => match target {
            HitTarget::Cell { row, col } => board.place(row, col),
            HitTarget::Piece(piece) => board.select(piece),
            HitTarget::Button(UiButton::Validate) => board.validate(now),
            HitTarget::Button(UiButton::ToggleVariant) => {
                board.set_level(if board.level() == 1 { 2 } else { 1 });
            }
            _ => {}
        },
        Instance::ColorLab(lab) => match target {
            HitTarget::Slider(index) => {
                lab.focus(index);
                lab.set_from_ratio(index, slider_ratio(rect, x));
            }
            HitTarget::Button(UiButton::Deliver) => lab.deliver(),
            HitTarget::Button(UiButton::ToggleVariant) => {
                let next = match lab.mode() {
                    mechanics_content::ColorMode::Cmyk => mechanics_content::ColorMode::Rgb,
                    mechanics_content::ColorMode::Rgb => mechanics_content::ColorMode::Cmyk,
                };
                lab.set_mode(next);
            }
            _ => {}
        },
        Instance::Quiz(board) => match target {
            HitTarget::Option(index) => board.answer(index),
            HitTarget::Button(UiButton::Retry) => board.reset(),
            _ => {}
        },
        Instance::Grouping(board) => match target {
            HitTarget::GroupChip(id) => board.toggle(id),
            HitTarget::Button(UiButton::Combine) => board.combine(now),
            _ => {}
        },
        Instance::External(_) => {}
    }
}

fn on_right_press(state: &mut AppState, x: u16, y: u16) {
    let hit = state.hits.hit(x, y);
    if let AppMode::Playground(playground) = &mut state.mode
        && let Some(Instance::Basin(board)) = &mut playground.instance
        && let Some((_, HitTarget::Cell { row, col })) = hit
    {
        board.clear_tile(row, col);
    }
}

fn on_drag(state: &mut AppState, x: u16, y: u16) {
    let hit = state.hits.hit(x, y);
    let AppMode::Playground(playground) = &mut state.mode else {
        return;
    };
    let Some(instance) = &mut playground.instance else {
        return;
    };
    let at = point(x, y);

    match instance {
        Instance::Equation(board) => board.session.pointer_move(at),
        Instance::Crossword(board) => board.session.pointer_move(at),
        Instance::Quest(stage) => stage.pointer_move(at),
        Instance::Biomes(board) => board.pointer_move(at),
        Instance::Trophic(rail) => rail.pointer_move(at),
        Instance::ColorLab(lab) => {
            if let Some((rect, HitTarget::Slider(index))) = hit {
                lab.focus(index);
                lab.set_from_ratio(index, slider_ratio(rect, x));
            }
        }
        _ => {}
    }
}

fn on_release(state: &mut AppState, x: u16, y: u16) {
    let AppMode::Playground(playground) = &mut state.mode else {
        return;
    };
    let Some(instance) = &mut playground.instance else {
        return;
    };
    let now = Instant::now();
    let at = point(x, y);

    match instance {
        Instance::Equation(board) => {
            board.session.pointer_up(at, now);
        }
        Instance::Crossword(board) => {
            board.session.pointer_up(at, now);
        }
        Instance::Quest(stage) => stage.pointer_up(at, now),
        Instance::Biomes(board) => board.pointer_up(at, now),
        Instance::Trophic(rail) => rail.pointer_up(at, now),
        _ => {}
    }
}

fn slider_ratio(rect: Rect, x: u16) -> f64 {
    if rect.width <= 1 {
        return 0.0;
    }
    f64::from(x.saturating_sub(rect.x)) / f64::from(rect.width - 1)
}
