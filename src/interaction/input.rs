// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal events to the controller's pointer/command vocabulary.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::model::Point;

use super::viewport::CellMetrics;

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);
pub const ZOOM_STEP: f64 = 0.1;

/// Primary-button pointer events, in screen space relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    DoubleClick(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddNote,
    Cancel,
    DeleteSelected,
    ZoomBy(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pointer(PointerEvent),
    Command(Command),
}

/// Stateful because crossterm reports single clicks only; two presses on the same cell
/// within [`DOUBLE_CLICK_WINDOW`] become a double click.
#[derive(Debug, Clone, Default)]
pub struct InputDecoder {
    metrics: CellMetrics,
    last_press: Option<(Instant, u16, u16)>,
}

impl InputDecoder {
    pub fn new(metrics: CellMetrics) -> Self {
        Self {
            metrics,
            last_press: None,
        }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn decode(&mut self, event: &Event, now: Instant) -> Option<Input> {
        match event {
            Event::Key(key) => decode_key(key).map(Input::Command),
            Event::Mouse(mouse) => self.decode_mouse(mouse, now),
            _ => None,
        }
    }

    fn decode_mouse(&mut self, mouse: &MouseEvent, now: Instant) -> Option<Input> {
        let at = self.metrics.cell_to_screen(mouse.column, mouse.row);
        let zoom_modifier = mouse.modifiers.contains(KeyModifiers::CONTROL);
        let pointer = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let repeated = self.last_press.is_some_and(|(at_time, column, row)| {
                    column == mouse.column
                        && row == mouse.row
                        && now.saturating_duration_since(at_time) <= DOUBLE_CLICK_WINDOW
                });
                if repeated {
                    self.last_press = None;
                    PointerEvent::DoubleClick(at)
                } else {
                    self.last_press = Some((now, mouse.column, mouse.row));
                    PointerEvent::Down(at)
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerEvent::Move(at),
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up(at),
            MouseEventKind::ScrollUp if zoom_modifier => {
                return Some(Input::Command(Command::ZoomBy(ZOOM_STEP)));
            }
            MouseEventKind::ScrollDown if zoom_modifier => {
                return Some(Input::Command(Command::ZoomBy(-ZOOM_STEP)));
            }
            _ => return None,
        };
        Some(Input::Pointer(pointer))
    }
}

fn decode_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let chorded = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
    match key.code {
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Char('n') if !chorded => Some(Command::AddNote),
        KeyCode::Delete | KeyCode::Backspace => Some(Command::DeleteSelected),
        KeyCode::Char('+') | KeyCode::Char('=') if !chorded => Some(Command::ZoomBy(ZOOM_STEP)),
        KeyCode::Char('-') if !chorded => Some(Command::ZoomBy(-ZOOM_STEP)),
        _ => None,
    }
}
