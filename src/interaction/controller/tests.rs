// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{hit_test, PointerTarget, WallController};
use crate::format::document_to_json;
use crate::interaction::{Command, Gesture, Input, PointerEvent};
use crate::model::fixtures::{nid, planning_wall, wid};
use crate::model::{IdGenerator, Point, Size, WallId};
use crate::store::{MemoryStorage, WallStore};
use crate::ui::TempConnection;

struct ControllerTestCtx {
    store: WallStore,
    controller: WallController,
    wall_id: WallId,
}

impl ControllerTestCtx {
    fn press(&mut self, x: f64, y: f64) {
        self.send(Input::Pointer(PointerEvent::Down(Point::new(x, y))));
    }

    fn drag_to(&mut self, x: f64, y: f64) {
        self.send(Input::Pointer(PointerEvent::Move(Point::new(x, y))));
    }

    fn release(&mut self, x: f64, y: f64) {
        self.send(Input::Pointer(PointerEvent::Up(Point::new(x, y))));
    }

    fn click(&mut self, x: f64, y: f64) {
        self.press(x, y);
        self.release(x, y);
    }

    fn send(&mut self, input: Input) {
        self.controller.handle(&mut self.store, input);
    }

    fn position_of(&self, id: &str) -> Point {
        self.store.note(&self.wall_id, &nid(id)).unwrap().position()
    }

    fn connection_count(&self) -> usize {
        self.store.wall(&self.wall_id).unwrap().connections().len()
    }
}

#[fixture]
fn ctx() -> ControllerTestCtx {
    let wall = planning_wall();
    let document = document_to_json(std::slice::from_ref(&wall), Some(wall.wall_id()));
    let storage = MemoryStorage::with_contents(serde_json::to_string(&document).unwrap());
    let mut store = WallStore::new(storage).with_ids(IdGenerator::seeded(11));
    store.hydrate();
    ControllerTestCtx {
        store,
        controller: WallController::new(),
        wall_id: wid("w-planning"),
    }
}

#[test]
fn hit_test_prefers_handles_and_topmost_notes() {
    let wall = planning_wall();
    assert_eq!(hit_test(&wall, Point::new(150.0, 100.0)), PointerTarget::Note(nid("n-a")));
    assert_eq!(hit_test(&wall, Point::new(290.0, 50.0)), PointerTarget::LinkHandle(nid("n-a")));
    assert_eq!(hit_test(&wall, Point::new(295.0, 215.0)), PointerTarget::ResizeHandle(nid("n-a")));
    assert_eq!(hit_test(&wall, Point::new(530.0, 210.0)), PointerTarget::Note(nid("n-c")));
    assert_eq!(hit_test(&wall, Point::new(50.0, 50.0)), PointerTarget::Canvas);
}

#[rstest]
fn dragging_a_note_moves_it_by_the_pointer_delta(mut ctx: ControllerTestCtx) {
    ctx.press(150.0, 100.0);
    assert!(matches!(ctx.controller.gesture(), Some(Gesture::Drag(_))));

    ctx.drag_to(170.0, 90.0);
    assert_eq!(ctx.position_of("n-a"), Point::new(120.0, 30.0));

    ctx.release(180.0, 95.0);
    assert_eq!(ctx.position_of("n-a"), Point::new(130.0, 35.0));
    assert!(ctx.controller.gesture().is_none());
}

#[rstest]
fn dragging_is_zoom_aware(mut ctx: ControllerTestCtx) {
    ctx.store.set_zoom(2.0);
    ctx.press(210.0, 90.0);
    ctx.drag_to(250.0, 130.0);
    assert_eq!(ctx.position_of("n-a"), Point::new(120.0, 60.0));
}

#[rstest]
fn resize_handle_changes_size(mut ctx: ControllerTestCtx) {
    ctx.press(295.0, 215.0);
    ctx.drag_to(335.0, 195.0);
    ctx.release(335.0, 195.0);
    let size = ctx.store.note(&ctx.wall_id, &nid("n-a")).unwrap().size();
    assert_eq!(size, Size::new(240.0, 160.0));
}

#[rstest]
fn connect_drag_onto_another_note_adds_connection(mut ctx: ControllerTestCtx) {
    ctx.press(290.0, 50.0);
    assert_eq!(
        ctx.store.temp_connection(),
        Some(&TempConnection {
            from_note_id: nid("n-a"),
            to: Point::new(290.0, 50.0),
        })
    );

    ctx.drag_to(600.0, 300.0);
    assert_eq!(ctx.store.temp_connection().unwrap().to, Point::new(600.0, 300.0));

    ctx.release(600.0, 300.0);
    assert_eq!(ctx.store.temp_connection(), None);
    assert_eq!(ctx.connection_count(), 2);
    let wall = ctx.store.wall(&ctx.wall_id).unwrap();
    assert!(wall.has_connection_between(&nid("n-c"), &nid("n-a")));
}

#[rstest]
fn connect_drag_released_on_canvas_changes_nothing(mut ctx: ControllerTestCtx) {
    ctx.press(290.0, 50.0);
    ctx.drag_to(40.0, 400.0);
    ctx.release(40.0, 400.0);
    assert_eq!(ctx.store.temp_connection(), None);
    assert_eq!(ctx.connection_count(), 1);
}

#[rstest]
fn link_clicks_connect_two_notes(mut ctx: ControllerTestCtx) {
    ctx.click(290.0, 50.0);
    assert_eq!(ctx.store.connection_source(), Some(&nid("n-a")));

    ctx.click(700.0, 210.0);
    assert_eq!(ctx.store.connection_source(), None);
    assert_eq!(ctx.connection_count(), 2);
}

#[rstest]
fn escape_cancels_link_drawing(mut ctx: ControllerTestCtx) {
    ctx.click(290.0, 50.0);
    ctx.press(700.0, 210.0);
    ctx.send(Input::Command(Command::Cancel));
    assert_eq!(ctx.store.connection_source(), None);
    assert_eq!(ctx.store.temp_connection(), None);
    assert!(ctx.controller.gesture().is_none());
}

#[rstest]
fn add_note_key_uses_next_slot(mut ctx: ControllerTestCtx) {
    ctx.send(Input::Command(Command::AddNote));
    let wall = ctx.store.wall(&ctx.wall_id).unwrap();
    assert_eq!(wall.notes().len(), 4);
    assert_eq!(wall.notes()[3].position(), Point::new(0.0, 40.0));
    assert_eq!(ctx.controller.selected(), Some(wall.notes()[3].note_id()));
}

#[rstest]
fn double_click_on_canvas_adds_centered_note(mut ctx: ControllerTestCtx) {
    ctx.send(Input::Pointer(PointerEvent::DoubleClick(Point::new(400.0, 400.0))));
    let wall = ctx.store.wall(&ctx.wall_id).unwrap();
    assert_eq!(wall.notes().len(), 4);
    assert_eq!(wall.notes()[3].position(), Point::new(290.0, 300.0));

    ctx.send(Input::Pointer(PointerEvent::DoubleClick(Point::new(150.0, 100.0))));
    assert_eq!(ctx.store.wall(&ctx.wall_id).unwrap().notes().len(), 4);
}

#[rstest]
fn delete_key_removes_the_selected_note(mut ctx: ControllerTestCtx) {
    ctx.click(400.0, 150.0);
    assert_eq!(ctx.controller.selected(), Some(&nid("n-b")));

    ctx.send(Input::Command(Command::DeleteSelected));
    let wall = ctx.store.wall(&ctx.wall_id).unwrap();
    assert!(wall.note(&nid("n-b")).is_none());
    assert!(wall.connections().is_empty());
    assert_eq!(ctx.controller.selected(), None);
}

#[rstest]
fn zoom_commands_step_and_clamp(mut ctx: ControllerTestCtx) {
    ctx.send(Input::Command(Command::ZoomBy(0.1)));
    assert!((ctx.store.zoom() - 1.1).abs() < 1e-9);
    for _ in 0..20 {
        ctx.send(Input::Command(Command::ZoomBy(0.1)));
    }
    assert_eq!(ctx.store.zoom(), 2.0);
}
