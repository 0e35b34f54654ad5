use super::*;
use crate::core::{Tool, ToolState, PATH_END_POINT, PATH_START_POINT};
use approx::assert_relative_eq;

fn room_tools(sides: usize) -> ToolState {
    let mut tools = ToolState::new();
    tools.set_tool(Tool::Room);
    tools.set_option(sides);
    tools
}

fn tools(tool: Tool) -> ToolState {
    let mut tools = ToolState::new();
    tools.set_tool(tool);
    tools
}

fn gesture(map: &mut MapArea, tools: &ToolState, from: DVec2, to: DVec2) {
    map.press(tools, from).expect("Press sollte gelingen");
    map.drag(tools, to).expect("Drag sollte gelingen");
    map.release(tools, to).expect("Release sollte gelingen");
}

fn last_shape(map: &MapArea) -> ShapeId {
    map.shapes().last().map(|(id, _)| id).expect("Form erwartet")
}

fn draw_room(map: &mut MapArea, from: DVec2, to: DVec2) -> ShapeId {
    gesture(map, &room_tools(4), from, to);
    last_shape(map)
}

fn cp_position(map: &MapArea, shape: ShapeId, index: usize) -> DVec2 {
    map.control_point(ControlPointId::new(shape, index))
        .expect("Kontrollpunkt erwartet")
        .position()
}

fn assert_point(actual: DVec2, expected: DVec2) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
}

/// Zwei Quadrate um (0,0) und (100,0), verbunden durch einen Pfad von (0,0) nach (100,0).
fn connected_rooms() -> (MapArea, ShapeId, ShapeId, ShapeId) {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0));
    let b = draw_room(&mut map, DVec2::new(90.0, 0.0), DVec2::new(110.0, 0.0));
    gesture(
        &mut map,
        &tools(Tool::Path),
        DVec2::ZERO,
        DVec2::new(100.0, 0.0),
    );
    let path = last_shape(&map);
    (map, a, b, path)
}

#[test]
fn test_draw_square_room() {
    let mut map = MapArea::new();
    let id = draw_room(&mut map, DVec2::ZERO, DVec2::new(10.0, 0.0));

    let shape = map.shape(id).expect("Form erwartet");
    assert_eq!(shape.state(), ShapeState::Finalized);
    assert_eq!(shape.control_points().len(), 4);

    let positions: Vec<DVec2> = shape.control_points().iter().map(|cp| cp.position()).collect();
    let (min, max) = crate::core::geometry::bounds_of(&positions).expect("Bounds erwartet");
    assert_point((min + max) * 0.5, DVec2::new(5.0, 0.0));
    for p in positions {
        assert_relative_eq!(p.distance(DVec2::new(5.0, 0.0)), 5.0, epsilon = 1e-9);
    }
    assert!(!map.is_drawing());
}

#[test]
fn test_room_without_sides_fails() {
    let mut map = MapArea::new();
    let mut tools = ToolState::new();
    tools.set_tool(Tool::Room);

    let err = map
        .press(&tools, DVec2::ZERO)
        .expect_err("Raum ohne Seitenanzahl muss fehlschlagen");
    assert_eq!(err, EditorError::InvalidSides(0));
    assert!(map.is_empty());
}

#[test]
fn test_click_without_drag_discards_shape() {
    let mut map = MapArea::new();
    let tools = room_tools(5);
    map.press(&tools, DVec2::new(3.0, 3.0)).expect("Press sollte gelingen");
    assert!(map.is_drawing());

    let err = map
        .release(&tools, DVec2::new(3.0, 3.0))
        .expect_err("Finalize ohne Geometrie muss fehlschlagen");
    assert!(matches!(err, EditorError::MissingGeometry { .. }));
    assert!(map.is_empty());
    assert!(!map.is_drawing());
}

#[test]
fn test_path_wiring_locks() {
    let (map, a, b, path) = connected_rooms();

    let path_shape = map.shape(path).expect("Pfad erwartet");
    assert!(path_shape.is_path());
    assert_point(cp_position(&map, path, PATH_START_POINT), DVec2::ZERO);
    assert_point(cp_position(&map, path, PATH_END_POINT), DVec2::new(100.0, 0.0));

    let path_locks: Vec<MovableId> = path_shape.locks().iter().copied().collect();
    assert_eq!(path_locks, vec![MovableId::Shape(a), MovableId::Shape(b)]);
    assert!(map
        .shape(a)
        .expect("Form A erwartet")
        .locks()
        .contains(&MovableId::ControlPoint(ControlPointId::new(path, PATH_START_POINT))));
    assert!(map
        .shape(b)
        .expect("Form B erwartet")
        .locks()
        .contains(&MovableId::ControlPoint(ControlPointId::new(path, PATH_END_POINT))));
}

#[test]
fn test_moving_room_drags_near_path_end_only() {
    let (mut map, a, b, path) = connected_rooms();
    let b_before = map.shape(b).expect("Form B erwartet").vertices();

    map.translate(MovableId::Shape(a), DVec2::new(3.0, 4.0))
        .expect("Translate sollte gelingen");

    assert_point(cp_position(&map, path, PATH_START_POINT), DVec2::new(3.0, 4.0));
    assert_point(cp_position(&map, path, PATH_END_POINT), DVec2::new(100.0, 0.0));
    assert_point(cp_position(&map, a, 0), DVec2::new(13.0, 4.0));
    assert_eq!(map.shape(b).expect("Form B erwartet").vertices(), b_before);

    let path_vertices = map.shape(path).expect("Pfad erwartet").vertices();
    assert_relative_eq!(path_vertices[2], 3.0, epsilon = 1e-9);
    assert_relative_eq!(path_vertices[3], 4.0, epsilon = 1e-9);
}

#[test]
fn test_moving_path_moves_everything_once() {
    let (mut map, a, b, path) = connected_rooms();
    let move_tools = tools(Tool::Move);

    map.press(&move_tools, DVec2::new(50.0, 0.0)).expect("Press sollte gelingen");
    map.drag(&move_tools, DVec2::new(52.0, 1.0)).expect("Drag sollte gelingen");
    map.release(&move_tools, DVec2::new(52.0, 1.0)).expect("Release sollte gelingen");

    assert_point(cp_position(&map, a, 0), DVec2::new(12.0, 1.0));
    assert_point(cp_position(&map, b, 2), DVec2::new(92.0, 1.0));
    assert_point(cp_position(&map, path, PATH_START_POINT), DVec2::new(2.0, 1.0));
    assert_point(cp_position(&map, path, PATH_END_POINT), DVec2::new(102.0, 1.0));
}

#[test]
fn test_lock_cycle_terminates() {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::ZERO, DVec2::new(10.0, 0.0));
    let b = draw_room(&mut map, DVec2::new(50.0, 0.0), DVec2::new(60.0, 0.0));
    map.add_lock(a, MovableId::Shape(b)).expect("Lock A→B");
    map.add_lock(b, MovableId::Shape(a)).expect("Lock B→A");
    map.add_lock(a, MovableId::Shape(a)).expect("Selbst-Lock");

    let moved = map
        .translate(MovableId::Shape(a), DVec2::new(1.0, 0.0))
        .expect("Translate sollte gelingen");

    assert_eq!(moved, 8);
    assert_point(cp_position(&map, a, 2), DVec2::new(1.0, 0.0));
    assert_point(cp_position(&map, b, 2), DVec2::new(51.0, 0.0));
}

#[test]
fn test_translate_zero_and_unknown() {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::ZERO, DVec2::new(10.0, 0.0));
    let revision = map.revision();

    assert_eq!(map.translate(MovableId::Shape(a), DVec2::ZERO), Ok(0));
    assert_eq!(map.revision(), revision);
    assert_eq!(
        map.translate(MovableId::Shape(99), DVec2::X),
        Err(EditorError::UnknownShape(99))
    );
}

#[test]
fn test_select_then_move_selection() {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0));
    let b = draw_room(&mut map, DVec2::new(90.0, 0.0), DVec2::new(110.0, 0.0));

    let select = tools(Tool::Select);
    map.press(&select, DVec2::new(-20.0, -20.0)).expect("Press sollte gelingen");
    assert!(map.selection_area().is_some());
    map.drag(&select, DVec2::new(20.0, 20.0)).expect("Drag sollte gelingen");
    map.release(&select, DVec2::new(20.0, 20.0)).expect("Release sollte gelingen");

    assert!(map.selection_area().is_none());
    assert_eq!(map.selection().len(), 4);
    assert!(map.selection().iter().all(|id| id.shape == a));
    assert!(map
        .control_point(ControlPointId::new(a, 1))
        .expect("Kontrollpunkt erwartet")
        .is_selected());

    let move_tools = tools(Tool::Move);
    // Geste auf leerer Fläche lässt die Selektion liegen
    map.press(&move_tools, DVec2::new(200.0, 200.0)).expect("Press sollte gelingen");
    map.drag(&move_tools, DVec2::new(205.0, 200.0)).expect("Drag sollte gelingen");
    map.release(&move_tools, DVec2::new(205.0, 200.0)).expect("Release sollte gelingen");
    assert_point(cp_position(&map, a, 0), DVec2::new(10.0, 0.0));

    map.press(&move_tools, DVec2::ZERO).expect("Press sollte gelingen");
    map.drag(&move_tools, DVec2::new(5.0, 0.0)).expect("Drag sollte gelingen");
    map.drag(&move_tools, DVec2::new(5.0, 3.0)).expect("Drag sollte gelingen");
    map.release(&move_tools, DVec2::new(5.0, 3.0)).expect("Release sollte gelingen");

    assert_point(cp_position(&map, a, 0), DVec2::new(15.0, 3.0));
    assert_point(cp_position(&map, b, 0), DVec2::new(110.0, 0.0));

    map.press(&select, DVec2::new(500.0, 500.0)).expect("Press sollte gelingen");
    assert!(map.selection().is_empty());
    assert!(!map
        .control_point(ControlPointId::new(a, 1))
        .expect("Kontrollpunkt erwartet")
        .is_selected());
}

#[test]
fn test_move_without_selection_moves_grabbed_point() {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0));
    let move_tools = tools(Tool::Move);

    map.press(&move_tools, DVec2::new(10.0, 1.0)).expect("Press sollte gelingen");
    map.drag(&move_tools, DVec2::new(14.0, 1.0)).expect("Drag sollte gelingen");
    map.release(&move_tools, DVec2::new(14.0, 1.0)).expect("Release sollte gelingen");

    assert_point(cp_position(&map, a, 0), DVec2::new(14.0, 0.0));
    assert_point(cp_position(&map, a, 2), DVec2::new(-10.0, 0.0));
    assert_relative_eq!(
        map.shape(a).expect("Form erwartet").vertices()[0],
        14.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_erase_removes_shape_and_dangling_locks() {
    let (mut map, a, b, path) = connected_rooms();
    let erase = tools(Tool::Erase);

    map.press(&erase, DVec2::new(95.0, 3.0)).expect("Press sollte gelingen");
    map.release(&erase, DVec2::new(95.0, 3.0)).expect("Release sollte gelingen");

    assert!(map.shape(b).is_none());
    assert_eq!(map.shape_count(), 2);
    let path_locks: Vec<MovableId> = map
        .shape(path)
        .expect("Pfad erwartet")
        .locks()
        .iter()
        .copied()
        .collect();
    assert_eq!(path_locks, vec![MovableId::Shape(a)]);

    map.translate(MovableId::Shape(path), DVec2::new(1.0, 1.0))
        .expect("Translate sollte gelingen");
    assert_point(cp_position(&map, a, 0), DVec2::new(11.0, 1.0));
}

#[test]
fn test_erase_on_control_point_is_noop() {
    let mut map = MapArea::new();
    draw_room(&mut map, DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0));
    let erase = tools(Tool::Erase);

    map.press(&erase, DVec2::new(10.0, 0.0)).expect("Press sollte gelingen");
    map.release(&erase, DVec2::new(10.0, 0.0)).expect("Release sollte gelingen");

    assert_eq!(map.shape_count(), 1);
}

#[test]
fn test_pick_prefers_topmost() {
    let mut map = MapArea::new();
    let a = draw_room(&mut map, DVec2::new(-30.0, 0.0), DVec2::new(30.0, 0.0));
    let b = draw_room(&mut map, DVec2::new(-6.0, 0.0), DVec2::new(6.0, 0.0));

    assert_eq!(map.pick(DVec2::ZERO), Some(MovableId::Shape(b)));
    assert_eq!(map.pick(DVec2::new(0.0, 20.0)), Some(MovableId::Shape(a)));
    assert_eq!(
        map.pick(DVec2::new(30.0, 0.0)),
        Some(MovableId::ControlPoint(ControlPointId::new(a, 0)))
    );
    assert_eq!(
        map.pick(DVec2::new(6.0, 1.0)),
        Some(MovableId::ControlPoint(ControlPointId::new(b, 0)))
    );
    assert_eq!(map.pick(DVec2::new(100.0, 100.0)), None);
}

#[test]
fn test_door_and_stray_drag_do_nothing() {
    let mut map = MapArea::new();
    let door = tools(Tool::Door);
    map.drag(&door, DVec2::new(1.0, 1.0)).expect("Drag ohne Press wird ignoriert");
    gesture(&mut map, &door, DVec2::ZERO, DVec2::new(5.0, 5.0));

    assert!(map.is_empty());
    assert_eq!(map.revision(), 0);
}

#[test]
fn test_map_text_roundtrip_through_canvas() {
    let mut map = MapArea::new();
    draw_room(&mut map, DVec2::ZERO, DVec2::new(10.0, 0.0));
    gesture(&mut map, &room_tools(3), DVec2::new(40.0, 0.0), DVec2::new(40.0, 12.0));
    let text = map.to_map_text();

    let mut reloaded = MapArea::new();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(reloaded.load_map_lines(&lines), Ok(2));

    let original: Vec<Vec<f64>> = map.shapes().map(|(_, s)| s.vertices()).collect();
    let restored: Vec<Vec<f64>> = reloaded.shapes().map(|(_, s)| s.vertices()).collect();
    assert_eq!(original, restored);
    assert_eq!(reloaded.to_map_text(), text);
}

#[test]
fn test_failed_load_keeps_content() {
    let mut map = MapArea::new();
    draw_room(&mut map, DVec2::ZERO, DVec2::new(10.0, 0.0));

    let result = map.load_map_lines(&["sides 3", "fill #00FF00 1.0"]);
    assert!(result.is_err());
    assert_eq!(map.shape_count(), 1);
}
