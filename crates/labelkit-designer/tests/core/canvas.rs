use labelkit_designer::canvas::Canvas;
use labelkit_designer::model::{ElementKind, LabelElement, Point};

#[test]
fn test_canvas_defaults() {
    let canvas = Canvas::new();
    assert_eq!(canvas.width(), 600.0);
    assert_eq!(canvas.height(), 400.0);
    assert_eq!(canvas.grid_size(), 20.0);
    assert_eq!(canvas.element_count(), 0);
}

#[test]
fn test_add_element_defaults() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Rectangle);

    let object = canvas.get(id).unwrap();
    assert_eq!(object.name, "Rectangle");
    assert!(object.visible);
    let (x1, y1, x2, y2) = object.bounds();
    assert_eq!((x1, y1), (50.0, 50.0));
    assert_eq!((x2 - x1, y2 - y1), (100.0, 50.0));
}

#[test]
fn test_new_element_is_frontmost() {
    let mut canvas = Canvas::new();
    let first = canvas.add_element(ElementKind::Text);
    let second = canvas.add_element(ElementKind::Line);

    assert_eq!(canvas.element_ids(), vec![second, first]);
    assert_eq!(canvas.z_index(second), Some(2));
    assert_eq!(canvas.z_index(first), Some(1));
}

#[test]
fn test_move_clamps_to_surface() {
    let mut canvas = Canvas::with_size(600.0, 400.0);
    let id = canvas.add_element(ElementKind::Rectangle); // 100x50

    let applied = canvas.move_element(id, 590.0, 10.0).unwrap();
    assert_eq!(applied, (500.0, 10.0));

    let applied = canvas.move_element(id, -30.0, 395.0).unwrap();
    assert_eq!(applied, (0.0, 350.0));
}

#[test]
fn test_drag_applies_each_delta_clamped() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Rectangle);

    // Two drag steps; the second pushes past the right edge.
    canvas.drag_element(id, 400.0, 0.0).unwrap();
    let applied = canvas.drag_element(id, 200.0, 0.0).unwrap();
    assert_eq!(applied, (500.0, 50.0));
}

#[test]
fn test_move_unknown_id_is_none() {
    let mut canvas = Canvas::new();
    assert!(canvas.move_element(7, 10.0, 10.0).is_none());
}

#[test]
fn test_delete_clears_selection() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Line);
    canvas.select_element(id);
    assert_eq!(canvas.selected_id(), Some(id));

    assert!(canvas.delete_element(id));
    assert_eq!(canvas.selected_id(), None);
    assert_eq!(canvas.element_count(), 0);
}

#[test]
fn test_delete_missing_is_noop() {
    let mut canvas = Canvas::new();
    canvas.add_element(ElementKind::Line);
    assert!(!canvas.delete_element(99));
    assert_eq!(canvas.element_count(), 1);
}

#[test]
fn test_select_at_picks_topmost() {
    let mut canvas = Canvas::new();
    let below = canvas.add_element(ElementKind::Rectangle);
    let above = canvas.add_element(ElementKind::Rectangle);

    // Both rectangles sit at (50, 50); the newer one is frontmost.
    let hit = canvas.select_at(&Point::new(60.0, 60.0), 0.0);
    assert_eq!(hit, Some(above));
    assert_ne!(hit, Some(below));
}

#[test]
fn test_select_at_empty_space_clears() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Rectangle);
    canvas.select_element(id);

    let hit = canvas.select_at(&Point::new(590.0, 390.0), 0.0);
    assert_eq!(hit, None);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_single_selection_swaps() {
    let mut canvas = Canvas::new();
    let a = canvas.add_element(ElementKind::Text);
    let b = canvas.add_element(ElementKind::Line);

    canvas.select_element(a);
    canvas.select_element(b);
    assert_eq!(canvas.selected_id(), Some(b));
}

#[test]
fn test_grid_lines_cover_surface() {
    let canvas = Canvas::with_size(100.0, 60.0);
    let (vertical, horizontal) = canvas.grid_lines();
    assert_eq!(vertical, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(horizontal, vec![0.0, 20.0, 40.0, 60.0]);
}

#[test]
fn test_render_paths_back_to_front() {
    let mut canvas = Canvas::new();
    let first = canvas.add_element(ElementKind::Rectangle);
    let second = canvas.add_element(ElementKind::Line);

    let paths = canvas.render_paths();
    // Backmost paints first, frontmost last.
    assert_eq!(paths[0].0, first);
    assert_eq!(paths[1].0, second);
}

#[test]
fn test_hidden_elements_skip_render_and_hit() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Rectangle);
    canvas.get_mut(id).unwrap().visible = false;

    assert!(canvas.render_paths().is_empty());
    assert_eq!(canvas.select_at(&Point::new(60.0, 60.0), 0.0), None);
}

#[test]
fn test_reclamp_after_growth() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Rectangle);
    canvas.move_element(id, 500.0, 350.0).unwrap();

    // Grow the rectangle past the surface edge, then re-apply the clamp.
    if let Some(object) = canvas.get_mut(id) {
        if let labelkit_designer::model::ElementShape::Rectangle(rect) = &mut object.shape {
            rect.set_width(200.0);
        }
    }
    let applied = canvas.reclamp_element(id).unwrap();
    assert_eq!(applied, (400.0, 350.0));

    let (x1, _, x2, _) = canvas.element_bounds(id).unwrap();
    assert!(x2 <= canvas.width());
    assert_eq!(x2 - x1, 200.0);
}

#[test]
fn test_bounds_use_trait_origin() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Line);
    let object = canvas.get(id).unwrap();
    let origin = object.shape.origin();
    let (x1, y1, _, _) = object.bounds();
    assert_eq!((origin.x, origin.y), (x1, y1));
}
