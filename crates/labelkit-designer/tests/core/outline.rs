use labelkit_designer::canvas::Canvas;
use labelkit_designer::model::ElementKind;
use labelkit_designer::outline::Outline;

fn setup() -> (Canvas, Outline, u64) {
    let mut canvas = Canvas::new();
    let mut outline = Outline::new();
    let id = canvas.add_element(ElementKind::Text);
    outline.on_element_added(&canvas, id);
    (canvas, outline, id)
}

#[test]
fn test_added_entry_is_topmost() {
    let (mut canvas, mut outline, first) = setup();
    let second = canvas.add_element(ElementKind::Line);
    outline.on_element_added(&canvas, second);

    assert_eq!(outline.len(), 2);
    assert_eq!(outline.entries()[0].id, second);
    assert_eq!(outline.entries()[1].id, first);
}

#[test]
fn test_default_labels() {
    let (mut canvas, mut outline, _) = setup();
    for kind in [
        ElementKind::Rectangle,
        ElementKind::Line,
        ElementKind::Barcode,
    ] {
        let id = canvas.add_element(kind);
        outline.on_element_added(&canvas, id);
    }

    let labels: Vec<&str> = outline.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Barcode - Barcode: CODE128",
            "Line - Line: 100px",
            "Rectangle - Rectangle: 100x50",
            "Text - Text: Text",
        ]
    );
}

#[test]
fn test_text_summary_truncates_to_twenty_chars() {
    let (mut canvas, mut outline, id) = setup();
    canvas.get_mut(id).unwrap().name = "Label1".to_string();
    if let labelkit_designer::model::ElementShape::Text(text) =
        &mut canvas.get_mut(id).unwrap().shape
    {
        text.content = "Hello World This Is A Long Title".to_string();
    }
    outline.relabel(&canvas, id);

    assert_eq!(
        outline.entries()[0].label,
        "Text - Label1: Hello World This Is "
    );
}

#[test]
fn test_empty_text_summary() {
    let (mut canvas, mut outline, id) = setup();
    if let labelkit_designer::model::ElementShape::Text(text) =
        &mut canvas.get_mut(id).unwrap().shape
    {
        text.content.clear();
    }
    outline.relabel(&canvas, id);
    assert_eq!(outline.entries()[0].label, "Text - Text: Empty");
}

#[test]
fn test_reorder_updates_entries_and_z() {
    let (mut canvas, mut outline, text) = setup();
    let line = canvas.add_element(ElementKind::Line);
    outline.on_element_added(&canvas, line);
    let rect = canvas.add_element(ElementKind::Rectangle);
    outline.on_element_added(&canvas, rect);

    outline.on_reorder(&mut canvas, &[text, rect, line]).unwrap();

    let order: Vec<u64> = outline.entries().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![text, rect, line]);
    assert_eq!(canvas.element_ids(), vec![text, rect, line]);
    assert_eq!(canvas.z_index(text), Some(3));
    assert_eq!(canvas.z_index(line), Some(1));
}

#[test]
fn test_reorder_mismatch_leaves_everything() {
    let (mut canvas, mut outline, text) = setup();
    let line = canvas.add_element(ElementKind::Line);
    outline.on_element_added(&canvas, line);

    assert!(outline.on_reorder(&mut canvas, &[text]).is_err());
    assert_eq!(canvas.element_ids(), vec![line, text]);
    assert_eq!(outline.entries()[0].id, line);
}

#[test]
fn test_delete_removes_entry_and_element() {
    let (mut canvas, mut outline, id) = setup();
    canvas.select_element(id);

    assert!(outline.on_delete(&mut canvas, id));
    assert!(outline.is_empty());
    assert_eq!(canvas.element_count(), 0);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_delete_missing_is_noop() {
    let (mut canvas, mut outline, _) = setup();
    assert!(!outline.on_delete(&mut canvas, 404));
    assert_eq!(outline.len(), 1);
    assert_eq!(canvas.element_count(), 1);
}

#[test]
fn test_relabel_follows_rename() {
    let (mut canvas, mut outline, id) = setup();
    canvas.get_mut(id).unwrap().name = "Title".to_string();
    outline.relabel(&canvas, id);
    assert_eq!(outline.entries()[0].label, "Text - Title: Text");
}

#[test]
fn test_refresh_mirrors_canvas_order() {
    let (mut canvas, mut outline, text) = setup();
    let barcode = canvas.add_element(ElementKind::Barcode);
    outline.refresh(&canvas);

    assert_eq!(outline.len(), 2);
    assert_eq!(outline.entries()[0].id, barcode);
    assert_eq!(outline.entries()[1].id, text);
}
