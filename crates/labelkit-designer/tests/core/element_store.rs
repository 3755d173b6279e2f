use labelkit_designer::canvas::CanvasObject;
use labelkit_designer::element_store::ElementStore;
use labelkit_designer::model::{ElementShape, RectElement};

fn rect_object(store: &mut ElementStore) -> u64 {
    let id = store.generate_id();
    let shape = ElementShape::Rectangle(RectElement::new(0.0, 0.0, 10.0, 10.0));
    store.insert_front(CanvasObject::new(id, shape));
    id
}

#[test]
fn test_insert_front_is_frontmost() {
    let mut store = ElementStore::new();
    let first = rect_object(&mut store);
    let second = rect_object(&mut store);

    assert_eq!(store.ids(), vec![second, first]);
    assert_eq!(store.index_of(second), Some(0));
}

#[test]
fn test_ids_are_unique_and_stable() {
    let mut store = ElementStore::new();
    let a = rect_object(&mut store);
    let b = rect_object(&mut store);
    assert_ne!(a, b);

    store.reorder(&[a, b]).unwrap();
    assert!(store.get(a).is_some());
    assert!(store.get(b).is_some());
}

#[test]
fn test_z_index_is_count_minus_index() {
    let mut store = ElementStore::new();
    let a = rect_object(&mut store);
    let b = rect_object(&mut store);
    let c = rect_object(&mut store);

    // Front to back: c, b, a.
    assert_eq!(store.z_index(c), Some(3));
    assert_eq!(store.z_index(b), Some(2));
    assert_eq!(store.z_index(a), Some(1));
}

#[test]
fn test_reorder_replaces_stacking_order() {
    let mut store = ElementStore::new();
    let a = rect_object(&mut store);
    let b = rect_object(&mut store);
    let c = rect_object(&mut store);

    store.reorder(&[a, c, b]).unwrap();
    assert_eq!(store.ids(), vec![a, c, b]);
    assert_eq!(store.z_index(a), Some(3));
    assert_eq!(store.z_index(b), Some(1));
}

#[test]
fn test_reorder_rejects_wrong_length() {
    let mut store = ElementStore::new();
    let a = rect_object(&mut store);
    let b = rect_object(&mut store);

    let err = store.reorder(&[a]).unwrap_err();
    assert!(err.is_design_error());
    // Order untouched on failure.
    assert_eq!(store.ids(), vec![b, a]);
}

#[test]
fn test_reorder_rejects_unknown_ids() {
    let mut store = ElementStore::new();
    let a = rect_object(&mut store);
    let b = rect_object(&mut store);

    assert!(store.reorder(&[a, 9999]).unwrap_err().is_design_error());
    assert_eq!(store.ids(), vec![b, a]);
}

#[test]
fn test_remove_missing_is_none() {
    let mut store = ElementStore::new();
    rect_object(&mut store);
    assert!(store.remove(42).is_none());
    assert_eq!(store.len(), 1);
}
