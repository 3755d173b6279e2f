use labelkit_designer::model::{
    BarcodeChild, BarcodeDesign, BarcodeElement, LabelElement, SAMPLE_LABEL,
};

#[test]
fn test_pattern_tables() {
    assert_eq!(
        BarcodeDesign::Code128.widths(),
        &[3, 2, 3, 2, 2, 3, 2, 3, 3, 2, 2, 3, 2, 3, 2, 2, 3, 2, 3]
    );
    assert_eq!(BarcodeDesign::Code128.widths().len(), 19);
    assert_eq!(BarcodeDesign::Minimal.widths(), &[4, 2, 4, 2, 4, 2, 4]);
    assert_eq!(
        BarcodeDesign::Ean13.widths(),
        &[2, 2, 3, 2, 2, 4, 3, 2, 3, 2, 2]
    );
    assert_eq!(
        BarcodeDesign::Code39.widths(),
        &[3, 1, 3, 1, 2, 1, 3, 1, 2, 1, 3]
    );
    assert!(BarcodeDesign::QrMock.widths().is_empty());
}

#[test]
fn test_design_names_round_trip() {
    for name in BarcodeDesign::OPTIONS {
        let design = BarcodeDesign::from_name(name).unwrap();
        assert_eq!(design.name(), name);
    }
    assert_eq!(BarcodeDesign::from_name("CODE93"), None);
}

#[test]
fn test_default_design_is_code128() {
    let barcode = BarcodeElement::new(0.0, 0.0);
    assert_eq!(barcode.design(), BarcodeDesign::Code128);
    assert_eq!(barcode.container_width(), 160.0);
    assert_eq!(barcode.container_height(), 80.0);
}

#[test]
fn test_bars_drawn_at_even_indices_only() {
    let barcode = BarcodeElement::new(0.0, 0.0);
    // 19 widths, bars only at indices 0, 2, ..., 18.
    assert_eq!(barcode.bars().count(), 10);

    let barcode = {
        let mut b = BarcodeElement::new(0.0, 0.0);
        b.set_design(BarcodeDesign::Minimal);
        b
    };
    assert_eq!(barcode.bars().count(), 4);
}

#[test]
fn test_gaps_advance_offset() {
    let barcode = BarcodeElement::new(0.0, 0.0);
    let bars: Vec<_> = barcode
        .bars()
        .map(|bar| match bar {
            BarcodeChild::Rect { x, width, .. } => (*x, *width),
            _ => unreachable!("bars are rectangles"),
        })
        .collect();

    // Each bar starts one drawn-plus-gap stride after the previous one:
    // widths 3,2,3 put the second bar 10 units (5 * 2.0) after the first.
    let stride = bars[1].0 - bars[0].0;
    assert_eq!(stride, 10.0);
    // Bar widths follow the table: 3 and 3 at indices 0 and 2.
    assert_eq!(bars[0].1, 6.0);
    assert_eq!(bars[1].1, 6.0);
}

#[test]
fn test_qrmock_draws_single_square() {
    let mut barcode = BarcodeElement::new(0.0, 0.0);
    barcode.set_design(BarcodeDesign::QrMock);

    let squares: Vec<_> = barcode.bars().collect();
    assert_eq!(squares.len(), 1);
    if let BarcodeChild::Rect { width, height, .. } = squares[0] {
        assert_eq!(width, height);
    }
}

#[test]
fn test_sample_label_always_present() {
    for name in BarcodeDesign::OPTIONS {
        let mut barcode = BarcodeElement::new(0.0, 0.0);
        barcode.set_design(BarcodeDesign::from_name(name).unwrap());
        let has_label = barcode
            .children()
            .iter()
            .any(|c| matches!(c, BarcodeChild::Label { text, .. } if text == SAMPLE_LABEL));
        assert!(has_label, "design {name} lost its sample label");
    }
}

#[test]
fn test_children_normalized_to_local_origin() {
    // A container narrower than the sample label forces the label to start
    // left of the container; normalization must shift everything back to 0.
    let mut barcode = BarcodeElement::new(0.0, 0.0);
    barcode.set_container_width(20.0);

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for child in barcode.children() {
        let (x1, y1, _, _) = child.bounds();
        min_x = min_x.min(x1);
        min_y = min_y.min(y1);
    }
    assert_eq!((min_x, min_y), (0.0, 0.0));
}

#[test]
fn test_regeneration_preserves_anchor() {
    let mut barcode = BarcodeElement::new(50.0, 50.0);
    let before = barcode.origin();

    barcode.set_design(BarcodeDesign::Ean13);
    assert_eq!(barcode.origin(), before);

    barcode.set_container_width(300.0);
    barcode.set_container_height(120.0);
    assert_eq!(barcode.origin(), before);

    let (x1, y1, _, _) = barcode.bounds();
    assert_eq!((x1, y1), (50.0, 50.0));
}

#[test]
fn test_container_size_clamped() {
    let mut barcode = BarcodeElement::new(0.0, 0.0);
    barcode.set_container_width(5.0);
    assert_eq!(barcode.container_width(), 20.0);
    barcode.set_container_height(5000.0);
    assert_eq!(barcode.container_height(), 1000.0);
}

#[test]
fn test_same_design_does_not_rebuild() {
    let mut barcode = BarcodeElement::new(0.0, 0.0);
    let before: Vec<_> = barcode.children().to_vec();
    barcode.set_design(BarcodeDesign::Code128);
    assert_eq!(barcode.children(), &before[..]);
}
