use primer::features;

#[test]
fn feature_slices_are_always_enabled() {
    assert!(features::is_enabled("digits"));
    assert!(features::is_enabled("statistics"));
    assert!(!features::is_enabled("licensing"));
}

#[test]
fn facade_reaches_every_slice() {
    let rows = features::digits::render("7").unwrap();
    assert_eq!(rows.len(), primer::domain::glyphs::GLYPH_ROWS);

    let stats = features::statistics::analyze("1 2 3").unwrap().unwrap();
    assert_eq!(stats.count(), 3);
}
