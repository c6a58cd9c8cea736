// Host-side tests for catalog loading and validation.

use floatmap_core::{Catalog, CatalogError, Float, Position};

#[test]
fn builtin_catalog_loads() {
    let c = Catalog::builtin().expect("embedded catalog parses");
    assert!(c.len() >= 2);
    assert!(c.iter().any(|f| !f.has_track()), "needs a single-position float");

    let f = c.get(2902387).expect("reference float present");
    assert_eq!(
        f.positions(),
        &[
            Position::new(10.5, 68.2).unwrap(),
            Position::new(10.8, 68.5).unwrap()
        ]
    );
    assert_eq!(f.latest(), Position::new(10.8, 68.5).unwrap());
}

#[test]
fn builtin_ids_are_unique() {
    let c = Catalog::builtin().unwrap();
    let mut ids: Vec<_> = c.iter().map(|f| f.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), c.len());
}

#[test]
fn empty_track_is_rejected() {
    assert!(matches!(
        Float::new(5, "x", Vec::new()),
        Err(CatalogError::EmptyTrack(5))
    ));
    let json = r#"[{"id": 5, "name": "x", "positions": []}]"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::EmptyTrack(5))
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        {"id": 1, "name": "a", "positions": [[0.0, 0.0]]},
        {"id": 1, "name": "b", "positions": [[1.0, 1.0]]}
    ]"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::DuplicateId(1))
    ));
}

#[test]
fn out_of_range_coordinates_fail_to_parse() {
    let json = r#"[{"id": 1, "name": "a", "positions": [[95.0, 0.0]]}]"#;
    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn bounds_cover_every_position() {
    let c = Catalog::builtin().unwrap();
    let b = c.bounds().unwrap();
    for p in c.iter().flat_map(|f| f.positions()) {
        assert!(p.latitude() >= b.south && p.latitude() <= b.north);
        assert!(p.longitude() >= b.west && p.longitude() <= b.east);
    }
    assert!(Catalog::default().bounds().is_none());
}

#[test]
fn catalog_keeps_insertion_order() {
    let c = Catalog::builtin().unwrap();
    let ids: Vec<_> = c.iter().map(|f| f.id()).collect();
    assert_eq!(ids.first(), Some(&2902387));
}

#[test]
fn lookup_by_id_across_a_large_catalog() {
    let floats = (0..2_000u32)
        .map(|i| {
            let lat = (i % 180) as f64 - 89.0;
            Float::new(10_000 + i, format!("F-{i}"), vec![Position::new(lat, 0.0).unwrap()])
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let c = Catalog::new(floats.clone()).unwrap();
    assert_eq!(c.len(), 2_000);
    assert_eq!(c.get(11_999).unwrap().name(), "F-1999");
    assert_eq!(c.get(10_000).unwrap().id(), 10_000);
    assert!(c.get(9_999).is_none());

    let mut dup = floats;
    dup.push(Float::new(10_500, "again", vec![Position::ORIGIN]).unwrap());
    assert!(matches!(Catalog::new(dup), Err(CatalogError::DuplicateId(10_500))));
}
