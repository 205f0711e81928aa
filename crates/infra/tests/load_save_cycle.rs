use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use dealership_core::CarId;
use dealership_infra::{FlatFileStore, InventoryStore, SkipReason};
use dealership_inventory::CarRegistry;

fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap()
}

/// Snapshot of everything that must survive a save/load cycle.
fn persisted_state(registry: &CarRegistry) -> Vec<(u32, String, u32, f64, Option<f64>)> {
    registry
        .cars()
        .map(|c| {
            (
                c.id_typed().get(),
                c.model().to_string(),
                c.register_year(),
                c.initial_price(),
                c.sale_price(),
            )
        })
        .collect()
}

#[test]
fn save_then_load_reproduces_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FlatFileStore::new(dir.path().join("CarsDB.csv"));

    let mut registry = CarRegistry::new();
    registry.add_car("Opel Astra", 2015, 25000.0, test_time()).unwrap();
    registry.add_car("Skoda Octavia", 2018, 30000.0, test_time()).unwrap();
    registry.add_car("Ford Focus", 2019, 9000.0, test_time()).unwrap();
    registry
        .sell_car(CarId::new(2), test_time() + Duration::seconds(40))
        .unwrap();

    store.save(&registry).unwrap();
    let mut reloaded = CarRegistry::new();
    let report = store.load_into(&mut reloaded).unwrap();

    assert_eq!(report.loaded, 3);
    assert!(report.skipped.is_empty());
    assert_eq!(reloaded.next_id(), Some(CarId::new(4)));

    let before = persisted_state(&registry);
    let after = persisted_state(&reloaded);
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!((b.0, &b.1, b.2, b.3), (a.0, &a.1, a.2, a.3));
        match (b.4, a.4) {
            (None, None) => {}
            // Sale prices are stored with two decimals.
            (Some(x), Some(y)) => assert!((x - y).abs() < 0.005, "{x} vs {y}"),
            other => panic!("sold flag changed: {other:?}"),
        }
    }
}

#[test]
fn ids_continue_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CarsDB.csv");
    std::fs::write(
        &path,
        "2;Fiat Punto;2008;3000.00;0;0.00\n9;Audi A4;2016;41000.00;1;40500.00\n",
    )
    .unwrap();

    let mut registry = CarRegistry::new();
    FlatFileStore::new(&path).load_into(&mut registry).unwrap();
    let added = registry.add_car("Toyota Yaris", 2021, 12000.0, test_time()).unwrap();

    assert_eq!(added.car_id, CarId::new(10));
    assert_eq!(registry.get(CarId::new(9)).unwrap().sale_price(), Some(40500.0));
}

#[test]
fn malformed_line_does_not_abort_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CarsDB.csv");
    std::fs::write(
        &path,
        "1;Opel Astra;2015;25000.00;0;0.00\n2;Missing Fields\n3;Ford Focus;2019;9000.00;1\n",
    )
    .unwrap();

    let mut registry = CarRegistry::new();
    let report = FlatFileStore::new(&path).load_into(&mut registry).unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_no, 2);
    assert!(matches!(report.skipped[0].reason, SkipReason::Malformed(_)));
    // Missing sale price on a sold record defaults to 0.
    assert_eq!(registry.get(CarId::new(3)).unwrap().sale_price(), Some(0.0));
    assert_eq!(registry.next_id(), Some(CarId::new(4)));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: a save/load cycle preserves every persisted field and `next_id`.
    #[test]
    fn round_trip_preserves_records(
        cars in prop::collection::vec(
            ("[A-Za-z0-9][A-Za-z0-9 .-]{0,29}", 1900u32..2030, 1u64..10_000_000, any::<bool>()),
            0..20,
        )
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = FlatFileStore::new(dir.path().join("CarsDB.csv"));

        let mut registry = CarRegistry::new();
        for (model, year, cents, sell) in &cars {
            let added = registry
                .add_car(model.clone(), *year, *cents as f64 / 100.0, test_time())
                .unwrap();
            if *sell {
                // Sold inside the grace period, so the sale price is the listed one.
                registry.sell_car(added.car_id, test_time()).unwrap();
            }
        }

        store.save(&registry).unwrap();
        let mut reloaded = CarRegistry::new();
        let report = store.load_into(&mut reloaded).unwrap();

        prop_assert_eq!(report.loaded, cars.len());
        prop_assert_eq!(reloaded.next_id(), registry.next_id());
        prop_assert_eq!(persisted_state(&reloaded), persisted_state(&registry));
    }
}
