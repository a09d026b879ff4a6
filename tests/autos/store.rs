//! Store behavior over a seeded collection.

use autos_service::{Auto, AutoDraft, AutoFilter, AutoPatch, AutoStore, StoreError};

use crate::support::{corolla, seed, seeded_store};

fn ids(autos: &[Auto]) -> Vec<u64> {
    autos.iter().map(|a| a.id).collect()
}

// ============================================================================
// List / filter
// ============================================================================

#[test]
fn no_filter_returns_whole_collection() {
    let store = seeded_store();
    assert_eq!(store.list(&AutoFilter::default()).unwrap(), seed());
}

#[test]
fn brand_filter_is_case_insensitive() {
    let store = seeded_store();
    let filter = AutoFilter {
        marca: Some("toyota".into()),
        ..Default::default()
    };
    assert_eq!(ids(&store.list(&filter).unwrap()), vec![1, 3, 7]);
}

#[test]
fn color_and_year_combine() {
    let store = seeded_store();
    let filter = AutoFilter {
        color: Some("red".into()),
        anio: Some(2020),
        ..Default::default()
    };
    assert_eq!(ids(&store.list(&filter).unwrap()), vec![1, 5]);
}

#[test]
fn price_range_is_inclusive() {
    let store = seeded_store();
    let filter = AutoFilter {
        precio_min: Some(14000.0),
        precio_max: Some(20000.0),
        ..Default::default()
    };
    assert_eq!(ids(&store.list(&filter).unwrap()), vec![1, 2, 3, 7]);
}

#[test]
fn unmatched_filter_returns_empty() {
    let store = seeded_store();
    let filter = AutoFilter {
        modelo: Some("Mustang".into()),
        ..Default::default()
    };
    assert!(store.list(&filter).unwrap().is_empty());
}

/// Every combination of a handful of constraint values: the result holds
/// exactly the records that satisfy all supplied constraints.
#[test]
fn filter_results_are_sound_and_complete() {
    let store = seeded_store();
    let all = seed();

    let marcas = [None, Some("toyota"), Some("FORD")];
    let colores = [None, Some("red")];
    let anios = [None, Some(2019), Some(2020)];
    let mins = [None, Some(13000.0)];
    let maxs = [None, Some(20000.0)];

    for marca in marcas {
        for color in colores {
            for anio in anios {
                for precio_min in mins {
                    for precio_max in maxs {
                        let filter = AutoFilter {
                            marca: marca.map(String::from),
                            modelo: None,
                            color: color.map(String::from),
                            anio,
                            precio_min,
                            precio_max,
                        };
                        let expected: Vec<u64> = all
                            .iter()
                            .filter(|a| {
                                marca.map_or(true, |m| a.marca.eq_ignore_ascii_case(m))
                                    && color.map_or(true, |c| a.color.eq_ignore_ascii_case(c))
                                    && anio.map_or(true, |y| a.anio == y)
                                    && precio_min.map_or(true, |p| a.precio >= p)
                                    && precio_max.map_or(true, |p| a.precio <= p)
                            })
                            .map(|a| a.id)
                            .collect();

                        let got = store.list(&filter).unwrap();
                        assert_eq!(ids(&got), expected, "filter {:?}", filter);
                    }
                }
            }
        }
    }
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn created_ids_exceed_all_prior_ids_and_increase() {
    let store = seeded_store();
    let mut last = seed().iter().map(|a| a.id).max().unwrap();

    for _ in 0..5 {
        let draft = AutoDraft::new("Kia", "Rio", 2022, 13000.0, "Gray").unwrap();
        let created = store.create(draft).unwrap();
        assert!(created.id > last);
        last = created.id;
    }
    assert_eq!(store.len().unwrap(), seed().len() + 5);
}

#[test]
fn created_record_is_listed_last() {
    let store = seeded_store();
    let draft = AutoDraft::new("Kia", "Rio", 2022, 13000.0, "Gray").unwrap();
    let created = store.create(draft).unwrap();

    let all = store.list(&AutoFilter::default()).unwrap();
    assert_eq!(all.last(), Some(&created));
    assert_eq!(store.get(created.id).unwrap(), created);
}

// ============================================================================
// Update / delete
// ============================================================================

#[test]
fn partial_update_preserves_other_fields() {
    let store = seeded_store();
    let patch = AutoPatch {
        precio: Some(19500.0),
        color: Some("Silver".into()),
        ..Default::default()
    };

    let updated = store.update(1, patch).unwrap();
    let mut expected = corolla();
    expected.precio = 19500.0;
    expected.color = "Silver".into();
    assert_eq!(updated, expected);
}

#[test]
fn missing_id_operations_leave_collection_unchanged() {
    let store = seeded_store();

    assert_eq!(store.get(6), Err(StoreError::NotFound(6)));
    assert_eq!(
        store.update(6, AutoPatch { anio: Some(1999), ..Default::default() }),
        Err(StoreError::NotFound(6))
    );
    assert_eq!(store.delete(6), Err(StoreError::NotFound(6)));
    assert_eq!(store.list(&AutoFilter::default()).unwrap(), seed());
}

#[test]
fn deleted_record_is_gone() {
    let store = seeded_store();
    assert_eq!(store.delete(1).unwrap(), corolla());
    assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
    assert_eq!(store.len().unwrap(), seed().len() - 1);
}

#[test]
fn deleting_the_max_id_lets_it_be_reassigned() {
    let store = seeded_store();
    store.delete(7).unwrap();
    let draft = AutoDraft::new("Kia", "Rio", 2022, 13000.0, "Gray").unwrap();
    assert_eq!(store.create(draft).unwrap().id, 6);
}
