use orbit_quiz_core::constants::{default_reward_pool, GALLERY_KEY};
use orbit_quiz_core::{
    get_json, CollectibleCount, CollectibleStore, Gallery, GalleryRecord, KeyValueStore,
    MemoryStore, PersistError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

fn pool() -> Vec<String> {
    vec!["a.png".into(), "b.png".into(), "c.png".into()]
}

#[test]
fn empty_store_has_empty_summary() {
    let gallery = Gallery::new(MemoryStore::new(), pool());
    assert!(gallery.summary().is_empty());
    assert_eq!(gallery.read(), GalleryRecord::default());
}

#[test]
fn awards_accumulate_with_latest_first() {
    let mut gallery = Gallery::new(MemoryStore::new(), pool());
    let mut rng = StdRng::seed_from_u64(9);
    let mut won = Vec::new();
    for i in 0..30 {
        won.push(gallery.award_random(&mut rng, i as f64).unwrap());
    }
    let summary = gallery.summary();
    let total: u32 = summary.iter().map(|c| c.count).sum();
    assert_eq!(total, 30);
    assert_eq!(summary[0].item, *won.last().unwrap());
    assert!(summary.iter().all(|c| pool().contains(&c.item)));

    let record = gallery.read();
    assert_eq!(record.last_won_at, Some(29.0));
    assert_eq!(record.order.len(), record.counts.len());
}

#[test]
fn empty_pool_awards_nothing() {
    let mut gallery = Gallery::new(MemoryStore::new(), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(gallery.award_random(&mut rng, 0.0), None);
    assert!(gallery.store().is_empty());
}

#[test]
fn draws_cover_the_whole_pool() {
    let mut gallery = Gallery::new(MemoryStore::new(), default_reward_pool());
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..500 {
        gallery.award_random(&mut rng, 0.0);
    }
    assert_eq!(gallery.summary().len(), 10);
}

#[test]
fn corrupt_payload_reads_as_empty() {
    let mut store = MemoryStore::new();
    store.set(GALLERY_KEY, "{not json");
    let err = get_json::<GalleryRecord, _>(&store, GALLERY_KEY).unwrap_err();
    assert!(matches!(err, PersistError::Decode { .. }));

    let mut gallery = Gallery::new(store, pool());
    assert!(gallery.summary().is_empty());
    let mut rng = StdRng::seed_from_u64(3);
    let item = gallery.award_random(&mut rng, 5.0).unwrap();
    assert_eq!(gallery.summary()[0].item, item);
}

#[test]
fn normalize_drops_unknown_items_and_repairs_order() {
    let mut counts = BTreeMap::new();
    counts.insert("a.png".to_string(), 2);
    counts.insert("b.png".to_string(), 0);
    counts.insert("zzz.png".to_string(), 4);
    counts.insert("c.png".to_string(), 1);
    let record = GalleryRecord {
        counts,
        order: vec![
            "c.png".into(),
            "zzz.png".into(),
            "c.png".into(),
            "b.png".into(),
        ],
        last_won_at: None,
    }
    .normalize(&pool());
    assert_eq!(record.counts.len(), 2);
    assert_eq!(record.order, vec!["c.png".to_string(), "a.png".to_string()]);
}

#[test]
fn stored_record_uses_camel_case_keys() {
    let mut gallery = Gallery::new(MemoryStore::new(), pool());
    let mut rng = StdRng::seed_from_u64(4);
    gallery.award_random(&mut rng, 1234.0);
    let raw = gallery.store().get(GALLERY_KEY).unwrap();
    assert!(raw.contains("\"lastWonAt\":1234"));
    assert!(raw.contains("\"counts\""));
    assert!(raw.contains("\"order\""));
}

#[test]
fn mistyped_fields_keep_the_saved_counts() {
    let pool = default_reward_pool();
    let mut store = MemoryStore::new();
    store.set(
        GALLERY_KEY,
        &format!(
            r#"{{"counts":{{"{first}":4,"{second}":"x"}},"order":["{first}",7],"lastWonAt":"2025-03-01T10:00:00.000Z"}}"#,
            first = pool[0],
            second = pool[1],
        ),
    );
    let mut gallery = Gallery::new(store, pool.clone());
    let record = gallery.read();
    assert_eq!(record.last_won_at, None);
    assert_eq!(record.order, vec![pool[0].clone()]);
    assert_eq!(
        gallery.summary(),
        vec![CollectibleCount {
            item: pool[0].clone(),
            count: 4
        }]
    );

    let mut rng = StdRng::seed_from_u64(11);
    gallery.award_random(&mut rng, 10.0).unwrap();
    let total: u32 = gallery.summary().iter().map(|c| c.count).sum();
    assert_eq!(total, 5);
    assert_eq!(gallery.read().last_won_at, Some(10.0));
}
