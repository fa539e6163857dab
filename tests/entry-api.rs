use trie16::TrieMap;

mod common {
    use std::io::Write;

    pub fn init() {
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}

#[test]
fn or_insert_with_only_runs_on_vacant() {
    common::init();
    let mut map: TrieMap<u32, i32> = TrieMap::new();
    let mut calls = 0;
    *map.entry(1).or_insert_with(|| {
        calls += 1;
        100
    }) += 1;
    assert_eq!(calls, 1);
    *map.entry(1).or_insert_with(|| {
        calls += 1;
        999
    }) += 1;
    assert_eq!(calls, 1, "closure must not run for an occupied entry");
    assert_eq!(map.get(1), Some(&102));
}

#[test]
fn occupied_entry_remove() {
    common::init();
    let mut map: TrieMap<u16, &'static str> = TrieMap::new();
    map.insert(5, "five");
    let removed = match map.entry(5) {
        trie16::Entry::Occupied(occ) => occ.remove(),
        trie16::Entry::Vacant(_) => panic!("expected occupied"),
    };
    assert_eq!(removed, "five");
    assert!(!map.contains_key(5));
}

#[test]
fn get_or_insert_default_uses_default_value() {
    common::init();
    let mut map: TrieMap<u8, Vec<i32>> = TrieMap::new();
    map.get_or_insert_default(1).push(7);
    map.get_or_insert_default(1).push(8);
    assert_eq!(map.get(1), Some(&vec![7, 8]));
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_panics_on_missing_key() {
    common::init();
    let map: TrieMap<u8, i32> = TrieMap::new();
    let _ = map[3];
}

#[test]
fn clone_copies_every_key() {
    common::init();
    let mut map: TrieMap<u32, String> = TrieMap::new();
    for k in 0..20u32 {
        map.insert(k, k.to_string());
    }
    let cloned = map.clone();
    assert_eq!(cloned.len(), map.len());
    for k in 0..20u32 {
        assert_eq!(cloned.get(k), Some(&k.to_string()));
    }
}
