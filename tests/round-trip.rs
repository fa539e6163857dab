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
fn insert_then_get_every_key() {
    common::init();
    let mut map: TrieMap<u32, String> = TrieMap::new();
    for k in 0..2000u32 {
        map.insert(k, format!("value-{k}"));
    }
    assert_eq!(map.len(), 2000);
    for k in 0..2000u32 {
        assert_eq!(map.get(k), Some(&format!("value-{k}")));
    }
}

#[test]
fn insert_is_idempotent() {
    common::init();
    let mut map: TrieMap<u16, i32> = TrieMap::new();
    let (_, inserted_first) = map.insert(42, 1);
    let (_, inserted_second) = map.insert(42, 2);
    assert!(inserted_first);
    assert!(!inserted_second);
    assert_eq!(map.get(42), Some(&1));
    assert_eq!(map.len(), 1);
}

#[test]
fn remove_missing_key_is_a_no_op() {
    common::init();
    let mut map: TrieMap<u8, i32> = TrieMap::new();
    map.insert(1, 10);
    assert_eq!(map.remove(2), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn size_tracks_insert_and_remove() {
    common::init();
    let mut map: TrieMap<u32, ()> = TrieMap::new();
    assert!(map.is_empty());
    for k in 0..100u32 {
        map.insert(k, ());
    }
    assert_eq!(map.len(), 100);
    for k in 0..50u32 {
        map.remove(k);
    }
    assert_eq!(map.len(), 50);
    map.clear();
    assert!(map.is_empty());
}
