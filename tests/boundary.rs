use trie16::{TrieMap, TrieMapError};

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
fn empty_map_begin_equals_end() {
    common::init();
    let map: TrieMap<u32, ()> = TrieMap::new();
    assert_eq!(map.begin(), map.end());
    assert_eq!(map.iter().next(), None);
}

#[test]
fn lower_and_upper_bound_at_extremes() {
    common::init();
    let mut map: TrieMap<u8, &'static str> = TrieMap::new();
    map.insert(10, "ten");
    map.insert(20, "twenty");
    map.insert(30, "thirty");

    assert_eq!(map.lower_bound(5).key(), Some(10));
    assert_eq!(map.lower_bound(10).key(), Some(10));
    assert_eq!(map.lower_bound(15).key(), Some(20));
    assert_eq!(map.lower_bound(30).key(), Some(30));
    assert_eq!(map.lower_bound(31), map.end());

    assert_eq!(map.upper_bound(10).key(), Some(20));
    assert_eq!(map.upper_bound(25).key(), Some(30));
    assert_eq!(map.upper_bound(30), map.end());
}

#[test]
fn advance_wraps_once_past_the_last_element() {
    common::init();
    let mut map: TrieMap<u8, ()> = TrieMap::new();
    map.insert(1, ());
    map.insert(2, ());

    let last = map.find_cursor(2).unwrap();
    let past = map.advance(last).expect("single wrap is valid");
    assert_eq!(past, map.end());

    let err = map.advance(past).expect_err("a second wrap must be rejected");
    assert_eq!(err, TrieMapError::InvariantViolated);
}

#[test]
fn retreat_wraps_once_before_the_first_element() {
    common::init();
    let mut map: TrieMap<u8, ()> = TrieMap::new();
    map.insert(1, ());
    map.insert(2, ());

    let first = map.find_cursor(1).unwrap();
    let before = map.retreat(first).expect("single wrap is valid");
    assert_eq!(before, trie16::Cursor::before_begin());

    let err = map.retreat(before).expect_err("a second wrap must be rejected");
    assert_eq!(err, TrieMapError::InvariantViolated);
}

#[test]
fn remove_at_cursor_returns_successor() {
    common::init();
    let mut map: TrieMap<u16, i32> = TrieMap::new();
    map.insert(1, 10);
    map.insert(2, 20);
    map.insert(3, 30);

    let cursor = map.find_cursor(2).unwrap();
    let (next, removed) = map.remove_at(cursor);
    assert_eq!(removed, Some(20));
    assert_eq!(next.key(), Some(3));
    assert_eq!(map.len(), 2);
}

#[test]
fn remove_range_deletes_half_open_interval() {
    common::init();
    let mut map: TrieMap<u16, i32> = TrieMap::new();
    for k in 0..10u16 {
        map.insert(k, k as i32);
    }
    let first = map.find_cursor(2).unwrap();
    let last = map.find_cursor(7).unwrap();
    let removed = map.remove_range(first, last);
    assert_eq!(removed, 5);
    let remaining: Vec<u16> = map.iter().map(|(k, _)| k).collect();
    assert_eq!(remaining, vec![0, 1, 7, 8, 9]);
}
