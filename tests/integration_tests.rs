use assocbuf::{AssocBuf, DEFAULT_CAPACITY};

#[test]
fn test_buffer_initialization() {
    let map = AssocBuf::new(4).unwrap();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.capacity(), 4);
}

#[test]
fn test_default_capacity() {
    let map = AssocBuf::with_default_capacity().unwrap();

    assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    assert!(map.is_empty());
}

#[test]
fn test_insert_and_get() {
    let mut map = AssocBuf::new(4).unwrap();

    map.insert("name", "Alice").unwrap();
    map.insert("age", "30").unwrap();

    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
    assert_eq!(map.get("name"), Some("Alice"));
    assert_eq!(map.get("age"), Some("30"));
}

#[test]
fn test_get_missing_key() {
    let mut map = AssocBuf::new(4).unwrap();
    assert_eq!(map.get("anything"), None);

    map.insert("key", "value").unwrap();
    assert_eq!(map.get("Key"), None);
    assert_eq!(map.get("key "), None);
    assert_eq!(map.get(""), None);
    assert!(!map.contains_key("missing"));
    assert!(map.contains_key("key"));
}

#[test]
fn test_first_match_wins() {
    // Scenario: duplicates are kept, lookup sees the earliest
    let mut map = AssocBuf::new(4).unwrap();

    map.insert("x", "1").unwrap();
    map.insert("x", "2").unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x"), Some("1"));
}

#[test]
fn test_first_match_wins_across_growth() {
    let mut map = AssocBuf::new(1).unwrap();

    map.insert("dup", "first").unwrap();
    map.insert("other", "o").unwrap();
    map.insert("dup", "second").unwrap();
    map.insert("dup", "third").unwrap();

    assert_eq!(map.capacity(), 4);
    assert_eq!(map.get("dup"), Some("first"));
    assert_eq!(map.get("other"), Some("o"));
}

#[test]
fn test_key_compared_by_content() {
    let stored = String::from("shared");
    let probe = String::from("shared");
    assert_ne!(stored.as_ptr(), probe.as_ptr());

    let mut map = AssocBuf::new(2).unwrap();
    map.insert(&stored, "v").unwrap();

    assert_eq!(map.get(&probe), Some("v"));
}

#[test]
fn test_empty_key_and_value() {
    let mut map = AssocBuf::new(2).unwrap();

    map.insert("", "empty key").unwrap();
    map.insert("empty value", "").unwrap();

    assert_eq!(map.get(""), Some("empty key"));
    assert_eq!(map.get("empty value"), Some(""));
}

#[test]
fn test_unicode_keys() {
    let mut map = AssocBuf::new(2).unwrap();

    map.insert("ключ", "значение").unwrap();
    map.insert("鍵", "値").unwrap();

    assert_eq!(map.get("ключ"), Some("значение"));
    assert_eq!(map.get("鍵"), Some("値"));
}

#[test]
fn test_values_outlive_map() {
    let key = String::from("k");
    let value = String::from("v");

    let found = {
        let mut map = AssocBuf::new(1).unwrap();
        map.insert(&key, &value).unwrap();
        map.get("k")
    };

    assert_eq!(found, Some("v"));
    // The caller's text is untouched by dropping the map
    assert_eq!(value, "v");
}

#[test]
fn test_returned_value_is_callers_text() {
    let value = String::from("payload");
    let mut map = AssocBuf::new(1).unwrap();
    map.insert("k", &value).unwrap();

    let found = map.get("k").unwrap();
    assert_eq!(found.as_ptr(), value.as_ptr());
}

#[test]
fn test_scenario_a() {
    let mut map = AssocBuf::new(2).unwrap();

    map.insert("a", "1").unwrap();
    map.insert("b", "2").unwrap();
    map.insert("c", "3").unwrap();

    assert_eq!(map.capacity(), 4);
    assert_eq!(map.get("b"), Some("2"));
    assert_eq!(map.get("z"), None);
}

#[test]
fn test_scenario_c_full_without_growth() {
    let mut map = AssocBuf::new(1).unwrap();

    map.insert("only", "one").unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.capacity(), 1);
    assert_eq!(map.get("only"), Some("one"));
}
