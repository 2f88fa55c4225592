//! Unit tests for the generated tables and `WordSet`.
use super::*;
use alloc::vec::Vec;

//==================================================================================GENERATED_TABLES
#[test]
/// Every generated table must be strictly sorted for binary search.
fn test_tables_are_sorted() {
    for table in [COMMON_INITIALISMS, GO_RESERVED, RUST_RESERVED] {
        assert!(table.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
/// Spot-check the shipped initialisms.
fn test_common_initialisms() {
    for word in ["API", "HTTP", "HTTPS", "ID", "JSON", "URL", "UTF8", "XSS"] {
        assert!(COMMON_INITIALISMS.contains(&word), "{word} missing");
    }
    assert!(!COMMON_INITIALISMS.contains(&"UTF"));
}

#[test]
/// Go keywords, predeclared types and imported packages are reserved.
fn test_go_reserved() {
    for word in ["map", "func", "type", "string", "int32", "fmt", "http", "url"] {
        assert!(GO_RESERVED.contains(&word), "{word} missing");
    }
    assert!(!GO_RESERVED.contains(&"Map"));
}

#[test]
/// Rust keywords are case sensitive (`self` and `Self` are distinct entries).
fn test_rust_reserved() {
    for word in ["fn", "self", "Self", "match", "String", "u64", "union"] {
        assert!(RUST_RESERVED.contains(&word), "{word} missing");
    }
    assert!(!RUST_RESERVED.iter().any(|word| word.contains('_')));
    assert_eq!(reserved_table(TargetLanguage::Rust), RUST_RESERVED);
    assert_eq!(reserved_table(TargetLanguage::Go), GO_RESERVED);
}

//==================================================================================WORD_SET
#[test]
/// Built-in sets answer lookups without allocating.
fn test_builtin_contains() {
    let set = WordSet::initialisms();
    assert!(set.contains("HTTP"));
    assert!(!set.contains("http"));
    assert_eq!(set.len(), COMMON_INITIALISMS.len());
}

#[test]
/// Inserting into a built-in set copies it into a custom one.
fn test_insert_promotes_builtin() {
    let mut set = WordSet::reserved(TargetLanguage::Go);
    assert!(!set.insert("map"));
    assert!(matches!(set, WordSet::Builtin(_)));

    assert!(set.insert("context"));
    assert!(matches!(set, WordSet::Custom(_)));
    assert!(set.contains("context"));
    assert!(set.contains("map"));
    assert_eq!(set.len(), GO_RESERVED.len() + 1);
}

#[test]
/// Iteration yields words in byte order for both representations.
fn test_iter_order() {
    let set: WordSet = ["b", "a", "c"].into_iter().collect();
    assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);

    let builtin = WordSet::Builtin(&["x", "y"]);
    assert_eq!(builtin.iter().collect::<Vec<_>>(), ["x", "y"]);
}

#[test]
/// `Extend` skips duplicates.
fn test_extend() {
    let mut set = WordSet::default();
    assert!(set.is_empty());
    set.extend(["GRPC", "GRPC", "CSV"]);
    assert_eq!(set.len(), 2);
}
