use crate::alias::AliasSet;
use pretty_assertions::assert_eq;

#[test]
fn compile_splits_accepted_and_rejected() {
    // Arrange
    let aliases = ["https://test4.local:8080", "test[1-3]", "test[0-9.local"];

    // Act
    let (set, rejected) = AliasSet::compile(aliases);

    // Assert
    assert_eq!(set.len(), 2);
    assert_eq!(rejected, vec!["test[0-9.local".to_string()]);

    let patterns: Vec<&str> = set.iter().map(|a| a.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["test4\\.local", "test[1-3]"]);
}

#[test]
fn host_matching_is_anchored() {
    // Arrange
    let (set, _) = AliasSet::compile(["test4.local", "test[1-3]"]);

    // Act / Assert
    assert!(set.matches("test4.local"));
    assert!(set.matches("test2"));
    assert!(!set.matches("test4xlocal"));
    assert!(!set.matches("evil-test4.local"));
    assert!(!set.matches("test4.local.evil"));
    assert!(!set.matches("test22"));
}

#[test]
fn host_matching_ignores_port_and_case() {
    let (set, _) = AliasSet::compile(["https://test4.local:8080", "http://[::1]"]);

    assert!(set.matches("TEST4.local:443"));
    assert!(set.matches(" test4.local "));
    assert!(set.matches("[::1]:9980"));
    assert_eq!(
        set.find("test4.local:1").map(|a| a.alias.as_str()),
        Some("https://test4.local:8080")
    );
}

#[test]
fn alternation_is_anchored_as_a_whole() {
    let (set, _) = AliasSet::compile(["foo|bar"]);

    assert!(set.matches("foo"));
    assert!(set.matches("bar"));
    assert!(!set.matches("foobar"));
    assert!(!set.matches("xbar"));
}

#[test]
fn empty_set_matches_nothing() {
    let (set, rejected) = AliasSet::compile(Vec::<String>::new());

    assert!(set.is_empty());
    assert!(rejected.is_empty());
    assert!(!set.matches("anything"));
}
