use crate::projection::ProjectionError;
use crate::projection::ScopePath;

#[test]
fn push_returns_new_path_without_mutating_original() {
    let root = ScopePath::root("Result");
    let nested = root.push("viewer").push("friends");

    assert_eq!(root.segments(), &["Result".to_string()]);
    assert_eq!(nested.len(), 3);
    assert_eq!(nested.current_name(), "Result_viewer_friends");
}

#[test]
fn pop_returns_shortened_path_and_segment() {
    let path = ScopePath::root("F").push("pets");
    let (popped, segment) = path.pop().unwrap();

    assert_eq!(segment, "pets");
    assert_eq!(popped, ScopePath::root("F"));
    assert_eq!(path.len(), 2);
}

#[test]
fn pop_of_empty_path_is_scope_imbalance() {
    let (empty, _) = ScopePath::root("F").pop().unwrap();

    assert!(empty.is_empty());
    assert_eq!(empty.pop(), Err(ProjectionError::ScopeImbalance));
}

#[test]
fn current_name_preserves_segment_case() {
    let path = ScopePath::root("UserCard").push("profilePicture").push("Dog");
    assert_eq!(path.current_name(), "UserCard_profilePicture_Dog");
}

#[test]
fn current_name_replaces_non_identifier_characters() {
    let path = ScopePath::root("Result").push("my-field").push("a.b");
    assert_eq!(path.current_name(), "Result_my_field_a_b");
}

#[test]
fn current_name_prefixes_leading_digit() {
    assert_eq!(ScopePath::root("1st").current_name(), "_1st");
}

#[test]
fn display_joins_segments_with_dots() {
    let path = ScopePath::root("Result").push("viewer").push("id");
    assert_eq!(path.to_string(), "Result.viewer.id");
    assert_eq!(ScopePath::new().to_string(), "");
}
