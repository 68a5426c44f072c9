//! Collection checks through the public API.

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use guardclause::Violation;

#[test]
fn vectors_arrays_slices_and_options() {
    assert_eq!(vec![1_u8].must_not_be_null_or_empty("v"), Ok(vec![1]));
    assert!([1_u8, 2].must_not_be_null_or_empty("v").is_ok());
    let slice: &[u8] = &[1, 2];
    assert!(slice.must_not_be_null_or_empty("v").is_ok());
    assert!(Some(vec![1_u8]).must_not_be_null_or_empty("v").is_ok());

    expect_violation(Vec::<u8>::new().must_not_be_null_or_empty("v"), ViolationKind::EmptyCollection, "v");
    expect_violation(None::<Vec<u8>>.must_not_be_null_or_empty("v"), ViolationKind::Null, "v");
}

#[test]
fn empty_collection_message() {
    let error = expect_kind(
        Vec::<u8>::new().must_not_be_null_or_empty(Param::unnamed()),
        ViolationKind::EmptyCollection,
    );
    assert_eq!(
        error.message(),
        "The collection must not be an empty collection, but it actually is."
    );
}

#[test]
fn duplicate_reports_second_occurrence_and_content() {
    let ids = vec![1_i32, 2, 2];
    let error = expect_violation((&ids).must_have_unique_items("ids"), ViolationKind::DuplicateItem, "ids");
    assert_eq!(
        error.violation(),
        &Violation::DuplicateItem {
            item: "2".into(),
            index: 2
        }
    );
    assert_eq!(
        error.message(),
        "ids must be a collection with unique items, but 2 at index 2 is a duplicate.\nContent of the collection:\n1,\n2,\n2\n"
    );
    assert!(vec![1_i32, 2, 3].must_have_unique_items("ids").is_ok());
}

#[test]
fn uniqueness_of_strings() {
    assert!(["a", "b", "A"].must_have_unique_items("names").is_ok());
    let error = expect_kind(
        vec!["a".to_string(), "b".to_string(), "a".to_string()].must_have_unique_items("names"),
        ViolationKind::DuplicateItem,
    );
    assert_eq!(
        error.violation(),
        &Violation::DuplicateItem {
            item: "\"a\"".into(),
            index: 2
        }
    );
}

#[test]
fn absent_collection_is_never_unique() {
    expect_kind(None::<Vec<u8>>.must_have_unique_items("v"), ViolationKind::Null);
}

#[test]
fn empty_collection_is_never_unique() {
    let error = expect_kind(Vec::<u32>::new().must_have_unique_items("ids"), ViolationKind::EmptyCollection);
    assert_eq!(error.parameter_name(), Some("ids"));
    let none: [u32; 0] = [];
    expect_kind(none.must_have_unique_items("ids"), ViolationKind::EmptyCollection);
}

#[test]
fn null_items() {
    assert!(vec![Some(1_u8), Some(2)].must_not_contain_null("v").is_ok());
    let error = expect_kind(
        vec![Some(1_u8), None, None].must_not_contain_null("v"),
        ViolationKind::NullItemInCollection,
    );
    assert_eq!(error.violation(), &Violation::NullItemInCollection { index: 1 });
    assert_eq!(
        error.message(),
        "v must not contain null, but it actually contains null at index 1.\nContent of the collection:\nSome(1),\nNone,\nNone\n"
    );
}

#[test]
fn contains_item() {
    assert!(vec![1_u8, 2].must_contain(&2, "v").is_ok());
    let error = expect_kind(vec![1_u8, 2].must_contain(&3, "v"), ViolationKind::ItemMissing);
    assert_eq!(
        error.message(),
        "v must contain 3, but it actually does not.\nContent of the collection:\n1,\n2\n"
    );
    let error = expect_kind(vec![1_u8, 2].must_not_contain(&1, "v"), ViolationKind::ItemPresent);
    assert_eq!(error.violation(), &Violation::ItemPresent { item: "1".into() });
}

#[test]
fn counts() {
    let items = [1_u8, 2, 3];
    assert!(items.must_have_count(3, "c").is_ok());
    assert!(items.must_have_min_count(3, "c").is_ok());
    assert!(items.must_have_max_count(3, "c").is_ok());

    let error = expect_kind(items.must_have_count(2, "c"), ViolationKind::InvalidCollectionCount);
    assert_eq!(error.message(), "c must have count 2, but it actually has count 3.");
    assert_eq!(
        error.violation(),
        &Violation::InvalidCollectionCount {
            actual: 3,
            expected: 2
        }
    );

    let error = expect_kind(items.must_have_min_count(4, "c"), ViolationKind::InvalidCollectionCount);
    assert_eq!(
        error.message(),
        "c must have at least count 4, but it actually has count 3."
    );
    let error = expect_kind(items.must_have_max_count(1, "c"), ViolationKind::InvalidCollectionCount);
    assert_eq!(
        error.message(),
        "c must have at most count 1, but it actually has count 3."
    );
}

#[test]
fn collection_is_handed_back_unchanged() {
    let names = vec!["x".to_string(), "y".to_string()];
    let names = names
        .must_not_be_null_or_empty("names")
        .and_then(|names| names.must_have_unique_items("names"))
        .and_then(|names| names.must_have_max_count(5, "names"))
        .unwrap();
    assert_eq!(names, ["x", "y"]);
}
