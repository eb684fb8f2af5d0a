use crate::operation::BooleanCondition;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use crate::operation::TypeCondition;
use crate::types::TypeAnnotation;

fn field(name: &str) -> FieldSelection {
    FieldSelection::builder(name)
        .set_type_annotation(TypeAnnotation::named("String"))
        .build()
        .unwrap()
}

#[test]
fn selections_keep_insertion_order() {
    let ss = SelectionSet::builder(["User"])
        .add_selection(field("b"))
        .add_selection(field("a"))
        .build()
        .unwrap();

    let names: Vec<_> = ss.selections().iter()
        .filter_map(Selection::as_field)
        .map(|field| field.name())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(ss.possible_types(), &["User".to_string()]);
}

#[test]
fn duplicate_possible_type_is_an_error() {
    let result = SelectionSet::builder(["Dog", "Cat", "Dog"]).build();
    assert_eq!(result, Err(SelectionSetBuildError::DuplicatePossibleType {
        type_name: "Dog".to_string(),
    }));
}

#[test]
fn concat_appends_selections_and_keeps_own_possible_types() {
    let first = SelectionSet::builder(["Address"])
        .add_selection(field("street"))
        .build()
        .unwrap();
    let second = SelectionSet::builder(["Address", "PoBox"])
        .add_selection(field("city"))
        .build()
        .unwrap();

    let combined = first.concat(&second);
    assert_eq!(combined.possible_types(), &["Address".to_string()]);
    assert_eq!(combined.selections().len(), 2);
    assert_eq!(combined.selections()[1].as_field(), Some(&field("city")));
}

#[test]
fn boolean_conditions_record_inversion() {
    let ss = SelectionSet::builder(["User"]).build().unwrap();
    let include = BooleanCondition::include("withBio", ss.clone());
    let skip = BooleanCondition::skip("hideBio", ss);

    assert!(!include.inverted());
    assert_eq!(include.variable_name(), "withBio");
    assert!(skip.inverted());
    assert_eq!(skip.variable_name(), "hideBio");
}

#[test]
fn selection_deserializes_with_kind_tag() {
    let selection: Selection = serde_json::from_str(r#"{
        "kind": "type_condition",
        "type_name": "Dog",
        "selection_set": {
            "possible_types": ["Dog"],
            "selections": [
                {
                    "kind": "boolean_condition",
                    "variable_name": "withBreed",
                    "selection_set": { "possible_types": ["Dog"] }
                }
            ]
        }
    }"#).unwrap();

    let Selection::TypeCondition(type_condition) = &selection else {
        panic!("Expected a type condition, found: {selection:?}");
    };
    assert_eq!(type_condition.type_name(), "Dog");
    assert!(matches!(
        type_condition.selection_set().selections(),
        [Selection::BooleanCondition(condition)] if !condition.inverted(),
    ));
    assert_eq!(
        TypeCondition::new("Dog", type_condition.selection_set().clone()),
        *type_condition,
    );
}
