use crate::operation::Fragment;
use crate::operation::FragmentBuildError;
use crate::operation::SelectionSet;

fn pet_selection_set() -> SelectionSet {
    SelectionSet::builder(["Dog", "Cat"]).build().unwrap()
}

#[test]
fn builds_fragment() {
    let fragment = Fragment::builder()
        .set_name("PetInfo")
        .set_type_condition("Pet")
        .set_selection_set(pet_selection_set())
        .build()
        .unwrap();

    assert_eq!(fragment.name(), "PetInfo");
    assert_eq!(fragment.type_condition(), "Pet");
    assert_eq!(fragment.root_scope_segment(), "PetInfo");
    assert_eq!(fragment.unit_name(), "fragment PetInfo");
    assert_eq!(fragment.selection_set(), &pet_selection_set());
}

#[test]
fn missing_name_is_an_error() {
    let result = Fragment::builder()
        .set_type_condition("Pet")
        .set_selection_set(pet_selection_set())
        .build();
    assert_eq!(result, Err(FragmentBuildError::NoFragmentNameSpecified));
}

#[test]
fn missing_type_condition_is_an_error() {
    let result = Fragment::builder()
        .set_name("PetInfo")
        .set_selection_set(pet_selection_set())
        .build();
    assert_eq!(result, Err(FragmentBuildError::NoTypeConditionSpecified {
        fragment_name: "PetInfo".to_string(),
    }));
}

#[test]
fn missing_selection_set_is_an_error() {
    let result = Fragment::builder()
        .set_name("PetInfo")
        .set_type_condition("Pet")
        .build();
    assert_eq!(result, Err(FragmentBuildError::NoSelectionSetSpecified {
        fragment_name: "PetInfo".to_string(),
    }));
}
