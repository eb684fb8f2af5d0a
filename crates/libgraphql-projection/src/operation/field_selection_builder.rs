use crate::operation::FieldSelection;
use crate::operation::SelectionSet;
use crate::types::TypeAnnotation;
use thiserror::Error;

type Result<T> = std::result::Result<T, FieldSelectionBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelectionBuilder {
    alias: Option<String>,
    description: Option<String>,
    name: String,
    selection_set: Option<SelectionSet>,
    type_annotation: Option<TypeAnnotation>,
}
impl FieldSelectionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            description: None,
            name: name.into(),
            selection_set: None,
            type_annotation: None,
        }
    }

    pub fn build(self) -> Result<FieldSelection> {
        if self.name.is_empty() {
            return Err(FieldSelectionBuildError::EmptyFieldName);
        }

        let type_annotation = match self.type_annotation {
            Some(annot) => annot,
            // `__typename` is always `String!`, so it need not be spelled out.
            None if self.name == "__typename" =>
                TypeAnnotation::named("String").non_null(),
            None => return Err(FieldSelectionBuildError::NoTypeAnnotationSpecified {
                field_name: self.name,
            }),
        };

        Ok(FieldSelection {
            alias: self.alias,
            description: self.description,
            name: self.name,
            selection_set: self.selection_set,
            type_annotation,
        })
    }

    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        let _ = self.alias.insert(alias.into());
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        let _ = self.description.insert(description.into());
        self
    }

    pub fn set_selection_set(mut self, selection_set: SelectionSet) -> Self {
        let _ = self.selection_set.insert(selection_set);
        self
    }

    pub fn set_type_annotation(mut self, type_annotation: TypeAnnotation) -> Self {
        let _ = self.type_annotation.insert(type_annotation);
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldSelectionBuildError {
    #[error("Field selections must specify a non-empty field name")]
    EmptyFieldName,

    #[error(
        "Field selections must specify the annotated type of the selected \
        field, but none was specified for `{field_name}`."
    )]
    NoTypeAnnotationSpecified {
        field_name: String,
    },
}
