use crate::operation::FieldSelection;
use crate::operation::SelectionSet;
use crate::projection::ProjectionError;
use crate::projection::ScopePath;
use std::borrow::Cow;

/// Every selection of one response key within a [`Variant`](crate::projection::Variant),
/// combined into one.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedField<'a> {
    conditional: bool,
    description: Option<&'a str>,
    field: &'a FieldSelection,
    selection_set: Option<Cow<'a, SelectionSet>>,
}
impl<'a> MergedField<'a> {
    pub(crate) fn new(field: &'a FieldSelection, conditional: bool) -> Self {
        Self {
            conditional,
            description: field.description(),
            field,
            selection_set: field.selection_set().map(Cow::Borrowed),
        }
    }

    /// Fold another selection of the same response key into this one.
    ///
    /// Nested selection sets are concatenated (this one's selections first).
    /// The result is only conditional if both sides are.
    pub(crate) fn merge(
        &mut self,
        other: &'a FieldSelection,
        other_conditional: bool,
        scope_path: &ScopePath,
    ) -> Result<(), ProjectionError> {
        if !self.field.type_annotation().is_equivalent_to(other.type_annotation()) {
            return Err(ProjectionError::ConflictingFieldTypes {
                first_type: self.field.type_annotation().to_owned(),
                response_key: self.response_key().to_string(),
                scope_path: scope_path.push(self.response_key()),
                second_type: other.type_annotation().to_owned(),
            });
        }

        self.selection_set = match (self.selection_set.take(), other.selection_set()) {
            (Some(mine), Some(theirs)) => Some(Cow::Owned(mine.concat(theirs))),
            (Some(mine), None) => Some(mine),
            (None, theirs) => theirs.map(Cow::Borrowed),
        };
        self.conditional = self.conditional && other_conditional;
        if self.description.is_none() {
            self.description = other.description();
        }
        Ok(())
    }

    pub fn description(&self) -> Option<&'a str> {
        self.description
    }

    /// The first selection of this response key.
    pub fn field(&self) -> &'a FieldSelection {
        self.field
    }

    /// Indicates that every selection of this response key was guarded by
    /// `@include`/`@skip`, so the key may be missing from a response.
    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    pub fn response_key(&self) -> &'a str {
        self.field.selected_name()
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_deref()
    }
}
