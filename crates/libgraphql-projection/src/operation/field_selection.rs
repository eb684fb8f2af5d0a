use crate::operation::FieldSelectionBuilder;
use crate::operation::SelectionSet;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldSelection {
    #[serde(default)]
    pub(super) alias: Option<String>,
    #[serde(default)]
    pub(super) description: Option<String>,
    pub(super) name: String,
    #[serde(default)]
    pub(super) selection_set: Option<SelectionSet>,
    pub(super) type_annotation: TypeAnnotation,
}
impl FieldSelection {
    /// Convenience wrapper around [`FieldSelectionBuilder::new()`].
    pub fn builder(name: impl Into<String>) -> FieldSelectionBuilder {
        FieldSelectionBuilder::new(name)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The description of the selected field as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates if this is a selection of the `__typename` meta-field.
    pub fn is_typename(&self) -> bool {
        self.name == "__typename"
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    /// The nested [`SelectionSet`] for fields whose type is an object,
    /// interface, or union.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
