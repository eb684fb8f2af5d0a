use crate::operation::FragmentBuilder;
use crate::operation::ProjectionRootTrait;
use crate::operation::SelectionSet;
use inherent::inherent;

/// A compiled named fragment definition
/// (`fragment Name on TypeCondition { }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Fragment {
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}

impl Fragment {
    /// Convenience wrapper around [`FragmentBuilder::new()`].
    pub fn builder() -> FragmentBuilder {
        FragmentBuilder::new()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[inherent]
impl ProjectionRootTrait for Fragment {
    /// Fragment declarations are named directly after the fragment.
    pub fn root_scope_segment(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn unit_name(&self) -> String {
        format!("fragment {}", self.name)
    }
}
