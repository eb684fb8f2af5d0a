use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::ProjectionRootTrait;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use inherent::inherent;

/// The scope segment all of an operation's result declarations are rooted at.
const OPERATION_RESULT_SCOPE_SEGMENT: &str = "Result";

/// A compiled query, mutation, or subscription.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(super) kind: OperationKind,
    #[serde(default)]
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
    #[serde(default)]
    pub(super) variables: Vec<Variable>,
}

impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Access the name of this [`Operation`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Access the [`Variable`]s defined on this [`Operation`] in definition
    /// order.
    pub fn variables(&self) -> &[Variable] {
        self.variables.as_slice()
    }
}

#[inherent]
impl ProjectionRootTrait for Operation {
    pub fn root_scope_segment(&self) -> &str {
        OPERATION_RESULT_SCOPE_SEGMENT
    }

    /// Access the root [`SelectionSet`] of this [`Operation`].
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn unit_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {name}", self.kind),
            None => format!("anonymous {}", self.kind),
        }
    }
}
