use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    kind: OperationKind,
    name: Option<String>,
    selection_set: Option<SelectionSet>,
    variables: Vec<Variable>,
}

impl OperationBuilder {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: None,
            selection_set: None,
            variables: vec![],
        }
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self> {
        if self.variables.iter().any(|existing| existing.name() == variable.name()) {
            return Err(OperationBuildError::DuplicateVariableName {
                operation_name: self.name,
                variable_name: variable.name().to_string(),
            });
        }
        self.variables.push(variable);
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Result<Operation> {
        let selection_set = self.selection_set.ok_or_else(||
            OperationBuildError::NoSelectionSetSpecified {
                operation_name: self.name.to_owned(),
            }
        )?;

        Ok(Operation {
            kind: self.kind,
            name: self.name,
            selection_set,
            variables: self.variables,
        })
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        let _ = self.name.insert(name.into());
        self
    }

    pub fn set_selection_set(mut self, selection_set: SelectionSet) -> Self {
        let _ = self.selection_set.insert(selection_set);
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("Multiple variables defined with the same name: `{variable_name}`")]
    DuplicateVariableName {
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("Operations must specify a root selection set")]
    NoSelectionSetSpecified {
        operation_name: Option<String>,
    },
}
