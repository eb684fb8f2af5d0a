use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::ProjectionRootTrait;
use crate::projection::Declaration;

/// One independently projected input: an operation or a fragment.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionUnit {
    Fragment(Fragment),
    Operation(Operation),
}
impl ProjectionUnit {
    pub fn unit_name(&self) -> String {
        match self {
            Self::Fragment(fragment) => fragment.unit_name(),
            Self::Operation(operation) => operation.unit_name(),
        }
    }
}
impl std::convert::From<Fragment> for ProjectionUnit {
    fn from(value: Fragment) -> Self {
        Self::Fragment(value)
    }
}
impl std::convert::From<Operation> for ProjectionUnit {
    fn from(value: Operation) -> Self {
        Self::Operation(value)
    }
}

/// The declarations successfully projected from one [`ProjectionUnit`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectedUnit {
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) unit_name: String,
}
impl ProjectedUnit {
    /// The projected declarations, in emission order.
    pub fn declarations(&self) -> &[Declaration] {
        self.declarations.as_slice()
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }

    pub fn unit_name(&self) -> &str {
        self.unit_name.as_str()
    }
}
