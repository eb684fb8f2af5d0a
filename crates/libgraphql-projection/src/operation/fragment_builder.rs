use crate::operation::Fragment;
use crate::operation::SelectionSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, FragmentBuildError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentBuilder {
    name: Option<String>,
    selection_set: Option<SelectionSet>,
    type_condition: Option<String>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<Fragment> {
        let fragment_name = self.name.ok_or(
            FragmentBuildError::NoFragmentNameSpecified
        )?;

        let type_condition = self.type_condition.ok_or_else(||
            FragmentBuildError::NoTypeConditionSpecified {
                fragment_name: fragment_name.to_owned(),
            }
        )?;

        let selection_set = self.selection_set.ok_or_else(||
            FragmentBuildError::NoSelectionSetSpecified {
                fragment_name: fragment_name.to_owned(),
            }
        )?;

        Ok(Fragment {
            name: fragment_name,
            selection_set,
            type_condition,
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

    pub fn set_type_condition(mut self, type_name: impl Into<String>) -> Self {
        let _ = self.type_condition.insert(type_name.into());
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentBuildError {
    #[error("All fragment definitions must include a name")]
    NoFragmentNameSpecified,

    #[error(
        "Fragments must specify a selection set, but none was specified for \
        the `{fragment_name}` fragment."
    )]
    NoSelectionSetSpecified {
        fragment_name: String,
    },

    #[error(
        "Fragments must specify the type for which they apply to, but none \
        was specified for the `{fragment_name}` fragment."
    )]
    NoTypeConditionSpecified {
        fragment_name: String,
    },
}
