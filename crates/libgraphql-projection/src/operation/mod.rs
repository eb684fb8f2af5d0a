mod boolean_condition;
mod field_selection;
mod field_selection_builder;
mod fragment;
mod fragment_builder;
mod fragment_spread;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_kind;
mod projection_root_trait;
mod selection;
mod selection_set;
mod selection_set_builder;
mod type_condition;
mod variable;

pub use boolean_condition::BooleanCondition;
pub use field_selection::FieldSelection;
pub use field_selection_builder::FieldSelectionBuilder;
pub use field_selection_builder::FieldSelectionBuildError;
pub use fragment::Fragment;
pub use fragment_builder::FragmentBuilder;
pub use fragment_builder::FragmentBuildError;
pub use fragment_spread::FragmentSpread;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_builder::OperationBuildError;
pub use operation_kind::OperationKind;
pub use projection_root_trait::ProjectionRootTrait;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuilder;
pub use selection_set_builder::SelectionSetBuildError;
pub use type_condition::TypeCondition;
pub use variable::Variable;

#[cfg(test)]
mod tests;
