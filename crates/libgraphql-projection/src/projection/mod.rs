mod collect_and_merge_fields;
mod declaration;
mod merged_field;
mod projection_config;
mod projection_engine;
mod projection_error;
mod projection_unit;
mod property;
mod scope_path;
mod type_case;
mod variant;

pub use collect_and_merge_fields::collect_and_merge_fields;
pub use declaration::Declaration;
pub use declaration::ObjectDeclaration;
pub use declaration::UnionDeclaration;
pub use merged_field::MergedField;
pub use projection_config::ProjectionConfig;
pub use projection_engine::MAX_SELECTION_SET_DEPTH;
pub use projection_engine::ProjectionEngine;
pub use projection_engine::VARIABLES_DECLARATION_NAME;
pub use projection_error::ProjectionError;
pub use projection_error::ProjectionFailure;
pub use projection_unit::ProjectedUnit;
pub use projection_unit::ProjectionUnit;
pub use property::Property;
pub use property::PropertyType;
pub use scope_path::ScopePath;
pub use type_case::exhaustive_variants;
pub use variant::Contribution;
pub use variant::ContributionOrigin;
pub use variant::Variant;

#[cfg(test)]
mod tests;
