/// Options recognized by the [`ProjectionEngine`](crate::projection::ProjectionEngine).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// When set, the fields selected by a fragment spread are merged into the
    /// declarations of every variant the spread applies to. When unset, the
    /// spread's fields are left out and each declaration instead lists the
    /// names of the fragments spread into it.
    pub merge_in_fields_from_fragment_spreads: bool,
}
impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            merge_in_fields_from_fragment_spreads: true,
        }
    }
}
