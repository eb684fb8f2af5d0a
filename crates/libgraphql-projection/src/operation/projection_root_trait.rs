use crate::operation::SelectionSet;

/// Implemented by the things the
/// [`ProjectionEngine`](crate::projection::ProjectionEngine) can project from
/// the top: [`Operation`](crate::operation::Operation)s and
/// [`Fragment`](crate::operation::Fragment)s.
pub trait ProjectionRootTrait {
    /// The first segment of every scope path within this root.
    fn root_scope_segment(&self) -> &str;
    fn selection_set(&self) -> &SelectionSet;
    /// A human-readable name used when reporting failures.
    fn unit_name(&self) -> String;
}
