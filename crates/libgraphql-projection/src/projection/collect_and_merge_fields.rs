use crate::projection::ContributionOrigin;
use crate::projection::MergedField;
use crate::projection::ProjectionError;
use crate::projection::ScopePath;
use crate::projection::Variant;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Compute the final, ordered list of fields selected for `variant`.
///
/// Fields selected directly (including through inline fragments) come first
/// in selection order, followed by fields contributed by fragment spreads in
/// the order the spreads were selected. Selections of the same response key
/// are merged into one [`MergedField`]; selections whose types disagree fail
/// with [`ProjectionError::ConflictingFieldTypes`].
///
/// Spread-contributed fields are left out when
/// `merge_in_fields_from_fragment_spreads` is unset.
pub fn collect_and_merge_fields<'a>(
    variant: &Variant<'a>,
    merge_in_fields_from_fragment_spreads: bool,
    scope_path: &ScopePath,
) -> Result<Vec<MergedField<'a>>, ProjectionError> {
    let mut contributions: Vec<_> = variant.contributions().iter()
        .filter(|contribution|
            merge_in_fields_from_fragment_spreads
                || contribution.origin() == ContributionOrigin::Own
        )
        .collect();
    // Stable, so selection order is kept within each origin.
    contributions.sort_by_key(|contribution| contribution.origin());

    let mut merged_fields: IndexMap<&'a str, MergedField<'a>> = IndexMap::new();
    for contribution in contributions {
        let field = contribution.field();
        match merged_fields.entry(field.selected_name()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(
                field,
                contribution.is_conditional(),
                scope_path,
            )?,
            Entry::Vacant(entry) => {
                entry.insert(MergedField::new(field, contribution.is_conditional()));
            },
        }
    }

    Ok(merged_fields.into_values().collect())
}
