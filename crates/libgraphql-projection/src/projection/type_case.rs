use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::projection::Contribution;
use crate::projection::ContributionOrigin;
use crate::projection::ProjectionError;
use crate::projection::ScopePath;
use crate::projection::Variant;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Compute the exhaustive [`Variant`]s of `selection_set`: a partition of its
/// possible types such that each part receives one fixed list of selections.
///
/// Variants are ordered by the first type condition (or fragment spread) that
/// carved them out, followed by a final catch-all variant for any types no
/// condition claimed.
///
/// `scope_path` only serves to describe where an
/// [`EmptyVariantSet`](ProjectionError::EmptyVariantSet) was found.
pub fn exhaustive_variants<'a>(
    selection_set: &'a SelectionSet,
    merge_in_fields_from_fragment_spreads: bool,
    scope_path: &ScopePath,
) -> Result<Vec<Variant<'a>>, ProjectionError> {
    let type_case = TypeCase::for_selection_set(
        selection_set,
        merge_in_fields_from_fragment_spreads,
    );
    let variants = type_case.into_exhaustive_variants();
    if variants.is_empty() {
        return Err(ProjectionError::EmptyVariantSet {
            scope_path: scope_path.to_owned(),
        });
    }

    log::trace!(
        "Resolved {} variant(s) at `{scope_path}`: {:?}",
        variants.len(),
        variants.iter().map(|variant| variant.possible_types()).collect::<Vec<_>>(),
    );
    Ok(variants)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum VariantSlot {
    Default,
    Split(usize),
}

/// Routes every selection of a [`SelectionSet`] to the variants it applies
/// to, splitting variants whenever a type condition only covers part of one.
#[derive(Clone, Debug)]
pub(crate) struct TypeCase<'a> {
    default: Variant<'a>,
    merge_in_fields_from_fragment_spreads: bool,
    variant_index_by_type: HashMap<&'a str, usize>,
    variants: Vec<Variant<'a>>,
}
impl<'a> TypeCase<'a> {
    pub(crate) fn for_selection_set(
        selection_set: &'a SelectionSet,
        merge_in_fields_from_fragment_spreads: bool,
    ) -> Self {
        let mut possible_types: Vec<&'a str> = vec![];
        for type_name in selection_set.possible_types() {
            if !possible_types.contains(&type_name.as_str()) {
                possible_types.push(type_name.as_str());
            }
        }

        let mut type_case = Self {
            default: Variant::new(possible_types.clone()),
            merge_in_fields_from_fragment_spreads,
            variant_index_by_type: HashMap::new(),
            variants: vec![],
        };
        type_case.add_selections(
            selection_set.selections(),
            &possible_types,
            ContributionOrigin::Own,
            /* conditional = */ false,
        );
        type_case
    }

    fn add_selections(
        &mut self,
        selections: &'a [Selection],
        scope_types: &[&'a str],
        origin: ContributionOrigin,
        conditional: bool,
    ) {
        for selection in selections {
            match selection {
                Selection::Field(field) => {
                    for slot in self.disjoint_variants_for(scope_types) {
                        self.variant_mut(slot).contributions.push(Contribution {
                            conditional,
                            field,
                            origin,
                        });
                    }
                },

                // Routed like its enclosing selections; only the fields it
                // reaches become conditional.
                Selection::BooleanCondition(condition) => self.add_selections(
                    condition.selection_set().selections(),
                    scope_types,
                    origin,
                    /* conditional = */ true,
                ),

                Selection::TypeCondition(type_condition) => {
                    let narrowed_types = intersect(
                        scope_types,
                        type_condition.selection_set().possible_types(),
                    );
                    if narrowed_types.is_empty() {
                        log::trace!(
                            "Skipping `... on {}`: no possible types in scope.",
                            type_condition.type_name(),
                        );
                        continue
                    }
                    self.add_selections(
                        type_condition.selection_set().selections(),
                        &narrowed_types,
                        origin,
                        conditional,
                    );
                },

                Selection::FragmentSpread(spread) => {
                    let narrowed_types = intersect(
                        scope_types,
                        spread.selection_set().possible_types(),
                    );
                    if narrowed_types.is_empty() {
                        log::trace!(
                            "Skipping `...{}`: no possible types in scope.",
                            spread.fragment_name(),
                        );
                        continue
                    }

                    if self.merge_in_fields_from_fragment_spreads {
                        self.add_selections(
                            spread.selection_set().selections(),
                            &narrowed_types,
                            ContributionOrigin::FragmentSpread,
                            conditional,
                        );
                    } else {
                        for slot in self.disjoint_variants_for(&narrowed_types) {
                            let spreads = &mut self.variant_mut(slot).fragment_spreads;
                            if !spreads.contains(&spread.fragment_name()) {
                                spreads.push(spread.fragment_name());
                            }
                        }
                    }
                },
            }
        }
    }

    /// Return the slots of every variant covering exactly some subset of
    /// `types`, splitting existing variants (or the default) as needed so that
    /// no returned variant covers a type outside of `types`.
    ///
    /// The default is included when `types` covers all possible types.
    fn disjoint_variants_for(&mut self, types: &[&'a str]) -> Vec<VariantSlot> {
        let mut slots = vec![];
        let matches_default =
            self.default.possible_types.iter().all(|type_name| types.contains(type_name));
        if matches_default {
            slots.push(VariantSlot::Default);
        }

        // Group the requested types by the variant that currently covers them
        // (`None` being the default).
        let mut splits: IndexMap<Option<usize>, Vec<&'a str>> = IndexMap::new();
        for type_name in types {
            if !self.default.possible_types.contains(type_name) {
                continue
            }
            let original = match self.variant_index_by_type.get(type_name) {
                Some(index) => Some(*index),
                None if matches_default => continue,
                None => None,
            };
            splits.entry(original).or_default().push(*type_name);
        }

        for (original, split_types) in splits {
            let index = match original {
                Some(index)
                    if self.variants[index].possible_types.len() == split_types.len()
                    => index,

                Some(index) => {
                    let source = &mut self.variants[index];
                    source.possible_types.retain(|type_name| !split_types.contains(type_name));
                    let split = source.split_off(split_types.clone());
                    log::trace!(
                        "Split {:?} off of the variant for {:?}.",
                        split.possible_types,
                        source.possible_types,
                    );
                    self.variants.push(split);
                    self.variants.len() - 1
                },

                None => {
                    self.variants.push(self.default.split_off(split_types.clone()));
                    self.variants.len() - 1
                },
            };

            for type_name in split_types {
                self.variant_index_by_type.insert(type_name, index);
            }
            slots.push(VariantSlot::Split(index));
        }

        slots
    }

    pub(crate) fn into_exhaustive_variants(self) -> Vec<Variant<'a>> {
        let remainder_types: Vec<&'a str> =
            self.default.possible_types.iter()
                .filter(|type_name| !self.variant_index_by_type.contains_key(*type_name))
                .copied()
                .collect();

        let mut variants = self.variants;
        if !remainder_types.is_empty() {
            variants.push(self.default.split_off(remainder_types));
        }
        variants
    }

    fn variant_mut(&mut self, slot: VariantSlot) -> &mut Variant<'a> {
        match slot {
            VariantSlot::Default => &mut self.default,
            VariantSlot::Split(index) => &mut self.variants[index],
        }
    }
}

/// The types of `scope_types` (in `scope_types` order) that also appear in
/// `condition_types`.
fn intersect<'a>(scope_types: &[&'a str], condition_types: &[String]) -> Vec<&'a str> {
    scope_types.iter()
        .filter(|type_name| condition_types.iter().any(|cond| cond == *type_name))
        .copied()
        .collect()
}
