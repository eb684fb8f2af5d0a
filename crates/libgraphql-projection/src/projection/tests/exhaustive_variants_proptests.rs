use crate::operation::SelectionSet;
use crate::projection::exhaustive_variants;
use crate::projection::ScopePath;
use crate::projection::Variant;
use crate::projection::tests::test_utils::*;
use proptest::prelude::*;

/// One generated condition: the bitmask of types it applies to, whether it is
/// wrapped in `@include`, and whether it is a fragment spread rather than an
/// inline fragment.
#[derive(Clone, Debug)]
struct GeneratedCondition {
    mask: u32,
    conditional: bool,
    spread: bool,
}
impl GeneratedCondition {
    fn covers(&self, type_name: &str) -> bool {
        let bit: u32 = type_name[1..].parse().unwrap();
        self.mask & (1 << bit) != 0
    }
}

fn generated_condition() -> impl Strategy<Value = GeneratedCondition> {
    (0u32..32, any::<bool>(), any::<bool>())
        .prop_map(|(mask, conditional, spread)| GeneratedCondition {
            mask,
            conditional,
            spread,
        })
}

/// A selection set over `type_count` types holding one `shared` field plus
/// one condition per entry of `conditions`. Condition `i` selects field `fi`;
/// spreads are named `Si`.
fn conditioned_selection_set(
    type_count: usize,
    conditions: &[GeneratedCondition],
) -> SelectionSet {
    let types: Vec<String> = (0..type_count).map(|i| format!("T{i}")).collect();

    let mut selections = vec![leaf_field("shared", string())];
    for (index, condition) in conditions.iter().enumerate() {
        let condition_types: Vec<&str> = types.iter()
            .map(String::as_str)
            .filter(|type_name| condition.covers(type_name))
            .collect();
        let fields = vec![leaf_field(&format!("f{index}"), string())];
        let selection = if condition.spread {
            spread(&format!("S{index}"), &condition_types, fields)
        } else {
            on("Condition", &condition_types, fields)
        };
        selections.push(if condition.conditional {
            include_if("flag", vec![selection])
        } else {
            selection
        });
    }

    selection_set(types.iter().map(String::as_str), selections)
}

/// How many of `variant`'s types `condition` applies to.
fn covered_count(variant: &Variant<'_>, condition: &GeneratedCondition) -> usize {
    variant.possible_types().iter()
        .filter(|type_name| condition.covers(type_name))
        .count()
}

proptest! {
    #[test]
    fn variants_partition_the_possible_types(
        type_count in 1usize..=5,
        conditions in prop::collection::vec(generated_condition(), 0..8),
        merge in any::<bool>(),
    ) {
        let ss = conditioned_selection_set(type_count, &conditions);
        let variants = exhaustive_variants(&ss, merge, &ScopePath::root("F")).unwrap();

        prop_assert!(variants.iter().all(|variant| !variant.possible_types().is_empty()));
        let mut covered: Vec<&str> = variants.iter()
            .flat_map(|variant| variant.possible_types().iter().copied())
            .collect();
        covered.sort_unstable();
        let mut expected: Vec<&str> = ss.possible_types().iter().map(String::as_str).collect();
        expected.sort_unstable();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn merged_conditions_reach_exactly_the_variants_they_cover(
        type_count in 1usize..=5,
        conditions in prop::collection::vec(generated_condition(), 0..8),
    ) {
        let ss = conditioned_selection_set(type_count, &conditions);
        let variants = exhaustive_variants(&ss, true, &ScopePath::root("F")).unwrap();

        for variant in &variants {
            let contributions = variant.contributions();
            prop_assert_eq!(contributions.first().map(|c| c.field().name()), Some("shared"));
            prop_assert!(variant.fragment_spreads().is_empty());

            for (index, condition) in conditions.iter().enumerate() {
                let covered = covered_count(variant, condition);
                // A variant is either entirely inside or entirely outside of
                // every condition.
                prop_assert!(covered == 0 || covered == variant.possible_types().len());

                let field_name = format!("f{index}");
                let contribution = contributions.iter()
                    .find(|contribution| contribution.field().name() == field_name);
                prop_assert_eq!(contribution.is_some(), covered > 0);
                if let Some(contribution) = contribution {
                    prop_assert_eq!(contribution.is_conditional(), condition.conditional);
                }
            }
        }
    }

    #[test]
    fn unmerged_spreads_are_recorded_on_exactly_the_variants_they_cover(
        type_count in 1usize..=5,
        conditions in prop::collection::vec(generated_condition(), 0..8),
    ) {
        let ss = conditioned_selection_set(type_count, &conditions);
        let variants = exhaustive_variants(&ss, false, &ScopePath::root("F")).unwrap();

        for variant in &variants {
            for (index, condition) in conditions.iter().enumerate() {
                let covered = covered_count(variant, condition);
                prop_assert!(covered == 0 || covered == variant.possible_types().len());

                let spread_name = format!("S{index}");
                let field_name = format!("f{index}");
                let has_spread = variant.fragment_spreads().contains(&spread_name.as_str());
                let has_field = variant.contributions().iter()
                    .any(|contribution| contribution.field().name() == field_name);
                if condition.spread {
                    prop_assert_eq!(has_spread, covered > 0);
                    prop_assert!(!has_field);
                } else {
                    prop_assert_eq!(has_field, covered > 0);
                    prop_assert!(!has_spread);
                }
            }
        }
    }

    #[test]
    fn variant_resolution_is_deterministic(
        type_count in 1usize..=5,
        conditions in prop::collection::vec(generated_condition(), 0..8),
        merge in any::<bool>(),
    ) {
        let ss = conditioned_selection_set(type_count, &conditions);
        let first = exhaustive_variants(&ss, merge, &ScopePath::root("F")).unwrap();
        let second = exhaustive_variants(&ss, merge, &ScopePath::root("F")).unwrap();
        prop_assert_eq!(first, second);
    }
}
