use crate::operation::FieldSelection;

/// Where a [`Contribution`] to a [`Variant`] came from.
///
/// Ordered so that own contributions sort before spread-contributed ones.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ContributionOrigin {
    /// Selected directly within the selection set (or one of its inline
    /// fragments).
    Own,
    /// Selected within a named fragment spread into the selection set.
    FragmentSpread,
}

/// A field selection that applies to every type of the [`Variant`] it was
/// routed to.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution<'a> {
    pub(crate) conditional: bool,
    pub(crate) field: &'a FieldSelection,
    pub(crate) origin: ContributionOrigin,
}
impl<'a> Contribution<'a> {
    pub fn field(&self) -> &'a FieldSelection {
        self.field
    }

    /// Indicates that the field was reached through an `@include`/`@skip`
    /// condition.
    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    pub fn origin(&self) -> ContributionOrigin {
        self.origin
    }
}

/// One statically distinguishable response shape of a
/// [`SelectionSet`](crate::operation::SelectionSet): the subset of its
/// possible types that all receive the same selections.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant<'a> {
    pub(crate) contributions: Vec<Contribution<'a>>,
    pub(crate) fragment_spreads: Vec<&'a str>,
    pub(crate) possible_types: Vec<&'a str>,
}
impl<'a> Variant<'a> {
    pub(crate) fn new(possible_types: Vec<&'a str>) -> Self {
        Self {
            contributions: vec![],
            fragment_spreads: vec![],
            possible_types,
        }
    }

    /// A copy of this variant's contributions restricted to `possible_types`.
    pub(crate) fn split_off(&self, possible_types: Vec<&'a str>) -> Self {
        Self {
            contributions: self.contributions.clone(),
            fragment_spreads: self.fragment_spreads.clone(),
            possible_types,
        }
    }

    /// The selections routed to this variant, in the order they were
    /// selected.
    pub fn contributions(&self) -> &[Contribution<'a>] {
        self.contributions.as_slice()
    }

    /// Names of the fragments spread into this variant whose fields were not
    /// merged in.
    ///
    /// Only populated when merging fields from fragment spreads is disabled.
    pub fn fragment_spreads(&self) -> &[&'a str] {
        self.fragment_spreads.as_slice()
    }

    /// The name of the first concrete type covered by this variant; used to
    /// name the variant's declaration.
    pub fn leading_type_name(&self) -> Option<&'a str> {
        self.possible_types.first().copied()
    }

    pub fn possible_types(&self) -> &[&'a str] {
        self.possible_types.as_slice()
    }
}
