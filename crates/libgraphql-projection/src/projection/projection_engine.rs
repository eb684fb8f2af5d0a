use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::ProjectionRootTrait;
use crate::operation::SelectionSet;
use crate::projection::collect_and_merge_fields;
use crate::projection::exhaustive_variants;
use crate::projection::Declaration;
use crate::projection::MergedField;
use crate::projection::ObjectDeclaration;
use crate::projection::ProjectedUnit;
use crate::projection::ProjectionConfig;
use crate::projection::ProjectionError;
use crate::projection::ProjectionFailure;
use crate::projection::ProjectionUnit;
use crate::projection::Property;
use crate::projection::PropertyType;
use crate::projection::ScopePath;
use crate::projection::UnionDeclaration;
use crate::projection::Variant;
use rayon::prelude::*;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ProjectionError>;

/// The deepest selection set nesting a projection will descend into.
pub const MAX_SELECTION_SET_DEPTH: usize = 64;

/// The name of the declaration describing an operation's variables.
pub const VARIABLES_DECLARATION_NAME: &str = "Variables";

/// Projects [`Operation`]s and [`Fragment`]s into the ordered list of
/// [`Declaration`]s that describe every shape their responses can take.
///
/// Each operation or fragment is projected independently of every other: a
/// [`ProjectionEngine`] holds no state beyond its [`ProjectionConfig`], so one
/// engine may be shared freely (including across threads).
#[derive(Clone, Debug)]
pub struct ProjectionEngine<'config> {
    config: &'config ProjectionConfig,
}

impl<'config> ProjectionEngine<'config> {
    pub fn new(config: &'config ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project `fragment`.
    ///
    /// Declarations are named after the fragment: a single `FragmentName`
    /// declaration, or one `FragmentName_TypeName` declaration per variant
    /// followed by a `FragmentName` union of them.
    pub fn project_fragment(
        &self,
        fragment: &Fragment,
    ) -> std::result::Result<Vec<Declaration>, ProjectionFailure> {
        let mut projection = UnitProjection::new(self.config);
        projection.project_root(fragment)
            .map_err(|error| failure(fragment, error))?;
        Ok(projection.declarations)
    }

    /// Project `operation`: its result declarations (rooted at `Result`)
    /// followed by its `Variables` declaration.
    pub fn project_operation(
        &self,
        operation: &Operation,
    ) -> std::result::Result<Vec<Declaration>, ProjectionFailure> {
        let mut projection = UnitProjection::new(self.config);
        projection.project_root(operation)
            .map_err(|error| failure(operation, error))?;
        projection.project_variables(operation);
        Ok(projection.declarations)
    }

    pub fn project_unit(
        &self,
        unit: &ProjectionUnit,
    ) -> std::result::Result<ProjectedUnit, ProjectionFailure> {
        let declarations = match unit {
            ProjectionUnit::Fragment(fragment) => self.project_fragment(fragment)?,
            ProjectionUnit::Operation(operation) => self.project_operation(operation)?,
        };

        Ok(ProjectedUnit {
            declarations,
            unit_name: unit.unit_name(),
        })
    }

    /// Project every unit of `units` in parallel.
    ///
    /// Results are returned in the same order as `units`. A failure only
    /// affects the unit it occurred in.
    pub fn project_batch(
        &self,
        units: &[ProjectionUnit],
    ) -> Vec<std::result::Result<ProjectedUnit, ProjectionFailure>> {
        log::debug!("Projecting a batch of {} units...", units.len());
        units.par_iter()
            .map(|unit| self.project_unit(unit))
            .collect()
    }
}

fn failure(root: &impl ProjectionRootTrait, error: ProjectionError) -> ProjectionFailure {
    let unit_name = root.unit_name();
    log::debug!("Projection of {unit_name} failed: {error}");
    ProjectionFailure {
        error,
        unit_name,
    }
}

/// The state of projecting a single operation or fragment.
struct UnitProjection<'config> {
    config: &'config ProjectionConfig,
    declarations: Vec<Declaration>,
    used_names: HashSet<String>,
}

impl<'config> UnitProjection<'config> {
    fn new(config: &'config ProjectionConfig) -> Self {
        Self {
            config,
            declarations: vec![],
            used_names: HashSet::new(),
        }
    }

    fn merge_spreads(&self) -> bool {
        self.config.merge_in_fields_from_fragment_spreads
    }

    fn project_root(&mut self, root: &impl ProjectionRootTrait) -> Result<String> {
        log::debug!("Projecting {}...", root.unit_name());
        let scope_path = ScopePath::root(root.root_scope_segment());
        let root_name = self.project_selection_set(
            root.selection_set(),
            &scope_path,
            /* depth = */ 1,
        )?;
        log::debug!(
            "Projected {} into {} declarations.",
            root.unit_name(),
            self.declarations.len(),
        );
        Ok(root_name)
    }

    /// Emit the declarations for `selection_set` and return the name that
    /// refers to all of its shapes: the lone variant's declaration, or the
    /// union of every variant's declaration.
    fn project_selection_set(
        &mut self,
        selection_set: &SelectionSet,
        scope_path: &ScopePath,
        depth: usize,
    ) -> Result<String> {
        if depth > MAX_SELECTION_SET_DEPTH {
            return Err(ProjectionError::MaxDepthExceeded {
                max_depth: MAX_SELECTION_SET_DEPTH,
                scope_path: scope_path.to_owned(),
            });
        }

        let variants = exhaustive_variants(
            selection_set,
            self.merge_spreads(),
            scope_path,
        )?;

        if let [variant] = variants.as_slice() {
            return self.project_variant(variant, scope_path, depth);
        }

        let mut members = Vec::with_capacity(variants.len());
        for variant in &variants {
            let leading_type_name = variant.leading_type_name().ok_or_else(||
                ProjectionError::EmptyVariantSet {
                    scope_path: scope_path.to_owned(),
                }
            )?;
            let variant_scope_path = scope_path.push(leading_type_name);
            members.push(self.project_variant(variant, &variant_scope_path, depth)?);
        }

        let name = self.reserve_name(scope_path);
        log::trace!("Emitting union `{name}` of {members:?}.");
        self.declarations.push(Declaration::Union(UnionDeclaration {
            members,
            name: name.to_owned(),
        }));
        Ok(name)
    }

    fn project_variant(
        &mut self,
        variant: &Variant<'_>,
        scope_path: &ScopePath,
        depth: usize,
    ) -> Result<String> {
        let properties = self.properties_for_variant(variant, scope_path, depth)?;

        let name = self.reserve_name(scope_path);
        log::trace!("Emitting object `{name}` for {:?}.", variant.possible_types());
        self.declarations.push(Declaration::Object(ObjectDeclaration {
            fragment_spreads: variant.fragment_spreads().iter()
                .map(|fragment_name| fragment_name.to_string())
                .collect(),
            name: name.to_owned(),
            possible_types: variant.possible_types().iter()
                .map(|type_name| type_name.to_string())
                .collect(),
            properties,
        }));
        Ok(name)
    }

    fn properties_for_variant(
        &mut self,
        variant: &Variant<'_>,
        scope_path: &ScopePath,
        depth: usize,
    ) -> Result<Vec<Property>> {
        let fields = collect_and_merge_fields(variant, self.merge_spreads(), scope_path)?;

        let mut properties = Vec::with_capacity(fields.len());
        for field in &fields {
            let field_scope_path = scope_path.push(field.response_key());
            properties.push(self.property_for_field(
                field,
                variant,
                &field_scope_path,
                depth,
            )?);
        }
        Ok(properties)
    }

    fn property_for_field(
        &mut self,
        field: &MergedField<'_>,
        variant: &Variant<'_>,
        scope_path: &ScopePath,
        depth: usize,
    ) -> Result<Property> {
        let type_annotation = field.field().type_annotation();
        let property_type = match field.selection_set() {
            Some(selection_set) => {
                let declaration_name = self.project_selection_set(
                    selection_set,
                    scope_path,
                    depth + 1,
                )?;
                PropertyType::reference(type_annotation, &declaration_name)
            },

            None if field.field().is_typename() =>
                PropertyType::typename_literal(variant.possible_types()),

            None => PropertyType::from_type_annotation(type_annotation),
        };

        Ok(Property {
            description: field.description().map(str::to_string),
            name: field.response_key().to_string(),
            optional: field.is_conditional(),
            type_: property_type,
        })
    }

    fn project_variables(&mut self, operation: &Operation) {
        let properties = operation.variables().iter()
            .map(|variable| Property {
                description: None,
                name: variable.name().to_string(),
                // A nullable variable may be left out entirely.
                optional: variable.type_annotation().nullable(),
                type_: PropertyType::from_type_annotation(variable.type_annotation()),
            })
            .collect();

        let name = self.reserve_name(&ScopePath::root(VARIABLES_DECLARATION_NAME));
        self.declarations.push(Declaration::Object(ObjectDeclaration {
            fragment_spreads: vec![],
            name,
            possible_types: vec![],
            properties,
        }));
    }

    /// Derive the declaration name for `scope_path`, appending the smallest
    /// numeric suffix (starting at 2) needed to keep it unique within this
    /// unit.
    fn reserve_name(&mut self, scope_path: &ScopePath) -> String {
        let base = scope_path.current_name();
        if self.used_names.insert(base.clone()) {
            return base;
        }

        let mut counter = 2;
        loop {
            let name = format!("{base}{counter}");
            if self.used_names.insert(name.clone()) {
                log::debug!("Declaration name `{base}` was taken; using `{name}`.");
                return name;
            }
            counter += 1;
        }
    }
}
