use crate::output_utils;
use crate::CommandResult;
use anyhow::Context;
use libgraphql_projection::ProjectionConfig;
use libgraphql_projection::ProjectionEngine;
use libgraphql_projection::projection::ProjectedUnit;
use libgraphql_projection::projection::ProjectionFailure;
use libgraphql_projection::projection::ProjectionUnit;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ProjectCmd {
    #[arg(
        help="Project fragment spreads as references (listed on each \
             declaration) instead of merging their fields in.",
        long,
    )]
    no_merge_fragment_spreads: bool,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    unit_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more JSON files (or directories containing \
             JSON files) that each hold a list of compiled operations and \
             fragments.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl ProjectCmd {
    /// Find every unit file at or under each path passed as an arg.
    fn find_unit_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let unit_file_exts: HashSet<String> =
            self.unit_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is loaded regardless of its extension.
            if path.is_file() {
                file_paths.push(canonicalize(path)?);
                continue
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(||
                    format!("Failed to scan {path:#?}")
                )?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let matches_ext = entry_path.extension()
                    .map(|ext| unit_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found unit file at {entry_path:#?}.");
                    file_paths.push(canonicalize(entry_path)?);
                }
            }
        }

        log::debug!("Found {} unit files to be projected.", file_paths.len());
        Ok(file_paths)
    }

    fn load_units(file_paths: &[PathBuf]) -> anyhow::Result<Vec<ProjectionUnit>> {
        let mut units = vec![];
        for file_path in file_paths {
            let content = std::fs::read_to_string(file_path).with_context(||
                format!("Failed to read {file_path:#?}")
            )?;
            let file_units: Vec<ProjectionUnit> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse units from {file_path:#?}"))?;
            log::debug!("Loaded {} units from {file_path:#?}.", file_units.len());
            units.extend(file_units);
        }
        Ok(units)
    }

    async fn project(&self) -> anyhow::Result<Vec<Result<ProjectedUnit, ProjectionFailure>>> {
        let file_paths = self.find_unit_files()?;
        let units = Self::load_units(&file_paths)?;

        let config = ProjectionConfig {
            merge_in_fields_from_fragment_spreads: !self.no_merge_fragment_spreads,
        };
        let results = tokio::task::spawn_blocking(move || {
            ProjectionEngine::new(&config).project_batch(&units)
        }).await.context("The projection worker did not complete")?;
        Ok(results)
    }
}

impl ProjectCmd {
    pub(crate) async fn run(self) -> CommandResult {
        let results = match self.project().await {
            Ok(results) => results,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to project units: {e:#}",
                output_utils::RED_X,
            )),
        };

        let num_units = results.len();
        let mut projected = serde_json::Map::new();
        let mut failures = vec![];
        for result in results {
            match result {
                Ok(unit) => {
                    let unit_name = unique_key(&projected, unit.unit_name());
                    match serde_json::to_value(unit.declarations()) {
                        Ok(declarations) => {
                            projected.insert(unit_name, declarations);
                        },
                        Err(e) => failures.push(format!("{unit_name}: {e}")),
                    }
                },
                Err(failure) => failures.push(failure.to_string()),
            }
        }

        let stdout = match serde_json::to_string_pretty(&projected) {
            Ok(stdout) => stdout,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to serialize declarations: {e}",
                output_utils::RED_X,
            )),
        };

        if failures.is_empty() {
            log::info!(
                "{} Projected {num_units} units.",
                output_utils::GREEN_CHECK,
            );
            CommandResult::stdout(format_args!("{stdout}"))
        } else {
            CommandResult::partial_failure(stdout, format!(
                "{} Failed to project {} of {num_units} units:\n{}",
                output_utils::RED_X,
                failures.len(),
                failures.iter()
                    .map(|failure| format!("  * {failure}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ))
        }
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(||
        format!("Failed to resolve {path:#?}")
    )
}

/// Two anonymous operations of the same kind share a unit name; number the
/// later ones so neither is dropped from the output.
fn unique_key(map: &serde_json::Map<String, serde_json::Value>, unit_name: &str) -> String {
    if !map.contains_key(unit_name) {
        return unit_name.to_string();
    }
    let mut counter = 2;
    loop {
        let key = format!("{unit_name} ({counter})");
        if !map.contains_key(&key) {
            log::warn!("Multiple units are named `{unit_name}`; reporting one as `{key}`.");
            return key;
        }
        counter += 1;
    }
}
