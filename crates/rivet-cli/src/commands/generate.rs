//! The `generate` command: the end-to-end resolution driver
//!
//! Load snapshots, extract containers and providers, then resolve each
//! container independently. A failing container marks the run failed but
//! never blocks its siblings; everything that resolved is still emitted.
//! Containers are grouped by destination file, derived from each
//! container's source location plus the output file name.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rivet_emit::{render, ContainerPlan, DestinationWriter, EmitUnit};
use rivet_resolve::{
    build_graph, convert_container, convert_providers, order_providers, ProviderSet,
};

use crate::error::{CliError, CliResult};
use crate::output;

/// Run generation against the given snapshot files.
pub fn run(output_name: &str, snapshots: &[PathBuf]) -> CliResult<()> {
    let workspace = rivet_frontend::load(snapshots)?;

    let container_specs = rivet_scan::collect_containers(&workspace)?;
    if container_specs.is_empty() {
        return Err(CliError::NoContainers);
    }
    let provider_specs = rivet_scan::collect_providers(&workspace)?;

    let providers = convert_providers(&provider_specs)?;
    let set = ProviderSet::new(providers)?;
    tracing::debug!(
        containers = container_specs.len(),
        providers = set.len(),
        "extracted workspace"
    );

    let mut failed = false;
    let mut units: BTreeMap<PathBuf, EmitUnit> = BTreeMap::new();

    for spec in &container_specs {
        let container = match convert_container(spec) {
            Ok(container) => container,
            Err(err) => {
                eprintln!("{}", output::error(&err.to_string()));
                failed = true;
                continue;
            }
        };
        if container.fields.is_empty() {
            eprintln!(
                "{}",
                output::error(&format!(
                    "no injectable fields found in container: {} ({})",
                    container.qualified_name(),
                    container.position
                ))
            );
            failed = true;
            continue;
        }

        let graph = match build_graph(&container.fields, &set) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!(
                    "{}",
                    output::error(&format!(
                        "failed to build graph for container {}: {}",
                        container.qualified_name(),
                        err
                    ))
                );
                failed = true;
                continue;
            }
        };

        let plan = match order_providers(&graph, &set) {
            Ok(plan) => plan,
            Err(err) => {
                eprintln!("{}", output::error(&err.to_string()));
                failed = true;
                continue;
            }
        };
        if plan.is_empty() {
            eprintln!(
                "{}",
                output::error(&format!(
                    "no providers selected for container {}",
                    container.qualified_name()
                ))
            );
            failed = true;
            continue;
        }

        let dest = destination(&container.position, output_name);
        let module_name = container.module_name.clone();
        let container_plan = ContainerPlan {
            container,
            graph,
            plan,
        };
        match units.entry(dest) {
            Entry::Occupied(mut entry) => entry.get_mut().push(container_plan),
            Entry::Vacant(entry) => {
                entry.insert(EmitUnit::new(module_name, container_plan));
            }
        }
    }

    let mut writer = DestinationWriter::new();
    for (path, unit) in &units {
        let rendered = render(unit, &set);
        if let Err(err) = writer.write(path, &rendered) {
            eprintln!("{}", output::error(&err.to_string()));
            failed = true;
            continue;
        }
        println!(
            "{}",
            output::success(&format!("generate: {}", path.display()))
        );
    }

    if failed {
        return Err(CliError::GenerationFailed);
    }
    Ok(())
}

/// Destination file for a container: the output name placed in the same
/// directory as the container's source file.
fn destination(position: &str, output_name: &str) -> PathBuf {
    let file = position_file(position);
    match Path::new(file).parent() {
        Some(dir) => dir.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Strip the trailing `:line:column` from a position string.
///
/// Splits from the right so Windows drive letters survive.
fn position_file(pos: &str) -> &str {
    let Some(i) = pos.rfind(':') else {
        return pos;
    };
    let Some(j) = pos[..i].rfind(':') else {
        return &pos[..i];
    };
    &pos[..j]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_file_strips_line_and_column() {
        assert_eq!(position_file("app/main.go:12:3"), "app/main.go");
        assert_eq!(position_file("main.go:1:1"), "main.go");
    }

    #[test]
    fn test_position_file_handles_short_forms() {
        assert_eq!(position_file("main.go"), "main.go");
        assert_eq!(position_file("main.go:7"), "main.go");
    }

    #[test]
    fn test_destination_is_sibling_of_source() {
        assert_eq!(
            destination("example/app/main.go:8:1", "rivet_gen.go"),
            PathBuf::from("example/app/rivet_gen.go")
        );
        assert_eq!(
            destination("main.go:8:1", "rivet_gen.go"),
            PathBuf::from("rivet_gen.go")
        );
    }
}
