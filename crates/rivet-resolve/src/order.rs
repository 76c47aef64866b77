//! Deterministic linearization of a dependency graph
//!
//! Walks the graph depth-first from the roots in field order, visiting each
//! provider's dependencies in parameter order, and emits every provider
//! after all of its dependencies. A provider reachable from several roots
//! appears exactly once, at its first completion. No tie-breaking by name
//! or position is involved; the order falls out of declaration order alone.

use crate::error::{ResolveError, ResolveResult};
use crate::graph::{DependencyGraph, Mark, ProviderSet};
use crate::model::ProviderId;

/// Linearize a graph into a dependency-first construction plan.
///
/// Validates acyclicity independently of graph construction; a cycle
/// returns an error naming a provider on it.
pub fn order_providers(
    graph: &DependencyGraph,
    providers: &ProviderSet,
) -> ResolveResult<Vec<ProviderId>> {
    let mut marks = vec![Mark::Unvisited; providers.len()];
    let mut plan = Vec::new();

    for &root in graph.roots() {
        if marks[root.index()] == Mark::Done {
            continue;
        }
        marks[root.index()] = Mark::InProgress;
        // Stack frames are (provider, next dependency index).
        let mut stack: Vec<(ProviderId, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let deps = graph.deps(id);

            if next >= deps.len() {
                marks[id.index()] = Mark::Done;
                plan.push(id);
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let dep = deps[next];
            match marks[dep.index()] {
                Mark::Done => {}
                Mark::InProgress => {
                    return Err(ResolveError::CircularDependency {
                        provider: providers.get(dep).qualified_name(),
                    });
                }
                Mark::Unvisited => {
                    marks[dep.index()] = Mark::InProgress;
                    stack.push((dep, 0));
                }
            }
        }
    }

    tracing::debug!(providers = plan.len(), "ordered construction plan");
    Ok(plan)
}
