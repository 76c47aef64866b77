//! Dependency graph construction
//!
//! [`ProviderSet`] is built once per generation batch and is immutable
//! afterwards: a provider table plus lookup indices by result type and by
//! qualified name (strict: duplicate qualified names fail the whole batch
//! before any container resolves). [`build_graph`] then resolves one
//! container against the set.
//!
//! Field resolution precedence, highest first: an explicit `provider:`
//! directive, then a type override contributed by a blank field, then a
//! unique by-type match. Provider parameters resolve by override and
//! unique type only; directives never reach inherited parameters.
//!
//! The adjacency of every provider is derived once from its own parameter
//! list, independent of which field first reached it, so the graph shape
//! never depends on traversal order.

use std::collections::HashMap;

use rivet_frontend::TypeKey;
use rivet_scan::Directive;

use crate::error::{ResolveError, ResolveResult};
use crate::model::{ContainerField, Provider, ProviderId};

/// Three-state visitation marker for cycle detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// The immutable provider table and its lookup indices for one batch
#[derive(Debug)]
pub struct ProviderSet {
    providers: Vec<Provider>,
    by_type: HashMap<TypeKey, Vec<ProviderId>>,
    by_name: HashMap<String, ProviderId>,
    by_short_name: HashMap<String, Vec<ProviderId>>,
}

impl ProviderSet {
    /// Index the given providers.
    ///
    /// Fails when two providers share a qualified name, whether or not
    /// either of them is ever referenced by a container.
    pub fn new(providers: Vec<Provider>) -> ResolveResult<Self> {
        let mut by_type: HashMap<TypeKey, Vec<ProviderId>> = HashMap::new();
        let mut by_name: HashMap<String, ProviderId> = HashMap::new();
        let mut by_short_name: HashMap<String, Vec<ProviderId>> = HashMap::new();
        let mut conflicts: Vec<String> = Vec::new();

        for (i, provider) in providers.iter().enumerate() {
            let id = ProviderId(i);
            let qualified = provider.qualified_name();

            if let Some(existing) = by_name.get(&qualified) {
                conflicts.push(format!(
                    "provider {} declared at {} conflicts with declaration at {}",
                    qualified,
                    providers[existing.index()].position,
                    provider.position,
                ));
                continue;
            }

            by_type.entry(provider.result.clone()).or_default().push(id);
            by_name.insert(qualified, id);
            by_short_name
                .entry(provider.name.clone())
                .or_default()
                .push(id);
        }

        if !conflicts.is_empty() {
            return Err(ResolveError::NameConflicts(conflicts.join("\n")));
        }

        tracing::debug!(providers = providers.len(), "indexed provider set");
        Ok(Self {
            providers,
            by_type,
            by_name,
            by_short_name,
        })
    }

    /// The provider behind an id
    pub fn get(&self, id: ProviderId) -> &Provider {
        &self.providers[id.index()]
    }

    /// Number of providers in the set
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the set holds no providers
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate over all providers with their ids
    pub fn iter(&self) -> impl Iterator<Item = (ProviderId, &Provider)> {
        self.providers
            .iter()
            .enumerate()
            .map(|(i, p)| (ProviderId(i), p))
    }

    fn candidates_for(&self, ty: &TypeKey) -> &[ProviderId] {
        self.by_type.get(ty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve a directive name: exact qualified match first, then the
    /// suffix after the last scope separator against short names.
    fn lookup_named(&self, name: &str) -> ResolveResult<ProviderId> {
        if let Some(&id) = self.by_name.get(name) {
            return Ok(id);
        }

        let short = match name.rfind('.') {
            Some(i) if i + 1 < name.len() => &name[i + 1..],
            _ => name,
        };
        match self
            .by_short_name
            .get(short)
            .map(Vec::as_slice)
            .unwrap_or(&[])
        {
            [] => Err(ResolveError::ProviderNotFound {
                name: name.to_string(),
            }),
            [id] => Ok(*id),
            _ => Err(ResolveError::AmbiguousProviderName {
                name: name.to_string(),
            }),
        }
    }
}

/// A resolved dependency graph for one container
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    roots: Vec<ProviderId>,
    adjacency: HashMap<ProviderId, Vec<ProviderId>>,
}

impl DependencyGraph {
    /// Root providers, one per non-blank field, in field order
    pub fn roots(&self) -> &[ProviderId] {
        &self.roots
    }

    /// Resolved dependencies of a provider, in parameter order
    pub fn deps(&self, id: ProviderId) -> &[ProviderId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the graph has no roots
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Resolve a container's fields against the provider set.
///
/// Field-local and parameter-local errors are collected across the whole
/// container and joined. A circular dependency aborts immediately with no
/// partial graph.
pub fn build_graph(
    fields: &[ContainerField],
    providers: &ProviderSet,
) -> ResolveResult<DependencyGraph> {
    let overrides = collect_overrides(fields, providers)?;

    let mut builder = GraphBuilder {
        providers,
        overrides,
        marks: vec![Mark::Unvisited; providers.len()],
        adjacency: HashMap::new(),
        errors: Vec::new(),
    };

    let mut roots = Vec::new();
    for field in fields {
        if field.name.is_blank() {
            // Override-only; not a graph root.
            continue;
        }
        match builder.resolve_field(field) {
            Ok(id) => {
                builder.expand(id)?;
                roots.push(id);
            }
            Err(err) => builder.errors.push(err),
        }
    }

    if !builder.errors.is_empty() {
        return Err(ResolveError::multiple(builder.errors));
    }

    Ok(DependencyGraph {
        roots,
        adjacency: builder.adjacency,
    })
}

/// Type overrides declared by blank fields: `field type -> provider`.
///
/// An unresolvable override directive is fatal for the container.
fn collect_overrides(
    fields: &[ContainerField],
    providers: &ProviderSet,
) -> ResolveResult<HashMap<TypeKey, ProviderId>> {
    let mut out = HashMap::new();
    for field in fields {
        if !field.name.is_blank() {
            continue;
        }
        let name = match field.directive.provider_name() {
            Some(name) => name,
            None => continue,
        };
        let id = providers.lookup_named(name)?;
        tracing::debug!(
            ty = %field.ty,
            provider = %providers.get(id).qualified_name(),
            "type override"
        );
        out.insert(field.ty.clone(), id);
    }
    Ok(out)
}

struct GraphBuilder<'a> {
    providers: &'a ProviderSet,
    overrides: HashMap<TypeKey, ProviderId>,
    marks: Vec<Mark>,
    adjacency: HashMap<ProviderId, Vec<ProviderId>>,
    errors: Vec<ResolveError>,
}

struct Frame {
    id: ProviderId,
    deps: Vec<ProviderId>,
    next: usize,
}

impl<'a> GraphBuilder<'a> {
    fn resolve_field(&mut self, field: &ContainerField) -> ResolveResult<ProviderId> {
        match &field.directive {
            Directive::ByName(name) => {
                let id = self.providers.lookup_named(name)?;
                let provider = self.providers.get(id);
                if provider.result != field.ty {
                    return Err(ResolveError::ResultTypeMismatch {
                        provider: provider.qualified_name(),
                        returns: provider.result.clone(),
                        field: field.name.to_string(),
                        requires: field.ty.clone(),
                    });
                }
                Ok(id)
            }
            Directive::ByType => self.resolve_requirement(&field.ty, None),
        }
    }

    /// Resolve a type requirement: override first, then unique type match.
    fn resolve_requirement(
        &self,
        ty: &TypeKey,
        required_by: Option<&Provider>,
    ) -> ResolveResult<ProviderId> {
        if let Some(&id) = self.overrides.get(ty) {
            return Ok(id);
        }
        match self.providers.candidates_for(ty) {
            [] => Err(ResolveError::NoProvider {
                ty: ty.clone(),
                required_by: required_by.map(Provider::qualified_name),
            }),
            [id] => Ok(*id),
            _ => Err(ResolveError::MultipleProviders {
                ty: ty.clone(),
                required_by: required_by.map(Provider::qualified_name),
            }),
        }
    }

    /// Expand the dependency subtree under `start`, depth-first with an
    /// explicit stack. Only cycles return an error; unresolved parameters
    /// accumulate in `self.errors`.
    fn expand(&mut self, start: ProviderId) -> ResolveResult<()> {
        if self.marks[start.index()] == Mark::Done {
            return Ok(());
        }

        let deps = self.resolve_params(start);
        self.marks[start.index()] = Mark::InProgress;
        let mut stack = vec![Frame {
            id: start,
            deps,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.deps.len() {
                self.marks[frame.id.index()] = Mark::Done;
                stack.pop();
                continue;
            }
            let dep = frame.deps[frame.next];
            frame.next += 1;

            match self.marks[dep.index()] {
                Mark::Done => {}
                Mark::InProgress => {
                    return Err(ResolveError::CircularDependency {
                        provider: self.providers.get(dep).qualified_name(),
                    });
                }
                Mark::Unvisited => {
                    let deps = self.resolve_params(dep);
                    self.marks[dep.index()] = Mark::InProgress;
                    stack.push(Frame { id: dep, deps, next: 0 });
                }
            }
        }

        Ok(())
    }

    /// Resolve a provider's parameters into dependency ids and record the
    /// adjacency entry. Failed parameters are reported and skipped.
    fn resolve_params(&mut self, id: ProviderId) -> Vec<ProviderId> {
        let provider = self.providers.get(id);
        let mut deps = Vec::with_capacity(provider.params.len());
        for ty in &provider.params {
            match self.resolve_requirement(ty, Some(provider)) {
                Ok(dep) => deps.push(dep),
                Err(err) => self.errors.push(err),
            }
        }
        self.adjacency.insert(id, deps.clone());
        deps
    }
}
