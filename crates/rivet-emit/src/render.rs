//! Rendering of resolved containers into Go source text
//!
//! One [`EmitUnit`] corresponds to one destination file. Rendering is pure
//! string construction: every decision that could fail (resolution,
//! ordering) has already happened upstream, so the only inputs here are
//! valid plans.
//!
//! Providers are invoked in plan order and bound to sequential local
//! variables; fallible constructors short-circuit the factory, which then
//! returns `(Container, error)` instead of a bare value.

use std::collections::{BTreeMap, HashMap, HashSet};

use rivet_resolve::{Container, DependencyGraph, ProviderId, ProviderSet};

/// Everything needed to emit one container's factory
#[derive(Debug, Clone)]
pub struct ContainerPlan {
    /// The resolved container
    pub container: Container,
    /// Its dependency graph
    pub graph: DependencyGraph,
    /// Ordered construction plan, dependency-first
    pub plan: Vec<ProviderId>,
}

/// All containers destined for one output file
#[derive(Debug, Clone)]
pub struct EmitUnit {
    /// Local module name the generated file belongs to
    pub module_name: String,
    /// Containers in discovery order
    pub containers: Vec<ContainerPlan>,
}

impl EmitUnit {
    /// Start a unit with a single container.
    pub fn new(module_name: String, first: ContainerPlan) -> Self {
        Self {
            module_name,
            containers: vec![first],
        }
    }

    /// Add another container to the same destination.
    pub fn push(&mut self, plan: ContainerPlan) {
        self.containers.push(plan);
    }
}

/// Render a unit into complete Go source for its destination file.
pub fn render(unit: &EmitUnit, providers: &ProviderSet) -> String {
    let imports = collect_imports(unit, providers);

    let mut out = String::new();
    out.push_str("// Code generated by rivet. DO NOT EDIT.\n\n");
    out.push_str(&format!("package {}\n", unit.module_name));

    if !imports.is_empty() {
        out.push_str("\nimport (\n");
        for (path, alias) in &imports {
            out.push_str(&format!("\t{alias} \"{path}\"\n"));
        }
        out.push_str(")\n");
    }

    for plan in &unit.containers {
        out.push('\n');
        render_factory(&mut out, plan, providers, &imports);
    }

    tracing::debug!(
        module = %unit.module_name,
        containers = unit.containers.len(),
        "rendered emission unit"
    );
    out
}

/// Imported module paths mapped to their local aliases, sorted by path.
fn collect_imports(unit: &EmitUnit, providers: &ProviderSet) -> BTreeMap<String, String> {
    let mut names: BTreeMap<String, String> = BTreeMap::new();
    for plan in &unit.containers {
        for &id in &plan.plan {
            let provider = providers.get(id);
            if provider.module_path != plan.container.module_path {
                names
                    .entry(provider.module_path.clone())
                    .or_insert_with(|| provider.module_name.clone());
            }
        }
    }

    let mut taken: HashSet<String> = HashSet::new();
    let mut imports = BTreeMap::new();
    for (path, base) in names {
        let mut alias = base.clone();
        let mut n = 2;
        while !taken.insert(alias.clone()) {
            alias = format!("{base}{n}");
            n += 1;
        }
        imports.insert(path, alias);
    }
    imports
}

fn render_factory(
    out: &mut String,
    plan: &ContainerPlan,
    providers: &ProviderSet,
    imports: &BTreeMap<String, String>,
) {
    let container = &plan.container;
    let fallible = plan.plan.iter().any(|&id| providers.get(id).may_fail);

    if fallible {
        out.push_str(&format!(
            "func {}() ({}, error) {{\n",
            container.factory_name(),
            container.name
        ));
    } else {
        out.push_str(&format!(
            "func {}() {} {{\n",
            container.factory_name(),
            container.name
        ));
    }

    let slot: HashMap<ProviderId, usize> = plan
        .plan
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    for (i, &id) in plan.plan.iter().enumerate() {
        let provider = providers.get(id);
        let args = plan
            .graph
            .deps(id)
            .iter()
            .map(|dep| format!("v{}", slot[dep]))
            .collect::<Vec<_>>()
            .join(", ");
        let call = if provider.module_path == container.module_path {
            format!("{}({})", provider.name, args)
        } else {
            format!("{}.{}({})", imports[&provider.module_path], provider.name, args)
        };

        if provider.may_fail {
            out.push_str(&format!("\tv{i}, err := {call}\n"));
            out.push_str("\tif err != nil {\n");
            out.push_str(&format!("\t\treturn {}{{}}, err\n", container.name));
            out.push_str("\t}\n");
        } else {
            out.push_str(&format!("\tv{i} := {call}\n"));
        }
    }

    out.push_str(&format!("\treturn {}{{\n", container.name));
    let mut roots = plan.graph.roots().iter();
    for field in &container.fields {
        if field.name.is_blank() {
            continue;
        }
        if let Some(root) = roots.next() {
            out.push_str(&format!("\t\t{}: v{},\n", field.name, slot[root]));
        }
    }
    if fallible {
        out.push_str("\t}, nil\n");
    } else {
        out.push_str("\t}\n");
    }
    out.push_str("}\n");
}
