use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use skeledle_domain::{diagram_label, Catalog};
use skeledle_engine::infrastructure::catalog_file::load_catalog_file;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("catalog-check") => {
            let path = args
                .next()
                .context("Usage: cargo xtask catalog-check <path>")?;
            catalog_check(Path::new(&path))
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  catalog-check <path>"
        ),
    }
}

/// Validate a catalog file the same way the engine does at startup.
fn catalog_check(path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog_file(path)
        .with_context(|| format!("checking catalog {}", path.display()))?;

    println!("{}: {} parts OK", path.display(), catalog.len());
    for line in summary(&catalog) {
        println!("  {line}");
    }
    Ok(())
}

fn summary(catalog: &Catalog) -> Vec<String> {
    let mut by_system: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_region: BTreeMap<&str, usize> = BTreeMap::new();
    for part in catalog.all() {
        *by_system.entry(part.system().key()).or_default() += 1;
        *by_region.entry(part.region().key()).or_default() += 1;
    }

    let mut lines = Vec::new();
    for (system, count) in by_system {
        lines.push(format!("system {system}: {count}"));
    }
    for (region, count) in by_region {
        lines.push(format!("region {region}: {count}"));
    }
    for asset in catalog.diagrams() {
        lines.push(format!(
            "diagram '{}': {} parts",
            diagram_label(Some(asset)),
            catalog.on_diagram(asset).len()
        ));
    }
    lines
}
