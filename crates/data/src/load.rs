use crate::schema::CatalogFile;
use anyhow::Context;
use gambit_core::{ActionDef, Catalog, StackRule};
use std::fs;
use std::path::Path;

/// Outcome of the lenient load path: always yields a usable catalog, and
/// carries the reason when the file had to be ignored.
#[derive(Debug)]
pub struct CatalogLoadReport {
    pub catalog: Catalog,
    pub warning: Option<String>,
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(raw)?;
    Ok(compile(file))
}

/// A missing or malformed definitions file must not take the game down;
/// fall back to the built-ins and report what went wrong.
pub fn load_catalog_or_builtin(path: &Path) -> CatalogLoadReport {
    if !path.exists() {
        return CatalogLoadReport {
            catalog: Catalog::builtin(),
            warning: None,
        };
    }
    match load_catalog(path) {
        Ok(catalog) => CatalogLoadReport {
            catalog,
            warning: None,
        },
        Err(err) => CatalogLoadReport {
            catalog: Catalog::builtin(),
            warning: Some(format!("{err:#}")),
        },
    }
}

fn compile(file: CatalogFile) -> Catalog {
    let actions = file
        .actions
        .into_iter()
        .map(|(name, entry)| ActionDef {
            name,
            group: entry.group,
            icon: entry.icon,
            energy_cost: entry.energy_cost,
            roll: entry.roll,
            stack_with: StackRule::parse(entry.stack_with.as_deref()),
            on_hit: entry.on_hit,
            desc: entry.desc,
            exclusive: entry.exclusive,
        })
        .collect();
    let common_actions = if file.common_actions.is_empty() {
        Catalog::builtin().common_actions
    } else {
        file.common_actions
    };
    Catalog {
        actions,
        common_actions,
    }
}
