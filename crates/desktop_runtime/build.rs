use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const HIDDEN_GROUP: &str = "hidden";

#[derive(Debug, Clone, Deserialize)]
struct FolderManifest {
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectManifest {
    id: String,
    #[serde(default)]
    related_project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    folders: Vec<FolderManifest>,
    #[serde(default)]
    projects: BTreeMap<String, Vec<ProjectManifest>>,
}

fn validate(manifest: &CatalogManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }

    let mut folder_ids = BTreeSet::new();
    for folder in &manifest.folders {
        if folder.id.trim().is_empty() {
            panic!("empty folder id in {path}");
        }
        if !folder_ids.insert(folder.id.as_str()) {
            panic!("duplicate folder id `{}` in {path}", folder.id);
        }
    }

    let mut project_ids = BTreeSet::new();
    for (group, projects) in &manifest.projects {
        if group != HIDDEN_GROUP && !folder_ids.contains(group.as_str()) {
            panic!("project group `{group}` in {path} is not a declared folder");
        }
        for project in projects {
            if !project_ids.insert(project.id.as_str()) {
                panic!("duplicate project id `{}` in {path}", project.id);
            }
        }
    }

    for project in manifest.projects.values().flatten() {
        if let Some(related) = project.related_project_id.as_deref() {
            if !project_ids.contains(related) {
                panic!(
                    "project `{}` in {path} links unknown related project `{related}`",
                    project.id
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("portfolio.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let value: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let json = serde_json::to_string_pretty(&value).expect("serialize portfolio catalog");
    let generated = format!(
        "/// Build-time generated portfolio catalog JSON.\n\
pub const PORTFOLIO_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("portfolio_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
