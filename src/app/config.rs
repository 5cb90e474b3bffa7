use crate::app::cli::Cli;
use crate::app::models::CollectorConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "server";
pub const DEFAULT_OUTPUT: &str = "project_context.txt";
pub const DEFAULT_EXTENSIONS: &[&str] = &[".go", ".proto", ".mod"];
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".git", ".idea", "bin", "obj", "vendor"];

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub ignore_dirs: Option<Vec<String>>,
    pub sorted: Option<bool>,
}

/// Reads `~/.config/project_context/presets.toml`, if there is one.
pub fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("project_context")
        .join("presets.toml");

    if !config_path.exists() {
        log::debug!("No presets file at {:?}", config_path);
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config at {:?}", config_path))?;

    parse_presets(&content).with_context(|| format!("Failed to parse {:?}", config_path))
}

pub fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content)?;
    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Option<Vec<String>> {
    if preset_vec.is_none() && cli_vec.is_none() {
        return None;
    }
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    Some(combined)
}

fn defaults(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn normalize_extension(ext: &str) -> Result<String> {
    let trimmed = ext.trim();
    if trimmed.is_empty() || trimmed == "." {
        bail!("Empty file extension in configuration");
    }
    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{}", trimmed))
    }
}

pub fn resolve_config(
    cli: &Cli,
    presets: &HashMap<String, PresetConfig>,
    project_name: Option<&str>,
) -> Result<CollectorConfig> {
    // Determine preset to use: CLI flag > Auto-detect > None
    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .with_context(|| format!("Unknown preset '{}'", name))?,
        None => project_name
            .and_then(|k| presets.get(k))
            .cloned()
            .unwrap_or_default(),
    };

    let extensions = merge_vecs(preset.extensions, cli.extensions.clone())
        .unwrap_or_else(|| defaults(DEFAULT_EXTENSIONS));
    let allowed_extensions = extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect::<Result<BTreeSet<_>>>()?;

    let ignore_dirs = merge_vecs(preset.ignore_dirs, cli.ignore_dirs.clone())
        .unwrap_or_else(|| defaults(DEFAULT_IGNORE_DIRS))
        .into_iter()
        .collect();

    let config = CollectorConfig {
        root: cli
            .root
            .clone()
            .or(preset.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        allowed_extensions,
        ignore_dirs,
        output: cli
            .output
            .clone()
            .or(preset.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        sorted: cli.sorted || preset.sorted.unwrap_or(false),
    };

    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
