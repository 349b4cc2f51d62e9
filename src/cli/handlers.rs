//! Subcommand handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use super::commands::{ClassifyArgs, ConfigArgs, ResolveArgs, TypesArgs};
use super::output::{OutputFormatter, Resolution};
use crate::classify::Classifier;
use crate::config::{ModuleManifest, ModuleTypesConfig};
use crate::types::{resolve, ModuleType};

fn emit(rendered: Result<String>) -> i32 {
    match rendered {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

pub fn handle_types(args: &TypesArgs) -> i32 {
    let formatter = OutputFormatter::new(args.format.into());
    emit(formatter.format_types(ModuleType::all()))
}

pub fn handle_resolve(args: &ResolveArgs) -> i32 {
    let resolutions: Vec<Resolution> = args
        .tokens
        .iter()
        .map(|token| Resolution {
            token: token.clone(),
            module_type: resolve(token),
        })
        .collect();

    let unknown = resolutions.iter().filter(|r| r.module_type.is_none()).count();
    debug!(tokens = resolutions.len(), unknown, "Resolved tokens");

    let formatter = OutputFormatter::new(args.format.into());
    match emit(formatter.format_resolutions(&resolutions)) {
        0 if unknown > 0 => 1,
        code => code,
    }
}

pub fn handle_classify(args: &ClassifyArgs, config: &ModuleTypesConfig) -> i32 {
    match classify_manifest(args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

fn classify_manifest(args: &ClassifyArgs, config: &ModuleTypesConfig) -> Result<i32> {
    let policy = config.unknown_policy;

    info!(manifest = %args.manifest.display(), %policy, "Classifying modules");

    let manifest = ModuleManifest::from_path(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    let report = Classifier::new(policy)
        .classify_all(&manifest.modules)
        .context("Classification aborted")?;

    let formatter = OutputFormatter::new(args.format.into());
    Ok(emit(formatter.format_report(&report)))
}

pub fn handle_config(args: &ConfigArgs, config: &ModuleTypesConfig) -> i32 {
    let formatter = OutputFormatter::new(args.format.into());
    emit(formatter.format_config(config))
}
