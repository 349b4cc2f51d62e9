//! Output formatting for JSON, YAML and human-readable text
//!
//! Formatters only render; callers decide where the text goes.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::classify::ClassificationReport;
use crate::config::ModuleTypesConfig;
use crate::types::{aliases_for, ModuleType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Serializable summary of one module type, as listed by `types`
#[derive(Debug, Clone, Serialize)]
pub struct TypeInfo {
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub name: &'static str,
    pub description: &'static str,
    pub aliases: Vec<&'static str>,
}

impl From<ModuleType> for TypeInfo {
    fn from(module_type: ModuleType) -> Self {
        Self {
            module_type,
            name: module_type.display_name(),
            description: module_type.description(),
            aliases: aliases_for(module_type).collect(),
        }
    }
}

/// Result of resolving one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub token: String,
    #[serde(rename = "type")]
    pub module_type: Option<ModuleType>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_types(&self, types: &[ModuleType]) -> Result<String> {
        let infos: Vec<TypeInfo> = types.iter().copied().map(TypeInfo::from).collect();
        match self.format {
            OutputFormat::Json => self.to_json(&infos, "module types"),
            OutputFormat::Yaml => self.to_yaml(&infos, "module types"),
            OutputFormat::Human => Ok(Self::types_human(&infos)),
        }
    }

    pub fn format_resolutions(&self, resolutions: &[Resolution]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.to_json(resolutions, "resolutions"),
            OutputFormat::Yaml => self.to_yaml(resolutions, "resolutions"),
            OutputFormat::Human => Ok(Self::resolutions_human(resolutions)),
        }
    }

    pub fn format_report(&self, report: &ClassificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.to_json(report, "classification report"),
            OutputFormat::Yaml => self.to_yaml(report, "classification report"),
            OutputFormat::Human => Ok(Self::report_human(report)),
        }
    }

    pub fn format_config(&self, config: &ModuleTypesConfig) -> Result<String> {
        let map: BTreeMap<_, _> = config.to_display_map().into_iter().collect();
        match self.format {
            OutputFormat::Json => self.to_json(&map, "config"),
            OutputFormat::Yaml => self.to_yaml(&map, "config"),
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, what: &str) -> Result<String> {
        serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {} to JSON", what))
    }

    fn to_yaml<T: Serialize + ?Sized>(&self, value: &T, what: &str) -> Result<String> {
        serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {} to YAML", what))
    }

    // Human-readable formatting methods

    fn types_human(infos: &[TypeInfo]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Supported module types:");
        for info in infos {
            let _ = writeln!(
                out,
                "  {:<18} {:<18} {}",
                info.module_type.as_str(),
                info.name,
                info.description
            );
            let _ = writeln!(out, "  {:<18} aliases: {}", "", info.aliases.join(", "));
        }
        out
    }

    fn resolutions_human(resolutions: &[Resolution]) -> String {
        let mut out = String::new();
        for resolution in resolutions {
            let resolved = resolution
                .module_type
                .map(|t| t.as_str())
                .unwrap_or("unknown");
            let _ = writeln!(out, "{:?} -> {}", resolution.token, resolved);
        }
        out
    }

    fn report_human(report: &ClassificationReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Classified {} module(s):", report.modules.len());
        for module in &report.modules {
            let _ = writeln!(
                out,
                "  {:<20} {:<30} {} (from {:?})",
                module.name, module.path, module.module_type, module.raw_type
            );
        }
        if !report.skipped.is_empty() {
            let _ = writeln!(
                out,
                "Skipped {} module(s) with unknown type:",
                report.skipped.len()
            );
            for module in &report.skipped {
                let _ = writeln!(
                    out,
                    "  {:<20} {:<30} {:?}",
                    module.name, module.path, module.raw_type
                );
            }
        }
        out
    }
}
