//! Attaches canonical module types to configuration records.
//!
//! This is the caller side of the resolver: it decides what an unresolved
//! type means for a scan, according to the configured [`UnknownTypePolicy`].

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::UnknownTypePolicy;
use crate::config::ModuleConfig;
use crate::types::{resolve, ModuleType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Module '{name}' has unknown type '{raw_type}'")]
    UnknownModuleType { name: String, raw_type: String },
}

/// A module record with its resolved type attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedModule {
    pub name: String,
    pub path: String,
    pub raw_type: String,
    pub module_type: ModuleType,
}

/// Outcome of classifying a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    /// Records whose type resolved, in input order
    pub modules: Vec<ClassifiedModule>,
    /// Records dropped because their type did not resolve
    pub skipped: Vec<ModuleConfig>,
}

impl ClassificationReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Classified modules of one type, for handing to that type's analyzer.
    pub fn of_type(&self, module_type: ModuleType) -> impl Iterator<Item = &ClassifiedModule> {
        self.modules
            .iter()
            .filter(move |m| m.module_type == module_type)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    policy: UnknownTypePolicy,
}

impl Classifier {
    pub fn new(policy: UnknownTypePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownTypePolicy {
        self.policy
    }

    /// Classifies one record.
    ///
    /// Returns `Ok(None)` when the type does not resolve and the policy lets
    /// the record be dropped.
    pub fn classify(&self, module: &ModuleConfig) -> Result<Option<ClassifiedModule>, ClassifyError> {
        if let Some(module_type) = resolve(&module.raw_type) {
            debug!(
                name = %module.name,
                raw_type = %module.raw_type,
                module_type = %module_type,
                "Resolved module type"
            );
            return Ok(Some(ClassifiedModule {
                name: module.name.clone(),
                path: module.path.clone(),
                raw_type: module.raw_type.clone(),
                module_type,
            }));
        }

        match self.policy {
            UnknownTypePolicy::Skip => {
                debug!(name = %module.name, raw_type = %module.raw_type, "Skipping module with unknown type");
                Ok(None)
            }
            UnknownTypePolicy::Warn => {
                warn!(
                    name = %module.name,
                    path = %module.path,
                    raw_type = %module.raw_type,
                    "Skipping module with unknown type"
                );
                Ok(None)
            }
            UnknownTypePolicy::Fail => Err(ClassifyError::UnknownModuleType {
                name: module.name.clone(),
                raw_type: module.raw_type.clone(),
            }),
        }
    }

    pub fn classify_all(&self, modules: &[ModuleConfig]) -> Result<ClassificationReport, ClassifyError> {
        let mut report = ClassificationReport::default();

        for module in modules {
            match self.classify(module)? {
                Some(classified) => report.modules.push(classified),
                None => report.skipped.push(module.clone()),
            }
        }

        info!(
            classified = report.modules.len(),
            skipped = report.skipped.len(),
            policy = %self.policy,
            "Classified modules"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_modules() -> Vec<ModuleConfig> {
        vec![
            ModuleConfig::new("web", "./web", "commonjspackage"),
            ModuleConfig::new("legacy", "./legacy", "npm"),
            ModuleConfig::new("api", "./api", "mvn"),
            ModuleConfig::new("tools", "./tools", "go"),
        ]
    }

    #[test]
    fn test_classify_known_type() {
        let classifier = Classifier::default();
        let classified = classifier
            .classify(&ModuleConfig::new("app", ".", "rubygems"))
            .unwrap()
            .unwrap();

        assert_eq!(classified.module_type, ModuleType::Ruby);
        assert_eq!(classified.raw_type, "rubygems");
        assert_eq!(classified.name, "app");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = Classifier::default();
        let module = ModuleConfig::new("svc", "cmd/svc", "gopackage");
        assert_eq!(
            classifier.classify(&module).unwrap(),
            classifier.classify(&module).unwrap()
        );
    }

    #[test]
    fn test_warn_policy_skips_unknown() {
        let report = Classifier::new(UnknownTypePolicy::Warn)
            .classify_all(&sample_modules())
            .unwrap();

        let names: Vec<_> = report.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["web", "api", "tools"]);
        assert_eq!(report.skipped, vec![ModuleConfig::new("legacy", "./legacy", "npm")]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_skip_policy_skips_unknown() {
        let report = Classifier::new(UnknownTypePolicy::Skip)
            .classify_all(&sample_modules())
            .unwrap();
        assert_eq!(report.modules.len(), 3);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_fail_policy_aborts() {
        let err = Classifier::new(UnknownTypePolicy::Fail)
            .classify_all(&sample_modules())
            .unwrap_err();

        assert_eq!(
            err,
            ClassifyError::UnknownModuleType {
                name: "legacy".to_string(),
                raw_type: "npm".to_string(),
            }
        );
    }

    #[test]
    fn test_of_type() {
        let report = Classifier::default().classify_all(&sample_modules()).unwrap();
        let maven: Vec<_> = report.of_type(ModuleType::Maven).collect();
        assert_eq!(maven.len(), 1);
        assert_eq!(maven[0].path, "./api");
        assert_eq!(report.of_type(ModuleType::Bower).count(), 0);
    }

    #[test]
    fn test_empty_input() {
        let report = Classifier::new(UnknownTypePolicy::Fail).classify_all(&[]).unwrap();
        assert!(report.modules.is_empty());
        assert!(report.is_complete());
    }
}
