//! Classification of module configuration records.

pub mod classifier;
pub mod policy;

pub use classifier::{ClassificationReport, ClassifiedModule, Classifier, ClassifyError};
pub use policy::UnknownTypePolicy;
