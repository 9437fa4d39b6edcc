use crate::models::{input::ForestConditions, output::DangerIndices};

use super::{config::NFDRSModelConfig, functions::get_output_fn};

/// National Fire Danger Rating System, daily indices.
/// Source: Deeming et al., "National Fire-Danger Rating System", USDA Forest Service (1972)
///
/// The calculator does not keep any state between calls: the build up index
/// of the previous day is part of the conditions and the updated value is
/// part of the returned indices.
#[derive(Debug, Clone, Default)]
pub struct DangerCalculator {
    config: NFDRSModelConfig,
}

impl DangerCalculator {
    pub fn new(config: NFDRSModelConfig) -> Self {
        Self { config }
    }

    pub fn model_version(&self) -> &str {
        &self.config.model_version
    }

    /// Compute the indices for a single observation
    pub fn compute(&self, conditions: &ForestConditions) -> DangerIndices {
        get_output_fn(conditions, &self.config)
    }
}

/// Compute the indices with the default model configuration
pub fn compute(conditions: &ForestConditions) -> DangerIndices {
    DangerCalculator::default().compute(conditions)
}
