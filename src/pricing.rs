use std::collections::HashMap;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;

pub const PRICING_VERSION: &str = "anthropic-2025-05";

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

/// USD per million tokens.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub const fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }

    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / TOKENS_PER_UNIT) * self.input_per_million
            + (output_tokens as f64 / TOKENS_PER_UNIT) * self.output_per_million
    }
}

pub const FALLBACK_PRICING: ModelPricing = ModelPricing::new(3.0, 15.0);

static BUILTIN_PRICING: phf::Map<&'static str, ModelPricing> = phf_map! {
    "claude-opus-4-20250514" => ModelPricing::new(15.0, 75.0),
    "claude-sonnet-4-20250514" => ModelPricing::new(3.0, 15.0),
    "claude-3-7-sonnet-20250219" => ModelPricing::new(3.0, 15.0),
    "claude-3-5-sonnet-20241022" => ModelPricing::new(3.0, 15.0),
    "claude-3-5-haiku-20241022" => ModelPricing::new(0.8, 4.0),
    "claude-3-haiku-20240307" => ModelPricing::new(0.25, 1.25),
};

/// Configured rates layered over the built-in table.
#[derive(Debug, Clone)]
pub struct PricingTable {
    version: String,
    overrides: HashMap<String, ModelPricing>,
    fallback: ModelPricing,
}

impl PricingTable {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            version: config.version.clone(),
            overrides: config.models.clone(),
            fallback: config.fallback,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rate_for(&self, model: &str) -> ModelPricing {
        if let Some(pricing) = self.overrides.get(model) {
            return *pricing;
        }
        match BUILTIN_PRICING.get(model) {
            Some(pricing) => *pricing,
            None => {
                log::debug!("no pricing for model {model:?}, using fallback rate");
                self.fallback
            }
        }
    }

    pub fn estimate(&self, model: &str, input_tokens: u64, output_tokens: u64) -> f64 {
        self.rate_for(model).cost(input_tokens, output_tokens)
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}
