//! Chain registry validation

use std::collections::HashSet;
use wallet_session_types::{ChainDescriptor, Currency};

use crate::{ChainRegistry, ConfigError, Result};

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a whole registry, collecting every problem before failing.
pub fn validate_registry(registry: &ChainRegistry) -> Result<()> {
    let mut errors = Vec::new();

    if registry.chains.is_empty() {
        errors.push(ValidationError::new(
            "chains",
            "at least one chain must be configured",
        ));
    }

    let ids: HashSet<_> = registry.chains.iter().map(|c| &c.chain_id).collect();
    if ids.len() != registry.chains.len() {
        errors.push(ValidationError::new("chains", "duplicate chain ids found"));
    }

    for descriptor in &registry.chains {
        collect_descriptor_errors(descriptor, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::ValidationError(joined))
    }
}

/// Validate a single descriptor.
pub fn validate_descriptor(descriptor: &ChainDescriptor) -> Result<()> {
    let mut errors = Vec::new();
    collect_descriptor_errors(descriptor, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::ValidationError(joined))
    }
}

fn collect_descriptor_errors(descriptor: &ChainDescriptor, errors: &mut Vec<ValidationError>) {
    let prefix = if descriptor.chain_id.is_empty() {
        "chains.<unnamed>".to_string()
    } else {
        format!("chains.{}", descriptor.chain_id)
    };

    if descriptor.chain_id.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.chain_id"),
            "chain id is required",
        ));
    }

    if !descriptor.rpc_endpoint.starts_with("http://")
        && !descriptor.rpc_endpoint.starts_with("https://")
    {
        errors.push(ValidationError::new(
            format!("{prefix}.rpc_endpoint"),
            "must be an http(s) URL",
        ));
    }

    collect_currency_errors(
        &descriptor.stake_currency,
        &format!("{prefix}.stake_currency"),
        errors,
    );

    if descriptor.fee_currencies.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.fee_currencies"),
            "at least one fee currency is required",
        ));
    }
    for (idx, currency) in descriptor.fee_currencies.iter().enumerate() {
        collect_currency_errors(currency, &format!("{prefix}.fee_currencies[{idx}]"), errors);
    }
}

fn collect_currency_errors(currency: &Currency, field: &str, errors: &mut Vec<ValidationError>) {
    if currency.coin_denom.is_empty() {
        errors.push(ValidationError::new(
            format!("{field}.coin_denom"),
            "denomination code is required",
        ));
    }
    if currency.coin_minimal_denom.is_empty() {
        errors.push(ValidationError::new(
            format!("{field}.coin_minimal_denom"),
            "minimal denomination code is required",
        ));
    }
    if currency.coin_decimals > 18 {
        errors.push(ValidationError::new(
            format!("{field}.coin_decimals"),
            "must be <= 18",
        ));
    }
}
