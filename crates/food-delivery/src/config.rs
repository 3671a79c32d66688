use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::model::FULL_RATE_BPS;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pricing and validation rules applied at checkout.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Tax on the discounted subtotal, in basis points (1500 = 15%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
    #[serde(default = "default_delivery_fee_cents")]
    pub delivery_fee_cents: u64,
    /// Smallest subtotal accepted for an order.
    #[serde(default = "default_minimum_order_cents")]
    pub minimum_order_cents: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: default_tax_rate_bps(),
            delivery_fee_cents: default_delivery_fee_cents(),
            minimum_order_cents: default_minimum_order_cents(),
        }
    }
}

fn default_tax_rate_bps() -> u32 {
    1500
}

fn default_delivery_fee_cents() -> u64 {
    500
}

fn default_minimum_order_cents() -> u64 {
    1000
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Request channel capacity of the order store.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    32
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOOD_DELIVERY__CHECKOUT__TAX_RATE_BPS, etc.)
    /// 2. Config file at `config_path`, else `FOOD_DELIVERY_CONFIG`, else `food-delivery.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("checkout.tax_rate_bps", default_tax_rate_bps() as i64)?
            .set_default("checkout.delivery_fee_cents", default_delivery_fee_cents() as i64)?
            .set_default("checkout.minimum_order_cents", default_minimum_order_cents() as i64)?
            .set_default("store.buffer_size", default_buffer_size() as i64)?
            .set_default("logging.filter", default_log_filter())?;

        let config_file_path = config_path
            .or_else(|| env::var("FOOD_DELIVERY_CONFIG").ok())
            .unwrap_or_else(|| "food-delivery.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOOD_DELIVERY")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkout.tax_rate_bps > FULL_RATE_BPS {
            return Err(ConfigError::Message(format!(
                "checkout.tax_rate_bps must be at most {FULL_RATE_BPS}, got {}",
                self.checkout.tax_rate_bps
            )));
        }
        if self.store.buffer_size < 1 {
            return Err(ConfigError::Message(
                "store.buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.checkout.tax_rate_bps, 1500);
        assert_eq!(config.checkout.delivery_fee_cents, 500);
        assert_eq!(config.checkout.minimum_order_cents, 1000);
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_keeps_unset_defaults() {
        let path = env::temp_dir().join(format!("food-delivery-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[checkout]\ntax_rate_bps = 800\n\n[store]\nbuffer_size = 4\n").unwrap();

        let config = AppConfig::load(Some(path.to_string_lossy().into_owned())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.checkout.tax_rate_bps, 800);
        assert_eq!(config.checkout.delivery_fee_cents, 500);
        assert_eq!(config.store.buffer_size, 4);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_validation_rejects_rate_above_full() {
        let mut config = AppConfig::default();
        config.checkout.tax_rate_bps = 12_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_buffer() {
        let mut config = AppConfig::default();
        config.store.buffer_size = 0;
        assert!(config.validate().is_err());
    }
}
