use serde::Deserialize;

use crate::domain::DeliveryWindow;

/// Runtime settings.
///
/// Sources, later ones winning: built-in defaults, an optional
/// `config/shop.{toml,yaml,json}` file, then `SHOP__*` environment variables
/// (e.g. `SHOP__INITIAL_STOCK=50`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShopConfig {
    pub initial_stock: u32,
    pub delivery_min_days: i64,
    pub delivery_max_days: i64,
    pub channel_buffer: usize,
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            initial_stock: 20,
            delivery_min_days: 3,
            delivery_max_days: 6,
            channel_buffer: 32,
            log_filter: "warn".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let s = config::Config::builder()
            .set_default("initial_stock", i64::from(defaults.initial_stock))?
            .set_default("delivery_min_days", defaults.delivery_min_days)?
            .set_default("delivery_max_days", defaults.delivery_max_days)?
            .set_default("channel_buffer", defaults.channel_buffer as i64)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(config::File::with_name("config/shop").required(false))
            .add_source(config::Environment::with_prefix("SHOP").separator("__").try_parsing(true))
            .build()?;

        let loaded: Self = s.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.delivery_min_days < 1 {
            return Err(config::ConfigError::Message(
                "delivery_min_days must be at least 1".to_string(),
            ));
        }
        if self.delivery_min_days > self.delivery_max_days {
            return Err(config::ConfigError::Message(format!(
                "delivery_min_days ({}) exceeds delivery_max_days ({})",
                self.delivery_min_days, self.delivery_max_days
            )));
        }
        if self.channel_buffer == 0 {
            return Err(config::ConfigError::Message("channel_buffer must be positive".to_string()));
        }
        Ok(())
    }

    pub fn delivery_window(&self) -> DeliveryWindow {
        DeliveryWindow {
            min_days: self.delivery_min_days,
            max_days: self.delivery_max_days,
        }
    }
}
