//! Checkout settings read from the environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use validator::Validate;

use crate::domain::value_objects::ProductId;

pub const PRODUCT_ID_VAR: &str = "STORE_PRODUCT_ID";
pub const DISCOUNT_PERCENT_VAR: &str = "STORE_DISCOUNT_PERCENT";
pub const COUPON_CODE_VAR: &str = "STORE_COUPON_CODE";
pub const ACCEPTED_COUPONS_VAR: &str = "STORE_ACCEPTED_COUPONS";

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CheckoutConfig {
    pub product_id: ProductId,
    #[validate(range(min = 0, max = 100))]
    pub discount_percent: u32,
    #[validate(length(min = 1, max = 64))]
    pub coupon_code: String,
    pub accepted_coupons: Vec<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            product_id: ProductId::new(1),
            discount_percent: 0,
            coupon_code: "DISCOUNT10".to_string(),
            accepted_coupons: vec!["DISCOUNT10".to_string()],
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid value: {value}")]
    Parse { var: &'static str, value: String },
    #[error("invalid checkout settings: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl CheckoutConfig {
    /// Reads the process environment. Callers load `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            product_id: parse_or(&lookup, PRODUCT_ID_VAR, defaults.product_id.value()).map(ProductId::new)?,
            discount_percent: parse_or(&lookup, DISCOUNT_PERCENT_VAR, defaults.discount_percent)?,
            coupon_code: lookup(COUPON_CODE_VAR).map(|c| c.trim().to_string()).unwrap_or(defaults.coupon_code),
            accepted_coupons: lookup(ACCEPTED_COUPONS_VAR)
                .map(|list| split_codes(&list))
                .unwrap_or(defaults.accepted_coupons),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Parse { var, value }),
        None => Ok(default),
    }
}

fn split_codes(list: &str) -> Vec<String> {
    list.split(',').map(str::trim).filter(|c| !c.is_empty()).map(String::from).collect()
}
