//! Store delivery policy and where it is read from
use super::error::ConfigError;
use std::sync::Arc;

/// Config path holding the minimum number of days between checkout and delivery
pub const XML_PATH_MIN_DAYS: &str = "sales/delivery_settings/min_delivery_days";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryPolicy {
    pub min_lead_days: i64,
}

impl DeliveryPolicy {
    pub fn new(min_lead_days: i64) -> Self {
        Self { min_lead_days }
    }
    /// Resolve the policy for a store scope
    pub fn for_scope<C: ConfigLookup + ?Sized>(config: &C, scope: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(config.min_delivery_lead_days(scope)?))
    }
    /// Negative configuration is clamped to zero, never rejected.
    pub fn effective_min_days(&self) -> u64 {
        self.min_lead_days.max(0) as u64
    }
}

pub trait ConfigLookup {
    fn min_delivery_lead_days(&self, scope: &str) -> Result<i64, ConfigError>;
}

/// Same lead time for every store
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConfig(pub i64);

impl ConfigLookup for StaticConfig {
    fn min_delivery_lead_days(&self, _scope: &str) -> Result<i64, ConfigError> {
        Ok(self.0)
    }
}

/// Config values kept in a sled tree, keyed `"{scope}/{path}"`.
#[derive(Clone)]
pub struct SledConfig {
    tree: sled::Tree,
}

impl SledConfig {
    pub const TREE: &'static str = "config";

    pub fn open(instance: &Arc<sled::Db>) -> Result<Self, ConfigError> {
        Ok(Self {
            tree: instance.open_tree(Self::TREE)?,
        })
    }
    fn key(scope: &str, path: &str) -> String {
        format!("{scope}/{path}")
    }
    pub fn set_value(&self, scope: &str, path: &str, value: i64) -> Result<(), ConfigError> {
        let encoded = minicbor::to_vec(value)?;
        self.tree.insert(Self::key(scope, path).as_bytes(), encoded)?;
        Ok(())
    }
    /// A missing value reads as zero, same as a null config cast to int.
    pub fn get_value(&self, scope: &str, path: &str) -> Result<i64, ConfigError> {
        match self.tree.get(Self::key(scope, path).as_bytes())? {
            Some(bytes) => Ok(minicbor::decode::<i64>(&bytes)?),
            None => Ok(0),
        }
    }
}

impl ConfigLookup for SledConfig {
    fn min_delivery_lead_days(&self, scope: &str) -> Result<i64, ConfigError> {
        self.get_value(scope, XML_PATH_MIN_DAYS)
    }
}
