//! Warehouse alerts for orders flagged as fragile
use super::error::NotificationError;
use super::order::Order;
use super::utils::new_alert_id;
use std::sync::Arc;
use tracing::{debug, info};

pub const FRAGILE_KEYWORD: &str = "fragile";
pub const WAREHOUSE_TEMPLATE: &str = "warehouse_alert_email_template";
pub const WAREHOUSE_RECIPIENT: &str = "warehouse@example.com";
pub const SENDER_NAME: &str = "Store System";
pub const SENDER_EMAIL: &str = "noreply@example.com";

pub trait Notifier {
    fn send_warehouse_alert(&self, order: &Order) -> Result<(), NotificationError>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send_warehouse_alert(&self, order: &Order) -> Result<(), NotificationError> {
        (**self).send_warehouse_alert(order)
    }
}

/// Plain case-insensitive substring test, no tokenising.
pub fn contains_fragile_keyword(text: &str) -> bool {
    text.to_ascii_lowercase().contains(FRAGILE_KEYWORD)
}

pub struct FragileShipmentNotifier<N> {
    notifier: N,
}

impl<N: Notifier> FragileShipmentNotifier<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
    /// Sends at most one alert. Returns whether one was sent.
    pub fn maybe_notify(&self, order: &Order) -> Result<bool, NotificationError> {
        match order.instructions_text() {
            Some(text) if contains_fragile_keyword(text) => {
                self.notifier.send_warehouse_alert(order)?;
                info!(order = %order.increment_id, "warehouse alerted to fragile shipment");
                Ok(true)
            }
            _ => {
                debug!(order = %order.increment_id, "no fragile handling requested");
                Ok(false)
            }
        }
    }
}

// The message handed to the warehouse channel
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct WarehouseAlert {
    #[n(0)]
    pub alert_id: String,
    #[n(1)]
    pub template: String,
    #[n(2)]
    pub sender_name: String,
    #[n(3)]
    pub sender_email: String,
    #[n(4)]
    pub recipient: String,
    #[n(5)]
    pub order_increment_id: String,
    #[n(6)]
    pub instructions: Option<String>,
    #[n(7)]
    pub delivery_date: Option<String>,
}

impl WarehouseAlert {
    pub fn for_order(alert_id: String, order: &Order) -> Self {
        Self {
            alert_id,
            template: WAREHOUSE_TEMPLATE.into(),
            sender_name: SENDER_NAME.into(),
            sender_email: SENDER_EMAIL.into(),
            recipient: WAREHOUSE_RECIPIENT.into(),
            order_increment_id: order.increment_id.clone(),
            instructions: order.instructions_text().map(str::to_string),
            delivery_date: order.delivery_date().map(str::to_string),
        }
    }
}

/// Queues alerts in the `warehouse_outbox` tree for the mail transport to pick up.
#[derive(Clone)]
pub struct OutboxNotifier {
    tree: sled::Tree,
}

impl OutboxNotifier {
    pub const TREE: &'static str = "warehouse_outbox";

    pub fn open(instance: &Arc<sled::Db>) -> Result<Self, NotificationError> {
        Ok(Self {
            tree: instance.open_tree(Self::TREE)?,
        })
    }
    /// Queued alerts, oldest first. Keys are raw uuid7 bytes so sled's
    /// byte order is creation order.
    pub fn pending(&self) -> anyhow::Result<Vec<WarehouseAlert>> {
        let mut alerts = Vec::new();
        for entry in self.tree.iter() {
            let (_, bytes) = entry?;
            alerts.push(minicbor::decode(&bytes)?);
        }
        Ok(alerts)
    }
}

impl Notifier for OutboxNotifier {
    fn send_warehouse_alert(&self, order: &Order) -> Result<(), NotificationError> {
        let (key, alert_id) = new_alert_id()?;
        let alert = WarehouseAlert::for_order(alert_id, order);
        self.tree.insert(key, minicbor::to_vec(&alert)?)?;
        Ok(())
    }
}
