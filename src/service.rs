//! Event handlers for order placement and order save
use super::clock::{Clock, SystemClock};
use super::enricher::OrderEnricher;
use super::notifier::{FragileShipmentNotifier, OutboxNotifier, WarehouseAlert};
use super::order::{Order, SledOrderRepository};
use super::policy::{SledConfig, XML_PATH_MIN_DAYS};
use super::quote::{Quote, SledQuoteRepository};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

pub struct DeliveryService<K = SystemClock> {
    enricher: OrderEnricher<SledQuoteRepository, SledConfig, K>,
    fragile: FragileShipmentNotifier<OutboxNotifier>,
    quotes: SledQuoteRepository,
    config: SledConfig,
    orders: SledOrderRepository,
    outbox: OutboxNotifier,
}

impl DeliveryService {
    pub fn new(instance: Arc<sled::Db>) -> anyhow::Result<Self> {
        Self::with_clock(instance, SystemClock)
    }
}

impl<K: Clock> DeliveryService<K> {
    pub fn with_clock(instance: Arc<sled::Db>, clock: K) -> anyhow::Result<Self> {
        let quotes = SledQuoteRepository::open(&instance)?;
        let config = SledConfig::open(&instance)?;
        let outbox = OutboxNotifier::open(&instance)?;

        // cloned trees share one underlying sled handle
        Ok(Self {
            enricher: OrderEnricher::with_clock(quotes.clone(), config.clone(), clock),
            fragile: FragileShipmentNotifier::new(outbox.clone()),
            quotes,
            config,
            orders: SledOrderRepository::open(&instance)?,
            outbox,
        })
    }

    /// Store a checkout quote so the order placed from it can be enriched
    pub fn save_quote(&self, quote: &Quote) -> anyhow::Result<()> {
        self.quotes
            .save(quote)
            .with_context(|| format!("Failed to save quote {}", quote.id))
    }

    pub fn set_min_delivery_days(&self, scope: &str, days: i64) -> anyhow::Result<()> {
        self.config.set_value(scope, XML_PATH_MIN_DAYS, days)?;
        info!(scope, days, "minimum delivery lead time updated");
        Ok(())
    }

    /// Order placement: validate and copy delivery details, then persist.
    /// A rejected date blocks placement and nothing is written.
    pub fn place_order(&self, order: &mut Order) -> anyhow::Result<()> {
        self.enricher
            .enrich(order)
            .context("Order placement blocked")?;

        self.orders.save(order)?;
        info!(order = %order.increment_id, quote = %order.quote_id, "order placed");
        Ok(())
    }

    /// Order save: persist, then alert the warehouse if the instructions ask
    /// for fragile handling. Returns whether an alert went out.
    pub fn save_order(&self, order: &Order) -> anyhow::Result<bool> {
        self.orders.save(order)?;

        let alerted = self
            .fragile
            .maybe_notify(order)
            .with_context(|| format!("Warehouse alert failed for order {}", order.increment_id))?;
        Ok(alerted)
    }

    pub fn load_order(&self, increment_id: &str) -> anyhow::Result<Order> {
        self.orders.load(increment_id)
    }

    pub fn warehouse_alerts(&self) -> anyhow::Result<Vec<WarehouseAlert>> {
        self.outbox.pending()
    }
}
