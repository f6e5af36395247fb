//! Copies delivery details from the checkout quote onto the placed order
use super::clock::{Clock, SystemClock};
use super::error::{EnrichError, ValidationError};
use super::order::Order;
use super::policy::{ConfigLookup, DeliveryPolicy};
use super::quote::{Quote, QuoteLookup};
use super::validator::validate;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Validate the quote's delivery date, then copy instructions and date in that
/// order. A rejection leaves the order untouched.
pub fn apply_quote(
    order: &mut Order,
    quote: &Quote,
    now: NaiveDateTime,
    policy: &DeliveryPolicy,
) -> Result<(), ValidationError> {
    validate(quote.delivery_date(), now, policy).into_result()?;

    order.write_delivery_instructions(quote.delivery_instructions.clone());
    order.write_delivery_date(quote.delivery_date.clone());
    Ok(())
}

pub struct OrderEnricher<Q, C, K = SystemClock> {
    quotes: Q,
    config: C,
    clock: K,
}

impl<Q: QuoteLookup, C: ConfigLookup> OrderEnricher<Q, C> {
    pub fn new(quotes: Q, config: C) -> Self {
        Self::with_clock(quotes, config, SystemClock)
    }
}

impl<Q: QuoteLookup, C: ConfigLookup, K: Clock> OrderEnricher<Q, C, K> {
    pub fn with_clock(quotes: Q, config: C, clock: K) -> Self {
        Self {
            quotes,
            config,
            clock,
        }
    }

    pub fn enrich(&self, order: &mut Order) -> Result<(), EnrichError> {
        let quote = self.quotes.get(&order.quote_id)?;
        let policy = DeliveryPolicy::for_scope(&self.config, &order.store_code)?;

        if let Err(err) = apply_quote(order, &quote, self.clock.now(), &policy) {
            warn!(
                order = %order.increment_id,
                quote = %quote.id,
                reason = err.reason(),
                "delivery date rejected"
            );
            return Err(err.into());
        }

        debug!(
            order = %order.increment_id,
            delivery_date = order.delivery_date().unwrap_or_default(),
            "delivery details copied from quote"
        );
        Ok(())
    }
}
