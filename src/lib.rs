pub mod clock;
pub mod delivery_date;
pub mod enricher;
pub mod error;
pub mod notifier;
pub mod order;
pub mod policy;
pub mod quote;
pub mod service;
pub mod utils;
pub mod validator;

pub use enricher::{OrderEnricher, apply_quote};
pub use error::{EnrichError, LookupError, NotificationError, ValidationError};
pub use notifier::{FragileShipmentNotifier, Notifier, contains_fragile_keyword};
pub use policy::DeliveryPolicy;
pub use validator::{ValidationOutcome, validate};
