use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date selected, please select date after today.")]
    PastDate,
    #[error(
        "Delivery on the selected date is not possible. The earliest delivery is on {earliest} or later."
    )]
    BelowLeadTime { earliest: NaiveDate },
    #[error("Invalid date selected, '{0}' is not a recognised date.")]
    InvalidDate(String),
}

impl ValidationError {
    /// Machine readable tag for the rejection
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::PastDate => "past_date",
            ValidationError::BelowLeadTime { .. } => "below_lead_time",
            ValidationError::InvalidDate(_) => "invalid_date",
        }
    }
    pub fn detail(&self) -> String {
        match self {
            ValidationError::PastDate => "selected date must be after today".into(),
            ValidationError::BelowLeadTime { earliest } => earliest.to_string(),
            ValidationError::InvalidDate(raw) => raw.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Quote with id '{0}' does not exist")]
    QuoteNotFound(String),
    #[error("Quote storage failed: {0}")]
    Storage(#[from] sled::Error),
    #[error("Stored quote could not be decoded: {0}")]
    Decode(#[from] minicbor::decode::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config storage failed: {0}")]
    Storage(#[from] sled::Error),
    #[error("Stored config value could not be decoded: {0}")]
    Decode(#[from] minicbor::decode::Error),
    #[error("Config value could not be encoded: {0}")]
    Encode(#[from] minicbor::encode::Error<std::convert::Infallible>),
}

#[derive(thiserror::Error, Debug)]
pub enum NotificationError {
    #[error("Warehouse outbox unavailable: {0}")]
    Transport(#[from] sled::Error),
    #[error("Warehouse alert could not be encoded: {0}")]
    Encode(#[from] minicbor::encode::Error<std::convert::Infallible>),
    #[error("Warehouse alert id could not be generated: {0}")]
    AlertId(#[from] bech32::EncodeError),
    #[error("Warehouse alert was refused: {0}")]
    Rejected(String),
}

/// Everything that can stop an order from being enriched
#[derive(thiserror::Error, Debug)]
pub enum EnrichError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
