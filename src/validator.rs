//! Delivery date validation against the store lead time
use super::delivery_date::{DeliveryDate, DeliveryRequest};
use super::error::ValidationError;
use super::policy::DeliveryPolicy;
use chrono::{Days, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(ValidationError),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(err) => Some(err.reason()),
        }
    }
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationOutcome::Accepted => Ok(()),
            ValidationOutcome::Rejected(err) => Err(err),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(value: Result<(), ValidationError>) -> Self {
        match value {
            Ok(()) => ValidationOutcome::Accepted,
            Err(err) => ValidationOutcome::Rejected(err),
        }
    }
}

/// First calendar day a delivery may be scheduled for
pub fn earliest_allowed_date(now: NaiveDateTime, policy: &DeliveryPolicy) -> NaiveDate {
    now.date()
        .checked_add_days(Days::new(policy.effective_min_days()))
        .unwrap_or(NaiveDate::MAX)
}

/// Check a raw checkout value. Absent or blank input is always accepted.
pub fn validate(candidate: Option<&str>, now: NaiveDateTime, policy: &DeliveryPolicy) -> ValidationOutcome {
    DeliveryRequest::new(candidate, now)
        .and_then(|request| check_request(&request, policy))
        .into()
}

pub fn check_request(request: &DeliveryRequest, policy: &DeliveryPolicy) -> Result<(), ValidationError> {
    match &request.candidate {
        Some(candidate) => check_date(candidate, request.now, policy),
        None => Ok(()),
    }
}

fn check_date(candidate: &DeliveryDate, now: NaiveDateTime, policy: &DeliveryPolicy) -> Result<(), ValidationError> {
    if candidate.is_past(now) {
        return Err(ValidationError::PastDate);
    }

    let earliest = earliest_allowed_date(now, policy);
    if candidate.date() < earliest {
        return Err(ValidationError::BelowLeadTime { earliest });
    }

    Ok(())
}
