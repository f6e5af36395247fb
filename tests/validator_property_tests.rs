//! Property-based tests for delivery date validation and order enrichment
//!
//! These use proptest to check the rules that must hold for every date,
//! every "now" and every configured lead time, not just hand picked cases.

use chrono::{Days, NaiveDate, NaiveDateTime};
use delivery_date::{
    apply_quote,
    order::Order,
    policy::DeliveryPolicy,
    quote::Quote,
    validator::{ValidationOutcome, validate},
};
use proptest::prelude::*;

// PROPERTY TEST STRATEGIES

/// Strategy to generate a "now" anywhere in a decade, at any time of day
fn now_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2020i32..=2030, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

/// Strategy to generate any configured lead time, negatives included
fn lead_days_strategy() -> impl Strategy<Value = i64> {
    -30i64..=30
}

fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// PROPERTY TESTS
proptest! {
    /// Property: absent or blank dates are accepted whatever the policy
    #[test]
    fn prop_blank_dates_always_accepted(
        now in now_strategy(),
        lead in lead_days_strategy(),
        blank in prop_oneof![Just(None), Just(Some("")), Just(Some("  "))],
    ) {
        prop_assert_eq!(
            validate(blank, now, &DeliveryPolicy::new(lead)),
            ValidationOutcome::Accepted
        );
    }

    /// Property: any date before today is rejected as past
    #[test]
    fn prop_dates_before_today_are_past(
        now in now_strategy(),
        lead in lead_days_strategy(),
        back in 1u64..=365,
    ) {
        let candidate = date_string(now.date() - Days::new(back));
        let outcome = validate(Some(candidate.as_str()), now, &DeliveryPolicy::new(lead));

        prop_assert_eq!(outcome.reason(), Some("past_date"));
    }

    /// Property: a negative lead time behaves exactly like zero
    #[test]
    fn prop_negative_lead_time_equals_zero(
        now in now_strategy(),
        lead in -30i64..0,
        offset in 0u64..=10,
    ) {
        let candidate = date_string(now.date() + Days::new(offset));

        prop_assert_eq!(
            validate(Some(candidate.as_str()), now, &DeliveryPolicy::new(lead)),
            validate(Some(candidate.as_str()), now, &DeliveryPolicy::new(0))
        );
    }

    /// Property: on or after the earliest allowed date is always accepted
    #[test]
    fn prop_at_or_after_earliest_is_accepted(
        now in now_strategy(),
        lead in lead_days_strategy(),
        extra in 0u64..=60,
    ) {
        let earliest = now.date() + Days::new(lead.max(0) as u64);
        let candidate = date_string(earliest + Days::new(extra));

        prop_assert!(validate(Some(candidate.as_str()), now, &DeliveryPolicy::new(lead)).is_accepted());
    }

    /// Property: between today and the earliest date, the rejection names the earliest date
    #[test]
    fn prop_inside_lead_time_names_earliest(
        now in now_strategy(),
        lead in 1i64..=30,
        seed in any::<u64>(),
    ) {
        let offset = seed % lead as u64;
        let candidate = date_string(now.date() + Days::new(offset));
        let outcome = validate(Some(candidate.as_str()), now, &DeliveryPolicy::new(lead));

        let ValidationOutcome::Rejected(err) = outcome else {
            return Err(TestCaseError::fail("expected a lead time rejection"));
        };
        prop_assert_eq!(err.reason(), "below_lead_time");
        prop_assert_eq!(err.detail(), date_string(now.date() + Days::new(lead as u64)));
    }

    /// Property: validation is pure, the same inputs give the same outcome
    #[test]
    fn prop_validation_is_deterministic(
        now in now_strategy(),
        lead in lead_days_strategy(),
        offset in -5i64..=40,
    ) {
        let date = now.date().checked_add_signed(chrono::Duration::days(offset)).unwrap();
        let candidate = date_string(date);
        let policy = DeliveryPolicy::new(lead);

        prop_assert_eq!(
            validate(Some(candidate.as_str()), now, &policy),
            validate(Some(candidate.as_str()), now, &policy)
        );
    }

    /// Property: a rejected quote never changes the order, an accepted one
    /// sets exactly the two delivery fields
    #[test]
    fn prop_enrichment_is_all_or_nothing(
        now in now_strategy(),
        lead in lead_days_strategy(),
        offset in -5i64..=40,
        instructions in "[a-z ]{0,24}",
    ) {
        let date = now.date().checked_add_signed(chrono::Duration::days(offset)).unwrap();
        let quote = Quote::new("q-prop")
            .set_delivery_date(date_string(date))
            .set_delivery_instructions(instructions.clone());
        let policy = DeliveryPolicy::new(lead);
        let mut order = Order::new("100000099", "q-prop").set_delivery_comment("call ahead");
        let before = order.clone();

        let accepted = validate(quote.delivery_date(), now, &policy).is_accepted();
        let result = apply_quote(&mut order, &quote, now, &policy);

        prop_assert_eq!(result.is_ok(), accepted);
        if accepted {
            prop_assert_eq!(order.delivery_instructions(), Some(instructions.as_str()));
            prop_assert_eq!(order.delivery_date(), quote.delivery_date());
            prop_assert_eq!(&order.increment_id, &before.increment_id);
            prop_assert_eq!(&order.delivery_comment, &before.delivery_comment);
        } else {
            prop_assert_eq!(order, before);
        }
    }
}
