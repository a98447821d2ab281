// Property-based tests for the immediate charge payload
//
// - Amount is always rendered with exactly two fraction digits
// - The payer note carries the same rendered amount
// - Expiration is the decimal string of the given seconds

use pixcharge::config::ChargeSettings;
use pixcharge::pix::ChargeRequest;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

fn settings() -> ChargeSettings {
    ChargeSettings {
        pix_key: "loja@gamerstore.com.br".to_string(),
        payer_note_prefix: "Pedido Gamer Store".to_string(),
    }
}

fn fraction_digits(formatted: &str) -> Option<usize> {
    formatted.split_once('.').map(|(_, fraction)| fraction.len())
}

#[test]
fn test_known_amounts() {
    for (amount, expected) in [
        (dec!(19.9), "19.90"),
        (dec!(100), "100.00"),
        (dec!(0.5), "0.50"),
        (dec!(150.00), "150.00"),
        (dec!(12.345), "12.35"),
    ] {
        let request = ChargeRequest::new(amount, 3600, &settings());
        assert_eq!(request.amount(), expected);
        assert_eq!(
            request.payer_note,
            format!("Pedido Gamer Store R${}", expected)
        );
    }
}

#[test]
fn test_expiration_string() {
    let request = ChargeRequest::new(dec!(10), 3600, &settings());
    assert_eq!(request.expiration(), "3600");
}

#[test]
fn test_pix_key_is_copied_from_settings() {
    let request = ChargeRequest::new(dec!(10), 60, &settings());
    assert_eq!(request.pix_key, "loja@gamerstore.com.br");
}

proptest! {
    #[test]
    fn test_amount_always_has_two_decimals(
        units in 0u64..100_000_000u64,
        scale in 0u32..=6u32
    ) {
        let amount = Decimal::new(units as i64, scale);
        let request = ChargeRequest::new(amount, 3600, &settings());

        prop_assert_eq!(fraction_digits(request.amount()), Some(2));
    }

    #[test]
    fn test_amount_preserves_cents(cents in 1u64..10_000_000_000u64) {
        let amount = Decimal::new(cents as i64, 2);
        let request = ChargeRequest::new(amount, 3600, &settings());

        let parsed = Decimal::from_str(request.amount()).unwrap();
        prop_assert_eq!(parsed, amount);
    }

    #[test]
    fn test_rounding_error_below_half_cent(
        units in 0u64..100_000_000u64,
        scale in 3u32..=6u32
    ) {
        let amount = Decimal::new(units as i64, scale);
        let request = ChargeRequest::new(amount, 3600, &settings());

        let parsed = Decimal::from_str(request.amount()).unwrap();
        prop_assert!((parsed - amount).abs() <= dec!(0.005));
    }

    #[test]
    fn test_note_contains_formatted_amount(cents in 1u64..10_000_000_000u64) {
        let amount = Decimal::new(cents as i64, 2);
        let request = ChargeRequest::new(amount, 3600, &settings());

        let expected = format!("R${}", request.amount());
        prop_assert!(request.payer_note.contains(&expected));
    }

    #[test]
    fn test_expiration_is_decimal_string(seconds in 1u32..=u32::MAX) {
        let request = ChargeRequest::new(dec!(1), seconds, &settings());

        prop_assert_eq!(request.expiration(), seconds.to_string());
        prop_assert_eq!(request.expiration().parse::<u32>().unwrap(), seconds);
    }
}
