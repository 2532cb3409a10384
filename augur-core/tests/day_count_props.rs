use augur_core::{GatewayError, PredictionRequest, day_count};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn day_count_is_exact_for_forward_ranges(start_off in 0u64..20_000, len in 0u64..5_000) {
        let start = base().checked_add_days(Days::new(start_off)).unwrap();
        let end = start.checked_add_days(Days::new(len)).unwrap();
        prop_assert_eq!(u64::from(day_count(start, end).unwrap()), len);

        let req = PredictionRequest::new("MSFT", start, end).unwrap();
        prop_assert_eq!(req.end_date(), end);
    }

    #[test]
    fn reversed_ranges_are_rejected(start_off in 1u64..20_000, back in 1u64..1_000) {
        let start = base().checked_add_days(Days::new(start_off + back)).unwrap();
        let end = base().checked_add_days(Days::new(start_off)).unwrap();
        prop_assert!(matches!(day_count(start, end), Err(GatewayError::InvalidRequest(_))));
    }
}
