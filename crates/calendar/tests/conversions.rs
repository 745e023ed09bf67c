use ethio_calendar::{
    EthiopianDate, GregorianDate, MONTH_NAMES, ethiopian_days_in_month, from_gregorian,
    new_year_day, to_ethiopian,
};

/// Every valid Gregorian date in the 1900..=2099 window, in order.
fn window_dates() -> impl Iterator<Item = GregorianDate> {
    (1900..=2099).flat_map(|year| {
        (1..=12u8).flat_map(move |month| {
            (1..=31u8).filter_map(move |day| GregorianDate::new(year, month, day).ok())
        })
    })
}

#[test]
fn full_window_month_and_day_bounds() {
    for date in window_dates() {
        let eth = to_ethiopian(date);
        assert!(
            (1..=13).contains(&eth.month()),
            "month out of range for {date:?}: {}",
            eth.month()
        );
        let max_day = if eth.month() == 13 { 6 } else { 30 };
        assert!(
            (1..=max_day).contains(&eth.day()),
            "day out of range for {date:?}: {} {}",
            eth.month(),
            eth.day()
        );
    }
}

#[test]
fn full_window_succession() {
    let mut prev: Option<EthiopianDate> = None;
    for date in window_dates() {
        let eth = to_ethiopian(date);
        if let Some(prev) = prev {
            assert!(prev < eth, "conversion not increasing at {date:?}");
            if eth.month() == 1 && eth.day() == 1 {
                // New Year: the previous day closed Pagume of the prior
                // Ethiopian year.
                assert_eq!(eth.year(), prev.year() + 1, "year skip at {date:?}");
                assert_eq!(prev.month(), 13, "new year not after Pagume at {date:?}");
                assert!(
                    (5..=6).contains(&prev.day()),
                    "Pagume ended on day {} at {date:?}",
                    prev.day()
                );
            } else if eth.day() == 1 {
                assert_eq!(eth.year(), prev.year(), "year changed mid-year at {date:?}");
                assert_eq!(eth.month(), prev.month() + 1, "month skip at {date:?}");
                assert_eq!(prev.day(), 30, "month ended early at {date:?}");
            } else {
                assert_eq!(eth.year(), prev.year(), "year changed at {date:?}");
                assert_eq!(eth.month(), prev.month(), "month changed at {date:?}");
                assert_eq!(eth.day(), prev.day() + 1, "day skip at {date:?}");
            }
        }
        prev = Some(eth);
    }
}

#[test]
fn pagume_length_matches_leap_rule() {
    // EC 2091 straddles the 2100 century exception, where the anchor rule
    // and the mod-4 rule part ways; every transition before it agrees.
    for year in 1901..=2098 {
        let anchor = new_year_day(year);
        let eve = GregorianDate::new(year, 9, anchor.day() - 1).unwrap();
        let eth = to_ethiopian(eve);
        assert_eq!(eth.month(), 13, "eve of New Year {year} not in Pagume");
        assert_eq!(
            eth.day(),
            ethiopian_days_in_month(eth.year(), 13).unwrap(),
            "Pagume length mismatch before New Year {year}"
        );
    }
}

#[test]
fn month_name_always_consistent() {
    for date in window_dates() {
        let eth = to_ethiopian(date);
        assert_eq!(
            eth.month_name(),
            MONTH_NAMES[(eth.month() - 1) as usize],
            "name/month mismatch for {date:?}"
        );
    }
}

#[test]
fn deterministic_across_calls() {
    let a = from_gregorian(2020, 2, 29).unwrap();
    let b = from_gregorian(2020, 2, 29).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}
