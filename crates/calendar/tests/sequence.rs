use toolbelt_calendar::{CalendarDate, date_sequence};

#[test]
fn leap_year_month_boundaries() {
    let start = CalendarDate::new(2024, 1, 1).unwrap();
    let dates = date_sequence(start, 366).unwrap();
    assert_eq!(dates.len(), 366);

    // Index 30: Jan 31
    assert_eq!(dates[30], CalendarDate::new(2024, 1, 31).unwrap());
    // Index 59: Feb 29
    assert_eq!(dates[59], CalendarDate::new(2024, 2, 29).unwrap());
    // Index 60: Mar 1
    assert_eq!(dates[60], CalendarDate::new(2024, 3, 1).unwrap());
    // Index 365: Dec 31
    assert_eq!(dates[365], CalendarDate::new(2024, 12, 31).unwrap());
}

#[test]
fn sequence_is_strictly_increasing() {
    let start = CalendarDate::new(-1, 11, 1).unwrap();
    let dates = date_sequence(start, 1000).unwrap();
    for pair in dates.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        assert_eq!(pair[0].days_until(pair[1]), 1);
    }
}

#[test]
fn length_always_matches() {
    let start = CalendarDate::new(2000, 1, 1).unwrap();
    for n_days in [0, 1, 100, 365, 366, 1000] {
        let dates = date_sequence(start, n_days).unwrap();
        assert_eq!(
            dates.len(),
            n_days,
            "expected length {n_days}, got {}",
            dates.len()
        );
    }
}
