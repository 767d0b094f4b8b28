use crate::engine::errors::TimechartError;
use crate::shared::datetime::interval::TimeUnit;

#[test]
fn units_convert_with_fixed_calendar_lengths() {
    assert_eq!(TimeUnit::Microsecond.interval_millis(500), 0);
    assert_eq!(TimeUnit::Millisecond.interval_millis(250), 250);
    assert_eq!(TimeUnit::Centisecond.interval_millis(3), 30);
    assert_eq!(TimeUnit::Decisecond.interval_millis(3), 300);
    assert_eq!(TimeUnit::Second.interval_millis(2), 2_000);
    assert_eq!(TimeUnit::Minute.interval_millis(1), 60_000);
    assert_eq!(TimeUnit::Hour.interval_millis(1), 3_600_000);
    assert_eq!(TimeUnit::Day.interval_millis(1), 86_400_000);
    assert_eq!(TimeUnit::Week.interval_millis(1), 7 * 86_400_000);
    assert_eq!(TimeUnit::Month.interval_millis(1), 30 * 86_400_000);
    assert_eq!(TimeUnit::Quarter.interval_millis(1), 120 * 86_400_000);
}

#[test]
fn huge_counts_saturate() {
    assert_eq!(TimeUnit::Quarter.interval_millis(u64::MAX), u64::MAX);
}

#[test]
fn parses_span_suffixes() {
    assert_eq!("min".parse::<TimeUnit>(), Ok(TimeUnit::Minute));
    assert_eq!("MS".parse::<TimeUnit>(), Ok(TimeUnit::Millisecond));
    assert_eq!("hours".parse::<TimeUnit>(), Ok(TimeUnit::Hour));
    assert_eq!("mon".parse::<TimeUnit>(), Ok(TimeUnit::Month));
    assert_eq!("qtr".parse::<TimeUnit>(), Ok(TimeUnit::Quarter));
    assert_eq!(
        "fortnight".parse::<TimeUnit>(),
        Err(TimechartError::UnknownTimeUnit("fortnight".into()))
    );
}

#[test]
fn display_round_trips_through_from_str() {
    for unit in [TimeUnit::Second, TimeUnit::Week, TimeUnit::Quarter] {
        assert_eq!(unit.to_string().parse::<TimeUnit>(), Ok(unit));
    }
}
