// Derived statistics: mean, percent trend, lower-is-better classification

use enose_dashboard::models::{SeriesSet, TimeSeries, TrendLabel};
use enose_dashboard::stats;

fn series(samples: &[u32]) -> TimeSeries {
    TimeSeries::from_samples(samples.to_vec())
}

#[test]
fn average_of_series() {
    assert_eq!(stats::average(&series(&[10, 20, 30])), Some(20.0));
    assert_eq!(stats::average(&series(&[7])), Some(7.0));
}

#[test]
fn average_of_empty_series_is_none() {
    assert_eq!(stats::average(&series(&[])), None);
}

#[test]
fn percent_trend_against_baseline() {
    assert_eq!(stats::percent_trend(110.0, 100.0), Some(10.0));
    assert_eq!(stats::percent_trend(45.0, 50.0), Some(-10.0));
}

#[test]
fn percent_trend_guards_zero_baseline() {
    assert_eq!(stats::percent_trend(10.0, 0.0), None);
    assert_eq!(stats::percent_trend(0.0, 0.0), None);
}

#[test]
fn classify_trend_lower_is_better() {
    assert_eq!(stats::classify_trend(-6.0), TrendLabel::Improving);
    assert_eq!(stats::classify_trend(0.0), TrendLabel::Stable);
    assert_eq!(stats::classify_trend(6.0), TrendLabel::Worsening);
    assert_eq!(stats::classify_trend(-5.0), TrendLabel::Stable);
    assert_eq!(stats::classify_trend(5.0), TrendLabel::Stable);
}

#[test]
fn comparison_links_windows() {
    let set = SeriesSet {
        hours24: series(&[45; 24]),
        days7: series(&[50; 7]),
        days30: series(&[50; 30]),
    };
    let c = stats::comparison(&set);
    assert_eq!(c.average_24h, Some(45.0));
    assert_eq!(c.average_7d, Some(50.0));
    assert_eq!(c.day_vs_week.trend_vs_prior, Some(-10.0));
    assert_eq!(c.day_vs_week.label, Some(TrendLabel::Improving));
    assert_eq!(c.week_vs_month.trend_vs_prior, Some(0.0));
    assert_eq!(c.week_vs_month.label, Some(TrendLabel::Stable));
}

#[test]
fn comparison_with_all_zero_baseline_has_no_trend() {
    let set = SeriesSet {
        hours24: series(&[10; 24]),
        days7: series(&[0; 7]),
        days30: series(&[0; 30]),
    };
    let c = stats::comparison(&set);
    assert_eq!(c.day_vs_week.average, Some(10.0));
    assert_eq!(c.day_vs_week.trend_vs_prior, None);
    assert_eq!(c.day_vs_week.label, None);
}
