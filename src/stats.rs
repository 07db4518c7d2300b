// Derived statistics across granularities. Pure functions of the current series.

use crate::models::{ComparisonStats, DerivedStats, SeriesSet, TimeSeries, TrendLabel};

/// Percent change beyond which a trend is no longer "Stable".
pub const STABLE_BAND_PCT: f64 = 5.0;

/// Arithmetic mean; `None` for an empty series.
pub fn average(series: &TimeSeries) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let sum: f64 = series.iter().map(|&s| f64::from(s)).sum();
    Some(sum / series.len() as f64)
}

/// `(current - baseline) / baseline * 100`; `None` when the baseline is zero or not finite.
pub fn percent_trend(current: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 || !baseline.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - baseline) / baseline * 100.0)
}

/// Lower is better: a drop of more than 5% is "Improving".
pub fn classify_trend(pct: f64) -> TrendLabel {
    if pct < -STABLE_BAND_PCT {
        TrendLabel::Improving
    } else if pct > STABLE_BAND_PCT {
        TrendLabel::Worsening
    } else {
        TrendLabel::Stable
    }
}

/// Average of `current` and its trend against `baseline`'s average.
pub fn derive(current: &TimeSeries, baseline: &TimeSeries) -> DerivedStats {
    let current_avg = average(current);
    let trend_vs_prior = match (current_avg, average(baseline)) {
        (Some(c), Some(b)) => percent_trend(c, b),
        _ => None,
    };
    DerivedStats {
        average: current_avg,
        trend_vs_prior,
        label: trend_vs_prior.map(classify_trend),
    }
}

/// Comparison-mode figures: per-window averages, 24h vs 7d and 7d vs 30d.
pub fn comparison(series: &SeriesSet) -> ComparisonStats {
    ComparisonStats {
        average_24h: average(&series.hours24),
        average_7d: average(&series.days7),
        average_30d: average(&series.days30),
        day_vs_week: derive(&series.hours24, &series.days7),
        week_vs_month: derive(&series.days7, &series.days30),
    }
}
