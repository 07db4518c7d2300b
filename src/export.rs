// One-shot CSV export of a dashboard snapshot.
// Three sections separated by a blank line: readings, series, alerts.

use std::fmt::Write;

use crate::models::{AlertSeverity, DashboardSnapshot, Granularity, ReadingStatus};

pub fn to_csv(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    out.push_str("sensor,value,unit,status,trend\n");
    for r in &snapshot.readings {
        let _ = writeln!(
            out,
            "{},{:.1},{},{},{:.1}",
            quote(&r.name),
            r.value,
            quote(&r.unit),
            status_str(r.status),
            r.trend
        );
    }

    out.push('\n');
    out.push_str("granularity,index,value\n");
    for g in Granularity::ALL {
        for (i, v) in snapshot.series.get(g).iter().enumerate() {
            let _ = writeln!(out, "{g},{i},{v}");
        }
    }

    out.push('\n');
    out.push_str("id,timestamp,category,severity,message\n");
    for a in &snapshot.alerts {
        let timestamp = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(a.timestamp)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| a.timestamp.to_string());
        let severity = match a.severity {
            AlertSeverity::Success => "success",
            AlertSeverity::Warning => "warning",
        };
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            a.id,
            timestamp,
            quote(a.category.display_name()),
            severity,
            quote(&a.message)
        );
    }

    out
}

fn status_str(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::Normal => "normal",
        ReadingStatus::Warning => "warning",
        ReadingStatus::Critical => "critical",
    }
}

/// RFC 4180 field quoting: only when the field contains a comma, quote or newline.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
