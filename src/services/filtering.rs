//! Date-range restriction of aggregated tables.

use chrono::NaiveDate;

use crate::models::{creator_quarter, Frequency, ReportPeriod};
use crate::services::aggregation::MetricsTable;

/// Restrict a table to the inclusive date range `[start, end]`.
///
/// Daily, weekly and monthly buckets are kept when their start date falls
/// inside the range. Quarterly bounds are first resolved through the
/// creator calendar, so a quarter straddling the raw start date is kept in
/// full rather than clipped.
pub fn filter_range(table: &MetricsTable, start: NaiveDate, end: NaiveDate) -> MetricsTable {
    let rows = match table.frequency {
        Frequency::Quarterly => {
            let lo = creator_quarter(start);
            let hi = creator_quarter(end);
            table
                .rows
                .iter()
                .filter(|row| match row.period {
                    ReportPeriod::Quarter { year, quarter } => {
                        lo <= (year, quarter) && (year, quarter) <= hi
                    }
                    _ => false,
                })
                .copied()
                .collect()
        }
        _ => table
            .rows
            .iter()
            .filter(|row| {
                let date = row.period.start_date();
                start <= date && date <= end
            })
            .copied()
            .collect(),
    };

    MetricsTable {
        frequency: table.frequency,
        rows,
    }
}
