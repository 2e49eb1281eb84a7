use super::model::FinancialRecord;

// ---------------------------------------------------------------------------
// Range bounds as entered by the user
// ---------------------------------------------------------------------------

/// Identifies one of the six range inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundField {
    MinYear,
    MaxYear,
    MinRevenue,
    MaxRevenue,
    MinNetIncome,
    MaxNetIncome,
}

impl BoundField {
    /// Display order of the inputs.
    pub const ALL: [BoundField; 6] = [
        BoundField::MinYear,
        BoundField::MaxYear,
        BoundField::MinRevenue,
        BoundField::MaxRevenue,
        BoundField::MinNetIncome,
        BoundField::MaxNetIncome,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BoundField::MinYear => "Min Year",
            BoundField::MaxYear => "Max Year",
            BoundField::MinRevenue => "Min Revenue",
            BoundField::MaxRevenue => "Max Revenue",
            BoundField::MinNetIncome => "Min Net Income",
            BoundField::MaxNetIncome => "Max Net Income",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BoundField::MinYear => "e.g. 2020",
            BoundField::MaxYear => "e.g. 2024",
            BoundField::MinRevenue => "e.g. 10000000000",
            BoundField::MaxRevenue => "e.g. 50000000000",
            BoundField::MinNetIncome => "e.g. 5000000000",
            BoundField::MaxNetIncome => "e.g. 20000000000",
        }
    }
}

/// The six optional bounds, kept as the raw text of each input.
/// Empty (or whitespace-only) text means the bound is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConstraints {
    pub min_year: String,
    pub max_year: String,
    pub min_revenue: String,
    pub max_revenue: String,
    pub min_net_income: String,
    pub max_net_income: String,
}

impl FilterConstraints {
    pub fn get(&self, field: BoundField) -> &str {
        match field {
            BoundField::MinYear => &self.min_year,
            BoundField::MaxYear => &self.max_year,
            BoundField::MinRevenue => &self.min_revenue,
            BoundField::MaxRevenue => &self.max_revenue,
            BoundField::MinNetIncome => &self.min_net_income,
            BoundField::MaxNetIncome => &self.max_net_income,
        }
    }

    pub fn set(&mut self, field: BoundField, text: impl Into<String>) {
        let slot = match field {
            BoundField::MinYear => &mut self.min_year,
            BoundField::MaxYear => &mut self.max_year,
            BoundField::MinRevenue => &mut self.min_revenue,
            BoundField::MaxRevenue => &mut self.max_revenue,
            BoundField::MinNetIncome => &mut self.min_net_income,
            BoundField::MaxNetIncome => &mut self.max_net_income,
        };
        *slot = text.into();
    }

    /// Number of bounds currently set.
    pub fn active_count(&self) -> usize {
        BoundField::ALL
            .iter()
            .filter(|f| parse_bound(self.get(**f)).is_some())
            .count()
    }
}

/// Effective value of a bound: `None` when unset, NaN when the text is not a
/// number. NaN makes every comparison false, so such a bound excludes all
/// records.
pub fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.parse::<f64>().unwrap_or(f64::NAN))
}

/// Year bounds behave like integer input: fractional years are truncated.
fn parse_year_bound(text: &str) -> Option<f64> {
    parse_bound(text).map(f64::trunc)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Resolved numeric bounds, computed once per filter pass.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_year: Option<f64>,
    max_year: Option<f64>,
    min_revenue: Option<f64>,
    max_revenue: Option<f64>,
    min_net_income: Option<f64>,
    max_net_income: Option<f64>,
}

impl Bounds {
    fn resolve(c: &FilterConstraints) -> Self {
        Self {
            min_year: parse_year_bound(&c.min_year),
            max_year: parse_year_bound(&c.max_year),
            min_revenue: parse_bound(&c.min_revenue),
            max_revenue: parse_bound(&c.max_revenue),
            min_net_income: parse_bound(&c.min_net_income),
            max_net_income: parse_bound(&c.max_net_income),
        }
    }

    fn admits(&self, record: &FinancialRecord) -> bool {
        if self.min_year.is_some() || self.max_year.is_some() {
            match record.year() {
                Some(year) => {
                    if !within(f64::from(year), self.min_year, self.max_year) {
                        return false;
                    }
                }
                // No parseable year to compare against.
                None => return false,
            }
        }
        within(record.revenue, self.min_revenue, self.max_revenue)
            && within(record.net_income, self.min_net_income, self.max_net_income)
    }
}

/// Inclusive range check. Any comparison against NaN fails.
fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
}

/// Return indices of records that satisfy every set bound, in source order.
pub fn filtered_indices(records: &[FinancialRecord], constraints: &FilterConstraints) -> Vec<usize> {
    let bounds = Bounds::resolve(constraints);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| bounds.admits(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use proptest::prelude::*;

    fn sample() -> Vec<FinancialRecord> {
        vec![
            record("2021-09-25", 365_817_000_000.0, 94_680_000_000.0),
            record("2022-09-24", 394_328_000_000.0, 99_803_000_000.0),
            record("2023-09-30", 383_285_000_000.0, 96_995_000_000.0),
            record("2024-09-28", 391_035_000_000.0, 93_736_000_000.0),
        ]
    }

    fn with(field: BoundField, text: &str) -> FilterConstraints {
        let mut c = FilterConstraints::default();
        c.set(field, text);
        c
    }

    #[test]
    fn no_bounds_keeps_everything_in_order() {
        let records = sample();
        let idx = filtered_indices(&records, &FilterConstraints::default());
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn year_range_is_inclusive() {
        let records = sample();
        let mut c = FilterConstraints::default();
        c.set(BoundField::MinYear, "2022");
        c.set(BoundField::MaxYear, "2023");
        assert_eq!(filtered_indices(&records, &c), vec![1, 2]);
    }

    #[test]
    fn fractional_year_is_truncated() {
        let records = sample();
        assert_eq!(
            filtered_indices(&records, &with(BoundField::MaxYear, "2022.9")),
            vec![0, 1]
        );
    }

    #[test]
    fn revenue_above_all_values_yields_nothing() {
        let records = sample();
        let mut c = with(BoundField::MinRevenue, "500000000000");
        assert!(filtered_indices(&records, &c).is_empty());
        c.set(BoundField::MinYear, "2021");
        assert!(filtered_indices(&records, &c).is_empty());
    }

    #[test]
    fn net_income_bounds() {
        let records = sample();
        let mut c = FilterConstraints::default();
        c.set(BoundField::MinNetIncome, "95000000000");
        c.set(BoundField::MaxNetIncome, "99803000000");
        assert_eq!(filtered_indices(&records, &c), vec![1, 2]);
    }

    #[test]
    fn malformed_bound_excludes_everything() {
        let records = sample();
        assert!(filtered_indices(&records, &with(BoundField::MinRevenue, "abc")).is_empty());
        assert!(filtered_indices(&records, &with(BoundField::MaxYear, "20x4")).is_empty());
    }

    #[test]
    fn blank_bound_is_unset() {
        let records = sample();
        let c = with(BoundField::MinRevenue, "   ");
        assert_eq!(filtered_indices(&records, &c).len(), records.len());
        assert_eq!(c.active_count(), 0);
    }

    #[test]
    fn unparseable_date_fails_year_bound_only() {
        let records = vec![record("n/a", 1.0, 1.0), record("2020-01-01", 1.0, 1.0)];
        assert_eq!(
            filtered_indices(&records, &FilterConstraints::default()),
            vec![0, 1]
        );
        assert_eq!(
            filtered_indices(&records, &with(BoundField::MinYear, "1900")),
            vec![1]
        );
    }

    fn arb_record() -> impl Strategy<Value = FinancialRecord> {
        (2000i32..2030, 0u8..12, 0.0f64..1e12, -1e11f64..1e11).prop_map(|(y, m, rev, ni)| {
            record(&format!("{y}-{:02}-28", m + 1), rev, ni)
        })
    }

    fn arb_bound(lo: f64, hi: f64) -> impl Strategy<Value = Option<f64>> {
        prop::option::of(lo..hi)
    }

    proptest! {
        #[test]
        fn record_kept_iff_every_bound_holds(
            records in prop::collection::vec(arb_record(), 0..30),
            min_year in prop::option::of(1995i32..2035),
            max_year in prop::option::of(1995i32..2035),
            min_rev in arb_bound(0.0, 1e12),
            max_rev in arb_bound(0.0, 1e12),
            min_ni in arb_bound(-1e11, 1e11),
            max_ni in arb_bound(-1e11, 1e11),
        ) {
            let text = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
            let c = FilterConstraints {
                min_year: min_year.map(|v| v.to_string()).unwrap_or_default(),
                max_year: max_year.map(|v| v.to_string()).unwrap_or_default(),
                min_revenue: text(min_rev),
                max_revenue: text(max_rev),
                min_net_income: text(min_ni),
                max_net_income: text(max_ni),
            };
            let kept = filtered_indices(&records, &c);

            let expected: Vec<usize> = records
                .iter()
                .enumerate()
                .filter(|(_, r)| {
                    let year = r.year().unwrap();
                    min_year.map_or(true, |b| year >= b)
                        && max_year.map_or(true, |b| year <= b)
                        && min_rev.map_or(true, |b| r.revenue >= b)
                        && max_rev.map_or(true, |b| r.revenue <= b)
                        && min_ni.map_or(true, |b| r.net_income >= b)
                        && max_ni.map_or(true, |b| r.net_income <= b)
                })
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn filtering_is_idempotent(records in prop::collection::vec(arb_record(), 0..30)) {
            let c = with(BoundField::MinYear, "2010");
            prop_assert_eq!(filtered_indices(&records, &c), filtered_indices(&records, &c));
        }
    }
}
