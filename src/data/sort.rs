use std::cmp::Ordering;

use super::model::FinancialRecord;

// ---------------------------------------------------------------------------
// Sort specification
// ---------------------------------------------------------------------------

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Date,
    Revenue,
    NetIncome,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Revenue, SortKey::NetIncome];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Revenue => "Revenue",
            SortKey::NetIncome => "Net Income",
        }
    }

    /// Compare two records on this key alone.
    ///
    /// Dates compare as strings: zero-padded `YYYY-MM-DD` sorts
    /// chronologically. Incomparable floats (NaN) are treated as equal.
    pub fn compare(self, a: &FinancialRecord, b: &FinancialRecord) -> Ordering {
        match self {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Revenue => a.revenue.partial_cmp(&b.revenue).unwrap_or(Ordering::Equal),
            SortKey::NetIncome => a
                .net_income
                .partial_cmp(&b.net_income)
                .unwrap_or(Ordering::Equal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// Active sort key and direction. Defaults to date ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    /// Header click: the active key flips direction, any other key becomes
    /// active in ascending order.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                order: self.order.flipped(),
            }
        } else {
            Self {
                key,
                order: SortOrder::Asc,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Order `indices` (into `records`) by `spec`, returning a new vector.
///
/// The sort is stable in both directions: descending reverses the
/// comparison rather than the output, so equal records keep their input
/// order.
pub fn sorted_indices(records: &[FinancialRecord], indices: &[usize], spec: SortSpec) -> Vec<usize> {
    let mut out = indices.to_vec();
    out.sort_by(|&a, &b| {
        let ord = spec.key.compare(&records[a], &records[b]);
        match spec.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}
