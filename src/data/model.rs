use serde::Deserialize;

// ---------------------------------------------------------------------------
// FinancialRecord – one fiscal year of the income statement
// ---------------------------------------------------------------------------

/// A single annual income-statement entry as returned by the provider.
///
/// Only the fields the dashboard displays are kept; anything else in the
/// payload is ignored during deserialisation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Fiscal period end, `YYYY-MM-DD`.
    pub date: String,
    pub revenue: f64,
    pub net_income: f64,
    pub gross_profit: f64,
    pub operating_income: f64,
    pub eps: f64,
}

impl FinancialRecord {
    /// Fiscal year taken from the first four characters of `date`.
    ///
    /// `None` when the prefix is missing or not an integer.
    pub fn year(&self) -> Option<i32> {
        self.date.get(0..4)?.parse().ok()
    }
}

/// Parse a provider payload (a JSON array of statements).
pub fn parse_statements(body: &str) -> serde_json::Result<Vec<FinancialRecord>> {
    serde_json::from_str(body)
}

#[cfg(test)]
pub(crate) fn record(date: &str, revenue: f64, net_income: f64) -> FinancialRecord {
    FinancialRecord {
        date: date.to_string(),
        revenue,
        net_income,
        gross_profit: revenue * 0.4,
        operating_income: revenue * 0.3,
        eps: 6.11,
    }
}
