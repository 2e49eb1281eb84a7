/// Data layer: statement types, loading, filtering and sorting.
///
/// Architecture:
/// ```text
///   FMP income-statement endpoint
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  one GET on a background thread → Vec<FinancialRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  six range bounds → filtered indices (source order)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  key + direction → displayed indices (stable)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
