use crate::data::filter::{filtered_indices, BoundField, FilterConstraints};
use crate::data::loader::LoadOutcome;
use crate::data::model::FinancialRecord;
use crate::data::sort::{sorted_indices, SortKey, SortSpec};

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Indices into the source list: `filtered` keeps source order, `displayed`
/// is `filtered` ordered by the sort spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub filtered: Vec<usize>,
    pub displayed: Vec<usize>,
}

/// Full recompute of the table contents from scratch.
pub fn derive_view(source: &[FinancialRecord], constraints: &FilterConstraints, sort: SortSpec) -> View {
    let filtered = filtered_indices(source, constraints);
    let displayed = sorted_indices(source, &filtered, sort);
    View {
        filtered,
        displayed,
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Every state change goes through [`AppState::dispatch`].
#[derive(Debug, Clone)]
pub enum Action {
    SetBound(BoundField, String),
    ToggleSort(SortKey),
    Loaded(LoadOutcome),
}

/// The full UI state, independent of rendering.
#[derive(Debug)]
pub struct AppState {
    /// Statements as returned by the provider. Written once.
    source: Vec<FinancialRecord>,
    pub constraints: FilterConstraints,
    pub sort: SortSpec,
    view: View,
    /// Whether the statement request is still outstanding.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source: Vec::new(),
            constraints: FilterConstraints::default(),
            sort: SortSpec::default(),
            view: View::default(),
            loading: true,
        }
    }
}

impl AppState {
    /// Apply one user or loader event, then rebuild the view.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetBound(field, text) => self.constraints.set(field, text),
            Action::ToggleSort(key) => self.sort = self.sort.toggled(key),
            Action::Loaded(outcome) => {
                if !self.loading {
                    log::warn!("Ignoring duplicate load result");
                    return;
                }
                self.loading = false;
                if let LoadOutcome::Loaded(records) = outcome {
                    self.source = records;
                }
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = derive_view(&self.source, &self.constraints, self.sort);
    }

    pub fn source(&self) -> &[FinancialRecord] {
        &self.source
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Records in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &FinancialRecord> + '_ {
        self.view.displayed.iter().map(|&i| &self.source[i])
    }
}
