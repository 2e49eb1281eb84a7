use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Context;
use thiserror::Error;

use super::model::{parse_statements, FinancialRecord};
use crate::config::{Config, PERIOD, SYMBOL};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that can go wrong while fetching the statements.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("provider responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something that can produce the statement list in one blocking call.
pub trait StatementSource: Send + 'static {
    fn fetch(&self) -> Result<Vec<FinancialRecord>, LoadError>;
}

/// Financial Modeling Prep REST client.
pub struct FmpClient {
    config: Config,
    client: reqwest::blocking::Client,
}

impl FmpClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl StatementSource for FmpClient {
    fn fetch(&self) -> Result<Vec<FinancialRecord>, LoadError> {
        let response = self
            .client
            .get(self.config.statements_url())
            .query(&[("period", PERIOD), ("apikey", self.config.api_key.as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(LoadError::Status { status, body });
        }
        Ok(parse_statements(&body)?)
    }
}

// ---------------------------------------------------------------------------
// Background load
// ---------------------------------------------------------------------------

/// Result of the one-shot load as seen by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<FinancialRecord>),
    /// Already logged; the source list stays empty.
    Failed,
}

/// Receiving end of a load started with [`spawn_load`].
pub struct LoadHandle {
    rx: Receiver<LoadOutcome>,
    finished: bool,
}

impl LoadHandle {
    /// Non-blocking check. Yields the outcome exactly once.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.finished = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Loader thread died without reporting.
                self.finished = true;
                Some(LoadOutcome::Failed)
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Fetch statements from `source` on a background thread.
///
/// Failures are logged here and reported as [`LoadOutcome::Failed`].
/// `on_done` runs after the outcome is sent, typically to request a repaint.
pub fn spawn_load<S, F>(source: S, on_done: F) -> LoadHandle
where
    S: StatementSource,
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("statement-loader".into())
        .spawn(move || {
            let outcome = match load_records(&source) {
                Ok(records) => {
                    log::info!("Loaded {} income statements for {SYMBOL}", records.len());
                    LoadOutcome::Loaded(records)
                }
                Err(e) => {
                    log::error!("Failed to load income statements: {e:#}");
                    LoadOutcome::Failed
                }
            };
            // The receiver is gone if the window closed first.
            let _ = tx.send(outcome);
            on_done();
        });

    if let Err(e) = spawned {
        log::error!("Failed to start loader thread: {e}");
    }

    LoadHandle {
        rx,
        finished: false,
    }
}

fn load_records(source: &impl StatementSource) -> anyhow::Result<Vec<FinancialRecord>> {
    log::info!("Requesting {PERIOD} income statements for {SYMBOL}");
    source
        .fetch()
        .with_context(|| format!("fetching {PERIOD} income statements for {SYMBOL}"))
}
