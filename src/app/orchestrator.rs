use std::sync::Arc;

use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::config::{RunConfig, check_target_count};
use crate::error::{AppError, AppResult};
use crate::http::{Attacker, Transport};
use crate::input::{TestCase, load_test_cases};
use crate::metrics::Aggregator;
use crate::sinks::{ResultKind, ResultWriter, compact_json, latency_seconds, row_label};

use super::report::{PairReport, RunReport};
use super::summary::print_summary;

/// Where a run stands. `Running` names the pair measured by the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loaded,
    Running { target: usize, case: usize },
    Done,
}

/// Drives a run through [`RunState`], one pair at a time.
pub struct Orchestrator {
    config: RunConfig,
    attacker: Attacker,
    writer: ResultWriter,
    no_color: bool,
    state: RunState,
    test_cases: Vec<TestCase>,
    report: RunReport,
}

struct PairRows {
    responses: Vec<(String, String)>,
    latencies: Vec<(String, String)>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(config: RunConfig, transport: Arc<dyn Transport>) -> Self {
        let attacker = Attacker::new(transport, config.interval(), config.duration());
        let writer = ResultWriter::new(config.output_dir());
        Self {
            config,
            attacker,
            writer,
            no_color: false,
            state: RunState::Idle,
            test_cases: Vec::new(),
            report: RunReport::default(),
        }
    }

    #[must_use]
    pub const fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    #[must_use]
    pub const fn report(&self) -> &RunReport {
        &self.report
    }

    #[cfg(test)]
    pub(crate) const fn set_state(&mut self, state: RunState) {
        self.state = state;
    }

    /// Advances the run by one transition and returns the new state.
    ///
    /// A failed step moves the run to `Done`; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns the first loader, configuration, attacker, or writer error.
    pub async fn step(&mut self) -> AppResult<RunState> {
        let previous = self.state;
        match self.advance().await {
            Ok(next) => {
                debug!("Run state {:?} -> {:?}", previous, next);
                self.state = next;
                Ok(next)
            }
            Err(err) => {
                debug!("Run aborted in state {:?}: {}", previous, err);
                self.state = RunState::Done;
                Err(err)
            }
        }
    }

    /// Steps until `Done` and returns the per-pair aggregates.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub async fn run(mut self) -> AppResult<RunReport> {
        while self.step().await? != RunState::Done {}
        Ok(self.report)
    }

    async fn advance(&mut self) -> AppResult<RunState> {
        match self.state {
            RunState::Idle => {
                let path = self.config.input_path();
                self.test_cases = load_test_cases(path).map_err(AppError::input)?;
                info!(
                    "Loaded {} test cases from {}",
                    self.test_cases.len(),
                    path.display()
                );
                Ok(RunState::Loaded)
            }
            RunState::Loaded => {
                check_target_count(self.config.targets().len()).map_err(AppError::config)?;
                if self.test_cases.is_empty() {
                    warn!(
                        "No test cases in {}; nothing to measure",
                        self.config.input_path().display()
                    );
                    return Ok(RunState::Done);
                }
                self.writer.ensure_dir().await.map_err(AppError::sink)?;
                Ok(RunState::Running { target: 0, case: 0 })
            }
            RunState::Running { target, case } => {
                self.measure(target, case).await?;
                Ok(self.next_pair(target, case))
            }
            RunState::Done => Ok(RunState::Done),
        }
    }

    fn next_pair(&self, target: usize, case: usize) -> RunState {
        let next_case = case.saturating_add(1);
        if next_case < self.test_cases.len() {
            return RunState::Running {
                target,
                case: next_case,
            };
        }
        let next_target = target.saturating_add(1);
        if next_target < self.config.targets().len() {
            return RunState::Running {
                target: next_target,
                case: 0,
            };
        }
        RunState::Done
    }

    async fn measure(&mut self, target_idx: usize, case_idx: usize) -> AppResult<()> {
        let (Some(target), Some(test_case)) = (
            self.config.targets().get(target_idx).cloned(),
            self.test_cases.get(case_idx).cloned(),
        ) else {
            return Err(AppError::PairOutOfRange {
                target: target_idx,
                case: case_idx,
            });
        };
        info!(
            "Measuring {}?{} at concurrency {}",
            target,
            test_case.query(),
            test_case.concurrency()
        );

        let mut stream = self.attacker.attack(&target, &test_case)?;
        let mut aggregator = Aggregator::new();
        let mut collected = Vec::new();
        while let Some(outcome) = stream.next().await {
            aggregator.add(&outcome);
            collected.push((
                outcome.sequence_index,
                compact_json(&outcome.body),
                latency_seconds(outcome.latency),
            ));
        }
        collected.sort_by_key(|(sequence_index, _, _)| *sequence_index);

        let mut rows = PairRows {
            responses: Vec::with_capacity(collected.len()),
            latencies: Vec::with_capacity(collected.len()),
        };
        for (sequence_index, body, latency) in collected {
            let label = row_label(test_case.query(), sequence_index);
            rows.latencies.push((label.clone(), latency));
            rows.responses.push((label, body));
        }

        let metrics = aggregator.finish();
        print_summary(&target, &test_case, &metrics, self.no_color);

        self.writer
            .write(test_case.query(), ResultKind::Response, &rows.responses)
            .await?;
        self.writer
            .write(test_case.query(), ResultKind::Latency, &rows.latencies)
            .await?;

        self.report
            .pairs
            .push(PairReport::new(target, test_case, metrics));
        Ok(())
    }
}
