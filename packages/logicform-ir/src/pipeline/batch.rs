//! Batch converter

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use super::error::PipelineError;
use super::result::{BatchReport, QuestionOutcome};
use crate::config::{BatchConfig, ValidatedConfig};
use crate::features::compiler::{ConvertUseCase, ConvertUseCaseImpl};
use crate::shared::models::OperationRecord;

/// One question of a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchItem<'a> {
    pub id: &'a str,
    pub records: &'a [OperationRecord],
}

impl<'a> BatchItem<'a> {
    pub fn new(id: &'a str, records: &'a [OperationRecord]) -> Self {
        Self { id, records }
    }
}

/// Converts many questions with one use case
pub struct BatchConverter {
    usecase: Box<dyn ConvertUseCase>,
    config: BatchConfig,
}

impl BatchConverter {
    pub fn new(config: &ValidatedConfig) -> Self {
        Self::with_usecase(
            Box::new(ConvertUseCaseImpl::new(config.connectives().clone())),
            config.batch().clone(),
        )
    }

    pub fn with_usecase(usecase: Box<dyn ConvertUseCase>, config: BatchConfig) -> Self {
        Self { usecase, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Convert every item; outcomes come back in input order
    ///
    /// With `skip_failures` off, the first failing question (in input order)
    /// aborts the batch.
    pub fn convert(&self, items: &[BatchItem<'_>]) -> Result<BatchReport, PipelineError> {
        let outcomes = if self.config.parallel {
            self.convert_parallel(items)?
        } else {
            self.convert_sequential(items)?
        };

        let report = BatchReport::from_outcomes(outcomes);
        for failure in report.failures() {
            if let Some(err) = failure.error() {
                warn!("skipped question {} ({}): {}", failure.index, failure.id, err);
            }
        }
        info!(
            "batch done: {} converted, {} failed, {} total",
            report.converted,
            report.failed,
            report.total()
        );
        Ok(report)
    }

    fn convert_one(&self, index: usize, item: &BatchItem<'_>) -> QuestionOutcome {
        QuestionOutcome {
            index,
            id: item.id.to_string(),
            result: self.usecase.convert(item.records),
        }
    }

    fn convert_sequential(
        &self,
        items: &[BatchItem<'_>],
    ) -> Result<Vec<QuestionOutcome>, PipelineError> {
        let mut outcomes = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let outcome = self.convert_one(index, item);
            self.check_abort(&outcome)?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    #[cfg(feature = "parallel")]
    fn convert_parallel(
        &self,
        items: &[BatchItem<'_>],
    ) -> Result<Vec<QuestionOutcome>, PipelineError> {
        let threads = self.config.num_workers.unwrap_or_else(default_workers);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;

        let outcomes: Vec<QuestionOutcome> = pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(index, item)| self.convert_one(index, item))
                .collect()
        });

        for outcome in &outcomes {
            self.check_abort(outcome)?;
        }
        Ok(outcomes)
    }

    #[cfg(not(feature = "parallel"))]
    fn convert_parallel(
        &self,
        items: &[BatchItem<'_>],
    ) -> Result<Vec<QuestionOutcome>, PipelineError> {
        warn!("built without the `parallel` feature, converting sequentially");
        self.convert_sequential(items)
    }

    fn check_abort(&self, outcome: &QuestionOutcome) -> Result<(), PipelineError> {
        match (&outcome.result, self.config.skip_failures) {
            (Err(source), false) => Err(PipelineError::Conversion {
                question_id: outcome.id.clone(),
                source: source.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// 75% of the available cores, at least one
#[cfg(feature = "parallel")]
fn default_workers() -> usize {
    std::cmp::max(1, (num_cpus::get() * 3) / 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;

    fn rec(op: &str, arg: &str, deps: &[usize]) -> OperationRecord {
        OperationRecord::new(op, arg, deps.to_vec())
    }

    fn questions() -> Vec<(String, Vec<OperationRecord>)> {
        vec![
            (
                "q1".to_string(),
                vec![rec("select", "sky", &[]), rec("query", "color", &[0])],
            ),
            ("q2".to_string(), vec![rec("select", "x", &[]), rec("jump", "", &[0])]),
            (
                "q3".to_string(),
                vec![rec("select", "ball (3)", &[]), rec("exist", "?", &[0])],
            ),
        ]
    }

    fn items(questions: &[(String, Vec<OperationRecord>)]) -> Vec<BatchItem<'_>> {
        questions
            .iter()
            .map(|(id, records)| BatchItem::new(id, records))
            .collect()
    }

    #[test]
    fn test_sequential_skips_failures() {
        let config = ConverterConfig::default().build().unwrap();
        let data = questions();
        let report = BatchConverter::new(&config).convert(&items(&data)).unwrap();

        assert_eq!((report.converted, report.failed), (2, 1));
        assert_eq!(
            report.outcomes[0].logical_form(),
            Some("query(color, $X) and object(sky, $X)")
        );
        assert_eq!(report.outcomes[1].error().and_then(|e| e.record), Some(1));
        assert_eq!(report.outcomes[2].id, "q3");
    }

    #[test]
    fn test_fail_fast() {
        let config = ConverterConfig::default()
            .batch(BatchConfig::default().skip_failures(false))
            .build()
            .unwrap();
        let data = questions();
        let err = BatchConverter::new(&config)
            .convert(&items(&data))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Conversion { ref question_id, .. } if question_id == "q2"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data = questions();
        let sequential = BatchConverter::new(&ConverterConfig::default().build().unwrap())
            .convert(&items(&data))
            .unwrap();
        let parallel_config = ConverterConfig::default()
            .batch(BatchConfig::default().parallel(true).num_workers(2))
            .build()
            .unwrap();
        let parallel = BatchConverter::new(&parallel_config)
            .convert(&items(&data))
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
