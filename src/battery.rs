use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bits::BitSequence;
use crate::collector::collect;
use crate::fips_tests::{all_tests, TestOutcome};

/// Outcome of the full FIPS 140-3 battery over one bit sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryResult {
    pub passed: bool,
    pub monobit: TestOutcome,
    pub longest_run: TestOutcome,
    pub poker: TestOutcome,
    pub series: TestOutcome,
}

impl BatteryResult {
    /// Run all four tests over an already validated sequence.
    ///
    /// Every test runs even when an earlier one fails.
    pub fn analyze(sequence: &BitSequence<'_>) -> Self {
        let stats = collect(sequence);

        let [monobit, longest_run, poker, series] =
            all_tests().map(|test| (test.evaluate)(&stats));

        let passed = monobit.passed && longest_run.passed && poker.passed && series.passed;
        info!(
            "FIPS 140-3 battery complete: passed={} (monobit={}, longest_run={}, poker={}, series={})",
            passed, monobit.passed, longest_run.passed, poker.passed, series.passed
        );

        BatteryResult {
            passed,
            monobit,
            longest_run,
            poker,
            series,
        }
    }

    /// Individual outcomes in report order.
    pub fn outcomes(&self) -> [&TestOutcome; 4] {
        [&self.monobit, &self.longest_run, &self.poker, &self.series]
    }

    pub fn tests_passed(&self) -> usize {
        self.outcomes().iter().filter(|o| o.passed).count()
    }
}
