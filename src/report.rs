//! Plain-text rendering of a [`BatteryResult`].

use crate::battery::BatteryResult;
use crate::fips_tests::{Statistic, TestOutcome};

/// Render the battery verdict followed by one block per test.
pub fn render(result: &BatteryResult) -> String {
    let banner = if result.passed { "success" } else { "failure" };
    let mut report = format!(
        "===================\n\
         FIPS 140-3 {}:\n\
         ===================\n",
        banner
    );

    for outcome in result.outcomes() {
        report.push_str(&format!(
            "FIPS 140-3 {}: {}\n{}\n\n",
            outcome.name,
            outcome.passed,
            details(outcome)
        ));
    }

    report
}

fn details(outcome: &TestOutcome) -> String {
    match &outcome.statistic {
        Statistic::BitCounts { ones, zeros } => format!("{} ones and {} zeros.", ones, zeros),
        Statistic::LongestRun { length } => format!("Longest run is {} bits long.", length),
        Statistic::Poker { value } => format!("Poker value is {:.1}.", value),
        Statistic::RunBuckets { zeros, ones } => {
            format!("Runs of ones:\t{:?}\nRuns of zeros:\t{:?}", ones, zeros)
        }
    }
}
