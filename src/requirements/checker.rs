//! Package availability checker.
//!
//! Every requirement is looked up independently. A lookup that fails is
//! recorded and the run moves on, so one pass reports every problem.

use crate::metadata::DistributionIndex;
use crate::requirements::requirement::PackageRequirement;
use crate::requirements::status::{CheckResult, CheckedRequirement, RunSummary};

/// Check a single requirement against the index.
pub fn check_one(requirement: &PackageRequirement, index: &dyn DistributionIndex) -> CheckResult {
    let base = requirement.base_name();
    let result = CheckResult::from(index.version(base));
    tracing::debug!("Checked '{}' as '{}': {:?}", requirement, base, result);
    result
}

/// Check every requirement in order.
///
/// `on_result` is called once per requirement, as soon as its outcome is
/// known, in input order.
pub fn check_all<F>(
    requirements: &[PackageRequirement],
    index: &dyn DistributionIndex,
    mut on_result: F,
) -> RunSummary
where
    F: FnMut(&CheckedRequirement),
{
    let mut summary = RunSummary::default();

    for requirement in requirements {
        let checked = CheckedRequirement {
            requirement: requirement.raw_name().to_string(),
            base_name: requirement.base_name().to_string(),
            result: check_one(requirement, index),
        };
        on_result(&checked);
        summary.record(checked);
    }

    summary
}
