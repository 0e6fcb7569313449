//! Static policy pass

use ms_core::{Pipeline, Policy};

/// Mark every not-yet-filtered statement that the policy matches.
///
/// Statements that already carry a reason are never re-evaluated, so the
/// pass is idempotent and the first decision always wins.
pub fn apply_policy(mut pipeline: Pipeline, policy: &Policy) -> Pipeline {
    let mut matched = 0;
    for stmt in pipeline
        .statements_mut()
        .iter_mut()
        .filter(|s| !s.is_filtered())
    {
        if let Some(reason) = policy.reason_for(stmt.text()) {
            stmt.mark_filtered(reason);
            matched += 1;
        }
    }
    log::debug!("Policy filtered {} statements", matched);
    pipeline
}

#[cfg(test)]
#[path = "policy_pass_test.rs"]
mod tests;
