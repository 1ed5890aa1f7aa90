//! Tallying checklist answers into raw counts.

use std::collections::BTreeMap;

use eccd_core::models::evaluation::ChecklistResponse;
use tracing::debug;

use crate::domain::{Domain, RawCounts};

/// Count the "yes" answers per domain.
///
/// A domain with answers but no "yes" is present with a count of zero.
/// Labels are normalized first, so `Self-Help/Eating` and `Self-Help/Dressing`
/// items land in the same domain. An item answered more than once counts
/// once, using its last answer.
pub fn tally(responses: &[ChecklistResponse]) -> RawCounts {
    let mut answers: BTreeMap<(Domain, &str, u32), bool> = BTreeMap::new();
    for response in responses {
        let Some(domain) = Domain::from_label(&response.domain) else {
            debug!(label = %response.domain, item = response.item, "skipping response for unknown domain");
            continue;
        };
        answers.insert((domain, response.domain.as_str(), response.item), response.yes);
    }

    let mut counts = RawCounts::new();
    for ((domain, _, _), yes) in answers {
        counts.add(domain, u32::from(yes));
    }
    counts
}
