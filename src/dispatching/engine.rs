//! Rule chain for selecting the next process.
//!
//! Rules are applied in sequence; a later rule is consulted only when all
//! earlier rules tie. Remaining ties go to the process nearest the head of
//! the ready queue, so selection is always deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{ReadyEntry, SelectionRule};

/// A composable, sequential rule chain.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::{rules, Selector};
///
/// // SJF: least remaining burst, ties to earliest arrival.
/// let selector = Selector::new()
///     .with_rule(rules::ShortestRemaining)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(selector.rule_names(), vec!["SRT", "ARRIVAL"]);
/// ```
#[derive(Clone, Default)]
pub struct Selector {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl Selector {
    /// Creates an empty selector (pure queue order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    ///
    /// Equivalent to [`with_rule`](Self::with_rule); the separate name
    /// documents intent at the call site.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts entries by selection order (first = runs next).
    ///
    /// Returns indices into `entries`.
    pub fn sort_indices(&self, entries: &[ReadyEntry<'_>]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..entries.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&entries[a], &entries[b]));
        indices
    }

    /// Returns the index into `entries` of the process to run next.
    pub fn select(&self, entries: &[ReadyEntry<'_>]) -> Option<usize> {
        (0..entries.len()).min_by(|&a, &b| self.compare(&entries[a], &entries[b]))
    }

    fn compare(&self, a: &ReadyEntry<'_>, b: &ReadyEntry<'_>) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.position.cmp(&b.position)
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::Process;

    fn entries<'a>(processes: &'a [Process], remaining: &[u64]) -> Vec<ReadyEntry<'a>> {
        processes
            .iter()
            .zip(remaining)
            .enumerate()
            .map(|(i, (p, &r))| ReadyEntry {
                index: i,
                process: p,
                remaining: r,
                position: i,
            })
            .collect()
    }

    #[test]
    fn test_empty_selector_is_queue_order() {
        let ps = vec![Process::new("A", 0, 9), Process::new("B", 0, 1)];
        let es = entries(&ps, &[9, 1]);
        assert_eq!(Selector::new().select(&es), Some(0));
    }

    #[test]
    fn test_shortest_remaining() {
        let ps = vec![
            Process::new("long", 0, 5),
            Process::new("short", 1, 1),
            Process::new("medium", 2, 3),
        ];
        let es = entries(&ps, &[5, 1, 3]);
        let selector = Selector::new().with_rule(rules::ShortestRemaining);
        assert_eq!(selector.sort_indices(&es), vec![1, 2, 0]);
    }

    #[test]
    fn test_tie_breaker_earliest_arrival() {
        // B sits ahead in the queue but arrived later.
        let ps = vec![Process::new("B", 3, 4), Process::new("A", 1, 4)];
        let es = entries(&ps, &[4, 4]);
        let selector = Selector::new()
            .with_rule(rules::ShortestRemaining)
            .with_tie_breaker(rules::EarliestArrival);
        assert_eq!(selector.select(&es), Some(1));
    }

    #[test]
    fn test_final_tie_goes_to_queue_head() {
        let ps = vec![
            Process::new("A", 0, 5).with_priority(1),
            Process::new("B", 0, 5).with_priority(1),
        ];
        let es = entries(&ps, &[5, 5]);
        let selector = Selector::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival);
        assert_eq!(selector.select(&es), Some(0));
    }

    #[test]
    fn test_priority_over_arrival() {
        let ps = vec![
            Process::new("low", 0, 5).with_priority(1),
            Process::new("high", 4, 5).with_priority(7),
        ];
        let es = entries(&ps, &[5, 5]);
        let selector = Selector::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival);
        assert_eq!(selector.select(&es), Some(1));
    }

    #[test]
    fn test_empty_entries() {
        let selector = Selector::new().with_rule(rules::ShortestRemaining);
        assert!(selector.select(&[]).is_none());
        assert!(selector.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let selector = Selector::new().with_rule(rules::QueueOrder);
        assert_eq!(format!("{selector:?}"), r#"Selector { rules: ["QUEUE"] }"#);
    }
}
