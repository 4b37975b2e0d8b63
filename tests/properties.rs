//! Randomized invariants that hold for every policy.

use std::collections::HashSet;

use cpu_sched_sim::models::{PolicyKind, Process};
use cpu_sched_sim::scheduler::{SimulationConfig, Simulator};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 64;

fn arb_policy() -> impl Strategy<Value = PolicyKind> {
    prop::sample::select(PolicyKind::ALL.to_vec())
}

fn arb_processes() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..20, 1u64..10, -3i32..4), 1..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_one_consistent_record_per_process(
        processes in arb_processes(),
        policy in arb_policy(),
        quantum in 1u64..5,
    ) {
        let sim = Simulator::new().with_config(SimulationConfig::new().with_quantum(quantum));
        let out = sim.simulate(&processes, policy).unwrap();

        prop_assert_eq!(out.records.len(), processes.len());
        let ids: HashSet<&str> = out.records.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(ids.len(), processes.len());

        for p in &processes {
            let r = out.record(&p.id).unwrap();
            prop_assert_eq!(r.arrival, p.arrival);
            prop_assert_eq!(r.burst, p.burst);
            prop_assert!(r.start >= r.arrival);
            prop_assert!(r.end >= r.start);
            prop_assert!(r.end >= r.arrival + r.burst);
            prop_assert_eq!(r.turnaround, r.end - r.arrival);
            prop_assert_eq!(r.waiting, r.turnaround - r.burst);
            prop_assert_eq!(r.response, r.start - r.arrival);
        }
    }

    #[test]
    fn prop_slices_cover_each_burst_without_overlap(
        processes in arb_processes(),
        policy in arb_policy(),
    ) {
        let out = Simulator::new().simulate(&processes, policy).unwrap();

        for w in out.slices.windows(2) {
            prop_assert!(w[0].end <= w[1].start);
        }
        for p in &processes {
            let ran: u64 = out.slices_for(&p.id).iter().map(|s| s.len()).sum();
            prop_assert_eq!(ran, p.burst);
            let first = out.slices_for(&p.id)[0].start;
            prop_assert_eq!(first, out.record(&p.id).unwrap().start);
        }
        let total: u64 = processes.iter().map(|p| p.burst).sum();
        prop_assert_eq!(out.busy_ticks(), total);
    }

    #[test]
    fn prop_snapshots_chronological_and_consistent(
        processes in arb_processes(),
        policy in arb_policy(),
    ) {
        let out = Simulator::new().simulate(&processes, policy).unwrap();

        for w in out.snapshots.windows(2) {
            prop_assert!(w[0].time < w[1].time);
        }
        for snap in &out.snapshots {
            let unique: HashSet<&String> = snap.queue.iter().collect();
            prop_assert_eq!(unique.len(), snap.queue.len());
            for id in &snap.queue {
                let r = out.record(id).unwrap();
                prop_assert!(r.arrival <= snap.time);
                prop_assert!(snap.time < r.end);
            }
        }
    }

    #[test]
    fn prop_simulation_is_deterministic(
        processes in arb_processes(),
        policy in arb_policy(),
    ) {
        let sim = Simulator::new();
        let a = sim.simulate(&processes, policy).unwrap();
        let b = sim.simulate(&processes, policy).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn prop_averages_are_means(
        processes in arb_processes(),
        policy in arb_policy(),
    ) {
        let out = Simulator::new().simulate(&processes, policy).unwrap();
        let m = out.metrics();
        let n = out.records.len() as f64;
        let waiting: f64 = out.records.iter().map(|r| r.waiting as f64).sum::<f64>() / n;
        let turnaround: f64 = out.records.iter().map(|r| r.turnaround as f64).sum::<f64>() / n;
        prop_assert!((m.avg_waiting - waiting).abs() < 1e-9);
        prop_assert!((m.avg_turnaround - turnaround).abs() < 1e-9);
    }

    #[test]
    fn prop_non_preemptive_policies_run_once(
        processes in arb_processes(),
        policy in prop::sample::select(vec![PolicyKind::Fcfs, PolicyKind::Sjf, PolicyKind::Priority]),
    ) {
        let out = Simulator::new().simulate(&processes, policy).unwrap();
        for p in &processes {
            let slices = out.slices_for(&p.id);
            prop_assert_eq!(slices.len(), 1);
            prop_assert_eq!(slices[0].len(), p.burst);
        }
    }
}
