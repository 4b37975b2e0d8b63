//! Per-run simulation state.

use std::collections::{HashMap, VecDeque};

use crate::models::{DispatchSlice, Process, ReadyQueueSnapshot, ResultRecord, Ticks};

/// One ready process as seen by selection rules.
#[derive(Debug, Clone, Copy)]
pub struct ReadyEntry<'a> {
    /// Index into the simulated process slice.
    pub index: usize,
    /// The process definition.
    pub process: &'a Process,
    /// Ticks still needed to complete.
    pub remaining: Ticks,
    /// Position in the ready queue (0 = head).
    pub position: usize,
}

/// Mutable state owned by a single simulation run.
///
/// Holds the clock, the ready queue, remaining bursts and the output logs.
/// Processes are referenced, never copied; internally they are addressed
/// by their index in the input slice.
///
/// Invariants between steps:
/// - a process has a `remaining` entry iff it has not finished
/// - the ready queue holds no duplicates and only admitted, unfinished processes
#[derive(Debug, Clone)]
pub struct SimulationContext<'a> {
    processes: &'a [Process],
    /// Admission order: by arrival, then registration order.
    admission_order: Vec<usize>,
    admitted: Vec<bool>,
    now: Ticks,
    remaining: HashMap<usize, Ticks>,
    ready: VecDeque<usize>,
    snapshots: Vec<ReadyQueueSnapshot>,
    records: Vec<ResultRecord>,
    record_index: HashMap<usize, usize>,
    slices: Vec<DispatchSlice>,
}

impl<'a> SimulationContext<'a> {
    /// Creates a context at t=0 with every burst outstanding.
    pub fn new(processes: &'a [Process]) -> Self {
        let mut admission_order: Vec<usize> = (0..processes.len()).collect();
        // Stable: equal arrivals keep registration order.
        admission_order.sort_by_key(|&i| processes[i].arrival);

        let remaining = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.burst))
            .collect();

        Self {
            processes,
            admission_order,
            admitted: vec![false; processes.len()],
            now: 0,
            remaining,
            ready: VecDeque::new(),
            snapshots: Vec::new(),
            records: Vec::with_capacity(processes.len()),
            record_index: HashMap::with_capacity(processes.len()),
            slices: Vec::new(),
        }
    }

    /// Current simulation time.
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// The process at `index`.
    pub fn process(&self, index: usize) -> &'a Process {
        let processes: &'a [Process] = self.processes;
        &processes[index]
    }

    /// Remaining burst for a process, `None` once finished.
    pub fn remaining(&self, index: usize) -> Option<Ticks> {
        self.remaining.get(&index).copied()
    }

    /// Ready-queue contents as process IDs, head first.
    pub fn ready_ids(&self) -> Vec<String> {
        self.ready
            .iter()
            .map(|&i| self.processes[i].id.clone())
            .collect()
    }

    /// Ready-queue contents with the data selection rules need.
    pub fn ready_entries(&self) -> Vec<ReadyEntry<'a>> {
        let processes: &'a [Process] = self.processes;
        self.ready
            .iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                self.remaining.get(&index).map(|&remaining| ReadyEntry {
                    index,
                    process: &processes[index],
                    remaining,
                    position,
                })
            })
            .collect()
    }

    /// Whether every process has finished.
    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty() && self.ready.is_empty()
    }

    /// Appends every newly arrived process to the ready queue.
    ///
    /// A process is admitted exactly once; re-enqueueing after preemption
    /// goes through [`requeue`](Self::requeue).
    pub fn admit_arrivals(&mut self) {
        for &i in &self.admission_order {
            if self.processes[i].arrival > self.now {
                break;
            }
            if !self.admitted[i] && self.remaining.contains_key(&i) {
                self.admitted[i] = true;
                self.ready.push_back(i);
            }
        }
    }

    /// Appends the current ready queue to the snapshot log.
    pub fn record_snapshot(&mut self) {
        let queue = self.ready_ids();
        self.snapshots.push(ReadyQueueSnapshot {
            time: self.now,
            queue,
        });
    }

    /// Advances the clock by one idle tick.
    pub fn idle_tick(&mut self) {
        self.now += 1;
    }

    /// Opens the process's result record on its first dispatch.
    pub fn dispatch(&mut self, index: usize) {
        if self.record_index.contains_key(&index) {
            return;
        }
        let p = &self.processes[index];
        self.record_index.insert(index, self.records.len());
        self.records
            .push(ResultRecord::dispatched(&p.id, p.arrival, p.burst, self.now));
    }

    /// Removes a process from the ready queue, keeping its burst outstanding.
    pub fn dequeue(&mut self, index: usize) {
        self.ready.retain(|&i| i != index);
    }

    /// Re-appends a preempted process at the tail of the ready queue.
    pub fn requeue(&mut self, index: usize) {
        if self.remaining.contains_key(&index) && !self.ready.contains(&index) {
            self.ready.push_back(index);
        }
    }

    /// Runs a process for up to `ticks` and advances the clock.
    ///
    /// Returns `true` if the process completed; its record is finalized
    /// and it leaves both the ready queue and the remaining-burst map.
    pub fn run(&mut self, index: usize, ticks: Ticks) -> bool {
        let Some(left) = self.remaining.get_mut(&index) else {
            return false;
        };
        let ran = ticks.min(*left);
        *left -= ran;
        let finished = *left == 0;

        let start = self.now;
        self.now += ran;
        self.push_slice(index, start, self.now);

        if finished {
            self.remaining.remove(&index);
            self.dequeue(index);
            if let Some(&r) = self.record_index.get(&index) {
                self.records[r].complete(self.now);
            }
        }
        finished
    }

    fn push_slice(&mut self, index: usize, start: Ticks, end: Ticks) {
        if start == end {
            return;
        }
        let id = &self.processes[index].id;
        if let Some(last) = self.slices.last_mut() {
            if last.id == *id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(DispatchSlice::new(id.clone(), start, end));
    }

    /// Consumes the context, yielding (records, snapshots, slices).
    pub fn into_parts(
        self,
    ) -> (
        Vec<ResultRecord>,
        Vec<ReadyQueueSnapshot>,
        Vec<DispatchSlice>,
    ) {
        (self.records, self.snapshots, self.slices)
    }
}
