use crate::effects::hold::PlayerId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GameTick(pub u64);

impl GameTick {
    pub fn advance(self, ticks: u64) -> GameTick {
        GameTick(self.0.saturating_add(ticks))
    }
}

/// Work deferred to a later tick. Entries are not cancelable; every task
/// re-checks its precondition when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    SyncHold(PlayerId),
    ClearMark(PlayerId),
}

#[derive(Debug, Clone, Copy)]
struct ScheduledEntry {
    due: GameTick,
    seq: u64,
    task: DeferredTask,
}

/// Min-heap by due tick, FIFO within a tick via seq.
impl Ord for ScheduledEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ScheduledEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEntry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for ScheduledEntry {}

/// Tick-driven task queue. The host advances game time and drains ready
/// tasks at the start of each tick.
#[derive(Debug, Default)]
pub struct TickScheduler {
    heap: BinaryHeap<ScheduledEntry>,
    next_seq: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: DeferredTask, delay_ticks: u64, now: GameTick) {
        let entry = ScheduledEntry {
            due: now.advance(delay_ticks),
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    pub fn pop_ready(&mut self, now: GameTick) -> Option<DeferredTask> {
        let entry = self.heap.peek()?;
        if entry.due > now {
            return None;
        }
        self.heap.pop().map(|entry| entry.task)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_task_pops_first() {
        let mut scheduler = TickScheduler::new();
        let now = GameTick(100);
        scheduler.schedule(DeferredTask::ClearMark(PlayerId(1)), 10, now);
        scheduler.schedule(DeferredTask::SyncHold(PlayerId(2)), 1, now);

        assert_eq!(scheduler.pop_ready(GameTick(100)), None);
        assert_eq!(
            scheduler.pop_ready(GameTick(101)),
            Some(DeferredTask::SyncHold(PlayerId(2)))
        );
        assert_eq!(scheduler.pop_ready(GameTick(101)), None);
        assert_eq!(
            scheduler.pop_ready(GameTick(110)),
            Some(DeferredTask::ClearMark(PlayerId(1)))
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn same_tick_tasks_keep_submission_order() {
        let mut scheduler = TickScheduler::new();
        let now = GameTick(0);
        scheduler.schedule(DeferredTask::SyncHold(PlayerId(1)), 1, now);
        scheduler.schedule(DeferredTask::SyncHold(PlayerId(2)), 1, now);
        scheduler.schedule(DeferredTask::SyncHold(PlayerId(3)), 1, now);

        let mut order = Vec::new();
        while let Some(task) = scheduler.pop_ready(GameTick(1)) {
            order.push(task);
        }
        assert_eq!(
            order,
            vec![
                DeferredTask::SyncHold(PlayerId(1)),
                DeferredTask::SyncHold(PlayerId(2)),
                DeferredTask::SyncHold(PlayerId(3)),
            ]
        );
    }

    #[test]
    fn zero_delay_runs_on_the_same_tick() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule(DeferredTask::SyncHold(PlayerId(7)), 0, GameTick(5));
        assert_eq!(
            scheduler.pop_ready(GameTick(5)),
            Some(DeferredTask::SyncHold(PlayerId(7)))
        );
    }
}
