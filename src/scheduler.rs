use std::sync::{Arc, Mutex};

use crate::error::QueueFull;
use crate::pcb::Pcb;
use crate::queue::PriorityQueue;

struct SchedulerState {
    ready: PriorityQueue,
    run: PriorityQueue,
}

pub struct Scheduler {
    state: Mutex<SchedulerState>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { state: Mutex::new(SchedulerState { ready: PriorityQueue::new(), run: PriorityQueue::new() }) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SchedulerState> {
        self.state.lock().expect("scheduler lock poisoned")
    }

    pub fn is_empty(&self) -> bool {
        let state = self.lock();
        state.ready.is_empty() && state.run.is_empty()
    }

    pub fn add_proc(&self, proc: Arc<Pcb>) -> Result<(), QueueFull> {
        self.lock().ready.enqueue(proc)
    }

    pub fn put_proc(&self, proc: Arc<Pcb>) -> Result<(), QueueFull> {
        self.lock().run.enqueue(proc)
    }

    // ready and run share one lock, so the run->ready drain below always
    // happens atomically with the dequeue that follows it.
    pub fn get_proc(&self) -> Option<Arc<Pcb>> {
        let mut state = self.lock();
        if state.ready.is_empty() {
            while let Some(proc) = state.run.dequeue() {
                let _ = state.ready.enqueue(proc);
            }
        }
        state.ready.dequeue()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
