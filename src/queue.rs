use std::sync::Arc;

use heapless::Vec as HVec;
use log::warn;

use crate::error::QueueFull;
use crate::layout::MAX_QUEUE_SIZE;
use crate::pcb::Pcb;

#[derive(Default)]
pub struct PriorityQueue {
    entries: HVec<Arc<Pcb>, MAX_QUEUE_SIZE>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue { entries: HVec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn enqueue(&mut self, proc: Arc<Pcb>) -> Result<(), QueueFull> {
        if self.entries.is_full() {
            warn!("scheduler queue full ({} entries), dropping pid {}", MAX_QUEUE_SIZE, proc.pid());
            return Err(QueueFull { pid: proc.pid() });
        }
        let _ = self.entries.push(proc);
        Ok(())
    }

    // highest priority wins; ties broken by earliest insertion.
    pub fn dequeue(&mut self) -> Option<Arc<Pcb>> {
        if self.entries.is_empty() {
            return None;
        }
        let mut max_i = 0;
        let mut max_priority = self.entries[0].priority();
        for (i, p) in self.entries.iter().enumerate().skip(1) {
            if p.priority() > max_priority {
                max_priority = p.priority();
                max_i = i;
            }
        }
        let picked = self.entries[max_i].clone();
        let len = self.entries.len();
        for j in max_i..len - 1 {
            self.entries[j] = self.entries[j + 1].clone();
        }
        self.entries.pop();
        Some(picked)
    }
}
