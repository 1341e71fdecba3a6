use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::layout::PAGE_SIZE;
use crate::page_dir::SegTable;

#[derive(Debug)]
pub struct Pcb {
    pid: u32,
    priority: u32,
    bp: AtomicU32,
    seg_table: Mutex<SegTable>,
}

impl Pcb {
    pub fn new(pid: u32, priority: u32) -> Self {
        assert_ne!(pid, 0, "pid 0 is reserved as the free-frame sentinel");
        // bp starts at PAGE_SIZE, not 0: 0 is alloc()'s null-alloc sentinel.
        Pcb { pid, priority, bp: AtomicU32::new(PAGE_SIZE), seg_table: Mutex::new(SegTable::new()) }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn bp(&self) -> u32 {
        self.bp.load(Ordering::SeqCst)
    }

    pub(crate) fn set_bp(&self, value: u32) {
        self.bp.store(value, Ordering::SeqCst);
    }

    pub(crate) fn seg_table(&self) -> std::sync::MutexGuard<'_, SegTable> {
        self.seg_table.lock().expect("pcb seg_table lock poisoned")
    }
}
