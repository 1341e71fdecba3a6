use std::sync::Arc;

use log::info;
use segsched::layout::PAGE_SIZE;
use segsched::{MemoryManager, Pcb, Scheduler};

fn main() {
    env_logger::init();

    info!("segsched demo starting");

    let mm = MemoryManager::new();
    let proc = Pcb::new(1, 1);

    let base = mm.alloc(2050, &proc);
    info!("allocated 2050 bytes for pid {} at {:#07x}", proc.pid(), base);

    mm.write(base + 1025, 0x7F, &proc).expect("write should succeed on a live allocation");
    let byte = mm.read(base + 1025, &proc).expect("read should succeed on a live allocation");
    info!("wrote and read back byte {:#04x} at {:#07x}", byte, base + 1025);

    print!("{}", mm.dump());

    mm.free(base, &proc);
    info!("freed allocation at {:#07x}; new break pointer {:#07x}", base, proc.bp());

    let sched = Scheduler::new();
    let procs = [Pcb::new(10, 3), Pcb::new(11, 5), Pcb::new(12, 5)].map(Arc::new);
    for p in &procs {
        sched.add_proc(p.clone()).expect("demo queue has room");
    }

    for _ in 0..procs.len() {
        let next = sched.get_proc().expect("ready queue is non-empty");
        info!("scheduled pid {} (priority {})", next.pid(), next.priority());
        sched.put_proc(next).expect("run queue has room");
    }

    info!("segsched demo finished, {} bytes of RAM simulated", PAGE_SIZE * segsched::layout::NUM_PAGES as u32);
}
