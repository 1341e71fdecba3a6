use crate::layout::NUM_PAGES;

pub const FREE: u32 = 0;
pub const END_OF_CHAIN: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSlot {
    pub owner: u32,
    pub index: usize,
    pub next: i32,
}

impl FrameSlot {
    const fn free() -> Self {
        FrameSlot { owner: FREE, index: 0, next: END_OF_CHAIN }
    }

    pub fn is_free(&self) -> bool {
        self.owner == FREE
    }
}

#[derive(Debug, Clone)]
pub struct FrameTable {
    slots: [FrameSlot; NUM_PAGES],
}

impl FrameTable {
    pub fn new() -> Self {
        FrameTable { slots: [FrameSlot::free(); NUM_PAGES] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, frame: usize) -> FrameSlot {
        self.slots[frame]
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_free()).count()
    }

    // no partial result: either count frames come back, or none do.
    pub fn find_free(&self, count: usize) -> Option<Vec<usize>> {
        let found: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_free())
            .map(|(i, _)| i)
            .take(count)
            .collect();
        if found.len() == count {
            Some(found)
        } else {
            None
        }
    }

    pub fn assign_chain(&mut self, frames: &[usize], owner: u32) {
        for (i, &frame) in frames.iter().enumerate() {
            let next = if i + 1 < frames.len() { frames[i + 1] as i32 } else { END_OF_CHAIN };
            self.slots[frame] = FrameSlot { owner, index: i, next };
        }
    }

    pub fn release_chain(&mut self, start: usize) -> usize {
        let mut count = 0;
        let mut cur = start as i32;
        while cur != END_OF_CHAIN {
            let idx = cur as usize;
            let next = self.slots[idx].next;
            self.slots[idx] = FrameSlot::free();
            count += 1;
            cur = next;
        }
        count
    }

    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, FrameSlot)> + '_ {
        self.slots.iter().enumerate().filter(|(_, s)| !s.is_free()).map(|(i, s)| (i, *s))
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::new()
    }
}
