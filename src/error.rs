use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationFault {
    pub virt_addr: u32,
}

impl fmt::Display for TranslationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation fault at virtual address {:#07x}", self.virt_addr)
    }
}

impl std::error::Error for TranslationFault {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull {
    pub pid: u32,
}

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheduler queue full, dropped pid {}", self.pid)
    }
}

impl std::error::Error for QueueFull {}
