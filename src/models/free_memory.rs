use std::fmt::Display;

/// Megabytes of memory currently unallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FreeMemory {
    pub megabytes: i32,
}

impl From<i32> for FreeMemory {
    fn from(megabytes: i32) -> Self {
        Self { megabytes }
    }
}

impl Display for FreeMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} MB)", self.megabytes)
    }
}
