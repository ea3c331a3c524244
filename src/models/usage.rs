use std::fmt::Display;

/// Utilization of a compute resource as a whole percentage.
/// Nominally 0-100 but the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Usage {
    pub value: i32,
}

impl From<i32> for Usage {
    fn from(value: i32) -> Self {
        Self { value }
    }
}

impl Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} %)", self.value)
    }
}
