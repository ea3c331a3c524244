use std::fmt::Display;

/// Result of one diagnose call. Only the first violated check is reported,
/// in the order cpu, gpu, memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Healthy,
    CpuOverUtilized,
    GpuOverUtilized,
    InsufficientMemory,
}

impl Diagnosis {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Diagnosis::Healthy)
    }
}

impl Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Diagnosis::Healthy => "all readings within thresholds",
            Diagnosis::CpuOverUtilized => "cpu utilized more than expected",
            Diagnosis::GpuOverUtilized => "gpu usage error",
            Diagnosis::InsufficientMemory => "not enough memory",
        };
        write!(f, "{}", message)
    }
}
