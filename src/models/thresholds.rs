use std::fmt::Display;

/// Limits handed to a single diagnose call. CPU and GPU are the highest
/// usage percentages that still pass. Memory free at or below `memory`
/// megabytes is insufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub cpu: i32,
    pub gpu: i32,
    pub memory: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: 50,
            gpu: 90,
            memory: 1000,
        }
    }
}

impl Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(Thresholds: cpu={}%, gpu={}%, memory={}MB)",
            self.cpu, self.gpu, self.memory
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.cpu, 50);
        assert_eq!(thresholds.gpu, 90);
        assert_eq!(thresholds.memory, 1000);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Thresholds::default().to_string(),
            "(Thresholds: cpu=50%, gpu=90%, memory=1000MB)"
        );
    }
}
