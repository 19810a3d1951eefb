use crate::cutoff::Cutoff;
use std::fmt;
use std::time::Duration;

/// Summary of one cutoff search, printed by the binary.
#[derive(Debug, Clone)]
pub struct CutoffStatistics {
    pub strategy: &'static str,
    pub algorithm: &'static str,
    pub obstacle_count: usize,
    pub probes: usize,
    pub reachable_probes: usize,
    pub elapsed: Duration,
}

impl CutoffStatistics {
    pub fn new(
        strategy: &'static str,
        algorithm: &'static str,
        obstacle_count: usize,
        cutoff: &Cutoff,
        elapsed: Duration,
    ) -> Self {
        CutoffStatistics {
            strategy,
            algorithm,
            obstacle_count,
            probes: cutoff.probes.len(),
            reachable_probes: cutoff
                .probes
                .iter()
                .filter(|probe| probe.steps.is_some())
                .count(),
            elapsed,
        }
    }

    /// Searches run, as a fraction of what re-searching after every placement
    /// would need in the worst case.
    pub fn probe_ratio(&self) -> f64 {
        if self.obstacle_count > 0 {
            self.probes as f64 / self.obstacle_count as f64
        } else {
            0.0
        }
    }

    pub fn average_probe_time(&self) -> Duration {
        if self.probes > 0 {
            self.elapsed / self.probes as u32
        } else {
            Duration::ZERO
        }
    }
}

impl fmt::Display for CutoffStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {} ({})", self.strategy, self.algorithm)?;
        writeln!(f, "Obstacles: {}", self.obstacle_count)?;
        writeln!(
            f,
            "Probes: {} ({} reachable, {} unreachable)",
            self.probes,
            self.reachable_probes,
            self.probes - self.reachable_probes
        )?;
        writeln!(f, "Probe ratio: {:.3}", self.probe_ratio())?;
        writeln!(f, "Total time: {:.2?}", self.elapsed)?;
        write!(f, "Average probe time: {:.2?}", self.average_probe_time())
    }
}
