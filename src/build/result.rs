//! Build result types.

use std::path::PathBuf;
use std::time::Duration;

/// Status of a single build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Failed(String),
}

impl BuildStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BuildStatus::Failed(_))
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of building a single target.
#[derive(Debug, Clone)]
pub struct TargetResult {
    pub target_id: String,
    pub status: BuildStatus,
    /// Files written (PNG first, then the sidecar if any)
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
}

impl TargetResult {
    pub fn success(target_id: String, outputs: Vec<PathBuf>, duration: Duration) -> Self {
        Self { target_id, status: BuildStatus::Success, outputs, duration }
    }

    pub fn failed(target_id: String, error: String, duration: Duration) -> Self {
        Self { target_id, status: BuildStatus::Failed(error), outputs: vec![], duration }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Result of a complete build run, in plan order.
#[derive(Debug, Default)]
pub struct BuildResult {
    pub targets: Vec<TargetResult>,
    pub total_duration: Duration,
}

impl BuildResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: TargetResult) {
        self.targets.push(result);
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    pub fn success_count(&self) -> usize {
        self.targets.iter().filter(|r| r.status.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.targets.iter().filter(|r| r.status.is_failure()).count()
    }

    /// No target failed.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn all_outputs(&self) -> Vec<&PathBuf> {
        self.targets.iter().flat_map(|r| r.outputs.iter()).collect()
    }

    pub fn failures(&self) -> Vec<&TargetResult> {
        self.targets.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// One-paragraph human summary.
    pub fn summary(&self) -> String {
        let success = self.success_count();
        let failed = self.failed_count();
        let total = self.targets.len();

        if failed == 0 {
            return format!("Build succeeded: {} of {} targets built in {:?}", success, total, self.total_duration);
        }

        let mut lines = vec![format!("Build failed: {} succeeded, {} failed ({} total)", success, failed, total)];
        for target in self.failures() {
            lines.push(format!("  - {}: {}", target.target_id, target.status));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_status() {
        assert!(BuildStatus::Success.is_success());
        assert!(!BuildStatus::Success.is_failure());
        let failed = BuildStatus::Failed("disk full".to_string());
        assert!(failed.is_failure());
        assert_eq!(failed.to_string(), "failed: disk full");
    }

    #[test]
    fn test_build_result_counts() {
        let mut result = BuildResult::new();
        result.add_result(TargetResult::success(
            "character:wizard".to_string(),
            vec![PathBuf::from("sprites/wizard.png"), PathBuf::from("sprites/wizard.json")],
            Duration::from_millis(5),
        ));
        result.add_result(TargetResult::failed(
            "tiles:tiles".to_string(),
            "permission denied".to_string(),
            Duration::from_millis(1),
        ));

        assert_eq!(result.success_count(), 1);
        assert_eq!(result.failed_count(), 1);
        assert!(!result.is_success());
        assert_eq!(result.all_outputs().len(), 2);
        assert_eq!(result.failures()[0].target_id, "tiles:tiles");
    }

    #[test]
    fn test_summary() {
        let mut result = BuildResult::new();
        result.add_result(TargetResult::success("masks:transition_masks".to_string(), vec![], Duration::ZERO));
        assert!(result.summary().starts_with("Build succeeded: 1 of 1"));

        result.add_result(TargetResult::failed("character:wizard".to_string(), "boom".to_string(), Duration::ZERO));
        let summary = result.summary();
        assert!(summary.starts_with("Build failed"));
        assert!(summary.contains("character:wizard: failed: boom"));
    }
}
