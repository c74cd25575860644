//! Parallel build execution.
//!
//! Targets are independent, so the whole plan is handed to a rayon pool
//! sized by `--jobs`. Results come back in plan order whatever the
//! scheduling, and one failed target does not stop the others.
//!
//! # Example
//!
//! ```ignore
//! use spritegen::build::{BuildContext, ParallelBuild};
//!
//! let context = BuildContext::new(config, project_root);
//! let result = ParallelBuild::new(context).with_jobs(4).run()?;
//! println!("{}", result.summary());
//! ```

use std::time::Instant;

use rayon::prelude::*;

use crate::build::{
    build_target, create_filtered_plan, BuildContext, BuildError, BuildPlan, BuildResult, BuildTarget, NullProgress,
    ProgressEvent, ProgressReporter, TargetResult,
};
use crate::output::ensure_dir;

/// Parallel build executor.
pub struct ParallelBuild {
    context: BuildContext,
    jobs: usize,
    reporter: Box<dyn ProgressReporter>,
}

impl ParallelBuild {
    /// Create a build using the context's job count and no progress output.
    pub fn new(context: BuildContext) -> Self {
        let jobs = context.jobs();
        Self { context, jobs, reporter: Box::new(NullProgress) }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Plan, filter and run the build.
    pub fn run(&self) -> Result<BuildResult, BuildError> {
        let plan = create_filtered_plan(&self.context)?;
        self.run_plan(&plan)
    }

    /// Run the build with a pre-created plan.
    pub fn run_plan(&self, plan: &BuildPlan) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        ensure_dir(&self.context.out_dir())?;

        log::debug!("building {} targets with {} workers", plan.len(), self.jobs);
        self.reporter.report(ProgressEvent::BuildStarted { total_targets: plan.len() });

        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build()?;
        let targets: Vec<TargetResult> =
            pool.install(|| plan.targets().par_iter().map(|target| self.execute_target(target)).collect());

        let mut result = BuildResult::new();
        for target in targets {
            result.add_result(target);
        }
        let result = result.with_duration(start.elapsed());

        self.reporter.report(ProgressEvent::BuildCompleted {
            success: result.is_success(),
            duration_ms: result.total_duration.as_millis() as u64,
            succeeded: result.success_count(),
            failed: result.failed_count(),
        });

        Ok(result)
    }

    fn execute_target(&self, target: &BuildTarget) -> TargetResult {
        let start = Instant::now();
        self.reporter.report(ProgressEvent::TargetStarted { target_id: target.id.clone() });

        let result = match build_target(&self.context, target) {
            Ok(outputs) => TargetResult::success(target.id.clone(), outputs, start.elapsed()),
            Err(e) => {
                log::error!("{}: {}", target.id, e);
                TargetResult::failed(target.id.clone(), e.to_string(), start.elapsed())
            }
        };

        self.reporter.report(ProgressEvent::TargetCompleted {
            target_id: result.target_id.clone(),
            status: result.status.clone(),
            duration_ms: result.duration.as_millis() as u64,
        });
        result
    }
}
