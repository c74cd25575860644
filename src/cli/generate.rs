//! Generate command implementation

use std::process::ExitCode;

use crate::build::{
    create_filtered_plan, ConsoleProgress, JsonProgress, NullProgress, ParallelBuild, ProgressReporter,
};
use crate::config::CliOverrides;

use super::{load_context, report_error, ConfigArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Run the generate command
pub fn run_generate(
    args: &ConfigArgs,
    overrides: &CliOverrides,
    targets: Vec<String>,
    quiet: bool,
    json: bool,
) -> ExitCode {
    let context = match load_context(args, overrides) {
        Ok(context) => context.with_filter(targets),
        Err(code) => return code,
    };

    let plan = match create_filtered_plan(&context) {
        Ok(plan) => plan,
        Err(e) => return report_error(&e, EXIT_INVALID_ARGS),
    };

    let reporter: Box<dyn ProgressReporter> = if quiet {
        Box::new(NullProgress::new())
    } else if json {
        Box::new(JsonProgress::new())
    } else {
        Box::new(ConsoleProgress::new().with_verbose(args.verbose))
    };

    log::info!("writing {} targets to {}", plan.len(), context.out_dir().display());
    let build = ParallelBuild::new(context).with_reporter(reporter);

    match build.run_plan(&plan) {
        Ok(result) if result.is_success() => ExitCode::from(EXIT_SUCCESS),
        Ok(result) => {
            for failure in result.failures() {
                eprintln!("Error: {}: {}", failure.target_id, failure.status);
            }
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => report_error(&e, EXIT_ERROR),
    }
}
