//! List command implementation

use std::process::ExitCode;

use serde_json::json;

use crate::build::create_build_plan;
use crate::config::CliOverrides;

use super::{load_context, report_error, ConfigArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Print every target id with its output path.
pub fn run_list(args: &ConfigArgs, json: bool) -> ExitCode {
    let context = match load_context(args, &CliOverrides::default()) {
        Ok(context) => context,
        Err(code) => return code,
    };
    let plan = create_build_plan(&context);

    if json {
        let targets: Vec<_> = plan
            .targets()
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "kind": t.kind.name(),
                    "name": t.name,
                    "output": t.output.display().to_string(),
                })
            })
            .collect();
        return match serde_json::to_string_pretty(&targets) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => report_error(&e, EXIT_ERROR),
        };
    }

    let width = plan.targets().iter().map(|t| t.id.len()).max().unwrap_or(0);
    for target in plan.targets() {
        println!("{:width$}  {}", target.id, target.output.display(), width = width);
    }
    ExitCode::from(EXIT_SUCCESS)
}
