//! Build layer for spritegen
//!
//! Each generated sheet is a build target. The pipeline plans every target
//! (built-in characters, configured template characters, the tile atlas and
//! the mask strip), filters the plan by the requested targets and renders
//! the rest in parallel.
//!
//! # Example
//!
//! ```ignore
//! use spritegen::build::{BuildContext, ParallelBuild};
//! use spritegen::config::load_config;
//!
//! let context = BuildContext::from_loaded(load_config(None)?);
//! let result = ParallelBuild::new(context).run()?;
//! println!("Built {} targets", result.success_count());
//! ```

pub mod context;
pub mod parallel;
pub mod pipeline;
pub mod progress;
pub mod result;
pub mod target;

pub use context::*;
pub use parallel::*;
pub use pipeline::*;
pub use progress::*;
pub use result::*;
pub use target::*;
