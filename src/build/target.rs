//! Build target definitions.
//!
//! A build target is one generated sheet: a character, the tile atlas or the
//! transition mask strip. Each target writes exactly one PNG.

use std::path::PathBuf;

use crate::characters::canonical_name;

/// Type of build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// 4×4 character sheet
    Character,
    /// Isometric tile atlas
    Tiles,
    /// Transition mask strip
    Masks,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::Character, TargetKind::Tiles, TargetKind::Masks];

    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Character => "character",
            TargetKind::Tiles => "tiles",
            TargetKind::Masks => "masks",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output stem of the tile atlas.
pub const TILES_STEM: &str = "tiles";
/// Output stem of the mask strip.
pub const MASKS_STEM: &str = "transition_masks";

/// A build target representing work to be done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    /// Unique identifier (e.g., "character:wizard")
    pub id: String,
    pub kind: TargetKind,
    /// Sheet name; also the output file stem
    pub name: String,
    /// PNG written by this target
    pub output: PathBuf,
}

impl BuildTarget {
    fn new(kind: TargetKind, name: impl Into<String>, output: PathBuf) -> Self {
        let name = name.into();
        Self { id: format!("{}:{}", kind, name), kind, name, output }
    }

    /// Create a character sheet target.
    pub fn character(name: impl Into<String>, output: PathBuf) -> Self {
        Self::new(TargetKind::Character, name, output)
    }

    /// Create the tile atlas target.
    pub fn tiles(output: PathBuf) -> Self {
        Self::new(TargetKind::Tiles, TILES_STEM, output)
    }

    /// Create the transition mask target.
    pub fn masks(output: PathBuf) -> Self {
        Self::new(TargetKind::Masks, MASKS_STEM, output)
    }

    /// Check if this target matches a filter string.
    ///
    /// Accepts a full id (`character:wizard`), a kind (`character`), a name
    /// (`wizard`) or a `kind:*` / `*:name` pattern.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if self.id == filter || self.kind.name() == filter || self.name == canonical_name(filter) {
            return true;
        }

        if let Some((kind_pat, name_pat)) = filter.split_once(':') {
            let kind_matches = kind_pat == "*" || kind_pat == self.kind.name();
            let name_matches = name_pat == "*" || self.name == canonical_name(name_pat);
            return kind_matches && name_matches;
        }

        false
    }
}

/// Ordered collection of build targets.
#[derive(Debug, Default, Clone)]
pub struct BuildPlan {
    targets: Vec<BuildTarget>,
}

impl BuildPlan {
    pub fn new() -> Self {
        Self { targets: vec![] }
    }

    pub fn add_target(&mut self, target: BuildTarget) {
        self.targets.push(target);
    }

    pub fn targets(&self) -> &[BuildTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BuildTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Keep only targets matching at least one pattern.
    ///
    /// Returns the first pattern that matches nothing as the error. An empty
    /// pattern list keeps every target.
    pub fn filter(mut self, patterns: &[String]) -> Result<Self, String> {
        if patterns.is_empty() {
            return Ok(self);
        }

        if let Some(unknown) = patterns.iter().find(|p| !self.targets.iter().any(|t| t.matches_filter(p))) {
            return Err(unknown.clone());
        }

        self.targets.retain(|t| patterns.iter().any(|p| t.matches_filter(p)));
        Ok(self)
    }
}
