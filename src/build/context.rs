//! Build context: resolved configuration plus per-invocation settings.

use std::path::{Path, PathBuf};

use crate::characters::template::CharacterStyle;
use crate::characters::{builtin, CharacterGenerator, TemplateCharacter};
use crate::config::{resolve_path, LoadedConfig, SpritegenConfig};

/// Everything the pipeline needs to plan and run a build.
#[derive(Debug, Clone)]
pub struct BuildContext {
    config: SpritegenConfig,
    project_root: PathBuf,
    verbose: bool,
    target_filter: Vec<String>,
}

impl BuildContext {
    pub fn new(config: SpritegenConfig, project_root: PathBuf) -> Self {
        Self { config, project_root, verbose: false, target_filter: Vec::new() }
    }

    /// Build a context from a loaded (and already merged) configuration.
    pub fn from_loaded(loaded: LoadedConfig) -> Self {
        Self::new(loaded.config, loaded.root)
    }

    pub fn config(&self) -> &SpritegenConfig {
        &self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Output directory resolved against the project root.
    pub fn out_dir(&self) -> PathBuf {
        resolve_path(&self.project_root, &self.config.project.out)
    }

    pub fn scale(&self) -> u8 {
        self.config.scale()
    }

    pub fn write_metadata(&self) -> bool {
        self.config.defaults.metadata
    }

    pub fn jobs(&self) -> usize {
        self.config.jobs()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_filter(mut self, targets: Vec<String>) -> Self {
        self.target_filter = targets;
        self
    }

    pub fn target_filter(&self) -> &[String] {
        &self.target_filter
    }

    /// Resolve a character name to a generator: built-ins first, then the
    /// template characters declared in the configuration.
    pub fn character(&self, name: &str) -> Option<Box<dyn CharacterGenerator>> {
        builtin(name).or_else(|| {
            self.config.characters.get(name).map(|c| {
                let style: CharacterStyle = c.to_style(name);
                Box::new(TemplateCharacter::new(name, style)) as Box<dyn CharacterGenerator>
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, parse_config};

    #[test]
    fn test_build_context_new() {
        let root = PathBuf::from("/project");
        let ctx = BuildContext::new(default_config(), root.clone());

        assert_eq!(ctx.project_root(), root.as_path());
        assert_eq!(ctx.out_dir(), PathBuf::from("/project/sprites"));
        assert_eq!(ctx.scale(), 1);
        assert!(!ctx.write_metadata());
        assert!(!ctx.is_verbose());
        assert!(ctx.target_filter().is_empty());
    }

    #[test]
    fn test_build_context_builders() {
        let ctx = BuildContext::new(default_config(), PathBuf::from("/project"))
            .with_verbose(true)
            .with_filter(vec!["wizard".to_string()]);

        assert!(ctx.is_verbose());
        assert_eq!(ctx.target_filter(), ["wizard".to_string()]);
    }

    #[test]
    fn test_character_lookup() {
        let config = parse_config("[characters.knight]\nhat = \"helm\"\n").unwrap();
        let ctx = BuildContext::new(config, PathBuf::from("/project"));

        assert_eq!(ctx.character("wizard").map(|c| c.name().to_string()), Some("wizard".to_string()));
        assert_eq!(ctx.character("knight").map(|c| c.name().to_string()), Some("knight".to_string()));
        assert!(ctx.character("dragon").is_none());
    }
}
