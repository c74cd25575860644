//! Configuration schema types for `spritegen.toml`
//!
//! Defines the structure and validation rules for a sprite project.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::characters::template::{CharacterPalette, CharacterStyle, HatStyle};
use crate::characters::{TemplateCharacter, BUILTIN_NAMES};
use crate::color::parse_color;
use crate::output::MAX_SCALE;

/// Names that cannot be used for custom characters: target kinds and the
/// fixed output stems of the tile and mask sheets.
pub const RESERVED_NAMES: [&str; 6] = ["character", "tiles", "masks", "transition_masks", "all", "plague_doctor"];

/// Project section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Output directory, relative to the project root
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { out: default_out() }
    }
}

fn default_out() -> PathBuf {
    PathBuf::from("sprites")
}

/// Default settings applied to all outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Integer upscale factor
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Write a JSON sidecar next to every PNG
    #[serde(default)]
    pub metadata: bool,
    /// Parallel jobs; unset means available parallelism
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { scale: default_scale(), metadata: false, jobs: None }
    }
}

fn default_scale() -> u32 {
    1
}

/// A custom character drawn by the generic template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Hat style name, or "none"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<String>,
    #[serde(default)]
    pub cape: bool,
    /// Palette slot overrides: slot name to CSS color
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

impl CharacterConfig {
    /// Resolve into a drawable style. Invalid slots and colors were rejected
    /// by validation; anything left over is skipped with a warning.
    pub fn to_style(&self, name: &str) -> CharacterStyle {
        let hat = match self.hat.as_deref() {
            None | Some("none") | Some("") => None,
            Some(hat_name) => {
                let hat = HatStyle::from_name(hat_name);
                if hat.is_none() {
                    log::warn!("character '{}': unknown hat '{}', drawing without a hat", name, hat_name);
                }
                hat
            }
        };

        let mut palette = CharacterPalette::default();
        for (slot, value) in &self.palette {
            match parse_color(value) {
                Ok(color) => {
                    if !palette.set(slot, color) {
                        log::warn!("character '{}': ignoring unknown palette slot '{}'", name, slot);
                    }
                }
                Err(e) => log::warn!("character '{}': ignoring {} = '{}': {}", name, slot, value, e),
            }
        }

        CharacterStyle { palette, hat, cape: self.cape }
    }
}

/// Complete `spritegen.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpritegenConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub characters: BTreeMap<String, CharacterConfig>,
}

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spritegen.toml: '{}' {}", self.field, self.message)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

impl SpritegenConfig {
    /// Collect every problem in the configuration.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: String, message: String| errors.push(ConfigValidationError { field, message });

        if self.defaults.scale == 0 || self.defaults.scale > MAX_SCALE as u32 {
            push("defaults.scale".to_string(), format!("must be between 1 and {}", MAX_SCALE));
        }
        if self.defaults.jobs == Some(0) {
            push("defaults.jobs".to_string(), "must be a positive integer".to_string());
        }
        if self.project.out.as_os_str().is_empty() {
            push("project.out".to_string(), "must not be empty".to_string());
        }

        for (name, character) in &self.characters {
            let field = format!("characters.{}", name);
            if !is_valid_name(name) {
                push(field.clone(), "name may only contain a-z, 0-9, '_' and '-'".to_string());
            }
            if BUILTIN_NAMES.contains(&name.as_str()) {
                push(field.clone(), "collides with a built-in character".to_string());
            } else if RESERVED_NAMES.contains(&name.as_str()) {
                push(field.clone(), "is a reserved target name".to_string());
            }
            for (slot, value) in &character.palette {
                if !CharacterPalette::SLOTS.contains(&slot.as_str()) {
                    push(
                        format!("{}.palette.{}", field, slot),
                        format!("unknown slot (expected one of {})", CharacterPalette::SLOTS.join(", ")),
                    );
                } else if let Err(e) = parse_color(value) {
                    push(format!("{}.palette.{}", field, slot), format!("invalid color '{}': {}", value, e));
                }
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Scale factor as used by the renderer.
    pub fn scale(&self) -> u8 {
        self.defaults.scale.clamp(1, MAX_SCALE as u32) as u8
    }

    /// Parallel jobs, defaulting to the available parallelism.
    pub fn jobs(&self) -> usize {
        self.defaults
            .jobs
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1)
    }

    /// Custom characters in name order.
    pub fn template_characters(&self) -> Vec<TemplateCharacter> {
        self.characters
            .iter()
            .map(|(name, character)| TemplateCharacter::new(name.clone(), character.to_style(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    #[test]
    fn test_empty_config_parse() {
        let config: SpritegenConfig = toml::from_str("").unwrap();
        assert_eq!(config.project.out, PathBuf::from("sprites"));
        assert_eq!(config.defaults.scale, 1);
        assert!(!config.defaults.metadata);
        assert!(config.characters.is_empty());
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r##"
[project]
out = "dist/sprites"

[defaults]
scale = 3
metadata = true
jobs = 2

[characters.knight]
hat = "helm"
cape = true

[characters.knight.palette]
body = "#4060a0"
cape = "crimson"
"##;
        let config: SpritegenConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.project.out, PathBuf::from("dist/sprites"));
        assert_eq!(config.scale(), 3);
        assert_eq!(config.jobs(), 2);
        assert!(config.defaults.metadata);
        assert!(config.is_valid(), "{:?}", config.validate());

        let knights = config.template_characters();
        assert_eq!(knights.len(), 1);
        let style = &knights[0].style;
        assert_eq!(style.hat, Some(HatStyle::Helm));
        assert!(style.cape);
        assert_eq!(style.palette.body, rgb(0x40, 0x60, 0xa0));
        assert_eq!(style.palette.cape, rgb(220, 20, 60));
    }

    #[test]
    fn test_validation_scale_range() {
        for scale in [0, 17] {
            let config: SpritegenConfig = toml::from_str(&format!("[defaults]\nscale = {}", scale)).unwrap();
            assert!(config.validate().iter().any(|e| e.field == "defaults.scale"));
        }
    }

    #[test]
    fn test_validation_name_collisions() {
        let toml = r#"
[characters.wizard]
[characters.tiles]
[characters."Bad Name"]
"#;
        let config: SpritegenConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "characters.wizard" && e.message.contains("built-in")));
        assert!(errors.iter().any(|e| e.field == "characters.tiles" && e.message.contains("reserved")));
        assert!(errors.iter().any(|e| e.field == "characters.Bad Name"));
    }

    #[test]
    fn test_validation_palette() {
        let toml = r##"
[characters.ghost.palette]
aura = "#ffffff"
body = "not-a-color"
"##;
        let config: SpritegenConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "characters.ghost.palette.aura"));
        assert!(errors.iter().any(|e| e.field == "characters.ghost.palette.body"));
        assert!(errors[0].to_string().starts_with("spritegen.toml:"));
    }

    #[test]
    fn test_unknown_hat_draws_bare_headed() {
        let character = CharacterConfig { hat: Some("sombrero".to_string()), ..Default::default() };
        assert_eq!(character.to_style("x").hat, None);
        let character = CharacterConfig { hat: Some("none".to_string()), ..Default::default() };
        assert_eq!(character.to_style("x").hat, None);
    }
}
