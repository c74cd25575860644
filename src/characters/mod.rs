//! Character generators
//!
//! Every character is a pure function of `(direction, frame)` drawn onto a
//! 64×64 cell. Eleven characters are hand-authored, each in its own module;
//! the rest go through the generic humanoid [`template`].

pub mod assassin;
pub mod gladiator;
pub mod plague_doctor;
pub mod raptor;
pub mod samurai;
pub mod soldier;
pub mod spaceman;
pub mod template;
pub mod tidecaller;
pub mod vampire;
pub mod warden;
pub mod wizard;
pub mod wraith;

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::spritesheet::{render_character_sheet, Direction};
use template::{draw_generic_character, CharacterStyle};

/// Something that can draw one frame cell of a character sheet.
pub trait CharacterGenerator: Send + Sync {
    /// Sheet name; also the output file stem.
    fn name(&self) -> &str;

    /// Draw the cell for `(direction, frame)` onto a 64×64 canvas.
    fn draw(&self, canvas: &mut Canvas, direction: Direction, frame: usize);

    /// Render the complete 256×256 sheet.
    fn render_sheet(&self) -> RgbaImage {
        log::debug!("rendering character sheet '{}'", self.name());
        render_character_sheet(|canvas, direction, frame| self.draw(canvas, direction, frame))
    }
}

/// Declares a unit struct that forwards to a hand-authored draw function.
macro_rules! hand_drawn {
    ($ty:ident, $name:literal, $draw:path) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl CharacterGenerator for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn draw(&self, canvas: &mut Canvas, direction: Direction, frame: usize) {
                $draw(canvas, direction, frame)
            }
        }
    };
}

hand_drawn!(Assassin, "assassin", assassin::draw_assassin);
hand_drawn!(Gladiator, "gladiator", gladiator::draw_gladiator);
hand_drawn!(PlagueDoctor, "plaguedoctor", plague_doctor::draw_plague_doctor);
hand_drawn!(Raptor, "raptor", raptor::draw_raptor);
hand_drawn!(Samurai, "samurai", samurai::draw_samurai);
hand_drawn!(Soldier, "soldier", soldier::draw_soldier);
hand_drawn!(Tidecaller, "tidecaller", tidecaller::draw_tidecaller);
hand_drawn!(Vampire, "vampire", vampire::draw_vampire);
hand_drawn!(Warden, "warden", warden::draw_warden);
hand_drawn!(Wizard, "wizard", wizard::draw_wizard);
hand_drawn!(Wraith, "wraith", wraith::draw_wraith);

/// A character drawn entirely by the generic humanoid template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCharacter {
    pub name: String,
    pub style: CharacterStyle,
}

impl TemplateCharacter {
    pub fn new(name: impl Into<String>, style: CharacterStyle) -> Self {
        Self { name: name.into(), style }
    }
}

impl CharacterGenerator for TemplateCharacter {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, canvas: &mut Canvas, direction: Direction, frame: usize) {
        draw_generic_character(canvas, &self.style, direction, frame)
    }
}

/// Names of the built-in characters, in build order.
pub const BUILTIN_NAMES: [&str; 12] = [
    "assassin",
    "gladiator",
    "plaguedoctor",
    "raptor",
    "samurai",
    "soldier",
    "spaceman",
    "tidecaller",
    "vampire",
    "warden",
    "wizard",
    "wraith",
];

/// Map accepted aliases onto the sheet name.
pub fn canonical_name(name: &str) -> &str {
    match name {
        "plague_doctor" => "plaguedoctor",
        other => other,
    }
}

/// Look up a built-in character by name.
pub fn builtin(name: &str) -> Option<Box<dyn CharacterGenerator>> {
    let generator: Box<dyn CharacterGenerator> = match canonical_name(name) {
        "assassin" => Box::new(Assassin),
        "gladiator" => Box::new(Gladiator),
        "plaguedoctor" => Box::new(PlagueDoctor),
        "raptor" => Box::new(Raptor),
        "samurai" => Box::new(Samurai),
        "soldier" => Box::new(Soldier),
        "spaceman" => Box::new(spaceman::spaceman()),
        "tidecaller" => Box::new(Tidecaller),
        "vampire" => Box::new(Vampire),
        "warden" => Box::new(Warden),
        "wizard" => Box::new(Wizard),
        "wraith" => Box::new(Wraith),
        _ => return None,
    };
    Some(generator)
}

/// Every built-in character.
pub fn builtin_characters() -> Vec<Box<dyn CharacterGenerator>> {
    BUILTIN_NAMES.iter().filter_map(|name| builtin(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::{frame_rect, FRAMES_PER_DIRECTION};

    #[test]
    fn test_registry_is_complete() {
        let all = builtin_characters();
        assert_eq!(all.len(), BUILTIN_NAMES.len());
        for (generator, name) in all.iter().zip(BUILTIN_NAMES) {
            assert_eq!(generator.name(), name);
        }
        assert!(builtin("plague_doctor").is_some());
        assert!(builtin("nobody").is_none());
    }

    #[test]
    fn test_every_cell_of_every_character_is_drawn() {
        for generator in builtin_characters() {
            let sheet = generator.render_sheet();
            assert_eq!(sheet.dimensions(), (256, 256), "{}", generator.name());
            for dir in Direction::ALL {
                for frame in 0..FRAMES_PER_DIRECTION {
                    let (x0, y0, w, h) = frame_rect(dir, frame);
                    let opaque = (y0..y0 + h)
                        .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
                        .filter(|&(x, y)| sheet.get_pixel(x, y).0[3] > 0)
                        .count();
                    assert!(opaque > 150, "{} {} {} is nearly empty ({})", generator.name(), dir, frame, opaque);
                }
            }
        }
    }

    #[test]
    fn test_walk_cycles_animate() {
        for generator in builtin_characters() {
            for dir in Direction::ALL {
                let a = crate::spritesheet::render_frame(|c, d, f| generator.draw(c, d, f), dir, 0);
                let b = crate::spritesheet::render_frame(|c, d, f| generator.draw(c, d, f), dir, 1);
                assert_ne!(a, b, "{} facing {} does not animate", generator.name(), dir);
            }
        }
    }

    #[test]
    fn test_out_of_range_frame_wraps() {
        for generator in builtin_characters() {
            let a = crate::spritesheet::render_frame(|c, d, f| generator.draw(c, d, f), Direction::Left, 1);
            let b = crate::spritesheet::render_frame(|c, d, f| generator.draw(c, d, f), Direction::Left, 5);
            assert_eq!(a, b, "{}", generator.name());
        }
    }
}
