//! Spaceman: the one built-in character drawn by the generic template.

use image::Rgba;

use super::template::{CharacterPalette, CharacterStyle, HatStyle};
use super::TemplateCharacter;
use crate::color::rgb;

/// Visor glow; differs from the default eye color so the eyes glow.
pub const VISOR: Rgba<u8> = rgb(90, 230, 255);

pub fn spaceman_style() -> CharacterStyle {
    CharacterStyle {
        palette: CharacterPalette {
            skin: rgb(210, 214, 222),
            hair: rgb(180, 186, 196),
            body: rgb(226, 230, 236),
            trim: rgb(230, 120, 40),
            legs: rgb(196, 200, 210),
            boots: rgb(90, 94, 104),
            hat: rgb(160, 166, 178),
            hat_trim: rgb(255, 80, 80),
            cape: rgb(0, 0, 0),
            eyes: VISOR,
        },
        hat: Some(HatStyle::Antenna),
        cape: false,
    }
}

pub fn spaceman() -> TemplateCharacter {
    TemplateCharacter::new("spaceman", spaceman_style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::CharacterGenerator;
    use crate::spritesheet::{render_frame, Direction};

    #[test]
    fn test_spaceman_style() {
        let style = spaceman_style();
        assert_eq!(style.hat, Some(HatStyle::Antenna));
        assert!(!style.cape);
        assert!(style.glowing_eyes());
    }

    #[test]
    fn test_visor_shows_only_from_the_front() {
        let man = spaceman();
        let front = render_frame(|c, d, f| man.draw(c, d, f), Direction::Down, 0);
        let back = render_frame(|c, d, f| man.draw(c, d, f), Direction::Up, 0);
        assert!(front.pixels().any(|p| *p == VISOR));
        assert!(!back.pixels().any(|p| *p == VISOR));
    }
}
