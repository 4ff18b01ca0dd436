//! Deterministic slice colors.

use serde::{Deserialize, Serialize};

/// Reproducible color for `counter`, formatted as uppercase `#RRGGBB`.
///
/// Each channel is `sin(f * counter) * 127 + 128` truncated to a byte, with
/// `f` = 1.666, 2.666 and 3.666 for red, green and blue.
#[must_use]
pub fn random_color(counter: u32) -> String {
    let k = f64::from(counter);
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(1.666 * k),
        channel(2.666 * k),
        channel(3.666 * k)
    )
}

fn channel(phase: f64) -> u8 {
    (phase.sin() * 127.0 + 128.0) as u8
}

/// Hands out colors for entries that did not bring their own.
///
/// A non-empty palette is cycled from its first color; otherwise colors come
/// from [`random_color`] with a counter starting at 1. The Leaflet pie plugin
/// starts palettes at index 1; this one starts at index 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorAssigner {
    counter: u32,
    palette: Vec<String>,
}

impl ColorAssigner {
    #[must_use]
    pub fn new(palette: Option<&[String]>) -> Self {
        Self {
            counter: 0,
            palette: palette.map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    pub fn next_color(&mut self) -> String {
        self.counter += 1;
        if self.palette.is_empty() {
            return random_color(self.counter);
        }
        let index = (self.counter as usize - 1) % self.palette.len();
        self.palette[index].clone()
    }

    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorAssigner, random_color};

    #[test]
    fn palette_cycles_from_first_color() {
        let palette = vec!["#111111".to_owned(), "#222222".to_owned()];
        let mut colors = ColorAssigner::new(Some(&palette));
        assert_eq!(colors.next_color(), "#111111");
        assert_eq!(colors.next_color(), "#222222");
        assert_eq!(colors.next_color(), "#111111");
    }

    #[test]
    fn empty_palette_falls_back_to_generated_colors() {
        let mut colors = ColorAssigner::new(Some(&[]));
        assert_eq!(colors.next_color(), random_color(1));
    }
}
