//! Color lab: mix pigments (CMYK) or lights (RGB) to satisfy a request
//! for a color analogous to red.
//!
//! Slider-driven, no drag engine. Delivery validates the mix; switching
//! modes resets the bench.

use std::time::Instant;

use mechanics_core::Feedback;
use strum::{Display, EnumIter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum ColorMode {
    #[strum(serialize = "CMYK")]
    Cmyk,
    #[strum(serialize = "RGB")]
    Rgb,
}

/// Subtractive mix, channel percentages 0-100.
pub fn cmyk_to_rgb(cmyk: [u8; 4]) -> (u8, u8, u8) {
    let [c, m, y, k] = cmyk.map(|v| f64::from(v.min(100)) / 100.0);
    let r = 255.0 * (1.0 - c) * (1.0 - k);
    let g = 255.0 * (1.0 - m) * (1.0 - k);
    let b = 255.0 * (1.0 - y) * (1.0 - k);
    (r.round() as u8, g.round() as u8, b.round() as u8)
}

/// Analogous to red: hue within 45 degrees of 0 (wrapping), with enough
/// channel spread to rule out greys.
pub fn analogous_to_red(r: u8, g: u8, b: u8) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return false;
    }
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let span = f64::from(max - min);
    let mut hue = if max == r {
        (gf - bf) / span
    } else if max == g {
        2.0 + (bf - rf) / span
    } else {
        4.0 + (rf - gf) / span
    } * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    (hue >= 315.0 || hue <= 45.0) && max - min > 40
}

pub struct ColorLab {
    mode: ColorMode,
    cmyk: [u8; 4],
    rgb: [u8; 3],
    cursor: usize,
    feedback: Option<Feedback>,
    delivered: bool,
}

impl ColorLab {
    pub fn new() -> Self {
        Self {
            mode: ColorMode::Cmyk,
            cmyk: [0; 4],
            rgb: [0; 3],
            cursor: 0,
            feedback: None,
            delivered: false,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn channel_count(&self) -> usize {
        match self.mode {
            ColorMode::Cmyk => 4,
            ColorMode::Rgb => 3,
        }
    }

    pub fn channel_label(&self, idx: usize) -> &'static str {
        match (self.mode, idx) {
            (ColorMode::Cmyk, 0) => "Cyan",
            (ColorMode::Cmyk, 1) => "Magenta",
            (ColorMode::Cmyk, 2) => "Yellow",
            (ColorMode::Cmyk, 3) => "Black",
            (ColorMode::Rgb, 0) => "Red",
            (ColorMode::Rgb, 1) => "Green",
            _ => "Blue",
        }
    }

    pub fn channel_value(&self, idx: usize) -> u8 {
        match self.mode {
            ColorMode::Cmyk => self.cmyk[idx],
            ColorMode::Rgb => self.rgb[idx],
        }
    }

    pub fn channel_max(&self) -> u8 {
        match self.mode {
            ColorMode::Cmyk => 100,
            ColorMode::Rgb => 255,
        }
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        if mode != self.mode {
            self.mode = mode;
            self.reset();
        }
    }

    pub fn focus(&mut self, idx: usize) {
        if idx < self.channel_count() {
            self.cursor = idx;
        }
    }

    pub fn focus_next(&mut self) {
        self.cursor = (self.cursor + 1) % self.channel_count();
    }

    pub fn focus_prev(&mut self) {
        self.cursor = (self.cursor + self.channel_count() - 1) % self.channel_count();
    }

    /// Nudges the focused channel. No-op once delivered.
    pub fn adjust(&mut self, delta: i16) {
        if self.delivered {
            return;
        }
        let max = i16::from(self.channel_max());
        let current = i16::from(self.channel_value(self.cursor));
        let next = (current + delta).clamp(0, max) as u8;
        match self.mode {
            ColorMode::Cmyk => self.cmyk[self.cursor] = next,
            ColorMode::Rgb => self.rgb[self.cursor] = next,
        }
        self.feedback = None;
    }

    /// Sets the focused channel from a slider hit at `ratio` (0.0-1.0).
    pub fn set_from_ratio(&mut self, idx: usize, ratio: f64) {
        if self.delivered || idx >= self.channel_count() {
            return;
        }
        self.cursor = idx;
        let value = (ratio.clamp(0.0, 1.0) * f64::from(self.channel_max())).round() as u8;
        match self.mode {
            ColorMode::Cmyk => self.cmyk[idx] = value,
            ColorMode::Rgb => self.rgb[idx] = value,
        }
        self.feedback = None;
    }

    pub fn mixed_rgb(&self) -> (u8, u8, u8) {
        match self.mode {
            ColorMode::Cmyk => cmyk_to_rgb(self.cmyk),
            ColorMode::Rgb => (self.rgb[0], self.rgb[1], self.rgb[2]),
        }
    }

    pub fn deliver(&mut self) {
        if self.delivered {
            return;
        }
        self.delivered = true;
        let (r, g, b) = self.mixed_rgb();
        self.feedback = Some(if analogous_to_red(r, g, b) {
            let how = match self.mode {
                ColorMode::Cmyk => "subtrativa",
                ColorMode::Rgb => "aditiva",
            };
            Feedback::success().with_message(format!(
                "Parabéns! Você utilizou a lógica de mistura {how} para encontrar uma cor análoga ao vermelho.",
            ))
        } else {
            Feedback::error().with_message(
                "A cor resultante não é análoga ao vermelho no círculo cromático. Lembre-se que as vizinhas são laranja e magenta.",
            )
        });
    }

    pub fn tick(&mut self, _now: Instant) -> bool {
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        None
    }

    pub fn reset(&mut self) {
        self.cmyk = [0; 4];
        self.rgb = [0; 3];
        self.cursor = 0;
        self.feedback = None;
        self.delivered = false;
    }
}

impl Default for ColorLab {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_magenta_yellow_mix_reads_as_red() {
        // C0 M100 Y100 K0 is pure red in the subtractive model.
        assert_eq!(cmyk_to_rgb([0, 100, 100, 0]), (255, 0, 0));
        assert!(analogous_to_red(255, 0, 0));
    }

    #[test]
    fn orange_and_magenta_are_analogous_but_green_is_not() {
        assert!(analogous_to_red(255, 120, 0), "orange sits within 45 degrees");
        assert!(analogous_to_red(255, 0, 180), "magenta side wraps past 315");
        assert!(!analogous_to_red(0, 255, 0));
        assert!(!analogous_to_red(0, 0, 255));
    }

    #[test]
    fn greys_fail_the_saturation_floor() {
        assert!(!analogous_to_red(128, 128, 128));
        assert!(!analogous_to_red(140, 120, 115), "slightly warm grey is still grey");
    }

    #[test]
    fn deliver_judges_and_freezes_the_bench() {
        let mut lab = ColorLab::new();
        lab.focus(1);
        lab.adjust(100);
        lab.focus(2);
        lab.adjust(100);
        lab.deliver();
        assert!(lab.feedback().is_some_and(Feedback::is_success));
        assert!(lab.is_delivered());

        lab.adjust(-50);
        assert_eq!(lab.channel_value(2), 100, "sliders are frozen after delivery");
    }

    #[test]
    fn black_mix_is_rejected() {
        let mut lab = ColorLab::new();
        lab.deliver();
        assert!(lab.feedback().is_some_and(Feedback::is_error));
    }

    #[test]
    fn mode_switch_resets_the_bench() {
        let mut lab = ColorLab::new();
        lab.adjust(40);
        lab.deliver();
        lab.set_mode(ColorMode::Rgb);
        assert_eq!(lab.channel_count(), 3);
        assert_eq!(lab.channel_value(0), 0);
        assert!(!lab.is_delivered());
        assert!(lab.feedback().is_none());
    }

    #[test]
    fn rgb_mode_uses_the_raw_channels() {
        let mut lab = ColorLab::new();
        lab.set_mode(ColorMode::Rgb);
        lab.set_from_ratio(0, 1.0);
        assert_eq!(lab.mixed_rgb(), (255, 0, 0));
        lab.deliver();
        assert!(lab.feedback().is_some_and(Feedback::is_success));
    }
}
