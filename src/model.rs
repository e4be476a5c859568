use crate::color::Color;
use crate::wave::wave_colors;
use crossterm::style::Stylize;
use serde::Deserialize;
use std::fmt::Write;
use std::time::Duration;

/// Default time between animation frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);
/// Default maximum lightness percentage at the wave's peak.
pub const DEFAULT_PEAK_LIGHT: u8 = 90;
/// Default width of the wave in characters.
pub const DEFAULT_WAVE_WIDTH: usize = 8;
/// Default pause between sweeps, in ticks.
pub const DEFAULT_WAVE_PAUSE: usize = 8;

/// Which way the shimmer wave travels across the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    /// Wave moves left to right.
    #[default]
    Right,
    /// Wave moves right to left.
    Left,
}

/// Configuration for a shimmer animation.
///
/// Out-of-range values are not rejected: they are clamped when the model is
/// constructed (`peak_light` to 0-100, `wave_width` to at least 2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShimmerOptions {
    /// Time between animation frames.
    pub interval: Duration,
    /// Maximum lightness percentage at the wave's peak (0-100).
    pub peak_light: u8,
    /// Width of the wave in characters.
    pub wave_width: usize,
    /// Extra ticks after the wave exits the text before the sweep restarts.
    pub wave_pause: usize,
    /// Which way the wave travels.
    pub direction: Direction,
}

impl Default for ShimmerOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            peak_light: DEFAULT_PEAK_LIGHT,
            wave_width: DEFAULT_WAVE_WIDTH,
            wave_pause: DEFAULT_WAVE_PAUSE,
            direction: Direction::default(),
        }
    }
}

/// Animated shimmer over a single line of text.
///
/// A wave of brightened color sweeps across the text, then pauses for
/// `wave_pause` ticks before starting over. The model owns no timer: an
/// external loop drives it by calling [`advance`](Self::advance) once per
/// tick and reading frames back out of [`view`](Self::view).
pub struct ShimmerModel {
    text: String,
    base_color: Color,
    is_loading: bool,
    animating: bool,
    position: usize,
    wave_colors: Vec<Color>,
    interval: Duration,
    peak_light: u8,
    wave_pause: usize,
    direction: Direction,
    on_tick: Option<Box<dyn FnMut()>>,
}

impl ShimmerModel {
    /// Create a model for the given text and base color.
    pub fn new(text: impl Into<String>, base_color: Color, options: ShimmerOptions) -> Self {
        let peak_light = options.peak_light.min(100);
        Self {
            text: text.into(),
            base_color,
            is_loading: true,
            animating: false,
            position: 0,
            wave_colors: wave_colors(base_color, options.wave_width, peak_light),
            interval: options.interval,
            peak_light,
            wave_pause: options.wave_pause,
            direction: options.direction,
            on_tick: None,
        }
    }

    /// Start animating. Does nothing unless the model is loading, and is a
    /// no-op when already animating.
    pub fn init(&mut self) {
        if self.is_loading && !self.animating {
            self.animating = true;
        }
    }

    /// Stop animating, freezing the wave at its current position. Idempotent
    /// and safe to call from any state, so cleanup paths can call it
    /// unconditionally.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    /// Enable or disable the shimmer. Disabling also stops the animation and
    /// makes [`view`](Self::view) render the whole text in the base color.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        if !loading {
            self.stop();
        } else if !self.animating {
            self.animating = true;
        }
    }

    /// Replace the text being displayed. The wave keeps its position.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Register a callback fired after every position update. The loop
    /// driving the animation can use it as a "state changed, re-render now"
    /// signal; no callback means no notification.
    pub fn set_on_tick(&mut self, on_tick: impl FnMut() + 'static) {
        self.on_tick = Some(Box::new(on_tick));
    }

    /// Move the wave forward one step. Invoked once per tick by the loop
    /// driving the animation; a no-op unless the model is animating.
    pub fn advance(&mut self) {
        if !self.animating {
            return;
        }
        self.position = (self.position + 1) % self.total_length();
        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick();
        }
    }

    /// Render the current frame: every character wrapped in a foreground
    /// color directive, concatenated in text order. Pure read, no mutation.
    pub fn view(&self) -> String {
        if !self.is_loading {
            return format!("{}", self.text.as_str().with(self.base_color.into()));
        }

        let text_len = self.text.chars().count();
        let mut frame = String::new();
        for (i, ch) in self.text.chars().enumerate() {
            let color = self.character_color(i, text_len);
            let _ = write!(frame, "{}", ch.with(color.into()));
        }
        frame
    }

    /// Length of one full sweep cycle: the wave enters, crosses the text,
    /// exits, then sits out the pause before wrapping around.
    pub fn total_length(&self) -> usize {
        self.text.chars().count() + self.wave_colors.len() + self.wave_pause
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Effective peak lightness after clamping.
    pub fn peak_light(&self) -> u8 {
        self.peak_light
    }

    /// Effective wave width after clamping.
    pub fn wave_width(&self) -> usize {
        self.wave_colors.len()
    }

    pub fn wave_pause(&self) -> usize {
        self.wave_pause
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn character_color(&self, index: usize, text_len: usize) -> Color {
        let distance = match self.direction {
            // Distance from the far end, so the wave mirrors across the text
            Direction::Left => self.position as isize - (text_len as isize - 1 - index as isize),
            Direction::Right => self.position as isize - index as isize,
        };

        if distance >= 0 && (distance as usize) < self.wave_colors.len() {
            self.wave_colors[distance as usize]
        } else {
            self.base_color
        }
    }
}
