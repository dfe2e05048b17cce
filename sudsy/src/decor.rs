//! Decorative animation: rising emoji floaters and accent palette rotation.
//!
//! Floaters are independent. Each one is spawned with a random glyph,
//! position, and lifetime, rises while it ages, and is dropped once its
//! lifetime ends. Nothing else reads or orders them.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use ratatui::layout::Rect;
use ratatui::style::Color;
use sudsy_core::config::AnimationConfig;

use crate::theme::ACCENT_SETS;

const FLOATER_GLYPHS: [&str; 15] = [
    "🚿", "🫧", "💡", "🧠", "🧬", "✨", "🌈", "🪞", "🤖", "⚡", "🧪", "🌪️", "🌙", "🔥", "🌀",
];

/// Chance that a pulse also rotates the accent palette.
const PULSE_PALETTE_CHANCE: f64 = 0.45;

/// A single rising emoji.
#[derive(Debug, Clone, PartialEq)]
pub struct Floater {
    pub glyph: &'static str,
    /// Horizontal position, percent of the area width
    pub x_pct: f32,
    /// Starting height, percent of the area height from the top
    pub start_y_pct: f32,
    pub age: Duration,
    pub lifetime: Duration,
    /// Which accent color to draw with (0-4)
    pub accent: usize,
}

impl Floater {
    /// Fraction of the lifetime elapsed, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (self.age.as_secs_f32() / self.lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the floater is in the last quarter of its life.
    pub fn is_fading(&self) -> bool {
        self.progress() >= 0.75
    }

    /// Cell position inside `area`, or `None` if the area is too small.
    ///
    /// Floaters rise from their start height to the top edge over their
    /// lifetime, swaying slightly. Glyphs are two cells wide.
    pub fn position(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width < 2 || area.height == 0 {
            return None;
        }
        let progress = self.progress();
        let sway = (progress * std::f32::consts::TAU).sin() * 2.0;
        let x_pct = (self.x_pct + sway).clamp(0.0, 100.0);
        let y_pct = self.start_y_pct * (1.0 - progress);

        let max_x = f32::from(area.width - 2);
        let max_y = f32::from(area.height - 1);
        let x = (x_pct / 100.0 * max_x).round() as u16;
        let y = (y_pct / 100.0 * max_y).round() as u16;
        Some((area.x + x, area.y + y))
    }
}

/// Floater field plus the current accent palette.
pub struct Decor {
    enabled: bool,
    interval: Duration,
    max_floaters: usize,
    since_spawn: Duration,
    /// Time remaining until each scheduled spawn
    scheduled: Vec<Duration>,
    floaters: Vec<Floater>,
    accent_set: usize,
    rng: StdRng,
}

impl Decor {
    pub fn new(config: &AnimationConfig, mut rng: StdRng) -> Self {
        let accent_set = rng.random_range(0..ACCENT_SETS.len());
        Self {
            enabled: config.enabled,
            interval: Duration::from_millis(config.floater_interval_ms.max(1)),
            max_floaters: config.max_floaters,
            since_spawn: Duration::ZERO,
            scheduled: Vec::new(),
            floaters: Vec::new(),
            accent_set,
            rng,
        }
    }

    pub fn floaters(&self) -> &[Floater] {
        &self.floaters
    }

    /// Number of spawns waiting on a burst timer.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }

    /// The active accent colors.
    pub fn accents(&self) -> [Color; 5] {
        ACCENT_SETS[self.accent_set]
    }

    pub fn accent(&self, index: usize) -> Color {
        self.accents()[index % 5]
    }

    /// Advance the animation clock.
    pub fn tick(&mut self, dt: Duration) {
        for floater in &mut self.floaters {
            floater.age += dt;
        }
        self.floaters.retain(|f| f.age < f.lifetime);

        if !self.enabled {
            return;
        }

        self.since_spawn += dt;
        while self.since_spawn >= self.interval {
            self.since_spawn -= self.interval;
            self.spawn();
        }

        let mut due = 0;
        for remaining in &mut self.scheduled {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                due += 1;
            }
        }
        self.scheduled.retain(|r| !r.is_zero());
        for _ in 0..due {
            self.spawn();
        }
    }

    /// Schedule `count` spawns, the first after `delay`, then every `spacing`.
    pub fn burst(&mut self, count: usize, delay: Duration, spacing: Duration) {
        if !self.enabled {
            return;
        }
        for i in 0..count {
            let at = delay + spacing * i as u32;
            if at.is_zero() {
                self.spawn();
            } else {
                self.scheduled.push(at);
            }
        }
    }

    /// Welcome burst shortly after startup.
    pub fn startup_burst(&mut self) {
        self.burst(6, Duration::from_millis(350), Duration::from_millis(110));
    }

    /// Feedback for generate and theme toggles: maybe a new palette, plus a
    /// small burst of floaters.
    pub fn pulse(&mut self) {
        if self.rng.random_bool(PULSE_PALETTE_CHANCE) {
            self.shuffle_palette();
        }
        self.burst(4, Duration::ZERO, Duration::from_millis(90));
    }

    /// Explicit shuffle: new palette and a larger burst.
    pub fn shuffle_and_burst(&mut self) {
        self.shuffle_palette();
        self.burst(6, Duration::ZERO, Duration::from_millis(70));
    }

    /// Pick a random accent set.
    pub fn shuffle_palette(&mut self) {
        self.accent_set = self.rng.random_range(0..ACCENT_SETS.len());
        tracing::trace!(accent_set = self.accent_set, "Palette shuffled");
    }

    fn spawn(&mut self) {
        if self.floaters.len() >= self.max_floaters {
            return;
        }
        let glyph = FLOATER_GLYPHS[self.rng.random_range(0..FLOATER_GLYPHS.len())];
        let floater = Floater {
            glyph,
            x_pct: self.rng.random_range(6.0..94.0),
            start_y_pct: self.rng.random_range(70.0..98.0),
            age: Duration::ZERO,
            lifetime: Duration::from_secs_f32(self.rng.random_range(4.8..9.2)),
            accent: self.rng.random_range(0..5),
        };
        self.floaters.push(floater);
    }
}
