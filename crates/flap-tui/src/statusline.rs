//! Status line: FPS tracking and the one-row footer.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Mutable accumulator that tracks FPS across frames.
#[derive(Debug)]
pub struct StatusAccumulator {
    fps_ema: f32,
}

impl Default for StatusAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusAccumulator {
    pub fn new() -> Self {
        Self { fps_ema: 60.0 }
    }

    /// Update with the measured frame interval (ms).
    pub fn on_frame(&mut self, frame_ms: u16) {
        let fps = if frame_ms > 0 {
            1000.0 / f32::from(frame_ms)
        } else {
            self.fps_ema
        };
        self.fps_ema += 0.1 * (fps - self.fps_ema);
    }

    /// Smoothed frames per second, one decimal.
    pub fn fps(&self) -> f32 {
        (self.fps_ema * 10.0).round() / 10.0
    }
}

/// Builds the footer line: page indicator, pause flag, FPS, key hints.
pub fn status_line(
    page: Option<(usize, usize)>,
    paused: bool,
    fps: f32,
    hints: &str,
) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled("FLAPBOARD", value)];
    if let Some((index, count)) = page {
        spans.push(Span::styled("  page ", label));
        spans.push(Span::styled(format!("{}/{}", index + 1, count), value));
    }
    if paused {
        spans.push(Span::styled("  PAUSED", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(format!("  {fps:.1} fps"), label));
    spans.push(Span::styled(format!("  {hints}"), label));
    Line::from(spans)
}
