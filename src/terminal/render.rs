//! Board rendering system (terminal).
//!
//! Draws the score line, the tiles, the cell borders and the help text, and writes
//! banners and notifications at fixed positions. Every drawing command is queued and
//! flushed once per call.

use std::io::Write;

use chrono::{DateTime, Local};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use log::warn;

use crate::config::render::{HELP_INFO, MARGIN, TIME_FORMAT};
use crate::error::Result;
use crate::game::systems::{Renderer, RoundView};

const TEXT_COLOR: Color = Color::Yellow;

/// Colour of a tile by value. Values above 1024 fall back to the default colour.
pub fn tile_color(value: u32) -> Color {
    match value {
        2 | 4 => Color::White,
        8 | 16 | 32 => Color::Cyan,
        64 => Color::Green,
        128 => Color::Magenta,
        256 => Color::Yellow,
        512 => Color::Blue,
        1024 => Color::Red,
        _ => Color::Reset,
    }
}

/// Convert a layout index to a terminal coordinate, pinning at the screen limit.
fn to_cell(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

/// Top-left terminal cell of the tile at `(row, col)`.
fn tile_origin(row: usize, col: usize) -> (u16, u16) {
    let x = to_cell(col).saturating_mul(MARGIN * 2).saturating_add(MARGIN / 2);
    let y = to_cell(row).saturating_mul(MARGIN).saturating_add(MARGIN * 3 / 2);
    (x, y)
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Cells per side, used for every layout offset.
    size: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, grid_size: usize) -> Self {
        Self {
            out,
            size: to_cell(grid_size),
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Row of the notification line, just below the help text.
    fn notify_row(&self) -> u16 {
        self.help_row(HELP_INFO.len()).saturating_add(1)
    }

    /// Row of help line `index`, below the board.
    fn help_row(&self, index: usize) -> u16 {
        to_cell(index)
            .saturating_add(self.size.saturating_mul(MARGIN))
            .saturating_add(MARGIN * 2)
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str, color: Color) -> Result<()> {
        queue!(self.out, MoveTo(x, y), SetForegroundColor(color), Print(text))?;
        Ok(())
    }

    fn draw_borders(&mut self) -> Result<()> {
        let width = self.size.saturating_mul(MARGIN * 2);
        let rule: String = "─".repeat(usize::from(width.saturating_sub(1)));
        let lines = self.size.saturating_add(1);
        for line in 1..=lines {
            self.put_str(1, line.saturating_mul(MARGIN), &rule, TEXT_COLOR)?;
        }
        for y in MARGIN..=lines.saturating_mul(MARGIN) {
            for column in 0..=self.size {
                self.put_str(column.saturating_mul(MARGIN * 2), y, "|", TEXT_COLOR)?;
            }
        }
        Ok(())
    }

    fn draw_tiles(&mut self, view: &RoundView<'_>) -> Result<()> {
        for (row, line) in view.grid.rows().iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let (x, y) = tile_origin(row, col);
                self.put_str(x, y, &value.to_string(), tile_color(value))?;
            }
        }
        Ok(())
    }

    /// Banner centred over the board.
    fn draw_banner(&mut self, message: &str) -> Result<()> {
        let x = (MARGIN * 5 / 2).saturating_mul(self.size) / 2;
        let y = (MARGIN * 3 / 2).saturating_mul(self.size) / 2;
        let text = format!("{}{}", message, Local::now().format(TIME_FORMAT));
        self.put_str(x, y, &text, TEXT_COLOR)
    }

    fn write_notification(&mut self, message: &str, at: DateTime<Local>) -> Result<()> {
        let row = self.notify_row();
        queue!(self.out, MoveTo(MARGIN, row), Clear(ClearType::UntilNewLine))?;
        let text = format!("{}{}", message, at.format(TIME_FORMAT));
        self.put_str(MARGIN, row, &text, TEXT_COLOR)?;
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &RoundView<'_>) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let header = format!("Score : {}    Steps: {}", view.score, view.step);
        self.put_str(MARGIN, 1, &header, TEXT_COLOR)?;

        for (i, info) in HELP_INFO.iter().enumerate() {
            let y = self.help_row(i);
            self.put_str(MARGIN, y, info, TEXT_COLOR)?;
        }

        self.draw_tiles(view)?;
        self.draw_borders()?;
        if let Some(message) = view.status {
            self.draw_banner(message)?;
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str, at: DateTime<Local>) {
        if let Err(e) = self.write_notification(message, at) {
            warn!("[Terminal] Failed to write notification '{}': {}", message, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;

    fn rendered(grid: &Grid, status: Option<&str>) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new(), grid.size());
        renderer.render(&RoundView { grid, score: 6, step: 3, status }).unwrap();
        String::from_utf8(renderer.output().clone()).unwrap()
    }

    #[test]
    fn render_shows_counters_tiles_and_help() {
        let grid = Grid::from_rows(vec![
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 1024, 0],
            vec![0, 0, 0, 4],
        ]).unwrap();
        let out = rendered(&grid, None);

        assert!(out.contains("Score : 6    Steps: 3"));
        assert!(out.contains("1024"));
        assert!(out.contains("Enter: Restart the game."));
        assert!(out.contains('─'));
        assert!(!out.contains("Game"));
    }

    #[test]
    fn render_draws_banner_when_finished() {
        let grid = Grid::new(4).unwrap();
        let out = rendered(&grid, Some("Game Win"));
        assert!(out.contains("Game Win "));
    }

    #[test]
    fn notification_carries_timestamp() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 4);
        let at = Local::now();
        renderer.notify("pressed Up: changed=true", at);
        let out = String::from_utf8(renderer.output().clone()).unwrap();
        let expected = format!("pressed Up: changed=true{}", at.format(TIME_FORMAT));
        assert!(out.contains(&expected));
    }

    #[test]
    fn notification_sits_below_help() {
        let renderer = TerminalRenderer::new(Vec::new(), 4);
        assert_eq!(renderer.notify_row(), 27);
    }

    #[test]
    fn layout_pins_at_the_screen_edge_for_huge_grids() {
        let renderer = TerminalRenderer::new(Vec::new(), 20_000);
        assert_eq!(renderer.notify_row(), u16::MAX);
        assert_eq!(renderer.help_row(0), u16::MAX);

        let renderer = TerminalRenderer::new(Vec::new(), 100_000);
        assert_eq!(renderer.size, u16::MAX);

        assert_eq!(tile_origin(0, 0), (2, 6));
        assert_eq!(tile_origin(3, 2), (18, 18));
        assert_eq!(tile_origin(70_000, 9_000), (u16::MAX, u16::MAX));
    }

    #[test]
    fn tile_colors_follow_value_bands() {
        assert_eq!(tile_color(4), Color::White);
        assert_eq!(tile_color(32), Color::Cyan);
        assert_eq!(tile_color(64), Color::Green);
        assert_eq!(tile_color(2048), Color::Reset);
    }
}
