//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, NextPiece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::intro::IntroFrame;
use crate::types::{GamePhase, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BRICK: char = '█';

/// Block colors for ids 1..=7.
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(255, 50, 50),
    Rgb::new(50, 50, 255),
    Rgb::new(50, 200, 50),
    Rgb::new(255, 255, 50),
    Rgb::new(180, 50, 180),
    Rgb::new(50, 200, 200),
    Rgb::new(255, 150, 50),
];

/// Palette entry for a cell value; `None` for empty or unknown ids.
pub fn color_for(id: u8) -> Option<Rgb> {
    match id {
        EMPTY => None,
        n => PALETTE.get(n as usize - 1).copied(),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let frame = self.prepare(viewport, fb);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let id = snap.cell_with_active(x as usize, y as usize);
                match color_for(id) {
                    Some(rgb) => self.draw_brick(fb, frame, x, y, BRICK, rgb),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::Menu => self.draw_overlay(
                fb,
                frame,
                &["BRICK GAME", "9999-in-1", "", "TETRIS", "", "Press ENTER to start"],
                None,
            ),
            GamePhase::Paused => {
                self.draw_overlay(fb, frame, &["PAUSED", "", "Press P to resume"], None)
            }
            GamePhase::GameOver => self.draw_overlay(
                fb,
                frame,
                &["GAME OVER", "", "", "Press ENTER for menu"],
                Some((2, "Score: ", snap.score)),
            ),
            GamePhase::Playing => {}
        }
    }

    /// Render the intro animation in place of the board.
    pub fn render_intro_into(&self, intro: &IntroFrame, viewport: Viewport, fb: &mut FrameBuffer) {
        let frame = self.prepare(viewport, fb);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match intro.color_at(x, y).and_then(color_for) {
                    Some(rgb) => self.draw_brick(fb, frame, x, y, intro.glyph_at(x, y), rgb),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Solid orange square growing in the middle.
        let size = intro.center_size();
        if size > 0 {
            let x0 = BOARD_WIDTH / 2 - size / 2;
            let y0 = BOARD_HEIGHT / 2 - size / 2;
            for y in y0..y0 + size {
                for x in x0..x0 + size {
                    self.draw_brick(fb, frame, x, y, BRICK, PALETTE[6]);
                }
            }
        }

        let title = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        if intro.shows_title() {
            fb.put_centered(frame.x, frame.w, frame.y + frame.h / 3, " BRICK GAME ", title);
        }
        if intro.shows_tetris() {
            fb.put_centered(frame.x, frame.w, frame.y + frame.h * 2 / 3, " TETRIS ", title);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_intro(&self, intro: &IntroFrame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_intro_into(intro, viewport, &mut fb);
        fb
    }

    /// Clear the buffer, then place and draw the empty bordered well.
    fn prepare(&self, viewport: Viewport, fb: &mut FrameBuffer) -> Frame {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK));
        frame
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u8, y: u8) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell(fb, f, x, y, '·', style);
    }

    fn draw_brick(&self, fb: &mut FrameBuffer, f: Frame, x: u8, y: u8, ch: char, rgb: Rgb) {
        self.fill_cell(fb, f, x, y, ch, CellStyle::new(rgb, WELL_BG).bold());
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u8, y: u8, ch: char, style: CellStyle) {
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let x = f.x.saturating_add(f.w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let help = value.dim();

        let mut y = f.y;
        fb.put_str(x, y, "BRICK GAME", label);
        fb.put_str(x + 1, y + 1, "9999-in-1", value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        if let Some(next) = snap.next {
            self.draw_preview(fb, x, y + 1, next);
        }
        y += 4;

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 2;
        }
        fb.put_str(x, y, "SPEED", label);
        let end = fb.put_u32(x, y + 1, snap.speed_ms, value);
        fb.put_str(end, y + 1, "ms", value);
        y += 3;

        fb.put_str(x, y, "CONTROLS", label);
        for (i, line) in ["← → Move", "↑   Rotate", "↓   Drop", "P   Pause", "Q   Quit"]
            .iter()
            .enumerate()
        {
            fb.put_str(x, y + 1 + i as u16, line, help);
        }
    }

    /// Next piece as a half-size mini shape: one column per cell.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: NextPiece) {
        let Some(rgb) = color_for(next.color) else {
            return;
        };
        let style = CellStyle::new(rgb, Rgb::BLACK);
        for (dx, dy) in next.shape.offsets() {
            fb.put_char(x + 1 + dx as u16, y + dy as u16, BRICK, style);
        }
    }

    /// Dim the well and print `lines` centered over it.
    ///
    /// `number` inserts a `label` + value line at the given row index.
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        lines: &[&str],
        number: Option<(usize, &str, u32)>,
    ) {
        for y in f.y + 1..f.y + f.h - 1 {
            for x in f.x + 1..f.x + f.w - 1 {
                if let Some(mut cell) = fb.get(x, y) {
                    cell.style.fg = cell.style.fg.scaled(2, 5);
                    cell.style.bg = cell.style.bg.scaled(2, 5);
                    fb.set(x, y, cell);
                }
            }
        }

        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let top = f.y + f.h / 2 - (lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            if !line.is_empty() {
                fb.put_centered(f.x, f.w, top + i as u16, line, style);
            }
        }

        if let Some((row, label, v)) = number {
            let width = label.chars().count() as u16 + digit_count(v);
            let x = f.x + f.w.saturating_sub(width) / 2;
            let y = top + row as u16;
            let end = fb.put_str(x, y, label, style);
            fb.put_u32(end, y, v, style);
        }
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup() {
        assert_eq!(color_for(0), None);
        assert_eq!(color_for(1), Some(Rgb::new(255, 50, 50)));
        assert_eq!(color_for(7), Some(Rgb::new(255, 150, 50)));
        assert_eq!(color_for(8), None);
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }
}
