#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Colony Life adapters.
//!
//! The core never learns about pixels or terminal geometry; adapters receive
//! a [`GridScene`] of per-cell sprites and decide how to draw it. New cells
//! are rendered dark and fade toward light gray as they age, saturating at
//! [`MAX_AGE`].

use std::io::Write;

use anyhow::Result as AnyResult;
use colony_life_core::{Grid, MAX_AGE};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Background color shown behind dead cells.
pub const BACKGROUND_COLOR: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);

const YOUNGEST_SHADE: Color = Color::from_rgb_u8(0x20, 0x20, 0x20);
const OLDEST_FADE: f32 = 0.75;

/// Shade used to present a cell of the given age.
///
/// Age zero maps to the background; age one is the darkest shade and older
/// cells fade linearly toward light gray, saturating at [`MAX_AGE`].
#[must_use]
pub fn age_color(age: i32) -> Color {
    if age <= 0 {
        return BACKGROUND_COLOR;
    }
    let capped = age.min(MAX_AGE);
    let fade = (capped - 1) as f32 / (MAX_AGE - 1) as f32;
    YOUNGEST_SHADE.lighten(fade * OLDEST_FADE)
}

/// Sprite describing one living cell within a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSprite {
    /// Zero-based row of the cell.
    pub row: u32,
    /// Zero-based column of the cell.
    pub col: u32,
    /// Current age of the cell.
    pub age: i32,
    /// Shade derived from the cell's age.
    pub color: Color,
}

/// Presentation-ready snapshot of a colony frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GridScene {
    rows: u32,
    cols: u32,
    sprites: Vec<CellSprite>,
}

impl GridScene {
    /// Builds a scene from the current colony grid, one sprite per living cell.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let sprites = grid
            .iter()
            .filter(|&(_, _, age)| age != 0)
            .map(|(row, col, age)| CellSprite {
                row,
                col,
                age,
                color: age_color(age),
            })
            .collect();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            sprites,
        }
    }

    /// Number of rows in the presented frame.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the presented frame.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Sprites for every living cell, in row-major order.
    #[must_use]
    pub fn sprites(&self) -> &[CellSprite] {
        &self.sprites
    }
}

/// Backend-agnostic sink for presented frames.
pub trait ScenePresenter {
    /// Presents a single frame of the colony.
    fn present(&mut self, scene: &GridScene) -> AnyResult<()>;
}

/// Presenter that writes frames as glyph rows to any [`Write`] sink.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
}

impl<W> TextPresenter<W> {
    /// Creates a presenter writing to the provided sink.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the presenter, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScenePresenter for TextPresenter<W> {
    fn present(&mut self, scene: &GridScene) -> AnyResult<()> {
        let cols = scene.cols() as usize;
        let mut glyphs = vec!['-'; scene.rows() as usize * cols];
        for sprite in scene.sprites() {
            glyphs[sprite.row as usize * cols + sprite.col as usize] = age_glyph(sprite.age);
        }
        for row in glyphs.chunks(cols) {
            let line: String = row.iter().collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Terminal glyph used for a cell of the given age.
#[must_use]
pub fn age_glyph(age: i32) -> char {
    match age {
        i32::MIN..=0 => '-',
        1..=9 => (b'0' + age as u8) as char,
        _ => '+',
    }
}
