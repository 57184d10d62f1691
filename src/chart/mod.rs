//! Bar geometry for the monthly overview.
//!
//! Layout is computed in abstract canvas units so it can be checked without a
//! drawing surface; the terminal renderer only maps bars onto widgets.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::expenses::CategoryTotals;

pub(crate) const BAR_WIDTH: i32 = 50;
pub(crate) const BAR_GAP: i32 = 20;
pub(crate) const FIRST_BAR_X: i32 = 50;
pub(crate) const MAX_BAR_HEIGHT: i32 = 200;
pub(crate) const BASELINE_OFFSET: i32 = 50;
pub(crate) const LABEL_Y: i32 = MAX_BAR_HEIGHT + 70;

/// Size of the plot area each month is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Canvas {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Canvas {
    pub(crate) const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(500, 300)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaletteColor {
    Blue,
    Red,
    Green,
    Orange,
    Magenta,
    Cyan,
    Pink,
    Yellow,
}

impl PaletteColor {
    pub(crate) const ALL: [PaletteColor; 8] = [
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Orange,
        Self::Magenta,
        Self::Cyan,
        Self::Pink,
        Self::Yellow,
    ];

    /// Color of the `index`-th bar; the palette repeats every eight bars.
    pub(crate) fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bar {
    pub(crate) label: String,
    pub(crate) value: Decimal,
    pub(crate) color: PaletteColor,
    pub(crate) x_left: i32,
    pub(crate) y_top: i32,
    pub(crate) width: i32,
    /// Negative when the category total is negative; renderers draw nothing.
    pub(crate) height: i32,
    pub(crate) label_y: i32,
}

impl Bar {
    /// Whether the bar and its label lie inside the canvas.
    pub(crate) fn fits(&self, canvas: Canvas) -> bool {
        // Negative bars draw nothing above the baseline.
        let top = self.y_top.min(MAX_BAR_HEIGHT + BASELINE_OFFSET);
        self.x_left >= 0
            && self.x_left + self.width <= canvas.width
            && top >= 0
            && self.label_y <= canvas.height
    }

    pub(crate) fn visible_height(&self) -> u64 {
        self.height.max(0) as u64
    }
}

/// Lay out one month of category totals as bars, in the map's iteration order.
///
/// Heights scale against the largest total in the month and are truncated
/// toward zero. Bars are placed left to right regardless of `canvas`; use
/// [`Bar::fits`] to find the ones that overflow it.
pub(crate) fn layout_month(totals: &CategoryTotals, _canvas: Canvas) -> Vec<Bar> {
    let Some(max_value) = totals.values().copied().max() else {
        return Vec::new();
    };

    totals
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = bar_height(*value, max_value);
            Bar {
                label: label.clone(),
                value: *value,
                color: PaletteColor::cycle(i),
                x_left: FIRST_BAR_X + i as i32 * (BAR_WIDTH + BAR_GAP),
                y_top: MAX_BAR_HEIGHT - height + BASELINE_OFFSET,
                width: BAR_WIDTH,
                height,
                label_y: LABEL_Y,
            }
        })
        .collect()
}

/// `trunc(value / max * MAX_BAR_HEIGHT)`; a zero maximum yields 0.
fn bar_height(value: Decimal, max_value: Decimal) -> i32 {
    value
        .checked_div(max_value)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(MAX_BAR_HEIGHT)))
        .and_then(|scaled| scaled.trunc().to_i32())
        .unwrap_or(0)
}
