//! Geometry of the tab track.
//!
//! Tabs sit left to right in index order and are bottom-aligned inside a bar
//! as tall as the tallest tab.

use crate::{
    error::TabPagerError,
    geometry::{EdgeInsets, Rect, Size},
};

/// Validated tab sizes plus the cumulative width table derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct TabLayout {
    sizes: Vec<Size>,
    /// `prefix[i]` is the summed width of every tab before `i`; the table has
    /// one more entry than there are tabs.
    prefix: Vec<f32>,
    bar_height: f32,
}

impl TabLayout {
    /// Builds the layout from per-tab sizes reported by the host.
    ///
    /// Every width must be positive and finite. Heights that are negative or
    /// not finite count as zero.
    pub fn from_sizes(sizes: impl IntoIterator<Item = Size>) -> Result<Self, TabPagerError> {
        let mut layout = Self::default();
        for (index, size) in sizes.into_iter().enumerate() {
            if !size.width.is_finite() || size.width <= 0.0 {
                return Err(TabPagerError::InvalidTabWidth {
                    index,
                    width: size.width,
                });
            }
            let height = if size.height.is_finite() {
                size.height.max(0.0)
            } else {
                0.0
            };
            layout.bar_height = layout.bar_height.max(height);
            layout.prefix.push(layout.total_width() + size.width);
            layout.sizes.push(Size::new(size.width, height));
        }
        Ok(layout)
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` when there are no tabs.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Width of tab `index`, or zero if it does not exist.
    pub fn width(&self, index: usize) -> f32 {
        self.sizes.get(index).map_or(0.0, |size| size.width)
    }

    /// Summed width of the tabs before `index`.
    pub fn prefix(&self, index: usize) -> f32 {
        self.prefix[index.min(self.sizes.len())]
    }

    /// Width of the whole tab strip.
    pub fn total_width(&self) -> f32 {
        self.prefix[self.sizes.len()]
    }

    /// Height of the tab bar.
    pub fn bar_height(&self) -> f32 {
        self.bar_height
    }

    /// Frame of tab `index` inside the tab track.
    pub fn tab_frame(&self, index: usize) -> Option<Rect> {
        let size = self.sizes.get(index)?;
        Some(Rect::new(
            self.prefix(index),
            self.bar_height - size.height,
            size.width,
            size.height,
        ))
    }

    /// Insets that let the first and last tab scroll to the viewport centre.
    pub fn track_insets(&self, viewport_width: f32) -> EdgeInsets {
        let Some(last) = self.sizes.len().checked_sub(1) else {
            return EdgeInsets::ZERO;
        };
        let half = viewport_width / 2.0;
        EdgeInsets::horizontal(half - self.width(0) / 2.0, half - self.width(last) / 2.0)
    }

    /// Index of the tab whose span contains `x`, clamped to the strip.
    ///
    /// Returns zero for an empty layout.
    pub fn tab_at(&self, x: f32) -> usize {
        if self.sizes.is_empty() {
            return 0;
        }
        let after = self.prefix.partition_point(|&start| start <= x);
        after.saturating_sub(1).min(self.sizes.len() - 1)
    }
}

impl Default for TabLayout {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            prefix: vec![0.0],
            bar_height: 0.0,
        }
    }
}
