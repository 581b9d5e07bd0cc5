//! Flow layout calculation: single-row, left-to-right packing.

use dirwm_common::CellRect;

use super::LayoutEngine;

impl LayoutEngine {
    /// Position panes from `(key, width, height)` triples, in the order given.
    ///
    /// Every pane sits on row 0; pane *i* starts at the sum of
    /// `width + gap` over all panes before it. There is no wrapping.
    pub fn compute<K>(&self, sizes: impl IntoIterator<Item = (K, usize, usize)>) -> Vec<(K, CellRect)> {
        let mut x = 0;
        sizes
            .into_iter()
            .map(|(key, width, height)| {
                let rect = CellRect {
                    x,
                    y: 0,
                    width,
                    height,
                };
                x += width + self.gap;
                (key, rect)
            })
            .collect()
    }
}
