//! Style pool for deduplication

use super::Style;
use ahash::AHashMap;

/// Style pool for deduplicating styles
///
/// Highlighting paints the same fill across many cells; the pool stores each
/// unique style once and cells reference it by index.
#[derive(Debug)]
pub struct StylePool {
    /// All unique styles (index 0 is default)
    styles: Vec<Style>,
    /// Fast lookup for deduplication
    index_map: AHashMap<Style, u32>,
}

impl StylePool {
    /// Create a new style pool with default style at index 0
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(8),
            index_map: AHashMap::with_capacity(8),
        };

        pool.styles.push(Style::default());
        pool.index_map.insert(Style::default(), 0);

        pool
    }

    /// Get or create a style, returning its index
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        if let Some(&idx) = self.index_map.get(&style) {
            return idx;
        }

        let idx = self.styles.len() as u32;
        self.index_map.insert(style, idx);
        self.styles.push(style);
        idx
    }

    /// Get a style by index
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Get the number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool is empty (only has default)
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
