// std imports
use std::mem::swap;

// ---

/// Dynamic programming table that keeps only the two most recent rows.
///
/// Rows are addressed by their logical index, which starts at 0 and grows by one on every
/// [`Table::advance`]. Only the current row and the row right before it are accessible,
/// requesting any other row is a bug in the caller and panics.
#[derive(Debug)]
pub(crate) struct Table<T> {
    prev: Vec<T>,
    cur: Vec<T>,
    index: usize,
}

impl<T: Clone> Table<T> {
    /// Creates a table with rows of the given width, all cells set to `fill`.
    pub fn new(width: usize, fill: T) -> Self {
        Self {
            prev: vec![fill.clone(); width],
            cur: vec![fill; width],
            index: 0,
        }
    }

    /// Makes the current row the previous one and starts a new current row filled with `fill`.
    #[inline]
    pub fn advance(&mut self, fill: T) {
        swap(&mut self.prev, &mut self.cur);
        self.cur.fill(fill);
        self.index += 1;
    }

    /// Returns row `i` for reading.
    ///
    /// # Panics
    ///
    /// Panics unless `i` is the current row or the one right before it.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        if i == self.index {
            &self.cur
        } else if i + 1 == self.index {
            &self.prev
        } else {
            panic!("row {} is out of the window at row {}", i, self.index)
        }
    }

    /// Returns the row preceding `i` (if there is one) for reading along with row `i` for writing.
    ///
    /// # Panics
    ///
    /// Panics unless `i` is the current row.
    #[inline]
    pub fn rows(&mut self, i: usize) -> (Option<&[T]>, &mut [T]) {
        assert_eq!(i, self.index, "row {} is not the current row", i);
        let prev = if i == 0 { None } else { Some(self.prev.as_slice()) };
        (prev, &mut self.cur)
    }
}

#[cfg(test)]
mod tests;
