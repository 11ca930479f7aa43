//! Sparse fixed-dimension table storage.

use std::collections::BTreeMap;

use super::coordinate::Coordinate;

/// A sparse `height` x `width` table storing only non-default cells.
///
/// Present entries iterate in row-major key order. Reading an absent
/// in-range coordinate yields the default value without inserting it.
/// Dimensions are fixed at construction; accessing a coordinate outside
/// them is a caller bug and panics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<V> {
    height: usize,
    width: usize,
    cells: BTreeMap<Coordinate, V>,
    empty: V,
}

impl<V: Default> Grid<V> {
    pub fn new(height: usize, width: usize) -> Grid<V> {
        Grid {
            height,
            width,
            cells: BTreeMap::new(),
            empty: V::default(),
        }
    }

    /// Build a grid from (coordinate, value) entries.
    pub fn from_entries<I>(height: usize, width: usize, entries: I) -> Grid<V>
    where
        I: IntoIterator<Item = (Coordinate, V)>,
    {
        let mut grid = Grid::new(height, width);
        for (coordinate, value) in entries {
            grid.insert(coordinate, value);
        }
        grid
    }
}

impl<V> Grid<V> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of present (non-default) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height && coordinate.column < self.width
    }

    fn assert_in_bounds(&self, coordinate: Coordinate) {
        assert!(
            self.in_bounds(coordinate),
            "coordinates ({}, {}) are out of range ({}, {})",
            coordinate.row,
            coordinate.column,
            self.height,
            self.width,
        );
    }

    /// Read a cell, falling back to the default value for absent cells.
    pub fn get(&self, coordinate: Coordinate) -> &V {
        self.assert_in_bounds(coordinate);
        self.cells.get(&coordinate).unwrap_or(&self.empty)
    }

    /// Write a cell, replacing any previous value.
    pub fn insert(&mut self, coordinate: Coordinate, value: V) {
        self.assert_in_bounds(coordinate);
        self.cells.insert(coordinate, value);
    }

    /// Present entries in row-major key order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &V)> + '_ {
        self.cells.iter().map(|(coordinate, value)| (*coordinate, value))
    }

    /// Every (row, column) slot in order, absent cells yielding the default.
    pub fn flatten_rows(&self) -> impl Iterator<Item = Vec<&V>> + '_ {
        (0..self.height).map(move |row| {
            (0..self.width)
                .map(|column| self.get(Coordinate::new(row, column)))
                .collect::<Vec<&V>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_cell_yields_default_without_inserting() {
        let grid: Grid<String> = Grid::new(2, 2);
        assert_eq!(grid.get(Coordinate::new(1, 1)), "");
        assert_eq!(grid.len(), 0);
    }

    #[test]
    fn test_insert_then_get() {
        let mut grid = Grid::new(2, 3);
        grid.insert(Coordinate::new(1, 2), "x".to_string());
        assert_eq!(grid.get(Coordinate::new(1, 2)), "x");
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_insert_replaces_previous_value() {
        let mut grid = Grid::new(1, 1);
        grid.insert(Coordinate::new(0, 0), "a".to_string());
        grid.insert(Coordinate::new(0, 0), "b".to_string());
        assert_eq!(grid.get(Coordinate::new(0, 0)), "b");
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.insert(Coordinate::new(1, 0), "c".to_string());
        grid.insert(Coordinate::new(0, 1), "b".to_string());
        grid.insert(Coordinate::new(0, 0), "a".to_string());

        let keys: Vec<Coordinate> = grid.iter().map(|(coordinate, _)| coordinate).collect();
        assert_eq!(
            keys,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
            ],
        );
    }

    #[test]
    fn test_flatten_rows_fills_defaults() {
        let mut grid = Grid::new(2, 3);
        grid.insert(Coordinate::new(0, 1), "b".to_string());
        grid.insert(Coordinate::new(1, 0), "c".to_string());

        let rows: Vec<Vec<String>> = grid
            .flatten_rows()
            .map(|row| row.into_iter().cloned().collect())
            .collect();
        assert_eq!(rows, vec![vec!["", "b", ""], vec!["c", "", ""]]);
    }

    #[test]
    fn test_from_entries_equals_incremental_build() {
        let entries = [
            (Coordinate::new(0, 0), "a".to_string()),
            (Coordinate::new(1, 1), "b".to_string()),
        ];
        let from_entries = Grid::from_entries(2, 2, entries.clone());
        let mut incremental = Grid::new(2, 2);
        for (coordinate, value) in entries {
            incremental.insert(coordinate, value);
        }
        assert_eq!(from_entries, incremental);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let grid: Grid<String> = Grid::new(2, 2);
        grid.get(Coordinate::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range_panics() {
        let mut grid: Grid<String> = Grid::new(2, 2);
        grid.insert(Coordinate::new(0, 2), "x".to_string());
    }
}
