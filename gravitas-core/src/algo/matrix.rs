use rayon::prelude::*;

use crate::Cost;

/// Dense origin-by-facility matrix of shortest-path distances, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Cost>,
}

impl DistanceMatrix {
    /// Matrix with every entry unreachable
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Cost::INFINITY; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[Cost] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Cost {
        self.row(row)[col]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = Cost> + '_ {
        self.data.iter().skip(col).step_by(self.cols.max(1)).copied()
    }

    /// Disjoint mutable rows, one per origin, for concurrent writers
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, Cost> {
        self.data.par_chunks_mut(self.cols.max(1))
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use super::*;

    #[test]
    fn rows_and_columns_index_the_same_cells() {
        let mut matrix = DistanceMatrix::new(3, 2);
        matrix
            .par_rows_mut()
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = (i * 10 + j) as Cost;
                }
            });

        assert_eq!(matrix.row(1), &[10.0, 11.0]);
        assert_eq!(matrix.get(2, 1), 21.0);
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![1.0, 11.0, 21.0]);
    }

    #[test]
    fn starts_unreachable() {
        let matrix = DistanceMatrix::new(2, 2);
        assert!(matrix.column(0).all(Cost::is_infinite));
    }
}
