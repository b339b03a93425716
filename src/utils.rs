//! A collection of numeric utilities used by the regression and the predictor.

/// Rounding helpers that follow decimal rounding rules.
pub mod rounding {
    /// Round 'val' to 'digits' decimal places, judging by the exact decimal
    /// expansion of 'val'. 10.05 is stored slightly above the midpoint and
    /// rounds to 10.1, while 30.15 is stored below it and rounds to 30.1.
    /// NaN and infinities are returned unchanged.
    pub fn round_to(val: f64, digits: usize) -> f64 {
        if !val.is_finite() {
            return val;
        }
        // The formatter rounds the exact value, and its output always parses.
        format!("{:.*}", digits, val).parse().unwrap_or(val)
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to(4.96, 1), 5.0);
        assert_eq!(round_to(4.94, 1), 4.9);
        assert_eq!(round_to(35.04, 1), 35.0);
        assert_eq!(round_to(-8.2312, 1), -8.2);
        assert_eq!(round_to(10.05, 1), 10.1);
        assert_eq!(round_to(30.15, 1), 30.1);
    }

    #[test]
    fn test_round_non_finite() {
        assert!(round_to(f64::NAN, 1).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 1), f64::NEG_INFINITY);
    }
}

/// Dense linear algebra for the small systems the regression produces.
pub mod linear_algebra {
    /// Pivots smaller than this fraction of their column's scale are treated
    /// as zero.
    pub const RANK_TOLERANCE: f64 = 1e-10;

    /// Solve the square system 'a' * x = 'b' with Gaussian elimination and
    /// partial pivoting. Returns the solution, or the index of the first
    /// column that is linearly dependent on the columns before it.
    pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, usize> {
        let n = b.len();
        debug_assert!(a.len() == n && a.iter().all(|row| row.len() == n));

        // Keep the augmented matrix [a | b] in one buffer.
        let mut m: Vec<Vec<f64>> = a
            .iter()
            .zip(b)
            .map(|(row, rhs)| {
                let mut row = row.clone();
                row.push(*rhs);
                row
            })
            .collect();

        // The scale of each column, used to judge if a pivot vanished.
        let scale: Vec<f64> = (0..n)
            .map(|c| m.iter().map(|row| row[c].abs()).fold(0.0, f64::max))
            .collect();

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&x, &y| m[x][col].abs().total_cmp(&m[y][col].abs()))
                .unwrap_or(col);
            if m[pivot_row][col].abs() <= RANK_TOLERANCE * scale[col] {
                return Err(col);
            }
            m.swap(col, pivot_row);

            for row in col + 1..n {
                let factor = m[row][col] / m[col][col];
                if factor == 0.0 {
                    continue;
                }
                for k in col..=n {
                    m[row][k] -= factor * m[col][k];
                }
            }
        }

        // Back substitution.
        let mut x = vec![0.0; n];
        for row in (0..n).rev() {
            let tail: f64 = (row + 1..n).map(|k| m[row][k] * x[k]).sum();
            x[row] = (m[row][n] - tail) / m[row][row];
        }
        Ok(x)
    }

    /// Return the dot product of 'a' and 'b'.
    pub fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_solve_identity() {
        let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert_eq!(solve(&a, &[3.0, -2.0]), Ok(vec![3.0, -2.0]));
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // The first pivot is zero, so the rows must be swapped.
        let a = vec![vec![0.0, 2.0], vec![4.0, 1.0]];
        let x = solve(&a, &[4.0, 9.0]).unwrap();
        assert!((x[0] - 1.75).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_singular() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(solve(&a, &[1.0, 2.0]), Err(1));
        let a = vec![vec![0.0, 0.0], vec![0.0, 1.0]];
        assert_eq!(solve(&a, &[0.0, 1.0]), Err(0));
    }
}
