/// Textbook matrix multiplication using i-j-k loop order.
///
/// For each output cell the inner loop walks one row of A and one column
/// of B, summing products left to right over `p = 0..k`. That order fixes
/// the floating-point rounding, so results are bit-reproducible against
/// any other i-j-k implementation fed the same inputs.
///
/// The innermost loop reads B with stride `n` (column-wise), which is slow
/// on large matrices. That's accepted here; this is the reference kernel.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut acc = c[i * n + j];
            for (p, &a_ip) in a_row.iter().enumerate() {
                acc += a_ip * b[p * n + j];
            }
            c[i * n + j] = acc;
        }
    }
}
