use tracing::trace;

/// Return the first `n` Fibonacci numbers, starting `[0, 1, 1, 2, ...]`.
///
/// Any `n <= 0` returns an empty vector. The length is not bounded so callers are responsible
/// for restricting `n`; a length beyond the address space aborts the allocation with a capacity
/// overflow panic instead of returning a truncated sequence. Terms beyond `i64::MAX` wrap in
/// two's complement rather than panic.
///
/// # Examples
/// ```
/// use calculator::standalone::generate_fibonacci;
/// assert_eq!(generate_fibonacci(6), vec![0, 1, 1, 2, 3, 5]);
/// assert!(generate_fibonacci(-3).is_empty());
/// ```
pub fn generate_fibonacci(n: i64) -> Vec<i64> {
    let n = sequence_len(n);
    if n == 0 {
        return vec![];
    }
    trace!(n, "generating fibonacci sequence");
    let mut fib: Vec<i64> = Vec::with_capacity(n);
    fib.push(0);
    if n == 1 {
        return fib;
    }
    fib.push(1);
    for i in 2..n {
        fib.push(fib[i - 1].wrapping_add(fib[i - 2]));
    }
    fib
}

/// Convert a requested length to `usize`, clamping negatives to zero and saturating lengths
/// that do not fit the target's address space.
fn sequence_len(n: i64) -> usize {
    if n <= 0 {
        return 0;
    }
    usize::try_from(n).unwrap_or(usize::MAX)
}
