//! Repeated self-application of a function

/// Returns `f(f(...f(x)))` with `f` applied `n` times; `n == 0` returns `x`.
#[inline]
pub fn iterate_pow<T, F>(f: F, n: u32, x: T) -> T
where
    F: Fn(T) -> T,
{
    (0..n).fold(x, |acc, _| f(acc))
}
