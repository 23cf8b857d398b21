//! Factorials and the factorial number system.
use num_integer::Integer;
use num_traits::{CheckedMul, FromPrimitive, One};

/// The factorial `n!`.
///
/// Returns None if the result does not fit into `T`.
pub fn factorial<T>(n: usize) -> Option<T>
where
    T: One + CheckedMul + FromPrimitive,
{
    let mut result = T::one();
    for i in 2..=n {
        result = result.checked_mul(&T::from_usize(i)?)?;
    }
    Some(result)
}

/// Iterator over the digits of a number in the factorial number system.
///
/// Digits are produced most significant first. The digit at position `i` (counting from 0) of a
/// number with `places` digits has weight `(places - 1 - i)!` and is less than `places - i` for
/// every number below `places!`. Larger numbers produce an out of range leading digit instead of
/// being reduced.
#[derive(Clone, Debug)]
pub struct FactorialDigits {
    remaining: u64,
    places: usize,
    weight: u64,
}

impl FactorialDigits {
    /// Decompose `value` into `places` factorial digits.
    ///
    /// Returns None if the weight of the leading digit does not fit into a `u64`.
    pub fn new(value: u64, places: usize) -> Option<FactorialDigits> {
        Some(FactorialDigits {
            remaining: value,
            places,
            weight: factorial(places.saturating_sub(1))?,
        })
    }
}

impl Iterator for FactorialDigits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.places == 0 {
            return None;
        }
        let (digit, remaining) = self.remaining.div_rem(&self.weight);
        self.remaining = remaining;
        self.places -= 1;
        if self.places > 0 {
            self.weight /= self.places as u64;
        }
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.places, Some(self.places))
    }
}

impl ExactSizeIterator for FactorialDigits {}
