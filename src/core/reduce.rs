//! Digit reduction
//!
//! Repeated base-10 digit summing until the value is at most 9.
//! Zero is never summed away: `reduce_to_single_digit(0) == 0`.

/// Sum of the decimal digits of `n`
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit.
///
/// Positive inputs land in 1..=9; 0 stays 0.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}
