// src/utils.rs
//! Weight helpers shared by the selector.

/// Euclid over `u64`. `gcd(0, x) == x`.
#[inline]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// GCD of a whole weight set. Empty or all-zero sets give 0.
pub fn calc_gcd<I>(weights: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    weights.into_iter().fold(0, gcd)
}

/// Largest weight in the set, 0 when empty.
pub fn max_weight<I>(weights: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    weights.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn gcd_of_set() {
        assert_eq!(calc_gcd([2, 4, 4, 18]), 2);
        assert_eq!(calc_gcd([3, 0, 9]), 3);
        assert_eq!(calc_gcd([5]), 5);
        assert_eq!(calc_gcd([0, 0]), 0);
        assert_eq!(calc_gcd(Vec::<u64>::new()), 0);
        assert_eq!(calc_gcd([u64::MAX, u64::MAX]), u64::MAX);
    }

    #[test]
    fn max_of_set() {
        assert_eq!(max_weight([2, 4, 4, 18]), 18);
        assert_eq!(max_weight([0, 0]), 0);
        assert_eq!(max_weight(Vec::<u64>::new()), 0);
    }
}
