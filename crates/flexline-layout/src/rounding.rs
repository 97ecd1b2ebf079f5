//! Whole-pixel apportioning of fractional shares.

/// Floor every share and hand the lost remainder back one unit at a time,
/// starting from the last share and moving backwards.
///
/// The rounded shares sum to the rounded total of the originals.
pub(crate) fn apportion(shares: &mut [f64]) {
    if shares.is_empty() {
        return;
    }

    let total: f64 = shares.iter().sum();
    let mut floored = 0.0;
    for share in shares.iter_mut() {
        *share = share.floor();
        floored += *share;
    }

    let remainder = (total.round() - floored).max(0.0) as usize;
    let len = shares.len();
    for share in shares.iter_mut().skip(len.saturating_sub(remainder)) {
        *share += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_shares_untouched() {
        let mut shares = vec![10.0, 20.0, 30.0];
        apportion(&mut shares);
        assert_eq!(shares, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_remainder_goes_to_trailing() {
        // 100 / 3
        let third = 100.0 / 3.0;
        let mut shares = vec![third, third, third];
        apportion(&mut shares);
        assert_eq!(shares, vec![33.0, 33.0, 34.0]);

        let mut shares = vec![12.5, 12.5, 12.5, 12.5];
        apportion(&mut shares);
        assert_eq!(shares, vec![12.0, 12.0, 13.0, 13.0]);
    }

    #[test]
    fn test_negative_shares() {
        let mut shares = vec![-2.5];
        apportion(&mut shares);
        assert_eq!(shares, vec![-3.0]);
    }

    #[test]
    fn test_empty() {
        let mut shares: Vec<f64> = Vec::new();
        apportion(&mut shares);
        assert!(shares.is_empty());
    }
}
