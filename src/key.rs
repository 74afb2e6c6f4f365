use std::cmp::Ordering;

/// Compare two normalized identifiers by numeric value.
///
/// Both arguments must be strings of decimal digits. The magnitude is unbounded, so instead of
/// parsing into a machine integer the comparison strips leading zeros and orders by digit count
/// first, then lexicographically. For equal-length digit strings the lexicographic order is the
/// numeric order.
pub(crate) fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::cmp_numeric;

    #[test]
    fn numeric_not_lexicographic() {
        assert_eq!(cmp_numeric("7", "42"), Ordering::Less);
        assert_eq!(cmp_numeric("100", "99"), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_do_not_matter() {
        assert_eq!(cmp_numeric("00042", "42"), Ordering::Equal);
        assert_eq!(cmp_numeric("007", "42"), Ordering::Less);
        assert_eq!(cmp_numeric("0", "000"), Ordering::Equal);
    }

    #[test]
    fn beyond_machine_integers() {
        let big = "340282366920938463463374607431768211456";
        let bigger = "340282366920938463463374607431768211457";
        assert_eq!(cmp_numeric(big, bigger), Ordering::Less);
        assert_eq!(cmp_numeric(bigger, big), Ordering::Greater);
        assert_eq!(cmp_numeric(big, "9"), Ordering::Greater);
    }
}
