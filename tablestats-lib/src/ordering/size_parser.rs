use super::OrderingError;
use regex::Regex;
use std::sync::LazyLock;

static HUMAN_SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\.([0-9]+))? (bytes|KiB|MiB|GiB|TiB)$").expect("invalid regex"));

const fn unit_multiplier(unit: &str) -> Option<u64> {
    let exponent = match unit.as_bytes() {
        b"bytes" => 0,
        b"KiB" => 1,
        b"MiB" => 2,
        b"GiB" => 3,
        b"TiB" => 4,
        _ => return None,
    };
    Some(1_u64 << (10 * exponent))
}

/// Parse a size string into a byte count.
///
/// In raw mode the text must be a plain decimal integer such as `"9001"`. In
/// human-readable mode it must be `<number> <unit>` where the unit is one of
/// `bytes`, `KiB`, `MiB`, `GiB` or `TiB`, each step a factor of 1024. Fractional
/// amounts are truncated toward zero, so `"1.21 TiB"` is `1330409069608`.
///
/// # Errors
///
/// Returns [`OrderingError::MalformedNumericString`] if the text does not match
/// the requested encoding or the magnitude does not fit in a `u64`.
pub fn parse_byte_size(text: &str, human_readable: bool) -> Result<u64, OrderingError> {
    let malformed = || OrderingError::MalformedNumericString(text.into());

    if !human_readable {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        return text.parse().map_err(|_parse_error| malformed());
    }

    let captures = HUMAN_SIZE_REGEX.captures(text).ok_or_else(malformed)?;
    let whole = &captures[1];
    let unit = &captures[3];
    let multiplier = unit_multiplier(unit).ok_or_else(malformed)?;

    match captures.get(2) {
        None => whole
            .parse::<u64>()
            .ok()
            .and_then(|amount| amount.checked_mul(multiplier))
            .ok_or_else(malformed),

        Some(_) => captures[0]
            .split(' ')
            .next()
            .and_then(|number| number.parse::<f64>().ok())
            .and_then(|amount| scale_fraction(amount, multiplier))
            .ok_or_else(malformed),
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "multipliers are powers of two and convert exactly; the result is bounds-checked before narrowing"
)]
fn scale_fraction(amount: f64, multiplier: u64) -> Option<u64> {
    let bytes = (amount * multiplier as f64).trunc();
    (bytes < u64::MAX as f64).then_some(bytes as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_plain_integer() {
        assert_eq!(parse_byte_size("9001", false).unwrap(), 9001);
        assert_eq!(parse_byte_size("0", false).unwrap(), 0);
    }

    #[test]
    fn test_raw_rejects_units_and_signs() {
        for text in ["5 KiB", "", "-3", "+3", "1.5", " 12", "12 "] {
            assert_eq!(
                parse_byte_size(text, false),
                Err(OrderingError::MalformedNumericString(text.into())),
                "raw mode should reject {text:?}"
            );
        }
    }

    #[test]
    fn test_raw_rejects_overflow() {
        assert!(matches!(
            parse_byte_size("18446744073709551616", false),
            Err(OrderingError::MalformedNumericString(_))
        ));
    }

    #[test]
    fn test_human_readable_whole_units() {
        assert_eq!(parse_byte_size("999 bytes", true).unwrap(), 999);
        assert_eq!(parse_byte_size("0 bytes", true).unwrap(), 0);
        assert_eq!(parse_byte_size("5 KiB", true).unwrap(), 5 * 1024);
        assert_eq!(parse_byte_size("40 KiB", true).unwrap(), 40 * 1024);
        assert_eq!(parse_byte_size("3 MiB", true).unwrap(), 3 * 1024 * 1024);
        assert_eq!(parse_byte_size("2 GiB", true).unwrap(), 2 * 1024 * 1024 * 1024);
        assert_eq!(parse_byte_size("1 TiB", true).unwrap(), 1024_u64.pow(4));
    }

    #[test]
    fn test_human_readable_fractions_truncate() {
        assert_eq!(parse_byte_size("1.21 TiB", true).unwrap(), 1_330_409_069_608);
        assert_eq!(parse_byte_size("2.71 GiB", true).unwrap(), 2_909_840_343);
        assert_eq!(parse_byte_size("3.14 MiB", true).unwrap(), 3_292_528);
        assert_eq!(parse_byte_size("0.5 KiB", true).unwrap(), 512);
    }

    #[test]
    fn test_human_readable_rejects_malformed() {
        for text in ["9001", "5KiB", "5 kib", "5 KB", "five KiB", "1.5.2 MiB", "-1 KiB", "5 KiB extra", ".5 KiB"] {
            assert_eq!(
                parse_byte_size(text, true),
                Err(OrderingError::MalformedNumericString(text.into())),
                "human-readable mode should reject {text:?}"
            );
        }
    }

    #[test]
    fn test_human_readable_rejects_overflow() {
        assert!(parse_byte_size("99999999999 TiB", true).is_err());
        assert!(parse_byte_size("99999999999.5 TiB", true).is_err());
    }
}
