//! Roman numerals

use simple_error::SimpleError;

const VALUES: [u32; 13] = [1000, 900, 500, 400, 100, 90, 50, 40, 10, 9, 5, 4, 1];
const SYMBOLS: [&str; 13] = [
    "M", "CM", "D", "CD", "C", "XC", "L", "XL", "X", "IX", "V", "IV", "I",
];

/// Largest number that can be written without an overline
pub const MAX_ROMAN: u32 = 3999;

fn digit_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/**
 * EPIJ 6.7: Convert Roman numerals to integers
 *
 * A numeral followed by a larger one is subtracted, otherwise added. The
 * subtractive pairs are not validated, so "IIV" gives 5.
 *
 * Time Complexity: O(n)
 */
pub fn roman_to_int(numeral: &str) -> Result<u32, SimpleError> {
    if numeral.is_empty() {
        return Err(SimpleError::new("empty roman numeral"));
    }

    let digits = numeral
        .chars()
        .map(|c| {
            digit_value(c).ok_or_else(|| {
                SimpleError::new(format!("invalid roman digit {:?} in {:?}", c, numeral))
            })
        })
        .collect::<Result<Vec<u32>, SimpleError>>()?;

    let mut total: i64 = 0;
    for (i, &value) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(&next) if value < next => total -= value as i64,
            _ => total += value as i64,
        }
    }

    u32::try_from(total)
        .map_err(|_| SimpleError::new(format!("{:?} is not a positive number", numeral)))
}

/// EPIJ 6.8: Convert integers (between 1 and 3999) to Roman numerals
pub fn int_to_roman(mut number: u32) -> Result<String, SimpleError> {
    if number == 0 || number > MAX_ROMAN {
        return Err(SimpleError::new(format!(
            "{} cannot be written in roman numerals (1 to {})",
            number, MAX_ROMAN
        )));
    }

    let mut result = String::new();
    for (&value, symbol) in VALUES.iter().zip(SYMBOLS) {
        while number >= value {
            result.push_str(symbol);
            number -= value;
        }
    }
    Ok(result)
}
