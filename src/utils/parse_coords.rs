use crate::Coord;

/// Extracts every integer from free text and pairs them positionally:
/// `(n0, n1), (n2, n3), ...`. Anything that is not a digit or a leading `-`
/// is treated as a separator; a trailing unpaired integer is dropped.
pub fn parse_coords(text: &str) -> Vec<Coord> {
    let numbers = extract_integers(text);
    numbers
        .chunks_exact(2)
        .map(|pair| Coord::new(pair[0], pair[1]))
        .collect()
}

fn extract_integers(text: &str) -> Vec<i64> {
    let bytes = text.as_bytes();
    let mut result = vec![];
    let mut i = 0;
    while i < bytes.len() {
        let negative = bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !negative && !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // out-of-range numbers are noise like any other non-numeric text
        if let Ok(value) = text[start..i].parse::<i64>() {
            result.push(value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_order() {
        assert_eq!(
            parse_coords("(1, 2), (3, 4)"),
            vec![Coord::new(1, 2), Coord::new(3, 4)]
        );
    }

    #[test]
    fn test_noise_and_trailing_value() {
        assert_eq!(
            parse_coords("cells: 5 x -6 ; 7 y 8 and 9"),
            vec![Coord::new(5, -6), Coord::new(7, 8)]
        );
        assert!(parse_coords("nothing here - at all").is_empty());
        assert!(parse_coords("42").is_empty());
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        assert_eq!(
            parse_coords("1 99999999999999999999 2"),
            vec![Coord::new(1, 2)]
        );
    }
}
