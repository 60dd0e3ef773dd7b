use std::fmt;

/// Generation or population count, shown as `1'234'567` on the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(u64);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        // the leading group is what is left over after splitting into threes
        let head = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        f.write_str(&digits[..head])?;
        for start in (head..digits.len()).step_by(3) {
            write!(f, "'{}", &digits[start..start + 3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0u64).to_string(), "0");
        assert_eq!(NiceInt::from(999u64).to_string(), "999");
        assert_eq!(NiceInt::from(1000u64).to_string(), "1'000");
        assert_eq!(NiceInt::from(98_765usize).to_string(), "98'765");
        assert_eq!(NiceInt::from(1_234_567usize).to_string(), "1'234'567");
        assert_eq!(
            NiceInt::from(u64::MAX).to_string(),
            "18'446'744'073'709'551'615"
        );
    }
}
