use std::fmt::{Display, Formatter};

/// Currency amount rounded to whole units (ties to even), with thousands separators.
pub struct DisplayWon(pub f64);

impl Display for DisplayWon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round_ties_even();
        if rounded < 0.0 {
            write!(f, "-")?;
        }
        let digits = format!("{:.0}", rounded.abs());
        let len = digits.len();
        for (index, digit) in digits.chars().enumerate() {
            if index != 0 && (len - index) % 3 == 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, " won")
    }
}

/// A number with at most two decimal places and no trailing zeros.
pub struct DisplayTrimmed(pub f64);

impl Display for DisplayTrimmed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fixed = format!("{:.2}", self.0);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            &fixed
        };
        write!(f, "{trimmed}")
    }
}
