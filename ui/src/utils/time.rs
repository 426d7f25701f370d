use jiff::Zoned;

/// The civil year of the system clock in the system time zone.
pub fn current_year() -> i16 {
    Zoned::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!((2024..=9999).contains(&year), "{year}");
    }
}
