//! Modulo-23 check letter shared by DNI and NIE.

/// Official check letters, indexed by `number % 23`.
pub const LETTERS: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

pub fn check_letter(number: u64) -> char {
    LETTERS[(number % 23) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_order() {
        assert_eq!(LETTERS.iter().collect::<String>(), "TRWAGMYFPDXBNJZSQVHLCKE");
    }

    #[rstest]
    #[case(0, 'T')]
    #[case(1, 'R')]
    #[case(22, 'E')]
    #[case(23, 'T')]
    #[case(12_345_678, 'Z')]
    #[case(99_999_999, 'R')]
    #[case(1_234_567, 'L')]
    fn letters(#[case] number: u64, #[case] expected: char) {
        assert_eq!(check_letter(number), expected);
    }
}
