use crate::board::{Board, CURRENCY};

pub const ERROR_MESSAGE: &str = "Unable to fetch currency rate.";

pub fn lines(base: &str, code: &str, rate: f64) -> Vec<String> {
    vec![format!("1 {} = {:.2} {}", base, rate, code)]
}

pub fn render(board: &Board, base: &str, code: &str, rate: f64) {
    board.set_lines(CURRENCY, lines(base, code, rate));
}

pub fn render_error(board: &Board) {
    board.show_error(CURRENCY, ERROR_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(lines("USD", "BDT", 109.7249), vec!["1 USD = 109.72 BDT"]);
        assert_eq!(lines("USD", "EUR", 0.9), vec!["1 USD = 0.90 EUR"]);
    }
}
