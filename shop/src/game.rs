use rand::Rng;

pub const GUESS_MIN: u32 = 1;
pub const GUESS_MAX: u32 = 10;

pub const INVALID_GUESS_MESSAGE: &str = "Please enter a valid number between 1 and 10.";

// strict integer parse; trailing garbage rejects the whole guess
pub fn parse_guess(input: &str) -> Option<u32> {
    let value = input.trim().parse::<u32>().ok()?;

    if (GUESS_MIN..=GUESS_MAX).contains(&value) {
        Some(value)
    } else {
        None
    }
}

pub fn draw_target() -> u32 {
    rand::thread_rng().gen_range(GUESS_MIN..=GUESS_MAX)
}

// one finished round; the target is kept so the reveal can name it either way
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundResult {
    pub guess: u32,
    pub target: u32,
}

impl RoundResult {
    pub fn is_win(self) -> bool {
        self.guess == self.target
    }

    pub fn message(self) -> String {
        if self.is_win() {
            format!(
                "Congratulations! You guessed {} and the lucky number was {}. You win a free vinyl record!",
                self.guess, self.target
            )
        } else {
            format!(
                "Sorry! You guessed {} but the lucky number was {}. Try again!",
                self.guess, self.target
            )
        }
    }
}

pub fn play(guess: u32) -> RoundResult {
    RoundResult {
        guess,
        target: draw_target(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_digits_parse() {
        assert_eq!(parse_guess("1"), Some(1));
        assert_eq!(parse_guess("5"), Some(5));
        assert_eq!(parse_guess("10"), Some(10));
        assert_eq!(parse_guess(" 7 "), Some(7));
    }

    #[test]
    fn out_of_range_values_reject() {
        assert_eq!(parse_guess("0"), None);
        assert_eq!(parse_guess("11"), None);
        assert_eq!(parse_guess("999"), None);
    }

    #[test]
    fn non_numeric_input_rejects() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("abc"), None);
        assert_eq!(parse_guess("5abc"), None);
        assert_eq!(parse_guess("3.5"), None);
        assert_eq!(parse_guess("-3"), None);
    }

    #[test]
    fn matching_guess_wins() {
        let round = RoundResult { guess: 4, target: 4 };

        assert!(round.is_win());
        assert_eq!(
            round.message(),
            "Congratulations! You guessed 4 and the lucky number was 4. You win a free vinyl record!"
        );
    }

    #[test]
    fn mismatch_loses_and_reveals_the_target() {
        let round = RoundResult { guess: 5, target: 6 };

        assert!(!round.is_win());
        assert_eq!(
            round.message(),
            "Sorry! You guessed 5 but the lucky number was 6. Try again!"
        );
    }

    #[test]
    fn play_draws_targets_inside_the_range() {
        for _ in 0..100 {
            let round = play(5);

            assert_eq!(round.guess, 5);
            assert!((GUESS_MIN..=GUESS_MAX).contains(&round.target));
        }
    }
}
