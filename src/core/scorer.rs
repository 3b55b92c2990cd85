//! Guess scoring against a target word
//!
//! Implements Wordle's feedback rules, including proper handling of duplicate
//! letters: exact matches are credited first, then each remaining target letter
//! can be claimed by at most one displaced guess letter.

use super::Verdict;

/// Marks a target position as consumed. Never equal to a guess letter.
const CONSUMED: Option<char> = None;

/// Score `guess` against `target`, producing one verdict per position
///
/// Both words are expected to have the same number of characters; extra
/// characters on either side are ignored.
///
/// # Algorithm
/// 1. First pass: mark exact matches as `Correct` and remove them from the pool
/// 2. Second pass: for every other position, claim the first remaining
///    occurrence of the letter (`WrongSpot`), or mark it `Incorrect`
///
/// # Examples
/// ```
/// use wordle_blitz::core::{Verdict, score};
///
/// let verdicts = score("crate", "crane");
/// assert_eq!(
///     verdicts,
///     vec![
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Incorrect,
///         Verdict::WrongSpot,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, target: &str) -> Vec<Verdict> {
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
    let length = guess.len().min(remaining.len());

    let mut verdicts = vec![Verdict::Incorrect; length];

    // First pass: exact position matches
    for i in 0..length {
        if remaining[i] == Some(guess[i]) {
            verdicts[i] = Verdict::Correct;
            remaining[i] = CONSUMED;
        }
    }

    // Second pass: displaced matches from whatever is left
    for i in 0..length {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|&c| c == Some(guess[i])) {
            verdicts[i] = Verdict::WrongSpot;
            remaining[pos] = CONSUMED;
        }
    }

    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Correct, Incorrect, WrongSpot};

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["crane", "slate", "geese", "aaaaa", "eerie"] {
            assert!(score(word, word).iter().all(|&v| v == Correct));
        }
    }

    #[test]
    fn no_shared_letters_are_all_incorrect() {
        assert_eq!(score("abcde", "fghij"), vec![Incorrect; 5]);
    }

    #[test]
    fn crate_against_crane() {
        assert_eq!(
            score("crate", "crane"),
            vec![Correct, Correct, Correct, Incorrect, WrongSpot]
        );
    }

    #[test]
    fn trace_against_crane() {
        assert_eq!(
            score("trace", "crane"),
            vec![Incorrect, Correct, Correct, WrongSpot, Correct]
        );
    }

    #[test]
    fn single_target_letter_is_credited_once() {
        // One 'e' in "crane" at position 4; guess has 'e' at 0 and 2
        let verdicts = score("ebeby", "crane");
        assert_eq!(verdicts[0], WrongSpot);
        assert_eq!(verdicts[2], Incorrect);
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_displaced_letter() {
        // Only 'e' of "crane" is at position 4; the guess 'e' at 0 must not steal it
        assert_eq!(
            score("eerie", "crane"),
            vec![Incorrect, Incorrect, WrongSpot, Incorrect, Correct]
        );
    }

    #[test]
    fn duplicate_letters_in_both_words() {
        // SPEED vs ERASE: both E's available, S displaced
        assert_eq!(
            score("speed", "erase"),
            vec![WrongSpot, Incorrect, WrongSpot, WrongSpot, Incorrect]
        );
    }

    #[test]
    fn robot_against_floor() {
        assert_eq!(
            score("robot", "floor"),
            vec![WrongSpot, WrongSpot, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn correct_iff_letters_match_positionally() {
        let pairs = [("crane", "trace"), ("geese", "eerie"), ("robot", "floor")];
        for (guess, target) in pairs {
            let verdicts = score(guess, target);
            for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
                assert_eq!(verdicts[i] == Correct, g == t, "{guess} vs {target} at {i}");
            }
        }
    }

    #[test]
    fn unwritten_slots_never_match() {
        let verdicts = score("cr\0\0\0", "crane");
        assert_eq!(verdicts, vec![Correct, Correct, Incorrect, Incorrect, Incorrect]);
    }
}
