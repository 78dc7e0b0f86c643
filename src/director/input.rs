//! Raw message classification.
//!
//! The transport layer hands over message text as-is; these helpers apply
//! the game's lenient input contract. An answer is any message containing
//! exactly three runs of digits, whatever the separators ("0 1 2",
//! "(0, 1, 2)", "it's 0+1+2!"). A goose call is the word "goose" alone,
//! case and surrounding whitespace insensitive.

/// Whether the message is a goose call.
#[must_use]
pub fn is_goose_call(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("goose")
}

/// Extract an index triple from free-form message text.
///
/// Returns the first three numbers in order of appearance, but only when
/// the message contains exactly three — a message with two or four numbers
/// is not an answer. Numbers too large for `usize` disqualify the message
/// as well; the round's own range check would reject them anyway.
#[must_use]
pub fn parse_answer(text: &str) -> Option<[usize; 3]> {
    let mut numbers = [0usize; 3];
    let mut count = 0;
    for run in text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
    {
        if count == 3 {
            return None;
        }
        numbers[count] = run.parse().ok()?;
        count += 1;
    }
    (count == 3).then_some(numbers)
}
