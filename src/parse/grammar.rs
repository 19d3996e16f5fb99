use winnow::combinator::{repeat, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{rest, take_until};

// -- Token splitting ---------------------------------------------------------

/// Text up to and including the next literal occurrence of `token`.
fn segment<'i>(input: &mut &'i str, token: &str) -> ModalResult<&'i str> {
    terminated(take_until(0.., token), token).parse_next(input)
}

fn segments<'i>(input: &mut &'i str, token: &str) -> ModalResult<Vec<&'i str>> {
    let (mut parts, tail): (Vec<&'i str>, &'i str) =
        (repeat(0.., |i: &mut &'i str| segment(i, token)), rest).parse_next(input)?;
    parts.push(tail);
    Ok(parts)
}

/// Split `input` on every literal occurrence of `token`, like `str::split`.
///
/// Matching is purely textual: keywords embedded in longer words are split on
/// too. `n` occurrences always yield `n + 1` parts.
pub(crate) fn split_on<'i>(input: &'i str, token: &str) -> Vec<&'i str> {
    let mut remaining = input;
    // Backtracking stops the repetition and `rest` always succeeds, so this
    // only falls back on an empty token.
    segments(&mut remaining, token).unwrap_or_else(|_| vec![input])
}
