/// One candidate address plus where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressInput {
    pub value: String,
    /// 1-based line number when read from an address list.
    pub line: Option<u32>,
}

/// Parse an address list: one candidate per line.
///
/// Only the line terminator is stripped. Surrounding whitespace is part of the candidate so
/// the `noSpaces` check can see it. Lines with no content at all are skipped.
pub fn read_inputs(text: &str) -> Vec<AddressInput> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| AddressInput {
            value: line.to_string(),
            line: Some(idx as u32 + 1),
        })
        .collect()
}

/// Positional arguments are taken verbatim, including the empty string.
pub fn from_args(args: Vec<String>) -> Vec<AddressInput> {
    args.into_iter()
        .map(|value| AddressInput { value, line: None })
        .collect()
}
