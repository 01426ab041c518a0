/// Splits pasted text into words, one per line.
///
/// Handles `\n` and `\r\n`, trims each line and drops blank ones. Words
/// inside a line are kept together ("arándano rojo" is one word).
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
