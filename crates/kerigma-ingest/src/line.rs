//! Quote-aware splitting of one delimited line.

/// Splits a line into fields on `delimiter`, handling quoted values.
///
/// A `"` toggles quoted state; a doubled quote inside a quoted field
/// yields one literal quote. The delimiter only separates fields while
/// unquoted, so it always returns one more field than there are unquoted
/// delimiters. Fields are trimmed. An unterminated quote simply consumes
/// the rest of the line into the final field; this never fails.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == delimiter && !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    // Don't forget the last field
    fields.push(current.trim().to_string());
    fields
}
