//! Splits a SQL script into statements that can be executed one at a time.
//!
//! A `;` ends a statement unless it sits inside a string literal, a quoted
//! identifier, a comment, or the `BEGIN ... END` body of a trigger.

/// Keywords that open a trigger definition, after optional TEMP/TEMPORARY
fn is_trigger_prefix(words: &[String]) -> bool {
    match words {
        [create, trigger, ..] if create == "CREATE" && trigger == "TRIGGER" => true,
        [create, temp, trigger, ..] => {
            create == "CREATE" && (temp == "TEMP" || temp == "TEMPORARY") && trigger == "TRIGGER"
        }
        _ => false,
    }
}

/// Tracks the statement currently being scanned
#[derive(Default)]
struct StatementState {
    /// First keywords of the statement, uppercased
    leading: Vec<String>,
    in_trigger_body: bool,
    case_depth: usize,
}

impl StatementState {
    /// `terminates` is set when only trivia separates the word from a `;`
    /// or the end of input. A trigger body closes on such an `END` only, so
    /// a column named `end` inside the body is left alone.
    fn observe_word(&mut self, word: &str, terminates: bool) {
        let word = word.to_ascii_uppercase();
        if self.leading.len() < 3 {
            self.leading.push(word.clone());
        }
        if !is_trigger_prefix(&self.leading) {
            return;
        }

        if !self.in_trigger_body {
            if word == "BEGIN" {
                self.in_trigger_body = true;
            }
            return;
        }

        match word.as_str() {
            "CASE" => self.case_depth += 1,
            "END" if self.case_depth > 0 => self.case_depth -= 1,
            "END" if terminates => self.in_trigger_body = false,
            _ => {}
        }
    }
}

/// Index just past the closing `quote`, treating a doubled quote as an escape.
/// Unterminated literals run to the end of input.
fn skip_quoted(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_until(bytes: &[u8], from: usize, terminator: &[u8]) -> usize {
    bytes[from..]
        .windows(terminator.len())
        .position(|window| window == terminator)
        .map(|offset| from + offset + terminator.len())
        .unwrap_or(bytes.len())
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Remove leading whitespace and comments
fn strip_leading_trivia(sql: &str) -> &str {
    let mut rest = sql.trim_start();
    loop {
        if rest.starts_with("--") {
            rest = match rest.find('\n') {
                Some(newline) => rest[newline + 1..].trim_start(),
                None => "",
            };
        } else if rest.starts_with("/*") {
            rest = match rest[2..].find("*/") {
                Some(end) => rest[2 + end + 2..].trim_start(),
                None => "",
            };
        } else {
            return rest;
        }
    }
}

/// Split `sql` into executable statements, without their trailing `;`.
/// Fragments holding only whitespace and comments are dropped.
pub fn split_statements(sql: &str) -> Vec<String> {
    let bytes = sql.as_bytes();
    let mut statements = Vec::new();
    let mut state = StatementState::default();
    let mut start = 0;
    let mut i = 0;

    let mut push = |fragment: &str| {
        let statement = strip_leading_trivia(fragment).trim_end();
        if !statement.is_empty() {
            statements.push(statement.to_string());
        }
    };

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => i = skip_quoted(bytes, i, quote),
            b'[' => i = skip_until(bytes, i + 1, b"]"),
            b'-' if bytes.get(i + 1) == Some(&b'-') => i = skip_until(bytes, i + 2, b"\n"),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_until(bytes, i + 2, b"*/"),
            b';' => {
                if !state.in_trigger_body {
                    push(&sql[start..i]);
                    state = StatementState::default();
                    start = i + 1;
                }
                i += 1;
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                let word_start = i;
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
                let rest = strip_leading_trivia(&sql[i..]);
                let terminates = rest.is_empty() || rest.starts_with(';');
                state.observe_word(&sql[word_start..i], terminates);
            }
            b if b.is_ascii_digit() => {
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        push(&sql[start..]);
    }

    statements
}

/// First `max_chars` characters of a statement on a single line
pub fn preview(statement: &str, max_chars: usize) -> String {
    let flattened = statement.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() > max_chars {
        let cut: String = flattened.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        flattened
    }
}
