//! Shell-like splitting of console input.
//!
//! A line is split on whitespace, except that words inside an open quote,
//! brace or parenthesis are glued back together with single spaces. This lets
//! a user type inline JSON without outer quoting:
//!
//! ```text
//! callUtxo Transfer {"recipient": "x", "amount": "1"}
//! ```
//!
//! yields three arguments. Quote characters are kept in the produced
//! arguments.

use crate::errors::ConsoleError;

/// Running nesting state for one argument being assembled.
#[derive(Debug, Default, Clone)]
pub struct Nesting {
    depth: i32,
    in_string: bool,
    open_quote: Option<char>,
    escaped: bool,
}

impl Nesting {
    /// Creates a fresh state at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current nesting depth. Negative after an unmatched close.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Whether the scanner is inside a quoted string.
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// Feeds every character of `text`.
    pub fn scan(&mut self, text: &str) {
        for c in text.chars() {
            self.feed(c);
        }
    }

    fn feed(&mut self, c: char) {
        match c {
            '\\' => {
                // a backslash escaped by a backslash consumes the escape
                self.escaped = !self.escaped;
                return;
            }
            '\'' | '"' if !self.escaped => {
                if !self.in_string {
                    self.in_string = true;
                    self.open_quote = Some(c);
                    self.depth += 1;
                } else if self.open_quote == Some(c) {
                    self.in_string = false;
                    self.open_quote = None;
                    self.depth -= 1;
                }
            }
            '{' | '(' if !self.in_string => self.depth += 1,
            '}' | ')' if !self.in_string => self.depth -= 1,
            _ => {}
        }
        self.escaped = false;
    }
}

/// Returns the nesting depth of `input` scanned from a fresh state.
///
/// Invalid input such as `a = }` gives a negative result.
pub fn nesting_depth(input: &str) -> i32 {
    let mut nesting = Nesting::new();
    nesting.scan(input);
    nesting.depth()
}

/// Splits a line into arguments.
///
/// A line that ends inside an open quote or bracket still yields the
/// unterminated remainder as its last argument. Use [`split_line`] to reject
/// such input instead.
pub fn tokenize(line: &str) -> Vec<String> {
    split(line).0
}

/// Splits a line into arguments, failing when the line leaves a quote or
/// bracket open.
pub fn split_line(line: &str) -> Result<Vec<String>, ConsoleError> {
    let (args, depth) = split(line);
    if depth > 0 {
        return Err(ConsoleError::Unbalanced { depth });
    }
    Ok(args)
}

fn split(line: &str) -> (Vec<String>, i32) {
    let mut args = Vec::new();
    let mut pending = String::new();
    let mut nesting = Nesting::new();

    for word in line.split_whitespace() {
        nesting.scan(word);
        if !pending.is_empty() {
            pending.push(' ');
        }
        pending.push_str(word);

        if nesting.depth() <= 0 {
            args.push(std::mem::take(&mut pending));
            nesting = Nesting::new();
        }
    }

    let depth = nesting.depth();
    if !pending.is_empty() {
        args.push(pending);
    }
    (args, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("getRow mytable id"), vec!["getRow", "mytable", "id"]);
    }

    #[test]
    fn test_inline_json_is_one_argument() {
        let args = tokenize(r#"callUtxo Transfer {"recipient": "a", "amount": "1"} 1"#);
        assert_eq!(
            args,
            vec![
                "callUtxo",
                "Transfer",
                r#"{"recipient": "a", "amount": "1"}"#,
                "1"
            ]
        );
    }

    #[test]
    fn test_quoted_string_keeps_spaces_and_quotes() {
        let args = tokenize(r#"callContract NewPage "hello big world" 1"#);
        assert_eq!(args, vec!["callContract", "NewPage", r#""hello big world""#, "1"]);
    }

    #[test]
    fn test_braces_inside_string_are_inert() {
        assert_eq!(tokenize("echo '{a b' c"), vec!["echo", "'{a b'", "c"]);
        assert_eq!(nesting_depth("'{('"), 0);
    }

    #[test]
    fn test_other_quote_does_not_close_string() {
        assert_eq!(tokenize(r#"say "it's fine" now"#), vec!["say", r#""it's fine""#, "now"]);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        assert_eq!(tokenize(r#"say "a\" b" c"#), vec!["say", r#""a\" b""#, "c"]);
        // the second backslash consumes the first, so the quote closes
        assert_eq!(nesting_depth(r#""a\\""#), 0);
    }

    #[test]
    fn test_unbalanced_line_is_permissive_in_tokenize() {
        let args = tokenize(r#"callContract {"a": 1"#);
        assert_eq!(args, vec!["callContract", r#"{"a": 1"#]);
    }

    #[test]
    fn test_unbalanced_line_is_rejected_by_split_line() {
        match split_line(r#"callContract {"a": {"b": 1"#) {
            Err(ConsoleError::Unbalanced { depth }) => assert_eq!(depth, 2),
            other => panic!("expected unbalanced error, got {:?}", other),
        }
        assert!(split_line("getList t -c amount").is_ok());
    }

    #[test]
    fn test_unmatched_close_emits_word() {
        assert_eq!(nesting_depth("a = }"), -1);
        assert_eq!(tokenize("foo } bar"), vec!["foo", "}", "bar"]);
    }

    #[test]
    fn test_whitespace_only_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_round_trip_on_balanced_lines() {
        let lines = [
            "maxBlock",
            "  getBalance   0666-7782-0000-0000-3160  1 ",
            r#"callUtxo Transfer {"recipient": "a", "amount": "1"} 1"#,
            r#"callContract NewPage {"Name": "p (1)", "Value": "x"}"#,
            r#"getList keys -w {"id": {"$gt": 2}} -c "amount, ecosystem""#,
            "a (b c) d",
        ];
        for line in lines {
            let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
            let args = split_line(line).unwrap();
            assert_eq!(args.join(" "), normalized, "line: {}", line);
        }
    }
}
