/// Splits one raw input line into arguments, applying quote and escape
/// rules. Single quotes keep everything literal; double quotes keep spaces
/// but allow backslash escapes; outside quotes a backslash escapes the next
/// character. Adjacent fragments glue into one token.
///
/// Never fails: an unterminated quote runs to the end of the line and a
/// trailing lone backslash is dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_single_quote => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            ' ' if !in_single_quote && !in_double_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(tokenize("echo hello    world"), vec!["echo", "hello", "world"]);
        assert_eq!(tokenize("  echo hi  "), vec!["echo", "hi"]);
    }

    #[test]
    fn test_single_quotes_preserve_spaces() {
        assert_eq!(tokenize("echo 'hello    world'"), vec!["echo", "hello    world"]);
    }

    #[test]
    fn test_single_quotes_keep_backslash_literal() {
        assert_eq!(tokenize(r"echo 'a\nb'"), vec!["echo", r"a\nb"]);
    }

    #[test]
    fn test_adjacent_fragments_concatenate() {
        assert_eq!(tokenize("echo 'hello''world'"), vec!["echo", "helloworld"]);
        assert_eq!(tokenize("echo hello''world"), vec!["echo", "helloworld"]);
        assert_eq!(tokenize(r#"echo hello""world"#), vec!["echo", "helloworld"]);
    }

    #[test]
    fn test_double_quotes_preserve_inner_single_quotes() {
        assert_eq!(tokenize(r#"echo "Hello 'World'""#), vec!["echo", "Hello 'World'"]);
    }

    #[test]
    fn test_escape_inside_double_quotes() {
        assert_eq!(tokenize(r#"echo "a\"b""#), vec!["echo", r#"a"b"#]);
    }

    #[test]
    fn test_escaped_space_outside_quotes() {
        assert_eq!(tokenize(r"echo hello\ world"), vec!["echo", "hello world"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("echo 'abc"), vec!["echo", "abc"]);
        assert_eq!(tokenize(r#"echo "a b"#), vec!["echo", "a b"]);
    }

    #[test]
    fn test_trailing_backslash_dropped() {
        assert_eq!(tokenize(r"echo abc\"), vec!["echo", "abc"]);
    }

    #[test]
    fn test_empty_fragment_alone_yields_nothing() {
        assert!(tokenize("''").is_empty());
        assert_eq!(tokenize("echo '' x"), vec!["echo", "x"]);
    }
}
