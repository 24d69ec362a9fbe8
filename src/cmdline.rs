//! Command-line tokenizer for partially typed input
//!
//! Splits on whitespace outside quotes. The last token is kept even when it
//! is empty (the line ends in whitespace) because that is the token being
//! completed. Unterminated quotes are fine: the open token runs to the end.

/// A partially typed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Tokens the user has finished typing
    pub complete: Vec<String>,
    /// Token under the cursor (possibly empty)
    pub current: String,
}

impl CommandLine {
    pub fn parse(input: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut quote: Option<char> = None;
        let mut in_token = false;

        for ch in input.chars() {
            match quote {
                Some(q) if ch == q => quote = None,
                Some(_) => current.push(ch),
                None if ch == '"' || ch == '\'' => {
                    quote = Some(ch);
                    in_token = true;
                }
                None if ch.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                None => {
                    current.push(ch);
                    in_token = true;
                }
            }
        }

        if !in_token {
            // trailing whitespace (or nothing typed) opens a fresh token
            current.clear();
        }

        Self {
            complete: tokens,
            current,
        }
    }

    /// Token 0, whether finished or still being typed
    pub fn keyword(&self) -> &str {
        self.complete
            .first()
            .map(|s| s.as_str())
            .unwrap_or(self.current.as_str())
    }

    /// True while the keyword itself is being typed
    pub fn completing_keyword(&self) -> bool {
        self.complete.is_empty()
    }
}
