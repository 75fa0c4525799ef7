use std::cmp::Ordering;

/// One whitespace-delimited fragment of the raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    chars: Vec<char>,
}

impl Token {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Tokens of a query plus the case rule derived from the whole raw string.
///
/// Built once per keystroke and read-only for the duration of a search pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<Token>,
    case_sensitive: bool,
}

impl Query {
    /// Splits on whitespace and orders tokens longest first.
    ///
    /// Token matches may not overlap, so placing the most constraining
    /// tokens first leaves short tokens to fill the gaps. Equal lengths fall
    /// back to lexicographic order so the pass is deterministic.
    ///
    /// A query containing any uppercase character is matched case
    /// sensitively; an all-lowercase query folds every target to lowercase.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<Token> = raw.split_whitespace().map(Token::new).collect();
        tokens.sort_by(compare_tokens);
        Self {
            tokens,
            case_sensitive: raw.chars().any(char::is_uppercase),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Characters of `target` as the matcher should see them.
    ///
    /// Folding maps each character to exactly one character so indices into
    /// the adjusted form line up with the original.
    pub fn adjust_target(&self, target: &[char]) -> Vec<char> {
        if self.case_sensitive {
            target.to_vec()
        } else {
            target.iter().map(|&c| fold_char(c)).collect()
        }
    }
}

pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn compare_tokens(a: &Token, b: &Token) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.text.cmp(&b.text))
}
