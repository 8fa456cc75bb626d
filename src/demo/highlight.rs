/// Token categories over the fixed demo-snippet grammar.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    Normal,
    Comment,
    Str,
    Keyword,
}

/// One highlighted span. Segments from a single tokenization concatenate
/// losslessly back to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: Kind,
}

/// Lazy, restartable tokenizer for the demo code snippets. Recognizes
/// line comments, quoted strings (single, double, backtick) and a small
/// keyword set; everything else passes through as Normal runs. No state
/// is shared between tokenizations.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> From<&'a str> for Tokenizer<'a> {
    fn from(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Segment<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let (len, kind) = scan(rest);
        self.pos += len;
        Some(Segment {
            text: &rest[..len],
            kind,
        })
    }
}

const KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "new",
    "document",
    "Date",
    "addEventListener",
    "getElementById",
    "getTime",
];

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
fn is_quote(c: char) -> bool {
    c == '\'' || c == '"' || c == '`'
}

fn scan(rest: &str) -> (usize, Kind) {
    let first = rest.chars().next().expect("scan on nonempty input");
    if rest.starts_with("//") {
        // up to but not including the newline
        (rest.find('\n').unwrap_or(rest.len()), Kind::Comment)
    } else if is_quote(first) {
        // unterminated strings swallow the rest of the input
        match rest[1..].find(first) {
            Some(i) => (i + 2, Kind::Str),
            None => (rest.len(), Kind::Str),
        }
    } else if is_word(first) {
        let end = rest.find(|c| !is_word(c)).unwrap_or(rest.len());
        match KEYWORDS.contains(&&rest[..end]) {
            true => (end, Kind::Keyword),
            false => (end, Kind::Normal),
        }
    } else {
        (glue(rest), Kind::Normal)
    }
}

/// length of the run of punctuation/whitespace before the next word,
/// quote, or comment opener
fn glue(rest: &str) -> usize {
    for (i, c) in rest.char_indices().skip(1) {
        if is_word(c) || is_quote(c) || rest[i..].starts_with("//") {
            return i;
        }
    }
    rest.len()
}
