#[derive(Debug)]
/// Raised when the tokenizer cannot match any lexical pattern against
/// non-empty input.
///
/// Carries the unconsumed remainder of the source so the caller can show
/// exactly where scanning stopped.
pub struct TokenizeError {
    /// The part of the input that could not be tokenized, starting at the
    /// first offending character.
    pub remainder: String,
    /// The source line where tokenizing stopped.
    pub line:      usize,
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: No token matches the remaining input: {}",
               self.line, self.remainder)
    }
}

impl std::error::Error for TokenizeError {}
