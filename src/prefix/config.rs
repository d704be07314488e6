/// Settings for an [`Autocomplete`](super::provider::Autocomplete).
///
/// With the `serde` feature the struct deserializes from partial documents;
/// missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteConfig {
    /// Upper bound on the number of ranked candidates `get_words` returns.
    /// `None` returns every match.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_results: Option<usize>,
    /// Shortest token the default tokenizer feeds into the index.
    #[cfg_attr(feature = "serde", serde(default = "default_min_token_len"))]
    pub min_token_len: usize,
}

impl CompleteConfig {
    /// Caps the number of candidates returned per query.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the shortest token that gets indexed.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }
}

impl Default for CompleteConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            min_token_len: default_min_token_len(),
        }
    }
}

fn default_min_token_len() -> usize {
    1
}
