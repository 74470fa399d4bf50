//! Token counting backed by tiktoken BPE vocabularies

use tiktoken_rs::CoreBPE;

use crate::error::AppError;

/// Tokenization schemes bundled with tiktoken-rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Cl100k,
    O200k,
    P50k,
    P50kEdit,
    R50k,
}

impl Encoding {
    pub(crate) fn from_name(name: &str) -> Result<Self, AppError> {
        match name {
            "cl100k_base" => Ok(Encoding::Cl100k),
            "o200k_base" => Ok(Encoding::O200k),
            "p50k_base" => Ok(Encoding::P50k),
            "p50k_edit" => Ok(Encoding::P50kEdit),
            "r50k_base" => Ok(Encoding::R50k),
            _ => Err(AppError::UnknownEncoding {
                name: name.to_string(),
            }),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Encoding::Cl100k => "cl100k_base",
            Encoding::O200k => "o200k_base",
            Encoding::P50k => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::R50k => "r50k_base",
        }
    }

    fn build(self) -> Result<CoreBPE, AppError> {
        let bpe = match self {
            Encoding::Cl100k => tiktoken_rs::cl100k_base(),
            Encoding::O200k => tiktoken_rs::o200k_base(),
            Encoding::P50k => tiktoken_rs::p50k_base(),
            Encoding::P50kEdit => tiktoken_rs::p50k_edit(),
            Encoding::R50k => tiktoken_rs::r50k_base(),
        };
        bpe.map_err(|e| AppError::Tokenizer(e.to_string()))
    }
}

/// A loaded vocabulary, built once and reused for every document
pub(crate) struct TokenCounter {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl TokenCounter {
    pub(crate) fn new(encoding: Encoding) -> Result<Self, AppError> {
        Ok(Self {
            encoding,
            bpe: encoding.build()?,
        })
    }

    /// Resolve a scheme by name, e.g. `cl100k_base`
    pub(crate) fn from_name(name: &str) -> Result<Self, AppError> {
        Self::new(Encoding::from_name(name)?)
    }

    pub(crate) fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of tokens `text` encodes to. Special-token markers such as
    /// `<|endoftext|>` are counted as ordinary text.
    pub(crate) fn count(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cl100k() -> TokenCounter {
        TokenCounter::from_name("cl100k_base").unwrap()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(cl100k().count(""), 0);
    }

    #[test]
    fn single_word() {
        assert_eq!(cl100k().count("hello"), 1);
    }

    #[test]
    fn non_empty_text_has_at_least_one_token() {
        let counter = cl100k();
        for text in [" ", "\n", "a", "é", "🦀", "# Heading\n\n- item"] {
            assert!(counter.count(text) >= 1, "{text:?}");
        }
    }

    #[test]
    fn counting_is_deterministic() {
        let counter = cl100k();
        let text = "Logseq pages are plain Markdown files.\n- [[link]] #tag\n";
        let first = counter.count(text);
        assert_eq!(counter.count(text), first);
        assert_eq!(cl100k().count(text), first);
    }

    #[test]
    fn special_token_markers_are_plain_text() {
        assert!(cl100k().count("<|endoftext|>") > 1);
    }

    #[test]
    fn unknown_encoding_is_an_error() {
        let err = TokenCounter::from_name("gpt9_base").err().unwrap();
        assert!(matches!(err, AppError::UnknownEncoding { name } if name == "gpt9_base"));
    }

    #[test]
    fn encoding_names_round_trip() {
        for enc in [
            Encoding::Cl100k,
            Encoding::O200k,
            Encoding::P50k,
            Encoding::P50kEdit,
            Encoding::R50k,
        ] {
            assert_eq!(Encoding::from_name(enc.name()).unwrap(), enc);
        }
    }
}
