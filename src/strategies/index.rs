// src/strategies/index.rs
use crate::strategies::{at_dots, for_each_word, Candidates, Strategy};
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use std::iter;
use std::sync::Arc;

/// Adds each word as a new label before, after, or inside the subdomain.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexStrategy;

impl Strategy for IndexStrategy {
    fn name(&self) -> &'static str {
        "index"
    }

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name(),
            description: "word.sub, sub.word and a new word label after each existing label",
        }
    }

    fn candidates(&self, domain: &str, words: &Wordlist) -> Candidates {
        if domain.is_empty() {
            return Box::new(iter::empty());
        }
        let domain: Arc<str> = Arc::from(domain);

        let affixes = {
            let domain = domain.clone();
            for_each_word(words.clone(), true, move |word| {
                [
                    format!("{}.{}", word, domain),
                    format!("{}.{}", domain, word),
                ]
            })
        };

        let infixes = at_dots(domain, words.clone(), true, |domain, dot, word| {
            iter::once(format!("{}.{}{}", &domain[..dot], word, &domain[dot..]))
        });

        Box::new(affixes.chain(infixes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::collect;

    #[test]
    fn test_index_with_label_boundary() {
        let results = collect(&IndexStrategy, "foo.example", &["dev"]);
        assert_eq!(
            results,
            vec!["dev.foo.example", "foo.example.dev", "foo.dev.example"]
        );
    }

    #[test]
    fn test_index_multiple_dots() {
        let results = collect(&IndexStrategy, "a.b.c", &["x", "y"]);
        assert_eq!(results.len(), 4 + 4);
        assert!(results.contains(&"a.x.b.c".to_string()));
        assert!(results.contains(&"a.b.y.c".to_string()));
    }

    #[test]
    fn test_index_skips_empty_words() {
        assert_eq!(collect(&IndexStrategy, "a.b", &[""]), Vec::<String>::new());
    }
}
