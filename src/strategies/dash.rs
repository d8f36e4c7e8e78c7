// src/strategies/dash.rs
use crate::strategies::{at_dots, for_each_word, Candidates, Strategy};
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use std::iter;
use std::sync::Arc;

/// Joins words to the subdomain with a dash.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashStrategy;

impl Strategy for DashStrategy {
    fn name(&self) -> &'static str {
        "dash"
    }

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name(),
            description: "word-sub, sub-word and dash-joined words at each label boundary",
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
                    format!("{}-{}", word, domain),
                    format!("{}-{}", domain, word),
                ]
            })
        };

        // The first form replaces the dot, the second keeps it after the word.
        let infixes = at_dots(domain, words.clone(), true, |domain, dot, word| {
            [
                format!("{}.{}-{}", &domain[..dot], word, &domain[dot + 1..]),
                format!("{}-{}{}", &domain[..dot], word, &domain[dot..]),
            ]
        });

        Box::new(affixes.chain(infixes))
    }
}
