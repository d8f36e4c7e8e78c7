// src/strategies/join.rs
use crate::strategies::{at_dots, for_each_word, Candidates, Strategy};
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use std::sync::Arc;

/// Concatenates words onto the subdomain without a separator.
///
/// Unlike the other word strategies this one does not skip empty words or an
/// empty subdomain, so a blank wordlist line reproduces the subdomain itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinStrategy;

impl Strategy for JoinStrategy {
    fn name(&self) -> &'static str {
        "join"
    }

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name(),
            description: "wordsub, subword and words fused into each label boundary",
        }
    }

    fn candidates(&self, domain: &str, words: &Wordlist) -> Candidates {
        let domain: Arc<str> = Arc::from(domain);

        let affixes = {
            let domain = domain.clone();
            for_each_word(words.clone(), false, move |word| {
                [format!("{}{}", word, domain), format!("{}{}", domain, word)]
            })
        };

        let infixes = at_dots(domain, words.clone(), false, |domain, dot, word| {
            [
                format!("{}{}{}", &domain[..dot], word, &domain[dot..]),
                format!("{}.{}{}", &domain[..dot], word, &domain[dot + 1..]),
            ]
        });

        Box::new(affixes.chain(infixes))
    }
}
