// src/strategies/number.rs
use crate::strategies::{dot_positions, Candidates, Strategy};
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use std::iter;
use std::sync::Arc;

/// Appends single digits to the subdomain and to each label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberStrategy;

impl Strategy for NumberStrategy {
    fn name(&self) -> &'static str {
        "number"
    }

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name(),
            description: "sub-0..sub-9 and digits 0-9 appended to each inner label",
        }
    }

    fn candidates(&self, domain: &str, _words: &Wordlist) -> Candidates {
        if domain.is_empty() {
            return Box::new(iter::empty());
        }
        let domain: Arc<str> = Arc::from(domain);

        let suffixes = {
            let domain = domain.clone();
            (0..10).map(move |digit| format!("{}-{}", domain, digit))
        };

        let infixes = dot_positions(&domain).into_iter().flat_map(move |dot| {
            let domain = domain.clone();
            (0..10).flat_map(move |digit| {
                let (head, tail) = domain.split_at(dot);
                [
                    format!("{}-{}{}", head, digit, tail),
                    format!("{}{}{}", head, digit, tail),
                ]
            })
        });

        Box::new(suffixes.chain(infixes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::collect;

    #[test]
    fn test_number_suffixes() {
        let results = collect(&NumberStrategy, "foo", &["ignored"]);
        let expected: Vec<String> = (0..10).map(|d| format!("foo-{}", d)).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_number_label_boundary() {
        let results = collect(&NumberStrategy, "api.prod", &[]);
        assert_eq!(results.len(), 10 + 20);
        assert_eq!(results[10], "api-0.prod");
        assert_eq!(results[11], "api0.prod");
        assert!(results.contains(&"api-9.prod".to_string()));
        assert!(results.contains(&"api9.prod".to_string()));
    }

    #[test]
    fn test_number_empty_domain() {
        assert!(collect(&NumberStrategy, "", &[]).is_empty());
    }
}
