// src/strategies/expand.rs
use crate::strategies::{Candidates, Strategy};
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use regex::Regex;
use std::sync::{Arc, OnceLock};

static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

fn digit_run() -> &'static Regex {
    DIGIT_RUN.get_or_init(|| Regex::new("[0-9]+").expect("digit run pattern is valid"))
}

/// Rewrites every run of digits with the values 1..=10, zero-padded to the
/// width of the run. A one-digit run still yields `10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandStrategy;

impl Strategy for ExpandStrategy {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.name(),
            description: "each digit run replaced by 1..10, padded to the run width",
        }
    }

    fn candidates(&self, domain: &str, _words: &Wordlist) -> Candidates {
        let runs: Vec<(usize, usize)> = digit_run()
            .find_iter(domain)
            .map(|m| (m.start(), m.end()))
            .collect();
        let domain: Arc<str> = Arc::from(domain);

        Box::new(runs.into_iter().flat_map(move |(start, end)| {
            let domain = domain.clone();
            (1..=10).map(move |value| {
                format!(
                    "{}{:0width$}{}",
                    &domain[..start],
                    value,
                    &domain[end..],
                    width = end - start
                )
            })
        }))
    }
}
