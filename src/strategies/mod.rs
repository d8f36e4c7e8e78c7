// src/strategies/mod.rs
use crate::types::StrategyInfo;
use crate::wordlist::Wordlist;
use std::sync::Arc;

mod dash;
mod expand;
mod index;
mod join;
mod number;

pub use dash::DashStrategy;
pub use expand::ExpandStrategy;
pub use index::IndexStrategy;
pub use join::JoinStrategy;
pub use number::NumberStrategy;

/// Lazily generated candidates. Owns everything it needs so it can be moved
/// into a spawned task.
pub type Candidates = Box<dyn Iterator<Item = String> + Send>;

/// A single mutation rule applied to a subdomain.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn info(&self) -> StrategyInfo;
    fn candidates(&self, domain: &str, words: &Wordlist) -> Candidates;
}

/// Names of all strategies, in the order they are started.
pub const STRATEGY_NAMES: [&str; 5] = ["index", "dash", "number", "join", "expand"];

pub fn create_strategy(name: &str) -> Option<Arc<dyn Strategy>> {
    match name.trim().to_lowercase().as_str() {
        "index" => Some(Arc::new(IndexStrategy)),
        "dash" => Some(Arc::new(DashStrategy)),
        "number" => Some(Arc::new(NumberStrategy)),
        "join" => Some(Arc::new(JoinStrategy)),
        "expand" => Some(Arc::new(ExpandStrategy)),
        _ => None,
    }
}

pub fn get_all_strategies() -> Vec<Arc<dyn Strategy>> {
    STRATEGY_NAMES
        .iter()
        .filter_map(|name| create_strategy(name))
        .collect()
}

/// Byte offsets of every `.` in `domain`, left to right.
pub(crate) fn dot_positions(domain: &str) -> Vec<usize> {
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .map(|(i, _)| i)
        .collect()
}

/// Runs `build` once per word, in wordlist order.
pub(crate) fn for_each_word<F, I>(
    words: Wordlist,
    skip_empty: bool,
    build: F,
) -> impl Iterator<Item = String> + Send + 'static
where
    F: Fn(&str) -> I + Send + 'static,
    I: IntoIterator<Item = String> + Send + 'static,
    I::IntoIter: Send + 'static,
{
    (0..words.len()).flat_map(move |idx| {
        let word = words[idx].as_str();
        let built = if skip_empty && word.is_empty() {
            None
        } else {
            Some(build(word))
        };
        built.into_iter().flatten()
    })
}

/// Runs `build(domain, dot, word)` for every dot position, then every word.
pub(crate) fn at_dots<F, I>(
    domain: Arc<str>,
    words: Wordlist,
    skip_empty: bool,
    build: F,
) -> impl Iterator<Item = String> + Send + 'static
where
    F: Fn(&str, usize, &str) -> I + Send + Sync + 'static,
    I: IntoIterator<Item = String> + Send + 'static,
    I::IntoIter: Send + 'static,
{
    let build = Arc::new(build);
    dot_positions(&domain).into_iter().flat_map(move |dot| {
        let domain = domain.clone();
        let build = build.clone();
        for_each_word(words.clone(), skip_empty, move |word| build(&domain, dot, word))
    })
}

#[cfg(test)]
pub(crate) fn collect(strategy: &dyn Strategy, domain: &str, words: &[&str]) -> Vec<String> {
    strategy
        .candidates(domain, &Wordlist::from_words(words.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_strategy() {
        assert!(create_strategy("dash").is_some());
        assert!(create_strategy(" Expand ").is_some());
        assert!(create_strategy("invalid").is_none());
    }

    #[test]
    fn test_get_all_strategies_order() {
        let names: Vec<&str> = get_all_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(names, STRATEGY_NAMES);
    }

    #[test]
    fn test_dot_positions() {
        assert_eq!(dot_positions("a.bc.d"), vec![1, 4]);
        assert!(dot_positions("nodots").is_empty());
        assert_eq!(dot_positions("é.x"), vec![2]);
    }

    #[test]
    fn test_dot_free_counts() {
        let words = ["api", "dev", "stage"];
        let n = words.len();
        assert_eq!(collect(&DashStrategy, "foo", &words).len(), 2 * n);
        assert_eq!(collect(&IndexStrategy, "foo", &words).len(), 2 * n);
        assert_eq!(collect(&JoinStrategy, "foo", &words).len(), 2 * n);
        assert_eq!(collect(&NumberStrategy, "foo", &words).len(), 10);
        assert_eq!(collect(&ExpandStrategy, "foo", &words).len(), 0);
        assert_eq!(collect(&ExpandStrategy, "foo1bar22", &words).len(), 20);
    }
}
