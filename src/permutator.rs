// src/permutator.rs
use crate::error::Result;
use crate::strategies::{create_strategy, get_all_strategies, Strategy};
use crate::types::RustPermuteError;
use crate::wordlist::Wordlist;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capacity of every candidate channel. Producers block until the consumer
/// takes the previous item, so a slow sink throttles generation.
pub const HANDOFF_CAPACITY: usize = 1;

/// Runs a set of strategies concurrently over one subdomain and merges their
/// output into a single channel.
#[derive(Clone)]
pub struct Permutator {
    wordlist: Wordlist,
    strategies: Arc<[Arc<dyn Strategy>]>,
}

impl Permutator {
    pub fn new(wordlist: Wordlist) -> Self {
        Self::with_strategies(wordlist, get_all_strategies())
    }

    pub fn with_strategies(wordlist: Wordlist, strategies: Vec<Arc<dyn Strategy>>) -> Self {
        Self {
            wordlist,
            strategies: strategies.into(),
        }
    }

    pub fn from_names(wordlist: Wordlist, names: &[String]) -> Result<Self> {
        let strategies = names
            .iter()
            .map(|name| {
                create_strategy(name).ok_or_else(|| RustPermuteError::UnknownStrategy(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::with_strategies(wordlist, strategies))
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn strategies(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Start every strategy on `domain` and return the merged stream.
    ///
    /// The receiver yields `None` only after all strategies have finished.
    /// Dropping it early stops the producers at their next send. Must be
    /// called from within a tokio runtime.
    pub fn permute(&self, domain: &str) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
        let producers = FuturesUnordered::new();

        for strategy in self.strategies.iter() {
            let name = strategy.name();
            let candidates = strategy.candidates(domain, &self.wordlist);
            let tx = tx.clone();

            producers.push(tokio::spawn(async move {
                let mut sent = 0usize;
                for candidate in candidates {
                    if tx.send(candidate).await.is_err() {
                        break;
                    }
                    sent += 1;
                }
                (name, sent)
            }));
        }

        let domain = domain.to_string();
        tokio::spawn(async move {
            let mut producers = producers;
            while let Some(joined) = producers.next().await {
                match joined {
                    Ok((name, sent)) => {
                        debug!("{}: emitted {} candidates for {:?}", name, sent, domain)
                    }
                    Err(e) => error!("Strategy task for {:?} failed: {}", domain, e),
                }
            }
            // Every producer is done; releasing the last sender ends the stream.
            drop(tx);
        });

        rx
    }

    /// Drain `permute` into a vector.
    pub async fn collect(&self, domain: &str) -> Vec<String> {
        let mut rx = self.permute(domain);
        let mut results = Vec::new();
        while let Some(candidate) = rx.recv().await {
            results.push(candidate);
        }
        results
    }
}
