use crate::cli::Args;
use crate::config;
use crate::error::Result;
use crate::host::split_host;
use crate::output::{OutputHandle, OutputManager};
use crate::permutator::Permutator;
use crate::types::{Config, HostRecord, OutputFormat, RunStats};
use crate::wordlist::Wordlist;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error, info, warn};
use std::time::Instant;

/// Dispatches one permutation job per host and routes candidates to the
/// output sink.
pub struct PermutationEngine {
    config: Config,
    permutator: Permutator,
    output: OutputManager,
}

impl PermutationEngine {
    pub async fn new(args: Args) -> Result<Self> {
        let mut config = config::load_config(args.config_path.as_deref())?;

        // Override config with command line arguments
        if let Some(wordlist) = args.wordlist {
            config.wordlist = wordlist;
        }
        if let Some(output_file) = args.output_file {
            config.output.file = Some(output_file);
        }
        if args.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(strategies) = args.strategies {
            config.strategies = strategies;
        }

        Self::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Result<Self> {
        config::validate_config(&config)?;

        let output = OutputManager::new(&config.output)?;
        let wordlist = Wordlist::load(&config.wordlist)?;
        info!("Loaded {} words from {:?}", wordlist.len(), config.wordlist);

        let permutator = Permutator::from_names(wordlist, &config.strategies)?;

        Ok(Self {
            config,
            permutator,
            output,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn permutator(&self) -> &Permutator {
        &self.permutator
    }

    /// Permute every host concurrently. Returns once all jobs have finished
    /// and the output has been flushed.
    pub async fn run(self, hosts: Vec<String>) -> Result<RunStats> {
        let start_time = Instant::now();
        let strategies_used: Vec<String> = self
            .permutator
            .strategies()
            .into_iter()
            .map(String::from)
            .collect();

        if hosts.is_empty() {
            warn!("No hosts to permute");
        } else {
            info!(
                "Permuting {} hosts with {} strategies",
                hosts.len(),
                strategies_used.len()
            );
        }

        let mut jobs = FuturesUnordered::new();
        for host in &hosts {
            let record = split_host(host);
            let permutator = self.permutator.clone();
            let output = self.output.handle();
            jobs.push(tokio::spawn(permute_host(permutator, record, output)));
        }

        let mut candidates = 0;
        let mut first_error = None;
        while let Some(joined) = jobs.next().await {
            match joined {
                Ok(Ok(count)) => candidates += count,
                Ok(Err(e)) => {
                    error!("{}", e);
                    first_error.get_or_insert(e);
                }
                Err(e) => error!("Host job failed: {}", e),
            }
        }

        let written = self.output.finish().await?;
        if let Some(e) = first_error {
            return Err(e);
        }
        if self.config.output.file.is_some() {
            debug!("Writer flushed {} lines", written);
        }

        Ok(RunStats {
            hosts: hosts.len(),
            candidates,
            strategies_used,
            duration: start_time.elapsed(),
        })
    }
}

async fn permute_host(
    permutator: Permutator,
    record: HostRecord,
    output: OutputHandle,
) -> Result<usize> {
    debug!(
        "Permuting {:?} (subdomain {:?}, suffix {:?})",
        record.host, record.subdomain, record.suffix
    );

    let mut rx = permutator.permute(&record.subdomain);
    let mut written = 0;
    while let Some(candidate) = rx.recv().await {
        output.write(&record, &candidate).await?;
        written += 1;
    }

    debug!("{}: {} permutations", record.host, written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RustPermuteError;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path, words: &str) -> Config {
        let wordlist = dir.join("words.txt");
        fs::write(&wordlist, words).unwrap();
        let mut config = Config::default();
        config.wordlist = wordlist;
        config.output.file = Some(dir.join("out.txt"));
        config
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_run_counts_match_output() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), "dev\ntest\n");
        let out = config.output.file.clone().unwrap();

        let engine = PermutationEngine::with_config(config).await.unwrap();
        let stats = engine
            .run(vec!["foo.example.com".to_string(), "bar1.example.org".to_string()])
            .await
            .unwrap();

        let contents = fs::read_to_string(out).unwrap();
        assert_eq!(stats.hosts, 2);
        assert_eq!(stats.candidates, contents.lines().count());
        assert!(contents.lines().any(|l| l == "bar10.example.org"));
    }

    #[tokio::test]
    async fn test_missing_wordlist() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path(), "");
        config.wordlist = dir.path().join("nope.txt");

        let err = PermutationEngine::with_config(config).await.err().unwrap();
        assert!(matches!(err, RustPermuteError::WordlistOpen { .. }));
    }

    #[tokio::test]
    async fn test_empty_host_list() {
        let dir = tempdir().unwrap();
        let engine = PermutationEngine::with_config(config_in(dir.path(), "dev\n"))
            .await
            .unwrap();
        let stats = engine.run(Vec::new()).await.unwrap();
        assert_eq!(stats.candidates, 0);
    }
}
