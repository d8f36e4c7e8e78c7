use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rustpermute::strategies::get_all_strategies;
use rustpermute::{utils, Args, PermutationEngine, RustPermuteError};
use std::process;

const BANNER: &str = r#"
  rustpermute - subdomain permutation generator
  words in, candidates out; nothing is resolved
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args);

    if !args.silent {
        eprintln!("{}", BANNER);
    }

    if args.list_strategies {
        list_strategies();
        return Ok(());
    }

    if !args.has_host_source() {
        error!("{}", RustPermuteError::NoInput);
        process::exit(1);
    }
    let hosts = get_hosts_from_args(&args);

    let engine = match PermutationEngine::new(args.clone()).await {
        Ok(engine) => engine,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let stats = match engine.run(hosts).await {
        Ok(stats) => stats,
        Err(e) => {
            error!("Permutation failed: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Generated {} permutations for {} hosts with {} strategies in {:.2}s",
        stats.candidates,
        stats.hosts,
        stats.strategies_used.len(),
        stats.duration.as_secs_f64()
    );

    Ok(())
}

fn init_logger(args: &Args) {
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else if args.silent {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn list_strategies() {
    println!("Available strategies:\n");
    for strategy in get_all_strategies() {
        let info = strategy.info();
        println!("  {:<8} {}", info.name, info.description);
    }
}

fn get_hosts_from_args(args: &Args) -> Vec<String> {
    let mut hosts = Vec::new();

    if let Some(host) = &args.host {
        hosts.push(host.clone());
    }

    if let Some(file_path) = &args.list {
        match utils::read_hosts(file_path) {
            Ok(lines) => hosts.extend(lines),
            Err(e) => {
                error!("Failed to read hosts from file {:?}: {}", file_path, e);
            }
        }
    }

    if args.use_stdin() {
        hosts.extend(utils::read_stdin_hosts());
    }

    hosts
}
