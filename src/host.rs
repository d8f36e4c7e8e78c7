// src/host.rs
use crate::types::HostRecord;
use url::Url;

/// Reduce an input line to a bare hostname: no scheme, credentials, port,
/// path or trailing dot.
pub fn normalize_host(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.contains("://") {
        if let Ok(url) = Url::parse(trimmed) {
            if let Some(host) = url.host_str() {
                return host.trim_end_matches('.').to_string();
            }
        }
    }

    let without_scheme = trimmed.split_once("://").map_or(trimmed, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_port,
    };

    host.trim_end_matches('.').to_string()
}

/// Split a host into the subdomain that gets permuted and the registrable
/// domain that is re-attached to every candidate.
///
/// Hosts without a registrable domain (single labels, bare public suffixes)
/// are permuted whole with an empty suffix.
pub fn split_host(input: &str) -> HostRecord {
    let host = normalize_host(input);
    let lowered = host.to_ascii_lowercase();

    let (subdomain, suffix) = match psl::domain_str(&lowered) {
        Some(registrable) => {
            let split = host.len() - registrable.len();
            let subdomain = host[..split].trim_end_matches('.');
            (subdomain.to_string(), host[split..].to_string())
        }
        None => (host.clone(), String::new()),
    };

    HostRecord {
        host,
        subdomain,
        suffix,
    }
}
