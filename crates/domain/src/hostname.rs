//! Hostname and address literal syntax rules.
//!
//! Hostnames follow classic DNS naming: dot-separated labels of
//! alphanumerics and hyphens, at most 63 bytes per label and 253 for
//! the full name, with an alphabetic TLD of at least two characters.

use std::net::Ipv4Addr;

pub const MAX_HOSTNAME_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Case-fold a hostname for storage and comparison.
pub fn normalize(hostname: &str) -> String {
    hostname.trim().to_ascii_lowercase()
}

pub fn validate_hostname(hostname: &str) -> Result<(), String> {
    if hostname.is_empty() {
        return Err("hostname cannot be empty".to_string());
    }

    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(format!(
            "hostname exceeds maximum length of {} characters",
            MAX_HOSTNAME_LENGTH
        ));
    }

    if hostname.contains("..") {
        return Err("hostname cannot contain consecutive dots".to_string());
    }

    if hostname.starts_with('.') || hostname.ends_with('.') {
        return Err("hostname cannot start or end with a dot".to_string());
    }

    if !hostname.contains('.') {
        return Err("hostname must include at least one dot separator (domain.tld)".to_string());
    }

    for label in hostname.split('.') {
        if label.len() > MAX_LABEL_LENGTH {
            return Err(format!(
                "label '{}' exceeds maximum length of {} characters",
                label, MAX_LABEL_LENGTH
            ));
        }

        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(format!(
                "label '{}' contains invalid characters (only alphanumeric and hyphen allowed)",
                label
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("label '{}' cannot start or end with a hyphen", label));
        }
    }

    // TLD must be at least two alphabetic characters
    let tld = hostname.rsplit('.').next().unwrap_or("");
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("hostname must end with a valid top-level domain".to_string());
    }

    Ok(())
}

pub fn validate_ipv4(ip: &str) -> Result<(), String> {
    if ip.is_empty() {
        return Err("IP address cannot be empty".to_string());
    }

    // Only IPv4 address literals are accepted for A records
    if ip.contains(':') {
        return Err("IPv6 addresses are not supported".to_string());
    }

    ip.parse::<Ipv4Addr>()
        .map(|_| ())
        .map_err(|_| "invalid IPv4 address format".to_string())
}
