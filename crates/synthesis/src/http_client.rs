use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client reused across submissions and operation polls
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            // Submission and polling are small JSON calls; the long wait
            // happens between polls, not inside one
            Client::builder()
                .timeout(Duration::from_secs(30))
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
