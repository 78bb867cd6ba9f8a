//! Downloading chart payloads.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::prompter::Prompter;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// Song archives routinely exceed ureq's default body limit.
const MAX_PAYLOAD_BYTES: u64 = 512 * 1024 * 1024;

/// Downloaded content plus the content type the server declared for it.
pub struct Payload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fetch the content behind a song URL.
///
/// A HEAD request decides what we are looking at first. HTML means the
/// URL is a song page rather than a file; the operator is offered a
/// browser (default yes) and nothing is downloaded. Anything else is
/// fetched whole and returned with its declared content type.
pub fn fetch_payload(url: &str, prompter: &dyn Prompter) -> Result<Option<Payload>> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(HTTP_TIMEOUT))
        .build();
    let agent: ureq::Agent = config.into();

    let head = agent.head(url).call()?;
    let content_type = head
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html")
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    debug!("{} Content-Type: {}", url, content_type);

    if content_type == "text/html" {
        if prompter.confirm("Song URL is for a website. Open in browser?", true) {
            open::that(url)?;
        }
        return Ok(None);
    }

    let mut response = agent.get(url).call()?;
    let bytes = response
        .body_mut()
        .with_config()
        .limit(MAX_PAYLOAD_BYTES)
        .read_to_vec()?;
    debug!("downloaded {} bytes from {}", bytes.len(), url);

    Ok(Some(Payload {
        content_type,
        bytes,
    }))
}
