use crate::cli::FetchArgs;
use crate::utils::{write_atomically, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::io::Write;

const ACCEPT_VALUE: &str = "text/html";
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 YaBrowser/23.11.0.0 Safari/537.36";

pub fn fetch(args: FetchArgs) -> Result<()> {
    let body = download(&args.url)?;
    if body.trim().is_empty() {
        log::warn!("{} returned an empty body", args.url);
    }
    write_atomically(&args.output_path, |writer| writer.write_all(body.as_bytes()))?;
    log::info!(
        "Saved {} bytes from {} to {}",
        body.len(),
        args.url,
        args.output_path.display()
    );
    Ok(())
}

fn download(url: &str) -> Result<String> {
    let client = Client::builder()
        .build()
        .map_err(|e| format!("Could not set up HTTP client: {}", e))?;
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .header(ACCEPT, ACCEPT_VALUE)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .map_err(|e| format!("Could not fetch URL '{}': {}", url, e))?;
    if !response.status().is_success() {
        return Err(format!(
            "Could not fetch URL '{}': HTTP {}",
            url,
            response.status()
        ));
    }
    response
        .text()
        .map_err(|e| format!("Could not read URL response '{}': {}", url, e))
}
