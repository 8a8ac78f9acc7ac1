use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::extractor::extract_media_url;
use crate::fetcher::fetch_page;
use crate::request::Request;
use crate::transcoder::Transcoder;

/// Runs one submission end to end: fetch the page, pull out the media
/// URL, hand it to the transcoder. Blocks the calling thread until the
/// file is written or a step fails.
pub fn run(request: &Request) -> Result<PathBuf> {
    run_with(request, &Transcoder::locate()?)
}

fn run_with(request: &Request, transcoder: &Transcoder) -> Result<PathBuf> {
    // The fetcher is async like the rest of our reqwest code; a
    // current-thread runtime is enough since this worker owns the call.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    log::info!("fetching page {}", request.page_url);
    let body = runtime.block_on(fetch_page(&request.page_url))?;

    let media_url = extract_media_url(&body)?;
    log::info!("media url {}", media_url);

    let output = request.output_path();
    transcoder.save(&media_url, &output)?;

    Ok(output)
}

/// Dispatches `run` on a worker thread. The returned channel delivers
/// the single terminal result; the send is ignored if the UI went away.
pub fn spawn(request: Request) -> mpsc::Receiver<Result<PathBuf>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(run(&request));
    });

    rx
}
