use std::{ffi::OsString, future::Future};

use tracing::{error, info, warn};

use crate::{config::Config, engines::google_scholar, output::Output};

/// The query words from the command line. Arguments that aren't valid
/// Unicode are converted lossily instead of aborting.
pub fn query_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

/// Drives `fut` to completion, turning a panic inside it into an error
/// payload so the process still prints one line and exits normally.
pub async fn run_guarded<F>(fut: F) -> Output
where
    F: Future<Output = Output> + 'static,
{
    let local = tokio::task::LocalSet::new();
    match local.run_until(tokio::task::spawn_local(fut)).await {
        Ok(output) => output,
        Err(e) => {
            error!("search task failed: {e}");
            Output::error(e.to_string())
        }
    }
}

/// Turns the command line arguments (program name already removed) into the
/// payload to print. Never fails; every problem ends up in `Output::error`.
pub async fn run(args: &[String], config: &Config) -> Output {
    if args.is_empty() {
        return Output::error("Missing query");
    }

    let query = args.join(" ");
    let query = query.trim();
    if query.is_empty() {
        return Output::error("Empty query");
    }

    match google_scholar::search(query, config).await {
        Ok(results) => {
            info!(count = results.len(), "search finished");
            Output::results(results)
        }
        Err(e) => {
            warn!("search failed: {e:#}");
            Output::error(format!("{e:#}"))
        }
    }
}
