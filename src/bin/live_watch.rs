//! CLI: watch the live cells of a diagram file.
//!
//! Loads a `.drawio` file into an in-memory host, starts live updates on the chosen page and
//! prints every committed batch to stdout as `<updates>` XML (or JSON with `--json`).
//!
//! Usage: `live_watch [OPTIONS] <file.drawio>`
//!
//! Settings come from `--config <file.json>` (optional), then flags, then env vars.
//! Example: live_watch --once --page 1 dashboards/status.drawio
//!
//! Set RUST_LOG=diagram_live=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use diagram_live::{
  DiagramHost, HttpFetcher, LiveConfig, LiveError, LiveScheduler, LiveStatus, MemoryHost,
  SchedulerState, TickOutcome, UpdateBatch, parse_file,
};
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Watch the live cells of a diagram file.
#[derive(Parser, Debug)]
#[command(name = "live_watch")]
#[command(
  after_help = r#"Environment variables (override the matching flags when set):
  LIVE_FETCH_TIMEOUT_SECS      Per-request timeout in seconds.
  LIVE_DEFAULT_REFRESH_SECS    Poll period when the page has no usable live.refresh.

Examples:
  live_watch status.drawio
  live_watch --once --json --page 1 status.drawio
  live_watch --config live.json status.drawio"#
)]
struct Args {
  /// Zero-based index of the page to display.
  #[arg(long, default_value_t = 0)]
  page: usize,

  /// Run a single tick, print it and exit.
  #[arg(long)]
  once: bool,

  /// Print batches as JSON instead of XML.
  #[arg(long)]
  json: bool,

  /// JSON config file; flags and env vars override its values.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Per-request timeout in seconds. Overridden by LIVE_FETCH_TIMEOUT_SECS if set.
  #[arg(long, value_name = "SECS")]
  fetch_timeout_secs: Option<u64>,

  /// Fallback poll period in seconds. Overridden by LIVE_DEFAULT_REFRESH_SECS if set.
  #[arg(long, value_name = "SECS")]
  default_refresh_secs: Option<u64>,

  /// Path to the diagram file
  #[arg(value_name = "file.drawio")]
  file: PathBuf,
}

/// Memory host that also prints each committed batch.
struct ConsoleHost {
  inner: MemoryHost,
  json: bool,
}

impl DiagramHost for ConsoleHost {
  fn current_page_id(&self) -> Option<String> {
    self.inner.current_page_id()
  }

  fn current_xml(&self) -> Result<String, LiveError> {
    self.inner.current_xml()
  }

  fn apply_updates(&self, batch: &UpdateBatch) {
    self.inner.apply_updates(batch);
    print_batch(batch, self.json);
  }

  fn set_status(&self, status: LiveStatus) {
    info!(status = ?status, color = status.color(), "status");
    self.inner.set_status(status);
  }
}

fn print_batch(batch: &UpdateBatch, json: bool) {
  if json {
    match serde_json::to_string(batch) {
      Ok(s) => println!("{s}"),
      Err(e) => warn!(error = %e, "could not encode batch"),
    }
  } else {
    println!("{}", batch.to_xml());
  }
}

/// Env var wins over the flag; unparsable env values are ignored.
fn secs_override(var: &str, flag: Option<u64>) -> Option<Duration> {
  env::var(var)
    .ok()
    .and_then(|v| v.trim().parse::<u64>().ok())
    .or(flag)
    .map(Duration::from_secs)
}

fn fail(msg: impl std::fmt::Display) -> ! {
  eprintln!("{msg}");
  process::exit(1);
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let mut config = match &args.config {
    Some(path) => {
      LiveConfig::load(path).unwrap_or_else(|e| fail(format!("Error loading config: {e}")))
    }
    None => LiveConfig::default(),
  };
  if let Some(d) = secs_override("LIVE_FETCH_TIMEOUT_SECS", args.fetch_timeout_secs) {
    config.fetch_timeout = d;
  }
  if let Some(d) = secs_override("LIVE_DEFAULT_REFRESH_SECS", args.default_refresh_secs) {
    config.default_refresh = d;
  }
  info!(
    file = %args.file.display(),
    page = args.page,
    once = args.once,
    fetch_timeout_secs = config.fetch_timeout.as_secs(),
    default_refresh_secs = config.default_refresh.as_secs(),
    "live_watch starting"
  );

  let xml = match tokio::fs::read_to_string(&args.file).await {
    Ok(s) => s,
    Err(e) => fail(format!("Error reading {}: {}", args.file.display(), e)),
  };
  let file = parse_file(&xml).unwrap_or_else(|e| fail(format!("Error parsing diagram: {e}")));
  let host = MemoryHost::with_page(file, args.page).unwrap_or_else(|e| fail(e));
  let fetcher = HttpFetcher::new(&config).unwrap_or_else(|e| fail(e));
  let scheduler = LiveScheduler::new(
    ConsoleHost {
      inner: host,
      json: args.json,
    },
    fetcher,
    config,
  );

  let outcome = scheduler.start().await;
  if let TickOutcome::Failed(e) = &outcome {
    fail(format!("Live updates failed: {e}"));
  }
  if args.once {
    scheduler.pause().await;
    let snap = scheduler.snapshot().await;
    info!(live_nodes = snap.live_node_ids.len(), "single tick done");
    return;
  }

  loop {
    tokio::select! {
      _ = tokio::signal::ctrl_c() => {
        scheduler.pause().await;
        info!("interrupted, live updates paused");
        break;
      }
      _ = tokio::time::sleep(Duration::from_secs(1)) => {
        if scheduler.snapshot().await.state == SchedulerState::Idle {
          info!("live session ended");
          break;
        }
      }
    }
  }
}
