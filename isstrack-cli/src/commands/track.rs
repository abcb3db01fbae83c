//! Track command - poll the ISS position and print the ground track.
//!
//! Runs one tracking session until Ctrl+C, `--count` fixes, or the first
//! failure. A failed session is not retried; the command exits with an error
//! and the user runs it again to start a new session.

use std::sync::Arc;

use chrono::Local;
use isstrack::geo::great_circle_distance_km;
use isstrack::tracking::{ChannelConsumer, Position, TrackingEngine, TrackingEvent};
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the track command.
pub struct TrackArgs {
    pub interval: Option<f64>,
    pub url: Option<String>,
    pub timeout: Option<u64>,
    pub count: Option<u64>,
    pub verbose: bool,
}

/// Run the track command.
pub async fn run(args: TrackArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("track");

    let interval = args
        .interval
        .unwrap_or_else(|| runner.config().interval_secs());
    let source_config = runner.source_config(args.url, args.timeout);
    let url = source_config.url.clone();
    let client = runner.create_client(source_config)?;

    let (consumer, mut events) = ChannelConsumer::new();
    let engine = TrackingEngine::new(client, Arc::new(consumer));
    engine.start(interval).map_err(CliError::Start)?;

    // Print banner
    println!("isstrack v{}", isstrack::VERSION);
    println!("============");
    println!();
    println!("Source:   {}", url);
    println!("Interval: {}s", interval);
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut track = GroundTrack::default();

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("Interrupted, stopping tracking");
                engine.stop();
                println!();
                break;
            }
            event = events.recv() => match event {
                Some(TrackingEvent::Observation { position, is_first, .. }) => {
                    let step_km = track.push(position);
                    print!("{}", format_observation(&position, is_first, step_km, &track));

                    if args.count.is_some_and(|count| track.fixes >= count) {
                        engine.stop();
                        break;
                    }
                }
                Some(TrackingEvent::Error(reason)) => {
                    print_summary(&track);
                    return Err(CliError::Halted(reason));
                }
                None => break,
            },
        }
    }

    print_summary(&track);
    Ok(())
}

/// Running totals for the printed ground track.
///
/// Kept incrementally so each fix costs the same regardless of session length.
#[derive(Debug, Default)]
struct GroundTrack {
    fixes: u64,
    total_km: f64,
    last: Option<Position>,
}

impl GroundTrack {
    /// Add a fix and return the distance from the previous one.
    fn push(&mut self, position: Position) -> Option<f64> {
        let step_km = self
            .last
            .map(|previous| great_circle_distance_km(&previous, &position));

        self.total_km += step_km.unwrap_or(0.0);
        self.fixes += 1;
        self.last = Some(position);
        step_km
    }
}

/// Render one observation as printed lines.
///
/// The first fix gets a header line so the start of the track is visible.
fn format_observation(
    position: &Position,
    is_first: bool,
    step_km: Option<f64>,
    track: &GroundTrack,
) -> String {
    let mut out = String::new();

    if is_first {
        out.push_str("First fix acquired\n");
    }

    let observed = position
        .observed_at()
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| format!("@{}", position.observed_at_unix_seconds()));

    out.push_str(&format!("[{}] ISS: {}", observed, position));

    if let Some(step_km) = step_km {
        out.push_str(&format!(
            "  (+{:.1} km, {} fixes, {:.1} km total)",
            step_km, track.fixes, track.total_km
        ));
    }

    out.push('\n');
    out
}

fn print_summary(track: &GroundTrack) {
    let Some(last) = track.last else {
        println!("No positions recorded.");
        return;
    };

    println!(
        "Recorded {} position(s), {:.1} km of ground track.",
        track.fixes, track.total_km
    );
    println!("Last position: {}", last);
}
