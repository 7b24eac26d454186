use anyhow::{bail, Result};
use argh::FromArgs;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{PreviewSession, SessionOutcome};
use crate::geometry::{Offset, Size};
use crate::preview::input::GestureEvent;

mod app;
mod geometry;
mod loader;
mod preview;

/// Preview an image and drive its pan/zoom gestures from stdin.
/// Commands: tap | drag <dx> [dy] | end <dx> [dy] | close | quit
#[derive(FromArgs)]
struct Args {
    /// image file to preview
    #[argh(positional)]
    image: PathBuf,

    /// viewport size as WIDTHxHEIGHT
    #[argh(option, default = "String::from(\"390x844\")")]
    viewport: String,
}

fn parse_viewport(arg: &str) -> Result<Size> {
    let Some((width, height)) = arg.split_once('x') else {
        bail!("viewport must look like 390x844, got {arg}");
    };

    let size = Size::new(width.trim().parse()?, height.trim().parse()?);
    if size.is_degenerate() {
        bail!("viewport must have positive dimensions, got {arg}");
    }

    Ok(size)
}

fn parse_command(line: &str) -> Option<GestureEvent> {
    let mut parts = line.split_whitespace();

    let event = match parts.next()? {
        "tap" => GestureEvent::DoubleTap,
        "close" => GestureEvent::CloseRequested,
        verb @ ("drag" | "end") => {
            let x: f32 = parts.next()?.parse().ok()?;
            let y: f32 = match parts.next() {
                Some(raw) => raw.parse().ok()?,
                None => 0.0,
            };
            let translation = Offset::new(x, y);

            if verb == "drag" {
                GestureEvent::DragChange(translation)
            } else {
                GestureEvent::DragEnd(translation)
            }
        }
        _ => return None,
    };

    Some(event)
}

fn print_state(outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::Render(state) => println!(
            "offset=({:.1}, {:.1}) scale={:.2} zoomed={}",
            state.offset.x, state.offset.y, state.scale, state.is_zoomed
        ),
        SessionOutcome::Dismissed => println!("dismissed"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Args = argh::from_env();
    let viewport = parse_viewport(&args.viewport)?;

    let mut session = PreviewSession::new(viewport);
    session.connect_dismiss(|| info!("preview dismissed"));

    match loader::load_dimensions(&args.image).await {
        Ok(size) => session.image_ready(size),
        Err(err) => {
            warn!("image failed to load: {err:#}");
            session.image_failed();
        }
    }

    if !session.load_state().is_ready() {
        eprintln!("showing error state; panning stays disabled");
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        let Some(event) = parse_command(trimmed) else {
            eprintln!("commands: tap | drag <dx> [dy] | end <dx> [dy] | close | quit");
            continue;
        };

        let outcome = session.handle_event(event);
        print_state(outcome);

        if session.is_dismissed() {
            break;
        }
    }

    Ok(())
}
