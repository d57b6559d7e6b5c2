// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless playback session: a decoder thread fills frame buffers on
//! request while the playhead advances, old frames are evicted behind it,
//! and a pinch-and-drag gesture runs against the viewport midway through.
//!
//! Run with `RUST_LOG=debug` to see buffer mutations and view corrections,
//! or `RUST_LOG=trace` for every insert and eviction.

use std::error::Error;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use kurbo::{Size, Vec2};
use loupe_frames::{FrameBuffers, FrameEvent, FrameRange};
use loupe_state::StateValue;
use loupe_view2d::{GestureState, Viewport};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Simulate scrubbing and zooming through a decoded video")]
struct Args {
    /// Total number of frames in the video.
    #[arg(long, default_value_t = 300)]
    frames: u64,
    /// Frames requested from the decoder at once.
    #[arg(long, default_value_t = 30)]
    batch: u64,
    /// Frames kept buffered behind the playhead before eviction.
    #[arg(long, default_value_t = 45)]
    keep_behind: u64,
    /// Window size, as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1280x720", value_parser = parse_size)]
    window: Size,
    /// Video frame size, as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    content: Size,
    /// Simulated decode time per batch, in milliseconds.
    #[arg(long, default_value_t = 2)]
    decode_ms: u64,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    if !(w > 0.0 && h > 0.0) {
        return Err(format!("size must be positive, got {s:?}"));
    }
    Ok(Size::new(w, h))
}

/// Stand-in for a decode worker: answers each requested range with a
/// `Decoded` event after a delay.
fn spawn_decoder(
    requests: mpsc::Receiver<FrameRange>,
    events: mpsc::Sender<FrameEvent>,
    decode_time: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for range in requests {
            thread::sleep(decode_time);
            if events.send(FrameEvent::Decoded(range)).is_err() {
                break;
            }
        }
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    if args.frames == 0 || args.batch == 0 {
        return Err("--frames and --batch must be at least 1".into());
    }
    let last_frame = args.frames - 1;

    let (request_tx, request_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    let decoder = spawn_decoder(
        request_rx,
        event_tx,
        Duration::from_millis(args.decode_ms),
    );

    let mut buffers = FrameBuffers::new();
    let mut viewport = Viewport::new(args.window, args.content);
    let mut gesture = GestureState::default();
    let mut options = StateValue::map([
        ("frameNumber", StateValue::from(0)),
        ("playing", true.into()),
    ]);
    let mut stalls = 0_u32;

    for playhead in 0..=last_frame {
        // On a stall, request the gaps of one batch starting at the playhead.
        let ahead = FrameRange::new(
            playhead,
            playhead.saturating_add(args.batch - 1).min(last_frame),
        );
        if !buffers.contains(playhead) {
            stalls += 1;
            for gap in buffers.missing(ahead) {
                debug!(%gap, "requesting frames");
                request_tx.send(gap)?;
            }
        }
        while !buffers.contains(playhead) {
            let event = event_rx.recv()?;
            buffers.apply(event);
        }
        // Late arrivals that do not block this frame.
        while let Ok(event) = event_rx.try_recv() {
            buffers.apply(event);
        }

        if let Some(stale) = playhead.checked_sub(args.keep_behind) {
            buffers.apply(FrameEvent::Evicted(stale));
        }

        options.merge_from(StateValue::map([(
            "frameNumber",
            StateValue::Number(playhead as f64),
        )]));

        if playhead == last_frame / 2 {
            run_gesture(&mut viewport, &mut gesture);
        }

        if playhead % 50 == 0 {
            info!(
                playhead,
                ranges = buffers.len(),
                buffered = buffers.frame_count(),
                revision = buffers.revision(),
                "playback progress"
            );
        }
    }

    drop(request_tx);
    if decoder.join().is_err() {
        warn!("decoder thread panicked");
    }

    options.merge_from(StateValue::map([("playing", false.into())]));
    info!(
        stalls,
        buffered = %buffers.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
        frame = ?options.get("frameNumber").and_then(StateValue::as_f64),
        "session finished"
    );
    Ok(())
}

fn run_gesture(viewport: &mut Viewport, gesture: &mut GestureState) {
    let center = viewport.window_size().to_rect().center();
    gesture.begin_zoom(center);
    for _ in 0..10 {
        gesture.update_zoom(viewport, 1.25);
    }
    gesture.begin_pan(center);
    // Drag far past the content edge; the viewport holds it at the margin.
    for step in 1..=20 {
        let pos = center + Vec2::new(f64::from(step) * 200.0, f64::from(step) * 50.0);
        gesture.update_pan(viewport, pos);
    }
    gesture.end();

    let info = viewport.debug_info();
    info!(
        scale = info.state.scale,
        pan_x = info.state.pan.x,
        pan_y = info.state.pan.y,
        visible = ?info.visible_content_rect,
        "gesture settled"
    );
}
