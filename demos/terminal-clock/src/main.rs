//! Terminal clock demo
//!
//! Drives a clock face from a minute-aligned ticker and renders the four
//! digit glyphs as ASCII art. The ticker plays the host role: it fires a
//! tick event just after every minute boundary. Set `CLOCK_TZ` to any
//! zone id ("Asia/Tokyo", "UTC+9") to display another zone.

mod glyphs;

use std::sync::Arc;
use std::time::Duration;

use glyphclock_core::{ClockEvent, DigitImageId};
use glyphclock_face::{
    render_face, ClockFace, DigitRenderer, SlotLayout, TickBroadcaster, SLOT_STRIDE,
};
use glyphclock_time::{SystemWallClock, WallClock, ZoneId};
use tokio::sync::mpsc;

const MINUTE_MILLIS: i64 = 60_000;

/// Renders the quad into text rows; slot offsets decide column placement.
struct TerminalRenderer {
    rows: [String; glyphs::GLYPH_ROWS],
}

impl TerminalRenderer {
    fn new() -> Self {
        TerminalRenderer {
            rows: std::array::from_fn(|_| String::new()),
        }
    }

    fn print(self) {
        for row in self.rows {
            println!("  {row}");
        }
        println!();
    }
}

impl DigitRenderer for TerminalRenderer {
    fn draw_digit(&mut self, image: DigitImageId, offset: (i32, i32)) {
        // The minute-tens slot opens the minute pair; draw the colon first.
        if offset.0 == 2 * SLOT_STRIDE {
            for (row_idx, row) in self.rows.iter_mut().enumerate() {
                row.push_str(if row_idx == 1 || row_idx == 3 { " o " } else { "   " });
            }
        }
        for (row, art) in self.rows.iter_mut().zip(glyphs::glyph_for(image)) {
            row.push_str(art);
            row.push(' ');
        }
    }
}

fn redraw(face: &ClockFace) {
    let (hour, minute) = face.local_hour_minute();
    tracing::debug!(hour, minute, frame = face.frame(), "redraw");

    let mut renderer = TerminalRenderer::new();
    render_face(face, &SlotLayout::default(), &mut renderer);
    renderer.print();
}

fn millis_to_next_minute(now_millis: i64) -> u64 {
    (MINUTE_MILLIS - now_millis.rem_euclid(MINUTE_MILLIS)) as u64
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let zone_id = std::env::var("CLOCK_TZ").unwrap_or_else(|_| "UTC".to_string());
    let zone = ZoneId::resolve(&zone_id);
    println!("terminal-clock, zone {zone}\n");

    let clock: Arc<dyn WallClock> = Arc::new(SystemWallClock);
    let host = TickBroadcaster::new();
    let mut face = ClockFace::new(glyphs::atlas(), Arc::clone(&clock), zone);

    // The hook runs inside event delivery, so it only signals; drawing
    // happens on this task once the event is fully handled.
    let (redraw_tx, mut redraw_rx) = mpsc::unbounded_channel();
    face.on_redraw(move || {
        let _ = redraw_tx.send(());
    });
    face.attach(&host)?;

    let ticker_host = host.clone();
    let ticker_clock = Arc::clone(&clock);
    tokio::spawn(async move {
        loop {
            let wait = millis_to_next_minute(ticker_clock.now_millis());
            tokio::time::sleep(Duration::from_millis(wait)).await;
            ticker_host.emit(&ClockEvent::TimeTick);
        }
    });

    redraw(&face);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            received = redraw_rx.recv() => {
                if received.is_none() {
                    break;
                }
                redraw(&face);
            }
        }
    }

    face.detach();
    Ok(())
}
