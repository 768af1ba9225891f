//! Drives a chart headlessly: hover, render, then double click to copy.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_hover --features telemetry`.

use timeline_plugins::api::{Timeline, TimelineConfig};
use timeline_plugins::clipboard::MemoryClipboard;
use timeline_plugins::core::{DataPoint, Viewport};
use timeline_plugins::extensions::{
    DoubleClickCopyPlugin, HighlightNearestPointPlugin, NearestPointPopupPlugin,
    unix_seconds_formatter,
};
use timeline_plugins::render::NullRenderer;
use timeline_plugins::{TimelineResult, telemetry};

fn main() -> TimelineResult<()> {
    let _ = telemetry::init_default_tracing();

    let start = 1_700_000_000.0;
    let config = TimelineConfig::new(Viewport::new(800, 400), start, start + 3_600.0)
        .with_value_domain(0.0, 100.0)
        .with_labels("Time", "Load");
    let clipboard = MemoryClipboard::default();
    let mut timeline =
        Timeline::new(NullRenderer::default(), config)?.with_clipboard(clipboard.clone());

    timeline.set_data(
        (0..=60)
            .map(|minute| {
                let t = start + f64::from(minute) * 60.0;
                DataPoint::new(t, 50.0 + 30.0 * (f64::from(minute) / 6.0).sin())
            })
            .collect(),
    );

    timeline.register_plugin(Box::new(HighlightNearestPointPlugin::new()))?;
    timeline.register_plugin(Box::new(
        NearestPointPopupPlugin::new().with_x_formatter(unix_seconds_formatter("%H:%M")),
    ))?;
    timeline.register_plugin(Box::new(DoubleClickCopyPlugin::new()))?;

    timeline.pointer_move(420.0, 180.0);
    timeline.render()?;
    for (_, element) in timeline.overlay().elements() {
        println!(
            "popup visible={} at ({}, {}):\n{}",
            element.visible, element.left, element.top, element.text
        );
    }

    timeline.double_click(420.0, 180.0);
    println!("clipboard: {:?}", clipboard.contents());
    println!(
        "frames rendered: {}, circles in last frame: {}",
        timeline.renderer().frames_rendered,
        timeline.renderer().last_circle_count
    );

    timeline.detach_all();
    Ok(())
}
