use timeline_plugins::TimelineError;
use timeline_plugins::api::{Timeline, TimelineConfig};
use timeline_plugins::core::{Padding, Viewport};
use timeline_plugins::locator::{DistanceMetric, LocatorOptions};
use timeline_plugins::overlay::TextMetrics;
use timeline_plugins::render::NullRenderer;

#[test]
fn config_json_round_trip_preserves_every_field() {
    let config = TimelineConfig::new(Viewport::new(640, 360), 1_700_000_000.0, 1_700_086_400.0)
        .with_value_domain(-5.0, 5.0)
        .with_padding(Padding::new(40, 10, 10, 30))
        .with_canvas_origin(12.0, 48.0)
        .with_labels("Date", "Temperature")
        .with_locator(
            LocatorOptions::default()
                .with_metric(DistanceMetric::Horizontal)
                .with_max_distance_px(24.0),
        )
        .with_text_metrics(TextMetrics {
            char_width_px: 8.0,
            ..TextMetrics::default()
        });

    let json = config.to_json_pretty().expect("serialize");
    let restored = TimelineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn minimal_json_uses_defaults() {
    let json = r#"{
        "viewport": { "width": 800, "height": 400 },
        "time_start": 0.0,
        "time_end": 10.0
    }"#;
    let config = TimelineConfig::from_json_str(json).expect("parse");
    assert_eq!(config, TimelineConfig::new(Viewport::new(800, 400), 0.0, 10.0));
    assert_eq!(config.x_label, "Time");
    assert_eq!(config.y_label, "Value");
    assert_eq!(config.locator.metric, DistanceMetric::Euclidean);
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = TimelineConfig::from_json_str("{ \"viewport\": 3 }").expect_err("must fail");
    assert!(matches!(err, TimelineError::InvalidData(_)));
}

#[test]
fn invalid_configs_are_rejected_at_attach() {
    let zero_viewport = TimelineConfig::new(Viewport::new(0, 100), 0.0, 1.0);
    assert!(matches!(
        Timeline::new(NullRenderer::default(), zero_viewport),
        Err(TimelineError::InvalidViewport { width: 0, .. })
    ));

    let empty_domain = TimelineConfig::new(Viewport::new(100, 100), 5.0, 5.0);
    assert!(Timeline::new(NullRenderer::default(), empty_domain).is_err());

    let oversized_padding = TimelineConfig::new(Viewport::new(100, 100), 0.0, 1.0)
        .with_padding(Padding::new(60, 40, 0, 0));
    assert!(Timeline::new(NullRenderer::default(), oversized_padding).is_err());
}

#[test]
fn layout_updates_keep_previous_state_on_error() {
    let config = TimelineConfig::new(Viewport::new(400, 200), 0.0, 1.0);
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");

    assert!(timeline.resize(Viewport::new(10, 10)).is_err());
    assert_eq!(timeline.chart().layout().viewport, Viewport::new(400, 200));

    timeline.resize(Viewport::new(500, 300)).expect("resize");
    timeline.set_canvas_origin(5.0, 6.0).expect("move canvas");
    let canvas = timeline.chart().canvas_rect();
    assert_eq!((canvas.x, canvas.y, canvas.width, canvas.height), (5.0, 6.0, 500.0, 300.0));

    assert!(timeline.set_domains((1.0, 1.0), (0.0, 1.0)).is_err());
    assert_eq!(timeline.chart().x_scale().domain(), (0.0, 1.0));
}

#[test]
fn overflowing_padding_is_rejected_instead_of_wrapping() {
    let json = r#"{
        "viewport": { "width": 800, "height": 400 },
        "padding": { "left": 4294967295, "right": 1, "top": 0, "bottom": 0 },
        "time_start": 0.0,
        "time_end": 10.0
    }"#;
    let config = TimelineConfig::from_json_str(json).expect("parse");
    assert!(matches!(
        Timeline::new(NullRenderer::default(), config),
        Err(TimelineError::InvalidData(_))
    ));

    let tall = TimelineConfig::new(Viewport::new(800, 400), 0.0, 10.0)
        .with_padding(Padding::new(0, 0, u32::MAX, u32::MAX));
    assert!(matches!(
        Timeline::new(NullRenderer::default(), tall),
        Err(TimelineError::InvalidData(_))
    ));
}
