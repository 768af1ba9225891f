use timeline_plugins::api::{Timeline, TimelineConfig};
use timeline_plugins::core::{DataPoint, Padding, Viewport};
use timeline_plugins::extensions::{HighlightNearestPointPlugin, HighlightStyle};
use timeline_plugins::render::{CirclePrimitive, Color, DrawCommand, LinePrimitive, NullRenderer};

fn timeline_with_highlight(style: HighlightStyle) -> Timeline<NullRenderer> {
    let config = TimelineConfig::new(Viewport::new(200, 100), 0.0, 200.0)
        .with_value_domain(0.0, 100.0)
        .with_padding(Padding::uniform(0));
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");
    timeline.set_data(vec![DataPoint::new(50.0, 50.0), DataPoint::new(150.0, 20.0)]);
    timeline
        .register_plugin(Box::new(HighlightNearestPointPlugin::new().with_style(style)))
        .expect("register highlight");
    timeline
}

#[test]
fn ring_and_crosshair_are_drawn_on_nearest_point() {
    let style = HighlightStyle::default();
    let mut timeline = timeline_with_highlight(style);
    timeline.pointer_move(52.0, 49.0);

    let frame = timeline.build_render_frame();
    let (r, width, color) = (10.0, 1.2, Color::BLACK);
    assert_eq!(
        frame.commands[1..],
        [
            DrawCommand::Circle(CirclePrimitive::new(50.0, 50.0, r, width, color)),
            DrawCommand::Line(LinePrimitive::new(50.0, 40.0, 50.0, 60.0, width, color)),
            DrawCommand::Line(LinePrimitive::new(40.0, 50.0, 60.0, 50.0, width, color)),
        ]
    );
}

#[test]
fn nothing_is_drawn_without_cursor_over_chart() {
    let mut timeline = timeline_with_highlight(HighlightStyle::default());

    let frame = timeline.build_render_frame();
    assert_eq!(frame.commands.len(), 1, "only the host series stroke");

    timeline.pointer_move(150.0, 80.0);
    assert_eq!(timeline.build_render_frame().circles().count(), 1);

    timeline.pointer_leave();
    assert_eq!(timeline.build_render_frame().circles().count(), 0);

    timeline.pointer_move(250.0, 50.0);
    assert_eq!(timeline.build_render_frame().circles().count(), 0);
}

#[test]
fn empty_series_draws_nothing() {
    let mut timeline = timeline_with_highlight(HighlightStyle::default());
    timeline.set_data(Vec::new());
    timeline.pointer_move(50.0, 50.0);

    assert!(timeline.build_render_frame().is_empty());
}

#[test]
fn custom_style_controls_ring_size() {
    let style = HighlightStyle {
        radius_px: 4.0,
        line_width_px: 2.0,
        color: Color::rgb(1.0, 0.0, 0.0),
    };
    let mut timeline = timeline_with_highlight(style);
    timeline.pointer_move(149.0, 81.0);
    timeline.render().expect("render");

    let frame = timeline.build_render_frame();
    let circle = frame.circles().next().expect("highlight ring");
    assert_eq!((circle.center_x, circle.center_y, circle.radius), (150.0, 80.0, 4.0));
    assert_eq!(timeline.renderer().last_circle_count, 1);
    assert_eq!(timeline.renderer().last_line_count, 3);
}
