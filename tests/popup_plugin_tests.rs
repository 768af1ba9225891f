use timeline_plugins::api::{Timeline, TimelineConfig};
use timeline_plugins::core::{DataPoint, Padding, Rect, Viewport};
use timeline_plugins::extensions::{NearestPointPopupPlugin, PopupConfig, popup_left};
use timeline_plugins::render::NullRenderer;

// Canvas 400x200 at (10, 30); plot area is 320x140 starting at (60, 20).
fn popup_timeline() -> Timeline<NullRenderer> {
    let config = TimelineConfig::new(Viewport::new(400, 200), 0.0, 320.0)
        .with_value_domain(0.0, 140.0)
        .with_padding(Padding::new(60, 20, 20, 40))
        .with_canvas_origin(10.0, 30.0);
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");
    timeline.set_data(vec![DataPoint::new(300.0, 70.0), DataPoint::new(20.0, 70.0)]);
    timeline
        .register_plugin(Box::new(NearestPointPopupPlugin::new()))
        .expect("register popup");
    timeline
}

fn popup(timeline: &Timeline<NullRenderer>) -> &timeline_plugins::overlay::OverlayElement {
    let (_, element) = timeline
        .overlay()
        .elements()
        .next()
        .expect("popup element attached");
    element
}

#[test]
fn element_is_created_hidden_with_class() {
    let timeline = popup_timeline();
    assert_eq!(timeline.overlay().len(), 1);
    let element = popup(&timeline);
    assert_eq!(element.class_name, "timeline-hover-text");
    assert!(!element.visible);
}

#[test]
fn pointer_in_right_half_places_popup_at_plot_left() {
    let mut timeline = popup_timeline();
    timeline.pointer_move(370.0, 120.0);
    timeline.render().expect("render");

    let element = popup(&timeline);
    assert!(element.visible);
    assert_eq!(element.text, "Value: 70\nTime: 300");
    assert_eq!(element.left, 70.0);
    assert_eq!(element.top, 30.0);
}

#[test]
fn pointer_in_left_half_places_popup_at_canvas_right() {
    let mut timeline = popup_timeline();
    timeline.pointer_move(90.0, 120.0);
    timeline.render().expect("render");

    let element = popup(&timeline);
    assert_eq!(element.text, "Value: 70\nTime: 20");
    // 9 chars * 7px + 2 * 5px padding.
    assert_eq!(element.left, 410.0 - 73.0 - 1.0);
}

#[test]
fn popup_hides_outside_canvas_but_not_over_padding() {
    let mut timeline = popup_timeline();
    timeline.pointer_move(15.0, 35.0);
    timeline.render().expect("render");
    assert!(popup(&timeline).visible, "padding is still inside the canvas");

    timeline.pointer_move(5.0, 5.0);
    timeline.render().expect("render");
    assert!(!popup(&timeline).visible);

    timeline.pointer_move(370.0, 120.0);
    timeline.render().expect("render");
    timeline.pointer_leave();
    timeline.render().expect("render");
    assert!(!popup(&timeline).visible);
}

#[test]
fn empty_series_keeps_popup_hidden() {
    let mut timeline = popup_timeline();
    timeline.set_data(Vec::new());
    timeline.pointer_move(370.0, 120.0);
    timeline.render().expect("render");
    assert!(!popup(&timeline).visible);
}

#[test]
fn formatters_and_labels_shape_the_text() {
    let config = TimelineConfig::new(Viewport::new(400, 200), 0.0, 320.0)
        .with_value_domain(0.0, 140.0)
        .with_labels("Date", "Price");
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");
    timeline.set_data(vec![DataPoint::new(160.0, 70.0)]);
    timeline
        .register_plugin(Box::new(
            NearestPointPopupPlugin::new()
                .with_config(PopupConfig {
                    class_name: "tip".to_owned(),
                })
                .with_x_formatter(|x| format!("t+{x}"))
                .with_y_formatter(|y| format!("{y:.2}")),
        ))
        .expect("register popup");

    timeline.pointer_move(200.0, 100.0);
    timeline.render().expect("render");

    let element = popup(&timeline);
    assert_eq!(element.class_name, "tip");
    assert_eq!(element.text, "Price: 70.00\nDate: t+160");
}

#[test]
fn destroy_removes_the_element() {
    let mut timeline = popup_timeline();
    assert!(timeline.unregister_plugin(NearestPointPopupPlugin::DEFAULT_ID));
    assert!(timeline.overlay().is_empty());
}

#[test]
fn popup_left_uses_strict_half_width_comparison() {
    let canvas = Rect::new(0.0, 0.0, 400.0, 200.0);
    assert_eq!(popup_left(canvas, 160.0, 320.0, 60.0, 50.0), 349.0);
    assert_eq!(popup_left(canvas, 160.5, 320.0, 60.0, 50.0), 60.0);
}
