//! Browser-side behavior tests for the submission bridge.
//!
//! Run with `wasm-pack test --headless --chrome laptimes-web`.

#![cfg(target_arch = "wasm32")]

use laptimes_web::{serialize_form, RenderStrategy, SubmissionBridge};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlFormElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn build_form(inner_html: &str) -> HtmlFormElement {
    let form = document()
        .create_element("form")
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    form.set_inner_html(inner_html);
    document().body().unwrap().append_child(&form).unwrap();
    form
}

#[wasm_bindgen_test]
fn serializes_successful_controls_in_document_order() {
    let form = build_form(
        r#"
        <input name="season" value="2023">
        <input name="track" value="Monaco Grand Prix">
        <input name="driver" value="LEC">
        "#,
    );
    assert_eq!(
        serialize_form(&form),
        "season=2023&track=Monaco+Grand+Prix&driver=LEC"
    );
    form.remove();
}

#[wasm_bindgen_test]
fn skips_disabled_unchecked_unnamed_and_button_controls() {
    let form = build_form(
        r#"
        <input name="season" value="2022">
        <input name="ignored" value="x" disabled>
        <input value="anonymous">
        <input type="checkbox" name="wet" value="yes">
        <input type="checkbox" name="sprint" value="yes" checked>
        <input type="submit" name="go" value="Go">
        "#,
    );
    assert_eq!(serialize_form(&form), "season=2022&sprint=yes");
    form.remove();
}

#[wasm_bindgen_test]
fn preserves_repeated_names_in_document_order() {
    let form = build_form(
        r#"
        <input name="driver" value="VER">
        <input name="driver" value="HAM">
        "#,
    );
    assert_eq!(serialize_form(&form), "driver=VER&driver=HAM");
    form.remove();
}

#[wasm_bindgen_test]
fn serializes_selects_including_multiple() {
    let form = build_form(
        r#"
        <select name="track">
            <option value="Bahrain Grand Prix">Bahrain</option>
            <option value="Monaco Grand Prix" selected>Monaco</option>
        </select>
        <select name="driver" multiple>
            <option value="VER" selected>VER</option>
            <option value="LEC">LEC</option>
            <option value="HAM" selected>HAM</option>
        </select>
        "#,
    );
    assert_eq!(
        serialize_form(&form),
        "track=Monaco+Grand+Prix&driver=VER&driver=HAM"
    );
    form.remove();
}

#[wasm_bindgen_test]
fn submit_default_action_is_always_suppressed() {
    let form = build_form(r#"<input name="season" value="2021">"#);
    let bridge = SubmissionBridge::attach(form.clone(), RenderStrategy::Chart).unwrap();

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    bridge.detach();
    form.remove();
}

#[wasm_bindgen_test]
fn detached_bridge_no_longer_intercepts_submits() {
    let form = build_form(r#"<input name="season" value="2020">"#);
    let bridge = SubmissionBridge::attach(form.clone(), RenderStrategy::Chart).unwrap();
    bridge.detach();

    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    // No listener left: nothing suppresses the default action. The event is
    // synthetic, so no navigation actually happens under the test runner.
    form.dispatch_event(&event).unwrap();

    assert!(!event.default_prevented());
    form.remove();
}

#[wasm_bindgen_test]
fn image_render_swaps_the_output_source() {
    let image = document()
        .create_element("img")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap();
    image.set_id("lap-chart");
    document().body().unwrap().append_child(&image).unwrap();

    RenderStrategy::Image
        .render(r#"{"image": "aGVsbG8="}"#)
        .unwrap();

    assert_eq!(image.src(), "data:image/png;base64,aGVsbG8=");
    image.remove();
}

#[wasm_bindgen_test]
fn image_render_without_output_element_is_an_error() {
    assert!(RenderStrategy::Image
        .render(r#"{"image": "aGVsbG8="}"#)
        .is_err());
}
