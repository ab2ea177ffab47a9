//! Successful-control form serialization.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Input types that never contribute a submission pair.
const EXCLUDED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

/// Captures the form's current values as a single
/// `application/x-www-form-urlencoded` payload.
///
/// Follows standard successful-control rules: document order, disabled
/// controls excluded, checkbox/radio only when checked, repeated names all
/// preserved.
pub fn serialize_form(form: &HtmlFormElement) -> String {
    encode_pairs(&collect_pairs(form))
}

fn collect_pairs(form: &HtmlFormElement) -> Vec<(String, String)> {
    let elements = form.elements();
    let mut pairs = Vec::new();

    for index in 0..elements.length() {
        if let Some(control) = elements.item(index) {
            append_control(&control, &mut pairs);
        }
    }

    pairs
}

fn append_control(control: &Element, pairs: &mut Vec<(String, String)>) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        if input.disabled() || input.name().is_empty() {
            return;
        }
        let kind = input.type_();
        if EXCLUDED_INPUT_TYPES.contains(&kind.as_str()) {
            return;
        }
        if (kind == "checkbox" || kind == "radio") && !input.checked() {
            return;
        }
        pairs.push((input.name(), input.value()));
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        if select.disabled() || select.name().is_empty() {
            return;
        }
        if select.multiple() {
            // One pair per selected option, in option order.
            let options = select.options();
            for index in 0..options.length() {
                let option = match options.item(index) {
                    Some(option) => match option.dyn_into::<HtmlOptionElement>() {
                        Ok(option) => option,
                        Err(_) => continue,
                    },
                    None => continue,
                };
                if option.selected() && !option.disabled() {
                    pairs.push((select.name(), option.value()));
                }
            }
        } else if select.selected_index() >= 0 {
            pairs.push((select.name(), select.value()));
        }
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        if !area.disabled() && !area.name().is_empty() {
            pairs.push((area.name(), area.value()));
        }
    }
    // Buttons, fieldsets and output elements never submit a value.
}

/// Percent-encodes the pairs, preserving insertion order.
pub(crate) fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        encoded.append_pair(name, value);
    }
    encoded.finish()
}
