//! Editable Cell Component
//!
//! One table cell, editor chosen by the column's field kind.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FocusEvent, HtmlElement, KeyboardEvent};

use super::editable_table::TableHandle;
use super::quantity_stepper::QuantityStepper;
use crate::collection::{
    CellState, CellView, FieldKind, MaskedBuffer, OptionSource, QuantityBound, Tone, MASK_PLACEHOLDER,
};
use crate::i18n::{t, Lang};

#[component]
pub fn EditableCell(
    cell: CellView,
    row_id: u32,
    handle: TableHandle,
    options: Option<Signal<Vec<String>>>,
) -> impl IntoView {
    let field = cell.column.field;
    if !cell.editable {
        let class = match cell.tone {
            Tone::Plain => "",
            Tone::Changed => "value-changed",
            Tone::Negative => "value-negative",
        };
        return view! { <td class=class>{cell.value}</td> }.into_any();
    }

    match cell.column.kind {
        FieldKind::Masked => view! { <MaskedCell row_id=row_id field=field handle=handle /> }.into_any(),
        FieldKind::Date => {
            let on_change = move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                handle.run(move |ctrl| async move {
                    ctrl.commit_field(row_id, field, &raw).await;
                });
            };
            view! {
                <td><input type="date" prop:value=cell.value on:change=on_change /></td>
            }
            .into_any()
        }
        FieldKind::Select(source) => {
            let current = cell.value;
            let on_change = move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                handle.run(move |ctrl| async move {
                    ctrl.commit_field(row_id, field, &raw).await;
                });
            };
            let choices = move || select_choices(&source, options.map(|o| o.get()).unwrap_or_default(), handle.lang);
            view! {
                <td>
                    <select on:change=on_change>
                        {move || {
                            choices()
                                .into_iter()
                                .map(|(value, label)| {
                                    let selected = value == current;
                                    view! { <option value=value selected=selected>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </td>
            }
            .into_any()
        }
        FieldKind::Quantity { .. } => {
            let bound = cell.bound.unwrap_or(QuantityBound::new(1, None));
            view! {
                <td class="qty-column">
                    <QuantityStepper value=cell.value bound=bound row_id=row_id field=field handle=handle />
                </td>
            }
            .into_any()
        }
        _ => view! { <TextCell value=cell.value row_id=row_id field=field handle=handle /> }.into_any(),
    }
}

/// `(value, label)` pairs of a select
fn select_choices(source: &OptionSource, external: Vec<String>, lang: Lang) -> Vec<(String, String)> {
    match source {
        OptionSource::Static(pairs) => pairs
            .iter()
            .map(|(value, label)| (value.to_string(), t(lang, label).to_string()))
            .collect(),
        OptionSource::External(none) => none
            .iter()
            .map(|(value, label)| (value.to_string(), t(lang, label).to_string()))
            .chain(external.into_iter().map(|v| (v.clone(), v)))
            .collect(),
    }
}

fn cell_element(target: Option<web_sys::EventTarget>) -> Option<HtmlElement> {
    target.and_then(|t| t.dyn_into::<HtmlElement>().ok())
}

/// Enter ends the edit instead of inserting a line break
fn blur_on_enter(ev: KeyboardEvent) {
    if ev.key() == "Enter" {
        ev.prevent_default();
        if let Some(el) = cell_element(ev.target()) {
            let _ = el.blur();
        }
    }
}

#[component]
fn TextCell(value: String, row_id: u32, field: &'static str, handle: TableHandle) -> impl IntoView {
    let state = StoredValue::new(CellState::Idle);

    let on_focus = move |_: FocusEvent| state.update_value(|s| *s = s.focus());
    let on_blur = move |ev: FocusEvent| {
        let (next, commit) = state.get_value().blur();
        state.set_value(next);
        if !commit {
            return;
        }
        let raw = cell_element(ev.target())
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        handle.run(move |ctrl| async move {
            ctrl.commit_field(row_id, field, &raw).await;
            state.update_value(|s| *s = s.settled());
        });
    };

    view! {
        <td contenteditable="true" on:focus=on_focus on:blur=on_blur on:keydown=blur_on_enter>
            {value}
        </td>
    }
}

/// Write-only cell: shows bullets, keeps the typed value in a buffer
#[component]
fn MaskedCell(row_id: u32, field: &'static str, handle: TableHandle) -> impl IntoView {
    let buffer = StoredValue::new(MaskedBuffer::default());

    let on_focus = move |ev: FocusEvent| {
        buffer.update_value(|b| b.begin());
        if let Some(el) = cell_element(ev.target()) {
            el.set_text_content(Some(""));
        }
    };
    let on_input = move |ev: web_sys::Event| {
        let Some(el) = cell_element(ev.target()) else {
            return;
        };
        let visible = el.text_content().unwrap_or_default();
        let mask = buffer.try_update_value(|b| b.apply_visible(&visible)).unwrap_or_default();
        el.set_text_content(Some(&mask));
        caret_to_end(&el);
    };
    let on_blur = move |ev: FocusEvent| {
        let secret = buffer.try_update_value(|b| b.take()).unwrap_or_default();
        if let Some(el) = cell_element(ev.target()) {
            el.set_text_content(Some(MASK_PLACEHOLDER));
        }
        if secret.is_empty() {
            return;
        }
        handle.run(move |ctrl| async move {
            ctrl.commit_masked(row_id, field, secret).await;
        });
    };

    view! {
        <td
            class="masked-cell"
            contenteditable="true"
            on:focus=on_focus
            on:input=on_input
            on:blur=on_blur
            on:keydown=blur_on_enter
        >
            {MASK_PLACEHOLDER}
        </td>
    }
}

/// Rewriting the text resets the caret to the start; put it back at the end
fn caret_to_end(el: &HtmlElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };
    let Ok(range) = doc.create_range() else {
        return;
    };
    if range.select_node_contents(el).is_err() {
        return;
    }
    range.collapse_with_to_start(false);
    if let Ok(Some(selection)) = window.get_selection() {
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_choices_lead_with_none() {
        let choices = select_choices(
            &OptionSource::External(Some(("-", "none_option"))),
            vec!["Admin".into()],
            Lang::De,
        );
        assert_eq!(
            choices,
            vec![("-".to_string(), "- kein -".to_string()), ("Admin".to_string(), "Admin".to_string())]
        );
    }

    #[test]
    fn test_static_choices_are_translated() {
        let choices = select_choices(&OptionSource::Static(&[("User", "role_user")]), Vec::new(), Lang::De);
        assert_eq!(choices, vec![("User".to_string(), "Benutzer".to_string())]);
    }
}
