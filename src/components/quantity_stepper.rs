//! Quantity Stepper Component
//!
//! `-` / number input / `+` on a bounded range.

use leptos::prelude::*;

use super::editable_table::TableHandle;
use crate::collection::QuantityBound;

#[component]
pub fn QuantityStepper(
    value: String,
    bound: QuantityBound,
    row_id: u32,
    field: &'static str,
    handle: TableHandle,
) -> impl IntoView {
    let step = move |delta: i64| {
        handle.run(move |ctrl| async move {
            ctrl.step_quantity(row_id, field, delta).await;
        });
    };
    let on_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        handle.run(move |ctrl| async move {
            ctrl.set_quantity(row_id, field, &raw).await;
        });
    };

    view! {
        <div class="qty-control">
            <button class="qty-btn qty-minus" on:click=move |_| step(-1)>"-"</button>
            <input
                type="number"
                class="qty-input"
                min=bound.min.to_string()
                max=bound.max.map(|m| m.to_string())
                prop:value=value
                on:change=on_change
            />
            <button class="qty-btn qty-plus" on:click=move |_| step(1)>"+"</button>
        </div>
    }
}
