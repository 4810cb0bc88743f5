//! Receipt details modal

use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use contracts::domain::a025_receipt::aggregate::Receipt;
use leptos::prelude::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn ReceiptDetails(receipt: Receipt, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Receipt {}", receipt.id);

    view! {
        <Modal title=title on_close=on_close>
            <div style="display: grid; grid-template-columns: 180px 1fr; gap: var(--space-md); align-items: start; font-size: var(--font-size-sm);">
                <div class="field-label">"Receipt ID:"</div>
                <div style="font-family: monospace;">{receipt.id.clone()}</div>

                <div class="field-label">"Booking ID:"</div>
                <div style="font-family: monospace;">{or_dash(&receipt.booking.id)}</div>

                <div class="field-label">"Customer:"</div>
                <div class="field-value">{or_dash(receipt.customer_name())}</div>

                <div class="field-label">"Email:"</div>
                <div class="field-value">{or_dash(receipt.customer_email())}</div>

                <div class="field-label">"Service:"</div>
                <div class="field-value">{or_dash(receipt.service_name())}</div>

                <div class="field-label">"Service Personnel:"</div>
                <div class="field-value">{or_dash(&receipt.service_personnel_name)}</div>

                <div class="field-label">"Status:"</div>
                <div>
                    <StatusBadge status=receipt.status().to_string() />
                </div>

                <div class="field-label">"Final Price:"</div>
                <div style="font-size: var(--font-size-base); font-weight: var(--font-weight-semibold);">
                    {format_currency(receipt.final_price)}
                </div>

                <div class="field-label">"Completed:"</div>
                <div class="field-value">{format_datetime(&receipt.completion_date)}</div>
            </div>
        </Modal>
    }
}
