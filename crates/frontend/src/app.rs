use crate::domain::a025_receipt::ui::list::ReceiptList;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <ReceiptList />
            </ToasterProvider>
        </ConfigProvider>
    }
}
