pub mod state;

use self::state::create_state;
use crate::domain::a025_receipt::api::fetch_receipts;
use crate::domain::a025_receipt::ui::details::ReceiptDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::toast::notify_error;
use contracts::domain::a025_receipt::aggregate::Receipt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::*;

const COLUMN_COUNT: usize = 8;

impl Searchable for Receipt {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.booking.id.as_str(),
            self.customer_name(),
            self.customer_email(),
            self.service_name(),
            self.service_personnel_name.as_str(),
            self.status(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ReceiptList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(load_config);
    let toaster = ToasterInjection::expect_context();
    let state = create_state(config.receipts.page_size);

    // A response that arrives after unmount must not touch disposed signals
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    // Загрузка при монтировании
    {
        let api_config = config.api.clone();
        state.update(|s| s.begin_loading());
        log::debug!("Loading receipts");
        spawn_local(async move {
            let result = fetch_receipts(&api_config).await;
            if !alive.load(Ordering::Relaxed) {
                log::debug!("Receipt list unmounted, dropping fetch result");
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("Loaded {} receipts", items.len());
                    state.update(|s| s.apply_loaded(items));
                }
                Err(e) => {
                    let message = e.to_string();
                    log::error!("Failed to load receipts: {}", message);
                    notify_error(&toaster, "Failed to load receipts", message.clone());
                    state.update(|s| s.apply_failed(message));
                }
            }
        });
    }

    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages()));

    // Modal rebuilds only when the selection changes
    let selected_id = Memo::new(move |_| {
        state.with(|s| s.show_details.then(|| s.selected_id.clone()).flatten())
    });

    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search(term)));
    let on_page_change = Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)));
    let on_prev_page = Callback::new(move |_: ()| state.update(|s| s.prev_page()));
    let on_next_page = Callback::new(move |_: ()| state.update(|s| s.next_page()));
    let on_close_details = Callback::new(move |_: ()| state.update(|s| s.close_details()));

    view! {
        <div style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold; display: inline-flex; align-items: center; gap: 8px;">
                    {icon("receipts")}
                    "Receipts"
                </h1>
                <SearchInput
                    value=search
                    on_change=on_search
                    debounce_ms=config.receipts.search_debounce_ms
                    placeholder="Search by receipt, booking, customer, service, staff or status..."
                />
            </Flex>

            <div style="margin-top: 16px;">
                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; align-items: center; gap: 8px;">
                        <span style="color: var(--color-error); font-size: 18px;">"⚠"</span>
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })}
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=140.0>"Receipt ID"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>"Service"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>"Service Personnel"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=110.0>"Amount"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Completed"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=90.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let (is_loading, is_loaded, term, rows, empty_message) = state.with(|s| (
                            s.is_loading,
                            s.is_loaded,
                            s.search.clone(),
                            s.current_page_items(),
                            s.empty_message(),
                        ));

                        if is_loading && !is_loaded {
                            return view! {
                                <TableRow>
                                    <td colspan=COLUMN_COUNT.to_string() style="padding: 24px; text-align: center; color: #666;">
                                        "Loading receipts..."
                                    </td>
                                </TableRow>
                            }.into_any();
                        }

                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <td colspan=COLUMN_COUNT.to_string() style="padding: 24px; text-align: center; color: #666;">
                                        {empty_message}
                                    </td>
                                </TableRow>
                            }.into_any();
                        }

                        rows.into_iter().map(|receipt| {
                            let id_for_view = receipt.id.clone();
                            let id_view = highlight_matches(&receipt.id, &term);
                            let customer_name_view = highlight_matches(receipt.customer_name(), &term);
                            let customer_email_view = highlight_matches(receipt.customer_email(), &term);
                            let service_view = highlight_matches(receipt.service_name(), &term);
                            let personnel_view = highlight_matches(&receipt.service_personnel_name, &term);
                            let completed_view = format_datetime(&receipt.completion_date);
                            let status_text = receipt.status().to_string();
                            let final_price = receipt.final_price;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style="font-family: monospace;">
                                                {id_view}
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <div style="display: flex; flex-direction: column;">
                                            <span>{customer_name_view}</span>
                                            <span style="font-size: 12px; color: #666;">
                                                {customer_email_view}
                                            </span>
                                        </div>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {service_view}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {personnel_view}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCellMoney value=final_price />
                                    <TableCell>
                                        <TableCellLayout>
                                            {completed_view}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <StatusBadge status=status_text />
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| {
                                                let id = id_for_view.clone();
                                                state.update(|s| s.open_details(&id));
                                            }
                                        >
                                            {icon("eye")}
                                            " View"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            <Show when=move || { total_pages.get() > 0 }>
                <div style="margin-top: 12px;">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <span style="color: #666; font-size: 14px;">
                            {move || state.with(|s| s.page_summary().label())}
                        </span>
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            on_page_change=on_page_change
                            on_prev=on_prev_page
                            on_next=on_next_page
                        />
                    </Flex>
                </div>
            </Show>

            <Show when=move || selected_id.get().is_some()>
                {move || selected_id.get()
                    .and_then(|_| state.with_untracked(|s| s.selected_receipt()))
                    .map(|receipt| view! {
                        <ReceiptDetails receipt=receipt on_close=on_close_details />
                    })}
            </Show>
        </div>
    }
}
