//! Компонент ячейки таблицы для денежных значений
//!
//! ```rust,ignore
//! <TableCellMoney value=receipt.final_price />
//! <TableCellMoney value=total bold=true />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned USD amount cell
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<f64>,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {move || format_currency(value.get())}
            </span>
        </TableCell>
    }
}
