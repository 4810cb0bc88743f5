/// Универсальные утилиты для работы со списками (поиск, подсветка, поле поиска)
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Значения полей, по которым идёт поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any search field.
    /// The empty filter matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter_lower = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&filter_lower))
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

/// Фильтрует список по поисковому запросу, сохраняя исходный порядок
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Returns nothing when lowercasing changes byte offsets, so callers can
/// fall back to plain text.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[start..end].to_string()}
            </span>
        }.into_any());
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для подсветки активного поиска)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка перед применением, мс
    #[prop(optional)]
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Only the latest keystroke's timer is allowed to fire
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if debounce_ms == 0 {
            on_change.run(new_value);
            return;
        }

        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 320px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
