use leptos::prelude::*;

/// Badge variant for a booking status
pub fn booking_status_variant(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" | "paid" => "success",
        "pending" | "in_progress" | "in-progress" | "accepted" => "warning",
        "cancelled" | "canceled" | "declined" | "refunded" => "error",
        _ => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Booking status badge
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let variant = booking_status_variant(&status).to_string();
    let label = if status.is_empty() { "—".to_string() } else { status };

    view! {
        <Badge variant=variant>{label}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_variant() {
        assert_eq!(booking_status_variant("Completed"), "success");
        assert_eq!(booking_status_variant("pending"), "warning");
        assert_eq!(booking_status_variant("CANCELLED"), "error");
        assert_eq!(booking_status_variant("whatever"), "neutral");
    }
}
