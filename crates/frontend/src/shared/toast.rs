//! Transient user-facing notifications (thaw toaster)

use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

const ERROR_TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Show an error toast. Fire-and-forget.
///
/// Requires `ToasterProvider` above the caller in the component tree.
pub fn notify_error(toaster: &ToasterInjection, title: impl Into<String>, message: impl Into<String>) {
    let title = title.into();
    let message = message.into();
    log::debug!("toast(error): {}: {}", title, message);

    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{title}</ToastTitle>
                    <ToastBody>{message}</ToastBody>
                </Toast>
            }
        },
        ToastOptions::default()
            .with_intent(ToastIntent::Error)
            .with_position(ToastPosition::TopEnd)
            .with_timeout(ERROR_TOAST_TIMEOUT),
    );
}
