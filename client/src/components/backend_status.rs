//! Small backend reachability indicator under the topic form.

#[cfg(test)]
#[path = "backend_status_test.rs"]
mod backend_status_test;

use leptos::prelude::*;

use crate::net::types::HealthStatus;

/// Label and CSS modifier for a health probe outcome.
///
/// `None` means the probe is still in flight; `Some(None)` means it failed.
fn status_display(probe: Option<Option<&HealthStatus>>) -> (&'static str, &'static str) {
    match probe {
        None => ("Checking backend...", "pending"),
        Some(Some(status)) if status.is_healthy() => ("Backend online", "online"),
        Some(_) => ("Backend unreachable", "offline"),
    }
}

/// Health probe badge, fetched once on mount.
#[component]
pub fn BackendStatus() -> impl IntoView {
    let health = LocalResource::new(|| crate::net::api::check_health());

    move || {
        let probe = health.get();
        let (label, modifier) = status_display(probe.as_ref().map(Option::as_ref));
        view! { <p class=format!("backend-status backend-status--{modifier}")>{label}</p> }
    }
}
