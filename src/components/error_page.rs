use leptos::*;

/// Only status and message reach this view.
#[component]
pub fn ErrorPage(status: u16, message: String) -> impl IntoView {
    view! {
        <div class="error">
            <h3>{ format!("Error {status}") }</h3>
            <p class="error-message">{ message }</p>
            <a href="/listings">{ "Back to listings" }</a>
        </div>
    }
}
