//! Page shell shared by every view: head, navbar, footer.
use leptos::*;

#[component]
pub fn Layout(title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{ title }</title>
                <link rel="stylesheet" href="/public/css/style.css"/>
            </head>
            <body>
                <nav class="navbar">
                    <a class="brand" href="/listings">{ "Wanderlust" }</a>
                    <a href="/listings">{ "All Listings" }</a>
                    <a href="/listings/new">{ "Add New Listing" }</a>
                </nav>
                <main class="container">{ children() }</main>
                <footer>{ "\u{a9} Wanderlust" }</footer>
            </body>
        </html>
    }
}
