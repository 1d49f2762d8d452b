//! Server-side page rendering for Wanderlust.
//! Each page is a leptos component wrapped in the shared layout and rendered to a full HTML document.
use leptos::*;

use crate::components::{
    error_page::ErrorPage, layout::Layout, listing_form::ListingForm, listing_index::ListingIndex,
    listing_show::ListingShow,
};
use crate::models::listing::{Listing, ListingDetail, ListingInput};

fn render_page<F, N>(title: &str, page: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let title = title.to_string();
    let html = leptos::ssr::render_to_string(move || {
        view! { <Layout title=title>{ page() }</Layout> }
    });
    format!("<!DOCTYPE html>{html}")
}

pub fn render_index(listings: Vec<Listing>) -> String {
    render_page("All Listings", move || view! { <ListingIndex listings=listings/> })
}

pub fn render_new() -> String {
    let values = ListingInput {
        title: String::new(),
        description: String::new(),
        image: None,
        price: 0.0,
        location: String::new(),
        country: String::new(),
    };

    render_page("New Listing", move || {
        view! {
            <ListingForm
                heading="Create a New Listing"
                action={"/listings".to_string()}
                values=values
                method_override=None
                submit_label="Add"
            />
        }
    })
}

pub fn render_edit(listing: Listing) -> String {
    let action = format!("/listings/{}", listing.id);
    let values = ListingInput::from(&listing);

    render_page("Edit Listing", move || {
        view! {
            <ListingForm
                heading="Edit your Listing"
                action=action
                values=values
                method_override={Some("PUT")}
                submit_label="Edit"
            />
        }
    })
}

pub fn render_show(detail: ListingDetail) -> String {
    let title = detail.listing.title.clone();
    render_page(&title, move || view! { <ListingShow detail=detail/> })
}

pub fn render_error_page(status: u16, message: &str) -> String {
    let message = message.to_string();
    render_page("Error", move || view! { <ErrorPage status=status message=message/> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::Review;

    fn listing() -> Listing {
        Listing {
            id: "abc".into(),
            title: "Cozy Cabin".into(),
            description: "Quiet place".into(),
            image: "https://example.com/cabin.jpg".into(),
            price: 1500.0,
            location: "Manali".into(),
            country: "India".into(),
            reviews: vec!["r1".into()],
        }
    }

    #[test]
    fn test_index_lists_titles() {
        let html = render_index(vec![listing()]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Cozy Cabin"));
        assert!(html.contains("/listings/abc"));
    }

    #[test]
    fn test_edit_form_prefills_and_overrides() {
        let html = render_edit(listing());
        assert!(html.contains("Manali"));
        assert!(html.contains("_method"));
        assert!(html.contains("PUT"));
    }

    #[test]
    fn test_new_form_is_empty() {
        let html = render_new();
        assert!(html.contains("listing[title]"));
        assert!(!html.contains("_method"));
    }

    #[test]
    fn test_show_includes_reviews() {
        let detail = ListingDetail {
            listing: listing(),
            reviews: vec![Review {
                id: "r1".into(),
                comment: "Great stay".into(),
                rating: 5,
                created_at: "2024-01-01T00:00:00+00:00".into(),
            }],
        };
        let html = render_show(detail);
        assert!(html.contains("Great stay"));
        assert!(html.contains("Rating: 5/5"));
        assert!(html.contains("/listings/abc/reviews/r1"));
    }

    #[test]
    fn test_error_page_shows_message() {
        let html = render_error_page(404, "Page Not Found!");
        assert!(html.contains("Error 404"));
        assert!(html.contains("Page Not Found!"));
    }
}
