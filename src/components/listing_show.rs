use leptos::*;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::listing::{price_label, ListingDetail};

#[component]
pub fn ListingShow(detail: ListingDetail) -> impl IntoView {
    let ListingDetail { listing, reviews } = detail;
    let id = listing.id;
    let edit_href = format!("/listings/edit/{id}");
    let delete_action = format!("/listings/{id}");

    view! {
        <div class="listing-detail">
            <h3>{ listing.title }</h3>
            <img class="show-img" src={listing.image} alt="listing_image"/>
            <p>{ listing.description }</p>
            <p>{ format!("{} / night", price_label(listing.price)) }</p>
            <p>{ format!("{}, {}", listing.location, listing.country) }</p>
        </div>
        <div class="actions">
            <a class="btn" href=edit_href>{ "Edit" }</a>
            <form method="post" action=delete_action>
                <input type="hidden" name="_method" value="DELETE"/>
                <button type="submit">{ "Delete" }</button>
            </form>
        </div>
        <hr/>
        <ReviewForm listing_id={id.clone()}/>
        <ReviewsList listing_id=id reviews=reviews/>
    }
}
