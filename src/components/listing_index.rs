use leptos::*;
use crate::models::listing::{price_label, Listing};

#[component]
pub fn ListingIndex(listings: Vec<Listing>) -> impl IntoView {
    view! {
        <h3>{ "All Listings" }</h3>
        <div class="listings">
            {listings.into_iter().map(|listing| view! {
                <a class="listing-link" href={format!("/listings/{}", listing.id)}>
                    <div class="card">
                        <img src={listing.image} alt="listing_image"/>
                        <div class="card-body">
                            <b>{ listing.title }</b>
                            <br/>
                            { format!("{} / night", price_label(listing.price)) }
                        </div>
                    </div>
                </a>
            }).collect::<Vec<_>>()}
        </div>
    }
}
