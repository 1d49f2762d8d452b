use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(listing_id: String, reviews: Vec<Review>) -> impl IntoView {
    let empty = reviews.is_empty();

    view! {
        <div class="reviews">
            <h4>{ "All Reviews" }</h4>
            {empty.then(|| view! { <p>{ "No reviews yet" }</p> })}
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        let stars = "\u{2605}".repeat(usize::from(review.rating));
                        view! {
                            <li class="review">
                                <p class="stars">{ stars }</p>
                                <p>{ format!("Rating: {}/5", review.rating) }</p>
                                <p>{ review.comment }</p>
                                <form method="post" action={format!("/listings/{}/reviews/{}", listing_id, review.id)}>
                                    <input type="hidden" name="_method" value="DELETE"/>
                                    <button type="submit">{ "Delete" }</button>
                                </form>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
