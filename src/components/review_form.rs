use leptos::*;

#[component]
pub fn ReviewForm(listing_id: String) -> impl IntoView {
    view! {
        <div class="review-form">
            <h4>{ "Leave a Review" }</h4>
            <form method="post" action={format!("/listings/{listing_id}/reviews")}>
                <label>{ "Rating" }
                    <input type="range" name="review[rating]" min="1" max="5" value="3"/>
                </label>
                <label>{ "Comments" }
                    <textarea name="review[comment]" rows="5"></textarea>
                </label>
                <button type="submit">{ "Submit" }</button>
            </form>
        </div>
    }
}
