//! The create and edit forms share one set of fields.
//! Edit passes the current values and a `_method` override.
use leptos::*;
use crate::models::listing::ListingInput;

#[component]
pub fn ListingForm(
    heading: &'static str,
    action: String,
    values: ListingInput,
    method_override: Option<&'static str>,
    submit_label: &'static str,
) -> impl IntoView {
    let price = if values.title.is_empty() && values.price == 0.0 {
        String::new()
    } else {
        values.price.to_string()
    };

    view! {
        <h3>{ heading }</h3>
        <form method="post" action=action class="listing-form">
            {method_override.map(|method| view! {
                <input type="hidden" name="_method" value=method/>
            })}
            <label>{ "Title" }
                <input type="text" name="listing[title]" placeholder="Add a catchy title" value={values.title}/>
            </label>
            <label>{ "Description" }
                <textarea name="listing[description]">{ values.description }</textarea>
            </label>
            <label>{ "Image Link" }
                <input type="text" name="listing[image]" placeholder="Enter image URL/Link" value={values.image.unwrap_or_default()}/>
            </label>
            <label>{ "Price" }
                <input type="number" name="listing[price]" min="0" placeholder="1200" value=price/>
            </label>
            <label>{ "Country" }
                <input type="text" name="listing[country]" placeholder="India" value={values.country}/>
            </label>
            <label>{ "Location" }
                <input type="text" name="listing[location]" placeholder="Jaipur, Rajasthan" value={values.location}/>
            </label>
            <button type="submit">{ submit_label }</button>
        </form>
    }
}
