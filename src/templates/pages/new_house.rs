use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Form for listing a new house. Submits to `POST /houses`; the id
/// is assigned server-side.
pub fn new_house_page() -> Markup {
    desktop_layout(
        "Add a house",
        html! {
            main class="container" {
                h1 { "Add a house" }
                form method="post" action="/houses" {
                    (field("Address", "address", "text"))
                    (field("Zipcode", "zipcode", "number"))
                    (field("City", "city", "text"))
                    (field("Property value", "property_value", "number"))
                    (field("Money raised", "money_raised", "number"))
                    (field("Asking price", "asking_price", "number"))
                    p {
                        label for="tags" { "Tags (comma separated)" }
                        br;
                        input type="text" id="tags" name="tags";
                    }
                    button type="submit" { "Create listing" }
                }
            }
        },
    )
}

fn field(label: &str, name: &str, kind: &str) -> Markup {
    html! {
        p {
            label for=(name) { (label) }
            br;
            input type=(kind) id=(name) name=(name) required;
        }
    }
}
