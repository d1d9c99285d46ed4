use crate::domain::House;
use maud::{html, Markup};

/// Detail sub-view shown when a listing card is expanded.
pub fn house_details(house: &House) -> Markup {
    html! {
        dl class="house-details" {
            dt { "Property value" }
            dd { "$" (house.property_value) }
            dt { "Money raised" }
            dd { "$" (house.money_raised) }
            dt { "Asking price" }
            dd { "$" (house.asking_price) }
            dt { "Tags" }
            dd {
                @if house.tags.is_empty() {
                    "none"
                } @else {
                    @for (i, tag) in house.tags.iter().enumerate() {
                        @if i > 0 { ", " }
                        span class="tag" { (tag) }
                    }
                }
            }
        }
    }
}
