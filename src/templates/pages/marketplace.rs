// templates/pages/marketplace.rs

use crate::domain::House;
use crate::templates::components::{house_card, HouseCardVm};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The listings index: one card per record, in response order, keyed
/// by id. An empty list (including the fetch-failure fallback)
/// renders zero cards.
pub fn marketplace_page(houses: &[House]) -> Markup {
    desktop_layout(
        "Marketplace",
        html! {
            main class="container" {
                h1 { "Marketplace" }
                @if houses.is_empty() {
                    p class="empty" { "No listings right now." }
                } @else {
                    section class="listings" {
                        @for house in houses {
                            (house_card(&HouseCardVm::new(house.clone())))
                        }
                    }
                }
            }
        },
    )
}
