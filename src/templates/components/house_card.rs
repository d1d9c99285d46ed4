use crate::domain::House;
use crate::templates::components::house_details::house_details;
use maud::{html, Markup};

/// Expansion state of a single listing card. Cards start collapsed;
/// toggling is unconditional and always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsState {
    Collapsed,
    Expanded,
}

impl DetailsState {
    pub fn toggled(self) -> Self {
        match self {
            DetailsState::Collapsed => DetailsState::Expanded,
            DetailsState::Expanded => DetailsState::Collapsed,
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "collapsed" => Some(DetailsState::Collapsed),
            "expanded" => Some(DetailsState::Expanded),
            _ => None,
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            DetailsState::Collapsed => "collapsed",
            DetailsState::Expanded => "expanded",
        }
    }
}

/// One listing plus the card's local expansion state. State lives per
/// card instance; it is never persisted or shared between cards.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCardVm {
    pub house: House,
    pub details: DetailsState,
}

impl HouseCardVm {
    pub fn new(house: House) -> Self {
        Self {
            house,
            details: DetailsState::Collapsed,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            details: self.details.toggled(),
            ..self
        }
    }
}

/// One listing card. The toggle button swaps the card for itself in
/// the opposite state via `/houses/<id>/card`.
pub fn house_card(vm: &HouseCardVm) -> Markup {
    let house = &vm.house;
    let dom_id = format!("house-{}", house.id);
    let swap_url = format!(
        "/houses/{}/card?details={}",
        house.id,
        vm.details.toggled().as_query()
    );

    html! {
        article class="house-card" id=(dom_id) {
            h2 { (house.address) }
            p class="summary" { (house.city) ", " (house.zipcode) }
            p class="listing-id" { "Listing #" (house.id) }
            button
                hx-get=(swap_url)
                hx-target=(format!("#{dom_id}"))
                hx-swap="outerHTML"
            {
                @match vm.details {
                    DetailsState::Collapsed => "Show details",
                    DetailsState::Expanded => "Hide details",
                }
            }
            @if vm.details == DetailsState::Expanded {
                (house_details(house))
            }
        }
    }
}
