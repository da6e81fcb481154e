use crate::game::{ItineraryBook, ItineraryLookup, NOT_AVAILABLE_MESSAGE};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub country: AttrValue,
    pub book: &'static ItineraryBook,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country && std::ptr::eq(self.book, other.book)
    }
}

/// Day-by-day plan for the winning country.
#[function_component(Itinerary)]
pub fn itinerary(p: &Props) -> Html {
    let body = match p.book.lookup(&p.country) {
        ItineraryLookup::Found(days) => html! {
            <ol class="itinerary__days">
                { for days.iter().map(|(day, plan)| html! {
                    <li class="itinerary__day" key={day.clone()}>
                        <h3>{ day.clone() }</h3>
                        <p class="itinerary__activity"><strong>{"Activity: "}</strong>{ plan.activity.clone() }</p>
                        <p class="itinerary__description">{ plan.description.clone() }</p>
                    </li>
                }) }
            </ol>
        },
        ItineraryLookup::NotFound => html! {
            <p class="itinerary__missing">{ NOT_AVAILABLE_MESSAGE }</p>
        },
    };

    html! {
        <section class="itinerary" aria-label="Travel Itinerary">
            <h2>{"Travel Itinerary"}</h2>
            { body }
        </section>
    }
}
