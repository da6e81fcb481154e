use crate::components::map_view::MapView;
use crate::game::CountryOption;
use crate::game::config::MapConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub country: CountryOption,
    pub map: MapConfig,
}

/// Winner's name above a map centred on it.
#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    html! {
        <section class="card result-card">
            <h2 class="result-card__country">{ p.country.label.clone() }</h2>
            <MapView
                coordinates={p.country.coordinates}
                label={AttrValue::from(p.country.label.clone())}
                config={p.map.clone()}
            />
        </section>
    }
}
