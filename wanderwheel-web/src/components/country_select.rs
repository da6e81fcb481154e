//! Multi-select for the countries on the wheel.
use crate::app::state::CatalogStatus;
use crate::game::CountryOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Catalog entries not yet selected, in catalog order.
    pub options: Vec<CountryOption>,
    pub selected: Vec<CountryOption>,
    pub status: CatalogStatus,
    /// Selection is frozen while a round is in progress.
    #[prop_or_default]
    pub locked: bool,
    pub on_add: Callback<usize>,
    pub on_remove: Callback<usize>,
}

fn placeholder(status: CatalogStatus) -> &'static str {
    match status {
        CatalogStatus::Loading => "Loading countries...",
        CatalogStatus::Ready => "Select countries...",
        CatalogStatus::Unavailable => "No countries available",
    }
}

#[function_component(CountrySelect)]
pub fn country_select(p: &Props) -> Html {
    let disabled = p.locked || p.status != CatalogStatus::Ready;

    let onchange = {
        let on_add = p.on_add.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Ok(value) = select.value().parse::<usize>() {
                on_add.emit(value);
            }
            select.set_value("");
        })
    };

    let chips = p.selected.iter().map(|option| {
        let value = option.value;
        let onclick = {
            let on_remove = p.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(value))
        };
        let remove_label = format!("Remove {}", option.label);
        html! {
            <li class="chip" key={value}>
                <span class="chip__label">{ option.label.clone() }</span>
                <button
                    type="button"
                    class="chip__remove"
                    aria-label={remove_label}
                    disabled={p.locked}
                    {onclick}
                >
                    {"×"}
                </button>
            </li>
        }
    });

    html! {
        <div class="country-select">
            <label for="country-select-input" class="sr-only">{"Countries"}</label>
            if !p.selected.is_empty() {
                <ul class="country-select__chips">
                    { for chips }
                </ul>
            }
            <select id="country-select-input" {disabled} {onchange}>
                <option value="" selected=true>{ placeholder(p.status) }</option>
                { for p.options.iter().map(|option| html! {
                    <option value={option.value.to_string()}>{ option.label.clone() }</option>
                }) }
            </select>
        </div>
    }
}
