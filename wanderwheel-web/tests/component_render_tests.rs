use futures::executor::block_on;
use wanderwheel_web::app::state::CatalogStatus;
use wanderwheel_web::components::country_select::{self, CountrySelect};
use wanderwheel_web::components::itinerary::{self, Itinerary};
use wanderwheel_web::components::notice_tray::{self, NoticeTray};
use wanderwheel_web::components::wheel::{self, Wheel};
use wanderwheel_web::game::{AppConfig, Catalog, Coordinates, NOT_AVAILABLE_MESSAGE, Notice};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn catalog() -> Catalog {
    Catalog::from_entries([
        ("Peru", Coordinates::new(-10.0, -76.0).unwrap()),
        ("Åland Islands", Coordinates::new(60.1, 19.9).unwrap()),
        ("Iceland", Coordinates::new(65.0, -18.0).unwrap()),
    ])
}

#[test]
fn country_select_lists_options_in_catalog_order() {
    let catalog = catalog();
    let props = country_select::Props {
        options: catalog.options().to_vec(),
        selected: Vec::new(),
        status: CatalogStatus::Ready,
        locked: false,
        on_add: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CountrySelect>::with_props(props).render());
    let aland = html.find("Åland Islands").unwrap();
    let iceland = html.find("Iceland").unwrap();
    let peru = html.find("Peru").unwrap();
    assert!(aland < iceland && iceland < peru);
}

#[test]
fn locked_select_is_disabled() {
    let catalog = catalog();
    let props = country_select::Props {
        options: Vec::new(),
        selected: catalog.options().to_vec(),
        status: CatalogStatus::Ready,
        locked: true,
        on_add: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CountrySelect>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("Remove Peru"));
}

#[test]
fn wheel_draws_one_segment_per_selection() {
    let props = wheel::Props {
        labels: vec!["Peru".into(), "Iceland".into()],
        slot: 1,
        spinning: false,
        config: AppConfig::default_config().wheel,
        on_stop: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Wheel>::with_props(props).render());
    assert_eq!(html.matches("wheel__segment").count(), 2);
    assert!(html.contains("#ffe000"));
}

#[test]
fn itinerary_uses_bundled_dataset() {
    let book = &wanderwheel_web::game::assets().itineraries;
    let props = itinerary::Props {
        country: AttrValue::from("Japan"),
        book,
    };
    let html = block_on(LocalServerRenderer::<Itinerary>::with_props(props).render());
    assert!(html.contains("Travel Itinerary"));
    assert!(html.contains("Day 1"));

    let props = itinerary::Props {
        country: AttrValue::from("Åland Islands"),
        book,
    };
    let html = block_on(LocalServerRenderer::<Itinerary>::with_props(props).render());
    assert!(html.contains(NOT_AVAILABLE_MESSAGE));
}

#[test]
fn notice_tray_is_empty_without_notices() {
    let props = notice_tray::Props {
        items: Vec::new(),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NoticeTray>::with_props(props).render());
    assert!(html.contains("notice-tray"));
    assert!(!html.contains("notice__title"));

    let props = notice_tray::Props {
        items: vec![
            (1, Notice::warning("first", std::time::Duration::from_secs(3))),
            (2, Notice::warning("second", std::time::Duration::from_secs(3))),
        ],
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NoticeTray>::with_props(props).render());
    assert_eq!(html.matches("notice__title").count(), 2);
}
