//! Static slippy-map tiles centred on a country with a pin.
use crate::game::config::MapConfig;
use crate::game::{Coordinates, tile_grid};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub coordinates: Coordinates,
    pub label: AttrValue,
    pub config: MapConfig,
}

#[function_component(MapView)]
pub fn map_view(p: &Props) -> Html {
    let grid = tile_grid(p.coordinates, p.config.zoom, p.config.viewport_tiles);
    let frame = format!("width: {}px; height: {}px;", grid.width, grid.height);
    let (pin_x, pin_y) = grid.marker;
    let pin_style = format!("left: {:.1}px; top: {:.1}px;", pin_x - 12.0, pin_y - 36.0);

    html! {
        <figure class="map-view">
            <div class="map-view__frame" style={frame}>
                { for grid.tiles.iter().map(|placed| {
                    let style = format!("left: {:.1}px; top: {:.1}px;", placed.left, placed.top);
                    html! {
                        <img
                            class="map-view__tile"
                            src={placed.tile.url(&p.config.tile_url)}
                            alt=""
                            width="256"
                            height="256"
                            {style}
                        />
                    }
                }) }
                <svg class="map-view__pin" style={pin_style} width="24" height="36" viewBox="0 0 24 36" role="img" aria-label={p.label.clone()}>
                    <path d="M12 0C5.4 0 0 5.4 0 12c0 9 12 24 12 24s12-15 12-24C24 5.4 18.6 0 12 0z" fill="#d62828" />
                    <circle cx="12" cy="12" r="4.5" fill="#ffffff" />
                </svg>
            </div>
            <figcaption class="map-view__attribution">
                <a href={p.config.attribution_url.clone()} target="_blank" rel="noopener noreferrer">
                    { p.config.attribution.clone() }
                </a>
            </figcaption>
        </figure>
    }
}
