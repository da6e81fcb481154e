//! Web Mercator projection for the slippy-map result card.
use serde::Serialize;
use std::f64::consts::PI;

use crate::catalog::Coordinates;

pub const TILE_SIZE: u32 = 256;
/// Latitude limit of the square Web Mercator world.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// Fill a `{z}/{x}/{y}` template.
    #[must_use]
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// A tile and where its top-left corner sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedTile {
    pub tile: TileCoord,
    pub left: f64,
    pub top: f64,
}

/// Tiles needed to draw a square viewport centred on a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileGrid {
    pub tiles: Vec<PlacedTile>,
    pub width: u32,
    pub height: u32,
    /// Marker position inside the viewport, in pixels.
    pub marker: (f64, f64),
}

/// Number of tiles along one axis at `zoom`.
#[must_use]
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1_u32 << zoom.min(30)
}

/// Project a coordinate to global pixel space at `zoom`.
#[must_use]
pub fn project(coordinates: Coordinates, zoom: u8) -> (f64, f64) {
    let world = f64::from(tiles_per_axis(zoom)) * f64::from(TILE_SIZE);
    let lat = coordinates
        .latitude
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (coordinates.longitude + 180.0) / 360.0 * world;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

/// Tile containing a coordinate at `zoom`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tile_for(coordinates: Coordinates, zoom: u8) -> TileCoord {
    let (x, y) = project(coordinates, zoom);
    let max = tiles_per_axis(zoom) - 1;
    let size = f64::from(TILE_SIZE);
    TileCoord {
        zoom,
        x: ((x / size).floor().max(0.0) as u32).min(max),
        y: ((y / size).floor().max(0.0) as u32).min(max),
    }
}

/// Lay out a `span` x `span` tile viewport centred on `center`.
///
/// Columns wrap around the antimeridian; rows beyond the poles are left out.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn tile_grid(center: Coordinates, zoom: u8, span: u8) -> TileGrid {
    let size = f64::from(TILE_SIZE);
    let extent = u32::from(span.max(1)) * TILE_SIZE;
    let half = f64::from(extent) / 2.0;
    let (cx, cy) = project(center, zoom);
    let origin_x = cx - half;
    let origin_y = cy - half;

    let count = i64::from(tiles_per_axis(zoom));
    let first_col = (origin_x / size).floor() as i64;
    let last_col = ((origin_x + f64::from(extent) - 1.0) / size).floor() as i64;
    let first_row = (origin_y / size).floor() as i64;
    let last_row = ((origin_y + f64::from(extent) - 1.0) / size).floor() as i64;

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        let Ok(y) = u32::try_from(row) else {
            continue;
        };
        if i64::from(y) >= count {
            continue;
        }
        for col in first_col..=last_col {
            let Ok(x) = u32::try_from(col.rem_euclid(count)) else {
                continue;
            };
            tiles.push(PlacedTile {
                tile: TileCoord { zoom, x, y },
                left: col as f64 * size - origin_x,
                top: row as f64 * size - origin_y,
            });
        }
    }

    TileGrid {
        tiles,
        width: extent,
        height: extent,
        marker: (half, half),
    }
}
