//! Nearest-color tile search over a palette

use crate::color::ColorVector;
use crate::palette::builder::{Palette, PaletteTile};
use std::cmp::Ordering;

/// Find the palette tile whose average color is nearest to `target`
///
/// Distance is Euclidean over the three channels. Exact ties break
/// toward the lexicographically smallest tile name, so the result is
/// reproducible regardless of palette build completion order. Returns
/// `None` only for an empty palette, which the builder guards against.
pub fn nearest<'a>(palette: &'a Palette, target: &ColorVector) -> Option<&'a PaletteTile> {
    let mut best: Option<(f64, &PaletteTile)> = None;

    for tile in palette {
        let distance = target.distance(tile.average());

        let closer = match &best {
            None => true,
            Some((best_distance, best_tile)) => {
                match distance.partial_cmp(best_distance) {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => tile.name() < best_tile.name(),
                    _ => false,
                }
            }
        };

        if closer {
            best = Some((distance, tile));
        }
    }

    best.map(|(_, tile)| tile)
}
