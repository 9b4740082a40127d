//! shared resolver helpers: the orientation dispatch and the pixel policy

use crate::sys::geometry::Rect;

/// The one orientation branch in the engine. Every orientation-dependent
/// layout family is a (landscape, portrait) pair of pure functions routed
/// through here; ties (square screens) take the landscape arm.
pub fn oriented<T>(
    screen: &Rect,
    landscape: impl FnOnce(&Rect) -> T,
    portrait: impl FnOnce(&Rect) -> T,
) -> T {
    if screen.is_landscape() {
        landscape(screen)
    } else {
        portrait(screen)
    }
}

/// Sizes are floored, never rounded up, so a computed rect cannot overflow
/// the screen by a sub-pixel amount.
pub fn floor_frac(extent: f64, fraction: f64) -> f64 {
    (extent * fraction).floor()
}

pub fn floor_div(extent: f64, cells: u32) -> f64 {
    (extent / cells as f64).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oriented_routes_on_width_vs_height() {
        let wide = Rect::new(0.0, 0.0, 200.0, 100.0);
        let tall = Rect::new(0.0, 0.0, 100.0, 200.0);
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(oriented(&wide, |_| "l", |_| "p"), "l");
        assert_eq!(oriented(&tall, |_| "l", |_| "p"), "p");
        assert_eq!(oriented(&square, |_| "l", |_| "p"), "l");
    }

    #[test]
    fn fractions_floor() {
        assert_eq!(floor_frac(1000.0, 2.0 / 3.0), 666.0);
        assert_eq!(floor_frac(999.0, 0.5), 499.0);
        assert_eq!(floor_div(1000.0, 3), 333.0);
    }
}
