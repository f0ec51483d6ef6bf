use crate::{Aabb, Player, RenderSurface, Tint};

/// Paint the whole surface with one color
pub fn clear(surface: &mut dyn RenderSurface, bounds: Aabb, background: &str) {
    let size = bounds.size();
    surface.set_fill_style(background);
    surface.fill_rect(bounds.min.x, bounds.min.y, size.x, size.y);
}

/// Paint a player as a solid rectangle in its tint
pub fn draw_player(surface: &mut dyn RenderSurface, player: &Player, tint: &Tint) {
    let aabb = player.aabb();
    let size = aabb.size();
    surface.set_fill_style(tint.0.hex());
    surface.fill_rect(aabb.min.x, aabb.min.y, size.x, size.y);
}
