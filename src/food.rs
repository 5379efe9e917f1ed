use rand::Rng;

use crate::snake::{Position, Snake};

/// Picks a uniformly random cell not covered by `snake`.
///
/// Uses rejection sampling with no retry limit. On a board the snake fills
/// completely this never returns; grid sizes are bounded in
/// [`GameConfig::validate`](crate::config::GameConfig::validate) so the case
/// is not reachable in normal play.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid_size: u16, snake: &Snake) -> Position {
    let upper = i32::from(grid_size);
    loop {
        let candidate = Position::new(rng.gen_range(0..upper), rng.gen_range(0..upper));
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
