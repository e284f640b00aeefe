use glam::Vec2;

use crate::{Ball, Config, GameRng, Paddle, Side};

/// Bounce the ball off the floor or ceiling
///
/// The vertical component is forced away from the wall and both components
/// are scaled by independent jitter draws (x first, then y), so speed drifts
/// upward over a long rally. Returns whether a bounce happened.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, rng: &mut GameRng) -> bool {
    if !ball.is_live() {
        return false;
    }

    let floor = ball.pos.y - ball.radius < -config.wall_bound;
    let ceiling = !floor && ball.pos.y + ball.radius > config.wall_bound;
    if !floor && !ceiling {
        return false;
    }

    let jitter_x = rng.jitter(config.jitter);
    let jitter_y = rng.jitter(config.jitter);
    let vy = ball.vel.y.abs() * jitter_y;
    ball.vel = Vec2::new(ball.vel.x * jitter_x, if floor { vy } else { -vy });

    tracing::trace!(pos = ?ball.pos, vel = ?ball.vel, "wall bounce");
    true
}

/// Check the ball against one paddle's inner edge
///
/// On contact the horizontal velocity is forced to point away from the
/// paddle, so a ball that has slipped behind it is still sent back.
/// Returns whether the paddle hit the ball.
pub fn paddle_collision(paddle: &Paddle, ball: &mut Ball, config: &Config, rng: &mut GameRng) -> bool {
    if !ball.is_live() || !paddle.overlaps_vertically(ball.pos.y, ball.radius) {
        return false;
    }

    let facing = paddle.facing();
    let touching = match facing {
        Side::Left => ball.pos.x - ball.radius <= paddle.pos.x + paddle.half_width,
        Side::Right => ball.pos.x + ball.radius >= paddle.pos.x - paddle.half_width,
    };
    if !touching {
        return false;
    }

    let jitter_x = rng.jitter(config.jitter);
    let jitter_y = rng.jitter(config.jitter);
    ball.vel = Vec2::new(
        facing.sign() * ball.vel.x.abs() * jitter_x,
        ball.vel.y * jitter_y,
    );

    tracing::trace!(side = ?paddle.side, vel = ?ball.vel, "paddle hit");
    true
}
