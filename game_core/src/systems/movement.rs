use crate::{Ball, Config, Paddle, PaddleIntent};

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

/// Apply paddle movement based on intent
///
/// A step that would leave the travel range is dropped entirely, so the
/// paddle stops short of the wall instead of being clamped onto it.
/// Returns whether the paddle moved.
pub fn move_paddle(paddle: &mut Paddle, intent: PaddleIntent, dt: f32, config: &Config) -> bool {
    if intent.dir == 0 {
        return false;
    }

    let y = paddle.pos.y + intent.dir as f32 * paddle.speed * dt;
    if !config.paddle_y_allowed(y) {
        return false;
    }

    paddle.pos.y = y;
    true
}
