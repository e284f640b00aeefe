use crate::host::InputSource;
use crate::{Ball, Paddle, PaddleIntent};

/// Decide which way a paddle moves this tick
pub fn paddle_intent(paddle: &Paddle, ball: &Ball, input: &dyn InputSource, dead_zone: f32) -> PaddleIntent {
    if paddle.autoplay {
        autoplay_intent(paddle, ball, dead_zone)
    } else {
        keyboard_intent(paddle, input)
    }
}

/// Chase the ball's height, resting inside the dead zone
pub fn autoplay_intent(paddle: &Paddle, ball: &Ball, dead_zone: f32) -> PaddleIntent {
    let dist = ball.pos.y - paddle.pos.y;
    if dist.abs() > dead_zone {
        PaddleIntent::toward(if dist > 0.0 { 1 } else { -1 })
    } else {
        PaddleIntent::new()
    }
}

/// First held binding wins, in binding order
pub fn keyboard_intent(paddle: &Paddle, input: &dyn InputSource) -> PaddleIntent {
    paddle
        .bindings
        .iter()
        .find(|binding| input.is_key_down(binding.key))
        .map(|binding| PaddleIntent::toward(binding.dir))
        .unwrap_or_default()
}
