use crate::{Ball, Config, Paddle, Side, SideTable};

/// Check if the ball left the arena past a paddle
///
/// Returns the side that missed. A ball still level with the defending
/// paddle is not a miss, even beyond the bound: the paddle will send it
/// back. The left edge is checked first.
pub fn check_out_of_bounds(ball: &Ball, paddles: &SideTable<Paddle>, config: &Config) -> Option<Side> {
    if !ball.is_live() {
        return None;
    }

    let past_left = ball.pos.x - ball.radius < -config.horizontal_bound;
    let past_right = ball.pos.x + ball.radius > config.horizontal_bound;

    if past_left && !paddles[Side::Left].overlaps_vertically(ball.pos.y, ball.radius) {
        Some(Side::Left)
    } else if past_right && !paddles[Side::Right].overlaps_vertically(ball.pos.y, ball.radius) {
        Some(Side::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, SideTable<Paddle>) {
        let config = Config::new();
        let paddles = SideTable::new(
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        );
        (config, paddles)
    }

    #[test]
    fn test_left_misses_when_ball_exits_left() {
        let (config, paddles) = setup();
        let ball = Ball::new(Vec2::new(-490.0, 200.0), Vec2::new(-200.0, 0.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), Some(Side::Left));
    }

    #[test]
    fn test_right_misses_when_ball_exits_right() {
        let (config, paddles) = setup();
        let ball = Ball::new(Vec2::new(490.0, -200.0), Vec2::new(200.0, 0.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), Some(Side::Right));
    }

    #[test]
    fn test_no_miss_when_paddle_level_with_ball() {
        let (config, paddles) = setup();
        let ball = Ball::new(Vec2::new(-490.0, 20.0), Vec2::new(-200.0, 0.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), None);
    }

    #[test]
    fn test_touching_paddle_corner_is_a_miss() {
        let (config, paddles) = setup();
        // Ball top exactly at the paddle's bottom edge
        let ball = Ball::new(Vec2::new(490.0, -62.5), Vec2::new(200.0, 0.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), Some(Side::Right));
    }

    #[test]
    fn test_no_miss_when_ball_in_bounds() {
        let (config, paddles) = setup();
        let ball = Ball::new(Vec2::new(0.0, 300.0), Vec2::new(200.0, 40.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), None);
    }

    #[test]
    fn test_parked_ball_never_scores() {
        let (config, paddles) = setup();
        let ball = Ball::parked(Vec2::new(-600.0, 300.0), 12.5);
        assert_eq!(check_out_of_bounds(&ball, &paddles, &config), None);
    }
}
