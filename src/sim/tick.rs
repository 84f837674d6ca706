//! Per-frame session update
//!
//! The host calls `process_input`, `update` and `render` once per frame, in
//! that order, with the frame's delta time.

use super::collision::resolve_paddle_collision;
use super::effects::PostEffects;
use super::entity::Side;
use super::input::Key;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::renderer::{FrameRenderer, ParticleInstance};

impl GameSession {
    /// Apply held/pressed keys for this frame
    pub fn process_input(&mut self, dt: f32) {
        match self.phase {
            GamePhase::Menu => {
                if self.keys.consume_press(Key::Start) {
                    self.set_phase(GamePhase::Active);
                }
            }
            GamePhase::Win => {
                if self.keys.consume_press(Key::Start) {
                    self.reset();
                    self.set_phase(GamePhase::Active);
                }
            }
            GamePhase::Active => {
                let controls = [
                    (Side::Left, Key::Player1Up, Key::Player1Down),
                    (Side::Right, Key::Player2Up, Key::Player2Down),
                ];
                let speed = self.config.paddle_speed;
                let height = self.config.field_height;

                for (side, up, down) in controls {
                    let mut dir = 0.0;
                    if self.keys.is_down(up) {
                        dir -= 1.0;
                    }
                    if self.keys.is_down(down) {
                        dir += 1.0;
                    }

                    let paddle = &mut self.paddles[side.index()];
                    paddle.body.velocity.y = dir * speed;
                    paddle.shift(dir * speed * dt, height);
                }
            }
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Order matters: collisions see the moved ball, particles see the
    /// resolved ball, scoring sees the final position.
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Active {
            self.impact.tick(dt);
            return;
        }

        self.ball.move_in_field(dt, self.config.field_height);

        for side in Side::ALL {
            let hit = resolve_paddle_collision(
                &mut self.ball,
                &self.paddles[side.index()],
                self.config.initial_ball_velocity,
                self.config.aim_strength,
            );
            if hit {
                self.impact.trigger(self.config.impact_duration);
                self.events.push(GameEvent::PaddleHit(side));
            }
        }

        self.particles.update(
            dt,
            &self.ball.body,
            self.config.particles_per_frame,
            self.config.particle_offset,
        );

        self.impact.tick(dt);

        if let Some(scorer) = self.ball_exit() {
            self.award_point(scorer);
        }
    }

    /// Which side scores if the ball has fully left the field
    fn ball_exit(&self) -> Option<Side> {
        let body = &self.ball.body;
        if body.position.x + body.size.x < 0.0 {
            Some(Side::Right)
        } else if body.position.x > self.config.field_width {
            Some(Side::Left)
        } else {
            None
        }
    }

    fn award_point(&mut self, scorer: Side) {
        self.scores[scorer.index()] += 1;
        self.events.push(GameEvent::Scored(scorer));
        log::debug!(
            "Player {} scores ({}:{})",
            scorer.player_number(),
            self.scores[0],
            self.scores[1]
        );
        self.reset_ball();

        if self.scores.iter().any(|&s| s >= self.config.max_score) {
            log::info!("Player {} wins", scorer.player_number());
            self.set_phase(GamePhase::Win);
        }
    }

    /// Hand this frame's state to the renderer
    pub fn render<R: FrameRenderer>(&self, renderer: &mut R, time: f32) {
        let effects = PostEffects {
            shake: self.shake_active(),
            time,
        };

        renderer.begin_frame(&effects);
        for paddle in &self.paddles {
            renderer.draw_entity(&paddle.body);
        }
        let particles: Vec<ParticleInstance> =
            self.particles.live().map(ParticleInstance::from).collect();
        renderer.draw_particles(&particles);
        renderer.draw_entity(&self.ball.body);
        renderer.end_frame(&effects);

        renderer.draw_scores(self.scores[0], self.scores[1]);
        match self.phase {
            GamePhase::Menu => renderer.draw_banner("Press ENTER to start"),
            GamePhase::Win => {
                if let Some(side) = self.winner() {
                    renderer.draw_banner(&format!(
                        "Player {} wins! Press ENTER to play again",
                        side.player_number()
                    ));
                }
            }
            GamePhase::Active => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRenderer;
    use crate::settings::{GameConfig, Settings};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn active_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default());
        session.keys_mut().set(Key::Start, true);
        session.process_input(DT);
        session.keys_mut().set(Key::Start, false);
        assert_eq!(session.phase(), GamePhase::Active);
        session
    }

    /// Park the ball mid-field moving horizontally at `vx`
    fn serve(session: &mut GameSession, x: f32, vx: f32) {
        let y = session.config().field_height / 2.0 - session.config().ball_radius;
        session.ball_mut().reset(Vec2::new(x, y), Vec2::new(vx, 0.0));
    }

    #[test]
    fn test_menu_to_active_fires_once_while_held() {
        let mut session = GameSession::new(GameConfig::default());
        assert_eq!(session.phase(), GamePhase::Menu);

        session.keys_mut().set(Key::Start, true);
        session.process_input(DT);
        assert_eq!(session.phase(), GamePhase::Active);

        // Force back to the menu; the held key must not restart play
        session.set_phase(GamePhase::Menu);
        for _ in 0..5 {
            session.process_input(DT);
        }
        assert_eq!(session.phase(), GamePhase::Menu);

        session.keys_mut().set(Key::Start, false);
        session.keys_mut().set(Key::Start, true);
        session.process_input(DT);
        assert_eq!(session.phase(), GamePhase::Active);
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut session = GameSession::new(GameConfig::default());
        let ball = session.ball().clone();
        session.keys_mut().set(Key::Player1Up, true);
        session.process_input(DT);
        session.update(DT);

        assert_eq!(session.ball(), &ball);
        assert_eq!(session.paddle(Side::Left).body.position.y, 250.0);
        assert_eq!(session.particles().live_count(), 0);
    }

    #[test]
    fn test_paddles_follow_keys_and_clamp() {
        let mut session = active_session();
        session.keys_mut().set(Key::Player1Up, true);
        session.keys_mut().set(Key::Player2Down, true);

        session.process_input(0.1);
        assert!((session.paddle(Side::Left).body.position.y - 200.0).abs() < 1e-3);
        assert!((session.paddle(Side::Right).body.position.y - 300.0).abs() < 1e-3);

        for _ in 0..100 {
            session.process_input(0.1);
        }
        assert_eq!(session.paddle(Side::Left).body.position.y, 0.0);
        assert_eq!(session.paddle(Side::Right).body.position.y, 500.0);
    }

    #[test]
    fn test_paddle_hit_triggers_shake_and_event() {
        let mut session = active_session();
        // Ball heading into the left paddle, will overlap after one frame
        let y = 300.0;
        session
            .ball_mut()
            .reset(Vec2::new(32.0, y), Vec2::new(-300.0, 0.0));
        session.take_events();

        session.update(DT);

        assert!(session.ball().body.velocity.x > 0.0);
        assert_eq!(session.ball().body.position.x, 30.0);
        assert!(session.shake_active());
        assert_eq!(session.take_events(), vec![GameEvent::PaddleHit(Side::Left)]);

        // Shake wears off
        for _ in 0..10 {
            session.update(DT);
        }
        assert!(!session.shake_active());
    }

    #[test]
    fn test_ball_between_both_paddles_hits_each() {
        // Paddles touch in the middle, so the ball overlaps both at once
        let config = GameConfig {
            field_width: 40.0,
            paddle_margin: 0.0,
            ..GameConfig::default()
        };
        config.validate().unwrap();
        let mut session = GameSession::new(config);
        session.set_phase(GamePhase::Active);
        let velocity = Vec2::new(-300.0, 40.0);
        session.ball_mut().reset(Vec2::new(10.0, 290.0), velocity);
        session.take_events();

        session.update(0.0);

        assert_eq!(
            session.take_events(),
            vec![
                GameEvent::PaddleHit(Side::Left),
                GameEvent::PaddleHit(Side::Right)
            ]
        );
        let after = session.ball().body.velocity;
        assert!(after.is_finite());
        assert!((after.length() - velocity.length()).abs() < 1e-3);
        // Right paddle resolved last, so the ball heads left off its face
        assert!(after.x < 0.0);
        assert_eq!(session.ball().body.position.x, 0.0);
        assert_eq!(session.scores(), (0, 0));
    }

    #[test]
    fn test_reduced_motion_hides_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let mut session = GameSession::with_settings(GameConfig::default(), settings);
        session.set_phase(GamePhase::Active);
        session
            .ball_mut()
            .reset(Vec2::new(32.0, 300.0), Vec2::new(-300.0, 0.0));
        session.update(DT);

        assert!(session.impact().is_active());
        assert!(!session.shake_active());
    }

    #[test]
    fn test_exit_left_scores_for_right() {
        let mut session = active_session();
        serve(&mut session, -25.0, -300.0);
        session.take_events();

        session.update(DT);

        assert_eq!(session.scores(), (0, 1));
        assert_eq!(session.ball().body.position, session.config().ball_start());
        assert_eq!(
            session.ball().body.velocity,
            session.config().initial_ball_velocity
        );
        assert_eq!(session.take_events(), vec![GameEvent::Scored(Side::Right)]);
    }

    #[test]
    fn test_exit_right_scores_for_left() {
        let mut session = active_session();
        serve(&mut session, 800.0, 300.0);
        session.update(DT);
        assert_eq!(session.scores(), (1, 0));
    }

    #[test]
    fn test_win_then_restart() {
        let config = GameConfig {
            max_score: 10,
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config);
        session.set_phase(GamePhase::Active);
        session.scores = [9, 0];

        serve(&mut session, 800.0, 300.0);
        session.update(DT);
        assert_eq!(session.scores(), (10, 0));
        assert_eq!(session.phase(), GamePhase::Win);
        assert_eq!(session.winner(), Some(Side::Left));

        // Nothing moves while the win screen is up
        let ball = session.ball().clone();
        session.update(DT);
        assert_eq!(session.ball(), &ball);

        session.keys_mut().set(Key::Start, true);
        session.process_input(DT);
        assert_eq!(session.phase(), GamePhase::Active);
        assert_eq!(session.scores(), (0, 0));
    }

    #[test]
    fn test_no_win_below_max_score() {
        let mut session = active_session();
        session.scores = [8, 8];
        serve(&mut session, -25.0, -300.0);
        session.update(DT);
        assert_eq!(session.scores(), (8, 9));
        assert_eq!(session.phase(), GamePhase::Active);
    }

    #[test]
    fn test_reset_keeps_phase() {
        let mut session = active_session();
        session.scores = [3, 4];
        session.keys_mut().set(Key::Player1Down, true);
        session.process_input(0.1);

        session.reset();

        assert_eq!(session.phase(), GamePhase::Active);
        assert_eq!(session.scores(), (0, 0));
        assert_eq!(session.paddle(Side::Left).body.position.y, 250.0);
    }

    #[test]
    fn test_particles_trail_the_ball() {
        let mut session = active_session();
        for _ in 0..10 {
            session.update(DT);
        }
        assert_eq!(session.particles().live_count(), 20);
    }

    #[test]
    fn test_render_draws_live_state() {
        let mut session = active_session();
        session.update(DT);

        let mut renderer = HeadlessRenderer::default();
        session.render(&mut renderer, 1.0);

        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.entities, 3);
        assert_eq!(renderer.particles, 2);
        assert_eq!(renderer.scores, (0, 0));
        assert!(renderer.banner.is_none());
    }

    #[test]
    fn test_render_menu_banner() {
        let session = GameSession::new(GameConfig::default());
        let mut renderer = HeadlessRenderer::default();
        session.render(&mut renderer, 0.0);
        assert_eq!(renderer.banner.as_deref(), Some("Press ENTER to start"));
    }
}
