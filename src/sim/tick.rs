//! Simulation ticks
//!
//! Two clocks drive a session:
//! - `control_tick` at `CONTROL_RATE_HZ`: input sampling, AI, drag and
//!   animation selection
//! - `frame_tick` once per rendered frame: integration, collisions,
//!   footprints, animation playback and the loss check

use super::actor::Actor;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::CONTACT_RADIUS;
use crate::platform::KeyboardState;

/// Whether `zombie` has caught `player`. Attacking players are immune.
pub fn player_caught(player: &Actor, zombie: &Actor) -> bool {
    !player.is_attacking() && zombie.center().distance(player.center()) < CONTACT_RADIUS
}

/// Advance the low-frequency control clock by one tick
pub fn control_tick(state: &mut GameState, keyboard: &KeyboardState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.control_ticks += 1;

    let target = state.player.body.pos;
    let cmd = state.player.controller.command(target, None, keyboard);
    if state.player.control(cmd) {
        log::debug!("Player {} attacks", state.player.id);
        state.events.push(GameEvent::AttackStarted {
            actor: state.player.id,
        });
    }

    for zombie in &mut state.zombies {
        let cmd = zombie.controller.command(zombie.body.pos, Some(target), keyboard);
        if zombie.control(cmd) {
            state.events.push(GameEvent::AttackStarted { actor: zombie.id });
        }
    }
}

/// Advance one rendered frame
pub fn frame_tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.frame_ticks += 1;

    let world = state.terrain.world_size();
    let GameState {
        rng,
        terrain,
        player,
        zombies,
        phase,
        events,
        ..
    } = state;

    for actor in std::iter::once(&mut *player).chain(zombies.iter_mut()) {
        let report = actor.update(world, terrain.props.as_slice(), &mut *rng);
        if let Some(pos) = report.footprint {
            events.push(GameEvent::FootprintLeft {
                actor: actor.id,
                pos,
            });
        }
        if report.newly_blocked {
            events.push(GameEvent::Blocked { actor: actor.id });
        }
        if report.attack_finished {
            log::debug!("Actor {} finished attacking", actor.id);
            events.push(GameEvent::AttackFinished { actor: actor.id });
        }
    }

    let player = &*player;
    if let Some(zombie) = zombies.iter().find(|z| player_caught(player, z)) {
        log::info!("Player caught by zombie {}", zombie.id);
        events.push(GameEvent::PlayerCaught { zombie: zombie.id });
        *phase = GamePhase::Caught;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::controller::Controller;
    use glam::Vec2;

    /// Session with the zombie parked at `offset` from the player
    fn duel(offset: Vec2) -> GameState {
        let mut state = GameState::new(2024, &Settings::default());
        let pos = state.player.body.pos + offset;
        state.zombies[0].body.pos = pos;
        state.zombies[0].controller = Controller::Drift(Vec2::ZERO);
        state
    }

    #[test]
    fn test_contact_ends_session() {
        let mut state = duel(Vec2::new(CONTACT_RADIUS - 1.0, 0.0));
        frame_tick(&mut state);
        assert_eq!(state.phase, GamePhase::Caught);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::PlayerCaught { zombie: 2 })
        );

        // Nothing advances once caught
        let ticks = state.frame_ticks;
        frame_tick(&mut state);
        control_tick(&mut state, &KeyboardState::default());
        assert_eq!(state.frame_ticks, ticks);
        assert_eq!(state.control_ticks, 0);
    }

    #[test]
    fn test_distance_outside_contact_radius_is_safe() {
        let mut state = duel(Vec2::new(CONTACT_RADIUS + 1.0, 0.0));
        frame_tick(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_attacking_player_is_immune() {
        let mut state = duel(Vec2::new(CONTACT_RADIUS + 4.0, 0.0));
        let attack = KeyboardState {
            attack: true,
            ..Default::default()
        };
        control_tick(&mut state, &attack);
        assert!(state.player.is_attacking());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::AttackStarted { actor: 1 }]
        );

        // Zombie closes in while the attack plays
        state.zombies[0].body.pos = state.player.body.pos + Vec2::new(5.0, 0.0);
        frame_tick(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!player_caught(&state.player, &state.zombies[0]));
    }

    #[test]
    fn test_chasing_zombie_closes_distance() {
        let mut state = GameState::new(77, &Settings::default());
        state.terrain.props = Default::default();
        let start = state.zombies[0].center().distance(state.player.center());

        let idle = KeyboardState::default();
        for _ in 0..5 {
            control_tick(&mut state, &idle);
            for _ in 0..6 {
                frame_tick(&mut state);
            }
        }
        let end = state.zombies[0].center().distance(state.player.center());
        assert!(end < start, "zombie should approach: {start} -> {end}");
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(4242, &Settings::default());
        let mut b = GameState::new(4242, &Settings::default());
        let inputs = [
            KeyboardState {
                right: true,
                ..Default::default()
            },
            KeyboardState {
                down: true,
                ..Default::default()
            },
            KeyboardState::default(),
        ];

        for input in inputs.iter().cycle().take(30) {
            control_tick(&mut a, input);
            control_tick(&mut b, input);
            for _ in 0..6 {
                frame_tick(&mut a);
                frame_tick(&mut b);
            }
        }

        assert_eq!(a.player.body.pos, b.player.body.pos);
        assert_eq!(a.zombies[0].body.pos, b.zombies[0].body.pos);
        assert_eq!(a.player.footprints.len(), b.player.footprints.len());
        assert_eq!(a.phase, b.phase);
    }
}
