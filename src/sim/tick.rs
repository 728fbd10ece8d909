//! Fixed timestep simulation tick
//!
//! One tick applies the queued input to the player, then advances every
//! object. Input only ever mutates velocities, so its effect is read by the
//! step that follows in the same tick.

use super::state::Universe;
use super::topology::Topology;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn counter-clockwise
    pub left: bool,
    /// Turn clockwise
    pub right: bool,
    /// Thrust along the ship's heading
    pub forward: bool,
    /// Thrust against the ship's heading
    pub reverse: bool,
    /// Switch boundary topology; a changed value replaces the universe
    pub set_topology: Option<Topology>,
    /// Rebuild the universe with the current topology
    pub reset: bool,
}

/// Advance the universe by one fixed timestep
pub fn tick(universe: &mut Universe, input: &TickInput, dt: f32) {
    // A topology change or reset replaces the universe wholesale; nothing
    // carries over from the old one.
    if let Some(topology) = input.set_topology {
        if topology != universe.topology {
            log::info!("Topology changed to {}, resetting", topology.as_str());
            *universe = Universe::new(topology);
            return;
        }
    }
    if input.reset {
        log::info!("Universe reset ({})", universe.topology.as_str());
        *universe = Universe::new(universe.topology);
        return;
    }

    if input.left {
        universe.player.left();
    }
    if input.right {
        universe.player.right();
    }
    if input.forward {
        universe.player.forward();
    }
    if input.reverse {
        universe.player.reverse();
    }

    universe.step(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;

    #[test]
    fn test_forward_input_moves_player_same_tick() {
        let mut universe = Universe::new(Topology::Plane);
        let start = universe.player.body.position();

        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        tick(&mut universe, &input, SIM_DT);

        let moved = universe.player.body.position() - start;
        assert!(moved.length() > 0.0);
        // Default heading is local +x
        assert!((moved - Vec2::new(0.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_idle_input_still_steps_balls() {
        let mut universe = Universe::new(Topology::Torus);
        let start = universe.balls[0].body.position();

        tick(&mut universe, &TickInput::default(), SIM_DT);

        let moved = universe.balls[0].body.position() - start;
        assert!((moved - Vec2::new(0.2, 0.3)).length() < 1e-4);
        assert_eq!(universe.time_ticks, 1);
    }

    #[test]
    fn test_topology_change_resets_universe() {
        let mut universe = Universe::new(Topology::Torus);
        for _ in 0..10 {
            tick(&mut universe, &TickInput::default(), SIM_DT);
        }
        assert_eq!(universe.time_ticks, 10);

        let input = TickInput {
            set_topology: Some(Topology::Sphere),
            ..Default::default()
        };
        tick(&mut universe, &input, SIM_DT);

        assert_eq!(universe.topology, Topology::Sphere);
        assert_eq!(universe.time_ticks, 0);
        assert_eq!(universe, Universe::new(Topology::Sphere));
    }

    #[test]
    fn test_same_topology_is_not_a_change() {
        let mut universe = Universe::new(Topology::Torus);
        tick(&mut universe, &TickInput::default(), SIM_DT);

        let input = TickInput {
            set_topology: Some(Topology::Torus),
            ..Default::default()
        };
        tick(&mut universe, &input, SIM_DT);
        // No reset: time kept accumulating
        assert_eq!(universe.time_ticks, 2);
    }

    #[test]
    fn test_reset_keeps_topology() {
        let mut universe = Universe::new(Topology::Klein);
        for _ in 0..5 {
            tick(&mut universe, &TickInput::default(), SIM_DT);
        }

        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut universe, &input, SIM_DT);

        assert_eq!(universe.topology, Topology::Klein);
        assert_eq!(universe, Universe::new(Topology::Klein));
    }

    #[test]
    fn test_determinism() {
        let mut a = Universe::scatter(Topology::ProjPlane, 7, 5);
        let mut b = Universe::scatter(Topology::ProjPlane, 7, 5);

        let inputs = [
            TickInput {
                forward: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                forward: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for input in &inputs {
            for _ in 0..100 {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }
        assert_eq!(a, b);
    }
}
