//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec2::new(10.0, 0.0).normalized().unwrap();
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Vec2::ZERO.normalized().is_none());
        assert!(Vec2::ZERO.scaled_to(3.0).is_none());
    }

    #[test]
    fn scaled_to_magnitude() {
        let v = Vec2::new(0.0, -2.0).scaled_to(5.0).unwrap();
        assert_eq!(v, Vec2::new(0.0, -5.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod health {
    use crate::{InfectionStatus, StatusTally};

    #[test]
    fn terminal_states() {
        assert!(!InfectionStatus::Susceptible.is_terminal());
        assert!(!InfectionStatus::Infected.is_terminal());
        assert!(InfectionStatus::Recovered.is_terminal());
        assert!(InfectionStatus::Removed.is_terminal());
    }

    #[test]
    fn render_colors_distinct() {
        let colors: Vec<_> = InfectionStatus::ALL.iter().map(|s| s.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(InfectionStatus::Susceptible.to_string(), "susceptible");
        assert_eq!(InfectionStatus::Removed.to_string(), "removed");
    }

    #[test]
    fn tally_counts_and_total() {
        use InfectionStatus::*;
        let statuses = [Susceptible, Infected, Infected, Recovered, Removed, Susceptible];
        let tally = StatusTally::from_statuses(&statuses);
        assert_eq!(tally.susceptible, 2);
        assert_eq!(tally.infected, 2);
        assert_eq!(tally.recovered, 1);
        assert_eq!(tally.removed, 1);
        assert_eq!(tally.total(), statuses.len());
        assert_eq!(tally.count(Infected), 2);
    }

    #[test]
    fn empty_tally() {
        let tally = StatusTally::from_statuses(&[]);
        assert_eq!(tally, StatusTally::default());
        assert_eq!(tally.total(), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b: Vec<u32> = (0..32).collect();
        SimRng::new(7).shuffle(&mut a);
        SimRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut v: Vec<u32> = (0..32).collect();
        SimRng::new(99).shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::ModelConfig;

    #[test]
    fn defaults_are_valid() {
        assert!(ModelConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_dimensions() {
        let cfg = ModelConfig { width: 0.0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { height: -5.0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        let cfg = ModelConfig { infection_rate: 1.5, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { mortality_rate: -0.1, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { recovery_rate: f64::NAN, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_radii() {
        let cfg = ModelConfig { vision: -1.0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { separation: -0.5, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_separation_wider_than_vision() {
        let cfg = ModelConfig { vision: 2.0, separation: 3.0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let cfg = ModelConfig { infection_rate: 2.0, ..ModelConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("infection_rate"), "got: {msg}");
    }
}
