//! Unit tests for flock-agent storage.

#[cfg(test)]
mod store {
    use flock_core::{AgentId, InfectionStatus, Vec2};

    use crate::{AgentStoreBuilder, BoidParams};

    #[test]
    fn builder_allocates_all_arrays() {
        let (store, rngs) = AgentStoreBuilder::new(10, 42).build();
        assert_eq!(store.count, 10);
        assert_eq!(store.velocity.len(), 10);
        assert_eq!(store.status.len(), 10);
        assert_eq!(store.age.len(), 10);
        assert_eq!(store.params.len(), 10);
        assert_eq!(rngs.len(), 10);
    }

    #[test]
    fn agents_start_susceptible_at_rest() {
        let (store, _) = AgentStoreBuilder::new(3, 0).build();
        assert!(store.status.iter().all(|&s| s == InfectionStatus::Susceptible));
        assert!(store.velocity.iter().all(|&v| v == Vec2::ZERO));
        assert!(store.age.iter().all(|&a| a == 0));
    }

    #[test]
    fn params_stamped_onto_every_agent() {
        let params = BoidParams { vision: 25.0, ..BoidParams::default() };
        let (store, _) = AgentStoreBuilder::new(4, 0).params(params).build();
        assert!(store.params.iter().all(|p| p.vision == 25.0));
    }

    #[test]
    fn agent_ids_ascend() {
        let (store, _) = AgentStoreBuilder::new(3, 0).build();
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn empty_store() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
        assert_eq!(store.status_tally().total(), 0);
    }

    #[test]
    fn tally_reflects_status_edits() {
        let (mut store, _) = AgentStoreBuilder::new(5, 0).build();
        store.status[3] = InfectionStatus::Infected;
        store.status[4] = InfectionStatus::Infected;
        let tally = store.status_tally();
        assert_eq!(tally.susceptible, 3);
        assert_eq!(tally.infected, 2);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn per_agent_rngs_are_independent_streams() {
        let (_, mut rngs) = AgentStoreBuilder::new(2, 9).build();
        let a: u64 = rngs.get_mut(AgentId(0)).random();
        let b: u64 = rngs.get_mut(AgentId(1)).random();
        assert_ne!(a, b);
    }
}
