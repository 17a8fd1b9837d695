//! # Resolver Properties at Batch Scale
//!
//! Seeded workloads from [`crate::workloads`] pushed through the public
//! API, checking the guarantees every resolution must keep.

#[cfg(test)]
mod tests {
    use pe_01_order_resolution::domain::invariants::{
        invariant_completeness, invariant_no_cycles, invariant_topological_order,
    };
    use pe_01_order_resolution::{
        build_induced_graph, resolve_order, OrderResolutionApi, OrderResolutionService,
        OrderingError, ResolverConfig,
    };
    use proptest::prelude::*;

    use crate::workloads::{generate, plant_cycle, WorkloadSpec};

    fn sorted(items: &[i64]) -> Vec<i64> {
        let mut items = items.to_vec();
        items.sort_unstable();
        items
    }

    #[test]
    fn test_workload_orders_are_topological_permutations() {
        let workload = generate(WorkloadSpec::default());

        for update in &workload.updates {
            let graph = build_induced_graph(update, &workload.rules);
            let resolution = resolve_order(update, &workload.rules);

            assert!(invariant_no_cycles(&graph));
            assert!(!resolution.is_cyclic());
            assert_eq!(sorted(&resolution.order), sorted(update));
            assert!(invariant_completeness(&resolution.order, &graph));
            assert!(invariant_topological_order(&resolution.order, &graph));
        }
    }

    #[test]
    fn test_batch_counts_add_up() {
        let workload = generate(WorkloadSpec::default());

        let report = OrderResolutionService::new()
            .resolve_batch(&workload.rules, &workload.updates)
            .unwrap();

        assert_eq!(report.total(), workload.updates.len());
        assert_eq!(
            report.valid_count + report.repaired_count,
            workload.updates.len()
        );
        assert!(report.cyclic_updates.is_empty());
    }

    #[test]
    fn test_planted_cycle_is_isolated() {
        let mut workload = generate(WorkloadSpec {
            updates: 20,
            ..Default::default()
        });
        let baseline = OrderResolutionService::new()
            .resolve_batch(&workload.rules, &workload.updates[1..])
            .unwrap();

        // Items of update 0 occur in other updates too, so isolate them
        let mut cyclic_update: Vec<i64> = workload.updates[0].clone();
        cyclic_update.truncate(2);
        for item in cyclic_update.iter_mut() {
            *item += 1_000_000;
        }
        plant_cycle(&mut workload.rules, &cyclic_update);
        workload.updates[0] = cyclic_update;

        let report = OrderResolutionService::new()
            .resolve_batch(&workload.rules, &workload.updates)
            .unwrap();

        assert_eq!(report.cyclic_updates, vec![0]);
        assert_eq!(report.valid_middle_sum, baseline.valid_middle_sum);
        assert_eq!(report.repaired_middle_sum, baseline.repaired_middle_sum);
    }

    #[test]
    fn test_planted_cycle_strict_policy() {
        let mut workload = generate(WorkloadSpec {
            updates: 10,
            ..Default::default()
        });
        let target = workload.updates[3].clone();
        plant_cycle(&mut workload.rules, &target);

        let service =
            OrderResolutionService::with_config(ResolverConfig::default().with_strict_cycles(true));
        let err = service
            .resolve_batch(&workload.rules, &workload.updates)
            .unwrap_err();

        match err {
            OrderingError::CyclicUpdates { indices } => assert!(indices.contains(&3)),
            other => panic!("expected cyclic updates, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn repairing_is_idempotent(seed in any::<u64>()) {
            let workload = generate(WorkloadSpec {
                seed,
                items: 30,
                rules: 120,
                updates: 8,
                update_len: 9,
            });

            for update in &workload.updates {
                let first = resolve_order(update, &workload.rules);
                let second = resolve_order(&first.order, &workload.rules);

                prop_assert!(second.is_valid());
                prop_assert_eq!(&second.order, &first.order);
            }
        }

        #[test]
        fn valid_updates_resolve_to_themselves(seed in any::<u64>()) {
            let workload = generate(WorkloadSpec {
                seed,
                items: 20,
                rules: 60,
                updates: 8,
                update_len: 7,
            });

            for update in &workload.updates {
                let resolution = resolve_order(update, &workload.rules);
                if resolution.is_valid() {
                    prop_assert_eq!(&resolution.order, update);
                }
            }
        }
    }
}
