/*
 * Unit tests for dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_init
 * - test_add_then_remove_clears_entry
 * - test_request_counts
 * - test_remove_absent_floor
 * - test_add_request_rejects_invalid_floor
 * - test_tie_goes_to_first_elevator_and_is_served
 * - test_request_routed_to_cheapest_elevator
 * - test_duplicate_calls_retired_together
 * - test_stop_queued_on_car_retires_one_call
 * - test_step_unknown_elevator
 * - test_concurrent_requests_are_all_recorded
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::dispatcher::Dispatcher;
    use crate::shared::Direction::Up;
    use crate::shared::{DispatchError, StepOutcome};
    use std::sync::Arc;
    use std::thread::Builder;

    fn setup_dispatcher() -> Dispatcher {
        // Default building: 6 floors, 2 elevators
        Dispatcher::new(6, 2)
    }

    #[test]
    fn test_dispatcher_init() {
        // Purpose: Verify that the roster and table are set up as configured

        // Arrange & Act
        let dispatcher = setup_dispatcher();

        // Assert
        assert_eq!(dispatcher.n_floors(), 6);
        assert_eq!(dispatcher.elevators().len(), 2);
        assert!(dispatcher.snapshot_requests().is_empty());

        let snapshots = dispatcher.snapshot_elevators();
        assert_eq!(snapshots.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        for snapshot in snapshots {
            assert_eq!(snapshot.floor, 1);
            assert_eq!(snapshot.direction, Up);
            assert!(snapshot.stops.is_empty());
        }
    }

    #[test]
    fn test_add_then_remove_clears_entry() {
        // Arrange
        let dispatcher = setup_dispatcher();

        // Act
        dispatcher.add_request(3).unwrap();
        dispatcher.remove_request(3);

        // Assert
        assert!(!dispatcher.snapshot_requests().contains_key(&3));
    }

    #[test]
    fn test_request_counts() {
        // Purpose: Verify that calls are counted and entries never linger at zero

        // Arrange
        let dispatcher = setup_dispatcher();

        // Act & Assert
        dispatcher.add_request(5).unwrap();
        dispatcher.add_request(5).unwrap();
        assert_eq!(dispatcher.snapshot_requests().get(&5), Some(&2));

        dispatcher.remove_request(5);
        assert_eq!(dispatcher.snapshot_requests().get(&5), Some(&1));

        dispatcher.remove_request(5);
        assert_eq!(dispatcher.snapshot_requests().get(&5), None);
    }

    #[test]
    fn test_remove_absent_floor() {
        // Arrange
        let dispatcher = setup_dispatcher();
        dispatcher.add_request(2).unwrap();

        // Act
        dispatcher.remove_request(4);

        // Assert
        let requests = dispatcher.snapshot_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests.get(&2), Some(&1));
    }

    #[test]
    fn test_add_request_rejects_invalid_floor() {
        // Purpose: Verify that out-of-range floors are refused and leave no trace

        // Arrange
        let dispatcher = setup_dispatcher();

        // Act
        let below = dispatcher.add_request(0);
        let above = dispatcher.add_request(7);

        // Assert
        assert_eq!(below, Err(DispatchError::InvalidFloor { floor: 0, n_floors: 6 }));
        assert_eq!(above, Err(DispatchError::InvalidFloor { floor: 7, n_floors: 6 }));
        assert!(dispatcher.snapshot_requests().is_empty());
        assert!(dispatcher.snapshot_elevators().iter().all(|s| s.stops.is_empty()));
    }

    #[test]
    fn test_tie_goes_to_first_elevator_and_is_served() {
        // Purpose: Both cars cost 3 for floor 4, the first one in the roster takes it

        // Arrange
        let dispatcher = setup_dispatcher();
        let first = dispatcher.elevator(1).unwrap();
        let second = dispatcher.elevator(2).unwrap();
        assert_eq!(first.calculate_cost(4), 3);
        assert_eq!(second.calculate_cost(4), 3);

        // Act
        let chosen = dispatcher.add_request(4).unwrap();
        let outcomes: Vec<StepOutcome> =
            (0..3).map(|_| dispatcher.step_elevator(chosen).unwrap()).collect();

        // Assert
        assert_eq!(chosen, 1);
        assert_eq!(
            outcomes,
            vec![StepOutcome::Moved(2), StepOutcome::Moved(3), StepOutcome::Serviced(4)]
        );
        assert_eq!(dispatcher.elevator(1).unwrap().floor(), 4);
        assert_eq!(dispatcher.elevator(2).unwrap().floor(), 1);
        assert!(!dispatcher.snapshot_requests().contains_key(&4));
    }

    #[test]
    fn test_request_routed_to_cheapest_elevator() {
        // Purpose: A car heading away from the call loses to an idle car close by

        // Arrange
        let dispatcher = setup_dispatcher();
        assert_eq!(dispatcher.add_request(6).unwrap(), 1);
        dispatcher.step_elevator(1).unwrap();
        dispatcher.step_elevator(1).unwrap();

        // Act
        // Elevator 1: |3 - 2| + 2 = 3, elevator 2: |1 - 2| = 1
        let chosen = dispatcher.add_request(2).unwrap();

        // Assert
        assert_eq!(chosen, 2);
        assert_eq!(dispatcher.elevator(1).unwrap().pending_stops(), vec![6]);
        assert_eq!(dispatcher.elevator(2).unwrap().pending_stops(), vec![2]);
    }

    #[test]
    fn test_duplicate_calls_retired_together() {
        // Purpose: Two calls merged into one stop are both retired when the stop is serviced

        // Arrange
        let dispatcher = setup_dispatcher();
        assert_eq!(dispatcher.add_request(3).unwrap(), 1);
        assert_eq!(dispatcher.add_request(3).unwrap(), 1);
        assert_eq!(dispatcher.elevator(1).unwrap().pending_stops(), vec![3]);
        assert_eq!(dispatcher.snapshot_requests().get(&3), Some(&2));

        // Act
        dispatcher.step_elevator(1).unwrap();
        let outcome = dispatcher.step_elevator(1).unwrap();

        // Assert
        assert_eq!(outcome, StepOutcome::Serviced(3));
        assert!(dispatcher.snapshot_requests().is_empty());
    }

    #[test]
    fn test_stop_queued_on_car_retires_one_call() {
        // Arrange
        let dispatcher = setup_dispatcher();
        dispatcher.add_request(2).unwrap();
        dispatcher.add_request(2).unwrap();
        dispatcher.elevator(2).unwrap().add_stop(2).unwrap();

        // Act
        let outcome = dispatcher.step_elevator(2).unwrap();

        // Assert
        assert_eq!(outcome, StepOutcome::Serviced(2));
        assert_eq!(dispatcher.snapshot_requests().get(&2), Some(&1));
    }

    #[test]
    fn test_step_unknown_elevator() {
        // Arrange
        let dispatcher = setup_dispatcher();

        // Act
        let result = dispatcher.step_elevator(9);

        // Assert
        assert_eq!(result, Err(DispatchError::UnknownElevator(9)));
    }

    #[test]
    fn test_concurrent_requests_are_all_recorded() {
        // Purpose: Verify that no call is lost when several threads submit at once

        // Arrange
        let dispatcher = Arc::new(Dispatcher::new(10, 3));
        let n_threads = 4;
        let per_thread = 50;

        // Act
        let handles: Vec<_> = (0..n_threads)
            .map(|t| {
                let dispatcher = dispatcher.clone();
                Builder::new()
                    .name(format!("submitter_{}", t))
                    .spawn(move || {
                        for i in 0..per_thread {
                            let floor = ((t * per_thread + i) % 10 + 1) as u8;
                            dispatcher.add_request(floor).unwrap();
                        }
                    })
                    .unwrap()
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Assert
        let requests = dispatcher.snapshot_requests();
        assert_eq!(requests.values().sum::<u32>(), (n_threads * per_thread) as u32);
        assert_eq!(requests.len(), 10);
        for floor in 1..=10u8 {
            let assigned = dispatcher
                .snapshot_elevators()
                .iter()
                .any(|s| s.stops.contains(&floor));
            assert!(assigned, "floor {} was never assigned", floor);
        }
    }
}
