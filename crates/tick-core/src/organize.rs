//! Display ordering for the task list.

use crate::models::Task;

/// Orders tasks for display.
///
/// Pending tasks come first, grouped high, medium, then low (unrecognized
/// priorities count as low). Done tasks follow. The sort is stable, so tasks
/// keep their input order inside each group, and done tasks are not
/// regrouped by priority.
pub fn organize(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(sort_key);
    tasks
}

fn sort_key(task: &Task) -> (u8, u8) {
    if task.done {
        (1, 0)
    } else {
        (0, task.priority.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::Utc;
    use proptest::prelude::*;

    fn task(id: i64, done: bool, priority: Priority) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            done,
            created_at: Utc::now(),
            priority,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(organize(Vec::new()).is_empty());
    }

    #[test]
    fn pending_by_priority_then_done() {
        let tasks = vec![
            task(1, false, Priority::Low),
            task(2, true, Priority::High),
            task(3, false, Priority::High),
            task(4, false, Priority::Medium),
        ];
        assert_eq!(ids(&organize(tasks)), vec![3, 4, 1, 2]);
    }

    #[test]
    fn unrecognized_priority_sorts_with_low() {
        let tasks = vec![
            task(1, false, Priority::Unrecognized("Z".into())),
            task(2, false, Priority::Low),
            task(3, false, Priority::Medium),
            task(4, false, Priority::Unrecognized(String::new())),
        ];
        assert_eq!(ids(&organize(tasks)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn done_tasks_keep_input_order_regardless_of_priority() {
        let tasks = vec![
            task(1, true, Priority::Low),
            task(2, true, Priority::High),
            task(3, false, Priority::Low),
            task(4, true, Priority::Medium),
        ];
        assert_eq!(ids(&organize(tasks)), vec![3, 1, 2, 4]);
    }

    fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::High),
            Just(Priority::Medium),
            Just(Priority::Low),
            "[a-z]{0,2}".prop_map(Priority::Unrecognized),
        ]
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        proptest::collection::vec((any::<bool>(), arb_priority()), 0..40).prop_map(|rows| {
            rows
                .into_iter()
                .enumerate()
                .map(|(i, (done, priority))| task(i as i64, done, priority))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn output_is_a_permutation(tasks in arb_tasks()) {
            let mut before = ids(&tasks);
            let mut after = ids(&organize(tasks));
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn no_pending_task_after_a_done_task(tasks in arb_tasks()) {
            let out = organize(tasks);
            let first_done = out.iter().position(|t| t.done).unwrap_or(out.len());
            prop_assert!(out[first_done..].iter().all(|t| t.done));
        }

        #[test]
        fn pending_ranks_never_decrease(tasks in arb_tasks()) {
            let out = organize(tasks);
            let ranks: Vec<u8> = out.iter().filter(|t| !t.done).map(|t| t.priority.rank()).collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn equal_keys_keep_relative_order(tasks in arb_tasks()) {
            // ids are assigned in input order, so stability means ids increase
            // within every group.
            let out = organize(tasks);
            for (i, a) in out.iter().enumerate() {
                for b in &out[i + 1..] {
                    if sort_key(a) == sort_key(b) {
                        prop_assert!(a.id < b.id);
                    }
                }
            }
        }
    }
}
