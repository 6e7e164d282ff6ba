use std::collections::VecDeque;

/// Action différée exécutée par le moteur quand son échéance est atteinte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    LaunchRandom,
    GrandShow(usize),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: f64,
    action: ScheduledAction,
}

/// File de timers triée par échéance.
///
/// Deux actions de même échéance sortent dans leur ordre d'insertion ; elles
/// s'exécutent toujours l'une après l'autre, jamais en même temps.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: VecDeque<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, action: ScheduledAction) {
        let idx = self.queue.partition_point(|p| p.due_ms <= due_ms);
        self.queue.insert(idx, Pending { due_ms, action });
    }

    /// Retire la prochaine action dont l'échéance est `<= now_ms`, avec cette échéance.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, ScheduledAction)> {
        match self.queue.front() {
            Some(p) if p.due_ms <= now_ms => {
                self.queue.pop_front().map(|p| (p.due_ms, p.action))
            }
            _ => None,
        }
    }

    pub fn next_due(&self) -> Option<f64> {
        self.queue.front().map(|p| p.due_ms)
    }

    /// Échéances en attente, dans l'ordre où elles seront exécutées.
    pub fn due_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.queue.iter().map(|p| p.due_ms)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(300.0, ScheduledAction::GrandShow(3));
        s.schedule(100.0, ScheduledAction::LaunchRandom);
        s.schedule(200.0, ScheduledAction::GrandShow(2));

        assert_eq!(s.pop_due(50.0), None);
        assert_eq!(s.pop_due(250.0), Some((100.0, ScheduledAction::LaunchRandom)));
        assert_eq!(s.pop_due(250.0), Some((200.0, ScheduledAction::GrandShow(2))));
        assert_eq!(s.pop_due(250.0), None);
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop_due(300.0), Some((300.0, ScheduledAction::GrandShow(3))));
        assert!(s.is_empty());
    }

    #[test]
    fn test_equal_due_times_keep_insertion_order() {
        let mut s = Scheduler::new();
        s.schedule(10.0, ScheduledAction::GrandShow(1));
        s.schedule(10.0, ScheduledAction::GrandShow(2));
        s.schedule(10.0, ScheduledAction::GrandShow(3));

        let order: Vec<_> = std::iter::from_fn(|| s.pop_due(10.0))
            .map(|(_, action)| action)
            .collect();
        assert_eq!(
            order,
            vec![
                ScheduledAction::GrandShow(1),
                ScheduledAction::GrandShow(2),
                ScheduledAction::GrandShow(3)
            ]
        );
    }

    #[test]
    fn test_due_times_sorted() {
        let mut s = Scheduler::new();
        for due in [5.0, 1.0, 3.0, 2.0, 4.0] {
            s.schedule(due, ScheduledAction::LaunchRandom);
        }
        let times: Vec<f64> = s.due_times().collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        s.clear();
        assert!(s.is_empty());
    }
}
