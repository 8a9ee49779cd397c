use std::fmt;
use std::ops::{Deref, DerefMut};

/// The rules collaborator the search drives: move generation, make/unmake and
/// terminal detection. Implementors own the position; the search only borrows it.
pub trait Rules {
    type Move: Clone + PartialEq + fmt::Debug;
    type Side: Copy + Eq + fmt::Debug;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Defensive re-check of a single move against the current position.
    fn is_move_legal(&self, mv: &Self::Move) -> bool;

    fn apply_move(&mut self, mv: &Self::Move);

    /// Rewinds the most recent `apply_move`.
    fn undo_move(&mut self);

    fn is_checkmate(&self) -> bool;

    fn is_draw(&self) -> bool;

    fn side_to_move(&self) -> Self::Side;
}

/// A move applied for the lifetime of the guard. Dropping it undoes the move,
/// so every exit path out of a search node leaves the position as it found it.
pub struct Applied<'a, P: Rules> {
    position: &'a mut P,
}

impl<'a, P: Rules> Applied<'a, P> {
    pub fn new(position: &'a mut P, mv: &P::Move) -> Self {
        position.apply_move(mv);
        Self { position }
    }
}

impl<P: Rules> Deref for Applied<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Rules> DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Rules> Drop for Applied<'_, P> {
    fn drop(&mut self) {
        self.position.undo_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter game: a move adds its value, undo pops it.
    #[derive(Default)]
    struct Counter {
        total: i32,
        history: Vec<i32>,
    }

    impl Rules for Counter {
        type Move = i32;
        type Side = bool;

        fn legal_moves(&self) -> Vec<i32> {
            vec![1, 2, 3]
        }
        fn is_move_legal(&self, mv: &i32) -> bool {
            (1..=3).contains(mv)
        }
        fn apply_move(&mut self, mv: &i32) {
            self.total += mv;
            self.history.push(*mv);
        }
        fn undo_move(&mut self) {
            if let Some(mv) = self.history.pop() {
                self.total -= mv;
            }
        }
        fn is_checkmate(&self) -> bool {
            false
        }
        fn is_draw(&self) -> bool {
            false
        }
        fn side_to_move(&self) -> bool {
            self.history.len() % 2 == 0
        }
    }

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut counter = Counter::default();
        {
            let mut first = Applied::new(&mut counter, &2);
            assert_eq!(first.total, 2);
            let nested = Applied::new(&mut *first, &3);
            assert_eq!(nested.total, 5);
        }
        assert_eq!(counter.total, 0);
        assert!(counter.history.is_empty());
    }

    #[test]
    fn test_guard_undoes_on_early_return() {
        fn probe(counter: &mut Counter) -> Option<i32> {
            let applied = Applied::new(counter, &3);
            if applied.total > 2 {
                return Some(applied.total);
            }
            None
        }

        let mut counter = Counter::default();
        assert_eq!(probe(&mut counter), Some(3));
        assert_eq!(counter.total, 0);
    }

    #[test]
    fn test_guard_undoes_on_panic() {
        let mut counter = Counter::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _applied = Applied::new(&mut counter, &1);
            panic!("search blew up");
        }));
        assert!(result.is_err());
        assert_eq!(counter.total, 0);
    }
}
