use std::rc::Rc;
use yew::Reducible;

pub const AUTO_ADVANCE_MS: u32 = 6_000;
pub const LOCK_FALLBACK_MS: u32 = 1_000;

/// Transition lock. A transition carries the id it was started with so that
/// a late release from an earlier transition cannot unlock a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lock {
    Idle,
    Transitioning(u32),
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    /// Auto-advance timer fired.
    Tick,
    Release(u32),
}

/// Cyclic slide cursor over `len` slides with an explicit transition lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    lock: Lock,
    started: u32,
}

impl Carousel {
    /// An empty deck is treated as a single slide so the index stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            lock: Lock::Idle,
            started: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.lock, Lock::Transitioning(_))
    }

    pub fn transition_id(&self) -> Option<u32> {
        match self.lock {
            Lock::Idle => None,
            Lock::Transitioning(id) => Some(id),
        }
    }

    /// Controls are inert while a transition runs or when there is nothing to move to.
    pub fn controls_disabled(&self) -> bool {
        self.is_locked() || self.len == 1
    }

    pub fn next(&mut self) -> bool {
        self.go_to((self.index + 1) % self.len)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to((self.index + self.len - 1) % self.len)
    }

    pub fn go_to(&mut self, target: usize) -> bool {
        if self.is_locked() || target >= self.len || target == self.index {
            return false;
        }
        self.index = target;
        self.started = self.started.wrapping_add(1);
        self.lock = Lock::Transitioning(self.started);
        true
    }

    pub fn release(&mut self, id: u32) -> bool {
        if self.lock == Lock::Transitioning(id) {
            self.lock = Lock::Idle;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Next | CarouselAction::Tick => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(target) => self.go_to(target),
            CarouselAction::Release(id) => self.release(id),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(carousel: &mut Carousel) {
        if let Some(id) = carousel.transition_id() {
            assert!(carousel.release(id));
        }
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.prev());
        assert_eq!(carousel.index(), 2);
        settle(&mut carousel);
        assert!(carousel.next());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn auto_advance_cycles_through_every_slide() {
        let mut carousel = Carousel::new(3);
        let mut seen = vec![carousel.index()];
        for _ in 0..3 {
            assert!(carousel.apply(CarouselAction::Tick));
            seen.push(carousel.index());
            settle(&mut carousel);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn manual_next_then_tick_moves_on() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.apply(CarouselAction::Next));
        assert_eq!(carousel.index(), 1);
        settle(&mut carousel);
        assert!(carousel.apply(CarouselAction::Tick));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn lock_drops_inputs_until_released() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.next());
        assert!(carousel.is_locked());
        assert!(carousel.controls_disabled());

        assert!(!carousel.prev());
        assert!(!carousel.apply(CarouselAction::Tick));
        assert!(!carousel.go_to(2));
        assert_eq!(carousel.index(), 1);

        settle(&mut carousel);
        assert!(!carousel.is_locked());
        assert!(carousel.go_to(2));
    }

    #[test]
    fn stale_release_does_not_unlock_newer_transition() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.next());
        let first = carousel.transition_id().unwrap();
        assert!(carousel.release(first));

        assert!(carousel.next());
        assert!(!carousel.release(first));
        assert!(carousel.is_locked());
    }

    #[test]
    fn releasing_twice_is_harmless() {
        let mut carousel = Carousel::new(2);
        assert!(carousel.next());
        let id = carousel.transition_id().unwrap();
        assert!(carousel.release(id));
        assert!(!carousel.release(id));
    }

    #[test]
    fn go_to_current_or_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.go_to(0));
        assert!(!carousel.go_to(3));
        assert!(!carousel.is_locked());
    }

    #[test]
    fn single_slide_deck_is_inert() {
        let mut carousel = Carousel::new(1);
        assert!(carousel.controls_disabled());
        for action in [CarouselAction::Next, CarouselAction::Prev, CarouselAction::Tick, CarouselAction::GoTo(0)] {
            assert!(!carousel.apply(action));
        }
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_locked());
    }

    #[test]
    fn empty_deck_is_clamped_to_one_slide() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let mut carousel = Carousel::new(3);
        let script = [0usize, 1, 2, 3, 4, 0, 0, 2, 1, 4, 3, 3, 1, 0, 2];
        for (step, choice) in script.iter().enumerate() {
            let action = match choice {
                0 => CarouselAction::Next,
                1 => CarouselAction::Prev,
                2 => CarouselAction::Tick,
                3 => CarouselAction::GoTo(step % 5),
                _ => CarouselAction::Release(step as u32 % 4),
            };
            carousel.apply(action);
            assert!(carousel.index() < carousel.len());
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(Carousel::new(3));
        let same = state.clone().reduce(CarouselAction::GoTo(0));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(CarouselAction::Next);
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.index(), 1);
    }

    #[test]
    fn timings() {
        assert_eq!(AUTO_ADVANCE_MS, 6_000);
        assert_eq!(LOCK_FALLBACK_MS, 1_000);
    }
}
