use std::{sync::Arc, time::Duration};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("Role list must contain at least one role")]
    EmptyRoleList,
}

/// Ordered, immutable list of roles cycled by the typewriter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct RoleList(Arc<[String]>);

impl RoleList {
    pub fn new<I, S>(roles: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles.into_iter().map(Into::into).collect::<Arc<[String]>>();
        if roles.is_empty() {
            return Err(TypewriterError::EmptyRoleList);
        }
        Ok(Self(roles))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // never empty, kept for clippy's len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl TryFrom<Vec<String>> for RoleList {
    type Error = TypewriterError;

    fn try_from(roles: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(roles)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(110),
            delete_speed: Duration::from_millis(40),
            pause: Duration::from_millis(900),
        }
    }
}

/// State of the role typing animation.
///
/// Every tick is one timer firing. [`Typewriter::delay`] is how long to wait
/// before the next tick and [`Typewriter::tick`] is the state after it fires,
/// so a driver only has to schedule `delay()` and then replace the state with
/// `tick()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    roles: RoleList,
    timing: Timing,
    role_index: usize,
    sub_index: usize,
    is_deleting: bool,
}

impl Typewriter {
    pub fn new(roles: RoleList, timing: Timing) -> Self {
        Self {
            roles,
            timing,
            role_index: 0,
            sub_index: 0,
            is_deleting: false,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn current_role(&self) -> &str {
        self.roles.get(self.role_index)
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// Prefix of the current role that is visible, `sub_index` characters long.
    pub fn displayed_text(&self) -> &str {
        let role = self.current_role();
        match role.char_indices().nth(self.sub_index) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    fn is_holding(&self) -> bool {
        !self.is_deleting && self.sub_index == self.role_len() + 1
    }

    fn is_wrapping(&self) -> bool {
        self.is_deleting && self.sub_index == 0
    }

    /// Time until the next tick should fire.
    pub fn delay(&self) -> Duration {
        if self.is_holding() {
            self.timing.pause
        } else if self.is_wrapping() {
            Duration::ZERO
        } else if self.is_deleting {
            self.timing.delete_speed
        } else {
            self.timing.type_speed
        }
    }

    /// State after the pending tick fires.
    pub fn tick(&self) -> Self {
        let mut next = self.clone();
        if self.is_holding() {
            next.is_deleting = true;
        } else if self.is_wrapping() {
            next.is_deleting = false;
            next.role_index = (self.role_index + 1) % self.roles.len();
        } else if self.is_deleting {
            next.sub_index -= 1;
        } else {
            next.sub_index += 1;
        }
        next
    }

    /// Fires the pending tick, returning the new state and its own delay.
    pub fn step(&self) -> (Self, Duration) {
        let next = self.tick();
        let delay = next.delay();
        (next, delay)
    }
}

/// One-shot timer source for [`TypewriterDriver`].
pub trait Scheduler {
    type Handle;

    /// Arms a timer that fires once after `delay`. `None` if it couldn't be set.
    fn schedule(&mut self, delay: Duration) -> Option<Self::Handle>;

    fn clear(&mut self, handle: Self::Handle);
}

/// Runs a [`Typewriter`] on a [`Scheduler`] with at most one tick pending.
///
/// Any pending timer is cleared before the next one is armed, and once
/// [`stop`](Self::stop) has been called further firings are ignored.
pub struct TypewriterDriver<S: Scheduler> {
    state: Typewriter,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> TypewriterDriver<S> {
    pub fn new(state: Typewriter, scheduler: S) -> Self {
        Self {
            state,
            scheduler,
            pending: None,
        }
    }

    pub fn state(&self) -> &Typewriter {
        &self.state
    }

    /// Arms the next tick, replacing one that is already pending.
    pub fn start(&mut self) {
        self.stop();
        self.pending = self.scheduler.schedule(self.state.delay());
    }

    /// Applies the pending tick and arms the one after it.
    pub fn fire(&mut self) -> Option<&Typewriter> {
        self.pending.as_ref()?;
        self.state = self.state.tick();
        self.start();
        Some(&self.state)
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.clear(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(roles: &[&str]) -> Typewriter {
        Typewriter::new(
            RoleList::new(roles.iter().copied()).expect("roles should be valid"),
            Timing::default(),
        )
    }

    #[test]
    fn test_empty_role_list_rejected() {
        let res = RoleList::new(Vec::<String>::new());
        assert_eq!(res, Err(TypewriterError::EmptyRoleList));
    }

    #[test]
    fn test_single_role_walk() {
        let timing = Timing::default();
        let tw = writer(&["AB"]);
        assert_eq!(tw.delay(), timing.type_speed);
        assert_eq!(tw.displayed_text(), "");

        let (tw, delay) = tw.step();
        assert_eq!(tw.sub_index(), 1);
        assert_eq!(tw.displayed_text(), "A");
        assert_eq!(delay, timing.type_speed);

        let (tw, _) = tw.step();
        assert_eq!(tw.sub_index(), 2);
        assert_eq!(tw.displayed_text(), "AB");

        // holding at full length for the pause
        let (tw, delay) = tw.step();
        assert_eq!(tw.sub_index(), 3);
        assert_eq!(tw.displayed_text(), "AB");
        assert!(!tw.is_deleting());
        assert_eq!(delay, timing.pause);

        let (tw, delay) = tw.step();
        assert!(tw.is_deleting());
        assert_eq!(tw.sub_index(), 3);
        assert_eq!(delay, timing.delete_speed);

        let (tw, _) = tw.step();
        assert_eq!(tw.sub_index(), 2);
        assert_eq!(tw.displayed_text(), "AB");
        let (tw, _) = tw.step();
        assert_eq!(tw.displayed_text(), "A");
        let (tw, delay) = tw.step();
        assert_eq!(tw.sub_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(delay, Duration::ZERO);

        // wrap back onto the only role and start typing again
        let (tw, delay) = tw.step();
        assert_eq!(tw.role_index(), 0);
        assert!(!tw.is_deleting());
        assert_eq!(tw.sub_index(), 0);
        assert_eq!(delay, timing.type_speed);

        let (tw, _) = tw.step();
        assert_eq!(tw.displayed_text(), "A");
    }

    #[test]
    fn test_round_robin_over_roles() {
        let roles = ["Business Analyst", "Data Analyst", "Agile BA"];
        let mut tw = writer(&roles);
        let mut visited = vec![tw.role_index()];
        // enough ticks for every role to be typed and deleted twice
        for _ in 0..200 {
            let prev = tw.role_index();
            tw = tw.tick();
            if tw.role_index() != prev {
                assert_eq!(tw.role_index(), (prev + 1) % roles.len());
                visited.push(tw.role_index());
            }
        }
        assert!(visited.len() > roles.len());
        assert_eq!(&visited[..4], &[0, 1, 2, 0]);
    }

    #[test]
    fn test_prefix_invariant_every_tick() {
        let mut tw = writer(&["Risk Analyst", "BA", "Développeur"]);
        for _ in 0..300 {
            let role = tw.current_role();
            let shown = tw.displayed_text();
            assert!(role.starts_with(shown));
            assert!(shown.chars().count() <= role.chars().count());
            assert!(tw.sub_index() <= role.chars().count() + 1);
            tw = tw.tick();
        }
    }

    #[test]
    fn test_multibyte_prefix_on_char_boundary() {
        let mut tw = writer(&["héllo"]);
        for _ in 0..2 {
            tw = tw.tick();
        }
        assert_eq!(tw.displayed_text(), "hé");
    }

    #[test]
    fn test_custom_timing() {
        let timing = Timing {
            type_speed: Duration::from_millis(5),
            delete_speed: Duration::from_millis(1),
            pause: Duration::from_millis(50),
        };
        let roles = RoleList::new(["x"]).expect("roles should be valid");
        let tw = Typewriter::new(roles, timing);
        let (tw, _) = tw.step();
        let (tw, delay) = tw.step();
        assert_eq!(tw.sub_index(), 2);
        assert_eq!(delay, Duration::from_millis(50));
    }

    #[derive(Debug, PartialEq, Eq)]
    enum TimerEvent {
        Armed(u32, Duration),
        Cleared(u32),
    }

    #[derive(Default)]
    struct FakeTimers {
        next_id: u32,
        live: Vec<u32>,
        events: Vec<TimerEvent>,
    }

    impl Scheduler for FakeTimers {
        type Handle = u32;

        fn schedule(&mut self, delay: Duration) -> Option<u32> {
            self.next_id += 1;
            self.live.push(self.next_id);
            self.events.push(TimerEvent::Armed(self.next_id, delay));
            Some(self.next_id)
        }

        fn clear(&mut self, handle: u32) {
            self.live.retain(|&id| id != handle);
            self.events.push(TimerEvent::Cleared(handle));
        }
    }

    fn driver(roles: &[&str]) -> TypewriterDriver<FakeTimers> {
        TypewriterDriver::new(writer(roles), FakeTimers::default())
    }

    #[test]
    fn test_driver_keeps_one_timer_pending() {
        let mut driver = driver(&["AB", "C"]);
        driver.start();
        for _ in 0..40 {
            assert_eq!(driver.scheduler.live.len(), 1);
            assert!(driver.fire().is_some());
        }
        assert_eq!(driver.scheduler.live.len(), 1);
    }

    #[test]
    fn test_driver_clears_before_rearming() {
        let timing = Timing::default();
        let mut driver = driver(&["AB"]);
        driver.start();
        driver.fire();
        // remount while a tick is pending
        driver.start();
        assert_eq!(
            driver.scheduler.events,
            vec![
                TimerEvent::Armed(1, timing.type_speed),
                TimerEvent::Cleared(1),
                TimerEvent::Armed(2, timing.type_speed),
                TimerEvent::Cleared(2),
                TimerEvent::Armed(3, timing.type_speed),
            ]
        );
        assert_eq!(driver.scheduler.live, vec![3]);
        assert_eq!(driver.state().displayed_text(), "A");
    }

    #[test]
    fn test_driver_stop_clears_and_ignores_late_fire() {
        let mut driver = driver(&["AB"]);
        driver.start();
        driver.fire();
        driver.stop();
        assert_eq!(driver.pending, None);
        assert!(driver.scheduler.live.is_empty());
        assert_eq!(driver.scheduler.events.last(), Some(&TimerEvent::Cleared(2)));

        let before = driver.state().clone();
        let armed = driver.scheduler.next_id;
        assert!(driver.fire().is_none());
        assert_eq!(driver.state(), &before);
        assert_eq!(driver.scheduler.next_id, armed);
    }

    #[test]
    fn test_driver_schedules_state_delay() {
        let timing = Timing::default();
        let mut driver = driver(&["A"]);
        driver.start();
        driver.fire();
        driver.fire();
        // "A" fully typed, holding for the pause
        assert_eq!(
            driver.scheduler.events.last(),
            Some(&TimerEvent::Armed(3, timing.pause))
        );
    }
}
