use std::time::{Duration, Instant};

/// A single cancellable deadline carrying a payload.
///
/// Re-arming replaces the previous deadline and payload, so only the most
/// recently armed timer can ever fire.
#[derive(Debug)]
pub(crate) struct Timer<T> {
	pending: Option<(Instant, T)>,
}

impl<T> Default for Timer<T> {
	fn default() -> Self {
		Self { pending: None }
	}
}

impl<T> Timer<T> {
	pub(crate) fn arm(&mut self, now: Instant, delay: Duration, payload: T) {
		self.pending = Some((now + delay, payload));
	}

	pub(crate) fn cancel(&mut self) {
		self.pending = None;
	}

	pub(crate) fn is_armed(&self) -> bool {
		self.pending.is_some()
	}

	pub(crate) fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(deadline, _)| *deadline)
	}

	/// Take the payload if the deadline has passed.
	pub(crate) fn fire(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, payload)| payload),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_after_deadline() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.arm(start, Duration::from_millis(300), "ana");

		assert_eq!(timer.fire(start + Duration::from_millis(299)), None);
		assert_eq!(timer.fire(start + Duration::from_millis(300)), Some("ana"));
		assert_eq!(timer.fire(start + Duration::from_secs(5)), None);
	}

	#[test]
	fn rearming_replaces_the_pending_payload() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.arm(start, Duration::from_millis(300), "a");
		timer.arm(start + Duration::from_millis(100), Duration::from_millis(300), "an");

		assert_eq!(timer.fire(start + Duration::from_millis(350)), None);
		assert_eq!(timer.fire(start + Duration::from_millis(400)), Some("an"));
	}

	#[test]
	fn cancelled_timer_never_fires() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.arm(start, Duration::ZERO, ());
		timer.cancel();
		assert!(!timer.is_armed());
		assert_eq!(timer.fire(start + Duration::from_secs(1)), None);
	}
}
