use compreg_macros::Component;

/// Wall-clock time source.
#[Component]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

/// Fixed time source. Not a component, so the registry has no variant for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
	pub now: u64,
}
