#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration(u32);

pub const ONE_SECOND: Duration = Duration(1000);

impl Instant {
    pub fn from_ms(ms: u32) -> Self {
        Instant(ms)
    }

    pub fn into_ms(self) -> u32 {
        self.0
    }
}

impl Duration {
    pub fn from_ms(ms: u32) -> Self {
        Duration(ms)
    }

    pub fn into_ms(self) -> u32 {
        self.0
    }
}

/// Time between two readings of a free running millisecond counter. Survives
/// one wrap of the counter.
pub fn elapsed_since(now: Instant, instant: Instant) -> Duration {
    let (elapsed, _) = now.into_ms().overflowing_sub(instant.into_ms());
    Duration(elapsed)
}
