//! The simulated payment clock: a per-second countdown for a pending PIX
//! charge. Pure state; the settlement worker drives the ticks.

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaymentClock {
    remaining_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Expired,
}

impl PaymentClock {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            remaining_secs: duration_secs,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Advances the clock by one second. The expiration event fires exactly
    /// once, on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<ClockEvent> {
        if self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            Some(ClockEvent::Expired)
        } else {
            None
        }
    }
}

//-------------------------- Tests -------------------------------
