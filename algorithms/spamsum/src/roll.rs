//! Rolling Hash
//!
//! Adler-style hash over the last `ROLLING_WINDOW` bytes. Its sum decides
//! where a piece ends; the same hash is reused to find common substrings
//! during comparison.

use crate::constants::ROLLING_WINDOW;

/// Rolling hash state over a fixed window.
#[derive(Debug, Clone, Default)]
pub struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    h1: u32,
    h2: u32,
    h3: u32,
    n: usize,
}

impl RollingHash {
    /// Create an empty rolling hash.
    pub const fn new() -> Self {
        Self {
            window: [0; ROLLING_WINDOW],
            h1: 0,
            h2: 0,
            h3: 0,
            n: 0,
        }
    }

    /// Push one byte into the window, evicting the oldest.
    #[inline]
    pub fn push(&mut self, c: u8) {
        let c32 = u32::from(c);
        let slot = self.n % ROLLING_WINDOW;

        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self.h2.wrapping_add(ROLLING_WINDOW as u32 * c32);

        self.h1 = self.h1.wrapping_add(c32);
        self.h1 = self.h1.wrapping_sub(u32::from(self.window[slot]));

        self.window[slot] = c;
        self.n = self.n.wrapping_add(1);

        self.h3 = (self.h3 << 5) ^ c32;
    }

    /// Current hash value.
    #[inline]
    pub const fn sum(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}
