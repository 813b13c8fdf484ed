//! Register stores and the bulk strobe engine.
//!
//! Every bus transition is a single 16-bit store: the data port output
//! register for D0..D15, or one of the control port's atomic set/reset
//! registers for WR and RS. [`RegisterIo`] is the seam between the
//! transaction logic and the hardware, so the same driver runs against
//! [`Mmio`] on target and a recording fake in tests.

use crate::timing::BATCH;

/// The write-strobe line as seen by the bulk engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Strobe {
    /// Control reset register; a store here drives WR low.
    pub reset: usize,
    /// Control set register; a store here drives WR high.
    pub set: usize,
    pub mask: u16,
}

pub trait RegisterIo {
    /// Store `value` to the 16-bit register at `address`.
    fn store(&mut self, address: usize, value: u16);

    /// Emit `count` low-then-high pulses on the strobe.
    ///
    /// Implementations must leave the strobe high and must not touch any
    /// other register. The default works in batches of [`BATCH`] pulses with
    /// one loop test per batch and a single dispatch for the remainder.
    #[inline]
    fn strobe_burst(&mut self, strobe: Strobe, count: u32) {
        emit_burst(self, strobe, count)
    }
}

impl<T: RegisterIo + ?Sized> RegisterIo for &mut T {
    #[inline(always)]
    fn store(&mut self, address: usize, value: u16) {
        T::store(self, address, value)
    }

    #[inline(always)]
    fn strobe_burst(&mut self, strobe: Strobe, count: u32) {
        T::strobe_burst(self, strobe, count)
    }
}

/// One strobe pulse: reset then set.
#[inline(always)]
fn pulse<IO: RegisterIo + ?Sized>(io: &mut IO, strobe: Strobe) {
    io.store(strobe.reset, strobe.mask);
    io.store(strobe.set, strobe.mask);
}

/// `N` pulses with no branch between them.
#[inline(always)]
fn pulses<IO: RegisterIo + ?Sized, const N: usize>(io: &mut IO, strobe: Strobe) {
    // constant trip count, fully unrolled
    for _ in 0..N {
        pulse(io, strobe);
    }
}

macro_rules! dispatch_remainder {
    ($io_ty:ty, $io:expr, $strobe:expr, $remaining:expr; $($n:literal)*) => {
        match $remaining {
            $( $n => pulses::<$io_ty, $n>($io, $strobe), )*
            _ => {}
        }
    };
}

/// Portable bulk engine used by [`RegisterIo::strobe_burst`].
pub fn emit_burst<IO: RegisterIo + ?Sized>(
    io: &mut IO,
    strobe: Strobe,
    count: u32,
) {
    let mut remaining = count;

    while remaining >= BATCH {
        pulses::<IO, { BATCH as usize }>(io, strobe);
        remaining -= BATCH;
    }

    dispatch_remainder!(IO, io, strobe, remaining;
        1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20
        21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39);
}

/// Whether [`Mmio`] bursts run the hand-scheduled Thumb sequence instead of
/// [`emit_burst`]. Every bare-metal ARM target is Thumb-only.
pub const HAND_SCHEDULED_BURST: bool = cfg!(all(target_arch = "arm", target_os = "none"));

/// Volatile stores straight to the peripheral address space.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Every address later stored through this writer comes from a
    /// [`BusContext`](crate::BusContext) bound to real GPIO ports of the
    /// running MCU, and nothing else drives those pins concurrently.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for Mmio {
    #[inline(always)]
    fn store(&mut self, address: usize, value: u16) {
        // SAFETY: upheld by the contract of `Mmio::new`.
        unsafe { core::ptr::write_volatile(address as *mut u16, value) }
    }

    /// Hand-scheduled Thumb sequence.
    ///
    /// Only low registers are used so every `strh` is a 2-byte encoding and a
    /// pulse is exactly 4 bytes. Whole batches run through a 40-pulse block;
    /// the remainder is a computed jump `end - remainder * 4` into a 39-pulse
    /// tail, so no pulse ever waits on a branch.
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    #[inline(never)]
    fn strobe_burst(&mut self, strobe: Strobe, count: u32) {
        // SAFETY: stores only to the strobe set/reset registers, which the
        // `Mmio::new` contract guarantees are valid. Control flow stays inside
        // the block: the jump target always lies within the tail sequence or
        // at its end label.
        unsafe {
            core::arch::asm!(
                "cmp r3, #40",
                "blo 2f",
                "1:",
                ".rept 40",
                "strh r0, [r1]",
                "strh r0, [r2]",
                ".endr",
                "subs r3, #40",
                "cmp r3, #40",
                "bhs 1b",
                "2:",
                "adr r4, 3f",
                "lsls r3, r3, #2",
                "subs r4, r4, r3",
                "adds r4, #1",
                "bx r4",
                ".balign 4",
                ".rept 39",
                "strh r0, [r1]",
                "strh r0, [r2]",
                ".endr",
                "3:",
                in("r0") strobe.mask as u32,
                in("r1") strobe.reset,
                in("r2") strobe.set,
                inout("r3") count => _,
                out("r4") _,
                options(nostack),
            );
        }
    }
}
