//! The bus timing triple this driver is specialised for.
//!
//! 48 MHz HCLK, 42 ns write-strobe low time and 42 ns high time. Each strobe
//! phase is one store to a GPIO set/reset register and costs two HCLK
//! cycles: 2 × 20.83 ns = 41.7 ns. That undershoots the 42 ns figure by
//! less than a nanosecond, which is within clock accuracy.
//!
//! A different triple is a different driver, not a runtime option.

/// Core clock the strobe sequences are budgeted against.
pub const HCLK_MHZ: u32 = 48;
/// Minimum write-strobe low time.
pub const WR_LOW_NS: u32 = 42;
/// Minimum write-strobe high time.
pub const WR_HIGH_NS: u32 = 42;

/// HCLK cycles spent per strobe phase (one store + its bus write).
pub const CYCLES_PER_PHASE: u32 = 2;

/// Strobe pulses emitted per straight-line batch in the bulk engine.
pub const BATCH: u32 = 40;
/// Length of the straight-line tail the remainder dispatch enters into.
pub const TAIL: u32 = BATCH - 1;

/// Convert HCLK cycles to nanoseconds, rounding to nearest.
pub const fn cycles_to_ns(cycles: u32) -> u32 {
    (cycles * 1_000 + HCLK_MHZ / 2) / HCLK_MHZ
}

/// Width actually achieved for each strobe phase.
pub const ACHIEVED_PHASE_NS: u32 = cycles_to_ns(CYCLES_PER_PHASE);

/// Exact phase width in picoseconds, before rounding.
pub const ACHIEVED_PHASE_PS: u32 = CYCLES_PER_PHASE * 1_000_000 / HCLK_MHZ;

// Undershoot of the nominal widths stays below 1 ns.
const _: () = assert!(ACHIEVED_PHASE_PS + 1_000 > WR_LOW_NS * 1_000);
const _: () = assert!(ACHIEVED_PHASE_PS + 1_000 > WR_HIGH_NS * 1_000);
