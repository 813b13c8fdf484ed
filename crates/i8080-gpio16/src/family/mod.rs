//! MCU family selection.
//!
//! The family decides where the GPIO output and atomic set/reset registers
//! live inside a port's register block. It is picked by a cargo feature at
//! build time; there is no runtime dispatch. If several family features end
//! up enabled (feature unification, `--all-features`), the first of F0, F1,
//! F4 wins.

cfg_if::cfg_if! {
    if #[cfg(feature = "stm32f0")] {
        mod stm32f0;
        pub use stm32f0::LAYOUT;
    }
    else if #[cfg(feature = "stm32f1")] {
        mod stm32f1;
        pub use stm32f1::LAYOUT;
    }
    else if #[cfg(feature = "stm32f4")] {
        mod stm32f4;
        pub use stm32f4::LAYOUT;
    } else {
        compile_error!(
            "Unsupported MCU: enable one of the `stm32f0`, `stm32f1` or `stm32f4` features."
        );
    }
}

/// How the control port exposes atomic pin set/reset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlRegisters {
    /// Two disjoint registers: one sets the written bits, the other clears them.
    Split { set: usize, reset: usize },
    /// One 32-bit register whose low half sets and high half clears.
    Halves { register: usize },
}

impl ControlRegisters {
    /// Byte offset of the register that drives written bits high.
    pub const fn set_offset(&self) -> usize {
        match *self {
            ControlRegisters::Split { set, .. } => set,
            ControlRegisters::Halves { register } => register,
        }
    }

    /// Byte offset of the register that drives written bits low.
    pub const fn reset_offset(&self) -> usize {
        match *self {
            ControlRegisters::Split { reset, .. } => reset,
            ControlRegisters::Halves { register } => register + 2,
        }
    }
}

/// Register offsets within one GPIO port block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortLayout {
    /// Output data register (ODR).
    pub output: usize,
    pub control: ControlRegisters,
}
