//! Pin/port description and the resolved bus context.

use crate::family::{PortLayout, LAYOUT};

/// Bit mask for GPIO pin `n` of a port.
pub const fn pin(n: u8) -> u16 {
    assert!(n < 16, "GPIO ports have 16 pins");
    1 << n
}

/// Which ports and pins the panel is wired to.
///
/// All 16 lines of `data_port` carry the bus; the three control lines share
/// `control_port`. Build it in a `const` so a bad package fails the build:
///
/// ```
/// use i8080_gpio16::{pin, PinPackage};
///
/// const PANEL: PinPackage = PinPackage::new(
///     0x4800_0C00, // GPIOD
///     0x4800_0800, // GPIOC
///     pin(1),      // WR
///     pin(0),      // RS
///     pin(2),      // RESET
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinPackage {
    /// Base address of the port carrying D0..D15.
    pub data_port: usize,
    /// Base address of the port carrying WR, RS and RESET.
    pub control_port: usize,
    pub wr: u16,
    pub rs: u16,
    pub reset: u16,
}

impl PinPackage {
    pub const fn new(
        data_port: usize,
        control_port: usize,
        wr: u16,
        rs: u16,
        reset: u16,
    ) -> Self {
        assert!(wr.is_power_of_two(), "WR must be exactly one pin");
        assert!(rs.is_power_of_two(), "RS must be exactly one pin");
        assert!(reset.is_power_of_two(), "RESET must be exactly one pin");
        assert!(wr != rs && wr != reset && rs != reset, "control pins must be distinct");
        assert!(data_port != control_port, "data bus needs a port of its own");

        Self { data_port, control_port, wr, rs, reset }
    }

    /// All control lines driven by this package.
    pub const fn control_mask(&self) -> u16 {
        self.wr | self.rs | self.reset
    }
}

/// Register addresses and masks resolved once from a [`PinPackage`].
///
/// Nothing in here changes after binding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusContext {
    control_set: usize,
    control_reset: usize,
    data_output: usize,
    wr: u16,
    rs: u16,
    reset: u16,
}

impl BusContext {
    /// Resolve `pins` against the selected MCU family.
    pub const fn bind(pins: &PinPackage) -> Self {
        Self::bind_with(pins, &LAYOUT)
    }

    /// Resolve `pins` against an explicit register layout.
    pub const fn bind_with(pins: &PinPackage, layout: &PortLayout) -> Self {
        Self {
            control_set: pins.control_port + layout.control.set_offset(),
            control_reset: pins.control_port + layout.control.reset_offset(),
            data_output: pins.data_port + layout.output,
            wr: pins.wr,
            rs: pins.rs,
            reset: pins.reset,
        }
    }

    /// Register that drives written control bits high.
    #[inline(always)]
    pub const fn control_set_address(&self) -> usize {
        self.control_set
    }

    /// Register that drives written control bits low.
    #[inline(always)]
    pub const fn control_reset_address(&self) -> usize {
        self.control_reset
    }

    #[inline(always)]
    pub const fn data_output_address(&self) -> usize {
        self.data_output
    }

    #[inline(always)]
    pub const fn write_strobe_mask(&self) -> u16 {
        self.wr
    }

    #[inline(always)]
    pub const fn register_select_mask(&self) -> u16 {
        self.rs
    }

    #[inline(always)]
    pub const fn reset_mask(&self) -> u16 {
        self.reset
    }
}
