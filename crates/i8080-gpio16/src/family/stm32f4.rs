//! STM32F4: a single BSRR addressed as BSRRL (set) and BSRRH (reset).

use super::{ControlRegisters, PortLayout};

pub const LAYOUT: PortLayout = PortLayout {
    output: 0x14,
    control: ControlRegisters::Halves { register: 0x18 },
};
