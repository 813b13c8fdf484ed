//! STM32F0: separate BSRR / BRR registers.

use super::{ControlRegisters, PortLayout};

pub const LAYOUT: PortLayout = PortLayout {
    output: 0x14,
    control: ControlRegisters::Split { set: 0x18, reset: 0x28 },
};
