//! STM32F1: CRL/CRH configuration block shifts the output registers down.

use super::{ControlRegisters, PortLayout};

pub const LAYOUT: PortLayout = PortLayout {
    output: 0x0C,
    control: ControlRegisters::Split { set: 0x10, reset: 0x14 },
};
