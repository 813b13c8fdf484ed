use clap::ValueEnum;

pub const DRIVER_PACKAGE: &str = "i8080-gpio16";

/// MCU families the driver has a register layout for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    F0,
    F1,
    F4,
    All,
}

impl Family {
    pub const EACH: [Family; 3] = [Family::F0, Family::F1, Family::F4];

    /// Families this selection expands to.
    pub fn expand(self) -> &'static [Family] {
        match self {
            Family::F0 => &Family::EACH[0..1],
            Family::F1 => &Family::EACH[1..2],
            Family::F4 => &Family::EACH[2..3],
            Family::All => &Family::EACH,
        }
    }

    pub fn feature(self) -> &'static str {
        match self {
            Family::F0 => "stm32f0",
            Family::F1 => "stm32f1",
            Family::F4 => "stm32f4",
            Family::All => unreachable!("expand() before picking a feature"),
        }
    }

    /// Bare-metal target for the family's Cortex-M core.
    pub fn target(self) -> &'static str {
        match self {
            Family::F0 => "thumbv6m-none-eabi",
            Family::F1 => "thumbv7m-none-eabi",
            Family::F4 => "thumbv7em-none-eabihf",
            Family::All => unreachable!("expand() before picking a target"),
        }
    }
}
