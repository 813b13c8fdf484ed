//! 8080-style write-only display bus over a 16-bit GPIO port.
//!
//! The panel's D0..D15 occupy every pin of one GPIO port; WR (write strobe),
//! RS (register select) and RESET sit on a second, control, port. Each bus
//! write is a handful of 16-bit stores: the word goes to the data port's
//! output register, RS and WR are moved through the control port's atomic
//! set/reset registers so no read-modify-write is ever needed.
//!
//! The driver is specialised for one timing triple (see [`timing`]). Which
//! MCU family's register layout is used comes from a cargo feature
//! (`stm32f0`, `stm32f1`, `stm32f4`), never from a runtime check.
//!
//! # Testing
//!
//! The transaction logic only talks to [`RegisterIo`], so the test suite
//! runs on the host against a recording fake:
//! ```bash
//! cargo xtask test
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod binding;
pub mod bus;
pub mod error;
pub mod family;
pub mod gpio;
pub mod io;
pub mod timing;

#[cfg(feature = "display-interface")]
pub mod interface;

pub use crate::binding::{pin, BusContext, PinPackage};
pub use crate::bus::Gpio16Bus;
pub use crate::error::Error;
pub use crate::gpio::PortInitialiser;
pub use crate::io::{Mmio, RegisterIo, Strobe};
