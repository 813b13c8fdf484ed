use embedded_hal::delay::DelayNs;

use crate::binding::{BusContext, PinPackage};
use crate::error::Error;
use crate::gpio::PortInitialiser;
use crate::io::{RegisterIo, Strobe};

/// Panel power rail settle time before the reset pulse train.
pub const POWER_SETTLE_MS: u32 = 10;
/// RESET held high before it is asserted.
pub const RESET_PRE_HIGH_MS: u32 = 5;
/// RESET held low (active).
pub const RESET_ACTIVE_MS: u32 = 50;
/// Controller recovery after RESET is released.
pub const RESET_RECOVERY_MS: u32 = 50;

/// 8080-style 16-bit bus bit-banged over two GPIO ports.
///
/// Every transaction leaves WR high. Register-select and the data port are
/// always settled before WR falls and are not touched again until WR has
/// risen. The driver assumes it is the only user of both ports; wrap it in a
/// mutex if several tasks share a panel.
pub struct Gpio16Bus<IO> {
    ctx: BusContext,
    io: IO,
}

impl<IO: RegisterIo> Gpio16Bus<IO> {
    /// Bind `pins`, switch all 19 bus lines to outputs and park WR high.
    pub fn new<INIT: PortInitialiser>(
        pins: &PinPackage,
        io: IO,
        init: &mut INIT,
    ) -> Result<Self, Error<INIT::Error>> {
        let ctx = BusContext::bind(pins);
        debug!(
            "i8080: data odr {:#x}, control set {:#x} reset {:#x}",
            ctx.data_output_address(),
            ctx.control_set_address(),
            ctx.control_reset_address()
        );

        init.configure_outputs(pins.data_port, 0xffff).map_err(Error::Gpio)?;
        init.configure_outputs(pins.control_port, pins.control_mask())
            .map_err(Error::Gpio)?;

        let mut bus = Self { ctx, io };
        bus.io.store(ctx.control_set_address(), ctx.write_strobe_mask());

        Ok(bus)
    }

    /// Hard-reset the panel.
    ///
    /// Blocks for at least 115 ms. Must not overlap any other transaction.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        debug!("i8080: hard reset");

        delay.delay_ms(POWER_SETTLE_MS);
        self.set_reset_line(true);
        delay.delay_ms(RESET_PRE_HIGH_MS);
        self.set_reset_line(false);
        delay.delay_ms(RESET_ACTIVE_MS);
        self.set_reset_line(true);
        delay.delay_ms(RESET_RECOVERY_MS);
    }

    /// [`reset`](Self::reset) for async executors.
    pub async fn reset_async<D: embedded_hal_async::delay::DelayNs>(
        &mut self,
        delay: &mut D,
    ) {
        debug!("i8080: hard reset");

        delay.delay_ms(POWER_SETTLE_MS).await;
        self.set_reset_line(true);
        delay.delay_ms(RESET_PRE_HIGH_MS).await;
        self.set_reset_line(false);
        delay.delay_ms(RESET_ACTIVE_MS).await;
        self.set_reset_line(true);
        delay.delay_ms(RESET_RECOVERY_MS).await;
    }

    #[inline(always)]
    fn set_reset_line(&mut self, high: bool) {
        let register = if high {
            self.ctx.control_set_address()
        } else {
            self.ctx.control_reset_address()
        };
        self.io.store(register, self.ctx.reset_mask());
    }

    /// Latch a command (register index) with RS low.
    #[inline(always)]
    pub fn write_command(&mut self, command: u16) {
        self.io.store(self.ctx.data_output_address(), command);
        self.io.store(self.ctx.control_reset_address(), self.ctx.register_select_mask());
        self.pulse();
    }

    /// A command followed by one parameter word.
    ///
    /// Two independent transactions in program order. If the panel needs
    /// them back to back, the caller must not interleave other bus traffic.
    #[inline]
    pub fn write_command_param(&mut self, command: u16, parameter: u16) {
        self.write_command(command);
        self.write_data(parameter);
    }

    /// Latch a data word with RS high.
    #[inline(always)]
    pub fn write_data(&mut self, value: u16) {
        self.io.store(self.ctx.data_output_address(), value);
        self.io.store(self.ctx.control_set_address(), self.ctx.register_select_mask());
        self.pulse();
    }

    /// Repeat the previous data word by pulsing WR only.
    ///
    /// `value` is not written anywhere. The data port must still hold the
    /// word from the immediately preceding [`write_data`](Self::write_data),
    /// [`write_data_again`](Self::write_data_again) or
    /// [`write_multi_data`](Self::write_multi_data), with RS still high. If
    /// anything else ran in between the panel latches whatever the port now
    /// holds, and nothing detects it.
    #[inline(always)]
    pub fn write_data_again(&mut self, _value: u16) {
        self.pulse();
    }

    /// Pulse WR `count` times without touching the data port or RS.
    ///
    /// Same contract as [`write_data_again`](Self::write_data_again): the
    /// word must already be latched in data mode.
    #[inline]
    pub fn write_data_again_n(&mut self, count: u32) {
        self.io.strobe_burst(self.strobe(), count);
    }

    /// Write `value` `count` times as fast as the strobe timing allows.
    ///
    /// The word is latched and RS driven high once, then WR is pulsed
    /// `count` times through the bulk engine. Bus-equivalent to one
    /// [`write_data`](Self::write_data) followed by `count - 1`
    /// [`write_data_again`](Self::write_data_again). A zero `count` latches
    /// the word but never pulses WR.
    pub fn write_multi_data(&mut self, count: u32, value: u16) {
        self.io.store(self.ctx.data_output_address(), value);
        self.io.store(self.ctx.control_set_address(), self.ctx.register_select_mask());
        self.io.strobe_burst(self.strobe(), count);
    }

    /// Stream `words` onto the bus, one full data transaction per word.
    pub fn raw_transfer(&mut self, words: &[u16]) {
        for &word in words {
            self.write_data(word);
        }
    }

    /// The resolved addresses and masks.
    pub fn context(&self) -> &BusContext {
        &self.ctx
    }

    /// Give back the register writer. The pins keep their last level.
    pub fn release(self) -> IO {
        self.io
    }

    #[inline(always)]
    fn strobe(&self) -> Strobe {
        Strobe {
            reset: self.ctx.control_reset_address(),
            set: self.ctx.control_set_address(),
            mask: self.ctx.write_strobe_mask(),
        }
    }

    #[inline(always)]
    fn pulse(&mut self) {
        let wr = self.ctx.write_strobe_mask();
        self.io.store(self.ctx.control_reset_address(), wr);
        self.io.store(self.ctx.control_set_address(), wr);
    }
}
