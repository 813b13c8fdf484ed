//! GPIO direction setup, supplied by the platform.

/// Configures port pins as outputs.
///
/// Called once per port while a [`Gpio16Bus`](crate::Gpio16Bus) is built:
/// once for the data port with all 16 pins, once for the control port with
/// WR, RS and RESET. Implementations must leave the pins as push-pull outputs
/// at the fastest slew rate the port offers; the strobe timing assumes edges
/// are not slowed down by the pad driver.
pub trait PortInitialiser {
    type Error: core::fmt::Debug;

    fn configure_outputs(
        &mut self,
        port: usize,
        pins: u16,
    ) -> Result<(), Self::Error>;
}

impl<T: PortInitialiser + ?Sized> PortInitialiser for &mut T {
    type Error = T::Error;

    #[inline]
    fn configure_outputs(
        &mut self,
        port: usize,
        pins: u16,
    ) -> Result<(), Self::Error> {
        T::configure_outputs(self, port, pins)
    }
}
