#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<GpioE> {
    /// The platform failed to switch a bus port to output.
    Gpio(GpioE),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Gpio(err) => {
                write!(f, "GPIO output configuration error: {}", err)
            }
        }
    }
}
