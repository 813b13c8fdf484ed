//! `display-interface` transport, so panel drivers written against
//! [`WriteOnlyDataCommand`] can run on this bus.
//!
//! Every word is one full bus transaction. Byte formats are zero-extended
//! onto the 16 data lines; 16-bit formats go out as values, byte order only
//! matters on byte-wide links.

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::bus::Gpio16Bus;
use crate::io::RegisterIo;

fn for_each_word(
    format: DataFormat<'_>,
    mut write: impl FnMut(u16),
) -> Result<(), DisplayError> {
    match format {
        DataFormat::U8(bytes) => bytes.iter().for_each(|&b| write(u16::from(b))),
        DataFormat::U16(words) => words.iter().for_each(|&w| write(w)),
        DataFormat::U16BE(words) | DataFormat::U16LE(words) => {
            words.iter().for_each(|&w| write(w))
        }
        DataFormat::U8Iter(iter) => iter.for_each(|b| write(u16::from(b))),
        DataFormat::U16BEIter(iter) | DataFormat::U16LEIter(iter) => {
            iter.for_each(write)
        }
        #[allow(unreachable_patterns)]
        _ => {
            warn!("i8080: unsupported data format");
            return Err(DisplayError::DataFormatNotImplemented);
        }
    }
    Ok(())
}

impl<IO: RegisterIo> WriteOnlyDataCommand for Gpio16Bus<IO> {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        for_each_word(cmd, |word| self.write_command(word))
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        for_each_word(buf, |word| self.write_data(word))
    }
}
