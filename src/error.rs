use core::fmt;

/// modbus-data Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid coil value
    CoilValue(u16),
    /// Invalid buffer size
    BufferSize,
    /// Invalid bit count
    BitCount(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match self {
            CoilValue(v) => write!(f, "Invalid coil value: {v}"),
            BufferSize => write!(f, "Invalid buffer size"),
            BitCount(cnt) => write!(f, "Invalid bit count: {cnt}"),
        }
    }
}
