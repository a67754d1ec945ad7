use crate::{error::Error, frame::*, util::packed_coils_len};
use byteorder::{BigEndian, ByteOrder};

type Result<T> = core::result::Result<T, Error>;

/// Expected size of a response PDU, derived from the request.
///
/// A transport layer uses this to know how many bytes to read off the
/// wire before attempting to decode a full frame.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLength {
    /// Number of bytes a well-formed response carries.
    Known(usize),
    /// The length is itself the first field of the response and cannot
    /// be predicted; the caller must read incrementally.
    Undefined,
}

/// Compute the expected response length for a request.
///
/// `payload` are the request bytes following the function code; for the
/// read functions the 16-bit quantity field at payload offset 2 scales
/// the result. Unrecognized function codes are not rejected but fall
/// back to the fixed single-value reply size.
pub fn expected_response_len(function: FunctionCode, payload: &[u8]) -> Result<ResponseLength> {
    use FunctionCode::*;

    let len = match function {
        ReadCoils | ReadDiscreteInputs => {
            2 + packed_coils_len(read_quantity(payload)? as usize)
        }
        ReadHoldingRegisters | ReadInputRegisters | ReadWriteMultipleRegisters => {
            2 + 2 * read_quantity(payload)? as usize
        }
        ReadExceptionStatus => 3,
        ReportServerId => return Ok(ResponseLength::Undefined),
        MaskWriteRegister => 7,
        _ => 5,
    };
    Ok(ResponseLength::Known(len))
}

/// Read the big-endian quantity field of a read request payload.
fn read_quantity(payload: &[u8]) -> Result<Quantity> {
    if payload.len() < 4 {
        #[cfg(feature = "log")]
        log::warn!(
            "Request payload too short for a quantity field: {} byte(s)",
            payload.len()
        );
        return Err(Error::BufferSize);
    }
    Ok(BigEndian::read_u16(&payload[2..4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_bit_response_len() {
        for function in [FunctionCode::ReadCoils, FunctionCode::ReadDiscreteInputs] {
            for quantity in 1..=2000u16 {
                let payload = [0x00, 0x00, (quantity >> 8) as u8, quantity as u8];
                let expected =
                    2 + (quantity as usize / 8) + usize::from(quantity % 8 > 0);
                assert_eq!(
                    expected_response_len(function, &payload).unwrap(),
                    ResponseLength::Known(expected)
                );
            }
        }
    }

    #[test]
    fn read_register_response_len() {
        for function in [
            FunctionCode::ReadHoldingRegisters,
            FunctionCode::ReadInputRegisters,
            FunctionCode::ReadWriteMultipleRegisters,
        ] {
            for quantity in 1..=2000u16 {
                let payload = [0x00, 0x00, (quantity >> 8) as u8, quantity as u8];
                assert_eq!(
                    expected_response_len(function, &payload).unwrap(),
                    ResponseLength::Known(2 + 2 * quantity as usize)
                );
            }
        }
    }

    #[test]
    fn read_holding_registers_request() {
        // Read 10 holding registers: 1 count byte + 20 data bytes + function code
        let req = [0x03, 0x00, 0x00, 0x00, 0x0A];
        assert_eq!(
            expected_response_len(FunctionCode::new(req[0]), &req[1..]).unwrap(),
            ResponseLength::Known(22)
        );
    }

    #[test]
    fn read_coils_request() {
        // Read 13 coils: they pack into 2 bytes
        let req = [0x01, 0x00, 0x00, 0x00, 0x0D];
        assert_eq!(
            expected_response_len(FunctionCode::new(req[0]), &req[1..]).unwrap(),
            ResponseLength::Known(4)
        );
    }

    #[test]
    fn fixed_response_len() {
        assert_eq!(
            expected_response_len(FunctionCode::ReadExceptionStatus, &[]).unwrap(),
            ResponseLength::Known(3)
        );
        assert_eq!(
            expected_response_len(
                FunctionCode::MaskWriteRegister,
                &[0x00, 0x04, 0x00, 0xF2, 0x00, 0x25]
            )
            .unwrap(),
            ResponseLength::Known(7)
        );
    }

    #[test]
    fn report_server_id_response_len_is_undefined() {
        assert_eq!(
            expected_response_len(FunctionCode::ReportServerId, &[]).unwrap(),
            ResponseLength::Undefined
        );
    }

    #[test]
    fn default_response_len() {
        let payload = [0x00, 0x12, 0xFF, 0x00];
        for function in [
            FunctionCode::WriteSingleCoil,
            FunctionCode::WriteSingleRegister,
            FunctionCode::WriteMultipleCoils,
            FunctionCode::WriteMultipleRegisters,
            FunctionCode::Diagnostics,
            FunctionCode::GetCommEventCounter,
            FunctionCode::GetCommEventLog,
            FunctionCode::Custom(0x42),
        ] {
            assert_eq!(
                expected_response_len(function, &payload).unwrap(),
                ResponseLength::Known(5)
            );
        }
    }

    #[test]
    fn quantity_field_missing() {
        assert_eq!(
            expected_response_len(FunctionCode::ReadCoils, &[0x00, 0x00])
                .err()
                .unwrap(),
            Error::BufferSize
        );
        // Fixed-size replies do not look at the payload at all.
        assert!(expected_response_len(FunctionCode::WriteSingleCoil, &[]).is_ok());
    }
}
