//! Message encoding: unpacking input bytes into the initial basis register.

use crate::core::{BitRegister, RqcError, StateVector};

/// Unpacks a message into a `BitRegister` of length `n_qubits`.
///
/// Bits are taken least-significant-bit-first within each byte, bytes in
/// order. Register positions at or beyond the message's bit length stay
/// `false`; message bits beyond the register length are ignored.
pub fn prepare(message: &[u8], n_qubits: usize) -> Result<BitRegister, RqcError> {
    if n_qubits == 0 {
        return Err(RqcError::InvalidConfiguration {
            message: "cannot encode a message into zero qubits".to_string(),
        });
    }

    let mut register = BitRegister::zeros(n_qubits);
    let mut bit_idx = 0usize;
    'bytes: for &byte in message {
        for i in 0..8 {
            if bit_idx >= n_qubits {
                break 'bytes;
            }
            register.set(bit_idx, (byte >> i) & 1 == 1);
            bit_idx += 1;
        }
    }
    Ok(register)
}

/// Lifts a register into its basis state: amplitude 1 at the register's
/// integer index (bit `i` weighted `2^i`), 0 elsewhere.
pub fn to_basis_state(register: &BitRegister) -> StateVector {
    StateVector::basis(register)
}
