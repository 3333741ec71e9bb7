//! Classical bit registers and the complex amplitude state vector.

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A fixed-length ordered sequence of classical bits, one per qubit.
///
/// Bit `i` corresponds to qubit `i` and carries weight `2^i` in the register's
/// integer value (LSB-first). This is both the message encoding target and the
/// shape of every sampled measurement outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitRegister {
    bits: Vec<bool>,
}

impl BitRegister {
    /// Creates a register of `n_qubits` zero bits.
    pub fn zeros(n_qubits: usize) -> Self {
        Self {
            bits: vec![false; n_qubits],
        }
    }

    /// Builds a register from the low `n_qubits` bits of a basis index.
    /// Bit `i` of the register is `(index >> i) & 1`.
    pub fn from_index(index: usize, n_qubits: usize) -> Self {
        let bits = (0..n_qubits).map(|i| (index >> i) & 1 == 1).collect();
        Self { bits }
    }

    /// The register's integer value, bit `i` weighted `2^i`.
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .fold(0usize, |acc, (i, _)| acc | (1 << i))
    }

    /// Read-only view of the bits, qubit order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of qubits this register describes.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the register holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub(crate) fn set(&mut self, i: usize, value: bool) {
        self.bits[i] = value;
    }

    /// Lowercase hex rendering of the register's LSB-first integer value,
    /// zero-padded to `ceil(n/4)` digits.
    pub fn to_hex(&self) -> String {
        let width = self.bits.len().div_ceil(4);
        format!("{:0width$x}", self.to_index(), width = width)
    }
}

impl fmt::Display for BitRegister {
    /// Renders the register as a bitstring, highest qubit first (the
    /// conventional `MSB..LSB` reading order for measurement outcomes).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter().rev() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// The joint state of `n` qubits: a vector of `2^n` complex amplitudes.
///
/// Amplitude indices follow the register convention (bit `i` of an index is
/// qubit `i`, LSB-first). Each trial owns one of these buffers; it is created
/// or reset from a basis register, mutated only by gate application, and
/// discarded after measurement. The squared-magnitude norm stays within
/// numerical tolerance of 1 throughout evolution.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    n_qubits: usize,
}

impl StateVector {
    /// Creates the basis state `|register⟩`: amplitude 1 at the register's
    /// index, 0 elsewhere.
    pub fn basis(register: &BitRegister) -> Self {
        let n_qubits = register.len();
        let dim = 1usize << n_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[register.to_index()] = Complex::new(1.0, 0.0);
        Self {
            amplitudes,
            n_qubits,
        }
    }

    /// Resets this buffer in place to the basis state `|register⟩`.
    /// Reusing the allocation keeps repeated trials off the allocator.
    pub fn reset_to_basis(&mut self, register: &BitRegister) {
        debug_assert_eq!(register.len(), self.n_qubits);
        self.amplitudes.fill(Complex::zero());
        self.amplitudes[register.to_index()] = Complex::new(1.0, 0.0);
    }

    /// Read-only access to the amplitude buffer.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for gate application.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Dimension of the state vector (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits represented.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_index_round_trip() {
        let reg = BitRegister::from_index(0b1011, 5);
        assert_eq!(reg.bits(), &[true, true, false, true, false]);
        assert_eq!(reg.to_index(), 0b01011);
    }

    #[test]
    fn test_register_display_is_msb_first() {
        let reg = BitRegister::from_index(0b00110, 5);
        assert_eq!(format!("{}", reg), "00110");
    }

    #[test]
    fn test_register_hex_width() {
        // 5 qubits -> ceil(5/4) = 2 hex digits.
        let reg = BitRegister::from_index(0b10101, 5);
        assert_eq!(reg.to_hex(), "15");
        let reg = BitRegister::from_index(1, 8);
        assert_eq!(reg.to_hex(), "01");
    }

    #[test]
    fn test_basis_state_has_unit_amplitude_at_register_index() {
        let reg = BitRegister::from_index(3, 2);
        let state = StateVector::basis(&reg);
        assert_eq!(state.dim(), 4);
        assert_eq!(state.amplitudes()[3], Complex::new(1.0, 0.0));
        assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_reuses_buffer() {
        let mut state = StateVector::basis(&BitRegister::from_index(0, 3));
        state.reset_to_basis(&BitRegister::from_index(5, 3));
        assert_eq!(state.amplitudes()[0], Complex::zero());
        assert_eq!(state.amplitudes()[5], Complex::new(1.0, 0.0));
    }
}
