//! Keccak-f[1600] permutation and the SHA-3 sponge family.
//!
//! ML-KEM draws all of its randomness expansion from FIPS 202
//! functions, so the crate carries its own sponge core rather than an
//! external backend. One absorb/pad/squeeze engine is parameterized by
//! rate and padding byte; SHA3-256, SHA3-512, SHAKE128 and SHAKE256 are
//! thin wrappers over it.
//!
//! The state is 25 64-bit lanes indexed as a 5x5 grid, `lane[x + 5*y]`.
//! Byte I/O is little-endian within each lane.

/// Number of 64-bit lanes in the Keccak state.
const LANES: usize = 25;

/// SHAKE128 rate in bytes (1344-bit rate, 256-bit capacity).
pub const SHAKE128_RATE: usize = 168;
/// SHAKE256 rate in bytes (1088-bit rate, 512-bit capacity).
pub const SHAKE256_RATE: usize = 136;
/// SHA3-256 rate in bytes.
pub const SHA3_256_RATE: usize = 136;
/// SHA3-512 rate in bytes.
pub const SHA3_512_RATE: usize = 72;

/// First padding byte for the SHAKE XOFs.
const SHAKE_PAD: u8 = 0x1f;
/// First padding byte for the SHA-3 fixed-output hashes.
const SHA3_PAD: u8 = 0x06;

/// Iota round constants for the 24 rounds of Keccak-f[1600].
const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, indexed by linear lane position x + 5*y.
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Applies the Keccak-f[1600] permutation in place: 24 rounds of
/// theta, rho, pi, chi and iota.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    let mut d = [0u64; 5];
    let mut b = [0u64; LANES];

    for rc in RC {
        // Theta: column parities mixed back into every lane
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        }
        for x in 0..5 {
            for y in 0..5 {
                state[5 * y + x] ^= d[x];
            }
        }

        // Rho + Pi fused: rotate each lane and scatter into the
        // permuted position of a scratch grid
        for i in 0..LANES {
            let x = i % 5;
            let y = i / 5;
            let pi_index = y + 5 * ((2 * x + 3 * y) % 5);
            b[pi_index] = state[i].rotate_left(RHO_OFFSETS[i]);
        }

        // Chi: the only non-linear step
        for y in 0..5 {
            for x in 0..5 {
                state[5 * y + x] = b[5 * y + x] ^ (!b[5 * y + (x + 1) % 5] & b[5 * y + (x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= rc;
    }
}

/// XORs one rate-sized block into the leading lanes and permutes.
fn absorb_block(state: &mut [u64; LANES], block: &[u8]) {
    debug_assert!(block.len() % 8 == 0);
    for (chunk, lane) in block.chunks_exact(8).zip(state.iter_mut()) {
        *lane ^= u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
    }
    keccak_f1600(state);
}

/// Absorbs `input` at the given rate, applying multi-rate padding
/// (`pad ... 0x80`) to the final block.
///
/// When the padding byte would land on the last byte of the block, it
/// is combined with the 0x80 terminator rather than overwritten, per
/// the FIPS 202 padding rule.
fn absorb_padded(state: &mut [u64; LANES], input: &[u8], rate: usize, pad: u8) {
    let mut offset = 0;
    while offset + rate <= input.len() {
        absorb_block(state, &input[offset..offset + rate]);
        offset += rate;
    }

    let remaining = input.len() - offset;
    let mut last = [0u8; 200];
    last[..remaining].copy_from_slice(&input[offset..]);
    last[remaining] = pad;
    last[rate - 1] |= 0x80;
    absorb_block(state, &last[..rate]);
}

/// Copies up to one rate of output bytes from the leading lanes.
fn squeeze_block(state: &[u64; LANES], out: &mut [u8]) {
    let mut written = 0;
    for &lane in state {
        if written >= out.len() {
            break;
        }
        let bytes = lane.to_le_bytes();
        let n = (out.len() - written).min(8);
        out[written..written + n].copy_from_slice(&bytes[..n]);
        written += n;
    }
}

/// SHA3-256: 32-byte digest.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut state = [0u64; LANES];
    absorb_padded(&mut state, input, SHA3_256_RATE, SHA3_PAD);
    let mut out = [0u8; 32];
    squeeze_block(&state, &mut out);
    out
}

/// SHA3-512: 64-byte digest.
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut state = [0u64; LANES];
    absorb_padded(&mut state, input, SHA3_512_RATE, SHA3_PAD);
    let mut out = [0u8; 64];
    squeeze_block(&state, &mut out);
    out
}

/// SHAKE128 XOF: fills `out` with as many bytes as requested.
pub fn shake128(input: &[u8], out: &mut [u8]) {
    XofReader::shake128(input).read(out);
}

/// SHAKE256 XOF: fills `out` with as many bytes as requested.
pub fn shake256(input: &[u8], out: &mut [u8]) {
    XofReader::shake256(input).read(out);
}

/// Incremental squeezer over an absorbed sponge state.
///
/// Rejection sampling consumes XOF output block by block until enough
/// candidates are accepted, so the squeeze phase has to be resumable.
/// Output is identical to the one-shot functions for any request
/// pattern.
pub struct XofReader {
    state: [u64; LANES],
    rate: usize,
    pos: usize,
}

impl XofReader {
    /// Absorbs `input` as SHAKE128 and returns a reader over the
    /// squeeze phase.
    pub fn shake128(input: &[u8]) -> Self {
        Self::new(input, SHAKE128_RATE)
    }

    /// Absorbs `input` as SHAKE256 and returns a reader over the
    /// squeeze phase.
    pub fn shake256(input: &[u8]) -> Self {
        Self::new(input, SHAKE256_RATE)
    }

    fn new(input: &[u8], rate: usize) -> Self {
        let mut state = [0u64; LANES];
        absorb_padded(&mut state, input, rate, SHAKE_PAD);
        XofReader {
            state,
            rate,
            pos: 0,
        }
    }

    /// Squeezes the next `out.len()` bytes, permuting between
    /// rate-sized chunks.
    pub fn read(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *byte = (self.state[self.pos / 8] >> (8 * (self.pos % 8))) as u8;
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_of_zero_state() {
        // Leading lanes of the published Keccak-f[1600] zero-state KAT;
        // the full state is cross-checked against the keccak crate in
        // tests/hash_kat.rs.
        let mut state = [0u64; 25];
        keccak_f1600(&mut state);
        assert_eq!(state[0], 0xf1258f7940e1dde7);
        assert_eq!(state[1], 0x84d5ccf933c0478a);
    }

    #[test]
    fn test_permutation_changes_state() {
        let mut state = [0u64; 25];
        state[0] = 1;
        let before = state;
        keccak_f1600(&mut state);
        assert_ne!(state, before);
    }

    #[test]
    fn test_sha3_256_deterministic() {
        let a = sha3_256(b"ml-kem");
        let b = sha3_256(b"ml-kem");
        assert_eq!(a, b);
        assert_ne!(a, sha3_256(b"ml-keM"));
    }

    #[test]
    fn test_sha3_512_differs_from_sha3_256() {
        // Same input, different rate/output: prefixes must not match
        let h256 = sha3_256(b"domain separation");
        let h512 = sha3_512(b"domain separation");
        assert_ne!(h256[..], h512[..32]);
    }

    #[test]
    fn test_shake_one_shot_matches_reader() {
        let input = b"incremental squeeze equivalence";
        let mut oneshot = [0u8; 400];
        shake128(input, &mut oneshot);

        let mut reader = XofReader::shake128(input);
        let mut incremental = [0u8; 400];
        // Deliberately awkward chunk sizes, straddling the 168-byte rate
        let mut pos = 0;
        for chunk in [1usize, 7, 160, 1, 200, 31] {
            reader.read(&mut incremental[pos..pos + chunk]);
            pos += chunk;
        }
        assert_eq!(pos, 400);
        assert_eq!(oneshot, incremental);
    }

    #[test]
    fn test_shake_output_extension_is_prefix_consistent() {
        let mut short = [0u8; 32];
        let mut long = [0u8; 500];
        shake256(b"prefix", &mut short);
        shake256(b"prefix", &mut long);
        assert_eq!(short[..], long[..32]);
    }

    #[test]
    fn test_padding_when_input_fills_rate_minus_one() {
        // remaining == rate-1 puts the pad byte and the 0x80 terminator
        // on the same byte; must not panic and must stay deterministic
        let input = [0xabu8; SHAKE128_RATE - 1];
        let mut out1 = [0u8; 64];
        let mut out2 = [0u8; 64];
        shake128(&input, &mut out1);
        shake128(&input, &mut out2);
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_rate_aligned_input_gets_fresh_pad_block() {
        // A full-rate input must differ from the same input plus one byte
        let full = [0x55u8; SHAKE256_RATE];
        let longer = [0x55u8; SHAKE256_RATE + 1];
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        shake256(&full, &mut a);
        shake256(&longer, &mut b);
        assert_ne!(a, b);
    }
}
