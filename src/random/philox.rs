//! Philox4x32-10 counter-based engine
//!
//! 10-round Feistel cipher from Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3" (2011).
//!
//! Every output is a pure function of `(seed, counter)`. A counter names one
//! 64-bit draw: bits `1..` select the 128-bit Philox block, bit `0` selects its
//! low or high half. Two consecutive counters therefore share a block, which
//! [`PhiloxStream`] caches.

use rand::RngCore;

const PHILOX_M4X32_0: u32 = 0xD2511F53;
const PHILOX_M4X32_1: u32 = 0xCD9E8D57;
const PHILOX_W32_0: u32 = 0x9E3779B9;
const PHILOX_W32_1: u32 = 0xBB67AE85;

/// Philox4x32 round function
#[inline(always)]
fn philox_round(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let prod0 = (ctr[0] as u64).wrapping_mul(PHILOX_M4X32_0 as u64);
    let prod1 = (ctr[2] as u64).wrapping_mul(PHILOX_M4X32_1 as u64);

    [
        ((prod1 >> 32) as u32) ^ ctr[1] ^ key[0],
        prod1 as u32,
        ((prod0 >> 32) as u32) ^ ctr[3] ^ key[1],
        prod0 as u32,
    ]
}

/// Philox4x32-10: 10-round bijection of a 128-bit counter under a 64-bit key
#[inline(always)]
pub fn philox4x32_10(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let mut c = ctr;
    let mut k = key;

    for _ in 0..10 {
        c = philox_round(c, k);
        k[0] = k[0].wrapping_add(PHILOX_W32_0);
        k[1] = k[1].wrapping_add(PHILOX_W32_1);
    }

    c
}

#[inline(always)]
fn split_seed(seed: u64) -> [u32; 2] {
    [seed as u32, (seed >> 32) as u32]
}

#[inline(always)]
fn block(key: [u32; 2], block_index: u64) -> [u32; 4] {
    philox4x32_10([block_index as u32, (block_index >> 32) as u32, 0, 0], key)
}

#[inline(always)]
fn half_of(block: [u32; 4], high: bool) -> u64 {
    let lane = if high { 2 } else { 0 };
    ((block[lane] as u64) << 32) | block[lane + 1] as u64
}

/// Convert a 64-bit draw to a uniform float in [0, 1)
///
/// Keeps the top 53 bits, so every representable output is exact.
#[inline(always)]
pub fn word_to_uniform(word: u64) -> f64 {
    (word >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// The 64-bit draw at `counter` under `seed`
#[inline]
pub fn draw_word(seed: u64, counter: u64) -> u64 {
    half_of(block(split_seed(seed), counter >> 1), counter & 1 == 1)
}

/// The uniform draw in [0, 1) at `counter` under `seed`
#[inline]
pub fn draw_uniform(seed: u64, counter: u64) -> f64 {
    word_to_uniform(draw_word(seed, counter))
}

/// Reserve `n` draws past `base_offset`, returning the next free offset
///
/// Wraps on overflow; the sequence past `u64::MAX` is as deterministic as
/// any other.
#[inline]
pub fn advance(base_offset: u64, n: u64) -> u64 {
    base_offset.wrapping_add(n)
}

/// Sequential cursor over the draws of one seed, starting at a fixed counter
///
/// Each call to `next_u64`, `next_u32`, or each 8-byte chunk of `fill_bytes`
/// consumes exactly one counter position, so the number of draws an algorithm
/// takes is easy to account for.
#[derive(Clone, Debug)]
pub struct PhiloxStream {
    key: [u32; 2],
    start: u64,
    counter: u64,
    cached: Option<(u64, [u32; 4])>,
}

impl PhiloxStream {
    /// Create a stream whose first draw is `draw_word(seed, counter)`
    pub fn new(seed: u64, counter: u64) -> Self {
        Self {
            key: split_seed(seed),
            start: counter,
            counter,
            cached: None,
        }
    }

    /// Counter of the next draw
    #[inline]
    pub fn position(&self) -> u64 {
        self.counter
    }

    /// Number of draws consumed since construction
    #[inline]
    pub fn draws(&self) -> u64 {
        self.counter.wrapping_sub(self.start)
    }

    /// Next 64-bit draw
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        let block_index = self.counter >> 1;
        let words = match self.cached {
            Some((index, words)) if index == block_index => words,
            _ => {
                let words = block(self.key, block_index);
                self.cached = Some((block_index, words));
                words
            }
        };
        let word = half_of(words, self.counter & 1 == 1);
        self.counter = self.counter.wrapping_add(1);
        word
    }

    /// Next uniform draw in [0, 1)
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        word_to_uniform(self.next_word())
    }
}

impl RngCore for PhiloxStream {
    fn next_u32(&mut self) -> u32 {
        (self.next_word() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
