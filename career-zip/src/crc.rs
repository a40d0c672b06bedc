/// Reflected CRC-32 (IEEE 802.3) polynomial used by PKZIP.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-wise lookup table, built at compile time.
static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut bit = 0;
        while bit < 8 {
            c = if c & 1 != 0 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            bit += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

/// Compute the CRC32 (IEEE) of a byte slice.
///
/// The empty slice hashes to `0`.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32_chunk(data, 0)
}

/// Compute CRC32 incrementally, combining with a previous CRC value.
///
/// `crc32_chunk(b, crc32(a)) == crc32(a ++ b)`.
#[inline]
pub fn crc32_chunk(data: &[u8], prev: u32) -> u32 {
    let mut crc = !prev;
    for &byte in data {
        crc = (crc >> 8) ^ TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    !crc
}
