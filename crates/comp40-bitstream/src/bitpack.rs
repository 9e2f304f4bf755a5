//! Bit field packing within a 64-bit word
//!
//! Fields are addressed by width and least significant bit position, bit 0
//! being the least significant bit of the word. All operations are pure.
//!
//! A width above 64, or a field reaching past bit 63, is a caller bug and
//! panics.

/// Largest supported field width
pub const WORD_BITS: u32 = 64;

#[inline]
fn mask(width: u32) -> u64 {
    if width == WORD_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[inline]
fn check_width(width: u32) {
    assert!(
        width <= WORD_BITS,
        "field width {} exceeds {} bits",
        width,
        WORD_BITS
    );
}

#[inline]
fn check_field(width: u32, lsb: u32) {
    check_width(width);
    assert!(
        width + lsb <= WORD_BITS,
        "field of width {} at bit {} does not fit in {} bits",
        width,
        lsb,
        WORD_BITS
    );
}

/// True iff `value` is representable as a `width`-bit unsigned integer
pub fn fits_unsigned(value: u64, width: u32) -> bool {
    check_width(width);
    value <= mask(width)
}

/// True iff `value` is representable as a `width`-bit two's complement integer
pub fn fits_signed(value: i64, width: u32) -> bool {
    check_width(width);
    match width {
        0 => value == 0,
        WORD_BITS => true,
        _ => {
            let max = (1i64 << (width - 1)) - 1;
            let min = -(1i64 << (width - 1));
            (min..=max).contains(&value)
        }
    }
}

/// The `width`-bit field at `lsb`, zero extended
pub fn extract_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    check_field(width, lsb);
    if width == 0 {
        return 0;
    }
    (word >> lsb) & mask(width)
}

/// The `width`-bit field at `lsb`, sign extended
pub fn extract_signed(word: u64, width: u32, lsb: u32) -> i64 {
    check_field(width, lsb);
    if width == 0 {
        return 0;
    }
    // move the field's top bit to bit 63, then shift back arithmetically
    let raised = word << (WORD_BITS - width - lsb);
    (raised as i64) >> (WORD_BITS - width)
}

/// `word` with the field at `lsb` replaced by the low `width` bits of `value`
pub fn insert_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> u64 {
    check_field(width, lsb);
    if width == 0 {
        return word;
    }
    let field = mask(width) << lsb;
    (word & !field) | ((value << lsb) & field)
}

/// Signed counterpart of [`insert_unsigned`]
///
/// `value` is truncated to `width` bits without a range check; call
/// [`fits_signed`] first when overflow must be detected.
pub fn insert_signed(word: u64, width: u32, lsb: u32, value: i64) -> u64 {
    insert_unsigned(word, width, lsb, value as u64)
}
