use crate::Limb;

/// Returns `(lo ++ hi)[k] + (x * y) + carry` stored back at position `k`, along with the
/// new carry.
#[inline(always)]
const fn mul_add_at(
    lo: &mut [Limb],
    hi: &mut [Limb],
    k: usize,
    x: Limb,
    y: Limb,
    carry: Limb,
) -> Limb {
    let carry_out;
    if k < lo.len() {
        (lo[k], carry_out) = x.carrying_mul_add(y, lo[k], carry);
    } else {
        let k = k - lo.len();
        (hi[k], carry_out) = x.carrying_mul_add(y, hi[k], carry);
    }
    carry_out
}

/// Adds `carry` into `(lo ++ hi)[k]`, returning the carry into position `k + 1`.
#[inline(always)]
const fn add_at(lo: &mut [Limb], hi: &mut [Limb], k: usize, carry: Limb) -> Limb {
    let carry_out;
    if k < lo.len() {
        (lo[k], carry_out) = lo[k].overflowing_add(carry);
    } else {
        let k = k - lo.len();
        (hi[k], carry_out) = hi[k].overflowing_add(carry);
    }
    carry_out
}

/// Add one row of the multiplication grid, `x * rhs * 2^(32 * offset)`, into the
/// accumulator `lo ++ hi`.
///
/// The carry of the row is propagated through every higher position of the
/// accumulator. Returns the carry out of the most significant limb, which is
/// zero whenever the accumulated value still fits.
#[inline(always)]
pub(crate) const fn mul_add_row(
    x: Limb,
    rhs: &[Limb],
    offset: usize,
    lo: &mut [Limb],
    hi: &mut [Limb],
) -> Limb {
    let width = lo.len() + hi.len();
    assert!(offset + rhs.len() <= width, "row exceeds accumulator width");

    let mut carry = Limb::ZERO;
    let mut j = 0;

    while j < rhs.len() {
        carry = mul_add_at(lo, hi, offset + j, x, rhs[j], carry);
        j += 1;
    }

    let mut k = offset + j;
    while k < width {
        carry = add_at(lo, hi, k, carry);
        k += 1;
    }

    carry
}

/// Schoolbook multiplication a.k.a. long multiplication, i.e. the traditional method taught in
/// schools.
///
/// Writes the full `lhs.len() + rhs.len()` limb product into `lo ++ hi`, both of which must be
/// zeroed on entry.
///
/// # Panics
/// - if `lo` and `hi` are not sized like `lhs` and `rhs`
/// - if a carry leaves the most significant limb of the product
#[inline(always)]
pub const fn mul_wide(lhs: &[Limb], rhs: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    assert!(
        lhs.len() == lo.len() && rhs.len() == hi.len(),
        "schoolbook multiplication length mismatch"
    );

    let mut i = 0;

    while i < lhs.len() {
        let carry = mul_add_row(lhs[i], rhs, i, lo, hi);
        assert!(carry.0 == 0, "carry out of the product width");
        i += 1;
    }
}

/// Schoolbook multiplication which only calculates the lower limbs of the product.
///
/// Row `i` stops at the width of `out`; its final carry lands in the first position the
/// row did not reach, which no earlier row has written yet.
#[inline(always)]
pub const fn wrapping_mul(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) {
    assert!(
        lhs.len() == out.len(),
        "wrapping schoolbook multiplication length mismatch"
    );

    let width = out.len();
    let mut none: [Limb; 0] = [];
    let mut i = 0;

    while i < width {
        let mut carry = Limb::ZERO;
        let mut j = 0;

        while j < rhs.len() && i + j < width {
            carry = mul_add_at(out, &mut none, i + j, lhs[i], rhs[j], carry);
            j += 1;
        }

        if i + j < width {
            out[i + j] = carry;
        }
        i += 1;
    }
}

/// Schoolbook method of squaring.
///
/// Like schoolbook multiplication, but only considering half of the multiplication grid.
/// `lo` and `hi` must be zeroed on entry.
#[inline(always)]
pub const fn square_wide(limbs: &[Limb], lo: &mut [Limb], hi: &mut [Limb]) {
    // Translated from https://github.com/ucbrise/jedi-pairing/blob/c4bf151/include/core/bigint.hpp#L410
    //
    // Permission to relicense the resulting translation as Apache 2.0 + MIT was given
    // by the original author Sam Kumar: https://github.com/RustCrypto/crypto-bigint/pull/133#discussion_r1056870411

    assert!(
        limbs.len() == lo.len() && lo.len() == hi.len(),
        "schoolbook squaring length mismatch"
    );

    let n = limbs.len();

    // Off-diagonal products x[i] * x[j] for j < i.
    let mut i = 1;
    while i < n {
        let mut j = 0;
        let mut carry = Limb::ZERO;
        let xi = limbs[i];

        while j < i {
            carry = mul_add_at(lo, hi, i + j, xi, limbs[j], carry);
            j += 1;
        }

        if (2 * i) < n {
            lo[2 * i] = carry;
        } else {
            hi[2 * i - n] = carry;
        }

        i += 1;
    }

    // Double the off-diagonal sum. The top limb is still empty.
    let mut carry = 0;
    let mut i = 0;
    while i < 2 * n {
        let w = if i < n { lo[i].0 } else { hi[i - n].0 };
        let shifted = Limb((w << 1) | carry);
        carry = w >> (Limb::BITS - 1);
        if i < n {
            lo[i] = shifted;
        } else {
            hi[i - n] = shifted;
        }
        i += 1;
    }

    // Add the diagonal x[i]^2 terms.
    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < n {
        let xi = limbs[i];
        carry = mul_add_at(lo, hi, 2 * i, xi, xi, carry);
        carry = add_at(lo, hi, 2 * i + 1, carry);
        i += 1;
    }

    assert!(carry.0 == 0, "carry out of the product width");
}
