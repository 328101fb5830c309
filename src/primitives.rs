use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let carry = carry as WideWord;
    let ret = a + b + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs + rhs`, returning the result along with the carry (0 or 1).
#[inline(always)]
pub(crate) const fn overflowing_add(lhs: Word, rhs: Word) -> (Word, Word) {
    let (res, carry) = lhs.overflowing_add(rhs);
    (res, carry as Word)
}

/// Computes `lhs * rhs`, returning the low and the high words of the result.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: Word, rhs: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let ret = a * b;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    let lhs = lhs as WideWord;
    let rhs = rhs as WideWord;
    let addend = addend as WideWord;
    let carry = carry as WideWord;

    // Cannot overflow:
    // lhs      * rhs      + addend   + carry
    // (2^32-1) * (2^32-1) + (2^32-1) + (2^32-1) =
    // 2^64 - 2^33 + 1 + 2^33 - 2 =
    // 2^64 - 1 = u64::MAX
    let ret = ((lhs * rhs) + addend) + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

#[cfg(test)]
mod tests {
    use crate::Word;

    #[test]
    fn carrying_mul_add_cannot_overflow() {
        let (result, carry_out) =
            super::carrying_mul_add(Word::MAX, Word::MAX, Word::MAX, Word::MAX);
        assert_eq!(result, Word::MAX);
        assert_eq!(carry_out, Word::MAX);
    }

    #[test]
    fn widening_mul_keeps_high_word() {
        assert_eq!(super::widening_mul(3, 5), (15, 0));
        assert_eq!(super::widening_mul(Word::MAX, Word::MAX), (1, Word::MAX - 1));
        assert_eq!(super::widening_mul(1 << 31, 2), (0, 1));
    }

    #[test]
    fn carrying_add_two_carries() {
        assert_eq!(super::carrying_add(Word::MAX, Word::MAX, 1), (Word::MAX, 1));
        assert_eq!(super::carrying_add(Word::MAX, 0, 1), (0, 1));
        assert_eq!(super::overflowing_add(Word::MAX, 1), (0, 1));
        assert_eq!(super::overflowing_add(1, 1), (2, 0));
    }
}
