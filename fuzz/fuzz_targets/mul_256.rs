#![no_main]
use libfuzzer_sys::fuzz_target;
use wide_mul::{U256, U512, multiplier::{Lanes, Status, WideMultiplier}};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct Operands {
    a: [u32; 8],
    b: [u32; 8],
}

fuzz_target!(|operands: Operands| {
    let a = U256::from_words(operands.a);
    let b = U256::from_words(operands.b);

    let ab: U512 = a.concatenating_mul(&b);
    let ba: U512 = b.concatenating_mul(&a);
    assert_eq!(ab, ba);

    // a * (b + 1) == a * b + a
    if b != U256::MAX {
        let next: U512 = a.concatenating_mul(&b.wrapping_add(&U256::ONE));
        assert_eq!(next, ab.wrapping_add(&a.zero_extend()));
    }

    let square: U512 = a.widening_square();
    assert_eq!(square, a.concatenating_mul(&a));

    let (product, status) = WideMultiplier::with_backend(Lanes::<3>::new()).multiply(&a, &b);
    assert_eq!(status, Status::Ok);
    assert_eq!(product, ab);
});
