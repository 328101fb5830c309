//! Concatenating and splitting [`Uint`]s.

use crate::{Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Concatenate the two values, with `self` as least significant and `hi`
    /// as the most significant.
    ///
    /// # Panics
    /// - if `LIMBS + HI_LIMBS != WIDE_LIMBS`
    #[inline]
    #[must_use]
    pub const fn concat_mixed<const HI_LIMBS: usize, const WIDE_LIMBS: usize>(
        &self,
        hi: &Uint<HI_LIMBS>,
    ) -> Uint<WIDE_LIMBS> {
        assert!(
            LIMBS + HI_LIMBS == WIDE_LIMBS,
            "concatenation width mismatch"
        );

        let mut limbs = [Limb::ZERO; WIDE_LIMBS];
        let mut i = 0;

        while i < WIDE_LIMBS {
            limbs[i] = if i < LIMBS {
                self.limbs[i]
            } else {
                hi.limbs[i - LIMBS]
            };
            i += 1;
        }

        Uint { limbs }
    }

    /// Split this value into a least significant part of `LO_LIMBS` and a
    /// most significant part of `HI_LIMBS`.
    ///
    /// # Panics
    /// - if `LO_LIMBS + HI_LIMBS != LIMBS`
    #[inline]
    #[must_use]
    pub const fn split_mixed<const LO_LIMBS: usize, const HI_LIMBS: usize>(
        &self,
    ) -> (Uint<LO_LIMBS>, Uint<HI_LIMBS>) {
        assert!(LO_LIMBS + HI_LIMBS == LIMBS, "split width mismatch");

        let mut lo = [Limb::ZERO; LO_LIMBS];
        let mut hi = [Limb::ZERO; HI_LIMBS];
        let mut i = 0;

        while i < LIMBS {
            if i < LO_LIMBS {
                lo[i] = self.limbs[i];
            } else {
                hi[i - LO_LIMBS] = self.limbs[i];
            }
            i += 1;
        }

        (Uint { limbs: lo }, Uint { limbs: hi })
    }
}

macro_rules! impl_concat {
    ($(($name:ident, $limbs:expr)),+ $(,)?) => {
        $(
            impl $name {
                #[doc = concat!(
                    "Concatenate two [`", stringify!($name), "`]s into a value twice as wide, ",
                    "with `self` as the least significant half."
                )]
                #[must_use]
                pub const fn concat(&self, hi: &Self) -> Uint<{ $limbs * 2 }> {
                    self.concat_mixed(hi)
                }
            }

            impl $crate::Concat for $name {
                type Output = Uint<{ $limbs * 2 }>;

                fn concat(&self, hi: &Self) -> Self::Output {
                    self.concat_mixed(hi)
                }
            }

            impl From<($name, $name)> for Uint<{ $limbs * 2 }> {
                fn from(nums: ($name, $name)) -> Uint<{ $limbs * 2 }> {
                    nums.0.concat_mixed(&nums.1)
                }
            }

            impl Uint<{ $limbs * 2 }> {
                #[doc = concat!(
                    "Split this number in half into two [`", stringify!($name), "`]s, ",
                    "returning `(lo, hi)`."
                )]
                #[must_use]
                pub const fn split(&self) -> ($name, $name) {
                    self.split_mixed()
                }
            }

            impl $crate::Split for Uint<{ $limbs * 2 }> {
                type Output = $name;

                fn split(&self) -> (Self::Output, Self::Output) {
                    self.split_mixed()
                }
            }

            impl From<Uint<{ $limbs * 2 }>> for ($name, $name) {
                fn from(num: Uint<{ $limbs * 2 }>) -> ($name, $name) {
                    num.split_mixed()
                }
            }
        )+
     };
}
