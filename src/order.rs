//! Order-preserving transforms between a key type and a fixed-width,
//! big-endian byte array whose unsigned-lexicographic order matches the
//! key's numeric order.
//!
//! The trie store only ever compares nibbles of the byte array produced
//! here; it never inspects the original key type. A custom key type can
//! plug into [`TrieMap`](crate::TrieMap) by implementing [`OrderTransform`]
//! for its own marker type.
//!
//! Multi-byte widths go through `zerocopy`'s network-endian wrapper types
//! (`U16`/`U32`/`U64`/`U128<NetworkEndian>`) to move between the native
//! integer and its big-endian byte projection, the same mechanism
//! `AddressFamily`'s `IPv4`/`IPv6` use to reinterpret an address in place.

use log::trace;
use zerocopy::{FromBytes, IntoBytes, NetworkEndian, U16, U32, U64, U128};

/// Maps a key type `K` to and from an order-preserving byte representation.
///
/// `apply` must be a bijection onto the full range of `Bytes`, and
/// unsigned-lexicographic order over `Bytes` (comparing byte 0 first, most
/// significant) must match `K`'s natural numeric order. `restore` must be
/// the exact inverse of `apply`.
pub trait OrderTransform<K> {
    /// The fixed-width byte representation. No padding bits: every bit of
    /// every byte participates in the key's address.
    type Bytes: Copy + Eq + AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Number of bytes in [`Self::Bytes`]. Always `Self::Bytes::default().as_ref().len()`.
    const BYTE_LEN: usize;

    /// Transform a key into its order-preserving byte representation.
    fn apply(key: K) -> Self::Bytes;

    /// Recover the original key from its byte representation.
    ///
    /// Must satisfy `restore(apply(k)) == k` for every `k`.
    fn restore(bytes: &Self::Bytes) -> K;
}

/// The identity-for-unsigned, sign-flip-for-signed, IEEE-754-remap-for-float
/// order transform that this crate ships for the common primitive key
/// types. Used as the default `O` parameter of [`TrieMap`](crate::TrieMap).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrder;

// A single byte has no endianness to speak of, so `u8`/`i8` project
// straight through without going by way of a zerocopy byte-order wrapper.
macro_rules! impl_unsigned_order_u8 {
    ($ty:ty, $n:expr) => {
        impl OrderTransform<$ty> for DefaultOrder {
            type Bytes = [u8; $n];
            const BYTE_LEN: usize = $n;

            fn apply(key: $ty) -> Self::Bytes {
                key.to_be_bytes()
            }

            fn restore(bytes: &Self::Bytes) -> $ty {
                <$ty>::from_be_bytes(*bytes)
            }
        }
    };
}

impl_unsigned_order_u8!(u8, 1);

// For the multi-byte widths the big-endian projection goes through
// zerocopy's network-endian wrapper types, the same mechanism
// `AddressFamily`'s `IPv4`/`IPv6` use to reinterpret an address as its
// order-preserving byte representation.
macro_rules! impl_unsigned_order {
    ($ty:ty, $net:ty, $n:expr) => {
        impl OrderTransform<$ty> for DefaultOrder {
            type Bytes = [u8; $n];
            const BYTE_LEN: usize = $n;

            fn apply(key: $ty) -> Self::Bytes {
                let net = <$net>::from(key);
                let mut out = [0u8; $n];
                out.copy_from_slice(net.as_bytes());
                out
            }

            fn restore(bytes: &Self::Bytes) -> $ty {
                let net = <$net>::ref_from_bytes(bytes.as_slice())
                    .expect("Bytes is exactly BYTE_LEN wide");
                <$ty>::from(*net)
            }
        }
    };
}

impl_unsigned_order!(u16, U16<NetworkEndian>, 2);
impl_unsigned_order!(u32, U32<NetworkEndian>, 4);
impl_unsigned_order!(u64, U64<NetworkEndian>, 8);
impl_unsigned_order!(u128, U128<NetworkEndian>, 16);

macro_rules! impl_signed_order_i8 {
    ($ty:ty, $uty:ty, $n:expr) => {
        impl OrderTransform<$ty> for DefaultOrder {
            type Bytes = [u8; $n];
            const BYTE_LEN: usize = $n;

            fn apply(key: $ty) -> Self::Bytes {
                // Flipping the sign bit of the two's-complement
                // representation moves the negative half of the range
                // below the positive half in unsigned order.
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                ((key as $uty) ^ sign_bit).to_be_bytes()
            }

            fn restore(bytes: &Self::Bytes) -> $ty {
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                (<$uty>::from_be_bytes(*bytes) ^ sign_bit) as $ty
            }
        }
    };
}

impl_signed_order_i8!(i8, u8, 1);

macro_rules! impl_signed_order {
    ($ty:ty, $uty:ty, $net:ty, $n:expr) => {
        impl OrderTransform<$ty> for DefaultOrder {
            type Bytes = [u8; $n];
            const BYTE_LEN: usize = $n;

            fn apply(key: $ty) -> Self::Bytes {
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                let mapped = (key as $uty) ^ sign_bit;
                let net = <$net>::from(mapped);
                let mut out = [0u8; $n];
                out.copy_from_slice(net.as_bytes());
                out
            }

            fn restore(bytes: &Self::Bytes) -> $ty {
                let net = <$net>::ref_from_bytes(bytes.as_slice())
                    .expect("Bytes is exactly BYTE_LEN wide");
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                (<$uty>::from(*net) ^ sign_bit) as $ty
            }
        }
    };
}

impl_signed_order!(i16, u16, U16<NetworkEndian>, 2);
impl_signed_order!(i32, u32, U32<NetworkEndian>, 4);
impl_signed_order!(i64, u64, U64<NetworkEndian>, 8);
impl_signed_order!(i128, u128, U128<NetworkEndian>, 16);

macro_rules! impl_float_order {
    ($ty:ty, $uty:ty, $net:ty, $n:expr) => {
        impl OrderTransform<$ty> for DefaultOrder {
            type Bytes = [u8; $n];
            const BYTE_LEN: usize = $n;

            fn apply(key: $ty) -> Self::Bytes {
                let bits = key.to_bits();
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                let mapped = if bits & sign_bit != 0 {
                    // Negative (or -0.0): invert everything, so larger
                    // magnitude negatives sort before smaller ones.
                    !bits
                } else {
                    // Positive (or +0.0, or NaN with sign bit clear): set
                    // the sign bit so it sorts above every negative value.
                    bits | sign_bit
                };
                trace!("apply float {:?} -> bits {:#x} -> mapped {:#x}", key, bits, mapped);
                let net = <$net>::from(mapped);
                let mut out = [0u8; $n];
                out.copy_from_slice(net.as_bytes());
                out
            }

            fn restore(bytes: &Self::Bytes) -> $ty {
                let net = <$net>::ref_from_bytes(bytes.as_slice())
                    .expect("Bytes is exactly BYTE_LEN wide");
                let mapped = <$uty>::from(*net);
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                let bits = if mapped & sign_bit != 0 {
                    mapped ^ sign_bit
                } else {
                    !mapped
                };
                <$ty>::from_bits(bits)
            }
        }
    };
}

impl_float_order!(f32, u32, U32<NetworkEndian>, 4);
impl_float_order!(f64, u64, U64<NetworkEndian>, 8);
