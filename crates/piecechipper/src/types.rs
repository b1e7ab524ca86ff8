//! # Common Types

use core::fmt::Debug;
use core::hash::Hash;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// Any unsigned primitive integer wide enough for the vocabulary works;
/// `u32` is the common choice, `u16` suffices for 32k `llama` vocabularies.
pub trait TokenType:
    'static
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = ahash::AHashSet<V>;
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = foldhash::HashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Convert a token to a `u64` for reporting.
pub(crate) fn token_to_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn takes_token<T: TokenType>(t: T) -> u64 {
        token_to_u64(t)
    }

    #[test]
    fn test_token_types() {
        assert_eq!(takes_token(7u16), 7);
        assert_eq!(takes_token(70_000u32), 70_000);
        assert_eq!(takes_token(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_hash_aliases() {
        let mut map: PCHashMap<Vec<u8>, u32> = PCHashMap::default();
        map.insert(b"abc".to_vec(), 1);
        assert_eq!(map.get(b"abc".as_slice()), Some(&1));

        let mut set: PCHashSet<Vec<u8>> = PCHashSet::default();
        assert!(set.insert(b"x".to_vec()));
        assert!(!set.insert(b"x".to_vec()));
    }
}
