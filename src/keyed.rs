//! The capability a payload needs to be stored in a [`Tree`][crate::Tree].

/// A payload that exposes an integer key. The tree orders payloads by this key
/// and nothing else, so two payloads with equal keys are both kept.
///
/// # Examples
///
/// ```
/// use keytree::{Keyed, Tree};
///
/// struct Account {
///     id: u32,
///     owner: &'static str,
/// }
///
/// impl Keyed for Account {
///     fn key(&self) -> i64 {
///         self.id.into()
///     }
/// }
///
/// let mut tree = Tree::new();
/// tree.insert(Account { id: 7, owner: "ann" });
///
/// assert_eq!(tree.find(7).map(|a| a.owner), Some("ann"));
/// ```
pub trait Keyed {
    /// The key used for searching/sorting this payload.
    fn key(&self) -> i64;
}

macro_rules! impl_keyed_for_int {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                fn key(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

impl_keyed_for_int!(i8, i16, i32, i64, u8, u16, u32);

/// Key/value records. Only the first element takes part in ordering.
impl<K: Keyed, V> Keyed for (K, V) {
    fn key(&self) -> i64 {
        self.0.key()
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> i64 {
        (**self).key()
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn key(&self) -> i64 {
        (**self).key()
    }
}
