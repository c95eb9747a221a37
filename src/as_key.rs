use std::borrow::Cow;

/// The `AsKey` trait allows a type to be used as a key in a `RadixTrie`.
///
/// Keys are sequences of characters. Types that already hold a `str` lend it
/// out; character collections are collected into an owned `String`.
///
pub trait AsKey {
    /// Returns the key as a string slice, borrowing when possible.
    fn as_key(&self) -> Cow<'_, str>;

    fn as_key_string(&self) -> String {
        self.as_key().into_owned()
    }
}

impl AsKey for str {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AsKey for String {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl AsKey for Box<str> {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AsKey for Cow<'_, str> {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl AsKey for char {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl AsKey for [char] {
    fn as_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.iter().collect())
    }
}

impl AsKey for Vec<char> {
    fn as_key(&self) -> Cow<'_, str> {
        self.as_slice().as_key()
    }
}

impl<const N: usize> AsKey for [char; N] {
    fn as_key(&self) -> Cow<'_, str> {
        self.as_slice().as_key()
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Cow<'_, str> {
        T::as_key(*self)
    }
}
