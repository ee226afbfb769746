/// A single stored pair of borrowed key and value text.
///
/// The entry never owns the text. The lifetime `'a` ties both references to
/// storage supplied by the caller, which must outlive the `AssocBuf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Entry<'a> {
    #[must_use]
    pub(crate) fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }

    /// Content equality, not pointer identity.
    #[must_use]
    pub(crate) fn matches(&self, key: &str) -> bool {
        self.key == key
    }
}
