use crate::decode::RlpDecoder;
use crate::encode;
use crate::error::Result;
use crate::item::RlpItem;
use bytes::{BufMut, Bytes, BytesMut};

/// A list item: its payload is the concatenation of zero or more fully
/// encoded child items.
///
/// Children are not materialized when the list is decoded; they are
/// views over the same buffer, produced on demand by [`elements`] or
/// [`iter`].
///
/// [`elements`]: RlpList::elements
/// [`iter`]: RlpList::iter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RlpList<'a>(pub(crate) RlpItem<'a>);

impl<'a> RlpList<'a> {
    /// The underlying item view.
    pub const fn item(&self) -> &RlpItem<'a> {
        &self.0
    }

    /// Widens back to an untyped item.
    pub const fn into_item(self) -> RlpItem<'a> {
        self.0
    }

    /// Eagerly decodes all direct children, in encounter order.
    ///
    /// Fails on the first malformed child; the caller sees either the
    /// complete sequence or an error, never a truncated one.
    pub fn elements(&self, decoder: RlpDecoder) -> Result<Vec<RlpItem<'a>>> {
        let mut out = Vec::new();
        let mut index = self.0.data_index;
        while index < self.0.end_index {
            let child = decoder.wrap_within(self.0.buffer, index, self.0.end_index)?;
            index = child.end_index;
            out.push(child);
        }
        Ok(out)
    }

    /// Lazy traversal: each child is decoded only when the iterator
    /// advances to it. Single-pass and forward-only; request a fresh
    /// iterator for a second pass.
    pub fn iter(&self, decoder: RlpDecoder) -> RlpListIter<'a> {
        RlpListIter {
            decoder,
            buffer: self.0.buffer,
            index: self.0.data_index,
            end_index: self.0.end_index,
        }
    }

    /// Rewraps this list's own encoding from offset 0, yielding a
    /// base-zero view over the same bytes.
    pub fn duplicate(&self, decoder: RlpDecoder) -> Result<RlpList<'a>> {
        decoder.wrap_list(self.0.encoding())
    }

    /// Encodes pre-encoded items as a list.
    ///
    /// Emits the short form for payloads under 56 bytes, otherwise the
    /// long form with a minimally encoded length, followed by each
    /// child's bytes in order. Pure construction: length arithmetic is
    /// always representable, so this cannot fail.
    pub fn with_elements(elements: &[RlpItem<'_>]) -> Bytes {
        let payload_length: usize = elements.iter().map(RlpItem::encoding_length).sum();
        let mut out = BytesMut::with_capacity(encode::length_of_length(payload_length) + payload_length);
        encode::put_header(true, payload_length, &mut out);
        for element in elements {
            out.put_slice(element.encoding());
        }
        out.freeze()
    }
}

impl<'a> std::ops::Deref for RlpList<'a> {
    type Target = RlpItem<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Single-pass forward-only traversal of a list's children.
///
/// Advancing decodes the next child. A malformed child surfaces as an
/// `Err` exactly when it is reached, and ends the iteration; "no more
/// elements" and "malformed next element" are distinct outcomes.
pub struct RlpListIter<'a> {
    decoder: RlpDecoder,
    buffer: &'a [u8],
    index: usize,
    end_index: usize,
}

impl<'a> Iterator for RlpListIter<'a> {
    type Item = Result<RlpItem<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end_index {
            return None
        }
        match self.decoder.wrap_within(self.buffer, self.index, self.end_index) {
            Ok(item) => {
                self.index = item.end_index();
                Some(Ok(item))
            }
            Err(e) => {
                self.index = self.end_index;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode_string, DecodeError, RLP_LENIENT, RLP_STRICT};
    use hex_literal::hex;

    #[test]
    fn dog_cat_list() {
        let buffer = hex!("c883646f6783636174");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        assert!(list.is_list());
        assert_eq!(list.data_length(), 8);

        let elements = list.elements(RLP_STRICT).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].data(), b"dog");
        assert_eq!(elements[1].data(), b"cat");
        assert_eq!(elements[0].as_str().unwrap(), "dog");
        assert_eq!(elements[1].as_str().unwrap(), "cat");
    }

    #[test]
    fn empty_list() {
        let buffer = hex!("c0");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        assert!(list.elements(RLP_STRICT).unwrap().is_empty());
        assert_eq!(list.iter(RLP_STRICT).count(), 0);
    }

    #[test]
    fn with_elements_roundtrip() {
        let dog = encode_string(b"dog");
        let cat = encode_string(b"cat");
        let items =
            [RLP_STRICT.wrap(&dog).unwrap(), RLP_STRICT.wrap(&cat).unwrap()];

        let encoded = RlpList::with_elements(&items);
        assert_eq!(encoded[..], hex!("c883646f6783636174")[..]);

        let list = RLP_STRICT.wrap_list(&encoded).unwrap();
        let elements = list.elements(RLP_STRICT).unwrap();
        assert_eq!(elements.len(), items.len());
        for (element, item) in elements.iter().zip(&items) {
            assert_eq!(element.encoding(), item.encoding());
        }
    }

    #[test]
    fn with_elements_long_form() {
        // Ten 6-byte encodings: 60 payload bytes forces the long form.
        let children: Vec<Bytes> = (0..10).map(|_| encode_string(b"abcde")).collect();
        let items: Vec<RlpItem<'_>> =
            children.iter().map(|c| RLP_STRICT.wrap(c).unwrap()).collect();

        let encoded = RlpList::with_elements(&items);
        assert_eq!(encoded[0], 0xF8);
        assert_eq!(encoded[1], 60);
        assert_eq!(encoded.len(), 62);

        let list = RLP_STRICT.wrap_list(&encoded).unwrap();
        assert_eq!(list.data_length(), 60);
        assert_eq!(list.elements(RLP_STRICT).unwrap().len(), 10);
    }

    #[test]
    fn with_elements_empty() {
        assert_eq!(RlpList::with_elements(&[])[..], hex!("c0")[..]);
    }

    #[test]
    fn nested_lists_share_the_buffer() {
        // [ [], [ "a" ] ]
        let buffer = hex!("c3c0c161");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        let elements = list.elements(RLP_STRICT).unwrap();
        assert_eq!(elements.len(), 2);

        let inner = elements[1].as_list().unwrap();
        let inner_elements = inner.elements(RLP_STRICT).unwrap();
        assert_eq!(inner_elements.len(), 1);
        assert_eq!(inner_elements[0].data(), b"a");
        // Same backing buffer, different offsets.
        assert_eq!(inner_elements[0].index(), 3);
    }

    #[test]
    fn lazy_iteration() {
        let buffer = hex!("c883646f6783636174");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();

        let mut iter = list.iter(RLP_STRICT);
        let dog = iter.next().unwrap().unwrap();
        assert_eq!(dog.data(), b"dog");
        let cat = iter.next().unwrap().unwrap();
        assert_eq!(cat.data(), b"cat");
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn malformed_child_aborts_eagerly() {
        // List payload declares a 3-byte string with only 1 byte left.
        let buffer = hex!("c28364");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        assert_eq!(
            list.elements(RLP_STRICT),
            Err(DecodeError::InputTooShort { offset: 1 })
        );
    }

    #[test]
    fn malformed_child_surfaces_lazily() {
        // First child decodes; the second overruns the list payload.
        let buffer = hex!("c4618364ff");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();

        let mut iter = list.iter(RLP_STRICT);
        assert_eq!(iter.next().unwrap().unwrap().data(), b"a");
        assert_eq!(
            iter.next().unwrap(),
            Err(DecodeError::InputTooShort { offset: 2 })
        );
        // The error fuses the iterator.
        assert!(iter.next().is_none());
    }

    #[test]
    fn mode_applies_to_children() {
        // [ 0x81 0x05 ]: the child uses a redundant single-byte header.
        let buffer = hex!("c28105");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        assert_eq!(
            list.elements(RLP_STRICT),
            Err(DecodeError::NonCanonicalSingleByte { offset: 2 })
        );

        let list = RLP_LENIENT.wrap_list(&buffer).unwrap();
        let elements = list.elements(RLP_LENIENT).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].data(), &hex!("05"));
    }

    #[test]
    fn duplicate_resets_the_base() {
        let buffer = hex!("ffffc883646f6783636174");
        let list = RLP_STRICT.wrap_list_at(&buffer, 2).unwrap();
        assert_eq!(list.index(), 2);

        let duplicated = list.duplicate(RLP_STRICT).unwrap();
        assert_eq!(duplicated.index(), 0);
        assert_eq!(duplicated.encoding(), list.encoding());
        assert_eq!(
            duplicated.elements(RLP_STRICT).unwrap(),
            list.elements(RLP_STRICT).unwrap()
        );
    }

    #[test]
    fn child_cannot_read_past_the_list() {
        // The list ends after "dog" but the buffer continues; a child
        // declared longer than the remaining payload must not reach
        // into the bytes that follow the list.
        let buffer = hex!("c483646f6783636174");
        let list = RLP_STRICT.wrap_list(&buffer).unwrap();
        let elements = list.elements(RLP_STRICT).unwrap();
        assert_eq!(elements.len(), 1);

        let buffer = hex!("c2836461616161");
        let list = RLP_STRICT.wrap_list_at(&buffer, 0);
        // Outer list is itself fine only if its payload fits.
        let list = list.unwrap();
        assert_eq!(
            list.elements(RLP_STRICT),
            Err(DecodeError::InputTooShort { offset: 1 })
        );
    }
}
