use ark_ec::Group;
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::utils::{Scalar, Vec};
use crate::{CipherSuite, Error, VssResult};

/// Utility trait for serializing a PVSS object to a vector of bytes.
pub trait ToBytes: CanonicalSerialize {
    /// Serialize this to a vector of bytes.
    fn to_bytes(&self) -> VssResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.compressed_size());

        <Self as CanonicalSerialize>::serialize_compressed(self, &mut bytes)
            .map_err(|_| Error::SerializationError)?;

        Ok(bytes)
    }
}

/// Utility trait for deserializing a PVSS object from a slice of bytes.
pub trait FromBytes: CanonicalDeserialize {
    /// Attempt to deserialize a `T` from a vector of bytes.
    fn from_bytes(bytes: &[u8]) -> VssResult<Self> {
        Self::deserialize_compressed(bytes).map_err(|_| Error::DeserializationError)
    }
}

/// Utility macro for easily deriving `ToBytes` and `FromBytes` traits.
macro_rules! impl_serialization_traits {
    ($type_name:ident <$gen_param:ident>) => {
        impl<$gen_param: crate::CipherSuite> crate::ToBytes for $type_name<$gen_param> {}
        impl<$gen_param: crate::CipherSuite> crate::FromBytes for $type_name<$gen_param> {}
    };
}
pub(crate) use impl_serialization_traits;

/// Major type 2 (byte string) with a one-byte length argument.
const BYTE_STRING_MARKER: u8 = 0x58;

/// Size of the frame prepended to every fixed-size encoding.
pub const FRAME_HEADER_SIZE: usize = 2;

/// Canonical fixed-size wire encoding.
///
/// The compressed arkworks encoding of the value is framed as a CBOR byte
/// string `0x58 || len || payload`. Over secp256k1 this yields 35 bytes for
/// points and 99 bytes for decrypted shares.
///
/// Decoding rejects any input whose length differs from
/// [`FixedSizeEncoding::encoded_size`] before touching its content.
pub trait FixedSizeEncoding: CanonicalSerialize + CanonicalDeserialize {
    /// Size of the unframed payload.
    fn payload_size() -> usize;

    /// Size of the full encoding, frame included.
    fn encoded_size() -> usize {
        FRAME_HEADER_SIZE + Self::payload_size()
    }

    /// Encode this value to its canonical fixed-size representation.
    fn to_fixed_bytes(&self) -> VssResult<Vec<u8>> {
        let payload_size = Self::payload_size();
        let length = u8::try_from(payload_size).map_err(|_| Error::SerializationError)?;

        let mut bytes = Vec::with_capacity(FRAME_HEADER_SIZE + payload_size);
        bytes.push(BYTE_STRING_MARKER);
        bytes.push(length);
        self.serialize_compressed(&mut bytes)
            .map_err(|_| Error::SerializationError)?;

        if bytes.len() != Self::encoded_size() {
            return Err(Error::SerializationError);
        }

        Ok(bytes)
    }

    /// Decode a value from its canonical fixed-size representation.
    fn from_fixed_bytes(bytes: &[u8]) -> VssResult<Self> {
        let expected = Self::encoded_size();
        if bytes.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                found: bytes.len(),
            });
        }

        if bytes[0] != BYTE_STRING_MARKER || bytes[1] as usize != Self::payload_size() {
            return Err(Error::InvalidFrameHeader);
        }

        Self::deserialize_compressed(&bytes[FRAME_HEADER_SIZE..])
            .map_err(|_| Error::DeserializationError)
    }
}

/// Compressed size of a group element of this [`CipherSuite`].
pub(crate) fn point_size<C: CipherSuite>() -> usize {
    C::G::generator().compressed_size()
}

/// Compressed size of a scalar of this [`CipherSuite`].
pub(crate) fn scalar_size<C: CipherSuite>() -> usize {
    Scalar::<C>::ONE.compressed_size()
}

/// Utility macro implementing [`FixedSizeEncoding`] for a newtype over a group element.
macro_rules! impl_point_encoding {
    ($type_name:ident <$gen_param:ident>) => {
        impl<$gen_param: crate::CipherSuite> crate::serialization::FixedSizeEncoding
            for $type_name<$gen_param>
        {
            fn payload_size() -> usize {
                crate::serialization::point_size::<$gen_param>()
            }
        }
    };
}
pub(crate) use impl_point_encoding;
