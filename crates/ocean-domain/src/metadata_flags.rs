/// Flags byte passed to `setMetaData` describing how the DDO payload is encoded.
///
/// Bit 0 marks an xz-compressed payload, bit 1 a payload encrypted by the
/// data service provider. Both may be set; compression is applied first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MetadataFlags(u8);

impl MetadataFlags {
    const COMPRESSED: u8 = 0b01;
    const ENCRYPTED: u8 = 0b10;

    pub fn new(compressed: bool, encrypted: bool) -> Self {
        let mut bits = 0;
        if compressed {
            bits |= Self::COMPRESSED;
        }
        if encrypted {
            bits |= Self::ENCRYPTED;
        }
        Self(bits)
    }

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_compressed(&self) -> bool {
        self.0 & Self::COMPRESSED != 0
    }

    pub fn is_encrypted(&self) -> bool {
        self.0 & Self::ENCRYPTED != 0
    }

    /// On-chain `bytes` representation (a single byte).
    pub fn to_bytes(&self) -> Vec<u8> {
        vec![self.0]
    }
}
