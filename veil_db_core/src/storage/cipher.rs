/// Keyed byte transform applied to the serialized catalog before it is
/// written to disk, and inverse-applied on load.
///
/// Implementations must be involutions for any key:
/// `transform(transform(x, k), k) == x`.
pub trait Cipher {
    fn transform(&self, data: &[u8], key: &str) -> Vec<u8>;
}

/// Repeating-key XOR. Obfuscation only, not real confidentiality.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorCipher;

impl Cipher for XorCipher {
    fn transform(&self, data: &[u8], key: &str) -> Vec<u8> {
        let key = key.as_bytes();
        if key.is_empty() {
            return data.to_vec();
        }
        data.iter()
            .enumerate()
            .map(|(i, byte)| byte ^ key[i % key.len()])
            .collect()
    }
}
