use sha2::Sha256;
use sha3::{Digest, Sha3_256};
use ripemd::Ripemd160;

pub const H32S: usize = 32;
pub const H16S: usize = 16;


pub fn calculate_hash(data: impl AsRef<[u8]>) -> [u8; H32S] {
    sha3(data)
}

// first half of the sha3-256 hash
pub fn calculate_hash_half(data: impl AsRef<[u8]>) -> [u8; H16S] {
    let hx = sha3(data);
    let mut res = [0u8; H16S];
    res.copy_from_slice(&hx[..H16S]);
    res
}

// sha3-256
pub fn sha3(data: impl AsRef<[u8]>) -> [u8; H32S] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

// sha2-256
pub fn sha2(data: impl AsRef<[u8]>) -> [u8; H32S] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

pub fn ripemd160(data: impl AsRef<[u8]>) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}


#[cfg(test)]
mod hash_tests {
    use super::*;

    #[test]
    fn sha3_empty_vector() {
        assert_eq!(hex::encode(sha3(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
        assert_eq!(calculate_hash_half(b"")[..], sha3(b"")[..16]);
    }
}
