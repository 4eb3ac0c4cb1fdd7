use base58check::*;
use libsecp256k1::{ SecretKey, PublicKey, Signature, Message };


pub const ADDRESS_SIZE: usize = 21;
pub const PRIVATE_SIZE: usize = 32;
pub const PUBLIC_SIZE: usize = 33;
pub const SIGNATURE_SIZE: usize = 64;


#[derive(Clone, PartialEq)]
pub struct Account {
    secret_key: SecretKey,
    public_key: PublicKey,
    address: [u8; ADDRESS_SIZE],
    address_readable: String,
}


impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[account {}]", self.address_readable)
    }
}


impl Account {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_SIZE] {
        self.public_key.serialize_compressed()
    }
    pub fn address(&self) -> &[u8; ADDRESS_SIZE] {
        &self.address
    }
    pub fn readable(&self) -> &String {
        &self.address_readable
    }
}


impl Account {

    pub fn create_by_password(pass: &str) -> Ret<Account> {
        Account::create_by_secret_key_value(sha2(pass))
    }

    pub fn create_by_secret_key_value(key32: [u8; PRIVATE_SIZE]) -> Ret<Account> {
        match SecretKey::parse(&key32) {
            Err(e) => errf!("secret key error: {}", e),
            Ok(sk) => Ok(Account::create_by_secret_key(&sk)),
        }
    }

    fn create_by_secret_key(seckey: &SecretKey) -> Account {
        let pubkey = PublicKey::from_secret_key(seckey);
        let address = Account::get_address_by_public_key(pubkey.serialize_compressed());
        let addrshow = Account::to_readable(&address);
        Account {
            secret_key: seckey.clone(),
            public_key: pubkey,
            address,
            address_readable: addrshow,
        }
    }

    pub fn get_address_by_public_key(pubkey: [u8; PUBLIC_SIZE]) -> [u8; ADDRESS_SIZE] {
        let dt = ripemd160(sha2(pubkey));
        let version = 0;
        let mut addr = [version; ADDRESS_SIZE];
        addr[1..].copy_from_slice(&dt[..]);
        addr
    }

    pub fn to_readable(addr: &[u8; ADDRESS_SIZE]) -> String {
        addr[1..].to_base58check(addr[0])
    }

    pub fn from_readable(s: &str) -> Ret<[u8; ADDRESS_SIZE]> {
        let Ok((version, body)) = s.from_base58check() else {
            return errf!("base58check error of address {}", s)
        };
        if body.len() != ADDRESS_SIZE - 1 {
            return errf!("address {} length error", s)
        }
        let mut addr = [version; ADDRESS_SIZE];
        addr[1..].copy_from_slice(&body);
        Ok(addr)
    }

}


// signature
impl Account {

    pub fn do_sign(&self, msg: &[u8; 32]) -> [u8; SIGNATURE_SIZE] {
        let msg = Message::parse(msg);
        let (s, _r) = libsecp256k1::sign(&msg, &self.secret_key);
        s.serialize()
    }

    pub fn verify_signature(msg: &[u8; 32], publickey: &[u8; PUBLIC_SIZE], signature: &[u8; SIGNATURE_SIZE]) -> bool {
        if let Ok(pubkey) = PublicKey::parse_compressed(publickey) {
            if let Ok(sigobj) = Signature::parse_standard(signature) {
                return libsecp256k1::verify(&Message::parse(msg), &sigobj, &pubkey)
            }
        }
        false
    }

}
