
// Sign Item
combi_struct!{ Sign, 
	publickey: Fixed33
	signature: Fixed64
}

impl Sign {

	pub fn create_by(acc: &Account, hx: &Hash) -> Sign {
		Sign {
			publickey: Fixed33::from(acc.public_key_bytes()),
			signature: Fixed64::from(acc.do_sign(hx)),
		}
	}

	pub fn address(&self) -> Address {
		Address::from(Account::get_address_by_public_key(*self.publickey))
	}

	pub fn verify(&self, hx: &Hash) -> bool {
		Account::verify_signature(hx, &self.publickey, &self.signature)
	}

	// signer must be the given address and signature valid
	pub fn check(&self, addr: &Address, hx: &Hash) -> Rerr {
		if self.address() != *addr {
			return errf!("sign address {} is not {}", self.address().readable(), addr.readable())
		}
		mayerr!(self.verify(hx), errf!("address {} signature verify failed", addr.readable()))
	}

}


// SignList MaxLen 255
combi_list!(SignListW1, Uint1, Sign);

// SignList MaxLen 65535
combi_list!(SignListW2, Uint2, Sign);


impl SignListW1 {

	pub fn find(&self, addr: &Address) -> Option<&Sign> {
		self.as_list().iter().find(|s|s.address()==*addr)
	}

}

impl SignListW2 {

	pub fn find(&self, addr: &Address) -> Option<&Sign> {
		self.as_list().iter().find(|s|s.address()==*addr)
	}

}
