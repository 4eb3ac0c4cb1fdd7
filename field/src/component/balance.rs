
combi_optional!{ SatoshiOptional, 
	satoshi: Satoshi 
}

impl SatoshiOptional {

	pub fn uint(&self) -> u64 {
		self.if_value().map(|s|s.uint()).unwrap_or(0)
	}

	// zero is stored as absent
	pub fn from_uint(v: u64) -> Self {
		Self::from_value(maybe!(v > 0, Some(Satoshi::from(v)), None))
	}

}


// AddrHac
combi_struct!{ AddrHac,
	address: Address
	amount : Amount
}

// HacAndSat
combi_struct!{ HacSat, 
	amount : Amount
	satoshi: SatoshiOptional
}

// AddrHacSat
combi_struct!{ AddrHacSat, 
	address: Address
	hacsat : HacSat
}


// Balance
combi_struct!{ Balance, 
	hacash:  Amount
	satoshi: Satoshi
}

impl Balance {

	pub fn hac(amt: Amount) -> Self {
		Self {
			hacash: amt,
			..Default::default()
		}
	}

}
