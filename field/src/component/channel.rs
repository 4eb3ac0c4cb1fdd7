
pub const CHANNEL_STATUS_OPENING: Uint1                 = Uint1::from(0);
pub const CHANNEL_STATUS_AGREEMENT_CLOSED: Uint1        = Uint1::from(1);
pub const CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED: Uint1 = Uint1::from(2);
pub const CHANNEL_STATUS_CHALLENGING: Uint1             = Uint1::from(3);


// ChallengePeriodData
combi_struct!{ ChallengePeriodData,
	is_have_challenge_log:           Bool
	challenge_launch_height:         BlockHeight
	arbitration_lock_block:          Uint2
	assert_address_is_left_or_right: Bool
	assert_bill_auto_number:         Uint8
	assert_bill:                     HacSat
}

combi_optional!{ ChallengePeriodDataOptional,
	challenge: ChallengePeriodData
}


// the right side is the channel total minus left
combi_struct!{ ClosedDistributionData,
	left_bill: HacSat
}

combi_optional!{ ClosedDistributionDataOptional,
	distribution: ClosedDistributionData
}


// ChannelSto
combi_struct!{ ChannelSto,
	status:          Uint1
	reuse_version:   Uint4
	open_height:     BlockHeight
	lock_block:      Uint2
	left_bill:       AddrHacSat
	right_bill:      AddrHacSat
	if_challenging:  ChallengePeriodDataOptional
	if_distribution: ClosedDistributionDataOptional
}


impl ChannelSto {

	pub fn is_opening(&self) -> bool {
		self.status == CHANNEL_STATUS_OPENING
	}

	pub fn is_challenging(&self) -> bool {
		self.status == CHANNEL_STATUS_CHALLENGING
	}

	pub fn is_closed(&self) -> bool {
		self.status == CHANNEL_STATUS_AGREEMENT_CLOSED ||
		self.status == CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED
	}

	// Some(true) for left, Some(false) for right
	pub fn side_of(&self, addr: &Address) -> Option<bool> {
		if *addr == self.left_bill.address {
			return Some(true)
		}
		if *addr == self.right_bill.address {
			return Some(false)
		}
		None
	}

	pub fn side_address(&self, is_left: bool) -> &Address {
		maybe!(is_left, &self.left_bill.address, &self.right_bill.address)
	}

	pub fn total_hacash(&self) -> Ret<Amount> {
		self.left_bill.hacsat.amount.add_mode_u64(&self.right_bill.hacsat.amount)
	}

	pub fn total_satoshi(&self) -> Ret<u64> {
		let (l, r) = (self.left_bill.hacsat.satoshi.uint(), self.right_bill.hacsat.satoshi.uint());
		match l.checked_add(r) {
			Some(t) => Ok(t),
			None => errf!("channel satoshi total overflow"),
		}
	}

}


// swap receipt
combi_struct!{ ChaswapSto,
	is_be_used:          Bool
	must_sign_addresses: AddressW1
}


#[cfg(test)]
mod channel_tests {
    use super::*;

    fn sample() -> ChannelSto {
        ChannelSto {
            status: CHANNEL_STATUS_CHALLENGING,
            reuse_version: Uint4::from(1),
            open_height: BlockHeight::from(1000),
            lock_block: Uint2::from(5000),
            left_bill: AddrHacSat {
                address: Address::from([0u8; 21]),
                hacsat: HacSat { amount: Amount::mei(100), satoshi: SatoshiOptional::from_uint(7) },
            },
            right_bill: AddrHacSat {
                address: Address::from([1u8; 21]),
                hacsat: HacSat { amount: Amount::mei(50), satoshi: SatoshiOptional::default() },
            },
            if_challenging: ChallengePeriodDataOptional::must(ChallengePeriodData {
                is_have_challenge_log: Bool::new(true),
                challenge_launch_height: BlockHeight::from(1200),
                arbitration_lock_block: Uint2::from(5000),
                assert_address_is_left_or_right: Bool::new(false),
                assert_bill_auto_number: Uint8::from(3),
                assert_bill: HacSat { amount: Amount::mei(20), satoshi: SatoshiOptional::default() },
            }),
            if_distribution: ClosedDistributionDataOptional::default(),
        }
    }

    #[test]
    fn store_layout_parses_back() {
        let chan = sample();
        let bts = chan.serialize();
        assert_eq!(bts.len(), chan.size());
        let (back, used) = ChannelSto::create(&bts).unwrap();
        assert_eq!(used, bts.len());
        assert_eq!(back, chan);
    }

    #[test]
    fn sides_and_totals() {
        let chan = sample();
        assert_eq!(chan.side_of(&Address::from([1u8; 21])), Some(false));
        assert_eq!(chan.side_of(&Address::from([2u8; 21])), None);
        assert!(chan.total_hacash().unwrap().equal(&Amount::mei(150)));
        assert_eq!(chan.total_satoshi().unwrap(), 7);
        assert!(chan.is_challenging() && !chan.is_closed());
    }
}
