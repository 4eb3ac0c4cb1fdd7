
/*
* running supply ledger
*/
combi_struct!{ TotalCount,
	opening_channel:      Uint8
	channel_deposit_zhu:  Uint8
	channel_interest_zhu: Uint8
	channel_deposit_sat:  Uint8
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalBucket {
	OpeningChannel,
	ChannelDeposit,
	ChannelInterest,
	ChannelDepositSat,
}


impl TotalCount {

	fn bucket(&mut self, b: TotalBucket) -> &mut Uint8 {
		match b {
			TotalBucket::OpeningChannel    => &mut self.opening_channel,
			TotalBucket::ChannelDeposit    => &mut self.channel_deposit_zhu,
			TotalBucket::ChannelInterest   => &mut self.channel_interest_zhu,
			TotalBucket::ChannelDepositSat => &mut self.channel_deposit_sat,
		}
	}

	pub fn add(&mut self, b: TotalBucket, v: u64) -> Rerr {
		let item = self.bucket(b);
		*item = item.checked_add_uint(v).map_err(|e|format!("total count {:?}: {}", b, e))?;
		Ok(())
	}

	pub fn sub(&mut self, b: TotalBucket, v: u64) -> Rerr {
		let item = self.bucket(b);
		*item = item.checked_sub_uint(v).map_err(|e|format!("total count {:?}: {}", b, e))?;
		Ok(())
	}

}
