
/*
* evidence for the unilateral close and challenge response
*/
pub trait ArbitrationBasis {
    fn channel_id(&self) -> &ChannelId;
    fn reuse_version(&self) -> u32;
    // per channel bill sequence, strictly increasing
    fn bill_auto_number(&self) -> u64;
    fn left_amount(&self) -> &Amount;
    fn right_amount(&self) -> &Amount;
    fn left_satoshi(&self) -> u64;
    fn right_satoshi(&self) -> u64;
    // both channel parties authorized the content
    fn check_address_and_sign(&self, left: &Address, right: &Address) -> Rerr;

    // asserted bill of one side
    fn side_bill(&self, is_left: bool) -> HacSat {
        let (amt, sat) = match is_left {
            true  => (self.left_amount(),  self.left_satoshi()),
            false => (self.right_amount(), self.right_satoshi()),
        };
        HacSat {
            amount: amt.clone(),
            satoshi: SatoshiOptional::from_uint(sat),
        }
    }
}


/*
* bare assertion: the channel's own deposit split, no signed evidence
*/
pub struct NothingAssertion<'a> {
    channel_id: &'a ChannelId,
    channel: &'a ChannelSto,
}

impl<'a> NothingAssertion<'a> {
    pub fn new(channel_id: &'a ChannelId, channel: &'a ChannelSto) -> Self {
        Self { channel_id, channel }
    }
}

impl ArbitrationBasis for NothingAssertion<'_> {
    fn channel_id(&self) -> &ChannelId { self.channel_id }
    fn reuse_version(&self) -> u32 { *self.channel.reuse_version }
    fn bill_auto_number(&self) -> u64 { 0 }
    fn left_amount(&self) -> &Amount { &self.channel.left_bill.hacsat.amount }
    fn right_amount(&self) -> &Amount { &self.channel.right_bill.hacsat.amount }
    fn left_satoshi(&self) -> u64 { self.channel.left_bill.hacsat.satoshi.uint() }
    fn right_satoshi(&self) -> u64 { self.channel.right_bill.hacsat.satoshi.uint() }
    fn check_address_and_sign(&self, _: &Address, _: &Address) -> Rerr {
        Ok(()) // asserter sign is checked on the transaction
    }
}
