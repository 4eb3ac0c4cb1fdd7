
combi_struct!{ ReconciliationBalanceBill,
    channel_id:       ChannelId
    reuse_version:    Uint4
    bill_auto_number: Uint8
    left_balance:     Amount
    right_balance:    Amount
    left_satoshi:     SatoshiOptional
    right_satoshi:    SatoshiOptional
}


/*
* off chain balance statement signed by both sides
*/
combi_struct!{ RealtimeReconciliation,
    bill:       ReconciliationBalanceBill
    left_sign:  Sign
    right_sign: Sign
}


impl RealtimeReconciliation {

    // sign stuff: bill without signs
    pub fn sign_stuff_hash(&self) -> Hash {
        Hash::from(calculate_hash(self.bill.serialize()))
    }

    pub fn fill_sign(&mut self, acc: &Account, is_left: bool) -> Sign {
        let sign = Sign::create_by(acc, &self.sign_stuff_hash());
        match is_left {
            true  => self.left_sign = sign.clone(),
            false => self.right_sign = sign.clone(),
        }
        sign
    }

}


impl ArbitrationBasis for RealtimeReconciliation {
    fn channel_id(&self) -> &ChannelId { &self.bill.channel_id }
    fn reuse_version(&self) -> u32 { *self.bill.reuse_version }
    fn bill_auto_number(&self) -> u64 { *self.bill.bill_auto_number }
    fn left_amount(&self) -> &Amount { &self.bill.left_balance }
    fn right_amount(&self) -> &Amount { &self.bill.right_balance }
    fn left_satoshi(&self) -> u64 { self.bill.left_satoshi.uint() }
    fn right_satoshi(&self) -> u64 { self.bill.right_satoshi.uint() }

    fn check_address_and_sign(&self, left: &Address, right: &Address) -> Rerr {
        let hx = self.sign_stuff_hash();
        self.left_sign.check(left, &hx)?;
        self.right_sign.check(right, &hx)
    }
}
