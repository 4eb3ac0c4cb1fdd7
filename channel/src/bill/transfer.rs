
pub const CHANNEL_PAY_DIRECTION_LEFT_TO_RIGHT: u8 = 1;
pub const CHANNEL_PAY_DIRECTION_RIGHT_TO_LEFT: u8 = 2;


/*
* one channel hop of a multi channel payment,
* with the balances after paying
*/
combi_struct!{ ChannelChainTransferProveBody,
    channel_id:       ChannelId
    reuse_version:    Uint4
    bill_auto_number: Uint8
    pay_direction:    Uint1
    pay_amount:       Amount
    pay_satoshi:      SatoshiOptional
    left_balance:     Amount
    right_balance:    Amount
    left_satoshi:     SatoshiOptional
    right_satoshi:    SatoshiOptional
}


impl ChannelChainTransferProveBody {

    pub fn hash_half_checker(&self) -> HashHalf {
        HashHalf::from(calculate_hash_half(self.serialize()))
    }

    pub fn check_format(&self) -> Rerr {
        let dir = *self.pay_direction;
        if dir != CHANNEL_PAY_DIRECTION_LEFT_TO_RIGHT && dir != CHANNEL_PAY_DIRECTION_RIGHT_TO_LEFT {
            return errf!("channel pay direction {} error", dir)
        }
        if self.pay_amount.is_negative() {
            return errf!("channel pay amount {} cannot be negative", self.pay_amount)
        }
        Ok(())
    }

}


combi_struct!{ ChannelChainTransferFormBody,
    timestamp:                Timestamp
    order_note_hash_half:     HashHalf
    must_sign_addresses:      AddressW1
    prove_hash_half_checkers: HashHalfW1
}


/*
* the transfer form every hop party signs
*/
combi_struct!{ ChannelChainTransferForm,
    content: ChannelChainTransferFormBody
    signs:   SignListW1
}


impl ChannelChainTransferForm {

    pub fn sign_stuff_hash(&self) -> Hash {
        Hash::from(calculate_hash(self.content.serialize()))
    }

    pub fn fill_sign(&mut self, acc: &Account) -> Ret<Sign> {
        let sign = Sign::create_by(acc, &self.sign_stuff_hash());
        let mut list: Vec<Sign> = self.signs.as_list().iter()
            .filter(|s|s.publickey != sign.publickey).cloned().collect();
        list.push(sign.clone());
        self.signs = SignListW1::from_list(list)?;
        Ok(sign)
    }

    // every must sign address has one valid sign, no extra
    pub fn check_must_address_and_signs(&self) -> Rerr {
        let addrs = self.content.must_sign_addresses.as_list();
        if addrs.is_empty() {
            return errf!("transfer form must sign addresses cannot be empty")
        }
        if self.signs.length() != addrs.len() {
            return errf!("transfer form need {} signs but got {}", addrs.len(), self.signs.length())
        }
        let hx = self.sign_stuff_hash();
        for adr in addrs {
            let sign = must_have!(format!("sign of address {}", adr.readable()), self.signs.find(adr));
            sign.check(adr, &hx)?;
        }
        Ok(())
    }

}


/*
* prove body committed by a signed transfer form
*/
pub struct ChannelChainTransferBasis<'a> {
    pub form: &'a ChannelChainTransferForm,
    pub body: &'a ChannelChainTransferProveBody,
}

macro_rules! prove_body_basis_fields {
    () => {
        fn channel_id(&self) -> &ChannelId { &self.body.channel_id }
        fn reuse_version(&self) -> u32 { *self.body.reuse_version }
        fn bill_auto_number(&self) -> u64 { *self.body.bill_auto_number }
        fn left_amount(&self) -> &Amount { &self.body.left_balance }
        fn right_amount(&self) -> &Amount { &self.body.right_balance }
        fn left_satoshi(&self) -> u64 { self.body.left_satoshi.uint() }
        fn right_satoshi(&self) -> u64 { self.body.right_satoshi.uint() }
    };
}

impl ArbitrationBasis for ChannelChainTransferBasis<'_> {

    prove_body_basis_fields!{}

    fn check_address_and_sign(&self, left: &Address, right: &Address) -> Rerr {
        self.body.check_format()?;
        let hxhalf = self.body.hash_half_checker();
        if ! self.form.content.prove_hash_half_checkers.contains(&hxhalf) {
            return errf!("channel chain transfer prove body hash {} not find", hxhalf)
        }
        let musts = &self.form.content.must_sign_addresses;
        if ! musts.contains(left) || ! musts.contains(right) {
            return errf!("channel signature address is missing")
        }
        self.form.check_must_address_and_signs()
    }

}
