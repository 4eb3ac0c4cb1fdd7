
/*
* prove body backed by an on chain atomic swap receipt
*/
pub struct AtomicSwapBasis<'a> {
    pub receipt: &'a ChaswapSto,
    pub body: &'a ChannelChainTransferProveBody,
}

impl ArbitrationBasis for AtomicSwapBasis<'_> {

    prove_body_basis_fields!{}

    fn check_address_and_sign(&self, left: &Address, right: &Address) -> Rerr {
        self.body.check_format()?;
        if self.receipt.is_be_used.check() {
            return errf!("chaswap receipt already used")
        }
        let addrs = &self.receipt.must_sign_addresses;
        if ! addrs.contains(left) || ! addrs.contains(right) {
            return errf!("chaswap receipt signature address is missing")
        }
        Ok(())
    }

}
