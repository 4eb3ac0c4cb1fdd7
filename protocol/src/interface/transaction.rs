
pub trait TransactionRead : Send + Sync {
    fn ty(&self) -> u8;
    fn hash(&self) -> Hash;
    // main address signs over the fee too
    fn hash_with_fee(&self) -> Hash;
    fn main(&self) -> Address;
    fn fee(&self) -> &Amount;
    fn timestamp(&self) -> u64;
    fn actions(&self) -> &Vec<Box<dyn Action>>;
    fn signs(&self) -> &Vec<Sign>;

    // main address first, no duplicates
    fn req_sign(&self) -> Vec<Address> {
        let mut addrs = vec![self.main()];
        for act in self.actions() {
            for adr in act.req_sign() {
                if ! addrs.contains(&adr) {
                    addrs.push(adr);
                }
            }
        }
        addrs
    }
}
