
pub struct ContextInst<'a> {
    pub env: Env,
    pub txr: &'a dyn TransactionRead,
    sta: Box<dyn State>,
    check_sign_cache: HashMap<Address, Rerr>,
}


impl ContextInst<'_> {

    pub fn new<'a>(env: Env, sta: Box<dyn State>, txr: &'a dyn TransactionRead) -> ContextInst<'a> {
        ContextInst{ env, sta, txr,
            check_sign_cache: HashMap::new(),
        }
    }

    pub fn release(self) -> Box<dyn State> {
        self.sta
    }

}


impl Context for ContextInst<'_> {

    fn env(&self) -> &Env { &self.env }

    fn state(&mut self) -> &mut dyn State { self.sta.as_mut() }

    fn state_replace(&mut self, sta: Box<dyn State>) -> Box<dyn State> {
        std::mem::replace(&mut self.sta, sta)
    }

    fn tx(&self) -> &dyn TransactionRead { self.txr }

    fn check_sign(&mut self, adr: &Address) -> Rerr {
        adr.must_privakey()?;
        if let Some(res) = self.check_sign_cache.get(adr) {
            return res.clone()
        }
        let isok = transaction::verify_target_signature(adr, self.txr);
        self.check_sign_cache.insert(*adr, isok.clone());
        isok
    }

}
