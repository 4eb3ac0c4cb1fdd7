
#[derive(Default, Clone, Debug)]
pub struct TransactionType2 {
    pub ty: Uint1,
    pub timestamp: Timestamp,
    pub main: Address,
    pub fee: Amount,
    pub actions: DynListActionW1,
    pub signs: SignListW2,
}


impl Parse for TransactionType2 {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut mv = self.ty.parse(buf)?;
        if *self.ty != Self::TYPE {
            return errf!("transaction type need {} but got {}", Self::TYPE, *self.ty)
        }
        mv += self.timestamp.parse(&buf[mv..])?;
        mv += self.main.parse(&buf[mv..])?;
        mv += self.fee.parse(&buf[mv..])?;
        mv += self.actions.parse(&buf[mv..])?;
        mv += self.signs.parse(&buf[mv..])?;
        Ok(mv)
    }
}

impl Serialize for TransactionType2 {
    fn serialize(&self) -> Vec<u8> {
        vec![
            self.body_serialize(self.fee.serialize()),
            self.signs.serialize(),
        ].concat()
    }
    fn size(&self) -> usize {
        self.ty.size() + self.timestamp.size() + self.main.size() + self.fee.size()
            + self.actions.size() + self.signs.size()
    }
}

impl Field for TransactionType2 {
    fn new() -> Self {
        Self {
            ty: Uint1::from(Self::TYPE),
            ..Default::default()
        }
    }
}


impl TransactionRead for TransactionType2 {

    fn ty(&self) -> u8 {
        *self.ty
    }

    fn hash(&self) -> Hash {
        self.hash_ex(vec![]) // no fee field
    }

    fn hash_with_fee(&self) -> Hash {
        self.hash_ex(self.fee.serialize())
    }

    fn main(&self) -> Address {
        self.main
    }

    fn fee(&self) -> &Amount {
        &self.fee
    }

    fn timestamp(&self) -> u64 {
        *self.timestamp
    }

    fn actions(&self) -> &Vec<Box<dyn Action>> {
        self.actions.as_list()
    }

    fn signs(&self) -> &Vec<Sign> {
        self.signs.as_list()
    }

}


impl TransactionType2 {

    pub const TYPE: u8 = 2;

    pub fn new_by(addr: Address, fee: Amount, ts: u64) -> Ret<TransactionType2> {
        Ok(TransactionType2 {
            ty: Uint1::from(Self::TYPE),
            timestamp: Timestamp::from_u64(ts)?,
            main: addr,
            fee,
            ..Default::default()
        })
    }

    fn body_serialize(&self, fee: Vec<u8>) -> Vec<u8> {
        vec![
            self.ty.serialize(),
            self.timestamp.serialize(),
            self.main.serialize(),
            fee,
            self.actions.serialize(),
        ].concat()
    }

    // ignore signs data
    fn hash_ex(&self, adfe: Vec<u8>) -> Hash {
        Hash::from(sys::calculate_hash(self.body_serialize(adfe)))
    }

    pub fn push_action(&mut self, act: Box<dyn Action>) -> Rerr {
        if ! self.signs.as_list().is_empty() {
            return errf!("cannot append action after signed")
        }
        self.actions.push(act)
    }

    pub fn fill_sign(&mut self, acc: &Account) -> Ret<Sign> {
        let adr = Address::from(*acc.address());
        let fhx = maybe!(adr == self.main, self.hash_with_fee(), self.hash());
        let signobj = Sign::create_by(acc, &fhx);
        self.insert_sign(signobj.clone())?;
        Ok(signobj)
    }

    // replace the sign of the same public key
    fn insert_sign(&mut self, signobj: Sign) -> Rerr {
        let mut list: Vec<Sign> = self.signs.as_list().iter()
            .filter(|s|s.publickey != signobj.publickey).cloned().collect();
        list.push(signobj);
        self.signs = SignListW2::from_list(list)?;
        Ok(())
    }

    pub fn verify_signature(&self) -> Rerr {
        verify_tx_signature(self)
    }

}
