
pub type Address = Fixed21;


impl Address {

    pub const PRIVAKEY: u8 = 0; // leading symbol: 1
    pub const CONTRACT: u8 = 1;
    pub const SCRIPTMH: u8 = 5; // leading symbol: 3

    pub fn version(&self) -> u8 {
        self[0]
    }

    pub fn check_version(&self) -> Rerr {
        match self.version() {
            Self::PRIVAKEY | Self::CONTRACT | Self::SCRIPTMH => Ok(()),
            v => errf!("address version {} not support", v)
        }
    }

    pub fn is_privakey(&self) -> bool {
        self.version() == Self::PRIVAKEY
    }

    pub fn must_privakey(&self) -> Rerr {
        match self.is_privakey() {
            true => Ok(()),
            false => errf!("address {} is not PRIVAKEY type", self.readable())
        }
    }

    pub fn from_bytes(stuff: &[u8]) -> Ret<Self> {
        if stuff.len() != Self::SIZE {
            return errf!("address size not match")
        }
        let addr = Self::from_slice(stuff)?;
        addr.check_version()?;
        Ok(addr)
    }

    pub fn readable(&self) -> String {
        Account::to_readable(&self.bytes)
    }

}


impl Readable for Address {

    fn to_readable(&self) -> String {
        self.readable()
    }

    fn from_readable(s: &str) -> Ret<Self> {
        Self::from_bytes(&Account::from_readable(s)?)
    }

}


combi_list!{AddressW1, Uint1, Address}


#[cfg(test)]
mod address_tests {
    use super::*;

    #[test]
    fn readable_round_trip() {
        let acc = Account::create_by_password("123456").unwrap();
        let addr = Address::from(*acc.address());
        assert!(addr.must_privakey().is_ok());
        assert_eq!(addr.to_readable(), *acc.readable());
        assert_eq!(Address::from_readable(acc.readable()).unwrap(), addr);
        let mut bad = *acc.address();
        bad[0] = 9;
        assert!(Address::from_bytes(&bad).is_err());
    }
}
