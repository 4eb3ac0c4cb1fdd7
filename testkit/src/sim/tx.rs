use field::{Address, Amount, Field};
use protocol::interface::Action;
use protocol::transaction::TransactionType2;
use sys::Account;

pub const TEST_TX_TIMESTAMP: u64 = 1730000000;

/// Deterministic account from a seed string.
pub fn test_account(seed: &str) -> (Account, Address) {
    let acc = Account::create_by_password(seed).unwrap();
    let adr = Address::from(*acc.address());
    (acc, adr)
}

pub struct SignedTxBuilder {
    tx: TransactionType2,
    signers: Vec<Account>,
}

impl SignedTxBuilder {
    pub fn new(main: &Account) -> Self {
        let madr = Address::from(*main.address());
        let tx = TransactionType2::new_by(madr, Amount::zhu(1), TEST_TX_TIMESTAMP).unwrap();
        Self {
            tx,
            signers: vec![main.clone()],
        }
    }

    pub fn action(mut self, act: Box<dyn Action>) -> Self {
        self.tx.push_action(act).unwrap();
        self
    }

    pub fn signer(mut self, acc: &Account) -> Self {
        self.signers.push(acc.clone());
        self
    }

    pub fn build(mut self) -> TransactionType2 {
        for acc in &self.signers {
            self.tx.fill_sign(acc).unwrap();
        }
        self.tx
    }
}

/// Parse back from bytes, as a node receives it.
pub fn reparse_tx(tx: &TransactionType2) -> TransactionType2 {
    use field::Serialize;
    TransactionType2::build(&tx.serialize()).unwrap()
}
