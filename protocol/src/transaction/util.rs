
/**
* verify tx all needs signature
*/
pub fn verify_tx_signature(tx: &dyn TransactionRead) -> Rerr {
    for adr in tx.req_sign() {
        verify_target_signature(&adr, tx)?;
    }
    Ok(())
}


pub fn verify_target_signature(adr: &Address, tx: &dyn TransactionRead) -> Rerr {
    let ckhx = maybe!(*adr == tx.main(), tx.hash_with_fee(), tx.hash());
    verify_one_sign(&ckhx, adr, tx.signs())
}


pub fn verify_one_sign(hash: &Hash, addr: &Address, signs: &Vec<Sign>) -> Rerr {
    for sig in signs {
        if sig.address() == *addr && sig.verify(hash) {
            return Ok(())
        }
    }
    errf!("{} verify signature failed", addr.readable())
}
