use std::any::Any;
use std::collections::HashMap;
use std::sync::Once;

use sys::*;
use field::*;

use crate::action::*;
use crate::context::*;
use crate::interface::*;
use crate::operate::*;
use crate::state::*;
use crate::transaction::*;


static INIT: Once = Once::new();

fn init_test_registry() {
    INIT.call_once(|| {
        action_register(test_try_create);
    });
}


#[derive(Default, Clone)]
struct TestMemState {
    mem: HashMap<Vec<u8>, Vec<u8>>,
}

impl State for TestMemState {
    fn get(&self, k: Vec<u8>) -> Option<Vec<u8>> {
        self.mem.get(&k).cloned()
    }
    fn set(&mut self, k: Vec<u8>, v: Vec<u8>) {
        self.mem.insert(k, v);
    }
    fn del(&mut self, k: Vec<u8>) {
        self.mem.remove(&k);
    }
    fn clone_state(&self) -> Box<dyn State> {
        Box::new(self.clone())
    }
    fn as_mem(&self) -> &MemMap {
        &self.mem
    }
}


/*
* credit then optionally fail, rollback debits
*/
#[derive(Default, Debug, Clone, PartialEq, Eq)]
struct TestCredit {
    kind: Uint2,
    to: Address,
    amount: Amount,
    fail: Bool,
}

impl TestCredit {
    const KIND: u16 = 0x07f0;

    fn create_by(to: Address, amount: Amount, fail: bool) -> Self {
        Self { kind: Uint2::from(Self::KIND), to, amount, fail: Bool::new(fail) }
    }
}

impl Parse for TestCredit {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut mv = self.kind.parse(buf)?;
        mv += self.to.parse(&buf[mv..])?;
        mv += self.amount.parse(&buf[mv..])?;
        mv += self.fail.parse(&buf[mv..])?;
        Ok(mv)
    }
}

impl Serialize for TestCredit {
    fn serialize(&self) -> Vec<u8> {
        vec![self.kind.serialize(), self.to.serialize(), self.amount.serialize(), self.fail.serialize()].concat()
    }
    fn size(&self) -> usize {
        self.kind.size() + self.to.size() + self.amount.size() + self.fail.size()
    }
}

impl Field for TestCredit {
    fn new() -> Self {
        Self { kind: Uint2::from(Self::KIND), ..Default::default() }
    }
}

impl ActExec for TestCredit {
    fn execute(&self, ctx: &mut dyn Context) -> Ret<Vec<u8>> {
        hac_add(ctx, &self.to, &self.amount)?;
        if self.fail.check() {
            return errf!("test credit fail")
        }
        Ok(vec![])
    }
    fn recover(&self, ctx: &mut dyn Context) -> Rerr {
        hac_sub(ctx, &self.to, &self.amount)?;
        Ok(())
    }
}

impl Action for TestCredit {
    fn kind(&self) -> u16 { *self.kind }
    fn as_any(&self) -> &dyn Any { self }
}

fn test_try_create(kind: u16, buf: &[u8]) -> Ret<Option<(Box<dyn Action>, usize)>> {
    if kind != TestCredit::KIND {
        return Ok(None)
    }
    let (act, sk) = TestCredit::create(buf)?;
    Ok(Some((Box::new(act), sk)))
}


fn account(pass: &str) -> (Account, Address) {
    let acc = Account::create_by_password(pass).unwrap();
    let adr = Address::from(*acc.address());
    (acc, adr)
}

fn hacash_of(sta: &dyn State, adr: &Address) -> Amount {
    CoreStateRead::wrap(sta).balance(adr).unwrap_or_default().hacash
}


#[test]
fn tx_parse_and_signature() {
    init_test_registry();
    let (main, madr) = account("main");
    let (_, other) = account("other");
    let mut tx = TransactionType2::new_by(madr, Amount::mei(1), 1730000000).unwrap();
    tx.push_action(Box::new(TestCredit::create_by(other, Amount::mei(5), false))).unwrap();
    assert!(tx.verify_signature().is_err());
    tx.fill_sign(&main).unwrap();
    tx.verify_signature().unwrap();
    assert!(tx.push_action(Box::new(TestCredit::create_by(other, Amount::mei(5), false))).is_err());

    let bts = tx.serialize();
    assert_eq!(bts.len(), tx.size());
    let (back, used) = TransactionType2::create(&bts).unwrap();
    assert_eq!(used, bts.len());
    assert_eq!(back.hash(), tx.hash());
    assert_eq!(back.actions().len(), 1);
    back.verify_signature().unwrap();

    let mut bad = bts.clone();
    bad[1] = 9; // timestamp
    let tampered = TransactionType2::build(&bad).unwrap();
    assert!(tampered.verify_signature().is_err());
}

#[test]
fn unknown_action_kind_rejected() {
    init_test_registry();
    assert!(action_create(&[0xff, 0xfe, 0]).is_err());
}

#[test]
fn failed_action_leaves_no_trace() {
    init_test_registry();
    let (main, madr) = account("main");
    let (_, other) = account("other");
    let mut tx = TransactionType2::new_by(madr, Amount::mei(1), 1730000000).unwrap();
    tx.push_action(Box::new(TestCredit::create_by(other, Amount::mei(5), false))).unwrap();
    tx.push_action(Box::new(TestCredit::create_by(other, Amount::mei(7), true))).unwrap();
    tx.fill_sign(&main).unwrap();

    let sta: Box<dyn State> = Box::new(TestMemState::default());
    let mut ctx = ContextInst::new(Env::default(), sta, &tx);
    let res = do_tx_execute(&tx, &mut ctx);
    assert!(res.is_err());
    let sta = ctx.release();
    assert!(hacash_of(sta.as_ref(), &other).is_zero());
    assert!(CoreStateRead::wrap(sta.as_ref()).balance(&other).is_none());
}

#[test]
fn tx_execute_then_recover() {
    init_test_registry();
    let (main, madr) = account("main");
    let (_, other) = account("other");
    let mut tx = TransactionType2::new_by(madr, Amount::mei(1), 1730000000).unwrap();
    tx.push_action(Box::new(TestCredit::create_by(other, Amount::mei(5), false))).unwrap();
    tx.push_action(Box::new(TestCredit::create_by(other, Amount::from("0.5").unwrap(), false))).unwrap();
    tx.fill_sign(&main).unwrap();

    let sta: Box<dyn State> = Box::new(TestMemState::default());
    let mut ctx = ContextInst::new(Env::default(), sta, &tx);
    do_tx_execute(&tx, &mut ctx).unwrap();
    assert!(hacash_of(ctx.state(), &other).equal(&Amount::from("5.5").unwrap()));
    do_tx_recover(&tx, &mut ctx).unwrap();
    assert!(CoreStateRead::wrap(ctx.state()).balance(&other).is_none());
}

#[test]
fn check_sign_caches_result() {
    let (main, madr) = account("main");
    let (_, other) = account("other");
    let mut tx = TransactionType2::new_by(madr, Amount::mei(1), 1730000000).unwrap();
    tx.fill_sign(&main).unwrap();
    let sta: Box<dyn State> = Box::new(TestMemState::default());
    let mut ctx = ContextInst::new(Env::default(), sta, &tx);
    ctx.check_sign(&madr).unwrap();
    ctx.check_sign(&madr).unwrap();
    assert!(ctx.check_sign(&other).is_err());
}

#[test]
fn balance_operate() {
    let (_, adr) = account("main");
    let tx = TransactionType2::new_by(adr, Amount::mei(1), 1730000000).unwrap();
    let sta: Box<dyn State> = Box::new(TestMemState::default());
    let mut ctx = ContextInst::new(Env::default(), sta, &tx);
    assert!(hac_sub(&mut ctx, &adr, &Amount::mei(1)).is_err());
    hac_add(&mut ctx, &adr, &Amount::mei(10)).unwrap();
    assert!(hac_sub(&mut ctx, &adr, &Amount::mei(11)).is_err());
    assert!(hac_add(&mut ctx, &adr, &Amount::zero()).is_err());
    sat_add(&mut ctx, &adr, 300).unwrap();
    assert!(sat_sub(&mut ctx, &adr, 301).is_err());
    sat_sub(&mut ctx, &adr, 300).unwrap();
    hac_sub(&mut ctx, &adr, &Amount::mei(10)).unwrap();
    assert!(CoreState::wrap(ctx.state()).balance(&adr).is_none());
    let mut tt = CoreState::wrap(ctx.state()).get_total_count();
    tt.add(TotalBucket::OpeningChannel, 1).unwrap();
    CoreState::wrap(ctx.state()).set_total_count(&tt);
    assert_eq!(*CoreStateRead::wrap(ctx.state()).get_total_count().opening_channel, 1);
}
