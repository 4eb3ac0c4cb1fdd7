#![allow(dead_code)]

use field::*;
use sys::*;
use protocol::action::*;
use protocol::interface::*;

use channel::action::*;
use channel::bill::*;
use channel::oprate::*;

pub use testkit::*;


pub const OPEN_HEIGHT: u64 = 1000;

pub fn channel_id() -> ChannelId {
    ChannelId::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16])
}

pub struct Parties {
    pub lacc: Account,
    pub ladr: Address,
    pub racc: Account,
    pub radr: Address,
}

pub fn parties() -> Parties {
    channel::init_setup();
    let (lacc, ladr) = test_account("channel-left");
    let (racc, radr) = test_account("channel-right");
    Parties { lacc, ladr, racc, radr }
}

/// both parties hold 1000 mei
pub fn funded_state(p: &Parties) -> Box<dyn State> {
    let mut sta = FlatMemState::boxed();
    seed_balance(sta.as_mut(), &p.ladr, Amount::mei(1000), 0);
    seed_balance(sta.as_mut(), &p.radr, Amount::mei(1000), 0);
    sta
}

pub fn open_action(p: &Parties, left: Amount, right: Amount) -> ChannelOpen {
    let mut act = ChannelOpen::new();
    act.channel_id = channel_id();
    act.left_bill = AddrHac { address: p.ladr, amount: left };
    act.right_bill = AddrHac { address: p.radr, amount: right };
    act
}

fn run_action<A>(sta: Box<dyn State>, height: u64, test_network: bool,
    act: &A, signers: &[&Account], is_recover: bool,
) -> (Box<dyn State>, Rerr)
    where A: Action + Clone + 'static
{
    let mut builder = SignedTxBuilder::new(signers[0]).action(Box::new(act.clone()));
    for acc in &signers[1..] {
        builder = builder.signer(acc);
    }
    let tx = builder.build();
    let mut ctx = make_ctx_with_state(make_env(height, test_network), sta, &tx);
    let res = match is_recover {
        false => execute_action(&mut ctx, act).map(|_|()),
        true => recover_action(&mut ctx, act),
    };
    (ctx.release(), res)
}

pub fn exec_at<A>(sta: Box<dyn State>, height: u64, act: &A, signers: &[&Account]) -> (Box<dyn State>, Rerr)
    where A: Action + Clone + 'static
{
    run_action(sta, height, true, act, signers, false)
}

pub fn exec_mainnet<A>(sta: Box<dyn State>, height: u64, act: &A, signers: &[&Account]) -> (Box<dyn State>, Rerr)
    where A: Action + Clone + 'static
{
    run_action(sta, height, false, act, signers, false)
}

pub fn recover_at<A>(sta: Box<dyn State>, height: u64, act: &A, signers: &[&Account]) -> (Box<dyn State>, Rerr)
    where A: Action + Clone + 'static
{
    run_action(sta, height, true, act, signers, true)
}

/// funded state with channel 100 / 50 opened at OPEN_HEIGHT
pub fn opened(p: &Parties) -> Box<dyn State> {
    let act = open_action(p, Amount::mei(100), Amount::mei(50));
    let (sta, res) = exec_at(funded_state(p), OPEN_HEIGHT, &act, &[&p.lacc, &p.racc]);
    res.unwrap();
    sta
}

pub fn channel_of(sta: &dyn State) -> ChannelSto {
    ChannelStateRead::wrap(sta).channel(&channel_id()).unwrap()
}

pub fn reconciliation(p: &Parties, number: u64, left: Amount, right: Amount) -> RealtimeReconciliation {
    let mut recon = RealtimeReconciliation {
        bill: ReconciliationBalanceBill {
            channel_id: channel_id(),
            reuse_version: Uint4::from(1),
            bill_auto_number: Uint8::from(number),
            left_balance: left,
            right_balance: right,
            left_satoshi: SatoshiOptional::default(),
            right_satoshi: SatoshiOptional::default(),
        },
        ..Default::default()
    };
    recon.fill_sign(&p.lacc, true);
    recon.fill_sign(&p.racc, false);
    recon
}

pub fn arbitrate_by_reconciliation(assert_address: Address, recon: RealtimeReconciliation) -> ChannelArbitrateByReconciliation {
    let mut act = ChannelArbitrateByReconciliation::new();
    act.assert_address = assert_address;
    act.reconciliation = recon;
    act
}

pub fn close_by_nothing(assert_address: Address) -> ChannelUnilateralCloseByNothing {
    let mut act = ChannelUnilateralCloseByNothing::new();
    act.channel_id = channel_id();
    act.assert_address = assert_address;
    act
}

pub fn claim_distribution() -> ChannelClaimDistribution {
    let mut act = ChannelClaimDistribution::new();
    act.channel_id = channel_id();
    act
}

pub type ChannelOpenCase = Box<dyn Fn(&mut ChannelOpen)>;
