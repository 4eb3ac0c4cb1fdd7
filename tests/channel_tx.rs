mod common;

use common::*;

use sys::*;
use field::*;
use protocol::action::*;
use protocol::interface::*;
use protocol::transaction::*;
use channel::action::*;
use channel::api::*;


fn open_close_tx(p: &Parties, close_id: ChannelId) -> TransactionType2 {
    let mut close = ChannelClose::new();
    close.channel_id = close_id;
    SignedTxBuilder::new(&p.lacc)
        .action(Box::new(open_action(p, Amount::mei(100), Amount::mei(50))))
        .action(Box::new(close))
        .signer(&p.racc)
        .build()
}

fn run_tx(sta: Box<dyn State>, height: u64, tx: &TransactionType2, is_recover: bool) -> (Box<dyn State>, Rerr) {
    let mut ctx = make_ctx_with_state(make_env(height, true), sta, tx);
    let res = match is_recover {
        false => do_tx_execute(tx, &mut ctx),
        true => do_tx_recover(tx, &mut ctx),
    };
    (ctx.release(), res)
}


#[test]
fn channel_actions_parse_by_kind() {
    let p = parties();
    let acts: Vec<Box<dyn Action>> = vec![
        Box::new(open_action(&p, Amount::mei(100), Amount::mei(50))),
        Box::new(close_by_nothing(p.ladr)),
        Box::new(arbitrate_by_reconciliation(p.radr, reconciliation(&p, 9, Amount::mei(1), Amount::mei(149)))),
        Box::new(claim_distribution()),
    ];
    for act in acts {
        let bts = act.serialize();
        let (back, used) = action_create(&bts).unwrap();
        assert_eq!(used, bts.len());
        assert_eq!(back.kind(), act.kind());
        assert_eq!(back.serialize(), bts);
    }
    let (back, _) = action_create(&close_by_nothing(p.ladr).serialize()).unwrap();
    let back = back.as_any().downcast_ref::<ChannelUnilateralCloseByNothing>().unwrap();
    assert_eq!(back.assert_address, p.ladr);
    assert!(action_create(&[0, 99, 1, 2]).is_err());
}


#[test]
fn required_signers_follow_kind() {
    let p = parties();
    assert_eq!(open_action(&p, Amount::mei(1), Amount::mei(1)).req_sign(), vec![p.ladr, p.radr]);
    assert!(ChannelClose::new().req_sign().is_empty());
    assert_eq!(close_by_nothing(p.radr).req_sign(), vec![p.radr]);
    assert!(claim_distribution().req_sign().is_empty());

    let tx = open_close_tx(&p, channel_id());
    assert_eq!(tx.req_sign(), vec![p.ladr, p.radr]);
    let tx = reparse_tx(&tx);
    tx.verify_signature().unwrap();
    // only main signed
    let tx = SignedTxBuilder::new(&p.lacc)
        .action(Box::new(open_action(&p, Amount::mei(1), Amount::mei(1))))
        .build();
    assert!(tx.verify_signature().is_err());
}


#[test]
fn open_and_close_in_one_tx() {
    let p = parties();
    let sta = funded_state(&p);
    let before = sta.as_mem().clone();
    let tx = reparse_tx(&open_close_tx(&p, channel_id()));
    let (sta, res) = run_tx(sta, OPEN_HEIGHT, &tx, false);
    res.unwrap();
    assert!(hacash_of(sta.as_ref(), &p.ladr).equal(&Amount::mei(1000)));
    assert_eq!(*channel_of(sta.as_ref()).status, 1);
    let (sta, res) = run_tx(sta, OPEN_HEIGHT, &tx, true);
    res.unwrap();
    assert_eq!(sta.as_mem(), &before);
}


#[test]
fn failed_action_undoes_whole_tx() {
    let p = parties();
    let sta = funded_state(&p);
    let before = sta.as_mem().clone();
    let mut other = [3u8; 16];
    other[15] = 4;
    let tx = open_close_tx(&p, ChannelId::from(other));
    let (sta, res) = run_tx(sta, OPEN_HEIGHT, &tx, false);
    let err = res.unwrap_err();
    assert!(err.contains("not find"), "{}", err);
    assert_eq!(sta.as_mem(), &before);
}


#[test]
fn unsigned_tx_is_rejected_before_any_action() {
    let p = parties();
    let sta = funded_state(&p);
    let before = sta.as_mem().clone();
    let tx = SignedTxBuilder::new(&p.lacc)
        .action(Box::new(open_action(&p, Amount::mei(100), Amount::mei(50))))
        .build();
    let (sta, res) = run_tx(sta, OPEN_HEIGHT, &tx, false);
    assert!(res.is_err());
    assert_eq!(sta.as_mem(), &before);
}


#[test]
fn channel_view_reports_challenge() {
    let p = parties();
    let (sta, res) = exec_at(opened(&p), 2000, &close_by_nothing(p.radr), &[&p.racc]);
    res.unwrap();
    let hexid = channel_id().to_hex();
    let data = channel_view(sta.as_ref(), &hexid, "mei").unwrap();
    assert_eq!(data["id"], hexid);
    assert_eq!(data["status"], 3);
    assert_eq!(data["status_name"], "challenging");
    assert_eq!(data["open_height"], OPEN_HEIGHT);
    assert_eq!(data["arbitration_lock"], 5000);
    assert_eq!(data["left"]["hacash"], "100");
    assert_eq!(data["right"]["address"], p.radr.readable());
    assert_eq!(data["challenging"]["launch_height"], 2000);
    assert_eq!(data["challenging"]["assert_address_is_left_or_right"], false);
    assert_eq!(data["challenging"]["assert_bill"]["hacash"], "50");
    assert!(data.get("distribution").is_none());

    assert!(channel_view(sta.as_ref(), "00ff", "mei").is_err());
    assert!(channel_view(sta.as_ref(), "not hex", "mei").is_err());
    assert!(channel_view(sta.as_ref(), &"11".repeat(16), "mei").is_err());

    let supply = supply_view(sta.as_ref());
    assert_eq!(supply["opening_channel"], 1);
    assert_eq!(supply["channel_deposit_zhu"], 150_0000_0000u64);
}


#[test]
fn setup_reads_test_network_flag() {
    let path = std::env::temp_dir().join(format!("paychan-setup-{}.ini", std::process::id()));
    std::fs::write(&path, "[chain]\nid = 7\ntest_network = true\n").unwrap();
    let cnf = paychan::setup(path.to_str().unwrap());
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cnf.chain_id, 7);
    assert!(cnf.test_network);
    let cnf = paychan::setup("/nonexistent/paychan.ini");
    assert!(!cnf.test_network);
}
