use super::*;


fn account(pass: &str) -> (Account, Address) {
    let acc = Account::create_by_password(pass).unwrap();
    let adr = Address::from(*acc.address());
    (acc, adr)
}

fn prove_body(direction: u8) -> ChannelChainTransferProveBody {
    ChannelChainTransferProveBody {
        channel_id: ChannelId::from([7u8; 16]),
        reuse_version: Uint4::from(1),
        bill_auto_number: Uint8::from(5),
        pay_direction: Uint1::from(direction),
        pay_amount: Amount::mei(3),
        pay_satoshi: SatoshiOptional::default(),
        left_balance: Amount::mei(97),
        right_balance: Amount::mei(53),
        left_satoshi: SatoshiOptional::default(),
        right_satoshi: SatoshiOptional::default(),
    }
}

fn transfer_form(musts: Vec<Address>, checkers: Vec<HashHalf>) -> ChannelChainTransferForm {
    ChannelChainTransferForm {
        content: ChannelChainTransferFormBody {
            timestamp: Timestamp::from(1730000000),
            order_note_hash_half: HashHalf::from([9u8; 16]),
            must_sign_addresses: AddressW1::from_list(musts).unwrap(),
            prove_hash_half_checkers: HashHalfW1::from_list(checkers).unwrap(),
        },
        signs: SignListW1::default(),
    }
}


#[test]
fn reconciliation_needs_both_signs() {
    let (lacc, ladr) = account("left");
    let (racc, radr) = account("right");
    let mut recon = RealtimeReconciliation {
        bill: ReconciliationBalanceBill {
            channel_id: ChannelId::from([1u8; 16]),
            reuse_version: Uint4::from(1),
            bill_auto_number: Uint8::from(2),
            left_balance: Amount::mei(60),
            right_balance: Amount::mei(90),
            left_satoshi: SatoshiOptional::default(),
            right_satoshi: SatoshiOptional::from_uint(8),
        },
        ..Default::default()
    };
    recon.fill_sign(&lacc, true);
    assert!(recon.check_address_and_sign(&ladr, &radr).is_err());
    recon.fill_sign(&racc, false);
    recon.check_address_and_sign(&ladr, &radr).unwrap();
    // sides swapped
    assert!(recon.check_address_and_sign(&radr, &ladr).is_err());
    assert_eq!(recon.side_bill(false), HacSat{ amount: Amount::mei(90), satoshi: SatoshiOptional::from_uint(8) });

    let (back, used) = RealtimeReconciliation::create(&recon.serialize()).unwrap();
    assert_eq!(used, recon.size());
    back.check_address_and_sign(&ladr, &radr).unwrap();

    let mut tampered = recon.clone();
    tampered.bill.bill_auto_number = Uint8::from(3);
    assert!(tampered.check_address_and_sign(&ladr, &radr).is_err());
}


#[test]
fn chain_transfer_checks_form_and_hash() {
    let (lacc, ladr) = account("left");
    let (racc, radr) = account("right");
    let (macc, madr) = account("middle");
    let body = prove_body(CHANNEL_PAY_DIRECTION_LEFT_TO_RIGHT);
    let mut form = transfer_form(vec![ladr, madr, radr], vec![HashHalf::from([3u8; 16]), body.hash_half_checker()]);
    form.fill_sign(&lacc).unwrap();
    form.fill_sign(&racc).unwrap();
    {
        let basis = ChannelChainTransferBasis{ form: &form, body: &body };
        assert!(basis.check_address_and_sign(&ladr, &radr).is_err()); // middle not signed
    }
    form.fill_sign(&macc).unwrap();
    let basis = ChannelChainTransferBasis{ form: &form, body: &body };
    basis.check_address_and_sign(&ladr, &radr).unwrap();
    assert_eq!(basis.bill_auto_number(), 5);
    assert!(basis.right_amount().equal(&Amount::mei(53)));

    // body not committed by the form
    let mut other = body.clone();
    other.bill_auto_number = Uint8::from(6);
    let basis = ChannelChainTransferBasis{ form: &form, body: &other };
    assert!(basis.check_address_and_sign(&ladr, &radr).is_err());
}


#[test]
fn chain_transfer_needs_channel_addresses() {
    let (lacc, ladr) = account("left");
    let (_, radr) = account("right");
    let (macc, madr) = account("middle");
    let body = prove_body(CHANNEL_PAY_DIRECTION_RIGHT_TO_LEFT);
    let mut form = transfer_form(vec![ladr, madr], vec![body.hash_half_checker()]);
    form.fill_sign(&lacc).unwrap();
    form.fill_sign(&macc).unwrap();
    form.check_must_address_and_signs().unwrap();
    let basis = ChannelChainTransferBasis{ form: &form, body: &body };
    assert!(basis.check_address_and_sign(&ladr, &radr).is_err());
}


#[test]
fn prove_body_direction_format() {
    assert!(prove_body(0).check_format().is_err());
    assert!(prove_body(3).check_format().is_err());
    prove_body(1).check_format().unwrap();
    prove_body(2).check_format().unwrap();
}


#[test]
fn atomic_swap_receipt_must_cover_both() {
    let (_, ladr) = account("left");
    let (_, radr) = account("right");
    let body = prove_body(CHANNEL_PAY_DIRECTION_LEFT_TO_RIGHT);
    let mut receipt = ChaswapSto {
        is_be_used: Bool::new(false),
        must_sign_addresses: AddressW1::from_list(vec![ladr]).unwrap(),
    };
    assert!(AtomicSwapBasis{ receipt: &receipt, body: &body }.check_address_and_sign(&ladr, &radr).is_err());
    receipt.must_sign_addresses.push(radr).unwrap();
    AtomicSwapBasis{ receipt: &receipt, body: &body }.check_address_and_sign(&ladr, &radr).unwrap();
    receipt.is_be_used = Bool::new(true);
    let err = AtomicSwapBasis{ receipt: &receipt, body: &body }.check_address_and_sign(&ladr, &radr).unwrap_err();
    assert!(err.contains("already used"));
}


#[test]
fn nothing_assertion_uses_channel_split() {
    let cid = ChannelId::from([2u8; 16]);
    let mut chan = ChannelSto::default();
    chan.reuse_version = Uint4::from(1);
    chan.left_bill.hacsat.amount = Amount::mei(10);
    chan.right_bill.hacsat.amount = Amount::mei(20);
    let basis = NothingAssertion::new(&cid, &chan);
    assert_eq!(basis.bill_auto_number(), 0);
    assert_eq!(basis.reuse_version(), 1);
    assert_eq!(basis.side_bill(true).amount, Amount::mei(10));
    assert!(!basis.side_bill(true).satoshi.is_exist());
    basis.check_address_and_sign(&Address::default(), &Address::default()).unwrap();
}
