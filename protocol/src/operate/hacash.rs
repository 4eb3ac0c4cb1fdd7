
macro_rules! check_amount_is_positive {
    ($amt:expr) => {
        if ! $amt.is_positive() {
            return errf!("amount {} value is not positive", $amt)
        }
    };
}


macro_rules! amount_op_func_define {
    ($fn:ident, $hac:ident, $addr:ident, $amt:ident, $exec:block) => (

        fn $fn(ctx: &mut dyn Context, $addr: &Address, $amt: &Amount) -> Ret<Amount> {
            $addr.check_version()?;
            let state = &mut CoreState::wrap(ctx.state());
            let mut bls = state.balance($addr).unwrap_or_default();
            let $hac = bls.hacash;
            let newhac = $exec; // do add or sub
            if newhac.size() > 12 {
                return errf!("address {} amount {} size {} over 12 can not to store", 
                    $addr.readable(), newhac, newhac.size())
            }
            bls.hacash = newhac.clone();
            balance_save(state, $addr, &bls);
            Ok(newhac)
        }

    )
}

amount_op_func_define!{do_hac_sub, hac, addr, amt, {
    if hac.less_than(amt) {
        return errf!("address {} balance {} is insufficient, at least {}", 
            addr.readable(), hac, amt)
    }
    hac.sub_mode_u128(amt)?
}}

amount_op_func_define!{do_hac_add, hac, addr, amt, {
    hac.add_mode_u128(amt)?
}}


// credit address
pub fn hac_add(ctx: &mut dyn Context, addr: &Address, amt: &Amount) -> Ret<Amount> {
    check_amount_is_positive!(amt);
    do_hac_add(ctx, addr, amt)
}


// debit address
pub fn hac_sub(ctx: &mut dyn Context, addr: &Address, amt: &Amount) -> Ret<Amount> {
    check_amount_is_positive!(amt);
    do_hac_sub(ctx, addr, amt)
}
