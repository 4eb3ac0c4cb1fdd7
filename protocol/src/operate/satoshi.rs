
macro_rules! satoshi_operate_define {
    ($func_name: ident, $addr:ident, $sat:ident, $oldsat:ident, $newsatblock:block) => (

        pub fn $func_name(ctx: &mut dyn Context, $addr: &Address, $sat: u64) -> Ret<u64> {
            $addr.check_version()?;
            if $sat == 0 {
                return errf!("satoshi value cannot zore")
            }
            let state = &mut CoreState::wrap(ctx.state());
            let mut userbls = state.balance($addr).unwrap_or_default();
            let $oldsat = userbls.satoshi.uint();
            let newsat: u64 = $newsatblock; // operate
            userbls.satoshi = Satoshi::from(newsat);
            balance_save(state, $addr, &userbls);
            Ok(newsat)
        }

    )
}


satoshi_operate_define!(sat_add, addr, sat, oldsat, {
    match oldsat.checked_add(sat) {
        Some(v) => v,
        None => return errf!("address {} satoshi overflow", addr.readable()),
    }
});

satoshi_operate_define!(sat_sub, addr, sat, oldsat, {
    if oldsat < sat {
        return errf!("address {} satoshi {} is insufficient, at least {}", 
            addr.readable(), oldsat, sat)
    }
    oldsat - sat
});
