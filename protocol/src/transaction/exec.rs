
/*
* apply every action in order, a failure undoes the applied ones
*/
pub fn do_tx_execute(tx: &dyn TransactionRead, ctx: &mut dyn Context) -> Rerr {
    verify_tx_signature(tx)?;
    let actions = tx.actions();
    for (i, act) in actions.iter().enumerate() {
        if let Err(e) = execute_action(ctx, act.as_ref()) {
            log::warn!("tx {} action {} kind {} failed: {}, rollback {} applied", 
                tx.hash(), i, act.kind(), e, i);
            for done in actions[..i].iter().rev() {
                recover_action(ctx, done.as_ref())?;
            }
            return errf!("action {} execute error: {}", act.kind(), e)
        }
    }
    Ok(())
}


/*
* undo a fully applied tx, last action first
*/
pub fn do_tx_recover(tx: &dyn TransactionRead, ctx: &mut dyn Context) -> Rerr {
    for act in tx.actions().iter().rev() {
        recover_action(ctx, act.as_ref())?;
    }
    Ok(())
}
