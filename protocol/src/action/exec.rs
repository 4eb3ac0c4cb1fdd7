
/*
* all or nothing: a failed execute leaves the state as before
*/
pub fn execute_action(ctx: &mut dyn Context, act: &dyn Action) -> Ret<Vec<u8>> {
    let snapshot = ctx.state_fork();
    match act.execute(ctx) {
        Ok(res) => Ok(res),
        Err(e) => {
            ctx.state_replace(snapshot);
            Err(e)
        }
    }
}


pub fn recover_action(ctx: &mut dyn Context, act: &dyn Action) -> Rerr {
    act.recover(ctx)
}
