use protocol::context::{ContextInst, Env};
use protocol::interface::{State, TransactionRead};
use protocol::transaction::TransactionType2;

pub fn make_env(height: u64, test_network: bool) -> Env {
    let mut env = Env::default();
    env.chain.test_network = test_network;
    env.block.height = height;
    env
}

pub fn make_ctx_with_state<'a>(
    env: Env,
    state: Box<dyn State>,
    tx: &'a dyn TransactionRead,
) -> ContextInst<'a> {
    ContextInst::new(env, state, tx)
}

pub fn make_ctx_with_default_tx(env: Env, state: Box<dyn State>) -> ContextInst<'static> {
    static DEFAULT_TX: std::sync::OnceLock<TransactionType2> = std::sync::OnceLock::new();
    let tx = DEFAULT_TX.get_or_init(TransactionType2::default);
    make_ctx_with_state(env, state, tx)
}
