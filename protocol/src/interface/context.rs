
pub trait Context {
    fn env(&self) -> &Env;
    fn state(&mut self) -> &mut dyn State;
    fn state_replace(&mut self, _: Box<dyn State>) -> Box<dyn State>;
    fn check_sign(&mut self, _: &Address) -> Rerr;
    fn tx(&self) -> &dyn TransactionRead;

    fn state_fork(&mut self) -> Box<dyn State> {
        self.state().clone_state()
    }
}
