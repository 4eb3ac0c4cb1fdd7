
pub trait ActExec {
    // apply, return exec value
    fn execute(&self, _: &mut dyn Context) -> Ret<Vec<u8>> { never!() }
    // undo exactly the mutations of a successful execute
    fn recover(&self, _: &mut dyn Context) -> Rerr { never!() }
}


pub trait Action : ActExec + Field + Send + Sync + DynClone {
    fn kind(&self) -> u16;
    fn req_sign(&self) -> Vec<Address> { vec![] } // request_need_sign_addresses
    fn as_any(&self) -> &dyn Any;
}

clone_trait_object!(Action);
