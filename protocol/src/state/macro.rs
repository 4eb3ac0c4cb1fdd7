
#[macro_export]
macro_rules! inst_state_get_key {
    ($idx:expr, $key:expr) => {{
        std::iter::once($idx as u8).chain($key.serialize()).collect::<Vec<u8>>()
    }}
}

// stored bytes that fail to parse mean a broken store
#[macro_export]
macro_rules! inst_state_get_or_none {
    ($self:ident, $key:ident, $idx:expr, $vty:ty) => {{
        let k = inst_state_get_key!($idx, $key);
        $self.sta.get(k).map(|v| match <$vty>::build(&v) {
            Ok(obj) => obj,
            Err(e) => never!("state item {} data broken: {}", stringify!($vty), e),
        })
    }}
}


#[macro_export]
macro_rules! inst_state_define {
    ($class:ident, $( $idx:expr, $kn:ident, $kty:ident : $vty:ident )+ ) => {

        concat_idents!{ classread = $class, Read {
            pub struct classread<'a> {
                sta: &'a dyn State,
            }

            impl<'a> classread<'a> {
                pub fn wrap(s: &'a dyn State) -> Self {
                    Self {
                        sta: s,
                    }
                }

                $(
                    pub fn $kn(&self, key: &$kty) -> Option<$vty> {
                        inst_state_get_or_none!(self, key, $idx, $vty)
                    }

                    concat_idents!{ get_stat = get_, $kn {
                    pub fn get_stat(&self) -> $vty {
                        let key = Empty::default();
                        inst_state_get_or_none!(self, key, $idx, $vty).unwrap_or_default()
                    }
                    }}
                )+
            }
        }}


        pub struct $class<'a> {
            sta: &'a mut dyn State,
        }

        impl<'a> $class<'a> {
            pub fn wrap(s: &'a mut dyn State) -> Self {
                Self {
                    sta: s,
                }
            }

            $(

                pub fn $kn(&self, key: &$kty) -> Option<$vty> {
                    inst_state_get_or_none!(self, key, $idx, $vty)
                }

                concat_idents!{ fn_exist = $kn, _exist {
                    pub fn fn_exist(&self, key: &$kty) -> bool {
                        let k = inst_state_get_key!($idx, key);
                        self.sta.get(k).is_some()
                    }
                }}

                concat_idents!{ fn_set = $kn, _set {
                    pub fn fn_set(&mut self, key: &$kty, v: &$vty) {
                        let k = inst_state_get_key!($idx, key);
                        self.sta.set(k, v.serialize())
                    }
                }}

                concat_idents!{ fn_del = $kn, _del {
                    pub fn fn_del(&mut self, key: &$kty) {
                        let k = inst_state_get_key!($idx, key);
                        self.sta.del(k)
                    }
                }}

                concat_idents!{ get_stat = get_, $kn {
                    pub fn get_stat(&self) -> $vty {
                        let key = Empty::default();
                        inst_state_get_or_none!(self, key, $idx, $vty).unwrap_or_default()
                    }
                }}

                concat_idents!{ set_stat = set_, $kn {
                    pub fn set_stat(&mut self, v: &$vty) {
                        self.sta.set(vec![$idx], v.serialize())
                    }
                }}

            )+

        }

    };
}
