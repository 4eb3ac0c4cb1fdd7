
/*
* action struct with kind prefix, apply and rollback bodies
*/
#[macro_export]
macro_rules! action_define {
    ($class:ident, $kid:expr, $reqsign:expr, 
        { $( $item:ident : $ty:ident )* },
        ($pself:ident, $pctx:ident $exec:expr),
        ($rself:ident, $rctx:ident $recover:expr)
    ) => {

        #[derive(Default, Debug, Clone, PartialEq, Eq)]
        pub struct $class {
            kind: Uint2,
            $(
                pub $item: $ty,
            )*
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let mut mv = self.kind.parse(buf)?;
                if *self.kind != Self::KIND {
                    return errf!("action kind need {} but got {}", Self::KIND, *self.kind)
                }
                $(
                    mv += self.$item.parse(&buf[mv..])?;
                )*
                Ok(mv)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                vec![
                    self.kind.serialize(),
                    $(
                        self.$item.serialize()
                    ),*
                ].concat()
            }
            fn size(&self) -> usize {
                [ 
                    self.kind.size(),
                    $(
                        self.$item.size()
                    ),*
                ].iter().sum()
            }
        }

        impl Field for $class {
            fn new() -> Self {
                Self {
                    kind: Uint2::from(Self::KIND),
                    ..Default::default()
                }
            }
        }

        impl ActExec for $class {
            fn execute(&$pself, $pctx: &mut dyn Context) -> Ret<Vec<u8>> {
                $exec
            }
            fn recover(&$rself, $rctx: &mut dyn Context) -> Rerr {
                $recover
            }
        }

        impl Action for $class {
            fn kind(&self) -> u16 { *self.kind }
            fn req_sign(&$pself) -> Vec<Address> { $reqsign.to_vec() } // request_need_sign_addresses
            fn as_any(&self) -> &dyn std::any::Any { self }
        }

        impl $class {
            pub const KIND: u16 = $kid;
        }

    };
}


#[macro_export]
macro_rules! action_register {
    ( $( $kty:ident )+ ) => {

        pub fn try_create(kind: u16, buf: &[u8]) -> Ret<Option<(Box<dyn Action>, usize)>> {
            match kind {
                $(<$kty>::KIND => {
                    let (act, sk) = <$kty>::create(buf)?;
                    Ok(Some((Box::new(act), sk)))
                },)+
                _ => Ok(None)
            }
        }

    };
}
