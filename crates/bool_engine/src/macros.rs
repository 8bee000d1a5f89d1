#[macro_export]
macro_rules! define_rule {
    (
        $(#[$meta:meta])*
        $struct_name:ident,
        $name_str:expr,
        $formula_str:expr,
        | $arg:ident | $body:block
    ) => {
        $(#[$meta])*
        pub struct $struct_name;

        impl $crate::rule::Rule for $struct_name {
            fn name(&self) -> &'static str {
                $name_str
            }

            fn formula(&self) -> &'static str {
                $formula_str
            }

            fn apply(&self, $arg: &std::rc::Rc<bool_ast::Expr>) -> Option<$crate::rule::Rewrite> {
                $body
            }
        }
    };
}
