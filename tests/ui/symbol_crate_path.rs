use regman::Symbol;

mod shim {
    pub use regman::Symbol;
}

#[derive(Symbol)]
#[symbol(crate = "shim", name = "through_shim")]
struct Routed;

fn main() {
    assert_eq!(Routed.symbol_name(), "through_shim");
}
