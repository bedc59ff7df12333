use regman::Symbol;

#[derive(Symbol)]
enum Strategy {
    Fast,
    Thorough { depth: u32 },
}

fn main() {
    let fast = Strategy::Fast;
    let thorough = Strategy::Thorough { depth: 3 };
    assert_eq!(fast.symbol_name(), "Strategy");
    assert_eq!(thorough.symbol_name(), "Strategy");
    if let Strategy::Thorough { depth } = thorough {
        assert_eq!(depth, 3);
    }
}
