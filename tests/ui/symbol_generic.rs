use std::marker::PhantomData;

use regman::Symbol;

#[derive(Symbol)]
struct Wrapper<T: Clone, const N: usize>
where
    T: Send,
{
    items: [T; N],
    marker: PhantomData<T>,
}

fn main() {
    let wrapper = Wrapper::<u8, 2> {
        items: [1, 2],
        marker: PhantomData,
    };
    assert_eq!(wrapper.symbol_name(), "Wrapper");
    assert_eq!(wrapper.items.len(), 2);
}
