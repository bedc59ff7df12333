use regman::Symbol;

#[derive(Symbol)]
#[symbol(name = "csv")]
struct CsvExporter;

#[allow(non_camel_case_types)]
#[derive(Symbol)]
struct r#match;

fn main() {
    assert_eq!(CsvExporter.symbol_name(), "csv");
    assert_eq!(r#match.symbol_name(), "match");
}
