use regman::{Registry, Symbol};

#[derive(Clone, Symbol)]
struct JsonExporter {
    indent: usize,
}

fn main() {
    let exporter = JsonExporter { indent: 2 };
    assert_eq!(exporter.symbol_name(), "JsonExporter");

    let registry: Registry<JsonExporter> = Registry::new("exporters");
    let exporter = registry.register(None)(exporter).unwrap();
    assert_eq!(exporter.indent, 2);
    assert_eq!(registry.get("JsonExporter").unwrap().indent, 2);
}
